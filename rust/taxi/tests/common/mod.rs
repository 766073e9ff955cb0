use custom_taxi::*;

/// 3x3, no walls, location 0 at (0, 0) and location 1 at (2, 2).
pub const OPEN_3X3: [&str; 5] = ["+-----+", "|0: : |", "| : : |", "| : :1|", "+-----+"];

#[allow(dead_code)]
pub fn open_3x3(max_episode_steps: Option<usize>) -> CustomTaxi {
    let map = TaxiMap::from_desc(&OPEN_3X3).unwrap();
    let config = TaxiConfig {
        seed: Some(2718),
        max_episode_steps,
        ..Default::default()
    };
    CustomTaxi::with_map(map, config).unwrap()
}

#[allow(dead_code)]
pub fn only_transition(env: &CustomTaxi, s: usize, a: Action) -> gymnasium::Transition {
    let ts = env.transitions(s, a.id());
    assert_eq!(ts.len(), 1, "({s}, {a:?}) should have a single outcome");
    ts[0]
}
