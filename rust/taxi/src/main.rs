use custom_taxi::*;
use gymnasium::mdps::RandomPolicy;
use serde_json::{to_value, Value};
use tracing_subscriber::EnvFilter;

/// Usage: `custom-taxi [key=value ...]`, e.g. `custom-taxi rows=8 cols=8 locs=6 seed=2718`.
/// Set `RUST_LOG=custom_taxi=debug` to see map generation.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let mut kwargs = Vec::new();
    for arg in &args {
        let (k, v) = arg
            .split_once('=')
            .ok_or_else(|| TaxiError::InvalidConfig(format!("expected key=value, got {arg:?}")))?;
        let v = serde_json::from_str::<Value>(v).unwrap_or_else(|_| Value::String(v.to_string()));
        kwargs.push((k, v));
    }
    if !kwargs.iter().any(|(k, _)| *k == "max_episode_steps") {
        kwargs.push(("max_episode_steps", to_value(200)?));
    }

    let config = TaxiConfig::from_kwargs(&kwargs)?;
    let seed = config.seed;
    let mut env = CustomTaxi::new(config)?;

    println!("{}\n", env.map());
    println!("observation space:\n{:?}\n", env.observation_space());
    println!("action space:\n{:?}\n", env.action_space());

    let mut policy = RandomPolicy::new(env.action_space(), seed);
    let ep = env.rollout(&mut policy, seed)?;
    let tot_reward = ep.iter().map(|e| e.r).sum::<f64>();
    println!("{}", env.render());
    println!(
        "Finished episode in {} steps with total reward {}",
        ep.len() - 1,
        tot_reward
    );

    Ok(())
}
