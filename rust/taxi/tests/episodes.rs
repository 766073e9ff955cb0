extern crate custom_taxi;
extern crate gymnasium;
mod common;

use common::*;
use custom_taxi::*;
use gymnasium::mdps::RandomPolicy;

#[test]
fn step_before_reset_is_rejected() {
    let mut env = open_3x3(None);
    assert_eq!(env.state(), None);
    assert!(matches!(env.step(0), Err(TaxiError::EnvNotReady)));
}

#[test]
fn unknown_action_is_rejected() {
    let mut env = open_3x3(None);
    env.reset(None).unwrap();
    assert!(matches!(env.step(6), Err(TaxiError::InvalidAction(6))));
}

#[test]
fn reset_lands_on_a_valid_start_state() {
    let mut env = open_3x3(None);
    for seed in 0..50 {
        let s = env.reset(Some(seed)).unwrap();
        let st = env.decode(s).unwrap();
        assert!(st.passenger < 2);
        assert_ne!(st.passenger, st.destination);
        assert!(env.initial_state_distribution()[s] > 0.);
    }
}

#[test]
fn seeded_resets_repeat() {
    let mut env = open_3x3(None);
    let a = env.reset(Some(2718)).unwrap();
    let b = env.reset(Some(2718)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn delivery_terminates_and_blocks_further_steps() {
    let mut env = open_3x3(None);
    env.set_state(env.encode(0, 0, 0, 1).unwrap()).unwrap();

    let plan = [
        Action::Pickup,
        Action::South,
        Action::South,
        Action::East,
        Action::East,
        Action::Dropoff,
    ];
    let mut total = 0.;
    let mut last = None;
    for a in plan {
        let si = env.step(a.id()).unwrap();
        assert_eq!(si.info["prob"], 1.0);
        total += si.reward;
        last = Some(si);
    }

    let last = last.unwrap();
    assert!(last.terminated);
    assert!(!last.truncated);
    assert_eq!(
        env.decode(last.observation).unwrap(),
        TaxiState::new(2, 2, 1, 1)
    );
    assert_eq!(total, 15.);
    assert!(matches!(env.step(0), Err(TaxiError::EnvNotReady)));
}

#[test]
fn episodes_are_truncated() {
    let mut env = open_3x3(Some(3));
    env.set_state(env.encode(0, 0, 0, 1).unwrap()).unwrap();

    assert!(!env.step(Action::North.id()).unwrap().truncated);
    assert!(!env.step(Action::North.id()).unwrap().truncated);
    let si = env.step(Action::North.id()).unwrap();
    assert!(si.truncated);
    assert!(!si.terminated);
    assert!(matches!(env.step(0), Err(TaxiError::EnvNotReady)));
}

#[test]
fn random_rollout_ends() {
    let mut env = open_3x3(Some(50));
    let mut policy = RandomPolicy::new(env.action_space(), Some(1));
    let ep = env.rollout(&mut policy, Some(1)).unwrap();

    assert!(ep.len() >= 2);
    assert!(ep.len() <= 51);
    assert_eq!(ep[0].r, 0.);
    assert!(ep[1..].iter().all(|e| [-10., -1., 20.].contains(&e.r)));
}
