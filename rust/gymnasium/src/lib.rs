extern crate rand;
extern crate serde;
extern crate serde_json;

pub mod common;
pub mod mdps;

use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

pub type Discrete = usize;
pub type Continous = f64;

/// A finite set of integers `{0, 1, ..., n - 1}`.
/// Refer: https://www.gymlibrary.dev/api/spaces/#discrete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscreteSpace {
    pub n: Discrete,
}

impl DiscreteSpace {
    pub fn new(n: Discrete) -> Self {
        Self { n }
    }

    pub fn contains(&self, x: Discrete) -> bool {
        x < self.n
    }

    /// Uniformly samples an element. Panics for an empty space.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Discrete {
        rng.gen_range(0..self.n)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderFrame {
    Ansi(String),
}

impl RenderFrame {
    pub fn as_str(&self) -> &str {
        match self {
            RenderFrame::Ansi(s) => s,
        }
    }
}

impl fmt::Display for RenderFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub probability: Continous,
    pub next_state: Discrete,
    pub reward: Continous,
    pub done: bool,
}

impl Transition {
    pub fn deterministic(next_state: Discrete, reward: Continous, done: bool) -> Self {
        Self {
            probability: 1.0,
            next_state,
            reward,
            done,
        }
    }
}

/// Keyed by `(state, action)`.
pub type Transitions = HashMap<(Discrete, Discrete), Vec<Transition>>;

#[derive(Debug, Clone, PartialEq)]
pub struct StepInfo {
    pub observation: Discrete,
    pub reward: Continous,
    pub truncated: bool,
    pub terminated: bool,
    pub info: Value,
}

/// One step of an episode: the state reached and the reward received on the way there.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EpisodeEvent {
    pub s: Discrete,
    pub r: Continous,
}
