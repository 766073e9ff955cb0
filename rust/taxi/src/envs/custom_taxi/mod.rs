//! Taxi on a randomly generated grid with a configurable number of named locations.
//!
//! Adapted from "Hierarchical Reinforcement Learning with the MAXQ Value Function Decomposition"
//! by Tom Dietterich. The taxi drives to the passenger's location, picks the passenger up, drives
//! to the destination and drops the passenger off, which ends the episode.
//!
//! Actions:
//! - 0: move south
//! - 1: move north
//! - 2: move east
//! - 3: move west
//! - 4: pickup passenger
//! - 5: dropoff passenger
//!
//! Rewards: -1 per step, +20 for delivering the passenger, -10 for an illegal pickup or dropoff.
//!
//! Rendering:
//! - blue: passenger
//! - magenta: destination
//! - yellow: empty taxi
//! - green: full taxi

pub mod action;
pub mod builder;
pub mod codec;
pub mod map;
mod render;

pub use action::Action;
pub use codec::{StateCodec, TaxiState};
pub use map::TaxiMap;

use crate::config::TaxiConfig;
use crate::error::{Result, TaxiError};
use crate::mdps::mdp::{Mdp, TabularMdp};
use crate::mdps::mdp_simulator::{pick_initial, pick_next};
use gymnasium::common::defs::Policy;
use gymnasium::*;
use rand::prelude::*;
use serde_json::json;
use std::borrow::Cow;
use std::rc::Rc;
use tracing::trace;

#[derive(Debug)]
pub struct CustomTaxi {
    config: TaxiConfig,
    map: TaxiMap,
    codec: StateCodec,
    mdp: TabularMdp,
    rng: StdRng,
    s: Option<Discrete>,
    ready: bool,
    last_action: Option<Action>,
    elapsed_steps: usize,
}

impl CustomTaxi {
    /// Generates a map from `config` and builds its transition table.
    pub fn new(config: TaxiConfig) -> Result<Self> {
        config.validate()?;
        let mut rng = seeded(config.seed);
        let map = TaxiMap::sample(&config, &mut rng)?;

        Self::build(map, config, rng)
    }

    /// Uses a fixed map. Only the seed and episode settings of `config` apply.
    pub fn with_map(map: TaxiMap, config: TaxiConfig) -> Result<Self> {
        let rng = seeded(config.seed);

        Self::build(map, config, rng)
    }

    fn build(map: TaxiMap, config: TaxiConfig, rng: StdRng) -> Result<Self> {
        let codec = StateCodec::new(map.rows(), map.cols(), map.locs().len());
        let mdp = builder::build(&map, &codec)?;

        Ok(Self {
            config,
            map,
            codec,
            mdp,
            rng,
            s: None,
            ready: false,
            last_action: None,
            elapsed_steps: 0,
        })
    }

    pub fn config(&self) -> &TaxiConfig {
        &self.config
    }

    pub fn map(&self) -> &TaxiMap {
        &self.map
    }

    pub fn codec(&self) -> &StateCodec {
        &self.codec
    }

    pub fn mdp(&self) -> &TabularMdp {
        &self.mdp
    }

    pub fn table(&self) -> Rc<Transitions> {
        self.mdp.table()
    }

    pub fn observation_space(&self) -> DiscreteSpace {
        DiscreteSpace::new(self.mdp.n_s())
    }

    pub fn action_space(&self) -> DiscreteSpace {
        DiscreteSpace::new(self.mdp.n_a())
    }

    pub fn encode(
        &self,
        taxi_row: usize,
        taxi_col: usize,
        passenger: usize,
        destination: usize,
    ) -> Result<Discrete> {
        self.codec
            .encode(TaxiState::new(taxi_row, taxi_col, passenger, destination))
    }

    pub fn decode(&self, s: Discrete) -> Result<TaxiState> {
        self.codec.decode(s)
    }

    /// Current state, `None` before the first reset.
    pub fn state(&self) -> Option<Discrete> {
        self.s
    }

    /// Puts the taxi in `s` and readies the environment for stepping from there.
    pub fn set_state(&mut self, s: Discrete) -> Result<()> {
        self.codec.decode(s)?;
        self.s = Some(s);
        self.ready = true;
        self.last_action = None;
        self.elapsed_steps = 0;

        Ok(())
    }

    /// Samples a start state. A seed reseeds the environment's generator first.
    pub fn reset(&mut self, seed: Option<u64>) -> Result<Discrete> {
        if let Some(seed) = seed {
            self.rng = StdRng::seed_from_u64(seed);
        }

        let s = pick_initial(&mut self.rng, self.mdp.initial_state_distribution())?;
        self.set_state(s)?;
        trace!(s, "reset");

        Ok(s)
    }

    pub fn step(&mut self, a: Discrete) -> Result<StepInfo> {
        let s = match self.s {
            Some(s) if self.ready => s,
            _ => return Err(TaxiError::EnvNotReady),
        };
        let action = Action::try_from(a)?;

        let ts = self.mdp.transitions(s, a);
        let t: Transition = pick_next(&mut self.rng, &ts[..])?;
        self.s = Some(t.next_state);
        self.last_action = Some(action);
        self.elapsed_steps += 1;

        let truncated = !t.done
            && self
                .config
                .max_episode_steps
                .is_some_and(|m| self.elapsed_steps >= m);
        if t.done || truncated {
            self.ready = false;
        }
        trace!(s, a, next = t.next_state, reward = t.reward, done = t.done, "step");

        Ok(StepInfo {
            observation: t.next_state,
            reward: t.reward,
            truncated,
            terminated: t.done,
            info: json!({ "prob": t.probability }),
        })
    }

    /// Runs one episode from a fresh reset until it terminates or is truncated.
    pub fn rollout(
        &mut self,
        policy: &mut dyn Policy,
        seed: Option<u64>,
    ) -> Result<Vec<EpisodeEvent>> {
        let mut s = self.reset(seed)?;
        let mut ep = vec![EpisodeEvent { s, r: 0. }];
        loop {
            let si = self.step(policy.policy(&s))?;
            ep.push(EpisodeEvent {
                s: si.observation,
                r: si.reward,
            });
            if si.terminated || si.truncated {
                return Ok(ep);
            }

            s = si.observation;
        }
    }
}

impl Mdp for CustomTaxi {
    fn n_s(&self) -> usize {
        self.mdp.n_s()
    }

    fn n_a(&self) -> usize {
        self.mdp.n_a()
    }

    fn transitions(&self, s: Discrete, a: Discrete) -> Cow<'_, [Transition]> {
        self.mdp.transitions(s, a)
    }

    fn initial_state_distribution(&self) -> &[Continous] {
        self.mdp.initial_state_distribution()
    }
}

fn seeded(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
