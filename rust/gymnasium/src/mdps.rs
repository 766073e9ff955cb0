use super::*;
use crate::common::defs::Policy;
use rand::prelude::*;

/// Ignores the state and samples uniformly from the action space.
pub struct RandomPolicy {
    pub act_space: DiscreteSpace,
    rng: StdRng,
}

impl RandomPolicy {
    pub fn new(act_space: DiscreteSpace, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self { act_space, rng }
    }
}

impl Policy for RandomPolicy {
    fn policy(&mut self, _s: &Discrete) -> Discrete {
        self.act_space.sample(&mut self.rng)
    }
}
