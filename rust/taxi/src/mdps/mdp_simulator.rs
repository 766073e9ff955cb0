use crate::error::Result;
use gymnasium::{Continous, Discrete, Transition};
use rand::distributions::WeightedIndex;
use rand::prelude::*;

pub trait Weighted<S> {
    fn s(&self) -> S;

    fn p(&self) -> Continous;
}

impl Weighted<Transition> for Transition {
    fn s(&self) -> Transition {
        *self
    }

    fn p(&self) -> Continous {
        self.probability
    }
}

/// Samples one item in proportion to its weight.
pub fn pick_next<T, S, R>(rng: &mut R, ts: &[T]) -> Result<S>
where
    T: Weighted<S>,
    R: Rng + ?Sized,
{
    let dist = WeightedIndex::new(ts.iter().map(|item| item.p()))?;
    Ok(ts[dist.sample(rng)].s())
}

/// Samples a start state from an initial-state distribution.
pub fn pick_initial<R: Rng + ?Sized>(rng: &mut R, isd: &[Continous]) -> Result<Discrete> {
    let dist = WeightedIndex::new(isd)?;
    Ok(dist.sample(rng))
}
