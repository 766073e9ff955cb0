use crate::*;

/// Maps an observed state to the action to take in it.
pub trait Policy {
    fn policy(&mut self, s: &Discrete) -> Discrete;
}
