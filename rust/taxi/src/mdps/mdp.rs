use gymnasium::*;
use std::borrow::Cow;
use std::rc::Rc;

/// Markov Decision Process - Sutton & Barto 2018.
///
/// Implementations may hold the full table or compute entries on demand.
pub trait Mdp {
    fn n_s(&self) -> usize;

    fn n_a(&self) -> usize;

    /// Outcomes of taking `a` in `s`. Empty for pairs outside the model.
    fn transitions(&self, s: Discrete, a: Discrete) -> Cow<'_, [Transition]>;

    /// Probability of starting an episode in each state.
    fn initial_state_distribution(&self) -> &[Continous];
}

/// An MDP whose table is fully materialized at construction.
#[derive(Debug, Clone)]
pub struct TabularMdp {
    n_s: usize,
    n_a: usize,
    transitions: Rc<Transitions>,
    isd: Rc<[Continous]>,
}

impl TabularMdp {
    pub fn new(n_s: usize, n_a: usize, transitions: Transitions, isd: Vec<Continous>) -> Self {
        Self {
            n_s,
            n_a,
            transitions: Rc::new(transitions),
            isd: isd.into(),
        }
    }

    /// The whole table, for solvers that sweep every `(s, a)`.
    pub fn table(&self) -> Rc<Transitions> {
        Rc::clone(&self.transitions)
    }
}

impl Mdp for TabularMdp {
    fn n_s(&self) -> usize {
        self.n_s
    }

    fn n_a(&self) -> usize {
        self.n_a
    }

    fn transitions(&self, s: Discrete, a: Discrete) -> Cow<'_, [Transition]> {
        match self.transitions.get(&(s, a)) {
            Some(ts) => Cow::Borrowed(ts.as_slice()),
            None => Cow::Borrowed(&[]),
        }
    }

    fn initial_state_distribution(&self) -> &[Continous] {
        &self.isd
    }
}
