//! Mixed-radix bijection between taxi states and integer ids.
//!
//! Fields are composed largest radix first, so the ordering depends on the grid shape and the
//! location count. It is computed once per codec.

use crate::error::{Result, TaxiError};
use gymnasium::Discrete;
use serde::{Deserialize, Serialize};

const FIELDS: [&str; 4] = ["taxi_row", "taxi_col", "passenger", "destination"];

/// `passenger == L` means the passenger is in the taxi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaxiState {
    pub taxi_row: usize,
    pub taxi_col: usize,
    pub passenger: usize,
    pub destination: usize,
}

impl TaxiState {
    pub fn new(taxi_row: usize, taxi_col: usize, passenger: usize, destination: usize) -> Self {
        Self {
            taxi_row,
            taxi_col,
            passenger,
            destination,
        }
    }

    fn fields(&self) -> [usize; 4] {
        [
            self.taxi_row,
            self.taxi_col,
            self.passenger,
            self.destination,
        ]
    }

    fn from_fields([taxi_row, taxi_col, passenger, destination]: [usize; 4]) -> Self {
        Self::new(taxi_row, taxi_col, passenger, destination)
    }
}

impl From<(usize, usize, usize, usize)> for TaxiState {
    fn from((r, c, p, d): (usize, usize, usize, usize)) -> Self {
        Self::new(r, c, p, d)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateCodec {
    radices: [usize; 4],
    /// Field positions sorted by radix, largest first. Equal radices keep field order.
    order: [usize; 4],
    n_states: Discrete,
}

impl StateCodec {
    pub fn new(rows: usize, cols: usize, locs: usize) -> Self {
        let radices = [rows, cols, locs + 1, locs];
        let mut order = [0, 1, 2, 3];
        // sort_by_key is stable.
        order.sort_by_key(|&f| std::cmp::Reverse(radices[f]));

        Self {
            radices,
            order,
            n_states: radices.iter().product(),
        }
    }

    pub fn n_states(&self) -> Discrete {
        self.n_states
    }

    /// Cardinalities of `(taxi_row, taxi_col, passenger, destination)`.
    pub fn radices(&self) -> [usize; 4] {
        self.radices
    }

    pub fn order(&self) -> [usize; 4] {
        self.order
    }

    /// Number of named locations, which is also the in-taxi passenger value.
    pub fn locs(&self) -> usize {
        self.radices[3]
    }

    pub fn encode(&self, state: TaxiState) -> Result<Discrete> {
        let values = state.fields();
        for f in 0..4 {
            if values[f] >= self.radices[f] {
                return Err(TaxiError::FieldOutOfRange {
                    field: FIELDS[f],
                    value: values[f],
                    radix: self.radices[f],
                });
            }
        }

        Ok(self
            .order
            .iter()
            .fold(0, |i, &f| i * self.radices[f] + values[f]))
    }

    pub fn decode(&self, state: Discrete) -> Result<TaxiState> {
        if state >= self.n_states {
            return Err(TaxiError::StateOutOfRange {
                state,
                n_states: self.n_states,
            });
        }

        let mut values = [0; 4];
        let mut i = state;
        let largest = self.order[0];
        for &f in self.order[1..].iter().rev() {
            values[f] = i % self.radices[f];
            i /= self.radices[f];
        }
        debug_assert!(i < self.radices[largest]);
        values[largest] = i;

        Ok(TaxiState::from_fields(values))
    }
}
