//! Eager construction of the taxi transition table and initial-state distribution.

use super::action::Action;
use super::codec::{StateCodec, TaxiState};
use super::map::TaxiMap;
use crate::error::{Result, TaxiError};
use crate::mdps::mdp::TabularMdp;
use gymnasium::{Continous, Transition, Transitions};
use itertools::iproduct;
use tracing::info;

pub const STEP_REWARD: Continous = -1.;
pub const ILLEGAL_REWARD: Continous = -10.;
pub const DELIVERY_REWARD: Continous = 20.;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outcome {
    pub state: TaxiState,
    pub reward: Continous,
    pub done: bool,
}

/// Deterministic result of taking `action` in `s`. A state that does not fit `map` stays put
/// with the illegal-action penalty.
pub fn outcome(map: &TaxiMap, s: TaxiState, action: Action) -> Outcome {
    let locs = map.locs();
    let in_taxi = locs.len();
    let cell = (s.taxi_row, s.taxi_col);

    if s.taxi_row >= map.rows()
        || s.taxi_col >= map.cols()
        || s.passenger > in_taxi
        || s.destination >= in_taxi
    {
        return Outcome {
            state: s,
            reward: ILLEGAL_REWARD,
            done: false,
        };
    }

    let mut next = s;
    let mut reward = STEP_REWARD;
    let mut done = false;
    match action {
        Action::South => next.taxi_row = (s.taxi_row + 1).min(map.rows() - 1),
        Action::North => next.taxi_row = s.taxi_row.saturating_sub(1),
        Action::East => {
            if map.can_move_east(cell) {
                next.taxi_col = (s.taxi_col + 1).min(map.cols() - 1);
            }
        }
        Action::West => {
            if map.can_move_west(cell) {
                next.taxi_col = s.taxi_col.saturating_sub(1);
            }
        }
        Action::Pickup => {
            if s.passenger < in_taxi && locs[s.passenger] == cell {
                next.passenger = in_taxi;
            } else {
                reward = ILLEGAL_REWARD;
            }
        }
        Action::Dropoff => match map.location_at(cell) {
            Some(_) if s.passenger == in_taxi && locs[s.destination] == cell => {
                next.passenger = s.destination;
                reward = DELIVERY_REWARD;
                done = true;
            }
            // Set down at another named location; the episode goes on.
            Some(k) if s.passenger == in_taxi => next.passenger = k,
            _ => reward = ILLEGAL_REWARD,
        },
    }

    Outcome {
        state: next,
        reward,
        done,
    }
}

/// Enumerates every `(row, col, passenger, destination)` and action of `map`.
///
/// The initial distribution is uniform over states where the passenger waits at a location other
/// than the destination.
pub fn build(map: &TaxiMap, codec: &StateCodec) -> Result<TabularMdp> {
    let (rows, cols, l) = (map.rows(), map.cols(), map.locs().len());
    if codec.radices() != [rows, cols, l + 1, l] {
        return Err(TaxiError::InvalidConfig(format!(
            "codec radices {:?} do not fit a {rows}x{cols} map with {l} locations",
            codec.radices()
        )));
    }

    let n_s = codec.n_states();
    let n_a = Action::ALL.len();
    let mut transitions = Transitions::with_capacity(n_s * n_a);
    let mut isd = vec![0 as Continous; n_s];

    for (row, col, passenger, destination) in iproduct!(0..rows, 0..cols, 0..=l, 0..l) {
        let s = TaxiState::new(row, col, passenger, destination);
        let state = codec.encode(s)?;
        if passenger < l && passenger != destination {
            isd[state] += 1.;
        }

        for action in Action::ALL {
            let o = outcome(map, s, action);
            let next_state = codec.encode(o.state)?;
            transitions
                .entry((state, action.id()))
                .or_default()
                .push(Transition::deterministic(next_state, o.reward, o.done));
        }
    }

    let total = isd.iter().sum::<Continous>();
    if total == 0. {
        return Err(TaxiError::InvalidConfig(format!(
            "{l} locations leave no valid start state"
        )));
    }
    isd.iter_mut().for_each(|p| *p /= total);

    info!(n_s, n_a, locs = l, "built taxi transition table");

    Ok(TabularMdp::new(n_s, n_a, transitions, isd))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn walled() -> TaxiMap {
        TaxiMap::from_desc(&["+-----+", "|0| : |", "| :1|2|", "+-----+"]).unwrap()
    }

    #[rstest]
    #[case::destination_past_locations(TaxiState::new(0, 0, 3, 5))]
    #[case::row_outside_grid(TaxiState::new(2, 0, 0, 1))]
    #[case::col_outside_grid(TaxiState::new(0, 3, 0, 1))]
    #[case::passenger_past_taxi(TaxiState::new(0, 0, 4, 1))]
    fn invalid_state_is_penalized_in_place(walled: TaxiMap, #[case] s: TaxiState) {
        for action in Action::ALL {
            let o = outcome(&walled, s, action);
            assert_eq!(o.state, s);
            assert_eq!(o.reward, ILLEGAL_REWARD);
            assert!(!o.done);
        }
    }

    #[rstest]
    #[case::south_moves((0, 1), Action::South, (1, 1))]
    #[case::south_stops_at_edge((1, 1), Action::South, (1, 1))]
    #[case::north_moves((1, 2), Action::North, (0, 2))]
    #[case::north_stops_at_edge((0, 2), Action::North, (0, 2))]
    #[case::east_blocked_by_wall((0, 0), Action::East, (0, 0))]
    #[case::east_through_corridor((0, 1), Action::East, (0, 2))]
    #[case::east_stops_at_border((0, 2), Action::East, (0, 2))]
    #[case::west_blocked_by_wall((1, 2), Action::West, (1, 2))]
    #[case::west_through_corridor((1, 1), Action::West, (1, 0))]
    #[case::west_stops_at_border((1, 0), Action::West, (1, 0))]
    fn moves_respect_walls(
        walled: TaxiMap,
        #[case] from: (usize, usize),
        #[case] action: Action,
        #[case] to: (usize, usize),
    ) {
        let s = TaxiState::new(from.0, from.1, 0, 1);
        let o = outcome(&walled, s, action);
        assert_eq!((o.state.taxi_row, o.state.taxi_col), to);
        assert_eq!(o.reward, STEP_REWARD);
        assert!(!o.done);
    }

    #[rstest]
    fn pickup_away_from_passenger_is_illegal(walled: TaxiMap) {
        let s = TaxiState::new(1, 1, 0, 2);
        let o = outcome(&walled, s, Action::Pickup);
        assert_eq!(o.state, s);
        assert_eq!(o.reward, ILLEGAL_REWARD);
    }

    #[rstest]
    fn pickup_with_passenger_aboard_is_illegal(walled: TaxiMap) {
        let s = TaxiState::new(0, 0, 3, 2);
        let o = outcome(&walled, s, Action::Pickup);
        assert_eq!(o.state, s);
        assert_eq!(o.reward, ILLEGAL_REWARD);
    }

    #[rstest]
    fn dropoff_at_other_location_sets_passenger_down(walled: TaxiMap) {
        let s = TaxiState::new(1, 1, 3, 2);
        let o = outcome(&walled, s, Action::Dropoff);
        assert_eq!(o.state, TaxiState::new(1, 1, 1, 2));
        assert_eq!(o.reward, STEP_REWARD);
        assert!(!o.done);
    }

    #[rstest]
    fn dropoff_off_location_is_illegal(walled: TaxiMap) {
        let s = TaxiState::new(0, 1, 3, 2);
        let o = outcome(&walled, s, Action::Dropoff);
        assert_eq!(o.state, s);
        assert_eq!(o.reward, ILLEGAL_REWARD);
    }

    #[rstest]
    fn table_has_one_entry_per_pair(walled: TaxiMap) {
        let codec = StateCodec::new(2, 3, 3);
        let mdp = build(&walled, &codec).unwrap();
        let table = mdp.table();
        assert_eq!(table.len(), 2 * 3 * 4 * 3 * 6);
        assert!(table.values().all(|ts| ts.len() == 1));
    }

    #[rstest]
    fn mismatched_codec_is_rejected(walled: TaxiMap) {
        let codec = StateCodec::new(3, 3, 3);
        assert!(matches!(
            build(&walled, &codec),
            Err(TaxiError::InvalidConfig(_))
        ));
    }
}
