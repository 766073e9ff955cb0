//! Construction-time parameters for a custom taxi environment.

use crate::error::{Result, TaxiError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Map layout, sampling and episode parameters.
///
/// Deserializes from gym-style kwargs; every missing key takes its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TaxiConfig {
    /// Number of grid rows.
    pub rows: usize,
    /// Number of grid columns.
    pub cols: usize,
    /// Number of named pick-up/drop-off locations to place.
    pub locs: usize,
    /// Probability that an interior east-west boundary is a wall.
    pub cramped: f64,
    /// Expected number of placement draws per location over the whole map.
    pub locs_prob: f64,
    /// Open one boundary in every interior column that came out fully walled.
    pub no_walls: bool,
    /// Seed for map generation and episode sampling. `None` seeds from entropy.
    pub seed: Option<u64>,
    /// How many maps to draw before giving up on placing all `locs` locations.
    pub max_map_attempts: usize,
    /// Episodes are truncated after this many steps.
    pub max_episode_steps: Option<usize>,
}

impl Default for TaxiConfig {
    fn default() -> Self {
        Self {
            rows: 5,
            cols: 5,
            locs: 4,
            cramped: 0.2,
            locs_prob: 3.,
            no_walls: true,
            seed: None,
            max_map_attempts: 64,
            max_episode_steps: None,
        }
    }
}

impl TaxiConfig {
    /// Builds a validated config from `(name, value)` pairs, e.g.
    /// `&[("rows", to_value(8)?), ("cramped", to_value(0.3)?)]`.
    pub fn from_kwargs(kwargs: &[(&str, Value)]) -> Result<Self> {
        let obj = kwargs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect::<Map<String, Value>>();
        let config = serde_json::from_value::<Self>(Value::Object(obj))?;
        config.validate()?;

        Ok(config)
    }

    pub fn cells(&self) -> usize {
        self.rows * self.cols
    }

    /// Per-location weight of the per-cell categorical draw.
    pub fn loc_weight(&self) -> f64 {
        self.locs_prob / self.cells() as f64
    }

    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(invalid(format!(
                "grid must be non-empty, got {}x{}",
                self.rows, self.cols
            )));
        }

        // Fewer than two locations leaves no state where the passenger waits away from the destination.
        if self.locs < 2 {
            return Err(invalid(format!(
                "need at least 2 locations, got {}",
                self.locs
            )));
        }

        if self.locs > self.cells() {
            return Err(invalid(format!(
                "{} locations do not fit in {} cells",
                self.locs,
                self.cells()
            )));
        }

        if !(0.0..=1.0).contains(&self.cramped) {
            return Err(invalid(format!(
                "cramped must lie in [0, 1], got {}",
                self.cramped
            )));
        }

        if !self.locs_prob.is_finite() || self.locs_prob <= 0. {
            return Err(invalid(format!(
                "locs_prob must be positive, got {}",
                self.locs_prob
            )));
        }

        if self.loc_weight() * self.locs as f64 > 1. {
            return Err(invalid(format!(
                "locs * locs_prob = {} exceeds the {} available cells",
                self.locs as f64 * self.locs_prob,
                self.cells()
            )));
        }

        if self.max_map_attempts == 0 {
            return Err(invalid("max_map_attempts must be at least 1".to_string()));
        }

        Ok(())
    }
}

fn invalid(msg: String) -> TaxiError {
    TaxiError::InvalidConfig(msg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::to_value;

    #[test]
    fn default_config_is_valid() {
        let cfg = TaxiConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.cells(), 25);
    }

    #[test]
    fn kwargs_override_defaults() {
        let cfg = TaxiConfig::from_kwargs(&[
            ("rows", to_value(8).unwrap()),
            ("cramped", to_value(0.5).unwrap()),
            ("seed", to_value(2718).unwrap()),
        ])
        .unwrap();

        assert_eq!(cfg.rows, 8);
        assert_eq!(cfg.cols, 5);
        assert_eq!(cfg.cramped, 0.5);
        assert_eq!(cfg.seed, Some(2718));
    }

    #[test]
    fn unknown_kwarg_is_rejected() {
        let err = TaxiConfig::from_kwargs(&[("render_mode", to_value("ansi").unwrap())]);
        assert!(matches!(err, Err(TaxiError::Kwargs(_))));
    }

    #[rstest]
    #[case::empty_grid(TaxiConfig { rows: 0, ..Default::default() })]
    #[case::single_location(TaxiConfig { locs: 1, ..Default::default() })]
    #[case::too_many_locations(TaxiConfig { rows: 2, cols: 2, locs: 5, locs_prob: 0.5, ..Default::default() })]
    #[case::cramped_above_one(TaxiConfig { cramped: 1.5, ..Default::default() })]
    #[case::zero_locs_prob(TaxiConfig { locs_prob: 0., ..Default::default() })]
    #[case::negative_empty_weight(TaxiConfig { locs_prob: 7., ..Default::default() })]
    #[case::no_attempts(TaxiConfig { max_map_attempts: 0, ..Default::default() })]
    fn invalid_configs_fail_fast(#[case] cfg: TaxiConfig) {
        assert!(matches!(cfg.validate(), Err(TaxiError::InvalidConfig(_))));
    }
}
