use gymnasium::Discrete;
use rand::distributions::WeightedError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TaxiError>;

#[derive(Debug, Error)]
pub enum TaxiError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("could not parse environment kwargs: {0}")]
    Kwargs(#[from] serde_json::Error),

    #[error("map placed {placed} of {requested} locations after {attempts} attempts")]
    LocationUndercount {
        requested: usize,
        placed: usize,
        attempts: usize,
    },

    #[error("state {state} is outside [0, {n_states})")]
    StateOutOfRange { state: Discrete, n_states: Discrete },

    #[error("{field} = {value} is outside [0, {radix})")]
    FieldOutOfRange {
        field: &'static str,
        value: usize,
        radix: usize,
    },

    #[error("action {0} is not one of the 6 taxi actions")]
    InvalidAction(Discrete),

    #[error("environment must be reset before stepping")]
    EnvNotReady,

    #[error("cannot sample from weights: {0}")]
    Sampling(#[from] WeightedError),
}
