//! Randomized Taxi grid worlds exposed as fully enumerated tabular MDPs.
//!
//! ```no_run
//! use custom_taxi::{config::TaxiConfig, envs::custom_taxi::CustomTaxi, mdps::mdp::Mdp};
//!
//! let env = CustomTaxi::new(TaxiConfig { seed: Some(2718), ..Default::default() })?;
//! println!("{}", env.map());
//! println!("{} states, {} actions", env.n_s(), env.n_a());
//! # Ok::<(), custom_taxi::error::TaxiError>(())
//! ```

pub mod config;
pub mod envs;
pub mod error;
pub mod mdps;

pub use config::TaxiConfig;
pub use envs::custom_taxi::{Action, CustomTaxi, StateCodec, TaxiMap, TaxiState};
pub use error::{Result, TaxiError};
pub use mdps::mdp::{Mdp, TabularMdp};
