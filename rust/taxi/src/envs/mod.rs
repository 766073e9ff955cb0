pub mod custom_taxi;
