//! Check whether a League of Legends summoner name is available for reuse.
//!
//! The crate wraps the handful of Riot API endpoints needed to find an
//! account's last recorded activity (LoL match history, TFT match history,
//! champion masteries) and applies Riot's level-dependent name cleanup
//! policy to it.

pub mod checker;
pub mod config;
pub mod error;
pub mod logging;
pub mod riot;
