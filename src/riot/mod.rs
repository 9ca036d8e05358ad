pub mod client;
pub mod region;
pub mod types;

mod endpoints;

pub use client::RiotClient;
pub use region::{Platform, Region};
