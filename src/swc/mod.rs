pub mod client;
pub mod types;

pub use client::{SportsDataApi, SwcClient};
pub use types::{League, Player, Team};
