#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod board;
mod common;
mod config;
mod driver;
mod game;
mod player;
mod player_ai;
pub mod taunts;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
mod player_cli;
#[cfg(feature = "std")]
pub mod session;

pub use board::*;
pub use common::*;
pub use config::*;
pub use driver::*;
pub use game::*;
pub use player::*;
pub use player_ai::*;
pub use taunts::Taunts;
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use player_cli::*;
#[cfg(feature = "std")]
pub use session::{play_round, run_session, SessionSummary};
