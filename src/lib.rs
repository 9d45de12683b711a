#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
mod cell;
mod common;
mod config;
#[cfg(feature = "std")]
mod console;
mod coordinate;
mod game;
mod input;
#[cfg(feature = "std")]
mod logging;
mod player;
mod player_human;
mod player_robot;
pub mod prelude;
mod ship;

pub use board::*;
pub use cell::*;
pub use common::*;
pub use config::*;
#[cfg(feature = "std")]
pub use console::*;
pub use coordinate::*;
pub use game::*;
pub use input::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from_env, LOG_ENV};
pub use player::*;
pub use player_human::*;
pub use player_robot::*;
pub use ship::*;
