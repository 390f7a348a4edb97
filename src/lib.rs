#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod core;
#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod player;
pub mod prelude;
#[cfg(feature = "std")]
pub mod runner;

pub use crate::core::*;
#[cfg(feature = "std")]
pub use cli::ConsoleObserver;
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use player::{CliMover, MoveProvider, RandomMover};
#[cfg(feature = "std")]
pub use runner::{SessionRunner, MAX_REJECTIONS};
