#![cfg_attr(not(feature = "std"), no_std)]

mod ai;
mod board;
mod common;
mod config;
#[cfg(feature = "std")]
pub mod export;
mod fleet;
mod game;
mod hunt;
#[cfg(feature = "std")]
mod logging;
pub mod mask;
pub mod palette;
mod placement;
mod player;
mod ship;
#[cfg(feature = "std")]
pub mod ui;

pub use ai::*;
pub use board::*;
pub use common::*;
pub use config::*;
pub use fleet::*;
pub use game::*;
pub use hunt::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
pub use mask::{CellMask, Mask, MaskError};
pub use placement::*;
pub use player::*;
pub use ship::*;
