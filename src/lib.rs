//! Rotation puzzle boards: scramble a grid of arrow panels with random
//! plus-shaped presses, then turn panels until every arrow points the
//! same way.
//!
//! The puzzle state lives in [`board::Board`] and [`session::Session`];
//! presentation is left to [`render::Renderer`] implementations.

#[cfg(feature = "cli")]
pub mod app;
pub mod board;
#[cfg(feature = "cli")]
pub mod cli;
pub mod grid;
pub mod orientation;
pub mod render;
pub mod session;
pub mod stage;
