//! # Tabletop Connect Four
//!
//! Connect Four on a fixed 6×7 board with a four-in-a-row win rule. The game
//! state machine is independent of presentation; a scene layer turns it into
//! per-frame disk positions and drop animations, and a terminal front end
//! built with Ratatui plays it from the keyboard.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, players, placed-disk log, state machine
//! - [`scene`] — Disk poses, drop animation, board tint for renderers
//! - [`ui`] — Terminal UI: input loop and board view
//! - [`config`] — TOML configuration loading and validation
//! - [`logging`] — `tracing` subscriber setup
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod scene;
pub mod ui;
