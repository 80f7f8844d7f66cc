//! # Connect Four
//!
//! Two-player Connect Four for the terminal. One rule engine, two front
//! ends: a line-oriented console game and a ratatui UI with mouse support
//! and cosmetic themes.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, player, win/draw rules, turn sequencing
//! - [`console`]: Console front end: ASCII board and numeric column input
//! - [`ui`]: Terminal UI: game view, render context, themes
//! - [`config`]: TOML configuration loading and validation
//! - [`logging`]: `tracing` subscriber setup
//! - [`error`]: Structured error types

pub mod config;
pub mod console;
pub mod error;
pub mod game;
pub mod logging;
pub mod ui;
