//! Core operations.
//!
//! This module contains the business logic for recgen commands,
//! separated from CLI argument parsing and output rendering.

pub mod bake;
pub mod check;

pub use bake::bake;
pub use check::check;
