//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target or serialize them.

mod bake;
mod check;
mod output;

pub use bake::{
    BakeReport, FailedCandidate, FileStatus, GenerationResult, PreviewFile, PreviewResult,
    WrittenFile, WrittenResult,
};
pub use check::CheckReport;
pub use output::{Report, TerminalOutput};
