//! # trigsum-cli
//!
//! CLI report rendering, JSON output, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod ui;

pub use presenter::{CLIResultPresenter, JsonResultPresenter};
