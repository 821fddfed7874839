//! Interactive console front-end for the stock tracker.
//!
//! Everything here is generic over `BufRead` + `Write` so the same menu runs
//! against a terminal or a scripted buffer.

pub mod config;
pub mod error;
pub mod menu;
pub mod prompt;

pub use config::AppConfig;
pub use error::{ConsoleError, ConsoleResult};
pub use prompt::Console;
