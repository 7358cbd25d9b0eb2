//! Smoke harness for the deque crate
//!
//! Runs either the canonical names scenario or a JSON operation script
//! against a deque and reports the outcome through the exit code.

pub mod error;
pub mod logging;
pub mod scenario;
pub mod script;

pub use error::{HarnessError, Result};
pub use logging::{LogLevel, setup_logs};
pub use scenario::run_scenario;
pub use script::{Script, load_config, load_script, run_script};
