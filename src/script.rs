//! Operation scripts
//!
//! A script is a JSON array of [`DequeOperation<String>`] values, e.g.
//! `[{"PushTail":{"value":"Alice"}}, "PeekHead", "PopHead"]`.

use std::io::Write;
use std::path::Path;

use deque::{DequeConfig, DequeEngine, DequeOperation, DequeResponse};

use crate::error::{HarnessError, Result};

pub type Script = Vec<DequeOperation<String>>;

pub fn load_script(path: &Path) -> Result<Script> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

pub fn load_config(path: &Path) -> Result<DequeConfig> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Apply each operation in order, writing every response as a JSON line.
/// Stops at the first failed operation.
pub fn run_script<W: Write>(script: Script, config: DequeConfig, out: &mut W) -> Result<()> {
    let mut engine = DequeEngine::with_config(config);

    for (index, operation) in script.into_iter().enumerate() {
        let name = operation.name();
        let response = engine.apply_operation(operation);
        writeln!(out, "{}", serde_json::to_string(&response)?)?;

        if let DequeResponse::Error(message) = response {
            return Err(HarnessError::OperationFailed {
                index,
                operation: name,
                message,
            });
        }
    }

    tracing::info!(
        deque = %engine.config().name,
        applied = engine.applied(),
        len = engine.deque().len(),
        "script finished"
    );

    Ok(())
}
