//! The canonical smoke scenario
//!
//! Pushes three names, pops one, pushes another at the head, and checks
//! every observation along the way.

use std::fmt::Display;
use std::io::Write;

use deque::{Deque, DequeConfig};

use crate::error::{HarnessError, Result};

/// Run the scenario, writing one `label: value` line per observation
pub fn run_scenario<W: Write>(config: &DequeConfig, out: &mut W) -> Result<()> {
    let mut queue: Deque<&str> = Deque::with_capacity(config.initial_capacity);

    check("fresh deque is empty", true, queue.is_empty())?;

    queue.push_tail("Alice");
    queue.push_tail("Bob");
    queue.push_tail("Fred");

    observe(out, "head", "Alice", *queue.peek_head()?)?;
    observe(out, "tail", "Fred", *queue.peek_tail()?)?;
    observe(out, "length", 3, queue.len())?;
    observe(out, "pop", "Alice", queue.pop_head()?)?;
    observe(out, "length", 2, queue.len())?;
    observe(out, "head", "Bob", *queue.peek_head()?)?;

    queue.push_head("Big Jim");
    observe(out, "length", 3, queue.len())?;
    observe(out, "head", "Big Jim", *queue.peek_head()?)?;

    tracing::info!(deque = %config.name, "scenario passed");
    queue.destroy();

    Ok(())
}

fn observe<W, V>(out: &mut W, what: &'static str, expected: V, observed: V) -> Result<()>
where
    W: Write,
    V: PartialEq + Display,
{
    writeln!(out, "{}: {}", what, observed)?;
    check(what, expected, observed)
}

pub(crate) fn check<V>(what: &'static str, expected: V, observed: V) -> Result<()>
where
    V: PartialEq + Display,
{
    if expected == observed {
        return Ok(());
    }

    tracing::warn!(%expected, %observed, "Check failed for {}", what);
    Err(HarnessError::CheckFailed {
        what,
        expected: expected.to_string(),
        observed: observed.to_string(),
    })
}
