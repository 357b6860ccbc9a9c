//! Character-by-character text reveal.
//!
//! ## Structure
//!
//! - `RevealState`: pure state machine. Knows the next character and the offset
//!   from run start at which it is due (`delay + cursor * step`).
//! - `RevealText` (`driver.rs`): owns one run of the state machine on a tokio
//!   task, publishes the revealed prefix, and cancels the pending tick on reset
//!   or drop.
//! - `stagger`: delay policy for sibling reveals shown together.

mod driver;
pub mod stagger;

use std::time::Duration;

pub use driver::RevealText;

/// Parameters of one reveal run.
///
/// Two runs with equal params are the same run: re-supplying them is a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RevealParams {
    pub target: String,
    /// Time before the first character appears.
    pub delay: Duration,
    /// Time between subsequent characters.
    pub step: Duration,
}

impl RevealParams {
    pub fn new(target: impl Into<String>, delay: Duration, step: Duration) -> Self {
        Self {
            target: target.into(),
            delay,
            step,
        }
    }

    /// Builds params from (possibly fractional) millisecond values.
    ///
    /// Negative and non-finite values clamp to zero.
    pub fn from_millis(target: impl Into<String>, delay_ms: f64, step_ms: f64) -> Self {
        Self::new(target, clamp_millis(delay_ms), clamp_millis(step_ms))
    }
}

/// Converts a millisecond value into a `Duration`, clamping negatives,
/// NaN and infinities to zero.
pub fn clamp_millis(ms: f64) -> Duration {
    if !ms.is_finite() || ms <= 0.0 {
        return Duration::ZERO;
    }
    Duration::try_from_secs_f64(ms / 1000.0).unwrap_or(Duration::MAX)
}

fn due_at(delay: Duration, step: Duration, cursor: usize) -> Duration {
    let n = u32::try_from(cursor).unwrap_or(u32::MAX);
    delay.saturating_add(step.saturating_mul(n))
}

/// Pure reveal state: `revealed` is always `target[0..cursor]`.
#[derive(Debug, Clone)]
pub struct RevealState {
    chars: Vec<char>,
    revealed: String,
    cursor: usize,
    delay: Duration,
    step: Duration,
}

impl RevealState {
    pub fn new(params: &RevealParams) -> Self {
        let chars: Vec<char> = params.target.chars().collect();
        Self {
            revealed: String::with_capacity(params.target.len()),
            chars,
            cursor: 0,
            delay: params.delay,
            step: params.step,
        }
    }

    pub fn revealed(&self) -> &str {
        &self.revealed
    }

    /// Index of the next character to reveal.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_complete(&self) -> bool {
        self.cursor >= self.chars.len()
    }

    /// Offset from run start at which the next character is due.
    ///
    /// `None` once the run is complete: nothing is left to schedule.
    pub fn next_due(&self) -> Option<Duration> {
        (!self.is_complete()).then(|| due_at(self.delay, self.step, self.cursor))
    }

    /// Reveals exactly one character and returns it.
    pub fn tick(&mut self) -> Option<char> {
        let ch = *self.chars.get(self.cursor)?;
        self.revealed.push(ch);
        self.cursor += 1;
        Some(ch)
    }
}
