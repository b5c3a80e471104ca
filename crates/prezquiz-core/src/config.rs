//! Validated session configuration.
//!
//! All flag conflicts and range problems are caught here, before a
//! session exists. The session itself assumes a well-formed config.

use serde::Serialize;

use crate::error::QuizError;

/// How much per-turn feedback the session emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    /// No per-turn feedback at all.
    Quiet,
    /// Correctness per turn plus the final score.
    Normal,
    /// Additionally echo the correct answer on every miss.
    Verbose,
}

impl Verbosity {
    pub fn from_level(level: u8) -> Result<Self, QuizError> {
        match level {
            0 => Ok(Verbosity::Quiet),
            1 => Ok(Verbosity::Normal),
            2 => Ok(Verbosity::Verbose),
            other => Err(QuizError::InvalidConfig(format!(
                "verbosity must be 0, 1, or 2, got {other}"
            ))),
        }
    }
}

/// Pool policy for a session. Repeat and EndEarly are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Exhaust the pool, then start a new round.
    Normal,
    /// Pick freely from the whole range; the pool is not consumed.
    Repeat,
    /// Finish the session once the pool is exhausted.
    EndEarly,
}

/// A validated inclusive `[start, end]` sub-range of order numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RangeSelection {
    start: u32,
    end: u32,
}

impl RangeSelection {
    /// Validate `1 <= start <= end <= max`.
    pub fn new(start: u32, end: u32, max: u32) -> Result<Self, QuizError> {
        if start < 1 || start > end || end > max {
            return Err(QuizError::InvalidRange { start, end, max });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    pub fn len(&self) -> usize {
        (self.end - self.start + 1) as usize
    }

    pub fn is_empty(&self) -> bool {
        false // construction guarantees start <= end
    }

    pub fn contains(&self, order: u32) -> bool {
        (self.start..=self.end).contains(&order)
    }

    /// All orders in the range, ascending.
    pub fn orders(&self) -> impl Iterator<Item = u32> {
        self.start..=self.end
    }
}

/// Everything a session needs to run, validated at construction.
#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    pub mode: Mode,
    pub allow_ambiguity: bool,
    pub range: RangeSelection,
    pub verbosity: Verbosity,
}

impl SessionConfig {
    /// Build a config from raw flags. Fails with `InvalidConfig` if both
    /// `repeat` and `end_early` are set.
    pub fn new(
        repeat: bool,
        end_early: bool,
        allow_ambiguity: bool,
        range: RangeSelection,
        verbosity: Verbosity,
    ) -> Result<Self, QuizError> {
        let mode = match (repeat, end_early) {
            (true, true) => {
                return Err(QuizError::InvalidConfig(
                    "repeat and end-early cannot both be set".into(),
                ))
            }
            (true, false) => Mode::Repeat,
            (false, true) => Mode::EndEarly,
            (false, false) => Mode::Normal,
        };
        Ok(Self {
            mode,
            allow_ambiguity,
            range,
            verbosity,
        })
    }
}
