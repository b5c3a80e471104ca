//! The I/O capability the session drives.
//!
//! The engine treats text I/O abstractly: it renders prompts, reads one
//! answer line at a time, and emits feedback at a given verbosity. The
//! console implementation lives in `prezquiz-cli`; tests script it.

use anyhow::Result;

use crate::config::Verbosity;

/// Blocking, line-oriented quiz I/O.
pub trait QuizIo {
    /// Show a question prompt to the learner.
    fn prompt(&mut self, text: &str);

    /// Read one answer line. `Ok(None)` means end of input, which ends
    /// the session gracefully.
    fn read_line(&mut self) -> Result<Option<String>>;

    /// Emit feedback. `level` is the minimum configured verbosity at
    /// which the text is shown; implementations filter against it.
    fn report(&mut self, level: Verbosity, text: &str);
}
