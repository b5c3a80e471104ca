//! Console implementation of the quiz I/O capability.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use prezquiz_core::config::Verbosity;
use prezquiz_core::traits::QuizIo;

/// Line-oriented stdin/stdout I/O, filtered by the configured verbosity.
pub struct ConsoleIo {
    verbosity: Verbosity,
}

impl ConsoleIo {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

impl QuizIo for ConsoleIo {
    fn prompt(&mut self, text: &str) {
        print!("{text}");
        let _ = io::stdout().flush();
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            // End of input: finish the session gracefully.
            println!();
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    fn report(&mut self, level: Verbosity, text: &str) {
        if self.verbosity >= level {
            println!("{text}");
        }
    }
}
