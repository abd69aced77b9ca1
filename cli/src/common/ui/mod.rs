//! # TArchiver UI Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//!
//! ## Overview
//!
//! Every user-facing outcome goes through a `Reporter`. The binary builds one
//! `ConsoleReporter` in `main.rs` and hands it down by `&mut`, so no command
//! writes to the terminal on its own and tests can swap in a recorder.
//!
//! - **`panel`**: box-drawn, coloured status panels on stdout.
//!
//! ```rust
//! use crate::common::ui::{ConsoleReporter, Reporter};
//!
//! let mut reporter = ConsoleReporter::new(ColorMode::Auto);
//! reporter.success("Created ZIP archive: photos.zip");
//! reporter.error("Error: photos.zip does not exist");
//! ```
//!

pub mod panel;

pub use panel::ConsoleReporter;

/// How an outcome should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
}

/// Sink for the status messages of one run.
pub trait Reporter {
    fn report(&mut self, tone: Tone, message: &str);

    fn success(&mut self, message: &str) {
        self.report(Tone::Success, message);
    }

    fn error(&mut self, message: &str) {
        self.report(Tone::Error, message);
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;

    /// Keeps every reported message for later assertions.
    #[derive(Debug, Default)]
    pub struct RecordingReporter {
        pub messages: Vec<(Tone, String)>,
    }

    impl RecordingReporter {
        pub fn single(&self) -> (Tone, &str) {
            assert_eq!(
                self.messages.len(),
                1,
                "expected exactly one message, got {:?}",
                self.messages
            );
            let (tone, message) = &self.messages[0];
            (*tone, message.as_str())
        }
    }

    impl Reporter for RecordingReporter {
        fn report(&mut self, tone: Tone, message: &str) {
            self.messages.push((tone, message.to_string()));
        }
    }
}
