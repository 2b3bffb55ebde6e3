//! Input/output abstractions
//!
//! Provides traits for the console game's input, output and answer timing,
//! enabling testing by allowing mock implementations.

use std::io::{self, Write};
use std::time::Instant;

/// Trait for reading player input
pub trait InputReader {
    /// Read a line of input from the player with a prompt.
    /// End of input is reported as `UnexpectedEof`.
    fn read_line(&mut self, prompt: &str) -> Result<String, io::Error>;
}

/// Trait for writing output to the player
pub trait OutputWriter {
    fn writeln(&mut self, message: &str);
}

/// Measures how long the player took to answer
pub trait Stopwatch {
    fn start(&mut self);
    /// Whole seconds since the last `start`.
    fn elapsed_secs(&self) -> u32;
}

/// Terminal I/O implementation using stdin/stdout
pub struct TerminalIO;

impl InputReader for TerminalIO {
    fn read_line(&mut self, prompt: &str) -> Result<String, io::Error> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(input)
    }
}

impl OutputWriter for TerminalIO {
    fn writeln(&mut self, message: &str) {
        println!("{}", message);
    }
}

/// Wall-clock stopwatch
pub struct SystemStopwatch {
    started: Instant,
}

impl Default for SystemStopwatch {
    fn default() -> Self {
        Self {
            started: Instant::now(),
        }
    }
}

impl Stopwatch for SystemStopwatch {
    fn start(&mut self) {
        self.started = Instant::now();
    }

    fn elapsed_secs(&self) -> u32 {
        u32::try_from(self.started.elapsed().as_secs()).unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
pub mod test_utils {
    use super::*;
    use std::collections::VecDeque;

    /// Mock input reader for testing
    pub struct MockInput {
        responses: VecDeque<String>,
    }

    impl MockInput {
        pub fn new(responses: Vec<&str>) -> Self {
            Self {
                responses: responses.into_iter().map(|s| s.to_string()).collect(),
            }
        }
    }

    impl InputReader for MockInput {
        fn read_line(&mut self, _prompt: &str) -> Result<String, io::Error> {
            self.responses
                .pop_front()
                .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "No more mock responses"))
        }
    }

    /// Mock output writer for testing
    #[derive(Default)]
    pub struct MockOutput {
        pub messages: Vec<String>,
    }

    impl MockOutput {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn contains(&self, needle: &str) -> bool {
            self.messages.iter().any(|m| m.contains(needle))
        }
    }

    impl OutputWriter for MockOutput {
        fn writeln(&mut self, message: &str) {
            self.messages.push(message.to_string());
        }
    }

    /// Stopwatch that reports a scripted answer time per question
    pub struct ScriptedStopwatch {
        times: VecDeque<u32>,
        current: u32,
    }

    impl ScriptedStopwatch {
        pub fn new(times: Vec<u32>) -> Self {
            Self {
                times: times.into(),
                current: 0,
            }
        }
    }

    impl Stopwatch for ScriptedStopwatch {
        fn start(&mut self) {
            self.current = self.times.pop_front().unwrap_or(0);
        }

        fn elapsed_secs(&self) -> u32 {
            self.current
        }
    }
}
