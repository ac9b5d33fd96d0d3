use anyhow::{Context, Result};
#[cfg(test)]
use std::collections::VecDeque;
use std::io::BufRead;
#[cfg(test)]
use std::sync::Mutex;

/// Trait for line-oriented user input to enable testing with mocks
pub trait LineReader: Send + Sync {
    /// Read one line of input. End of input yields an empty string.
    fn read_line(&self) -> Result<String>;
}

/// Real line reader over the process standard input
pub struct StdinLineReader;

impl LineReader for StdinLineReader {
    fn read_line(&self) -> Result<String> {
        let mut line = String::new();
        std::io::stdin()
            .lock()
            .read_line(&mut line)
            .context("Failed to read from standard input")?;
        Ok(line)
    }
}

/// Mock line reader for testing, replays a fixed script of lines
#[cfg(test)]
pub struct MockLineReader {
    lines: Mutex<VecDeque<String>>,
}

#[cfg(test)]
#[allow(dead_code)]
impl MockLineReader {
    /// Create mock with no pre-configured lines
    pub fn new() -> Self {
        Self {
            lines: Mutex::new(VecDeque::new()),
        }
    }

    /// Create mock from a raw input transcript, split on newlines
    pub fn from_input(input: &str) -> Self {
        Self {
            lines: Mutex::new(input.lines().map(|l| format!("{}\n", l)).collect()),
        }
    }

    /// Add a line to the queue
    pub fn add_line(&self, line: impl Into<String>) {
        self.lines.lock().unwrap().push_back(line.into());
    }

    /// Number of lines not yet consumed
    pub fn remaining(&self) -> usize {
        self.lines.lock().unwrap().len()
    }
}

#[cfg(test)]
impl Default for MockLineReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl LineReader for MockLineReader {
    fn read_line(&self) -> Result<String> {
        // Running dry means a prompt asked more often than the script allows
        self.lines
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("No more mock input lines available"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_reader_replays_lines_in_order() {
        let reader = MockLineReader::from_input("first\nsecond\n");

        assert_eq!(reader.read_line().unwrap(), "first\n");
        assert_eq!(reader.read_line().unwrap(), "second\n");
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn test_mock_reader_keeps_blank_lines() {
        let reader = MockLineReader::from_input("\n\nx\n");

        assert_eq!(reader.read_line().unwrap(), "\n");
        assert_eq!(reader.read_line().unwrap(), "\n");
        assert_eq!(reader.read_line().unwrap(), "x\n");
    }

    #[test]
    fn test_mock_reader_errors_when_exhausted() {
        let reader = MockLineReader::new();
        reader.add_line("only");

        assert!(reader.read_line().is_ok());
        assert!(reader.read_line().is_err());
    }
}
