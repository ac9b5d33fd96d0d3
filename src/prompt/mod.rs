//! Line-oriented prompts with per-type validation
//!
//! Each prompt shows `<label> (default: <default>): `, reads one line and
//! hands it to a [`PromptRule`]. Rejected lines print the rule's notice and
//! the prompt is shown again, with no limit on attempts.

pub mod rules;

pub use rules::{BooleanRule, IntegerRule, NetworkAddressRule, PromptRule, Step, TextRule};

use crate::traits::{LineReader, Output};
use anyhow::Result;

/// Drives prompt rules against an input source and an output sink
pub struct Prompter<'a> {
    input: &'a dyn LineReader,
    output: &'a dyn Output,
}

impl<'a> Prompter<'a> {
    pub fn new(input: &'a dyn LineReader, output: &'a dyn Output) -> Self {
        Self { input, output }
    }

    /// Ask until `rule` accepts a line
    pub fn ask<R: PromptRule>(&self, label: &str, rule: &R) -> Result<R::Value> {
        let text = format!("{} (default: {}): ", label, rule.default_display());
        loop {
            self.output.prompt(&text);
            let line = self.input.read_line()?;
            match rule.evaluate(&line) {
                Step::Accept(value) => return Ok(value),
                Step::Retry(notice) => self.output.warning(notice),
            }
        }
    }

    pub fn string(&self, label: &str, default: &str) -> Result<String> {
        self.ask(label, &TextRule { default })
    }

    pub fn integer(&self, label: &str, default: i64) -> Result<i64> {
        self.ask(label, &IntegerRule { default })
    }

    pub fn boolean(&self, label: &str, default: bool) -> Result<bool> {
        self.ask(label, &BooleanRule { default })
    }

    /// Ask for an address as either a last octet under `base` or a full IP
    pub fn network_address(&self, label: &str, base: &str, default_octet: &str) -> Result<String> {
        self.ask(label, &NetworkAddressRule { base, default_octet })
    }
}
