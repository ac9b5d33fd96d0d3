use std::net::IpAddr;

pub const INVALID_NUMBER: &str = "Invalid number, try again.";
pub const INVALID_OCTET: &str = "Invalid octet (0-255), try again.";
pub const INVALID_IP: &str = "Invalid IP format, try again.";

/// Outcome of evaluating one line of input against a rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step<T> {
    /// The line produced a value (or the default, for an empty line)
    Accept(T),
    /// The line was rejected; the notice explains why
    Retry(&'static str),
}

/// A validation/coercion rule for a single prompt.
///
/// `evaluate` is pure: it sees one raw input line and decides whether it
/// yields a value or a retry, without touching any I/O.
pub trait PromptRule {
    type Value;

    /// Text shown after `default:` in the prompt
    fn default_display(&self) -> String;

    /// Evaluate one raw input line (surrounding whitespace is trimmed here)
    fn evaluate(&self, line: &str) -> Step<Self::Value>;
}

/// Free-form text; any non-empty input is taken verbatim
pub struct TextRule<'a> {
    pub default: &'a str,
}

impl PromptRule for TextRule<'_> {
    type Value = String;

    fn default_display(&self) -> String {
        self.default.to_string()
    }

    fn evaluate(&self, line: &str) -> Step<String> {
        let input = line.trim();
        if input.is_empty() {
            return Step::Accept(self.default.to_string());
        }
        Step::Accept(input.to_string())
    }
}

/// Base-10 signed integer, retried until it parses
pub struct IntegerRule {
    pub default: i64,
}

impl PromptRule for IntegerRule {
    type Value = i64;

    fn default_display(&self) -> String {
        self.default.to_string()
    }

    fn evaluate(&self, line: &str) -> Step<i64> {
        let input = line.trim();
        if input.is_empty() {
            return Step::Accept(self.default);
        }
        match input.parse::<i64>() {
            Ok(value) => Step::Accept(value),
            Err(_) => Step::Retry(INVALID_NUMBER),
        }
    }
}

/// Yes/no answer. Only `y` and `yes` (any case) mean true; anything else
/// non-empty is a silent no, never a retry.
pub struct BooleanRule {
    pub default: bool,
}

impl PromptRule for BooleanRule {
    type Value = bool;

    fn default_display(&self) -> String {
        self.default.to_string()
    }

    fn evaluate(&self, line: &str) -> Step<bool> {
        let input = line.trim().to_lowercase();
        if input.is_empty() {
            return Step::Accept(self.default);
        }
        Step::Accept(input == "y" || input == "yes")
    }
}

/// Either a last octet appended to `base`, or a full IP address.
pub struct NetworkAddressRule<'a> {
    pub base: &'a str,
    pub default_octet: &'a str,
}

impl PromptRule for NetworkAddressRule<'_> {
    type Value = String;

    fn default_display(&self) -> String {
        format!("{}.{}", self.base, self.default_octet)
    }

    fn evaluate(&self, line: &str) -> Step<String> {
        let input = line.trim();
        if input.is_empty() {
            return Step::Accept(self.default_display());
        }

        if !input.contains('.') {
            // Keep the literal input, so "007" stays "007"
            return match input.parse::<i64>() {
                Ok(octet) if (0..=255).contains(&octet) => {
                    Step::Accept(format!("{}.{}", self.base, input))
                }
                _ => Step::Retry(INVALID_OCTET),
            };
        }

        match input.parse::<IpAddr>() {
            Ok(_) => Step::Accept(input.to_string()),
            Err(_) => Step::Retry(INVALID_IP),
        }
    }
}
