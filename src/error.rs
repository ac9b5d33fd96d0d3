use std::fmt;

/// Fatal error types for Vagrantfile generation
#[derive(Debug)]
pub enum GenerateError {
    /// The host does not have more CPUs than the box would require
    InsufficientCpus { required: i64, available: usize },

    /// Template failed to parse or render
    Template(String),

    /// General I/O error
    Io(std::io::Error),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::InsufficientCpus {
                required,
                available,
            } => {
                write!(
                    f,
                    "not enough CPUs: {} required, {} available",
                    required, available
                )
            }
            GenerateError::Template(msg) => {
                write!(f, "Template error: {}", msg)
            }
            GenerateError::Io(err) => {
                write!(f, "I/O error: {}", err)
            }
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerateError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GenerateError {
    fn from(err: std::io::Error) -> Self {
        GenerateError::Io(err)
    }
}

impl From<handlebars::TemplateError> for GenerateError {
    fn from(err: handlebars::TemplateError) -> Self {
        GenerateError::Template(err.to_string())
    }
}

impl From<handlebars::RenderError> for GenerateError {
    fn from(err: handlebars::RenderError) -> Self {
        GenerateError::Template(err.to_string())
    }
}
