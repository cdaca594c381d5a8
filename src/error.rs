use thiserror::Error;

/// Errors raised while constructing or loading a `FlowPolicy`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PolicyError {
    #[error("max_nodes must be at least 1, got {0}")]
    InvalidMaxNodes(usize),

    #[error("max_step_length must be at least 1, got {0}")]
    InvalidStepLength(usize),

    #[error("spacing must be a finite, positive number, got {0}")]
    InvalidSpacing(f64),

    #[error("Denylist term at position {0} is blank and would reject every step")]
    BlankDenyTerm(usize),

    #[error("Failed to parse policy TOML: {0}")]
    TomlParseError(String),

    #[error("Could not read policy file '{path}': {message}")]
    Io { path: String, message: String },
}

/// Errors raised while decoding a payload produced by a backend collaborator.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PayloadError {
    #[error("Failed to parse payload JSON: {0}")]
    JsonParseError(String),

    #[error("Backend reported an error: {0}")]
    Backend(String),

    #[error("Payload is missing required field '{0}'")]
    MissingField(&'static str),
}
