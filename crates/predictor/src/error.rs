//! Error types for predictor configuration and trace parsing.

use std::fmt;
use std::io;

/// Rejected predictor configuration.
///
/// Every variant is raised before any table is allocated; once a predictor
/// has been configured, prediction and training cannot fail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A bit width that must be at least 1 was zero.
    ZeroWidth(&'static str),
    /// A bit width exceeds what the predictor tables support.
    WidthTooLarge {
        field: &'static str,
        bits: u32,
        max: u32,
    },
    /// The widths are individually valid but the perceptron table they
    /// describe holds more than `max` weights.
    TableTooLarge { weights: u64, max: u64 },
    /// The predictor kind name is not one of the known variants.
    UnknownKind(String),
    /// The perceptron indexing mode name is not recognized.
    UnknownIndexMode(String),
    /// A configuration document could not be parsed.
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroWidth(field) => write!(f, "{} must be at least 1 bit", field),
            ConfigError::WidthTooLarge { field, bits, max } => {
                write!(f, "{} is {} bits, maximum is {}", field, bits, max)
            }
            ConfigError::TableTooLarge { weights, max } => write!(
                f,
                "perceptron table needs {} weights, maximum is {}",
                weights, max
            ),
            ConfigError::UnknownKind(name) => write!(
                f,
                "unknown predictor '{}' (expected static, gshare, tournament or custom)",
                name
            ),
            ConfigError::UnknownIndexMode(name) => write!(
                f,
                "unknown perceptron index mode '{}' (expected hashed or pc)",
                name
            ),
            ConfigError::Parse(msg) => write!(f, "invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Failure while reading a branch trace.
#[derive(Debug)]
pub enum TraceError {
    Io(io::Error),
    /// A line that is not `<hex pc> <0|1>`.
    Malformed { line: usize, content: String },
}

impl fmt::Display for TraceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceError::Io(e) => write!(f, "trace read failed: {}", e),
            TraceError::Malformed { line, content } => {
                write!(f, "malformed trace line {}: '{}'", line, content)
            }
        }
    }
}

impl std::error::Error for TraceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TraceError::Io(e) => Some(e),
            TraceError::Malformed { .. } => None,
        }
    }
}

impl From<io::Error> for TraceError {
    fn from(e: io::Error) -> Self {
        TraceError::Io(e)
    }
}
