#![warn(missing_docs)]
//! OptiSim specific error structures
use std::{error::Error, fmt::Display};

/// OptiSim application specific Result type
pub type OptiResult<T> = std::result::Result<T, OptiSimError>;

/// Errors that can be returned by various OptiSim functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptiSimError {
    /// invalid lens parameters, duplicate or unknown element names or unknown parameter names
    Configuration(String),
    /// two elements (or an element and the light source) are closer than the minimum separation
    Geometry(String),
    /// an operation was called on a system which is not ready for it (e.g. `calculate` without a light source)
    Precondition(String),
    /// errors while reading, parsing or writing a system file
    Io(String),
    /// errors of the command line interface
    Console(String),
}

impl Display for OptiSimError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration(m) => {
                write!(f, "Configuration:{m}")
            }
            Self::Geometry(m) => {
                write!(f, "Geometry:{m}")
            }
            Self::Precondition(m) => {
                write!(f, "Precondition:{m}")
            }
            Self::Io(m) => {
                write!(f, "Io:{m}")
            }
            Self::Console(m) => write!(f, "Console:{m}"),
        }
    }
}
impl Error for OptiSimError {}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn display() {
        assert_eq!(
            format!("{}", OptiSimError::Configuration("test".to_string())),
            "Configuration:test"
        );
        assert_eq!(
            format!("{}", OptiSimError::Geometry("test".to_string())),
            "Geometry:test"
        );
        assert_eq!(
            format!("{}", OptiSimError::Precondition("test".to_string())),
            "Precondition:test"
        );
        assert_eq!(
            format!("{}", OptiSimError::Io("test".to_string())),
            "Io:test"
        );
        assert_eq!(
            format!("{}", OptiSimError::Console("test".to_string())),
            "Console:test"
        );
    }
    #[test]
    fn debug() {
        assert_eq!(
            format!("{:?}", OptiSimError::Geometry("test".to_string())),
            "Geometry(\"test\")"
        );
    }
    #[test]
    fn as_std_error() {
        let error: Box<dyn Error> = Box::new(OptiSimError::Io("file missing".into()));
        assert_eq!(error.to_string(), "Io:file missing");
    }
}
