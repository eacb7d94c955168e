use std::{error::Error, fmt};

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MandelbrotError {
    ZeroMaxIterationsError,
    InvalidEscapeRadius { escape_radius: f64 },
}

impl fmt::Display for MandelbrotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterationsError => {
                write!(f, "Maximum iterations must be greater than zero")
            }
            Self::InvalidEscapeRadius { escape_radius } => {
                write!(
                    f,
                    "Escape radius must be positive and finite: {}",
                    escape_radius
                )
            }
        }
    }
}

impl Error for MandelbrotError {}
