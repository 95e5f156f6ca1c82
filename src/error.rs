//! Error types for mechanism operations.

use core::fmt;

/// Errors that can occur while building or stepping a mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MechanismError {
    /// A vector was divided by zero.
    DivisionByZero,
    /// Rest length must be finite and non-negative.
    InvalidRestLength,
    /// A link needs two distinct hinges.
    SelfLink,
    /// The hinge handle does not refer to a hinge in this simulation.
    UnknownHinge,
    /// Correction fraction must be finite and in (0, 1].
    InvalidFraction,
    /// A step needs at least one pass.
    InvalidIterations,
}

impl fmt::Display for MechanismError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MechanismError::DivisionByZero => write!(f, "division by zero"),
            MechanismError::InvalidRestLength => {
                write!(f, "rest length must be finite and non-negative")
            }
            MechanismError::SelfLink => write!(f, "a link cannot join a hinge to itself"),
            MechanismError::UnknownHinge => write!(f, "hinge is not part of this simulation"),
            MechanismError::InvalidFraction => write!(f, "correction fraction must be in (0, 1]"),
            MechanismError::InvalidIterations => write!(f, "iterations must be at least 1"),
        }
    }
}

impl core::error::Error for MechanismError {}
