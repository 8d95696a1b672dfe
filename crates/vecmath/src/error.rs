//! Errors for vector access, parsing and swizzling.

use thiserror::Error;

/// Failure of a checked component access.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum VectorError {
    #[error("Index {index} is out of bounds for a vector with {len} components")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Expected {expected} components but got {found}")]
    LengthMismatch { expected: usize, found: usize },
}

/// Failure to parse a vector from its text representation.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ParseVectorError {
    #[error("Expected {expected} components but found {found}")]
    ComponentCount { expected: usize, found: usize },

    #[error("Failed to parse component {index} from {token:?}")]
    InvalidComponent { index: usize, token: String },
}

/// Failure to parse or apply a swizzle pattern.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum SwizzleError {
    #[error("Swizzle pattern {pattern:?} has {found} letters, expected {expected}")]
    InvalidLength {
        pattern: String,
        expected: usize,
        found: usize,
    },

    #[error("Invalid letter {letter:?} in swizzle pattern {pattern:?}")]
    InvalidLetter { pattern: String, letter: char },

    #[error("Swizzle pattern {pattern:?} mixes component name families")]
    MixedFamilies { pattern: String },

    #[error("Swizzle references component {index} of a vector with {len} components")]
    ComponentOutOfRange { index: usize, len: usize },

    #[error("Swizzle pattern is not writable (it repeats a component or contains a blank)")]
    NotWritable,
}
