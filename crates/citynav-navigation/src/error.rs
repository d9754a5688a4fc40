//! This module defines the error types used by the `citynav-navigation` crate.

#![warn(missing_docs)]

/// Error type for grid operations.
///
/// This enum encapsulates the errors that can occur when reading or writing
/// cells of the fixed-size grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// Error for out-of-bounds access.
    /// This variant is returned when attempting to access grid cells outside the valid range.
    OutOfBounds(&'static str),
}

impl core::fmt::Display for NavigationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            NavigationError::OutOfBounds(msg) => write!(f, "Grid access out of bounds: {}", msg),
        }
    }
}

impl core::error::Error for NavigationError {}

/// Which part of a request a label was supplied for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelRole {
    /// The start label.
    Start,
    /// The end (goal) label.
    End,
}

impl core::fmt::Display for LabelRole {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LabelRole::Start => write!(f, "start"),
            LabelRole::End => write!(f, "end"),
        }
    }
}

/// Error type for staging a session request.
///
/// A request that fails with one of these errors leaves the session's grid
/// exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The start or end label is not part of the recognized label set.
    UnknownLabel {
        /// Whether the start or the end label was rejected.
        role: LabelRole,
        /// The label as supplied by the caller.
        label: String,
    },
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::UnknownLabel { role, label } => {
                write!(f, "Unknown {} label: {:?}", role, label)
            }
        }
    }
}

impl core::error::Error for ConfigError {}
