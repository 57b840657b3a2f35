// This file is part of growvec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for [`GrowVec`](crate::GrowVec) and [`Vector`](crate::Vector).
//!
//! Two shapes exist, one per method family:
//!
//! - [`AllocError`] is the small signal returned by the panicking ("fast")
//!   methods when the buffer could not grow. Nothing else on that surface is
//!   recoverable.
//! - [`VecError`] is returned by the `try_*` methods. It records the cause
//!   ([`ErrorKind`]), a message, and the [`Origin`] of the call.

// Std imports
use std::{fmt, panic::Location};

// External imports
use thiserror::Error;

/// Allocation failure reported by growing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum AllocError {
    /// The requested slot count does not fit in a memory layout, or the growth
    /// policy stopped producing larger capacities.
    #[error("capacity overflow")]
    CapacityOverflow,
    /// The allocator refused a request.
    #[error("allocator refused a request of {bytes} bytes")]
    Exhausted {
        /// Size of the refused request.
        bytes: usize,
    },
}

/// The cause of a [`VecError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The buffer could not be allocated or grown.
    Alloc,
    /// The operation requires at least one element.
    Empty,
    /// An index was not below the current length.
    OutOfBounds,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Alloc => f.write_str("allocation failure"),
            Self::Empty => f.write_str("empty container"),
            Self::OutOfBounds => f.write_str("index out of bounds"),
        }
    }
}

/// Where a failed `try_*` call was made.
///
/// `file`, `line` and `column` belong to the caller of the operation, not to
/// this crate. `operation` names the crate method that failed (for example
/// `"try_push"` or `"at"`), not the caller's enclosing function: Rust exposes
/// no caller function name, so locate the caller through `file` and `line`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Origin {
    file: &'static str,
    line: u32,
    column: u32,
    operation: &'static str,
}

impl Origin {
    /// Captures the location of the nearest caller not marked `#[track_caller]`.
    #[track_caller]
    #[inline]
    pub fn caller(operation: &'static str) -> Self {
        let loc = Location::caller();
        Self {
            file: loc.file(),
            line: loc.line(),
            column: loc.column(),
            operation,
        }
    }

    /// Source file of the call.
    pub const fn file(&self) -> &'static str {
        self.file
    }

    /// Line of the call.
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Column of the call.
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// The method that failed, e.g. `"try_push"`.
    pub const fn operation(&self) -> &'static str {
        self.operation
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{} in {}",
            self.file, self.line, self.column, self.operation
        )
    }
}

/// Error returned by the `try_*` methods.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message} ({origin})")]
pub struct VecError {
    kind: ErrorKind,
    message: String,
    origin: Origin,
    #[source]
    source: Option<AllocError>,
}

impl VecError {
    /// Builds an allocation failure wrapping `cause`.
    pub fn alloc(cause: AllocError, origin: Origin) -> Self {
        Self {
            kind: ErrorKind::Alloc,
            message: format!("could not grow the buffer: {cause}"),
            origin,
            source: Some(cause),
        }
    }

    /// Builds an empty-container violation.
    pub fn empty(origin: Origin) -> Self {
        Self {
            kind: ErrorKind::Empty,
            message: String::from("vector is empty"),
            origin,
            source: None,
        }
    }

    /// Builds an out-of-bounds violation for `index` against `len`.
    pub fn out_of_bounds(index: usize, len: usize, origin: Origin) -> Self {
        Self {
            kind: ErrorKind::OutOfBounds,
            message: format!("index {index} out of bounds for length {len}"),
            origin,
            source: None,
        }
    }

    /// The cause of the failure.
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Human-readable description of the failure.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Where the failing call was made.
    pub const fn origin(&self) -> &Origin {
        &self.origin
    }

    /// The allocator-level cause, for [`ErrorKind::Alloc`].
    pub const fn alloc_cause(&self) -> Option<AllocError> {
        self.source
    }
}

/// Result type of the `try_*` methods.
pub type VecResult<T> = Result<T, VecError>;
