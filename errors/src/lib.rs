// Copyright (C) 2021-2026 The Dryad Authors.
// This file is part of the Dryad library.

// The Dryad library is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// The Dryad library is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with the Dryad library. If not, see <https://www.gnu.org/licenses/>.

//! Errors, warnings, and the diagnostic sink for the Dryad library.
//!
//! Every error in this crate is created through the [`create_messages!`]
//! macro, which assigns each message a stable exit code and a formatted,
//! span-carrying payload. Diagnostics flow through the [`emitter::Handler`],
//! which counts them, honors suppression scopes during speculative
//! parsing, and hands published events to an [`emitter::Emitter`].

#![forbid(unsafe_code)]

#[macro_use]
pub mod common;
pub use common::*;

pub mod emitter;

pub mod errors;
pub use errors::*;

pub mod warnings;
pub use warnings::*;

use thiserror::Error;

/// The umbrella error type for the Dryad library.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DryadError {
    /// Represents an AST error in the Dryad error system.
    #[error(transparent)]
    AstError(#[from] AstError),
    /// Represents a parser error in the Dryad error system.
    #[error(transparent)]
    ParserError(#[from] ParserError),
}

impl DryadError {
    /// Implements the trait for Dryad error codes.
    pub fn error_code(&self) -> String {
        match self {
            Self::AstError(error) => error.error_code(),
            Self::ParserError(error) => error.error_code(),
        }
    }

    /// Returns the formatted payload of the error.
    pub fn formatted(&self) -> &FormattedError {
        match self {
            Self::AstError(error) => error.formatted(),
            Self::ParserError(error) => error.formatted(),
        }
    }
}

/// The umbrella warning type for the Dryad library.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DryadWarning {
    /// Represents a parser warning in the Dryad warning system.
    #[error(transparent)]
    ParserWarning(#[from] ParserWarning),
}

impl DryadWarning {
    /// Implements the trait for Dryad warning codes.
    pub fn warning_code(&self) -> String {
        match self {
            Self::ParserWarning(warning) => warning.error_code(),
        }
    }

    /// Returns the formatted payload of the warning.
    pub fn formatted(&self) -> &FormattedError {
        match self {
            Self::ParserWarning(warning) => warning.formatted(),
        }
    }
}

/// A result type alias using the umbrella error.
pub type Result<T, E = DryadError> = core::result::Result<T, E>;
