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

//! The parser proper: cursor context, classifier predicates, and one
//! module per grammar family.

mod context;
pub use context::*;

pub mod asm;
pub mod classify;
pub mod declaration;
pub mod expression;
pub mod file;
pub mod statement;
pub mod type_;

use crate::tokens::Relex;

/// Behavior switches of a parser instance.
#[derive(Default, Clone, Copy)]
pub struct ParserOptions<'a> {
    /// When `false` (the default), successfully matched function-body
    /// brace blocks are parsed for diagnostics but their statements are
    /// dropped, keeping only the `had_a_body` flag.
    pub retain_function_bodies: bool,
    /// The lexer collaborator for `q{...}` string-mixin payloads; when
    /// absent, such payloads are recorded without re-parsing.
    pub relexer: Option<&'a dyn Relex>,
}
