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

use crate::{NodeID};
use dryad_span::Span;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A literal token in expression position.
///
/// Literal text is kept verbatim; the parser does not interpret numeric
/// values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiteralExpression {
    pub value: LiteralValue,
    /// The span of the literal token.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for LiteralExpression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.value.fmt(f)
    }
}

crate::simple_node_impl!(LiteralExpression);

/// The kinds of literal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LiteralValue {
    /// An integral literal with its suffix-derived kind.
    Integer(IntegerKind, String),
    /// A floating literal with its suffix-derived kind.
    Float(FloatKind, String),
    /// A character literal.
    Character(String),
    /// A string literal; adjacent literals have already been concatenated.
    String(StringKind, String),
    /// `true` or `false`.
    Boolean(bool),
    /// `null`.
    Null,
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Integer(_, text) => write!(f, "{}", text),
            Self::Float(_, text) => write!(f, "{}", text),
            Self::Character(text) => write!(f, "'{}'", text),
            Self::String(_, text) => write!(f, "\"{}\"", text),
            Self::Boolean(value) => write!(f, "{}", value),
            Self::Null => write!(f, "null"),
        }
    }
}

/// The width and signedness class of an integral literal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntegerKind {
    Int,
    Uint,
    Long,
    Ulong,
}

/// The kind of a floating literal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FloatKind {
    Float,
    Double,
    Real,
    Ifloat,
    Idouble,
    Ireal,
}

/// The encoding of a string literal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StringKind {
    /// `string` (UTF-8)
    Utf8,
    /// `wstring` (UTF-16)
    Utf16,
    /// `dstring` (UTF-32)
    Utf32,
}
