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

//! The token contract consumed by the parser.
//!
//! Lexing is out of scope for this crate; any lexer that produces this
//! `Token` shape can drive the parser. The [`Relex`] trait is the seam
//! through which the parser hands `q{...}` token-string payloads back to
//! a lexer when parsing string mixins.

pub mod kind;
pub use kind::*;

use serde::{Deserialize, Serialize};
use std::fmt;

/// One lexed token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The discriminated kind.
    pub kind: TokenKind,
    /// The lexeme text, for identifiers, literals, and script lines.
    pub text: Option<String>,
    /// The leading doc comment attached to this token, if any.
    pub comment: Option<String>,
    /// The trailing line comment attached to this token, if any.
    pub trailing_comment: Option<String>,
    /// The byte offset of the token in the source buffer.
    pub offset: usize,
    /// The 1-based source line.
    pub line: usize,
    /// The 1-based source column.
    pub column: usize,
}

impl Token {
    /// Returns a new token of `kind` with no text and a zero position.
    pub fn new(kind: TokenKind) -> Self {
        Self {
            kind,
            text: None,
            comment: None,
            trailing_comment: None,
            offset: 0,
            line: 0,
            column: 0,
        }
    }

    /// Returns a new token of `kind` carrying `text`.
    pub fn with_text(kind: TokenKind, text: impl Into<String>) -> Self {
        Self { text: Some(text.into()), ..Self::new(kind) }
    }

    /// Returns the token's text, falling back to the kind's spelling.
    pub fn text_or_spelling(&self) -> &str {
        match &self.text {
            Some(text) => text,
            None => self.kind.as_str(),
        }
    }

    /// Returns an `Eof` token positioned at the given line and column.
    pub fn eof(offset: usize, line: usize, column: usize) -> Self {
        Self { offset, line, column, ..Self::new(TokenKind::Eof) }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.text_or_spelling())
    }
}

/// The lexer collaborator used to re-lex `q{...}` string-mixin payloads.
///
/// `line_offset` is the 1-based line the payload starts on in the outer
/// file; implementations shift the lines of the produced tokens by it so
/// diagnostics inside mixins point into the right place.
pub trait Relex {
    /// Lexes `source` into tokens, or describes why it could not.
    fn relex(&self, source: &str, line_offset: usize) -> Result<Vec<Token>, String>;
}
