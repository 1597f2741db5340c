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

use serde::{Deserialize, Serialize};
use std::fmt;

/// The location of a node's (or diagnostic's) first significant token.
///
/// `line` and `column` are 1-based, matching what lexers report and what
/// editors display. `index` is the position of the token inside the token
/// vector handed to the parser, which lets tooling map a node back onto
/// the exact token that anchored it.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// The 1-based source line of the anchoring token.
    pub line: usize,
    /// The 1-based source column of the anchoring token.
    pub column: usize,
    /// The index of the anchoring token in the parsed token vector.
    pub index: usize,
}

impl Span {
    /// Generates a new span from a line, column, and token index.
    pub fn new(line: usize, column: usize, index: usize) -> Self {
        Self { line, column, index }
    }

    /// Generates a dummy span with all defaults, used in testing and for
    /// nodes synthesized during recovery.
    pub const fn dummy() -> Self {
        Self { line: 0, column: 0, index: 0 }
    }

    /// Returns `true` if the span is the dummy span.
    pub fn is_dummy(&self) -> bool {
        *self == Self::dummy()
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_line_colon_column() {
        assert_eq!(Span::new(4, 17, 23).to_string(), "4:17");
    }

    #[test]
    fn dummy_round_trip() {
        assert!(Span::dummy().is_dummy());
        assert!(!Span::new(1, 1, 0).is_dummy());
    }
}
