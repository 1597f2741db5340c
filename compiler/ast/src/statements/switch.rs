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

use crate::{fmt_comma_separated, Expression, NodeID, Statement};
use dryad_span::Span;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A `switch (condition) body` or `final switch (condition) body`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitchStatement {
    /// `true` for `final switch`.
    pub is_final: bool,
    pub condition: Expression,
    /// The body; case groups appear as statements inside it.
    pub body: Box<Statement>,
    /// The span of the `switch` (or the `final`).
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for SwitchStatement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_final {
            write!(f, "final ")?;
        }
        write!(f, "switch ({}) {}", self.condition, self.body)
    }
}

crate::simple_node_impl!(SwitchStatement);

/// A `case a, b: statements` group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseStatement {
    /// The matched expressions.
    pub expressions: Vec<Expression>,
    /// The statements up to the next case group.
    pub statements: Vec<Statement>,
    /// The span of the `case`.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for CaseStatement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "case ")?;
        fmt_comma_separated(f, &self.expressions)?;
        write!(f, ": {}", self.statements.iter().format(" "))
    }
}

crate::simple_node_impl!(CaseStatement);

/// A `case low: .. case high: statements` range group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseRangeStatement {
    pub low: Expression,
    pub high: Expression,
    /// The statements up to the next case group.
    pub statements: Vec<Statement>,
    /// The span of the first `case`.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for CaseRangeStatement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "case {}: .. case {}: {}",
            self.low,
            self.high,
            self.statements.iter().format(" ")
        )
    }
}

crate::simple_node_impl!(CaseRangeStatement);

/// A `default: statements` group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultStatement {
    /// The statements up to the next case group.
    pub statements: Vec<Statement>,
    /// The span of the `default`.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for DefaultStatement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "default: {}", self.statements.iter().format(" "))
    }
}

crate::simple_node_impl!(DefaultStatement);
