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

use crate::{Expression, Identifier, NodeID};
use dryad_span::Span;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A `break label?;` statement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakStatement {
    pub label: Option<Identifier>,
    /// The span of the `break`.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for BreakStatement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.label {
            Some(label) => write!(f, "break {};", label),
            None => write!(f, "break;"),
        }
    }
}

crate::simple_node_impl!(BreakStatement);

/// A `continue label?;` statement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContinueStatement {
    pub label: Option<Identifier>,
    /// The span of the `continue`.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for ContinueStatement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.label {
            Some(label) => write!(f, "continue {};", label),
            None => write!(f, "continue;"),
        }
    }
}

crate::simple_node_impl!(ContinueStatement);

/// A `return expression?;` statement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnStatement {
    pub expression: Option<Expression>,
    /// The span of the `return`.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for ReturnStatement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.expression {
            Some(expression) => write!(f, "return {};", expression),
            None => write!(f, "return;"),
        }
    }
}

crate::simple_node_impl!(ReturnStatement);

/// A `goto` statement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GotoStatement {
    pub target: GotoTarget,
    /// The span of the `goto`.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for GotoStatement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "goto {};", self.target)
    }
}

crate::simple_node_impl!(GotoStatement);

/// Where a `goto` jumps.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GotoTarget {
    /// `goto label;`
    Label(Identifier),
    /// `goto default;`
    Default,
    /// `goto case;` or `goto case expression;`
    Case(Option<Expression>),
}

impl fmt::Display for GotoTarget {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Label(label) => label.fmt(f),
            Self::Default => write!(f, "default"),
            Self::Case(None) => write!(f, "case"),
            Self::Case(Some(expression)) => write!(f, "case {}", expression),
        }
    }
}
