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

use crate::{Expression, NodeID, Statement};
use dryad_span::Span;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A `while (condition) body` loop.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhileStatement {
    pub condition: Expression,
    pub body: Box<Statement>,
    /// The span of the `while`.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for WhileStatement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "while ({}) {}", self.condition, self.body)
    }
}

crate::simple_node_impl!(WhileStatement);

/// A `do body while (condition);` loop.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoWhileStatement {
    pub body: Box<Statement>,
    pub condition: Expression,
    /// The span of the `do`.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for DoWhileStatement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "do {} while ({});", self.body, self.condition)
    }
}

crate::simple_node_impl!(DoWhileStatement);

/// A C-style `for (initializer; condition; increment) body` loop.
/// Every header slot may be omitted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForStatement {
    /// The initializer statement, `None` when written as a bare `;`.
    pub initializer: Option<Box<Statement>>,
    pub condition: Option<Expression>,
    pub increment: Option<Expression>,
    pub body: Box<Statement>,
    /// The span of the `for`.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for ForStatement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "for (")?;
        match &self.initializer {
            Some(initializer) => write!(f, "{}", initializer)?,
            None => write!(f, ";")?,
        }
        if let Some(condition) = &self.condition {
            write!(f, " {}", condition)?;
        }
        write!(f, ";")?;
        if let Some(increment) = &self.increment {
            write!(f, " {}", increment)?;
        }
        write!(f, ") {}", self.body)
    }
}

crate::simple_node_impl!(ForStatement);
