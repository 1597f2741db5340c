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

/// A `with (expression) body` statement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithStatement {
    pub expression: Expression,
    pub body: Box<Statement>,
    /// The span of the `with`.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for WithStatement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "with ({}) {}", self.expression, self.body)
    }
}

crate::simple_node_impl!(WithStatement);

/// A `synchronized` statement with an optional lock expression.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynchronizedStatement {
    pub expression: Option<Expression>,
    pub body: Box<Statement>,
    /// The span of the `synchronized`.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for SynchronizedStatement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.expression {
            Some(expression) => write!(f, "synchronized ({}) {}", expression, self.body),
            None => write!(f, "synchronized {}", self.body),
        }
    }
}

crate::simple_node_impl!(SynchronizedStatement);
