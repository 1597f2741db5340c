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

use crate::{
    Block, Declaration, Expression, ForeachKind, ForeachType, Node, NodeID, PragmaExpression,
};
use dryad_span::Span;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A `static assert(condition, message?);` declaration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticAssertDeclaration {
    pub condition: Expression,
    pub message: Option<Expression>,
    /// The span of the `static`.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for StaticAssertDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "static assert({}", self.condition)?;
        if let Some(message) = &self.message {
            write!(f, ", {}", message)?;
        }
        write!(f, ");")
    }
}

crate::simple_node_impl!(StaticAssertDeclaration);

/// A `static foreach (...) { declarations }` at declaration level.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticForeachDeclaration {
    pub kind: ForeachKind,
    /// The loop variables.
    pub variables: Vec<ForeachType>,
    /// The iterated aggregate, or the lower bound of a range.
    pub aggregate: Expression,
    /// The upper bound of a range, absent in the aggregate form.
    pub high: Option<Expression>,
    /// The declarations of the body.
    pub declarations: Vec<Declaration>,
    /// The span of the `static`.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for StaticForeachDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "static {} ({}; {}",
            self.kind,
            self.variables.iter().format(", "),
            self.aggregate
        )?;
        if let Some(high) = &self.high {
            write!(f, " .. {}", high)?;
        }
        write!(f, ") {{ {} }}", self.declarations.iter().format(" "))
    }
}

crate::simple_node_impl!(StaticForeachDeclaration);

/// An `invariant` declaration, in its block or expression form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvariantDeclaration {
    /// The block of `invariant { ... }` / `invariant () { ... }`.
    pub block: Option<Block>,
    /// The condition of `invariant (expression);`.
    pub expression: Option<Expression>,
    /// The span of the `invariant`.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for InvariantDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (&self.block, &self.expression) {
            (Some(block), _) => write!(f, "invariant {}", block),
            (None, Some(expression)) => write!(f, "invariant({});", expression),
            (None, None) => write!(f, "invariant;"),
        }
    }
}

crate::simple_node_impl!(InvariantDeclaration);

/// A `unittest { ... }` block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnittestDeclaration {
    pub block: Block,
    /// The span of the `unittest`.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for UnittestDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unittest {}", self.block)
    }
}

crate::simple_node_impl!(UnittestDeclaration);

/// A `pragma(...);` declaration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PragmaDeclaration {
    pub pragma: PragmaExpression,
    /// The span of the `pragma`.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for PragmaDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{};", self.pragma)
    }
}

crate::simple_node_impl!(PragmaDeclaration);
