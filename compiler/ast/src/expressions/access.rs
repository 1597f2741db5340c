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

use crate::{fmt_comma_separated, Expression, NodeID};
use dryad_span::Span;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A call expression, `function(arguments)`.
///
/// Template calls keep their instantiation in the callee: `f!(T)(x)` is a
/// call whose function is a template-instance expression.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallExpression {
    /// The called expression.
    pub function: Box<Expression>,
    /// The call arguments.
    pub arguments: Vec<Expression>,
    /// The span of the callee's first token.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for CallExpression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}(", self.function)?;
        fmt_comma_separated(f, &self.arguments)?;
        write!(f, ")")
    }
}

crate::simple_node_impl!(CallExpression);

/// An index expression, `base[arguments]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexExpression {
    /// The indexed expression.
    pub base: Box<Expression>,
    /// The index arguments; more than one for multi-dimensional indexing.
    pub arguments: Vec<Expression>,
    /// The span of the base's first token.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for IndexExpression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}[", self.base)?;
        fmt_comma_separated(f, &self.arguments)?;
        write!(f, "]")
    }
}

crate::simple_node_impl!(IndexExpression);

/// A slice expression, `base[]` or `base[low .. high]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliceExpression {
    /// The sliced expression.
    pub base: Box<Expression>,
    /// The lower bound; `None` for a full slice.
    pub low: Option<Box<Expression>>,
    /// The upper bound; `None` for a full slice.
    pub high: Option<Box<Expression>>,
    /// The span of the base's first token.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for SliceExpression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (&self.low, &self.high) {
            (Some(low), Some(high)) => write!(f, "{}[{} .. {}]", self.base, low, high),
            _ => write!(f, "{}[]", self.base),
        }
    }
}

crate::simple_node_impl!(SliceExpression);

/// A member access, `base.member`. A `base` of `None` is the leading-dot
/// form that starts lookup at module scope.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberAccess {
    /// The accessed expression, absent for `.member`.
    pub base: Option<Box<Expression>>,
    /// The member: an identifier, template instance, or `new` expression.
    pub member: Box<Expression>,
    /// The span of the node's first token.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for MemberAccess {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(base) = &self.base {
            write!(f, "{}", base)?;
        }
        write!(f, ".{}", self.member)
    }
}

crate::simple_node_impl!(MemberAccess);
