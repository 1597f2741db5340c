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

use crate::{fmt_comma_separated, Expression, NodeID, Type, TypeConstructor};
use dryad_span::Span;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// A `new` expression.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewExpression {
    /// The allocated type.
    pub type_: Type,
    /// The allocation length of `new T[length]`, when the bracket could
    /// not be a type suffix.
    pub size: Option<Box<Expression>>,
    /// Constructor arguments; `None` when no parens were written.
    pub arguments: Option<Vec<Expression>>,
    /// The span of the `new`.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for NewExpression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "new {}", self.type_)?;
        if let Some(size) = &self.size {
            write!(f, "[{}]", size)?;
        }
        if let Some(arguments) = &self.arguments {
            write!(f, "(")?;
            fmt_comma_separated(f, arguments)?;
            write!(f, ")")?;
        }
        Ok(())
    }
}

crate::simple_node_impl!(NewExpression);

/// A `delete` expression.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteExpression {
    pub operand: Box<Expression>,
    /// The span of the `delete`.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for DeleteExpression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "delete {}", self.operand)
    }
}

crate::simple_node_impl!(DeleteExpression);

/// What sits between the parens of a `cast`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CastTarget {
    /// `cast(Type)`
    Type(Type),
    /// `cast(const shared)` and the other admitted qualifier runs.
    Qualifier(SmallVec<[TypeConstructor; 2]>),
    /// `cast()`
    None,
}

/// A `cast(...) operand` expression.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastExpression {
    pub target: CastTarget,
    pub operand: Box<Expression>,
    /// The span of the `cast`.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for CastExpression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "cast(")?;
        match &self.target {
            CastTarget::Type(type_) => write!(f, "{}", type_)?,
            CastTarget::Qualifier(qualifiers) => {
                let mut first = true;
                for qualifier in qualifiers {
                    if !first {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", qualifier)?;
                    first = false;
                }
            }
            CastTarget::None => {}
        }
        write!(f, "){}", self.operand)
    }
}

crate::simple_node_impl!(CastExpression);

/// An `assert(condition, message?)` expression.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssertExpression {
    pub condition: Box<Expression>,
    pub message: Option<Box<Expression>>,
    /// The span of the `assert`.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for AssertExpression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "assert({}", self.condition)?;
        if let Some(message) = &self.message {
            write!(f, ", {}", message)?;
        }
        write!(f, ")")
    }
}

crate::simple_node_impl!(AssertExpression);
