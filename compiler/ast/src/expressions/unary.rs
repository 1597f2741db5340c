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

use crate::{Expression, NodeID};
use dryad_span::Span;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A prefix unary expression, e.g. `-operand`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnaryExpression {
    /// The operand.
    pub operand: Box<Expression>,
    /// The prefix operator.
    pub op: UnaryOperation,
    /// The span of the operator token.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for UnaryExpression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.op, self.operand)
    }
}

crate::simple_node_impl!(UnaryExpression);

/// A prefix unary operator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryOperation {
    /// `&`
    AddressOf,
    /// `!`
    Not,
    /// `*`
    Deref,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `~`
    Complement,
    /// `++`
    PreIncrement,
    /// `--`
    PreDecrement,
}

impl UnaryOperation {
    /// The operator as written in source.
    pub fn as_str(self) -> &'static str {
        use UnaryOperation::*;
        match self {
            AddressOf => "&",
            Not => "!",
            Deref => "*",
            Plus => "+",
            Minus => "-",
            Complement => "~",
            PreIncrement => "++",
            PreDecrement => "--",
        }
    }
}

impl fmt::Display for UnaryOperation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A postfix `++` or `--` expression.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostfixExpression {
    /// The operand.
    pub operand: Box<Expression>,
    /// The postfix operator.
    pub op: PostfixOperation,
    /// The span of the operand's first token.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for PostfixExpression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.operand, self.op)
    }
}

crate::simple_node_impl!(PostfixExpression);

/// A postfix operator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PostfixOperation {
    /// `++`
    Increment,
    /// `--`
    Decrement,
}

impl fmt::Display for PostfixOperation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Increment => write!(f, "++"),
            Self::Decrement => write!(f, "--"),
        }
    }
}
