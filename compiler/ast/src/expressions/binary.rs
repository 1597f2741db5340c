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

/// A binary operator expression, e.g. `left + right`.
///
/// All binary families are left-associative: the left child may itself be
/// a node of the same operator family, the right child is always from the
/// next-higher precedence level.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryExpression {
    /// The left operand.
    pub left: Box<Expression>,
    /// The right operand.
    pub right: Box<Expression>,
    /// The operator.
    pub op: BinaryOperation,
    /// The span of the left operand's first token.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for BinaryExpression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.op, self.right)
    }
}

crate::simple_node_impl!(BinaryExpression);

/// A binary operator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOperation {
    /// `,`
    Comma,
    /// `||`
    OrOr,
    /// `&&`
    AndAnd,
    /// `|`
    BitOr,
    /// `^`
    BitXor,
    /// `&`
    BitAnd,
    /// `==`
    Eq,
    /// `!=`
    NotEq,
    /// `is`
    Is,
    /// `!is`
    NotIs,
    /// `in`
    In,
    /// `!in`
    NotIn,
    /// `<`
    Lt,
    /// `<=`
    LtEq,
    /// `>`
    Gt,
    /// `>=`
    GtEq,
    /// `<>`
    LtGt,
    /// `<>=`
    LtGtEq,
    /// `!<>`
    NotLtGt,
    /// `!<>=`
    NotLtGtEq,
    /// `!<`
    NotLt,
    /// `!<=`
    NotLtEq,
    /// `!>`
    NotGt,
    /// `!>=`
    NotGtEq,
    /// `<<`
    Shl,
    /// `>>`
    Shr,
    /// `>>>`
    UShr,
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `~`
    Cat,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Rem,
    /// `^^`
    Pow,
}

impl BinaryOperation {
    /// The operator as written in source.
    pub fn as_str(self) -> &'static str {
        use BinaryOperation::*;
        match self {
            Comma => ",",
            OrOr => "||",
            AndAnd => "&&",
            BitOr => "|",
            BitXor => "^",
            BitAnd => "&",
            Eq => "==",
            NotEq => "!=",
            Is => "is",
            NotIs => "!is",
            In => "in",
            NotIn => "!in",
            Lt => "<",
            LtEq => "<=",
            Gt => ">",
            GtEq => ">=",
            LtGt => "<>",
            LtGtEq => "<>=",
            NotLtGt => "!<>",
            NotLtGtEq => "!<>=",
            NotLt => "!<",
            NotLtEq => "!<=",
            NotGt => "!>",
            NotGtEq => "!>=",
            Shl => "<<",
            Shr => ">>",
            UShr => ">>>",
            Add => "+",
            Sub => "-",
            Cat => "~",
            Mul => "*",
            Div => "/",
            Rem => "%",
            Pow => "^^",
        }
    }
}

impl fmt::Display for BinaryOperation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
