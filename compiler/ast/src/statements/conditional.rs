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

use crate::{CompileCondition, Expression, Identifier, NodeID, Statement, Type, TypeConstructor};
use dryad_span::Span;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// An `if (condition) then (else otherwise)?` statement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IfStatement {
    /// The condition, possibly introducing a scoped variable.
    pub condition: IfCondition,
    /// The statement executed when the condition holds.
    pub then: Box<Statement>,
    /// The statement executed otherwise, if any.
    pub otherwise: Option<Box<Statement>>,
    /// The span of the `if`.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for IfStatement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "if ({}) {}", self.condition, self.then)?;
        if let Some(otherwise) = &self.otherwise {
            write!(f, " else {}", otherwise)?;
        }
        Ok(())
    }
}

crate::simple_node_impl!(IfStatement);

/// The parenthesized condition of an `if`, with its optional declared
/// variable: `if (auto x = e)`, `if (const T x = e)`, or a bare `if (e)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IfCondition {
    /// The declared condition variable, if any.
    pub variable: Option<IfConditionVariable>,
    /// The tested expression (the initializer when a variable is declared).
    pub expression: Expression,
}

impl fmt::Display for IfCondition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(variable) = &self.variable {
            write!(f, "{} = ", variable)?;
        }
        self.expression.fmt(f)
    }
}

/// The variable half of a declaring `if` condition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IfConditionVariable {
    /// `true` when declared with `auto`.
    pub is_auto: bool,
    /// Type constructors preceding the type or name.
    pub constructors: SmallVec<[TypeConstructor; 2]>,
    /// The declared type, absent for `auto` and bare-constructor forms.
    pub type_: Option<Type>,
    /// The declared name.
    pub name: Identifier,
}

impl fmt::Display for IfConditionVariable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_auto {
            write!(f, "auto ")?;
        }
        for constructor in &self.constructors {
            write!(f, "{} ", constructor)?;
        }
        if let Some(type_) = &self.type_ {
            write!(f, "{} ", type_)?;
        }
        write!(f, "{}", self.name)
    }
}

/// A conditional-compilation construct over statements. Neither branch is
/// evaluated; both are recorded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionalStatement {
    pub condition: CompileCondition,
    pub true_statement: Box<Statement>,
    pub false_statement: Option<Box<Statement>>,
    /// The span of the condition's first token.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for ConditionalStatement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.condition, self.true_statement)?;
        if let Some(false_statement) = &self.false_statement {
            write!(f, " else {}", false_statement)?;
        }
        Ok(())
    }
}

crate::simple_node_impl!(ConditionalStatement);
