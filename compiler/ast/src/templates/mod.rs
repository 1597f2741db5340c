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

pub mod parameters;
pub use parameters::*;

use crate::{Expression, Identifier, NodeID, Type};
use dryad_span::Span;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A template instantiation, `Name!arg` or `Name!(args...)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateInstance {
    /// The template name.
    pub identifier: Identifier,
    /// The instantiation arguments.
    pub arguments: TemplateArguments,
    /// The span of the template name.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for TemplateInstance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}!{}", self.identifier, self.arguments)
    }
}

crate::simple_node_impl!(TemplateInstance);

/// The argument list of a template instantiation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateArguments {
    /// The arguments in source order. A single-token instantiation
    /// (`Name!arg`) produces a one-element list.
    pub arguments: Vec<TemplateArgument>,
    /// `true` if the arguments were written without parentheses.
    pub single_token: bool,
    /// The span of the `!`.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for TemplateArguments {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.single_token {
            if let Some(argument) = self.arguments.first() {
                return argument.fmt(f);
            }
        }
        write!(f, "({})", self.arguments.iter().format(", "))
    }
}

crate::simple_node_impl!(TemplateArguments);

/// A template argument: a type or an expression.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemplateArgument {
    Type(Type),
    Expression(Expression),
}

impl fmt::Display for TemplateArgument {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Type(type_) => type_.fmt(f),
            Self::Expression(expression) => expression.fmt(f),
        }
    }
}

/// A template constraint, `if (expression)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraint {
    pub expression: Expression,
    /// The span of the `if`.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "if ({})", self.expression)
    }
}

crate::simple_node_impl!(Constraint);
