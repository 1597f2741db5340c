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

use crate::{Identifier, NodeID, TemplateParameters, Type};
use dryad_span::Span;

use serde::{Deserialize, Serialize};
use std::fmt;

/// An `is(...)` expression in all of its forms:
/// `is(T)`, `is(T ident)`, `is(T : Spec)`, `is(T == Spec)`,
/// `is(T ident == Spec, TemplateParameterList)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IsExpression {
    /// The inspected type.
    pub type_: Type,
    /// The introduced alias, if any.
    pub identifier: Option<Identifier>,
    /// The `:`/`==` comparison, if any.
    pub comparison: Option<IsComparison>,
    /// The trailing template parameter list, if any.
    pub template_parameters: Option<TemplateParameters>,
    /// The span of the `is`.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for IsExpression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "is({}", self.type_)?;
        if let Some(identifier) = &self.identifier {
            write!(f, " {}", identifier)?;
        }
        if let Some(comparison) = &self.comparison {
            write!(f, " {}", comparison)?;
        }
        if let Some(template_parameters) = &self.template_parameters {
            write!(f, ", {}", template_parameters)?;
        }
        write!(f, ")")
    }
}

crate::simple_node_impl!(IsExpression);

/// The comparison half of an `is` expression.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IsComparison {
    /// `:` (implicit conversion) or `==` (exact match).
    pub kind: IsComparisonKind,
    /// The compared-to target.
    pub target: IsTarget,
}

impl fmt::Display for IsComparison {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.target)
    }
}

/// Whether the comparison tests implicit conversion or exact identity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IsComparisonKind {
    /// `:`
    Implicit,
    /// `==`
    Exact,
}

impl fmt::Display for IsComparisonKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Implicit => write!(f, ":"),
            Self::Exact => write!(f, "=="),
        }
    }
}

/// The right-hand side of an `is` comparison.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IsTarget {
    /// An ordinary type.
    Type(Type),
    /// One of the specialization keywords.
    Specialization(IsSpecialization),
}

impl fmt::Display for IsTarget {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Type(type_) => type_.fmt(f),
            Self::Specialization(specialization) => specialization.fmt(f),
        }
    }
}

/// The specialization keywords admitted after `==` / `:` in `is(...)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IsSpecialization {
    Struct,
    Union,
    Class,
    Interface,
    Enum,
    Function,
    Delegate,
    Super,
    Const,
    Immutable,
    Inout,
    Shared,
    Return,
    Parameters,
    Module,
    Package,
}

impl IsSpecialization {
    pub fn as_str(self) -> &'static str {
        use IsSpecialization::*;
        match self {
            Struct => "struct",
            Union => "union",
            Class => "class",
            Interface => "interface",
            Enum => "enum",
            Function => "function",
            Delegate => "delegate",
            Super => "super",
            Const => "const",
            Immutable => "immutable",
            Inout => "inout",
            Shared => "shared",
            Return => "return",
            Parameters => "__parameters",
            Module => "module",
            Package => "package",
        }
    }
}

impl fmt::Display for IsSpecialization {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
