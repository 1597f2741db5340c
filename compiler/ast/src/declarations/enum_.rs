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

use crate::{Expression, Identifier, NodeID, TemplateParameters, Type};
use dryad_span::Span;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named `enum` declaration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumDeclaration {
    pub name: Identifier,
    /// The base type after `:`, if any.
    pub base_type: Option<Type>,
    /// The members; `None` for an opaque `enum E;`.
    pub members: Option<Vec<EnumMember>>,
    /// The span of the `enum`.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for EnumDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "enum {}", self.name)?;
        if let Some(base_type) = &self.base_type {
            write!(f, " : {}", base_type)?;
        }
        match &self.members {
            Some(members) => write!(f, " {{ {} }}", members.iter().format(", ")),
            None => write!(f, ";"),
        }
    }
}

crate::simple_node_impl!(EnumDeclaration);

/// One member of a named enum.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumMember {
    pub name: Identifier,
    /// The initializer after `=`, if any.
    pub value: Option<Expression>,
    /// The doc comment attached to the member.
    pub comment: Option<String>,
    /// The span of the member name.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for EnumMember {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(value) = &self.value {
            write!(f, " = {}", value)?;
        }
        Ok(())
    }
}

crate::simple_node_impl!(EnumMember);

/// An anonymous `enum { ... }` with optionally typed members.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnonymousEnumDeclaration {
    /// The base type after `:`, if any.
    pub base_type: Option<Type>,
    pub members: Vec<AnonymousEnumMember>,
    /// The span of the `enum`.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for AnonymousEnumDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "enum")?;
        if let Some(base_type) = &self.base_type {
            write!(f, " : {}", base_type)?;
        }
        write!(f, " {{ {} }}", self.members.iter().format(", "))
    }
}

crate::simple_node_impl!(AnonymousEnumDeclaration);

/// One member of an anonymous enum, optionally carrying its own type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnonymousEnumMember {
    /// The member's own type, e.g. `enum { int a = 1 }`.
    pub type_: Option<Type>,
    pub name: Identifier,
    pub value: Option<Expression>,
    /// The doc comment attached to the member.
    pub comment: Option<String>,
    /// The span of the member's first token.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for AnonymousEnumMember {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(type_) = &self.type_ {
            write!(f, "{} ", type_)?;
        }
        write!(f, "{}", self.name)?;
        if let Some(value) = &self.value {
            write!(f, " = {}", value)?;
        }
        Ok(())
    }
}

crate::simple_node_impl!(AnonymousEnumMember);

/// An eponymous template, `enum name(T) = expression;` or
/// `enum name(T) = Type;`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EponymousTemplateDeclaration {
    pub name: Identifier,
    pub template_parameters: TemplateParameters,
    pub value: EponymousValue,
    /// The span of the `enum`.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for EponymousTemplateDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "enum {}{} = {};", self.name, self.template_parameters, self.value)
    }
}

crate::simple_node_impl!(EponymousTemplateDeclaration);

/// The right-hand side of an eponymous template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EponymousValue {
    Expression(Expression),
    Type(Type),
}

impl fmt::Display for EponymousValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Expression(expression) => expression.fmt(f),
            Self::Type(type_) => type_.fmt(f),
        }
    }
}
