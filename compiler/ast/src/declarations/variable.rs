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

use crate::{Expression, Identifier, NodeID, TemplateParameters, Type, TypeSuffix};
use dryad_span::Span;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A variable declaration, `Type name = init, name2;`. The type is
/// absent for `auto`-style declarations whose storage class sits in the
/// enclosing declaration's attributes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableDeclaration {
    pub type_: Option<Type>,
    pub declarators: Vec<Declarator>,
    /// The span of the declaration's first token.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for VariableDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(type_) = &self.type_ {
            write!(f, "{} ", type_)?;
        }
        write!(f, "{};", self.declarators.iter().format(", "))
    }
}

crate::simple_node_impl!(VariableDeclaration);

/// One declared name with its optional initializer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declarator {
    pub name: Identifier,
    /// Template parameters of a templated variable,
    /// `enum bool empty(T) = T.length == 0;`.
    pub template_parameters: Option<TemplateParameters>,
    /// C-style array suffixes attached to the name (deprecated syntax,
    /// recorded after warning).
    pub c_style_suffixes: Vec<TypeSuffix>,
    pub initializer: Option<Initializer>,
    /// The span of the name.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for Declarator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(template_parameters) = &self.template_parameters {
            write!(f, "{}", template_parameters)?;
        }
        for suffix in &self.c_style_suffixes {
            write!(f, "{}", suffix)?;
        }
        if let Some(initializer) = &self.initializer {
            write!(f, " = {}", initializer)?;
        }
        Ok(())
    }
}

crate::simple_node_impl!(Declarator);

/// The initializer forms.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Initializer {
    /// `= void`
    Void,
    /// An expression initializer.
    Expression(Expression),
    /// A bracketed array initializer, possibly with keys.
    Array(ArrayInitializer),
    /// A braced struct initializer.
    Struct(StructInitializer),
}

impl fmt::Display for Initializer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Void => write!(f, "void"),
            Self::Expression(expression) => expression.fmt(f),
            Self::Array(array) => array.fmt(f),
            Self::Struct(struct_) => struct_.fmt(f),
        }
    }
}

/// A `[ ... ]` initializer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrayInitializer {
    pub members: Vec<ArrayMemberInitializer>,
    /// The span of the opening bracket.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for ArrayInitializer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}]", self.members.iter().format(", "))
    }
}

crate::simple_node_impl!(ArrayInitializer);

/// One `key: value` or `value` member of an array initializer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrayMemberInitializer {
    pub key: Option<Expression>,
    pub value: Box<Initializer>,
    /// The span of the member's first token.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for ArrayMemberInitializer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(key) = &self.key {
            write!(f, "{}: ", key)?;
        }
        self.value.fmt(f)
    }
}

crate::simple_node_impl!(ArrayMemberInitializer);

/// A `{ ... }` struct initializer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructInitializer {
    pub members: Vec<StructMemberInitializer>,
    /// The span of the opening brace.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for StructInitializer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{{}}}", self.members.iter().format(", "))
    }
}

crate::simple_node_impl!(StructInitializer);

/// One `name: value` or `value` member of a struct initializer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructMemberInitializer {
    pub name: Option<Identifier>,
    pub value: Box<Initializer>,
    /// The span of the member's first token.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for StructMemberInitializer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(name) = &self.name {
            write!(f, "{}: ", name)?;
        }
        self.value.fmt(f)
    }
}

crate::simple_node_impl!(StructMemberInitializer);
