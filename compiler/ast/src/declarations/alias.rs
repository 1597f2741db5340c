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

/// An `alias` declaration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasDeclaration {
    pub kind: AliasKind,
    /// The span of the `alias`.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for AliasDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.kind {
            AliasKind::New(initializers) => {
                write!(f, "alias {};", initializers.iter().format(", "))
            }
            AliasKind::Old(old) => old.fmt(f),
        }
    }
}

crate::simple_node_impl!(AliasDeclaration);

/// The two alias styles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AliasKind {
    /// `alias a = T, b = U;`
    New(Vec<AliasInitializer>),
    /// `alias T a, b;`
    Old(OldAliasDeclaration),
}

/// One `name = value` of a new-style alias.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasInitializer {
    pub name: Identifier,
    /// Template parameters of a templated alias, `alias F(T) = ...`.
    pub template_parameters: Option<TemplateParameters>,
    pub value: AliasValue,
    /// The span of the name.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for AliasInitializer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(template_parameters) = &self.template_parameters {
            write!(f, "{}", template_parameters)?;
        }
        write!(f, " = {}", self.value)
    }
}

crate::simple_node_impl!(AliasInitializer);

/// The right-hand side of a new-style alias.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AliasValue {
    /// A type (which also covers plain symbol aliases).
    Type(Type),
    /// A lambda, `alias f = x => x + 1;`.
    Lambda(Expression),
}

impl fmt::Display for AliasValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Type(type_) => type_.fmt(f),
            Self::Lambda(expression) => expression.fmt(f),
        }
    }
}

/// An old-style alias, `alias T name1, name2;`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OldAliasDeclaration {
    pub type_: Type,
    pub names: Vec<Identifier>,
}

impl fmt::Display for OldAliasDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "alias {} {};", self.type_, self.names.iter().format(", "))
    }
}

/// An `alias name this;` subtyping declaration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasThisDeclaration {
    pub name: Identifier,
    /// The span of the `alias`.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for AliasThisDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "alias {} this;", self.name)
    }
}

crate::simple_node_impl!(AliasThisDeclaration);
