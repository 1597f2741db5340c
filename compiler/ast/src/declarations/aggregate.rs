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

use crate::{Constraint, Declaration, Identifier, NodeID, TemplateParameters, Type};
use dryad_span::Span;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The braced member list of an aggregate.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructBody {
    pub declarations: Vec<Declaration>,
    /// The span of the opening brace.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for StructBody {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.declarations.is_empty() {
            return write!(f, "{{ }}");
        }
        write!(f, "{{ {} }}", self.declarations.iter().format(" "))
    }
}

crate::simple_node_impl!(StructBody);

/// A `struct` declaration; anonymous when `name` is absent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructDeclaration {
    pub name: Option<Identifier>,
    pub template_parameters: Option<TemplateParameters>,
    pub constraint: Option<Constraint>,
    /// The member list; `None` for an opaque `struct S;`.
    pub body: Option<StructBody>,
    /// The span of the `struct`.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for StructDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "struct")?;
        fmt_aggregate_tail(f, &self.name, &self.template_parameters, &self.constraint, &[], &self.body)
    }
}

crate::simple_node_impl!(StructDeclaration);

/// A `union` declaration; anonymous when `name` is absent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnionDeclaration {
    pub name: Option<Identifier>,
    pub template_parameters: Option<TemplateParameters>,
    pub constraint: Option<Constraint>,
    /// The member list; `None` for an opaque `union U;`.
    pub body: Option<StructBody>,
    /// The span of the `union`.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for UnionDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "union")?;
        fmt_aggregate_tail(f, &self.name, &self.template_parameters, &self.constraint, &[], &self.body)
    }
}

crate::simple_node_impl!(UnionDeclaration);

/// A `class` declaration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDeclaration {
    pub name: Identifier,
    pub template_parameters: Option<TemplateParameters>,
    pub constraint: Option<Constraint>,
    /// The base class and interfaces after `:`.
    pub base_classes: Vec<BaseClass>,
    /// The member list; `None` for an opaque `class C;`.
    pub body: Option<StructBody>,
    /// The span of the `class`.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for ClassDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "class")?;
        fmt_aggregate_tail(
            f,
            &Some(self.name.clone()),
            &self.template_parameters,
            &self.constraint,
            &self.base_classes,
            &self.body,
        )
    }
}

crate::simple_node_impl!(ClassDeclaration);

/// An `interface` declaration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceDeclaration {
    pub name: Identifier,
    pub template_parameters: Option<TemplateParameters>,
    pub constraint: Option<Constraint>,
    /// The base interfaces after `:`.
    pub base_classes: Vec<BaseClass>,
    /// The member list; `None` for an opaque `interface I;`.
    pub body: Option<StructBody>,
    /// The span of the `interface`.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for InterfaceDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "interface")?;
        fmt_aggregate_tail(
            f,
            &Some(self.name.clone()),
            &self.template_parameters,
            &self.constraint,
            &self.base_classes,
            &self.body,
        )
    }
}

crate::simple_node_impl!(InterfaceDeclaration);

/// One entry of a base class list. Protection keywords on base classes
/// are tolerated with a warning and not recorded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseClass {
    pub type_: Type,
    /// The span of the entry's first token.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for BaseClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.type_.fmt(f)
    }
}

crate::simple_node_impl!(BaseClass);

fn fmt_aggregate_tail(
    f: &mut fmt::Formatter,
    name: &Option<Identifier>,
    template_parameters: &Option<TemplateParameters>,
    constraint: &Option<Constraint>,
    base_classes: &[BaseClass],
    body: &Option<StructBody>,
) -> fmt::Result {
    if let Some(name) = name {
        write!(f, " {}", name)?;
    }
    if let Some(template_parameters) = template_parameters {
        write!(f, "{}", template_parameters)?;
    }
    if let Some(constraint) = constraint {
        write!(f, " {}", constraint)?;
    }
    if !base_classes.is_empty() {
        write!(f, " : {}", base_classes.iter().format(", "))?;
    }
    match body {
        Some(body) => write!(f, " {}", body),
        None => write!(f, ";"),
    }
}
