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

use crate::{Expression, Identifier, NodeID, TemplateArgument, Type};
use dryad_span::Span;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The parenthesized parameter list of a template, `(T, alias f, int n = 3)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateParameters {
    pub parameters: Vec<TemplateParameter>,
    /// The span of the opening paren.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for TemplateParameters {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({})", self.parameters.iter().format(", "))
    }
}

crate::simple_node_impl!(TemplateParameters);

/// A single template parameter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateParameter {
    pub kind: TemplateParameterKind,
    /// The span of the parameter's first token.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for TemplateParameter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.kind.fmt(f)
    }
}

crate::simple_node_impl!(TemplateParameter);

/// A type parameter with its optional specialization and default,
/// also the payload of a `this` parameter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateTypeParameter {
    pub name: Identifier,
    /// `: Specialization`
    pub specialization: Option<Type>,
    /// `= Default`
    pub default: Option<Type>,
}

impl fmt::Display for TemplateTypeParameter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(specialization) = &self.specialization {
            write!(f, " : {}", specialization)?;
        }
        if let Some(default) = &self.default {
            write!(f, " = {}", default)?;
        }
        Ok(())
    }
}

/// The kinds of template parameter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemplateParameterKind {
    /// `T`, `T : Spec`, `T = Default`
    Type(TemplateTypeParameter),
    /// `int n`, `int n : 3`, `int n = 3`
    Value {
        type_: Type,
        name: Identifier,
        specialization: Option<Expression>,
        default: Option<Expression>,
    },
    /// `alias f`, `alias T f : Spec = Default`
    Alias {
        type_: Option<Type>,
        name: Identifier,
        specialization: Option<TemplateArgument>,
        default: Option<TemplateArgument>,
    },
    /// `Args...`
    Tuple(Identifier),
    /// `this T`
    This(TemplateTypeParameter),
}

impl fmt::Display for TemplateParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Type(parameter) => parameter.fmt(f),
            Self::Value { type_, name, specialization, default } => {
                write!(f, "{} {}", type_, name)?;
                if let Some(specialization) = specialization {
                    write!(f, " : {}", specialization)?;
                }
                if let Some(default) = default {
                    write!(f, " = {}", default)?;
                }
                Ok(())
            }
            Self::Alias { type_, name, specialization, default } => {
                write!(f, "alias ")?;
                if let Some(type_) = type_ {
                    write!(f, "{} ", type_)?;
                }
                write!(f, "{}", name)?;
                if let Some(specialization) = specialization {
                    write!(f, " : {}", specialization)?;
                }
                if let Some(default) = default {
                    write!(f, " = {}", default)?;
                }
                Ok(())
            }
            Self::Tuple(name) => write!(f, "{}...", name),
            Self::This(parameter) => write!(f, "this {}", parameter),
        }
    }
}
