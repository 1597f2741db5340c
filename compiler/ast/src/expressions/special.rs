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

use crate::{fmt_comma_separated, Expression, Identifier, NodeID, TemplateArgument, Type, TypeofTarget};
use dryad_span::Span;

use serde::{Deserialize, Serialize};
use std::fmt;

/// `$`, `this`, `super`, and the `__FILE__` keyword family.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialKeywordExpression {
    pub keyword: SpecialKeyword,
    /// The span of the keyword token.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for SpecialKeywordExpression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.keyword.fmt(f)
    }
}

crate::simple_node_impl!(SpecialKeywordExpression);

/// The single-token special primaries.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpecialKeyword {
    Dollar,
    This,
    Super,
    File,
    FileFullPath,
    Line,
    Module,
    Function,
    PrettyFunction,
    Date,
    Time,
    Timestamp,
    Vendor,
    Version,
}

impl SpecialKeyword {
    /// The keyword as written in source.
    pub fn as_str(self) -> &'static str {
        use SpecialKeyword::*;
        match self {
            Dollar => "$",
            This => "this",
            Super => "super",
            File => "__FILE__",
            FileFullPath => "__FILE_FULL_PATH__",
            Line => "__LINE__",
            Module => "__MODULE__",
            Function => "__FUNCTION__",
            PrettyFunction => "__PRETTY_FUNCTION__",
            Date => "__DATE__",
            Time => "__TIME__",
            Timestamp => "__TIMESTAMP__",
            Vendor => "__VENDOR__",
            Version => "__VERSION__",
        }
    }
}

impl fmt::Display for SpecialKeyword {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A `typeof(expression)` or `typeof(return)` in expression position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeofExpression {
    pub target: TypeofTarget,
    /// The span of the `typeof`.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for TypeofExpression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "typeof({})", self.target)
    }
}

crate::simple_node_impl!(TypeofExpression);

/// A `typeid(Type)` or `typeid(expression)` expression.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeidExpression {
    pub target: TypeidTarget,
    /// The span of the `typeid`.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

/// What a `typeid` inspects.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeidTarget {
    Type(Type),
    Expression(Box<Expression>),
}

impl fmt::Display for TypeidExpression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.target {
            TypeidTarget::Type(type_) => write!(f, "typeid({})", type_),
            TypeidTarget::Expression(expression) => write!(f, "typeid({})", expression),
        }
    }
}

crate::simple_node_impl!(TypeidExpression);

/// A `mixin(arguments)` expression.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MixinExpression {
    /// The mixed-in pieces, concatenated and compiled by semantics.
    pub arguments: Vec<Expression>,
    /// The span of the `mixin`.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for MixinExpression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "mixin(")?;
        fmt_comma_separated(f, &self.arguments)?;
        write!(f, ")")
    }
}

crate::simple_node_impl!(MixinExpression);

/// An `import(expression)` expression.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportExpression {
    pub argument: Box<Expression>,
    /// The span of the `import`.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for ImportExpression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "import({})", self.argument)
    }
}

crate::simple_node_impl!(ImportExpression);

/// A `__traits(name, args...)` expression.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitsExpression {
    /// The trait being queried, e.g. `compiles`.
    pub name: Identifier,
    /// The remaining arguments.
    pub arguments: Vec<TemplateArgument>,
    /// The span of the `__traits`.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for TraitsExpression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "__traits({}", self.name)?;
        for argument in &self.arguments {
            write!(f, ", {}", argument)?;
        }
        write!(f, ")")
    }
}

crate::simple_node_impl!(TraitsExpression);

/// A type in expression position, e.g. the parenthesized type of
/// `(const(int)).max` or the callee of `immutable(char)(c)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeExpression {
    pub type_: Type,
    /// The span of the type's first token.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for TypeExpression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({})", self.type_)
    }
}

crate::simple_node_impl!(TypeExpression);
