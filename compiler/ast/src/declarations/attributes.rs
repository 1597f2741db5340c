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

use crate::{fmt_comma_separated, Expression, Identifier, IdentifierChain, NodeID};
use dryad_span::Span;

use serde::{Deserialize, Serialize};
use std::fmt;

/// One attribute of a declaration's attribute prefix.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub kind: AttributeKind,
    /// The span of the attribute's first token.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.kind.fmt(f)
    }
}

crate::simple_node_impl!(Attribute);

/// The kinds of attribute.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttributeKind {
    /// A single-keyword attribute, including storage classes and protection.
    Simple(AttributeKeyword),
    /// `align` or `align(expression)`.
    Align(Option<Box<Expression>>),
    /// `@identifier`, `@identifier(args)`, `@(args)`, or a bare
    /// `@ unaryExpression`.
    At(AtAttribute),
    /// `deprecated` or `deprecated(expression)`.
    Deprecated(Option<Box<Expression>>),
    /// `extern(C)`, `extern(C++, namespace.chain)`.
    Linkage(LinkageAttribute),
    /// `package` protection with its optional argument.
    Package(Option<IdentifierChain>),
    /// A `pragma(...)` attribute.
    Pragma(PragmaExpression),
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Simple(keyword) => keyword.fmt(f),
            Self::Align(None) => write!(f, "align"),
            Self::Align(Some(alignment)) => write!(f, "align({})", alignment),
            Self::At(at) => at.fmt(f),
            Self::Deprecated(None) => write!(f, "deprecated"),
            Self::Deprecated(Some(message)) => write!(f, "deprecated({})", message),
            Self::Linkage(linkage) => linkage.fmt(f),
            Self::Package(None) => write!(f, "package"),
            Self::Package(Some(chain)) => write!(f, "package({})", chain),
            Self::Pragma(pragma) => pragma.fmt(f),
        }
    }
}

/// The single-keyword attributes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttributeKeyword {
    Abstract,
    Auto,
    Const,
    Enum,
    Export,
    Extern,
    Final,
    Gshared,
    Immutable,
    Inout,
    Lazy,
    Nothrow,
    Override,
    Private,
    Protected,
    Public,
    Pure,
    Ref,
    Return,
    Scope,
    Shared,
    Static,
    Synchronized,
}

impl AttributeKeyword {
    /// The keyword as written in source.
    pub fn as_str(self) -> &'static str {
        use AttributeKeyword::*;
        match self {
            Abstract => "abstract",
            Auto => "auto",
            Const => "const",
            Enum => "enum",
            Export => "export",
            Extern => "extern",
            Final => "final",
            Gshared => "__gshared",
            Immutable => "immutable",
            Inout => "inout",
            Lazy => "lazy",
            Nothrow => "nothrow",
            Override => "override",
            Private => "private",
            Protected => "protected",
            Public => "public",
            Pure => "pure",
            Ref => "ref",
            Return => "return",
            Scope => "scope",
            Shared => "shared",
            Static => "static",
            Synchronized => "synchronized",
        }
    }
}

impl fmt::Display for AttributeKeyword {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A user-defined attribute introduced by `@`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtAttribute {
    /// The attribute name; absent in the `@(args)` form and the bare
    /// expression fallback.
    pub identifier: Option<Identifier>,
    /// The parenthesized arguments, when written.
    pub arguments: Option<Vec<Expression>>,
    /// The bare unary-expression fallback, e.g. `@(Template!arg)`'s
    /// richer shapes.
    pub expression: Option<Box<Expression>>,
    /// The span of the `@`.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for AtAttribute {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "@")?;
        if let Some(identifier) = &self.identifier {
            write!(f, "{}", identifier)?;
        }
        if let Some(arguments) = &self.arguments {
            write!(f, "(")?;
            fmt_comma_separated(f, arguments)?;
            write!(f, ")")?;
        }
        if let Some(expression) = &self.expression {
            write!(f, "{}", expression)?;
        }
        Ok(())
    }
}

crate::simple_node_impl!(AtAttribute);

/// An `extern(...)` linkage attribute.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkageAttribute {
    /// The linkage identifier, e.g. `C`, `D`, `Windows`.
    pub identifier: Identifier,
    /// `true` for `C++`.
    pub has_plus_plus: bool,
    /// The namespace chain of `extern(C++, a.b)`.
    pub chain: Option<IdentifierChain>,
    /// The span of the `extern`.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for LinkageAttribute {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "extern({}", self.identifier)?;
        if self.has_plus_plus {
            write!(f, "++")?;
        }
        if let Some(chain) = &self.chain {
            write!(f, ", {}", chain)?;
        }
        write!(f, ")")
    }
}

crate::simple_node_impl!(LinkageAttribute);

/// A `pragma(name, args...)` expression, usable as an attribute or a
/// declaration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PragmaExpression {
    pub name: Identifier,
    pub arguments: Option<Vec<Expression>>,
    /// The span of the `pragma`.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for PragmaExpression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "pragma({}", self.name)?;
        if let Some(arguments) = &self.arguments {
            write!(f, ", ")?;
            fmt_comma_separated(f, arguments)?;
        }
        write!(f, ")")
    }
}

crate::simple_node_impl!(PragmaExpression);

/// An attribute that may follow a member function's parameter list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberFunctionAttribute {
    pub kind: MemberFunctionAttributeKind,
    /// The span of the attribute's first token.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for MemberFunctionAttribute {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.kind.fmt(f)
    }
}

crate::simple_node_impl!(MemberFunctionAttribute);

/// The kinds of member function attribute.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemberFunctionAttributeKind {
    Const,
    Immutable,
    Inout,
    Shared,
    Pure,
    Nothrow,
    Return,
    Scope,
    At(AtAttribute),
}

impl fmt::Display for MemberFunctionAttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Const => write!(f, "const"),
            Self::Immutable => write!(f, "immutable"),
            Self::Inout => write!(f, "inout"),
            Self::Shared => write!(f, "shared"),
            Self::Pure => write!(f, "pure"),
            Self::Nothrow => write!(f, "nothrow"),
            Self::Return => write!(f, "return"),
            Self::Scope => write!(f, "scope"),
            Self::At(at) => at.fmt(f),
        }
    }
}

/// An attribute admitted on a function parameter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParameterAttribute {
    Const,
    Immutable,
    Inout,
    Shared,
    Final,
    In,
    Lazy,
    Out,
    Ref,
    Return,
    Scope,
    At(AtAttribute),
}

impl fmt::Display for ParameterAttribute {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Const => write!(f, "const"),
            Self::Immutable => write!(f, "immutable"),
            Self::Inout => write!(f, "inout"),
            Self::Shared => write!(f, "shared"),
            Self::Final => write!(f, "final"),
            Self::In => write!(f, "in"),
            Self::Lazy => write!(f, "lazy"),
            Self::Out => write!(f, "out"),
            Self::Ref => write!(f, "ref"),
            Self::Return => write!(f, "return"),
            Self::Scope => write!(f, "scope"),
            Self::At(at) => at.fmt(f),
        }
    }
}
