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

use crate::{BuiltinType, Expression, Identifier, NodeID, TemplateInstance, Type, TypeConstructor};
use dryad_span::Span;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The base of a type, before suffixes are applied.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BaseType {
    /// A built-in scalar type.
    Builtin(BuiltinType),
    /// A possibly-dotted symbol, e.g. `.std.stdio.File` or `Array!int`.
    Symbol(SymbolChain),
    /// `typeof(expression)` or `typeof(return)`, optionally followed by `. chain`.
    Typeof(Box<TypeofType>),
    /// `const(T)`, `immutable(T)`, `inout(T)`, `shared(T)`.
    Qualified(Box<QualifiedType>),
    /// `__vector(T)`.
    Vector(Box<VectorType>),
    /// `__traits(...)` in type position; the argument region is consumed,
    /// not modeled.
    Traits(TraitsType),
}

impl fmt::Display for BaseType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Builtin(builtin) => builtin.fmt(f),
            Self::Symbol(symbol) => symbol.fmt(f),
            Self::Typeof(typeof_) => typeof_.fmt(f),
            Self::Qualified(qualified) => qualified.fmt(f),
            Self::Vector(vector) => vector.fmt(f),
            Self::Traits(traits) => traits.fmt(f),
        }
    }
}

/// A chain of identifiers or template instances with an optional leading dot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolChain {
    /// `true` if the chain starts at module scope (`.foo`).
    pub leading_dot: bool,
    /// The segments of the chain, in source order.
    pub segments: Vec<SymbolSegment>,
    /// The span of the first token.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for SymbolChain {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.leading_dot {
            write!(f, ".")?;
        }
        write!(f, "{}", self.segments.iter().format("."))
    }
}

crate::simple_node_impl!(SymbolChain);

/// One segment of a [`SymbolChain`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SymbolSegment {
    Identifier(Identifier),
    TemplateInstance(TemplateInstance),
}

impl fmt::Display for SymbolSegment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Identifier(identifier) => identifier.fmt(f),
            Self::TemplateInstance(instance) => instance.fmt(f),
        }
    }
}

/// What a `typeof` inspects.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeofTarget {
    /// `typeof(expression)`
    Expression(Box<Expression>),
    /// `typeof(return)`
    Return,
}

impl fmt::Display for TypeofTarget {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Expression(expression) => expression.fmt(f),
            Self::Return => write!(f, "return"),
        }
    }
}

/// A `typeof(...)` base type with its optional trailing chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeofType {
    pub target: TypeofTarget,
    /// The `. a.b` chain following the closing paren, if any.
    pub chain: Option<SymbolChain>,
    pub span: Span,
    pub id: NodeID,
}

impl fmt::Display for TypeofType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "typeof({})", self.target)?;
        if let Some(chain) = &self.chain {
            write!(f, ".{}", chain)?;
        }
        Ok(())
    }
}

crate::simple_node_impl!(TypeofType);

/// A parenthesized qualified type, `const(T)` and friends.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualifiedType {
    pub constructor: TypeConstructor,
    pub inner: Type,
    pub span: Span,
    pub id: NodeID,
}

impl fmt::Display for QualifiedType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}({})", self.constructor, self.inner)
    }
}

crate::simple_node_impl!(QualifiedType);

/// A `__vector(T)` base type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VectorType {
    pub element: Type,
    pub span: Span,
    pub id: NodeID,
}

impl fmt::Display for VectorType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "__vector({})", self.element)
    }
}

crate::simple_node_impl!(VectorType);

/// A `__traits(...)` region used where a type is expected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitsType {
    pub span: Span,
    pub id: NodeID,
}

impl fmt::Display for TraitsType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "__traits(...)")
    }
}

crate::simple_node_impl!(TraitsType);
