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

pub mod base;
pub use base::*;

pub mod builtin;
pub use builtin::*;

use crate::{Expression, MemberFunctionAttribute, NodeID, Parameters};
use dryad_span::Span;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// A type: an optional run of type constructors, a base type, and a list
/// of suffixes applied left to right.
///
/// `const int[]*` has one constructor, base `int`, and the suffixes
/// `[]` then `*`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Type {
    /// The `const`/`immutable`/`inout`/`shared` run before the base type.
    pub constructors: SmallVec<[TypeConstructor; 2]>,
    /// The base type.
    pub base: BaseType,
    /// The suffixes, outermost last.
    pub suffixes: Vec<TypeSuffix>,
    /// The span of the first token of the type.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for constructor in &self.constructors {
            write!(f, "{} ", constructor)?;
        }
        write!(f, "{}", self.base)?;
        for suffix in &self.suffixes {
            write!(f, "{}", suffix)?;
        }
        Ok(())
    }
}

crate::simple_node_impl!(Type);

/// A type constructor keyword.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeConstructor {
    Const,
    Immutable,
    Inout,
    Shared,
}

impl fmt::Display for TypeConstructor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Const => write!(f, "const"),
            Self::Immutable => write!(f, "immutable"),
            Self::Inout => write!(f, "inout"),
            Self::Shared => write!(f, "shared"),
        }
    }
}

/// A single type suffix.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSuffix {
    pub kind: TypeSuffixKind,
    /// The span of the suffix's first token.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for TypeSuffix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.kind.fmt(f)
    }
}

crate::simple_node_impl!(TypeSuffix);

/// The kinds of type suffix.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeSuffixKind {
    /// `*`
    Pointer,
    /// One of the `[ ... ]` forms.
    Array(ArraySuffix),
    /// `delegate (params) attrs` or `function (params) attrs`.
    Callable {
        kind: CallableKind,
        parameters: Parameters,
        attributes: Vec<MemberFunctionAttribute>,
    },
}

impl fmt::Display for TypeSuffixKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Pointer => write!(f, "*"),
            Self::Array(array) => array.fmt(f),
            Self::Callable { kind, parameters, attributes } => {
                write!(f, " {} {}", kind, parameters)?;
                for attribute in attributes {
                    write!(f, " {}", attribute)?;
                }
                Ok(())
            }
        }
    }
}

/// The bracketed type suffixes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArraySuffix {
    /// `[]` — a dynamic array.
    Dynamic,
    /// `[KeyType]` — an associative array.
    Type(Box<Type>),
    /// `[length]` — a static array.
    Index(Box<Expression>),
    /// `[low .. high]` — a slice type.
    Slice { low: Box<Expression>, high: Box<Expression> },
}

impl fmt::Display for ArraySuffix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Dynamic => write!(f, "[]"),
            Self::Type(type_) => write!(f, "[{}]", type_),
            Self::Index(length) => write!(f, "[{}]", length),
            Self::Slice { low, high } => write!(f, "[{} .. {}]", low, high),
        }
    }
}

/// Whether a callable suffix is a delegate or a function pointer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CallableKind {
    Delegate,
    Function,
}

impl fmt::Display for CallableKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Delegate => write!(f, "delegate"),
            Self::Function => write!(f, "function"),
        }
    }
}

/// A comma-joined display helper shared by the type and expression families.
pub(crate) fn fmt_comma_separated<T: fmt::Display>(
    f: &mut fmt::Formatter,
    items: &[T],
) -> fmt::Result {
    write!(f, "{}", items.iter().format(", "))
}
