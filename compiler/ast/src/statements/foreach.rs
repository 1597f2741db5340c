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

use crate::{Expression, Identifier, NodeID, Statement, Type, TypeConstructor};
use dryad_span::Span;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// A `foreach` or `foreach_reverse` loop over an aggregate or a range.
///
/// In the range form (`low .. high`) the aggregate slot holds the lower
/// bound and `high` the upper; the range form admits exactly one loop
/// variable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeachStatement {
    pub kind: ForeachKind,
    /// The loop variables.
    pub variables: Vec<ForeachType>,
    /// The iterated aggregate, or the lower bound of a range.
    pub aggregate: Expression,
    /// The upper bound of a range, absent in the aggregate form.
    pub high: Option<Expression>,
    pub body: Box<Statement>,
    /// The span of the `foreach` keyword.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for ForeachStatement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({}; {}", self.kind, self.variables.iter().format(", "), self.aggregate)?;
        if let Some(high) = &self.high {
            write!(f, " .. {}", high)?;
        }
        write!(f, ") {}", self.body)
    }
}

crate::simple_node_impl!(ForeachStatement);

/// Whether a loop iterates forward or in reverse.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForeachKind {
    Foreach,
    ForeachReverse,
}

impl fmt::Display for ForeachKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Foreach => write!(f, "foreach"),
            Self::ForeachReverse => write!(f, "foreach_reverse"),
        }
    }
}

/// One loop variable of a foreach: `ref const int i`, `i`, `int i`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeachType {
    /// `true` when declared `ref`.
    pub is_ref: bool,
    /// Type constructors preceding the type.
    pub constructors: SmallVec<[TypeConstructor; 2]>,
    /// The declared type, absent when inferred.
    pub type_: Option<Type>,
    /// The variable name.
    pub name: Identifier,
    /// The span of the variable's first token.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for ForeachType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_ref {
            write!(f, "ref ")?;
        }
        for constructor in &self.constructors {
            write!(f, "{} ", constructor)?;
        }
        if let Some(type_) = &self.type_ {
            write!(f, "{} ", type_)?;
        }
        write!(f, "{}", self.name)
    }
}

crate::simple_node_impl!(ForeachType);
