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

use crate::{Expression, Identifier, NodeID, Statement, Type};
use dryad_span::Span;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A `try` statement. At least one of a catch clause or a finally clause
/// is present in a well-formed node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TryStatement {
    pub block: Box<Statement>,
    /// The typed catch clauses, in source order.
    pub catches: Vec<Catch>,
    /// The parameterless `catch { ... }`, always last when present.
    pub last_catch: Option<LastCatch>,
    pub finally: Option<Finally>,
    /// The span of the `try`.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for TryStatement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "try {}", self.block)?;
        for catch in &self.catches {
            write!(f, " {}", catch)?;
        }
        if let Some(last_catch) = &self.last_catch {
            write!(f, " {}", last_catch)?;
        }
        if let Some(finally) = &self.finally {
            write!(f, " {}", finally)?;
        }
        Ok(())
    }
}

crate::simple_node_impl!(TryStatement);

/// A typed `catch (Type name?) body` clause.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catch {
    pub type_: Type,
    pub name: Option<Identifier>,
    pub body: Box<Statement>,
    /// The span of the `catch`.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for Catch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "catch ({}", self.type_)?;
        if let Some(name) = &self.name {
            write!(f, " {}", name)?;
        }
        write!(f, ") {}", self.body)
    }
}

crate::simple_node_impl!(Catch);

/// The parameterless `catch body` clause terminating a catch list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastCatch {
    pub body: Box<Statement>,
    /// The span of the `catch`.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for LastCatch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "catch {}", self.body)
    }
}

crate::simple_node_impl!(LastCatch);

/// A `finally body` clause.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finally {
    pub body: Box<Statement>,
    /// The span of the `finally`.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for Finally {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "finally {}", self.body)
    }
}

crate::simple_node_impl!(Finally);

/// A `throw expression;` statement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThrowStatement {
    pub expression: Expression,
    /// The span of the `throw`.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for ThrowStatement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "throw {};", self.expression)
    }
}

crate::simple_node_impl!(ThrowStatement);
