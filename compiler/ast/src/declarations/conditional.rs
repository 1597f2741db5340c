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

use crate::{Declaration, Expression, NodeID};
use dryad_span::Span;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A compile-time condition. The parser records it; it never evaluates it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompileCondition {
    Version(VersionCondition),
    Debug(DebugCondition),
    StaticIf(StaticIfCondition),
}

impl fmt::Display for CompileCondition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Version(version) => version.fmt(f),
            Self::Debug(debug) => debug.fmt(f),
            Self::StaticIf(static_if) => static_if.fmt(f),
        }
    }
}

/// The argument of a `version(...)`/`debug(...)` condition or a
/// `version = x;`/`debug = x;` specification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConditionToken {
    /// An integer level.
    Integer(String),
    /// A named version/debug identifier.
    Identifier(String),
    /// The reserved `unittest` version.
    Unittest,
    /// The reserved `assert` version.
    Assert,
}

impl fmt::Display for ConditionToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Integer(text) => write!(f, "{}", text),
            Self::Identifier(name) => write!(f, "{}", name),
            Self::Unittest => write!(f, "unittest"),
            Self::Assert => write!(f, "assert"),
        }
    }
}

/// A `version(token)` condition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionCondition {
    pub token: ConditionToken,
    /// The span of the `version`.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for VersionCondition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "version({})", self.token)
    }
}

crate::simple_node_impl!(VersionCondition);

/// A `debug` or `debug(token)` condition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebugCondition {
    pub token: Option<ConditionToken>,
    /// The span of the `debug`.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for DebugCondition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.token {
            Some(token) => write!(f, "debug({})", token),
            None => write!(f, "debug"),
        }
    }
}

crate::simple_node_impl!(DebugCondition);

/// A `static if (expression)` condition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticIfCondition {
    pub expression: Expression,
    /// The span of the `static`.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for StaticIfCondition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "static if ({})", self.expression)
    }
}

crate::simple_node_impl!(StaticIfCondition);

/// A conditional-compilation construct over declarations. Both branches
/// are recorded as children; neither is evaluated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionalDeclaration {
    pub condition: CompileCondition,
    /// The declarations of the true branch.
    pub true_declarations: Vec<Declaration>,
    /// The declarations of the `else` branch, empty when absent.
    pub false_declarations: Vec<Declaration>,
    /// The span of the condition's first token.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for ConditionalDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {{ {} }}", self.condition, self.true_declarations.iter().format(" "))?;
        if !self.false_declarations.is_empty() {
            write!(f, " else {{ {} }}", self.false_declarations.iter().format(" "))?;
        }
        Ok(())
    }
}

crate::simple_node_impl!(ConditionalDeclaration);

/// A `version = token;` specification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionSpecification {
    pub token: ConditionToken,
    /// The span of the `version`.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for VersionSpecification {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "version = {};", self.token)
    }
}

crate::simple_node_impl!(VersionSpecification);

/// A `debug = token;` specification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebugSpecification {
    pub token: ConditionToken,
    /// The span of the `debug`.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for DebugSpecification {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "debug = {};", self.token)
    }
}

crate::simple_node_impl!(DebugSpecification);
