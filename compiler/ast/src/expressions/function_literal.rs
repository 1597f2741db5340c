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

use crate::{Block, CallableKind, Expression, MemberFunctionAttribute, NodeID, Parameters, Type};
use dryad_span::Span;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A function or delegate literal, or a lambda.
///
/// Covers `function int(int x) { ... }`, `delegate { ... }`, `(x) => x + 1`,
/// `x => x + 1`, and a bare `{ ... }` in expression position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionLiteralExpression {
    /// The introducing keyword, if one was written.
    pub kind: Option<CallableKind>,
    /// The explicit return type, if one was written.
    pub return_type: Option<Type>,
    /// The parameter list; lambdas over a single identifier synthesize a
    /// one-element untyped list.
    pub parameters: Option<Parameters>,
    /// Member function attributes following the parameter list.
    pub attributes: Vec<MemberFunctionAttribute>,
    /// The body.
    pub body: FunctionLiteralBody,
    /// The span of the literal's first token.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for FunctionLiteralExpression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(kind) = &self.kind {
            write!(f, "{} ", kind)?;
        }
        if let Some(return_type) = &self.return_type {
            write!(f, "{} ", return_type)?;
        }
        if let Some(parameters) = &self.parameters {
            write!(f, "{} ", parameters)?;
        }
        for attribute in &self.attributes {
            write!(f, "{} ", attribute)?;
        }
        self.body.fmt(f)
    }
}

crate::simple_node_impl!(FunctionLiteralExpression);

/// The body of a function literal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FunctionLiteralBody {
    /// A brace block.
    Block(Block),
    /// `=> expression`
    Lambda(Box<Expression>),
}

impl fmt::Display for FunctionLiteralBody {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Block(block) => block.fmt(f),
            Self::Lambda(expression) => write!(f, "=> {}", expression),
        }
    }
}
