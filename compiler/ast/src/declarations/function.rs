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

use crate::{
    Block, Constraint, Expression, Identifier, MemberFunctionAttribute, Node, NodeID,
    ParameterAttribute, TemplateParameters, Type,
};
use dryad_span::Span;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A function declaration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDeclaration {
    /// The return type; absent when declared with a storage class only
    /// (`auto f() { ... }`).
    pub return_type: Option<Type>,
    /// The function name.
    pub name: Identifier,
    /// Template parameters, when the function is templated.
    pub template_parameters: Option<TemplateParameters>,
    /// The runtime parameter list.
    pub parameters: Parameters,
    /// Attributes following the parameter list.
    pub member_attributes: Vec<MemberFunctionAttribute>,
    /// The template constraint, if any.
    pub constraint: Option<Constraint>,
    /// The body.
    pub body: FunctionBody,
    /// The span of the declaration's first token.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for FunctionDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(return_type) = &self.return_type {
            write!(f, "{} ", return_type)?;
        }
        write!(f, "{}", self.name)?;
        if let Some(template_parameters) = &self.template_parameters {
            write!(f, "{}", template_parameters)?;
        }
        write!(f, "{}", self.parameters)?;
        for attribute in &self.member_attributes {
            write!(f, " {}", attribute)?;
        }
        if let Some(constraint) = &self.constraint {
            write!(f, " {}", constraint)?;
        }
        write!(f, "{}", self.body)
    }
}

crate::simple_node_impl!(FunctionDeclaration);

/// A function body: the contract sequence plus the body form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionBody {
    /// The `in`/`out` contracts preceding the body.
    pub contracts: Vec<FunctionContract>,
    /// Whether a body (braced or shortened) was present in the source,
    /// even when its statements were not retained.
    pub had_a_body: bool,
    pub kind: FunctionBodyKind,
    /// The span of the body's first token.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for FunctionBody {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for contract in &self.contracts {
            write!(f, " {}", contract)?;
        }
        match &self.kind {
            FunctionBodyKind::Semicolon => write!(f, ";"),
            FunctionBodyKind::Block { block: Some(block) } => write!(f, " {}", block),
            FunctionBodyKind::Block { block: None } => write!(f, " {{ ... }}"),
            FunctionBodyKind::Shortened(expression) => write!(f, " => {};", expression),
        }
    }
}

crate::simple_node_impl!(FunctionBody);

/// The body forms.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FunctionBodyKind {
    /// `;` — a declaration without a body.
    Semicolon,
    /// A brace block. `block` is `None` when body retention is disabled;
    /// `had_a_body` on the [`FunctionBody`] still records its presence.
    Block { block: Option<Block> },
    /// `=> expression ;`
    Shortened(Expression),
}

/// One `in` or `out` contract.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionContract {
    pub kind: ContractKind,
    /// The span of the `in`/`out`.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for FunctionContract {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.kind.fmt(f)
    }
}

crate::simple_node_impl!(FunctionContract);

/// The contract forms.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContractKind {
    /// `in { ... }`
    InBlock(Block),
    /// `in (condition, message?)`
    InExpression { condition: Expression, message: Option<Expression> },
    /// `out { ... }` or `out (result) { ... }`
    OutBlock { parameter: Option<Identifier>, block: Block },
    /// `out (result?; condition, message?)`
    OutExpression {
        parameter: Option<Identifier>,
        condition: Expression,
        message: Option<Expression>,
    },
}

impl fmt::Display for ContractKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InBlock(block) => write!(f, "in {}", block),
            Self::InExpression { condition, message: None } => write!(f, "in ({})", condition),
            Self::InExpression { condition, message: Some(message) } => {
                write!(f, "in ({}, {})", condition, message)
            }
            Self::OutBlock { parameter: None, block } => write!(f, "out {}", block),
            Self::OutBlock { parameter: Some(parameter), block } => {
                write!(f, "out ({}) {}", parameter, block)
            }
            Self::OutExpression { parameter, condition, message } => {
                write!(f, "out (")?;
                if let Some(parameter) = parameter {
                    write!(f, "{}", parameter)?;
                }
                write!(f, "; {}", condition)?;
                if let Some(message) = message {
                    write!(f, ", {}", message)?;
                }
                write!(f, ")")
            }
        }
    }
}

/// A parenthesized runtime parameter list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameters {
    pub parameters: Vec<Parameter>,
    /// `true` when the list ends in `...`.
    pub varargs: bool,
    /// The span of the opening paren.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for Parameters {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}", self.parameters.iter().format(", "))?;
        if self.varargs {
            if !self.parameters.is_empty() {
                write!(f, ", ")?;
            }
            write!(f, "...")?;
        }
        write!(f, ")")
    }
}

crate::simple_node_impl!(Parameters);

/// One runtime parameter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    /// Attributes preceding the type, e.g. `ref`, `in`, `scope`.
    pub attributes: Vec<ParameterAttribute>,
    /// The parameter type; absent when only a name was written, as in the
    /// identifier parameters of lambda literals.
    pub type_: Option<Type>,
    /// The parameter name; anonymous parameters have none.
    pub name: Option<Identifier>,
    /// The default argument, if any.
    pub default: Option<Expression>,
    /// `true` for a `Type name ...` variadic parameter.
    pub varargs: bool,
    /// The span of the parameter's first token.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for attribute in &self.attributes {
            write!(f, "{} ", attribute)?;
        }
        match (&self.type_, &self.name) {
            (Some(type_), Some(name)) => write!(f, "{} {}", type_, name)?,
            (Some(type_), None) => write!(f, "{}", type_)?,
            (None, Some(name)) => write!(f, "{}", name)?,
            (None, None) => {}
        }
        if self.varargs {
            write!(f, "...")?;
        }
        if let Some(default) = &self.default {
            write!(f, " = {}", default)?;
        }
        Ok(())
    }
}

crate::simple_node_impl!(Parameter);
