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

use crate::{Constraint, FunctionBody, MemberFunctionAttribute, NodeID, Parameters, TemplateParameters};
use dryad_span::Span;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A constructor, `this(params)`, optionally templated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constructor {
    pub template_parameters: Option<TemplateParameters>,
    pub parameters: Parameters,
    pub member_attributes: Vec<MemberFunctionAttribute>,
    pub constraint: Option<Constraint>,
    pub body: FunctionBody,
    /// The span of the `this`.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for Constructor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "this")?;
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
        self.body.fmt(f)
    }
}

crate::simple_node_impl!(Constructor);

/// A destructor, `~this()`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destructor {
    pub member_attributes: Vec<MemberFunctionAttribute>,
    pub body: FunctionBody,
    /// The span of the `~`.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for Destructor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "~this()")?;
        for attribute in &self.member_attributes {
            write!(f, " {}", attribute)?;
        }
        self.body.fmt(f)
    }
}

crate::simple_node_impl!(Destructor);

/// A postblit, `this(this)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Postblit {
    pub member_attributes: Vec<MemberFunctionAttribute>,
    pub body: FunctionBody,
    /// The span of the `this`.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for Postblit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "this(this)")?;
        for attribute in &self.member_attributes {
            write!(f, " {}", attribute)?;
        }
        self.body.fmt(f)
    }
}

crate::simple_node_impl!(Postblit);

/// A `static this()` module constructor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticConstructor {
    pub member_attributes: Vec<MemberFunctionAttribute>,
    pub body: FunctionBody,
    /// The span of the `static`.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for StaticConstructor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "static this()")?;
        self.body.fmt(f)
    }
}

crate::simple_node_impl!(StaticConstructor);

/// A `static ~this()` module destructor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticDestructor {
    pub member_attributes: Vec<MemberFunctionAttribute>,
    pub body: FunctionBody,
    /// The span of the `static`.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for StaticDestructor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "static ~this()")?;
        self.body.fmt(f)
    }
}

crate::simple_node_impl!(StaticDestructor);

/// A `shared static this()` constructor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedStaticConstructor {
    pub member_attributes: Vec<MemberFunctionAttribute>,
    pub body: FunctionBody,
    /// The span of the `shared`.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for SharedStaticConstructor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "shared static this()")?;
        self.body.fmt(f)
    }
}

crate::simple_node_impl!(SharedStaticConstructor);

/// A `shared static ~this()` destructor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedStaticDestructor {
    pub member_attributes: Vec<MemberFunctionAttribute>,
    pub body: FunctionBody,
    /// The span of the `shared`.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for SharedStaticDestructor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "shared static ~this()")?;
        self.body.fmt(f)
    }
}

crate::simple_node_impl!(SharedStaticDestructor);
