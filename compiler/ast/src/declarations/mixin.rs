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

use crate::{fmt_comma_separated, Declaration, Expression, Identifier, NodeID, SymbolChain, TemplateDeclaration};
use dryad_span::Span;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A mixin at declaration level: `mixin(args);` or
/// `mixin Name!(args) ident;`.
///
/// When a string mixin's sole argument is a `q{...}` token string, the
/// parser re-lexes the inner text and attaches the resulting
/// declarations under `trivial_declarations`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MixinDeclaration {
    pub kind: MixinDeclarationKind,
    /// Declarations parsed out of a `q{...}` payload, if any.
    pub trivial_declarations: Vec<Declaration>,
    /// The span of the `mixin`.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for MixinDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.kind {
            MixinDeclarationKind::Expression(arguments) => {
                write!(f, "mixin(")?;
                fmt_comma_separated(f, arguments)?;
                write!(f, ");")
            }
            MixinDeclarationKind::Template(template_mixin) => {
                write!(f, "{};", template_mixin)
            }
        }
    }
}

crate::simple_node_impl!(MixinDeclaration);

/// The two declaration-level mixin forms.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MixinDeclarationKind {
    /// `mixin(expr, ...);`
    Expression(Vec<Expression>),
    /// `mixin a.b.Name!(args) ident?;`
    Template(TemplateMixin),
}

/// A template mixin expression, `mixin Name!(args) ident?`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateMixin {
    /// The mixed-in template's possibly-dotted name.
    pub name: SymbolChain,
    /// The local name given to the instantiation.
    pub identifier: Option<Identifier>,
    /// The span of the `mixin`.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for TemplateMixin {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "mixin {}", self.name)?;
        if let Some(identifier) = &self.identifier {
            write!(f, " {}", identifier)?;
        }
        Ok(())
    }
}

crate::simple_node_impl!(TemplateMixin);

/// A `mixin template Name(...) { ... }` definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MixinTemplateDeclaration {
    pub template: TemplateDeclaration,
    /// The span of the `mixin`.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for MixinTemplateDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "mixin {}", self.template)
    }
}

crate::simple_node_impl!(MixinTemplateDeclaration);
