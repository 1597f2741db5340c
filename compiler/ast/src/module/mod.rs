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

use crate::{Declaration, Expression, IdentifierChain, NodeID};
use dryad_span::Span;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The root of a parsed source file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    /// The `#!` script line, if the file starts with one.
    pub script_line: Option<String>,
    /// The `module a.b.c;` declaration, if present.
    pub module_declaration: Option<ModuleDeclaration>,
    /// The top-level declarations in source order.
    pub declarations: Vec<Declaration>,
    /// The span of the module's first token.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(module_declaration) = &self.module_declaration {
            writeln!(f, "{}", module_declaration)?;
        }
        write!(f, "{}", self.declarations.iter().format("\n"))
    }
}

crate::simple_node_impl!(Module);

/// A `module a.b.c;` declaration, possibly deprecated.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDeclaration {
    /// The `deprecated` or `deprecated("message")` prefix, if present.
    pub deprecated: Option<DeprecatedModule>,
    /// The module name.
    pub name: IdentifierChain,
    /// The doc comment attached to the declaration.
    pub comment: Option<String>,
    /// The span of the declaration's first token.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for ModuleDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(deprecated) = &self.deprecated {
            write!(f, "{} ", deprecated)?;
        }
        write!(f, "module {};", self.name)
    }
}

crate::simple_node_impl!(ModuleDeclaration);

/// The deprecation prefix of a module declaration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeprecatedModule {
    /// The parenthesized message, if one was written.
    pub message: Option<Expression>,
}

impl fmt::Display for DeprecatedModule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "deprecated({})", message),
            None => write!(f, "deprecated"),
        }
    }
}
