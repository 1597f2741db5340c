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

use crate::{Identifier, IdentifierChain, NodeID};
use dryad_span::Span;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An `import` declaration,
/// `import a.b, io = std.stdio : writeln, w = writef;`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportDeclaration {
    /// The plain imports before any binding list.
    pub imports: Vec<SingleImport>,
    /// The final import with its `:` bindings, if any.
    pub bindings: Option<ImportBindings>,
    /// The span of the `import`.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for ImportDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "import {}", self.imports.iter().format(", "))?;
        if let Some(bindings) = &self.bindings {
            if !self.imports.is_empty() {
                write!(f, ", ")?;
            }
            write!(f, "{}", bindings)?;
        }
        write!(f, ";")
    }
}

crate::simple_node_impl!(ImportDeclaration);

/// One imported module, optionally renamed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingleImport {
    /// The rename of `name = a.b`.
    pub rename: Option<Identifier>,
    pub chain: IdentifierChain,
    /// The span of the import's first token.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for SingleImport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(rename) = &self.rename {
            write!(f, "{} = ", rename)?;
        }
        self.chain.fmt(f)
    }
}

crate::simple_node_impl!(SingleImport);

/// The import carrying a `: bind, bind` list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportBindings {
    pub import: SingleImport,
    pub binds: Vec<ImportBind>,
}

impl fmt::Display for ImportBindings {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} : {}", self.import, self.binds.iter().format(", "))
    }
}

/// One symbol bound by a selective import.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportBind {
    /// The rename of `name = symbol`.
    pub rename: Option<Identifier>,
    pub name: Identifier,
    /// The span of the bind's first token.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for ImportBind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(rename) = &self.rename {
            write!(f, "{} = ", rename)?;
        }
        self.name.fmt(f)
    }
}

crate::simple_node_impl!(ImportBind);
