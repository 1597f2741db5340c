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

use crate::{Constraint, Declaration, Identifier, NodeID, TemplateParameters};
use dryad_span::Span;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A `template Name(Parameters) if (Constraint)? { Declarations }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateDeclaration {
    pub name: Identifier,
    pub parameters: TemplateParameters,
    pub constraint: Option<Constraint>,
    pub declarations: Vec<Declaration>,
    /// The span of the `template`.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for TemplateDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "template {}{}", self.name, self.parameters)?;
        if let Some(constraint) = &self.constraint {
            write!(f, " {}", constraint)?;
        }
        write!(f, " {{ {} }}", self.declarations.iter().format(" "))
    }
}

crate::simple_node_impl!(TemplateDeclaration);
