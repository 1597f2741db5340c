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

use crate::{Identifier, NodeID, Statement};
use dryad_span::Span;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A labeled statement, `label: statement?`. The statement may be absent
/// when the label sits immediately before a closing brace.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledStatement {
    pub label: Identifier,
    pub statement: Option<Box<Statement>>,
    /// The span of the label.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl fmt::Display for LabeledStatement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:", self.label)?;
        if let Some(statement) = &self.statement {
            write!(f, " {}", statement)?;
        }
        Ok(())
    }
}

crate::simple_node_impl!(LabeledStatement);
