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

use crate::{Identifier, NodeID};
use dryad_span::Span;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A `.`-separated chain of identifiers, e.g. a module name `std.range.primitives`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifierChain {
    /// The identifiers of the chain, in source order.
    pub identifiers: Vec<Identifier>,
    /// The span of the first identifier.
    pub span: Span,
    /// The ID of the node.
    pub id: NodeID,
}

impl IdentifierChain {
    /// The chain as a `Vec` of name strings.
    pub fn names(&self) -> Vec<&str> {
        self.identifiers.iter().map(|identifier| identifier.name.as_str()).collect()
    }
}

impl fmt::Display for IdentifierChain {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.identifiers.iter().format("."))
    }
}

crate::simple_node_impl!(IdentifierChain);
