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

use dryad_span::Span;

/// A node ID.
pub type NodeID = usize;

/// A node in the AST.
pub trait Node:
    std::fmt::Debug + std::fmt::Display + Clone + PartialEq + Eq + serde::Serialize + serde::de::DeserializeOwned
{
    /// Returns the span of the node.
    fn span(&self) -> Span;

    /// Sets the span of the node.
    fn set_span(&mut self, span: Span);

    /// Returns the ID of the node.
    fn id(&self) -> NodeID;

    /// Sets the ID of the node.
    fn set_id(&mut self, id: NodeID);
}

#[macro_export]
macro_rules! simple_node_impl {
    ($ty:ty) => {
        impl $crate::Node for $ty {
            fn span(&self) -> ::dryad_span::Span {
                self.span
            }

            fn set_span(&mut self, span: ::dryad_span::Span) {
                self.span = span;
            }

            fn id(&self) -> $crate::NodeID {
                self.id
            }

            fn set_id(&mut self, id: $crate::NodeID) {
                self.id = id;
            }
        }
    };
}
