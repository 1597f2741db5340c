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

use crate::NodeID;

use std::cell::RefCell;

/// A counter that produces sequentially increasing `NodeID`s.
///
/// This is the parser's node arena: every node produced by a parse commits
/// an ID from here, node storage itself being ordinary owned values. One
/// builder serves one parse result; `reset` bulk-resets it for reuse once
/// the previous tree has been dropped.
#[derive(Debug, Clone)]
pub struct NodeBuilder {
    /// The inner counter.
    /// `RefCell` is used here to avoid `&mut` all over the parser.
    inner: RefCell<NodeBuilderInner>,
}

impl NodeBuilder {
    /// Returns a new `NodeBuilder` with the given `NodeID` as the starting value.
    pub fn new(next: NodeID) -> Self {
        Self { inner: RefCell::new(NodeBuilderInner::new(next)) }
    }

    /// Returns the next `NodeID` and increments the internal state.
    pub fn next_id(&self) -> NodeID {
        self.inner.borrow_mut().next_id()
    }

    /// Returns how many IDs have been handed out.
    pub fn count(&self) -> NodeID {
        self.inner.borrow().next
    }

    /// Bulk-resets the builder so IDs start from zero again.
    pub fn reset(&self) {
        self.inner.borrow_mut().next = 0;
    }
}

impl Default for NodeBuilder {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Contains the actual data for `NodeBuilder`.
/// Modeled this way to afford an API using interior mutability.
#[derive(Debug, Clone)]
struct NodeBuilderInner {
    /// The next `NodeID`.
    next: NodeID,
}

impl NodeBuilderInner {
    fn new(next: NodeID) -> Self {
        Self { next }
    }

    fn next_id(&mut self) -> NodeID {
        let next = self.next;
        self.next += 1;
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential() {
        let builder = NodeBuilder::default();
        assert_eq!(builder.next_id(), 0);
        assert_eq!(builder.next_id(), 1);
        assert_eq!(builder.count(), 2);
        builder.reset();
        assert_eq!(builder.next_id(), 0);
    }
}
