// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This module defines the traits used to encapsulate the strategies which
//! keep the layers of a decision diagram small.
//!
//! Namely, it defines :
//!
//!  - the `Redundancy` which decides whether a freshly produced state deserves
//!    a place in its layer
//!  - the `Compaction` which shrinks a layer that outgrew the maximum width
//!  - the `StateRanking` which is used to guess the states promisingness when
//!    compacting a layer.

use std::cmp::Ordering;

use crate::Layer;

/// This trait encapsulates the redundancy check performed before a state is
/// inserted in a layer. It is the hook where dominance (or any other kind of
/// pruning) takes place.
///
/// # Note:
/// The engine only ever consults the redundancy check for states which are
/// not yet part of the layer. A redundancy check is a pure predicate: it is
/// given a read-only view on the layer and cannot remove any of its states.
pub trait Redundancy {
    /// The type of the states being checked
    type State;

    /// Returns true iff `state` must be kept (inserted in `layer`), false when
    /// it must be discarded. The `depth` is that of `layer`.
    fn keep(&self, depth: usize, state: &Self::State, layer: &Layer<Self::State>) -> bool;
}

/// This trait encapsulates the policy used to shrink a layer whose size
/// exceeds the maximum width. Such a policy may merge states (relaxation),
/// drop them (restriction) or any combination thereof.
///
/// It is only ever called after the layer at `depth` has been fully
/// populated, and only when its size exceeds `max_width`. Upon return, the
/// layer should comprise no more than `max_width` states.
pub trait Compaction {
    /// The type of the states being compacted
    type State;

    /// Shrinks `layer` (which sits at the given `depth`) to `max_width` states
    fn compact(&self, depth: usize, max_width: usize, layer: &mut Layer<Self::State>);
}

/// A state ranking is an heuristic that imposes a partial order on states.
/// This order is used by the compaction strategies as a means to discriminate
/// the most promising states from the least promising ones.
///
/// According to this ordering, greater means better and hence more likely to
/// be kept after restriction or relaxation.
pub trait StateRanking {
    /// As is the case for `Problem` and `Relaxation`, a `StateRanking` must
    /// tell the kind of states it is able to operate on.
    type State;

    /// This method compares two states and determines which is the most
    /// desirable to keep. In this ordering, greater means better.
    fn compare(&self, a: &Self::State, b: &Self::State) -> Ordering;
}
