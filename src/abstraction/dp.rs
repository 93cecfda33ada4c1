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

//! This module defines the basic abstractions one will manipulate when
//! describing the problem whose layered decision diagram is to be compiled.
//!
//! The most important abstraction that should be provided by a client is
//! `Problem`.

use crate::Config;

/// This trait defines the "contract" of what defines a problem whose state
/// space can be unrolled into a layered decision diagram. An implementation of
/// this trait is envisioned as a labeled transition system: it tells what
/// candidates extend a given state and what state results from the application
/// of a candidate.
///
/// # Depth
/// In both methods, `depth` is the depth of the *source* state. The initial
/// state sits at depth 0 and the successors produced from a state at depth `d`
/// populate the layer at depth `d + 1`. Hence, the variable being decided when
/// expanding a state at depth `d` is `config.variable(d)`.
pub trait Problem {
    /// The DP model of the problem manipulates a state which is user-defined.
    /// Any type implementing Problem must thus specify the type of its state.
    type State;
    /// The (opaque) type of the choices that extend a state.
    type Candidate;
    /// The (opaque) type of the labels of the variables.
    type Variable;

    /// This method calls the function `f` once for each candidate extending
    /// `state` at the given depth. The order of the calls is the order in which
    /// the successors are produced.
    ///
    /// It is perfectly fine not to call `f` at all: in that case, the engine
    /// falls back on the sentinel candidate of the configuration so that every
    /// state is expanded at least once.
    fn for_each_candidate(
        &self,
        depth: usize,
        state: &Self::State,
        config: &Config<Self::State, Self::Candidate, Self::Variable>,
        f: &mut dyn CandidateCallback<Self::Candidate>,
    );

    /// This method is an implementation of the transition function mentioned
    /// in the mathematical model of a DP formulation for some problem. It must
    /// be deterministic: the deduplication of the states of a layer relies on
    /// the fact that a same state and candidate always yield the same successor.
    fn transition(
        &self,
        depth: usize,
        state: &Self::State,
        candidate: &Self::Candidate,
        config: &Config<Self::State, Self::Candidate, Self::Variable>,
    ) -> Self::State;
}

/// This trait basically defines a callback which is passed on to the problem
/// so as to let it efficiently enumerate the candidates extending some state.
pub trait CandidateCallback<C> {
    /// executes the callback using the given candidate
    fn apply(&mut self, candidate: C);
}
/// The simplest and most natural callback implementation is to simply use
/// a closure.
impl <C, X: FnMut(C)> CandidateCallback<C> for X {
    fn apply(&mut self, candidate: C) {
        self(candidate)
    }
}

/// A relaxation encapsulates the $\oplus$ operator which is necessary when
/// compacting a layer by merging several of its states into one single state
/// standing for them all. It is only used by the `Merge` compaction strategy.
pub trait Relaxation {
    /// Similar to the problem it relaxes, a relaxation operates on a set of
    /// states (the same as the problem).
    type State;

    /// This method implements the merge operation: it combines several `states`
    /// and yields a new state which is supposed to stand for all the other
    /// merged states. The iterator is guaranteed to yield at least one state.
    fn merge(&self, states: &mut dyn Iterator<Item = &Self::State>) -> Self::State;
}
