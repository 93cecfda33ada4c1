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

//! # DDLayer
//! DDLayer is a generic engine to compile width-limited, layered decision
//! diagrams (DD) in Rust. Starting from an initial state, it unrolls your
//! problem one variable at a time: each layer of the diagram holds the
//! (distinct) states reachable after deciding the variables that precede it.
//! Because the number of states in each layer is bounded, the memory usage
//! stays under control regardless of the size of the problem.
//!
//! The engine itself knows nothing about your problem. It only relies on the
//! strategies you give it:
//!
//! * a `Problem` telling what candidates extend a state and what state results
//!   from the application of a candidate (mandatory)
//! * a `Redundancy` check deciding whether a new state deserves a place in its
//!   layer (use `KeepAll` if none of your states is redundant)
//! * a `Compaction` policy that shrinks the layers exceeding the maximum width.
//!   It is only needed when you bound the width of the layers.
//!
//! Depending on the compaction you use, the layers either represent the states
//! of the problem exactly (no compaction), a relaxation (`Merge`) or a
//! restriction (`KeepFirst`, `Restriction`) thereof.
//!
//! ## Quick Example
//! The following builds the diagram of a tiny binary knapsack whose capacity
//! is 5. A state is nothing more than the remaining capacity of the sack.
//!
//! ```
//! # use ddlayer::*;
//! #
//! struct Knapsack {
//!     weight: Vec<usize>,
//! }
//! impl Problem for Knapsack {
//!     type State = usize;
//!     type Candidate = bool;
//!     type Variable = Variable;
//!
//!     fn for_each_candidate(&self, depth: usize, state: &usize,
//!         _: &Config<usize, bool, Variable>, f: &mut dyn CandidateCallback<bool>)
//!     {
//!         f.apply(false);
//!         if *state >= self.weight[depth] {
//!             f.apply(true);
//!         }
//!     }
//!     fn transition(&self, depth: usize, state: &usize, take: &bool,
//!         _: &Config<usize, bool, Variable>) -> usize
//!     {
//!         if *take { state - self.weight[depth] } else { *state }
//!     }
//! }
//!
//! let problem = Knapsack { weight: vec![2, 3, 4] };
//! let config  = ConfigBuilder::default()
//!     .sentinel(false)
//!     .variables(vec![Variable(0), Variable(1), Variable(2)])
//!     .initial_state(5)
//!     .build()
//!     .unwrap();
//!
//! let keep_all = KeepAll::<usize>::default();
//! let diagram  = Instance::new(config, &problem, &keep_all, None)
//!     .and_then(|instance| instance.compile())
//!     .unwrap();
//!
//! // layer 1: {5, 3}, layer 2: {5, 2, 3, 0}, layer 3: {5, 1, 2, 3, 0}
//! assert_eq!(vec![2, 4, 5], diagram.widths());
//! ```
//!
//! ## Failures
//! A compilation either succeeds or fails with one of two `Reason`s:
//! `Reason::WidthLimit` when the width is bounded but there is no compaction
//! to enforce that bound (a configuration defect), and `Reason::Infeasible`
//! when some layer turns out to be empty (no state reaches the bottom of the
//! diagram).
//!
//! Whether a state reached again at a deeper depth counts as "already present"
//! depends on `Config::dedup`. Under the default `Dedup::Layer`, each layer is
//! deduplicated on its own and a stationary state goes all the way down. Under
//! `Dedup::Diagram`, that state is rejected at depth 2, which makes the
//! compilation infeasible.
//!
//! ## Tracing
//! The engine logs its progress through the `log` facade. All events are
//! emitted at the `trace` level, or at the `info` level when the `trace` flag
//! of the configuration is set. Install whichever logger suits you.

mod common;
mod abstraction;
mod implementation;

pub use common::*;
pub use abstraction::*;
pub use implementation::*;
