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

//! This module provides the implementation of various compaction policies.
//! Restrictions (`KeepFirst` and `Restriction`) shrink a layer by dropping its
//! least interesting states whereas the relaxation (`Merge`) folds them into a
//! single state standing for them all.

use std::{hash::Hash, marker::PhantomData, sync::Arc};

use crate::{Compaction, Layer, Relaxation, StateRanking};

/// This compaction keeps the `max_width` states that were inserted first in
/// the layer and drops all the others.
pub struct KeepFirst<T> {
    _phantom: PhantomData<T>,
}

impl<T> Default for KeepFirst<T> {
    fn default() -> Self {
        Self { _phantom: Default::default() }
    }
}

impl<T: Eq + Hash> Compaction for KeepFirst<T> {
    type State = T;

    fn compact(&self, _: usize, max_width: usize, layer: &mut Layer<Self::State>) {
        layer.truncate(max_width);
    }
}

/// This compaction keeps the `max_width` best states of the layer, according
/// to the given ranking, and drops all the others. Equivalent states are
/// kept in their insertion order.
///
/// # Example
/// ```
/// # use ddlayer::*;
/// # use std::cmp::Ordering;
/// struct Greatest;
/// impl StateRanking for Greatest {
///     type State = usize;
///     fn compare(&self, a: &usize, b: &usize) -> Ordering {
///         a.cmp(b)
///     }
/// }
///
/// let mut layer: Layer<usize> = vec![3, 9, 1, 7].into_iter().collect();
/// Restriction::new(Greatest).compact(1, 2, &mut layer);
///
/// assert_eq!(vec![9, 7], layer.iter().copied().collect::<Vec<_>>());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Restriction<R> {
    ranking: R,
}

impl<R> Restriction<R> {
    pub fn new(ranking: R) -> Self {
        Self { ranking }
    }
}

impl<R> Compaction for Restriction<R>
where
    R: StateRanking,
    R::State: Eq + Hash,
{
    type State = R::State;

    fn compact(&self, _: usize, max_width: usize, layer: &mut Layer<Self::State>) {
        // reverse because greater means more likely to be kept
        layer.sort_by(|a, b| self.ranking.compare(a, b).reverse());
        layer.truncate(max_width);
    }
}

/// This compaction keeps the `max_width - 1` best states of the layer (according
/// to the given ranking) and merges all the other ones into one single state.
///
/// Should the merged state be equal to one of the kept states, the best of the
/// states that have been merged is kept instead.
#[derive(Debug, Clone, Copy)]
pub struct Merge<X, R> {
    relaxation: X,
    ranking: R,
}

impl<X, R> Merge<X, R> {
    pub fn new(relaxation: X, ranking: R) -> Self {
        Self { relaxation, ranking }
    }
}

impl<X, R> Compaction for Merge<X, R>
where
    X: Relaxation,
    X::State: Eq + Hash,
    R: StateRanking<State = X::State>,
{
    type State = X::State;

    fn compact(&self, _: usize, max_width: usize, layer: &mut Layer<Self::State>) {
        layer.sort_by(|a, b| self.ranking.compare(a, b).reverse());

        let merged = layer.split_off(max_width.saturating_sub(1));
        if merged.is_empty() {
            return;
        }

        let relaxed = self.relaxation.merge(&mut merged.iter().map(|s| &**s));
        if !layer.insert(relaxed) {
            layer.insert_shared(Arc::clone(&merged[0]));
        }
    }
}
