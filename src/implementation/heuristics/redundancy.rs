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

//! This module provides the implementation of various redundancy checks.

use std::{cmp::Ordering, marker::PhantomData};

use crate::{Dominance, Layer, Redundancy};

/// _This is the default redundancy check._ It deems no state redundant: every
/// new state is inserted in its layer.
pub struct KeepAll<T> {
    _phantom: PhantomData<T>,
}

impl<T> Default for KeepAll<T> {
    fn default() -> Self {
        Self { _phantom: Default::default() }
    }
}

impl<T> Redundancy for KeepAll<T> {
    type State = T;

    fn keep(&self, _: usize, _: &Self::State, _: &Layer<Self::State>) -> bool {
        true
    }
}

/// This redundancy check discards the states which are dominated by (or
/// equivalent to) a state of the layer. Only the states mapped onto the same
/// key are compared.
///
/// # Note:
/// Being a pure predicate, this check never evicts a state that is already part
/// of the layer, even when the new state dominates it.
///
/// # Example
/// ```
/// # use ddlayer::*;
/// struct Capacity;
/// impl Dominance for Capacity {
///     type State = (usize, isize); // (item, capacity)
///     type Key = usize;
///     fn get_key(&self, state: &Self::State) -> Option<usize> {
///         Some(state.0)
///     }
///     fn nb_dimensions(&self, _: &Self::State) -> usize {
///         1
///     }
///     fn get_coordinate(&self, state: &Self::State, _: usize) -> isize {
///         state.1
///     }
/// }
///
/// let filter = DominanceFilter::new(Capacity);
/// let layer: Layer<(usize, isize)> = vec![(0, 10)].into_iter().collect();
///
/// assert!(!filter.keep(1, &(0, 5), &layer));
/// assert!(filter.keep(1, &(0, 15), &layer));
/// assert!(filter.keep(1, &(1, 5), &layer));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DominanceFilter<D> {
    dominance: D,
}

impl<D> DominanceFilter<D> {
    pub fn new(dominance: D) -> Self {
        Self { dominance }
    }
}

impl<D> Redundancy for DominanceFilter<D>
where
    D: Dominance,
    D::Key: Eq,
{
    type State = D::State;

    fn keep(&self, _: usize, state: &Self::State, layer: &Layer<Self::State>) -> bool {
        if let Some(key) = self.dominance.get_key(state) {
            !layer.iter().any(|other| {
                self.dominance.get_key(other).as_ref() == Some(&key)
                    && matches!(
                        self.dominance.partial_cmp(state, other),
                        Some(Ordering::Less | Ordering::Equal)
                    )
            })
        } else {
            true
        }
    }
}
