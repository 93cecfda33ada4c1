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

//! This module provides the implementation of a layer: the ordered and
//! duplicate-free collection of states reached at one given depth of the
//! decision diagram.

use std::cmp::Ordering;
use std::hash::Hash;
use std::sync::Arc;

use fxhash::FxHashSet;

/// A layer stores the states reached at some depth of the diagram. The states
/// are kept in the order of their insertion (which makes the compilation
/// deterministic), while an index guarantees that no two structurally equal
/// states ever coexist in the same layer. That uniqueness constraint is
/// checked in amortized O(1).
///
/// States are shared behind an `Arc` so that moving them around (e.g. when
/// compacting a layer) never requires to clone them.
///
/// # Example
/// ```
/// # use ddlayer::Layer;
/// let mut layer = Layer::new();
/// assert!(layer.insert('a'));
/// assert!(layer.insert('b'));
/// assert!(!layer.insert('a'));
///
/// assert_eq!(2, layer.len());
/// assert_eq!(vec!['a', 'b'], layer.iter().copied().collect::<Vec<_>>());
/// ```
#[derive(Debug, Clone)]
pub struct Layer<T> {
    /// The states of the layer in insertion order
    states: Vec<Arc<T>>,
    /// Indexes the very same states as `states`
    index: FxHashSet<Arc<T>>,
}

impl <T> Default for Layer<T> {
    fn default() -> Self {
        Layer { states: vec![], index: Default::default() }
    }
}

impl <T: PartialEq> PartialEq for Layer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.states == other.states
    }
}
impl <T: Eq> Eq for Layer<T> {}

impl <T> Layer<T> {
    /// Creates a new empty layer
    pub fn new() -> Self {
        Self::default()
    }
    /// Yields the number of states in the layer
    pub fn len(&self) -> usize {
        self.states.len()
    }
    /// Returns true iff the layer comprises no state at all
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
    /// Iterates over the states of this layer in their insertion order
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.states.iter().map(|s| &**s)
    }
    /// Returns the state at the given position (if it exists)
    pub fn get(&self, i: usize) -> Option<&T> {
        self.states.get(i).map(|s| &**s)
    }
    /// Returns the (shared) states of the layer in their insertion order
    pub fn states(&self) -> &[Arc<T>] {
        &self.states
    }
    /// Removes all states from the layer
    pub fn clear(&mut self) {
        self.states.clear();
        self.index.clear();
    }
}

impl <T: Eq + Hash> Layer<T> {
    /// Returns true iff a state structurally equal to `state` is in the layer
    pub fn contains(&self, state: &T) -> bool {
        self.index.contains(state)
    }
    /// Appends `state` at the end of the layer unless an equal state is
    /// already present. It returns true iff the state was inserted.
    pub fn insert(&mut self, state: T) -> bool {
        self.insert_shared(Arc::new(state))
    }
    /// Same as `insert` but for a state that is already shared
    pub fn insert_shared(&mut self, state: Arc<T>) -> bool {
        if self.index.contains(&state) {
            false
        } else {
            self.index.insert(Arc::clone(&state));
            self.states.push(state);
            true
        }
    }
    /// Only retains those states for which `keep` returns true. The relative
    /// order of the retained states is preserved.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut keep: F) {
        let index = &mut self.index;
        self.states.retain(|s| {
            let kept = keep(&**s);
            if !kept {
                index.remove(&**s);
            }
            kept
        });
    }
    /// Only keeps the first `len` states of the layer
    pub fn truncate(&mut self, len: usize) {
        self.split_off(len);
    }
    /// Removes all states from position `at` onwards and returns them (in
    /// their original order).
    pub fn split_off(&mut self, at: usize) -> Vec<Arc<T>> {
        if at >= self.states.len() {
            return vec![];
        }
        let tail = self.states.split_off(at);
        for s in tail.iter() {
            self.index.remove(&**s);
        }
        tail
    }
    /// Sorts the states of this layer with the given comparator. The sort is
    /// stable: equivalent states keep their relative insertion order.
    pub fn sort_by<F: FnMut(&T, &T) -> Ordering>(&mut self, mut compare: F) {
        self.states.sort_by(|a, b| compare(&**a, &**b));
    }
}

impl <T: Eq + Hash> FromIterator<T> for Layer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut layer = Layer::new();
        for s in iter {
            layer.insert(s);
        }
        layer
    }
}

impl <'a, T> IntoIterator for &'a Layer<T> {
    type Item = &'a T;
    type IntoIter = std::iter::Map<std::slice::Iter<'a, Arc<T>>, fn(&'a Arc<T>) -> &'a T>;

    fn into_iter(self) -> Self::IntoIter {
        let deref: fn(&'a Arc<T>) -> &'a T = |s| &**s;
        self.states.iter().map(deref)
    }
}
