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

//! This module defines the most basic data types that are used throughout all
//! the code of our library (both at the abstraction and implementation levels).
//! These are also the types your client library is likely to work with.

use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt::{self, Debug, Display};
use std::iter::FromIterator;

/// This type denotes a variable from the problem at hand. The engine never
/// interprets a variable: it is only ever used to label the depth of a layer.
/// Any type may serve as variable label; this one is provided for those
/// problems whose variables are simply numbered from 0 until `nb_variables`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Variable(pub usize);
impl Variable {
    #[inline]
    /// This function returns the id (numeric value) of the variable.
    ///
    /// # Examples:
    /// ```
    /// # use ddlayer::Variable;
    /// assert_eq!(0, Variable(0).id());
    /// assert_eq!(3, Variable(3).id());
    /// ```
    pub fn id(self) -> usize {
        self.0
    }
}
impl Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}", self.0)
    }
}

/// A state is an immutable snapshot of a partial assignment. It maps opaque
/// keys onto opaque values, and two states are equal iff they hold the very
/// same mappings. Because the mappings are kept sorted by key, equality and
/// hashing are structural and do not depend on the order in which the keys
/// were assigned.
///
/// The engine itself is generic over any `Eq + Hash + Clone` state; this type
/// is merely the associative flavor of it. Use a dedicated struct whenever the
/// shape of your states is known ahead of time.
///
/// # Example
/// ```
/// # use ddlayer::State;
/// let root : State<&str, i32> = [("x", 0)].into_iter().collect();
/// let next = root.with("a", 1);
///
/// assert_eq!(Some(&1), next.get("a"));
/// assert_eq!(None,     root.get("a"));
/// assert_eq!(next, [("a", 1), ("x", 0)].into_iter().collect::<State<_, _>>());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct State<K, V>(BTreeMap<K, V>);

impl <K, V> Default for State<K, V> {
    fn default() -> Self {
        State(BTreeMap::new())
    }
}

impl <K: Ord, V> State<K, V> {
    /// Creates a new empty state
    pub fn new() -> Self {
        Self::default()
    }
    /// Returns the value associated with `key` (if any)
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where K: Borrow<Q>, Q: Ord + ?Sized
    {
        self.0.get(key)
    }
    /// Returns true iff the state assigns some value to `key`
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where K: Borrow<Q>, Q: Ord + ?Sized
    {
        self.0.contains_key(key)
    }
    /// The number of keys mapped by this state
    pub fn len(&self) -> usize {
        self.0.len()
    }
    /// Returns true iff this state maps no key at all
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Iterates over the (key, value) pairs in ascending key order
    pub fn iter(&self) -> btree_map::Iter<'_, K, V> {
        self.0.iter()
    }
    /// Iterates over the keys in ascending order
    pub fn keys(&self) -> btree_map::Keys<'_, K, V> {
        self.0.keys()
    }
}

impl <K: Ord + Clone, V: Clone> State<K, V> {
    /// Returns a copy of this state in which `key` is mapped onto `value`.
    /// The state on which this method is called is left untouched.
    pub fn with(&self, key: K, value: V) -> Self {
        let mut map = self.0.clone();
        map.insert(key, value);
        State(map)
    }
}

impl <K: Ord, V> FromIterator<(K, V)> for State<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        State(iter.into_iter().collect())
    }
}
impl <K, V> From<BTreeMap<K, V>> for State<K, V> {
    fn from(map: BTreeMap<K, V>) -> Self {
        State(map)
    }
}
impl <'a, K, V> IntoIterator for &'a State<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = btree_map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl <K: Debug, V: Debug> Debug for State<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.iter()).finish()
    }
}
impl <K: Display, V: Display> Display for State<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (k, v)) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", k, v)?;
        }
        write!(f, "}}")
    }
}

/// A reason explaining why the compilation of a decision diagram failed.
/// Both reasons are fatal: the diagram is lost and the instance which was
/// being compiled cannot be reused.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, thiserror::Error)]
pub enum Reason {
    /// Some layer outgrew the maximum width while no compaction strategy was
    /// configured to shrink it back. This is a configuration defect: fix the
    /// configuration and try again.
    #[error("width limit ({max_width}) reached, no compaction strategy")]
    WidthLimit { max_width: usize },
    /// The layer at the given depth is empty. No sequence of states reaches
    /// the bottom of the diagram.
    #[error("infeasible: the layer at depth {depth} is empty")]
    Infeasible { depth: usize },
}
impl Reason {
    /// Returns true iff the compilation failed because the problem is infeasible
    pub fn is_infeasible(&self) -> bool {
        matches!(self, Reason::Infeasible { .. })
    }
    /// Returns true iff the compilation failed because of a missing compaction
    pub fn is_width_limit(&self) -> bool {
        matches!(self, Reason::WidthLimit { .. })
    }
}
