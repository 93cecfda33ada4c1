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

//! This module provides the structure encapsulating the configuration of a
//! layered decision diagram. It also provides a convenient builder to
//! instantiate these configuration objects in an intelligible way.

use derive_builder::Builder;

/// What does it mean for a freshly produced state to be "already present" ?
///
/// The two scopes differ when a state is reached again at a deeper depth. With
/// the default `Layer` scope, a problem whose only transition leaves the state
/// unchanged yields one state per layer and compiles successfully. With the
/// `Diagram` scope, that same state is rejected at depth 2 and the compilation
/// fails with `Reason::Infeasible { depth: 2 }`. Pick `Diagram` whenever
/// reaching a known state again must count as a dead end.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dedup {
    /// The state is already present iff a structurally equal state sits in the
    /// layer being populated. This is the default.
    #[default]
    Layer,
    /// The state is already present iff a structurally equal state sits in the
    /// layer being populated or in any of the shallower layers. This is useful
    /// when states do not encode their depth and a state that has been reached
    /// once is not worth reaching again.
    Diagram,
}

/// The data describing a layered decision diagram to compile. It is fixed
/// once built: the strategies operating on the diagram read it, but nothing
/// ever changes it.
///
/// # Example
/// ```
/// # use ddlayer::*;
/// let config = ConfigBuilder::default()
///     .sentinel(-1)
///     .domains(vec![vec![0, 1]; 3])
///     .variables(vec!["a", "b", "c"])
///     .initial_state(State::new().with("x", 0))
///     .max_width(16)
///     .build()
///     .unwrap();
///
/// assert_eq!(3, config.nb_variables());
/// assert_eq!(&"b", config.variable(1));
/// assert_eq!(Some(&[0, 1][..]), config.domain(2));
/// assert!(config.is_bounded());
/// assert!(!config.trace());
/// ```
#[derive(Debug, Clone, Builder)]
#[builder(pattern = "owned", build_fn(validate = "Self::validate"))]
pub struct Config<T, C, V> {
    /// The candidate which is used to expand a state for which the problem
    /// yields no candidate at all
    sentinel: C,
    /// The domains of the variables. The engine never reads them: they are
    /// advisory information for the problem (e.g. `domain(depth)` is handy
    /// when enumerating the candidates of a state at some depth).
    #[builder(default)]
    domains: Vec<Vec<C>>,
    /// The ordered variables. There is one layer per variable.
    variables: Vec<V>,
    /// The state from which the first layer is derived
    initial_state: T,
    /// The maximum number of states in any layer. Unbounded by default.
    #[builder(default = "usize::MAX")]
    max_width: usize,
    /// Whether or not to log the compilation events at info level
    #[builder(default)]
    trace: bool,
    /// Scope of the check telling whether a state is already present
    #[builder(default)]
    dedup: Dedup,
}

impl <T, C, V> ConfigBuilder<T, C, V> {
    fn validate(&self) -> Result<(), String> {
        if let Some(0) = self.max_width {
            return Err("the maximum width must be positive".to_string());
        }
        if let Some(vars) = self.variables.as_ref() {
            if vars.is_empty() {
                return Err("at least one variable is required".to_string());
            }
        }
        Ok(())
    }
}

impl <T, C, V> Config<T, C, V> {
    /// The candidate used when the problem yields none
    pub fn sentinel(&self) -> &C {
        &self.sentinel
    }
    /// All the domains of the problem
    pub fn domains(&self) -> &[Vec<C>] {
        &self.domains
    }
    /// The domain of the variable decided at the given depth (if known)
    pub fn domain(&self, depth: usize) -> Option<&[C]> {
        self.domains.get(depth).map(|d| d.as_slice())
    }
    /// The ordered variables
    pub fn variables(&self) -> &[V] {
        &self.variables
    }
    /// The variable that is decided when expanding a state at the given depth.
    ///
    /// # Panics
    /// If depth is not smaller than `nb_variables()`
    pub fn variable(&self, depth: usize) -> &V {
        &self.variables[depth]
    }
    /// The number of variables (which is also the number of layers)
    pub fn nb_variables(&self) -> usize {
        self.variables.len()
    }
    /// The root state of the diagram
    pub fn initial_state(&self) -> &T {
        &self.initial_state
    }
    /// The maximum number of states in any layer
    pub fn max_width(&self) -> usize {
        self.max_width
    }
    /// Returns true iff a finite maximum width was configured
    pub fn is_bounded(&self) -> bool {
        self.max_width != usize::MAX
    }
    /// Returns true iff the compilation events are to be logged at info level
    pub fn trace(&self) -> bool {
        self.trace
    }
    /// The scope of the check telling whether a state is already present
    pub fn dedup(&self) -> Dedup {
        self.dedup
    }
}

#[cfg(test)]
mod tests {
    use crate::{ConfigBuilder, ConfigBuilderError, Dedup, Variable};

    fn minimal() -> ConfigBuilder<usize, isize, Variable> {
        ConfigBuilder::default()
            .sentinel(-1)
            .variables(vec![Variable(0), Variable(1)])
            .initial_state(0)
    }

    #[test]
    fn by_default_the_width_is_unbounded() {
        let config = minimal().build().unwrap();
        assert_eq!(usize::MAX, config.max_width());
        assert!(!config.is_bounded());
    }
    #[test]
    fn by_default_trace_is_off() {
        let config = minimal().build().unwrap();
        assert!(!config.trace());
    }
    #[test]
    fn by_default_dedup_is_per_layer() {
        let config = minimal().build().unwrap();
        assert_eq!(Dedup::Layer, config.dedup());
    }
    #[test]
    fn by_default_there_are_no_domains() {
        let config = minimal().build().unwrap();
        assert!(config.domains().is_empty());
        assert_eq!(None, config.domain(0));
    }
    #[test]
    fn accessors_return_what_was_configured() {
        let config = minimal()
            .domains(vec![vec![0, 1], vec![2]])
            .max_width(5)
            .trace(true)
            .dedup(Dedup::Diagram)
            .build()
            .unwrap();

        assert_eq!(&-1, config.sentinel());
        assert_eq!(&0, config.initial_state());
        assert_eq!(2, config.nb_variables());
        assert_eq!(&Variable(1), config.variable(1));
        assert_eq!(&[Variable(0), Variable(1)], config.variables());
        assert_eq!(Some(&[2][..]), config.domain(1));
        assert_eq!(5, config.max_width());
        assert!(config.is_bounded());
        assert!(config.trace());
        assert_eq!(Dedup::Diagram, config.dedup());
    }
    #[test]
    fn a_zero_width_is_rejected() {
        let result = minimal().max_width(0).build();
        assert!(matches!(result, Err(ConfigBuilderError::ValidationError(_))));
    }
    #[test]
    fn at_least_one_variable_is_required() {
        let result = minimal().variables(vec![]).build();
        assert!(matches!(result, Err(ConfigBuilderError::ValidationError(_))));
    }
    #[test]
    fn the_initial_state_is_mandatory() {
        let result = ConfigBuilder::<usize, isize, Variable>::default()
            .sentinel(-1)
            .variables(vec![Variable(0)])
            .build();
        assert!(matches!(result, Err(ConfigBuilderError::UninitializedField("initial_state"))));
    }
}
