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

//! This module provides the implementation of the compilation engine. An
//! `Instance` ties a configuration with the strategies which operate on it
//! and with the layers being populated. Compiling an instance unrolls the
//! problem one variable (layer) at a time:
//!
//! 1. every state of the current layer is expanded into the next layer. Each
//!    candidate yields a successor state which is inserted in the next layer
//!    unless it is already present or deemed redundant.
//! 2. when the next layer is complete, it is compacted if its size exceeds
//!    the maximum width.
//! 3. the compilation fails as soon as a layer turns out to be empty.

use std::fmt::Debug;
use std::hash::Hash;

use fxhash::FxHashSet;
use log::{debug, error, log, warn, Level};

use crate::{Compaction, Config, Dedup, Diagram, Layer, Problem, Reason, Redundancy};

/// A layered decision diagram in the making. Building an instance validates
/// the configuration; compiling it consumes the instance so that a given
/// instance can only ever be compiled once.
///
/// # Example
/// ```
/// # use ddlayer::*;
/// struct Binary;
/// impl Problem for Binary {
///     type State = State<Variable, isize>;
///     type Candidate = isize;
///     type Variable = Variable;
///
///     fn for_each_candidate(&self, depth: usize, _: &Self::State,
///         config: &Config<Self::State, isize, Variable>,
///         f: &mut dyn CandidateCallback<isize>)
///     {
///         for value in config.domain(depth).unwrap_or(&[]) {
///             f.apply(*value);
///         }
///     }
///     fn transition(&self, depth: usize, state: &Self::State, candidate: &isize,
///         config: &Config<Self::State, isize, Variable>) -> Self::State
///     {
///         state.with(*config.variable(depth), *candidate)
///     }
/// }
///
/// let config = ConfigBuilder::default()
///     .sentinel(-1)
///     .domains(vec![vec![0, 1]; 3])
///     .variables(vec![Variable(0), Variable(1), Variable(2)])
///     .initial_state(State::new())
///     .build()
///     .unwrap();
///
/// let keep_all = KeepAll::<State<Variable, isize>>::default();
/// let instance = Instance::new(config, &Binary, &keep_all, None).unwrap();
/// let diagram  = instance.compile().unwrap();
/// assert_eq!(vec![2, 4, 8], diagram.widths());
/// ```
pub struct Instance<'a, T, C, V> {
    /// The (read only) description of the diagram to compile
    config: Config<T, C, V>,
    /// Tells what candidates extend a state and what successor they yield
    problem: &'a dyn Problem<State = T, Candidate = C, Variable = V>,
    /// Decides whether a new state deserves a place in its layer
    redundancy: &'a dyn Redundancy<State = T>,
    /// Shrinks the layers exceeding the maximum width (if any)
    compaction: Option<&'a dyn Compaction<State = T>>,
    /// One layer per variable: `layers[d - 1]` is the layer at depth `d`
    layers: Vec<Layer<T>>,
    /// The level at which the compilation events are logged
    level: Level,
}

impl <'a, T, C, V> Instance<'a, T, C, V>
where
    T: Eq + Hash + Clone + Debug,
    C: Debug,
{
    /// Creates a new instance ready to be compiled.
    ///
    /// # Errors
    /// It fails with `Reason::WidthLimit` when the configuration bounds the
    /// width of the layers but no compaction strategy is given. That instance
    /// would fail as soon as a layer outgrows the bound.
    pub fn new(
        config: Config<T, C, V>,
        problem: &'a dyn Problem<State = T, Candidate = C, Variable = V>,
        redundancy: &'a dyn Redundancy<State = T>,
        compaction: Option<&'a dyn Compaction<State = T>>,
    ) -> Result<Self, Reason> {
        if config.is_bounded() && compaction.is_none() {
            error!("the width is bounded to {} but no compaction strategy is configured", config.max_width());
            return Err(Reason::WidthLimit { max_width: config.max_width() });
        }

        let layers = (0..config.nb_variables()).map(|_| Layer::new()).collect();
        let level = if config.trace() { Level::Info } else { Level::Trace };
        Ok(Self { config, problem, redundancy, compaction, layers, level })
    }

    /// The configuration of this instance
    pub fn config(&self) -> &Config<T, C, V> {
        &self.config
    }

    /// Compiles the diagram: it populates each layer from the previous one
    /// and compacts it whenever it exceeds the maximum width.
    ///
    /// # Errors
    /// * `Reason::Infeasible` when some layer ends up empty. The depth of the
    ///   reason is that of the first empty layer; no deeper layer is processed.
    /// * `Reason::WidthLimit` when a layer exceeds the maximum width and there
    ///   is no compaction strategy to shrink it.
    pub fn compile(mut self) -> Result<Diagram<T>, Reason> {
        let nb_layers = self.layers.len();
        log!(self.level, "compiling {} layers (max width {})", nb_layers, self.config.max_width());

        let root = self.config.initial_state().clone();
        self._forward(0, &root);
        self._compact(1)?;

        for depth in 1..nb_layers {
            if self.layers[depth - 1].is_empty() {
                debug!("depth {}: empty layer, cannot proceed", depth);
                return Err(Reason::Infeasible { depth });
            }

            log!(self.level, "depth {}: expanding {} states", depth, self.layers[depth - 1].len());
            let current = self.layers[depth - 1].states().to_vec();
            for state in current.iter() {
                self._forward(depth, state);
            }
            self._compact(depth + 1)?;
        }

        if self.layers[nb_layers - 1].is_empty() {
            debug!("depth {}: empty layer, cannot proceed", nb_layers);
            return Err(Reason::Infeasible { depth: nb_layers });
        }

        log!(self.level, "compilation complete (last layer: {} states)", self.layers[nb_layers - 1].len());
        Ok(Diagram { layers: self.layers })
    }

    /// Expands `state` (which sits at the given depth) into the layer at depth
    /// `depth + 1`. Every candidate yields one successor; the sentinel candidate
    /// is used when there is none. The redundancy check is consulted at most
    /// once per distinct successor.
    fn _forward(&mut self, depth: usize, state: &T) {
        let level = self.level;
        let problem = self.problem;
        let redundancy = self.redundancy;
        let config = &self.config;

        let (shallower, deeper) = self.layers.split_at_mut(depth);
        let target = &mut deeper[0];
        let shallower: &[Layer<T>] = match config.dedup() {
            Dedup::Layer => &[],
            Dedup::Diagram => shallower,
        };

        let mut expanded = false;
        let mut rejected = FxHashSet::default();
        problem.for_each_candidate(depth, state, config, &mut |candidate: C| {
            expanded = true;
            let next = problem.transition(depth, state, &candidate, config);
            log!(level, "depth {}: {:?} --{:?}--> {:?}", depth, state, candidate, next);
            Self::_insert(redundancy, level, depth + 1, shallower, target, &mut rejected, next);
        });

        if !expanded {
            let next = problem.transition(depth, state, config.sentinel(), config);
            log!(level, "depth {}: {:?} --{:?}--> {:?} (no candidate)", depth, state, config.sentinel(), next);
            Self::_insert(redundancy, level, depth + 1, shallower, target, &mut rejected, next);
        }
    }

    /// Inserts `state` in `layer` (at the given depth) iff it is not already
    /// present and the redundancy check decides to keep it. Already present
    /// states are discarded without consulting the redundancy check. The
    /// `shallower` layers are also searched when deduplicating the whole diagram.
    /// States found in `rejected` were deemed redundant earlier on: they are
    /// discarded straight away, and every newly rejected state is added to it.
    fn _insert(
        redundancy: &dyn Redundancy<State = T>,
        level: Level,
        depth: usize,
        shallower: &[Layer<T>],
        layer: &mut Layer<T>,
        rejected: &mut FxHashSet<T>,
        state: T,
    ) -> bool {
        if layer.contains(&state) || shallower.iter().any(|l| l.contains(&state)) {
            log!(level, "depth {}: {:?} is already present", depth, state);
            false
        } else if rejected.contains(&state) {
            log!(level, "depth {}: {:?} was already deemed redundant", depth, state);
            false
        } else if redundancy.keep(depth, &state, layer) {
            log!(level, "depth {}: {:?} inserted", depth, state);
            layer.insert(state)
        } else {
            log!(level, "depth {}: {:?} is redundant", depth, state);
            rejected.insert(state);
            false
        }
    }

    /// Makes sure the layer at the given depth does not exceed the max width.
    fn _compact(&mut self, depth: usize) -> Result<(), Reason> {
        let max_width = self.config.max_width();
        let layer = &mut self.layers[depth - 1];
        let before = layer.len();
        if before <= max_width {
            return Ok(());
        }

        match self.compaction {
            // only reachable when an instance is not built by `Instance::new`
            None => {
                error!("depth {}: {} states exceed the max width {}, no compaction strategy", depth, before, max_width);
                Err(Reason::WidthLimit { max_width })
            },
            Some(compaction) => {
                compaction.compact(depth, max_width, layer);
                log!(self.level, "depth {}: compacted from {} to {} states", depth, before, layer.len());
                if layer.len() > max_width {
                    warn!("depth {}: {} states remain after compaction (max width {})", depth, layer.len(), max_width);
                }
                Ok(())
            }
        }
    }
}
