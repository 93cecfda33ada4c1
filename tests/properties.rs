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

//! This module checks the properties every compiled diagram must satisfy,
//! whatever the strategies it has been compiled with.

use std::collections::HashSet;

use ddlayer::*;
use test_log::test;

type Cfg = Config<usize, usize, Variable>;

/// A problem whose transitions collide a lot. States ending with 6 have no
/// candidate at all (they are extended with the sentinel).
struct Collider;
impl Problem for Collider {
    type State = usize;
    type Candidate = usize;
    type Variable = Variable;

    fn for_each_candidate(&self, depth: usize, state: &usize, config: &Cfg, f: &mut dyn CandidateCallback<usize>) {
        if state % 10 == 6 {
            return;
        }
        for c in config.domain(depth).unwrap_or(&[]) {
            f.apply(*c);
        }
    }
    fn transition(&self, depth: usize, state: &usize, candidate: &usize, _: &Cfg) -> usize {
        (state * 3 + candidate + depth) % 17
    }
}

struct Greatest;
impl StateRanking for Greatest {
    type State = usize;
    fn compare(&self, a: &usize, b: &usize) -> std::cmp::Ordering {
        a.cmp(b)
    }
}
struct Min;
impl Relaxation for Min {
    type State = usize;
    fn merge(&self, states: &mut dyn Iterator<Item = &usize>) -> usize {
        states.copied().min().unwrap_or_default()
    }
}

fn config(max_width: usize) -> Cfg {
    ConfigBuilder::default()
        .sentinel(0)
        .domains(vec![vec![0, 1, 2, 3]; 6])
        .variables((0..6).map(Variable).collect())
        .initial_state(1)
        .max_width(max_width)
        .build()
        .unwrap()
}

fn compile(config: Cfg, compaction: Option<&dyn Compaction<State = usize>>) -> Diagram<usize> {
    let keep_all = KeepAll::<usize>::default();
    Instance::new(config, &Collider, &keep_all, compaction)
        .and_then(|instance| instance.compile())
        .unwrap()
}

/// All the successors of `state` at the given depth
fn successors(config: &Cfg, depth: usize, state: &usize) -> Vec<usize> {
    let mut candidates = vec![];
    Collider.for_each_candidate(depth, state, config, &mut |c: usize| candidates.push(c));
    if candidates.is_empty() {
        candidates.push(*config.sentinel());
    }
    candidates.iter().map(|c| Collider.transition(depth, state, c, config)).collect()
}

#[test]
fn layers_never_contain_duplicates() {
    let diagram = compile(config(usize::MAX), None);
    for layer in diagram.layers() {
        let distinct = layer.iter().collect::<HashSet<_>>();
        assert_eq!(distinct.len(), layer.len());
    }
}

#[test]
fn every_state_stems_from_the_previous_layer() {
    let cfg = config(usize::MAX);
    let diagram = compile(cfg.clone(), None);

    let root = successors(&cfg, 0, cfg.initial_state());
    assert!(diagram.layer(1).unwrap().iter().all(|s| root.contains(s)));

    for depth in 2..=diagram.nb_layers() {
        let previous = diagram.layer(depth - 1).unwrap();
        for state in diagram.layer(depth).unwrap() {
            assert!(previous.iter().any(|p| successors(&cfg, depth - 1, p).contains(state)),
                "{} at depth {} has no predecessor", state, depth);
        }
    }
}

#[test]
fn restricted_states_stem_from_the_previous_layer() {
    let cfg = config(3);
    let restriction = Restriction::new(Greatest);
    let diagram = compile(cfg.clone(), Some(&restriction));

    for depth in 2..=diagram.nb_layers() {
        let previous = diagram.layer(depth - 1).unwrap();
        for state in diagram.layer(depth).unwrap() {
            assert!(previous.iter().any(|p| successors(&cfg, depth - 1, p).contains(state)));
        }
    }
}

#[test]
fn restrictions_never_exceed_the_max_width() {
    let restriction = Restriction::new(Greatest);
    let keep_first = KeepFirst::<usize>::default();
    for width in 1..5 {
        assert!(compile(config(width), Some(&restriction)).widths().iter().all(|w| *w <= width));
        assert!(compile(config(width), Some(&keep_first)).widths().iter().all(|w| *w <= width));
    }
}

#[test]
fn relaxations_never_exceed_the_max_width() {
    let merge = Merge::new(Min, Greatest);
    for width in 1..5 {
        let diagram = compile(config(width), Some(&merge));
        assert!(diagram.widths().iter().all(|w| *w <= width));
    }
}

#[test]
fn a_restriction_keeps_the_best_states() {
    let cfg = config(2);
    let restriction = Restriction::new(Greatest);
    let diagram = compile(cfg.clone(), Some(&restriction));

    let mut expected = successors(&cfg, 0, cfg.initial_state());
    expected.sort_unstable_by(|a, b| b.cmp(a));
    expected.dedup();
    expected.truncate(2);

    let layer = diagram.layer(1).unwrap().iter().copied().collect::<Vec<_>>();
    assert_eq!(expected, layer);
}

#[test]
fn compilation_is_deterministic() {
    let restriction = Restriction::new(Greatest);
    let merge = Merge::new(Min, Greatest);

    assert_eq!(compile(config(usize::MAX), None), compile(config(usize::MAX), None));
    assert_eq!(compile(config(2), Some(&restriction)), compile(config(2), Some(&restriction)));
    assert_eq!(compile(config(2), Some(&merge)), compile(config(2), Some(&merge)));
}

#[test]
fn a_large_enough_width_is_the_same_as_no_bound() {
    let restriction = Restriction::new(Greatest);
    let exact = compile(config(usize::MAX), None);
    let bound = exact.widths().into_iter().max().unwrap();

    assert_eq!(exact, compile(config(bound), Some(&restriction)));
}
