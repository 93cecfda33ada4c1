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

//! This module checks the behavior of the engine on a couple of small, well
//! understood scenarios.

use ddlayer::*;

type S = State<&'static str, i32>;
type Cfg = Config<S, i32, &'static str>;

/// Every state can be extended with 0 or 1; the transition assigns the
/// candidate to the variable being decided.
struct Binary;
impl Problem for Binary {
    type State = S;
    type Candidate = i32;
    type Variable = &'static str;

    fn for_each_candidate(&self, _: usize, _: &S, _: &Cfg, f: &mut dyn CandidateCallback<i32>) {
        f.apply(0);
        f.apply(1);
    }
    fn transition(&self, depth: usize, state: &S, candidate: &i32, config: &Cfg) -> S {
        state.with(*config.variable(depth), *candidate)
    }
}

/// There is never any candidate; the transition leaves the state untouched.
struct Stationary;
impl Problem for Stationary {
    type State = S;
    type Candidate = i32;
    type Variable = &'static str;

    fn for_each_candidate(&self, _: usize, _: &S, _: &Cfg, _: &mut dyn CandidateCallback<i32>) {}
    fn transition(&self, _: usize, state: &S, _: &i32, _: &Cfg) -> S {
        state.clone()
    }
}

/// Rejects a state whenever it equals an existing entry of a non-empty layer
struct RejectKnown;
impl Redundancy for RejectKnown {
    type State = S;
    fn keep(&self, _: usize, state: &S, layer: &Layer<S>) -> bool {
        layer.is_empty() || !layer.iter().any(|s| s == state)
    }
}

fn config() -> ConfigBuilder<S, i32, &'static str> {
    ConfigBuilder::default()
        .sentinel(-1)
        .domains(vec![vec![0, 1]; 3])
        .variables(vec!["a", "b", "c"])
        .initial_state(State::new().with("x", 0))
}

fn compile(
    config: Cfg,
    problem: &dyn Problem<State = S, Candidate = i32, Variable = &'static str>,
    redundancy: &dyn Redundancy<State = S>,
    compaction: Option<&dyn Compaction<State = S>>,
) -> Result<Diagram<S>, Reason> {
    Instance::new(config, problem, redundancy, compaction)?.compile()
}

#[test_log::test]
fn unbounded_binary_diagram_doubles_at_each_layer() {
    let keep_all = KeepAll::<S>::default();
    let diagram = compile(config().build().unwrap(), &Binary, &keep_all, None).unwrap();

    assert_eq!(vec![2, 4, 8], diagram.widths());
    let last = diagram.last_layer().unwrap();
    assert!(last.contains(&State::new().with("x", 0).with("a", 1).with("b", 0).with("c", 1)));
}

#[test_log::test]
fn width_one_keeps_exactly_one_state_per_layer() {
    let keep_all = KeepAll::<S>::default();
    let keep_first = KeepFirst::<S>::default();
    let diagram = compile(config().max_width(1).build().unwrap(), &Binary, &keep_all, Some(&keep_first)).unwrap();

    assert_eq!(vec![1, 1, 1], diagram.widths());
    // the first inserted state is the one that survives
    assert_eq!(Some(&State::new().with("x", 0).with("a", 0)), diagram.layer(1).and_then(|l| l.get(0)));
    assert_eq!(Some(&State::new().with("x", 0).with("a", 0).with("b", 0).with("c", 0)),
        diagram.layer(3).and_then(|l| l.get(0)));
}

#[test_log::test]
fn stationary_state_already_reached_is_infeasible_at_depth_two() {
    let diagram = compile(
        config().dedup(Dedup::Diagram).build().unwrap(),
        &Stationary, &RejectKnown, None);

    assert_eq!(Err(Reason::Infeasible { depth: 2 }), diagram);
}

#[test_log::test]
fn stationary_state_goes_through_when_each_layer_is_deduplicated_on_its_own() {
    let diagram = compile(config().build().unwrap(), &Stationary, &RejectKnown, None).unwrap();

    assert_eq!(vec![1, 1, 1], diagram.widths());
    for layer in diagram.layers() {
        assert_eq!(Some(&State::new().with("x", 0)), layer.get(0));
    }
}

#[test_log::test]
fn bounded_width_without_compaction_is_a_configuration_error() {
    let keep_all = KeepAll::<S>::default();
    let result = compile(config().max_width(4).build().unwrap(), &Binary, &keep_all, None);

    assert_eq!(Err(Reason::WidthLimit { max_width: 4 }), result);
}

#[test_log::test]
fn tracing_does_not_change_the_outcome() {
    let keep_all = KeepAll::<S>::default();
    let keep_first = KeepFirst::<S>::default();

    let quiet = compile(config().max_width(3).build().unwrap(), &Binary, &keep_all, Some(&keep_first));
    let loud = compile(config().max_width(3).trace(true).build().unwrap(), &Binary, &keep_all, Some(&keep_first));

    assert!(quiet.is_ok());
    assert_eq!(quiet, loud);
}
