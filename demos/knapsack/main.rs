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

//! Compiles the decision diagram of a 0/1 knapsack instance given on the
//! command line and reports the best profit found in its last layer.
//!
//! ```text
//! cargo run --example knapsack -- --capacity 50 --profit 60,100,120 --weight 10,20,30 --width 4
//! ```

use std::process::ExitCode;

use clap::Parser;
use ddlayer::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct KnapsackState {
    capacity: usize,
    profit: usize,
}

struct Knapsack {
    profit: Vec<usize>,
    weight: Vec<usize>,
}

impl Problem for Knapsack {
    type State = KnapsackState;
    type Candidate = bool;
    type Variable = Variable;

    fn for_each_candidate(&self, depth: usize, state: &Self::State,
        _: &Config<KnapsackState, bool, Variable>, f: &mut dyn CandidateCallback<bool>)
    {
        if state.capacity >= self.weight[depth] {
            f.apply(true);
        }
        f.apply(false);
    }

    fn transition(&self, depth: usize, state: &Self::State, take: &bool,
        _: &Config<KnapsackState, bool, Variable>) -> Self::State
    {
        let mut ret = *state;
        if *take {
            ret.capacity -= self.weight[depth];
            ret.profit   += self.profit[depth];
        }
        ret
    }
}

/// A state with more room and more profit makes the other one useless
struct KPDominance;
impl Dominance for KPDominance {
    type State = KnapsackState;
    type Key = ();

    fn get_key(&self, _: &Self::State) -> Option<Self::Key> {
        Some(())
    }
    fn nb_dimensions(&self, _: &Self::State) -> usize {
        2
    }
    fn get_coordinate(&self, state: &Self::State, i: usize) -> isize {
        match i {
            0 => state.capacity as isize,
            _ => state.profit as isize,
        }
    }
}

struct KPRanking;
impl StateRanking for KPRanking {
    type State = KnapsackState;

    fn compare(&self, a: &Self::State, b: &Self::State) -> std::cmp::Ordering {
        a.profit.cmp(&b.profit)
            .then_with(|| a.capacity.cmp(&b.capacity))
    }
}

// #### ONLY USEFUL FOR THE DEMO ##########################################################

#[derive(Debug, thiserror::Error)]
enum Errors {
    #[error("there must be as many profits ({0}) as weights ({1})")]
    Mismatch(usize, usize),
    #[error("there must be at least one item")]
    NoItem,
    #[error("invalid configuration {0}")]
    Config(#[from] ConfigBuilderError),
    #[error(transparent)]
    Compilation(#[from] Reason),
}

impl Errors {
    fn exit_code(&self) -> u8 {
        match self {
            Errors::Compilation(Reason::Infeasible { .. }) => 2,
            Errors::Compilation(Reason::WidthLimit { .. }) => 3,
            _ => 1,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
/// Compiles the (possibly restricted) decision diagram of a 0/1 knapsack
/// instance and prints the best profit it contains.
struct Args {
    /// The capacity of the sack
    #[clap(short, long)]
    capacity: usize,
    /// The profit of each item (comma separated)
    #[clap(short, long, value_delimiter = ',', required = true)]
    profit: Vec<usize>,
    /// The weight of each item (comma separated)
    #[clap(short = 'W', long, value_delimiter = ',', required = true)]
    weight: Vec<usize>,
    /// The maximum number of states in any layer
    #[clap(short, long)]
    width: Option<usize>,
    /// Logs the progress of the compilation
    #[clap(short, long)]
    verbose: bool,
}

fn run(args: &Args) -> Result<(Vec<usize>, usize), Errors> {
    if args.profit.len() != args.weight.len() {
        return Err(Errors::Mismatch(args.profit.len(), args.weight.len()));
    }
    if args.profit.is_empty() {
        return Err(Errors::NoItem);
    }

    let problem = Knapsack { profit: args.profit.clone(), weight: args.weight.clone() };
    let config = ConfigBuilder::default()
        .sentinel(false)
        .domains(vec![vec![true, false]; problem.profit.len()])
        .variables((0..problem.profit.len()).map(Variable).collect())
        .initial_state(KnapsackState { capacity: args.capacity, profit: 0 })
        .max_width(args.width.unwrap_or(usize::MAX))
        .trace(args.verbose)
        .build()?;

    let dominance = DominanceFilter::new(KPDominance);
    let restriction = Restriction::new(KPRanking);
    let diagram = Instance::new(config, &problem, &dominance, Some(&restriction))?.compile()?;

    let best = diagram.last_layer()
        .and_then(|layer| layer.iter().map(|s| s.profit).max())
        .unwrap_or_default();
    Ok((diagram.widths(), best))
}

fn main() -> ExitCode {
    let args = Args::parse();
    if args.verbose {
        simplelog::TermLogger::init(
            simplelog::LevelFilter::Info,
            simplelog::Config::default(),
            simplelog::TerminalMode::Mixed,
            simplelog::ColorChoice::Auto,
        )
        .unwrap();
    }

    match run(&args) {
        Ok((widths, best)) => {
            println!("widths      {:?}", widths);
            println!("best profit {}", best);
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
