// Benchmark engine - configuration store and measurement loop
//
// Usage:
//   let mut bench = Benchmark::new();
//   bench
//       .add_func(Func::new("sort", |mut v: Vec<u64>| { v.sort(); }))
//       .add_input(Input::new("random_1k", data))
//       .add_sample(100);
//   let results = bench.run();
//
// The engine is single-threaded and fully synchronous: `run` blocks until
// every measurement has completed. It holds no locks; callers needing
// cross-thread access must synchronize externally.

use crate::stats::{rank_order, Stats};
use crate::timer::Timer;
use crate::units::Units;
use std::fmt;
use std::rc::Rc;

/// One implementation under comparison. The callable receives an owned copy
/// of the input's argument bundle and its return value is discarded; only
/// timing matters.
pub struct Func<A> {
    name: String,
    call: Rc<dyn Fn(A)>,
}

impl<A> Func<A> {
    pub fn new(name: impl Into<String>, call: impl Fn(A) + 'static) -> Self {
        Self { name: name.into(), call: Rc::new(call) }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn invoke(&self, args: A) {
        (self.call.as_ref())(args);
    }
}

impl<A> Clone for Func<A> {
    fn clone(&self) -> Self {
        Self { name: self.name.clone(), call: Rc::clone(&self.call) }
    }
}

impl<A> fmt::Debug for Func<A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Func").field("name", &self.name).finish_non_exhaustive()
    }
}

/// A named argument bundle applied to every candidate function. The bundle
/// is cloned before each timed invocation, so in-place mutation by a
/// candidate never leaks into later samples or other candidates.
#[derive(Debug, Clone)]
pub struct Input<A> {
    pub name: String,
    pub args: A,
}

impl<A> Input<A> {
    pub fn new(name: impl Into<String>, args: A) -> Self {
        Self { name: name.into(), args }
    }
}

/// Initial configuration for [`Benchmark::with_options`]. Every field is
/// independently optional through `Default`: empty lists, milliseconds.
pub struct BuilderOptions<A> {
    pub functions: Vec<Func<A>>,
    pub inputs: Vec<Input<A>>,
    pub samples: Vec<usize>,
    pub units: Units,
}

impl<A> Default for BuilderOptions<A> {
    fn default() -> Self {
        Self { functions: Vec::new(), inputs: Vec::new(), samples: Vec::new(), units: Units::Ms }
    }
}

/// Options for a single `run` call.
#[derive(Default)]
pub struct RunOptions<'a> {
    /// Sort the result list with [`rank_order`] before returning.
    pub rank: bool,
    /// Invoked synchronously right after each record is computed, in
    /// Cartesian-product order, before any ranking.
    pub on_record: Option<Box<dyn FnMut(&Stats) + 'a>>,
}

/// The measurement engine: holds the candidate functions, the named inputs,
/// the sample counts and the active output unit, and times the Cartesian
/// product of the three lists on `run`.
pub struct Benchmark<A> {
    funcs: Vec<Func<A>>,
    inputs: Vec<Input<A>>,
    samples: Vec<usize>,
    units: Units,
}

impl<A: Clone> Benchmark<A> {
    pub fn new() -> Self {
        Self::with_options(BuilderOptions::default())
    }

    pub fn with_options(options: BuilderOptions<A>) -> Self {
        Self {
            funcs: options.functions,
            inputs: options.inputs,
            samples: options.samples,
            units: options.units,
        }
    }

    // -- mutation API -------------------------------------------------------
    //
    // Every method appends, removes or replaces in place and returns the
    // engine for chaining. Duplicates are not rejected; removal indices out
    // of range are silent no-ops.

    pub fn add_func(&mut self, func: Func<A>) -> &mut Self {
        self.funcs.push(func);
        self
    }

    pub fn add_funcs(&mut self, funcs: impl IntoIterator<Item = Func<A>>) -> &mut Self {
        self.funcs.extend(funcs);
        self
    }

    pub fn add_input(&mut self, input: Input<A>) -> &mut Self {
        self.inputs.push(input);
        self
    }

    pub fn add_inputs(&mut self, inputs: impl IntoIterator<Item = Input<A>>) -> &mut Self {
        self.inputs.extend(inputs);
        self
    }

    pub fn add_sample(&mut self, sample: usize) -> &mut Self {
        self.samples.push(sample);
        self
    }

    pub fn add_samples(&mut self, samples: impl IntoIterator<Item = usize>) -> &mut Self {
        self.samples.extend(samples);
        self
    }

    pub fn remove_func(&mut self, index: usize) -> &mut Self {
        remove_at(&mut self.funcs, index);
        self
    }

    pub fn remove_funcs(&mut self, indices: &[usize]) -> &mut Self {
        remove_many(&mut self.funcs, indices);
        self
    }

    pub fn remove_input(&mut self, index: usize) -> &mut Self {
        remove_at(&mut self.inputs, index);
        self
    }

    pub fn remove_inputs(&mut self, indices: &[usize]) -> &mut Self {
        remove_many(&mut self.inputs, indices);
        self
    }

    pub fn remove_sample(&mut self, index: usize) -> &mut Self {
        remove_at(&mut self.samples, index);
        self
    }

    pub fn remove_samples(&mut self, indices: &[usize]) -> &mut Self {
        remove_many(&mut self.samples, indices);
        self
    }

    pub fn set_funcs(&mut self, funcs: Vec<Func<A>>) -> &mut Self {
        self.funcs = funcs;
        self
    }

    pub fn set_inputs(&mut self, inputs: Vec<Input<A>>) -> &mut Self {
        self.inputs = inputs;
        self
    }

    pub fn set_samples(&mut self, samples: Vec<usize>) -> &mut Self {
        self.samples = samples;
        self
    }

    /// Applies to subsequent runs; records already returned keep the unit
    /// they were produced with.
    pub fn set_units(&mut self, units: Units) -> &mut Self {
        self.units = units;
        self
    }

    pub fn funcs(&self) -> &[Func<A>] {
        &self.funcs
    }

    pub fn inputs(&self) -> &[Input<A>] {
        &self.inputs
    }

    pub fn samples(&self) -> &[usize] {
        &self.samples
    }

    pub fn units(&self) -> Units {
        self.units
    }

    // -- execution ----------------------------------------------------------

    /// Run every (sample count, input, function) combination and return one
    /// record per triple, in iteration order: sample counts outer, then
    /// inputs, then functions. Empty configuration lists yield an empty
    /// result. A panicking candidate propagates out with no partial results.
    pub fn run(&self) -> Vec<Stats> {
        self.run_with(RunOptions::default())
    }

    pub fn run_with(&self, mut options: RunOptions<'_>) -> Vec<Stats> {
        let mut results = Vec::with_capacity(self.samples.len() * self.inputs.len() * self.funcs.len());
        for &sample_size in &self.samples {
            for input in &self.inputs {
                for func in &self.funcs {
                    let stats = self.measure(sample_size, input, func);
                    if let Some(observer) = options.on_record.as_mut() {
                        observer(&stats);
                    }
                    results.push(stats);
                }
            }
        }
        if options.rank {
            results.sort_by(rank_order);
        }
        results
    }

    fn measure(&self, sample_size: usize, input: &Input<A>, func: &Func<A>) -> Stats {
        let mut times = Vec::with_capacity(sample_size);
        for _ in 0..sample_size {
            let timer = Timer::start();
            // The clone is inside the timed region; its cost is part of the
            // measurement. Isolation takes priority over a lower floor.
            let args = input.args.clone();
            func.invoke(args);
            times.push(timer.elapsed_ms());
        }
        Stats::from_times(func.name.clone(), input.name.clone(), &times, self.units)
    }
}

impl<A: Clone> Default for Benchmark<A> {
    fn default() -> Self {
        Self::new()
    }
}

fn remove_at<T>(list: &mut Vec<T>, index: usize) {
    if index < list.len() {
        list.remove(index);
    }
}

// Indices resolve against the list as it was before the batch: remove from
// the highest index down so earlier removals never shift later targets.
fn remove_many<T>(list: &mut Vec<T>, indices: &[usize]) {
    let mut sorted = indices.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    for index in sorted {
        remove_at(list, index);
    }
}
