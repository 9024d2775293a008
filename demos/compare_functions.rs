// Compares two sort implementations with the microbench engine and prints
// a ranked report.
//
// Run with: cargo run --example compare_functions --release

use microbench::{Benchmark, Func, Input, Reporter, RunOptions, Units};
use rand::Rng;

fn random_values(len: usize) -> Vec<u64> {
    let mut rng = rand::thread_rng();
    (0..len).map(|_| rng.gen_range(0..1_000_000)).collect()
}

fn main() {
    let units = Units::Ms;
    let mut bench: Benchmark<Vec<u64>> = Benchmark::new();
    bench
        .add_funcs([
            Func::new("sort_stable", |mut v: Vec<u64>| {
                v.sort();
            }),
            Func::new("sort_unstable", |mut v: Vec<u64>| {
                v.sort_unstable();
            }),
        ])
        .add_inputs([
            Input::new("random_1k", random_values(1_000)),
            Input::new("random_50k", random_values(50_000)),
        ])
        .add_samples([10, 50])
        .set_units(units);

    Reporter::print_header("Sort comparison");
    let results = bench.run_with(RunOptions { rank: true, on_record: None });
    Reporter::print_table(&results, units);
    Reporter::print_summary(&results, units);
}
