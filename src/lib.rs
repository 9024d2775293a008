// File: src/lib.rs
//
// Library interface for the microbench measurement engine.
// The engine times repeated invocations of candidate functions over named
// inputs and returns per-combination statistics; presentation lives in the
// reporter and is entirely optional.

pub mod benchmark;
pub mod reporter;
pub mod stats;
pub mod timer;
pub mod units;

pub use benchmark::{Benchmark, BuilderOptions, Func, Input, RunOptions};
pub use reporter::Reporter;
pub use stats::{format_value, rank_order, Stats};
pub use timer::{time_once, Timer};
pub use units::{convert_from_millis, Units};
