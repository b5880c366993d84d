//! Measuring how long the phases of a run take.

use std::sync::atomic::{compiler_fence, Ordering::SeqCst};
use std::time::*;

/// Run `f`, log start and duration to stderr, report the duration
/// as `running_time_ms` in the current context and return the result of `f`.
pub fn report_time<Out, F: FnOnce() -> Out>(name: &str, f: F) -> Out {
    eprintln!("starting {}", name);
    let (res, t_passed) = measure(f);
    let t_passed = t_passed.as_secs_f64() * 1000.0;
    eprintln!("{} done - took: {}ms", name, t_passed);
    report!("running_time_ms", t_passed);
    res
}

/// Run `f` and return its result together with the time it took.
pub fn measure<Out, F: FnOnce() -> Out>(f: F) -> (Out, Duration) {
    compiler_fence(SeqCst);
    let start = Instant::now();
    let res = f();
    let t_passed = start.elapsed();
    compiler_fence(SeqCst);
    (res, t_passed)
}
