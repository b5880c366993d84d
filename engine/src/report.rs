//! Structured reporting of what a run did.
//!
//! Values are collected into a single JSON document through the `report!` macro.
//! Nesting follows RAII guards: `push_context` opens an object under a key,
//! `push_collection_context` an array whose items are opened with
//! `CollectionContextGuard::push_collection_item`.
//! Dropping a guard closes its level again.
//!
//! Reporting is off unless `enable_reporting` was called on the current thread,
//! so library code may report unconditionally.
//! When the guard returned by `enable_reporting` is dropped, the document is written to stderr.
//! Stdout stays reserved for the answers of the program.

use crate::built_info;
use serde_json::{Map, Value};
use std::cell::RefCell;

pub use serde_json::json;

#[derive(Debug)]
enum Level {
    Object(Map<String, Value>),
    Collection(Vec<Value>),
}

impl Level {
    fn into_value(self) -> Value {
        match self {
            Level::Object(object) => Value::Object(object),
            Level::Collection(collection) => Value::Array(collection),
        }
    }
}

/// Stack of currently open levels.
/// The bottom entry is the root object, every other entry remembers the key it will be stored under
/// (`None` for collection items).
#[derive(Debug)]
pub struct Reporter {
    levels: Vec<(Option<String>, Level)>,
}

impl Default for Reporter {
    fn default() -> Self {
        Reporter {
            levels: vec![(None, Level::Object(Map::new()))],
        }
    }
}

impl Reporter {
    fn current(&mut self) -> &mut Level {
        &mut self.levels.last_mut().expect("reporter without root object").1
    }

    fn open_under_key(&mut self, key: String, level: Level) {
        if matches!(self.current(), Level::Collection(_)) {
            panic!("Cannot open {} under a key inside a collection", key);
        }
        self.levels.push((Some(key), level));
    }

    fn open_collection_item(&mut self) {
        if matches!(self.current(), Level::Object(_)) {
            panic!("Cannot create collection item in object");
        }
        self.levels.push((None, Level::Object(Map::new())));
    }

    fn close(&mut self) {
        assert!(self.levels.len() > 1, "tried to close the root object");
        let (key, level) = self.levels.pop().expect("tried to pop from empty context");
        let value = level.into_value();

        match (self.current(), key) {
            (Level::Object(object), Some(key)) => {
                let prev = object.insert(key, value);
                assert_eq!(prev, None);
            }
            (Level::Collection(collection), None) => collection.push(value),
            _ => panic!("Inconsistent context stack"),
        }
    }

    fn report(&mut self, key: String, val: Value) {
        match self.current() {
            Level::Object(object) => {
                let prev = object.insert(key, val);
                if !cfg!(feature = "report-allow-override") {
                    assert!(prev.is_none());
                }
            }
            Level::Collection(_) => panic!("Cannot report value on collection"),
        }
    }

    fn finish(&mut self) -> Value {
        assert_eq!(self.levels.len(), 1, "reporting finished with open contexts");
        let (_, root) = self.levels.pop().expect("reporter without root object");
        root.into_value()
    }
}

thread_local! {
    static REPORTER: RefCell<Option<Reporter>> = RefCell::new(None);
}

fn with_reporter(f: impl FnOnce(&mut Reporter)) {
    REPORTER.with(|reporter| {
        if let Some(r) = reporter.borrow_mut().as_mut() {
            f(r)
        }
    });
}

#[must_use]
pub struct ContextGuard(());

impl Drop for ContextGuard {
    fn drop(&mut self) {
        with_reporter(Reporter::close);
    }
}

pub fn push_context(key: String) -> ContextGuard {
    with_reporter(|r| r.open_under_key(key, Level::Object(Map::new())));
    ContextGuard(())
}

#[must_use]
pub struct CollectionContextGuard(());

impl Drop for CollectionContextGuard {
    fn drop(&mut self) {
        with_reporter(Reporter::close);
    }
}

pub fn push_collection_context(key: String) -> CollectionContextGuard {
    with_reporter(|r| r.open_under_key(key, Level::Collection(Vec::new())));
    CollectionContextGuard(())
}

impl CollectionContextGuard {
    pub fn push_collection_item(&mut self) -> CollectionItemContextGuard {
        with_reporter(Reporter::open_collection_item);
        CollectionItemContextGuard(self)
    }
}

#[must_use]
pub struct CollectionItemContextGuard<'a>(&'a CollectionContextGuard);

impl<'a> Drop for CollectionItemContextGuard<'a> {
    fn drop(&mut self) {
        with_reporter(Reporter::close);
    }
}

pub fn report(key: String, val: Value) {
    if cfg!(feature = "report-to-stderr") {
        eprintln!("{}: {}", key, val);
    }
    report_silent(key, val)
}

pub fn report_silent(key: String, val: Value) {
    with_reporter(|r| r.report(key, val));
}

#[must_use]
pub struct ReportingGuard(());

impl Drop for ReportingGuard {
    fn drop(&mut self) {
        if let Some(mut reporter) = REPORTER.with(|reporter| reporter.borrow_mut().take()) {
            eprintln!("{}", reporter.finish());
        }
    }
}

#[macro_export]
macro_rules! report {
    ($k:expr, $($json:tt)+) => { $crate::report::report($k.to_string(), $crate::report::json!($($json)+)) };
}

#[macro_export]
macro_rules! report_silent {
    ($k:expr, $($json:tt)+) => { $crate::report::report_silent($k.to_string(), $crate::report::json!($($json)+)) };
}

pub fn enable_reporting(program: &str) -> ReportingGuard {
    REPORTER.with(|reporter| reporter.replace(Some(Reporter::default())));

    report!("git_revision", built_info::GIT_VERSION.unwrap_or(""));
    report!("build_target", built_info::TARGET);
    report!("build_profile", built_info::PROFILE);
    report!("feature_flags", built_info::FEATURES_STR);
    report!("build_time", built_info::BUILT_TIME_UTC);
    report!("build_with_rustc", built_info::RUSTC_VERSION);

    report!("program", program);
    report!("start_time", format!("{}", time::now_utc().rfc822()));
    report!("args", std::env::args().collect::<Vec<String>>());

    ReportingGuard(())
}

/// Take the collected document without printing it.
/// Reporting is disabled afterwards.
pub fn take_report() -> Option<Value> {
    REPORTER.with(|reporter| reporter.borrow_mut().take()).map(|mut r| r.finish())
}

pub mod benchmark;
pub use benchmark::*;
