#![allow(unused_crate_dependencies)]

//! Picks memory-scan strategies by name, the way a host reads them from a
//! saved scan configuration.
//!
//! Run with `RUST_LOG=xeno_factory=trace` to watch registration.

use std::any::Any;

use tracing_subscriber::EnvFilter;
use xeno_factory::{keyed_factory, keyed_producer};

trait ScanStrategy: Any + Send + Sync {
	fn matches(&self, needle: u32, value: u32) -> bool;
}

keyed_factory! {
	/// Scan strategies by the name stored in scan configurations.
	static STRATEGIES: &'static str => dyn ScanStrategy;
}

#[derive(Default)]
struct Exact;

impl ScanStrategy for Exact {
	fn matches(&self, needle: u32, value: u32) -> bool {
		needle == value
	}
}

struct Within {
	tolerance: u32,
}

impl Within {
	fn loose() -> Self {
		Self { tolerance: 4 }
	}
}

impl ScanStrategy for Within {
	fn matches(&self, needle: u32, value: u32) -> bool {
		needle.abs_diff(value) <= self.tolerance
	}
}

#[derive(Default)]
struct Changed;

impl ScanStrategy for Changed {
	fn matches(&self, needle: u32, value: u32) -> bool {
		needle != value
	}
}

keyed_producer!(STRATEGIES, Exact, "exact");
keyed_producer!(STRATEGIES, Within, "within", with = Within::loose);
keyed_producer!(STRATEGIES, Changed, "changed");

fn main() {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.init();

	let memory = [10_u32, 12, 15, 40, 10];
	let needle = 12;

	for name in ["exact", "within", "changed", "bitmask"] {
		let Some(strategy) = STRATEGIES.create_instance(&name) else {
			tracing::warn!(strategy = name, "unsupported scan strategy, skipping");
			continue;
		};
		let hits: Vec<usize> = memory
			.iter()
			.enumerate()
			.filter(|(_, value)| strategy.matches(needle, **value))
			.map(|(offset, _)| offset)
			.collect();
		println!("{name:>8}: {hits:?}");
	}
}
