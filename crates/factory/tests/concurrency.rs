#![allow(unused_crate_dependencies)]

mod common;

use std::thread;

use common::{Alpha, Beta, Product, is};
use pretty_assertions::assert_eq;
use xeno_factory::{keyed_factory, keyed_producer};

keyed_factory! {
	static LAZY: &'static str => dyn Product;
	static EAGER: &'static str => dyn Product;
}

keyed_producer!(LAZY, Alpha, "alpha");
keyed_producer!(LAZY, Beta, "beta");
keyed_producer!(EAGER, Alpha, "alpha");

const THREADS: usize = 8;
const ROUNDS: usize = 200;

/// Racing first queries still run registration exactly once.
#[test]
fn concurrent_first_queries() {
	thread::scope(|scope| {
		for worker in 0..THREADS {
			scope.spawn(move || {
				let key = if worker % 2 == 0 { "alpha" } else { "beta" };
				for _ in 0..ROUNDS {
					let product = LAZY.create_instance(&key).expect("registered key");
					assert_eq!(product.name(), key);
					assert!(LAZY.create_instance(&"zeta").is_none());
				}
			});
		}
	});

	assert_eq!(LAZY.len(), 2);
	assert!(LAZY.collisions().is_empty());
}

#[test]
fn init_before_spawning_workers() {
	EAGER.init();
	assert!(EAGER.is_initialized());

	let handles: Vec<_> = (0..THREADS)
		.map(|_| thread::spawn(|| EAGER.create_instance(&"alpha").map(|p| is::<Alpha>(p.as_ref()))))
		.collect();
	for handle in handles {
		assert_eq!(handle.join().expect("worker panicked"), Some(true));
	}
}
