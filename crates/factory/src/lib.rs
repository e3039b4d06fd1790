#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Keyed factories filled by self-registering producers.
//!
//! A [`KeyedFactory`] maps a runtime key to a [`Producer`] that knows how to
//! build one concrete product type behind a shared product interface `A`
//! (usually a `dyn Trait`). Product types never touch a central list: each one
//! is paired with a single [`keyed_producer!`] declaration, which submits a
//! [`Registration`] through `inventory`. The first query against a factory
//! walks every registration targeting it, in a fixed order, and freezes the
//! result into an immutable [`FactoryIndex`].
//!
//! # Phases
//!
//! - Registration: [`FactoryBuilder`] owns the mutable map. Static factories
//!   run it exactly once inside a `OnceLock` initializer.
//! - Query: [`FactoryIndex`] is read-only and `Sync`, so `create_instance` can
//!   be called from any number of threads.
//!
//! # Example
//!
//! ```rust
//! use std::any::Any;
//!
//! use xeno_factory::{keyed_factory, keyed_producer};
//!
//! pub trait Strategy: Any + Send + Sync {
//! 	fn label(&self) -> &'static str;
//! }
//!
//! keyed_factory! {
//! 	/// Scan strategies by name.
//! 	pub static STRATEGIES: &'static str => dyn Strategy;
//! }
//!
//! #[derive(Default)]
//! struct Exact;
//!
//! impl Strategy for Exact {
//! 	fn label(&self) -> &'static str {
//! 		"exact"
//! 	}
//! }
//!
//! keyed_producer!(STRATEGIES, Exact, "exact");
//!
//! fn main() {
//! 	let strategy = STRATEGIES.create_instance(&"exact").expect("registered");
//! 	assert_eq!(strategy.label(), "exact");
//! 	assert!(STRATEGIES.create_instance(&"fuzzy").is_none());
//! }
//! ```

mod builder;
mod error;
mod factory;
mod index;
mod macros;
mod producer;
mod registration;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use builder::{
	Collision, CollisionHook, DuplicatePolicy, FactoryBuilder, FactoryOptions, Party, Resolution,
};
pub use error::FactoryError;
pub use factory::KeyedFactory;
pub use index::FactoryIndex;
pub use producer::{FactoryKey, Producer, Site};
pub use registration::{RegisterHook, Registration};

/// Support items for the exported macros. Not part of the public API.
#[doc(hidden)]
pub mod __private {
	pub use inventory;

	pub use crate::registration::submit;
}
