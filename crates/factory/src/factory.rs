//! Process-wide factory handles.

use std::sync::{Arc, OnceLock};

use tracing::debug;

use crate::builder::{Collision, FactoryBuilder, FactoryOptions};
use crate::error::FactoryError;
use crate::index::FactoryIndex;
use crate::producer::{FactoryKey, Producer};
use crate::registration::Registration;

/// A factory declared as a `static` and filled by [`keyed_producer!`](crate::keyed_producer)
/// declarations anywhere in the linked program.
///
/// Registration runs once, the first time the factory is queried or
/// [`init`](Self::init) is called. Every later call reads the frozen
/// [`FactoryIndex`]. Factories are told apart by address, so two statics of
/// the same type never share producers.
///
/// # Panics
///
/// Initialization panics if the factory uses
/// [`DuplicatePolicy::Reject`](crate::DuplicatePolicy::Reject) and two
/// producers claim the same key.
pub struct KeyedFactory<K: 'static, A: ?Sized + 'static> {
	name: &'static str,
	options: FactoryOptions<K>,
	index: OnceLock<FactoryIndex<K, A>>,
}

impl<K: 'static, A: ?Sized + 'static> KeyedFactory<K, A> {
	pub const fn new(name: &'static str) -> Self {
		Self::with_options(name, FactoryOptions::new())
	}

	pub const fn with_options(name: &'static str, options: FactoryOptions<K>) -> Self {
		Self {
			name,
			options,
			index: OnceLock::new(),
		}
	}

	pub fn name(&self) -> &'static str {
		self.name
	}

	/// Returns true once registration has completed.
	pub fn is_initialized(&self) -> bool {
		self.index.get().is_some()
	}
}

impl<K: FactoryKey, A: ?Sized + 'static> KeyedFactory<K, A> {
	/// Runs registration if it has not run yet and returns the frozen index.
	///
	/// Hosts that want registration to happen at a known point during startup
	/// call this before spawning workers; otherwise the first query does it.
	pub fn init(&self) -> &FactoryIndex<K, A> {
		self.index.get_or_init(|| match self.collect() {
			Ok(index) => index,
			Err(err) => panic!("{err}"),
		})
	}

	fn collect(&self) -> Result<FactoryIndex<K, A>, FactoryError> {
		let mut builder = FactoryBuilder::<K, A>::with_options(self.name, self.options);
		for registration in Registration::for_factory(self) {
			registration.register(&mut builder)?;
		}
		let index = builder.build();
		debug!(
			factory = self.name,
			producers = index.len(),
			collisions = index.collisions().len(),
			"factory registration complete"
		);
		Ok(index)
	}

	/// Builds a new instance of the product registered under `key`.
	///
	/// An unregistered key yields `None`; callers handle it as an ordinary
	/// branch (unsupported name, stale configuration value).
	pub fn create_instance(&self, key: &K) -> Option<Arc<A>> {
		self.init().create_instance(key)
	}

	/// Like [`create_instance`](Self::create_instance), treating an unknown
	/// key as an error.
	pub fn require(&self, key: &K) -> Result<Arc<A>, FactoryError> {
		self.init().require(key)
	}

	pub fn contains(&self, key: &K) -> bool {
		self.init().contains(key)
	}

	pub fn producer(&self, key: &K) -> Option<&Producer<K, A>> {
		self.init().producer(key)
	}

	/// Registered keys in ascending order.
	pub fn keys(&self) -> impl Iterator<Item = K> + '_ {
		self.init().keys()
	}

	pub fn key_of<T: 'static>(&self) -> Option<K> {
		self.init().key_of::<T>()
	}

	pub fn len(&self) -> usize {
		self.init().len()
	}

	pub fn is_empty(&self) -> bool {
		self.init().is_empty()
	}

	pub fn collisions(&self) -> &[Collision<K>] {
		self.init().collisions()
	}
}
