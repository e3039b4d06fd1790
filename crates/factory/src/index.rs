//! Query phase.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::trace;

use crate::builder::Collision;
use crate::error::FactoryError;
use crate::producer::{FactoryKey, Producer};

/// Immutable key to producer map produced by [`FactoryBuilder::build`](crate::FactoryBuilder::build).
pub struct FactoryIndex<K, A: ?Sized> {
	name: &'static str,
	producers: BTreeMap<K, Producer<K, A>>,
	collisions: Vec<Collision<K>>,
}

impl<K: FactoryKey, A: ?Sized + 'static> FactoryIndex<K, A> {
	pub(crate) fn new(
		name: &'static str,
		producers: BTreeMap<K, Producer<K, A>>,
		collisions: Vec<Collision<K>>,
	) -> Self {
		Self {
			name,
			producers,
			collisions,
		}
	}

	pub fn name(&self) -> &'static str {
		self.name
	}

	/// Builds a new instance of the product registered under `key`.
	///
	/// Returns `None` when no producer claims `key`.
	pub fn create_instance(&self, key: &K) -> Option<Arc<A>> {
		match self.producers.get(key) {
			Some(producer) => Some(producer.create_instance()),
			None => {
				trace!(factory = self.name, key = ?key, "no producer for key");
				None
			}
		}
	}

	/// Like [`create_instance`](Self::create_instance), treating an unknown
	/// key as an error.
	pub fn require(&self, key: &K) -> Result<Arc<A>, FactoryError> {
		self.create_instance(key)
			.ok_or_else(|| FactoryError::UnknownKey {
				factory: self.name,
				key: format!("{key:?}"),
			})
	}

	pub fn producer(&self, key: &K) -> Option<&Producer<K, A>> {
		self.producers.get(key)
	}

	pub fn contains(&self, key: &K) -> bool {
		self.producers.contains_key(key)
	}

	/// Registered keys in ascending order.
	pub fn keys(&self) -> impl Iterator<Item = K> + '_ {
		self.producers.keys().copied()
	}

	/// Winning producers in ascending key order.
	pub fn producers(&self) -> impl Iterator<Item = &Producer<K, A>> {
		self.producers.values()
	}

	/// Returns the key product type `T` is produced under.
	pub fn key_of<T: 'static>(&self) -> Option<K> {
		self.producers
			.values()
			.find(|producer| producer.produces::<T>())
			.map(Producer::key)
	}

	pub fn len(&self) -> usize {
		self.producers.len()
	}

	pub fn is_empty(&self) -> bool {
		self.producers.is_empty()
	}

	/// Collisions resolved while this index was built, in registration order.
	pub fn collisions(&self) -> &[Collision<K>] {
		&self.collisions
	}
}

impl<K: FactoryKey, A: ?Sized + 'static> std::fmt::Debug for FactoryIndex<K, A> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("FactoryIndex")
			.field("name", &self.name)
			.field("producers", &self.producers)
			.field("collisions", &self.collisions)
			.finish()
	}
}
