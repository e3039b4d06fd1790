//! Registration phase.
//!
//! [`FactoryBuilder`] owns the mutable key map while producers are being
//! registered. Collisions are resolved by a [`DuplicatePolicy`], recorded, and
//! handed to an optional hook; the default policy keeps the last registrant.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt;

use tracing::{debug, trace};

use crate::error::FactoryError;
use crate::index::FactoryIndex;
use crate::producer::{FactoryKey, Producer, Site};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
	/// Overwrite with the last producer registered for a key.
	#[default]
	LastWins,
	/// Keep the first producer registered for a key.
	FirstWins,
	/// Refuse the incoming producer with [`FactoryError::DuplicateKey`].
	Reject,
}

impl fmt::Display for DuplicatePolicy {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::LastWins => write!(f, "last_wins"),
			Self::FirstWins => write!(f, "first_wins"),
			Self::Reject => write!(f, "reject"),
		}
	}
}

/// One side of a key collision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Party {
	pub type_name: &'static str,
	pub priority: i16,
	pub site: Option<Site>,
}

impl Party {
	fn of<K: FactoryKey, A: ?Sized + 'static>(producer: &Producer<K, A>) -> Self {
		Self {
			type_name: producer.type_name(),
			priority: producer.priority(),
			site: producer.site(),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
	/// Existing producer kept; incoming dropped.
	KeptExisting,
	/// Existing producer replaced by incoming.
	ReplacedExisting,
	/// Incoming refused and reported as an error.
	Rejected,
}

/// A second producer claimed a key that was already bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collision<K> {
	pub factory: &'static str,
	pub key: K,
	pub existing: Party,
	pub incoming: Party,
	pub resolution: Resolution,
}

/// Diagnostic callback invoked once per collision, after it is resolved.
pub type CollisionHook<K> = fn(&Collision<K>);

/// Registration knobs shared by [`FactoryBuilder`] and
/// [`KeyedFactory`](crate::KeyedFactory).
#[derive(Clone, Copy, Debug)]
pub struct FactoryOptions<K: 'static> {
	pub policy: DuplicatePolicy,
	pub on_collision: Option<CollisionHook<K>>,
}

impl<K: 'static> FactoryOptions<K> {
	pub const fn new() -> Self {
		Self {
			policy: DuplicatePolicy::LastWins,
			on_collision: None,
		}
	}

	pub const fn policy(mut self, policy: DuplicatePolicy) -> Self {
		self.policy = policy;
		self
	}

	pub const fn on_collision(mut self, hook: CollisionHook<K>) -> Self {
		self.on_collision = Some(hook);
		self
	}
}

impl<K: 'static> Default for FactoryOptions<K> {
	fn default() -> Self {
		Self::new()
	}
}

pub struct FactoryBuilder<K: 'static, A: ?Sized> {
	name: &'static str,
	options: FactoryOptions<K>,
	producers: BTreeMap<K, Producer<K, A>>,
	collisions: Vec<Collision<K>>,
}

impl<K: FactoryKey, A: ?Sized + 'static> FactoryBuilder<K, A> {
	pub fn new(name: &'static str) -> Self {
		Self::with_options(name, FactoryOptions::new())
	}

	pub fn with_options(name: &'static str, options: FactoryOptions<K>) -> Self {
		Self {
			name,
			options,
			producers: BTreeMap::new(),
			collisions: Vec::new(),
		}
	}

	pub fn name(&self) -> &'static str {
		self.name
	}

	pub fn policy(&self) -> DuplicatePolicy {
		self.options.policy
	}

	/// Binds `producer` to its key.
	///
	/// When the key is already bound the configured [`DuplicatePolicy`]
	/// decides the winner. Under [`DuplicatePolicy::Reject`] the map is left
	/// unchanged and [`FactoryError::DuplicateKey`] is returned.
	pub fn register_producer(&mut self, producer: Producer<K, A>) -> Result<(), FactoryError> {
		let key = producer.key();
		let mut slot = match self.producers.entry(key) {
			Entry::Vacant(slot) => {
				trace!(
					factory = self.name,
					key = ?key,
					product = producer.type_name(),
					"registered producer"
				);
				slot.insert(producer);
				return Ok(());
			}
			Entry::Occupied(slot) => slot,
		};

		let existing = Party::of(slot.get());
		let incoming = Party::of(&producer);
		let resolution = match self.options.policy {
			DuplicatePolicy::LastWins => {
				slot.insert(producer);
				Resolution::ReplacedExisting
			}
			DuplicatePolicy::FirstWins => Resolution::KeptExisting,
			DuplicatePolicy::Reject => Resolution::Rejected,
		};

		let collision = Collision {
			factory: self.name,
			key,
			existing,
			incoming,
			resolution,
		};
		debug!(
			factory = self.name,
			key = ?key,
			existing = existing.type_name,
			incoming = incoming.type_name,
			policy = %self.options.policy,
			?resolution,
			"duplicate producer key"
		);
		if let Some(hook) = self.options.on_collision {
			hook(&collision);
		}
		self.collisions.push(collision);

		if resolution == Resolution::Rejected {
			return Err(FactoryError::DuplicateKey {
				factory: self.name,
				key: format!("{key:?}"),
				existing: existing.type_name,
				incoming: incoming.type_name,
			});
		}
		Ok(())
	}

	pub fn len(&self) -> usize {
		self.producers.len()
	}

	pub fn is_empty(&self) -> bool {
		self.producers.is_empty()
	}

	/// Collisions seen so far, in registration order.
	pub fn collisions(&self) -> &[Collision<K>] {
		&self.collisions
	}

	/// Ends the registration phase.
	pub fn build(self) -> FactoryIndex<K, A> {
		FactoryIndex::new(self.name, self.producers, self.collisions)
	}
}
