//! Producer static registration via `inventory`.
//!
//! Each [`keyed_producer!`](crate::keyed_producer) invocation submits one
//! [`Registration`] through `inventory::submit!`. The entry names its target
//! factory by address and carries a hook that builds the producer and inserts
//! it into that factory's [`FactoryBuilder`]. When a [`KeyedFactory`] is first
//! queried it collects the entries aimed at it, sorts them, and runs their
//! hooks in that order.

use std::any::Any;
use std::cmp::Ordering;
use std::sync::Arc;

use crate::builder::FactoryBuilder;
use crate::error::FactoryError;
use crate::factory::KeyedFactory;
use crate::producer::{FactoryKey, Producer, Site};

/// Inserts the producer described by a [`Registration`] into the type-erased
/// builder of its target factory.
pub type RegisterHook = fn(&'static Registration, &mut dyn Any) -> Result<(), FactoryError>;

/// Static registration entry collected via `inventory`.
pub struct Registration {
	factory: &'static (dyn Any + Sync),
	hook: RegisterHook,
	priority: i16,
	site: Site,
}

inventory::collect!(Registration);

impl Registration {
	pub const fn new(
		factory: &'static (dyn Any + Sync),
		hook: RegisterHook,
		priority: i16,
		site: Site,
	) -> Self {
		Self {
			factory,
			hook,
			priority,
			site,
		}
	}

	pub fn priority(&self) -> i16 {
		self.priority
	}

	pub fn site(&self) -> Site {
		self.site
	}

	/// Returns true if this entry registers into `factory`.
	pub fn targets<K: 'static, A: ?Sized + 'static>(&self, factory: &KeyedFactory<K, A>) -> bool {
		std::ptr::addr_eq(
			self.factory as *const (dyn Any + Sync),
			factory as *const KeyedFactory<K, A>,
		)
	}

	/// Every entry aimed at `factory`, in registration order.
	///
	/// Order is ascending priority, then module path, line and column of the
	/// declaration. Later entries register later, so under the default policy
	/// they win key collisions.
	pub fn for_factory<K: 'static, A: ?Sized + 'static>(
		factory: &KeyedFactory<K, A>,
	) -> Vec<&'static Registration> {
		let mut entries: Vec<&'static Registration> = inventory::iter::<Registration>
			.into_iter()
			.filter(|entry| entry.targets(factory))
			.collect();
		entries.sort_by(|a, b| a.cmp_order(b));
		entries
	}

	fn cmp_order(&self, other: &Self) -> Ordering {
		self.priority
			.cmp(&other.priority)
			.then_with(|| self.site.module.cmp(other.site.module))
			.then_with(|| self.site.line.cmp(&other.site.line))
			.then_with(|| self.site.column.cmp(&other.site.column))
	}

	/// Runs the hook against the target factory's builder.
	pub(crate) fn register(&'static self, builder: &mut dyn Any) -> Result<(), FactoryError> {
		(self.hook)(self, builder)
	}
}

/// Hook body generated by [`keyed_producer!`](crate::keyed_producer).
///
/// `factory` pins `K` and `A` so the macro's construct closure coerces to
/// `fn() -> Arc<A>` without naming either type. Returns
/// [`FactoryError::ForeignBuilder`] if `builder` belongs to a factory of
/// another type.
pub fn submit<K, A, T>(
	factory: &'static KeyedFactory<K, A>,
	registration: &'static Registration,
	builder: &mut dyn Any,
	key: K,
	construct: fn() -> Arc<A>,
) -> Result<(), FactoryError>
where
	K: FactoryKey,
	A: ?Sized + 'static,
	T: 'static,
{
	let Some(builder) = builder.downcast_mut::<FactoryBuilder<K, A>>() else {
		tracing::error!(
			factory = factory.name(),
			site = %registration.site,
			"registration reached a builder of another factory type"
		);
		return Err(FactoryError::ForeignBuilder {
			factory: factory.name(),
			site: registration.site.to_string(),
		});
	};

	Producer::new::<T>(key, construct)
		.with_priority(registration.priority)
		.with_site(registration.site)
		.register_to(builder)
}

#[cfg(test)]
mod tests;
