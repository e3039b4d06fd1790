//! Per-product descriptors.

use std::any::{TypeId, type_name};
use std::fmt;
use std::sync::Arc;

use crate::builder::FactoryBuilder;
use crate::error::FactoryError;

/// Bounds every factory key satisfies.
///
/// Keys are small ordered values (string literals, fieldless enums) that can be
/// copied freely between threads.
pub trait FactoryKey: Ord + Copy + fmt::Debug + Send + Sync + 'static {}

impl<K> FactoryKey for K where K: Ord + Copy + fmt::Debug + Send + Sync + 'static {}

/// Source location of a [`keyed_producer!`](crate::keyed_producer) declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Site {
	/// `module_path!()` of the declaring module.
	pub module: &'static str,
	/// `file!()` of the declaration.
	pub file: &'static str,
	pub line: u32,
	pub column: u32,
}

impl Site {
	pub const fn new(module: &'static str, file: &'static str, line: u32, column: u32) -> Self {
		Self {
			module,
			file,
			line,
			column,
		}
	}
}

impl fmt::Display for Site {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}:{}:{}", self.file, self.line, self.column)
	}
}

/// Builds one concrete product type `T` behind the product interface `A`.
///
/// A producer is a plain value: a key, a construct function and some identity
/// for diagnostics. It holds no state, so every call to
/// [`create_instance`](Self::create_instance) yields a fresh, independently
/// owned instance.
pub struct Producer<K, A: ?Sized> {
	key: K,
	type_name: &'static str,
	type_id: TypeId,
	construct: fn() -> Arc<A>,
	priority: i16,
	site: Option<Site>,
}

impl<K: FactoryKey, A: ?Sized + 'static> Producer<K, A> {
	/// Creates a producer for product type `T`.
	///
	/// `construct` must build a `T`; it is the caller's upcast from `Arc<T>` to
	/// `Arc<A>`, usually written as `|| Arc::new(T::default())`.
	pub fn new<T: 'static>(key: K, construct: fn() -> Arc<A>) -> Self {
		Self {
			key,
			type_name: type_name::<T>(),
			type_id: TypeId::of::<T>(),
			construct,
			priority: 0,
			site: None,
		}
	}

	/// Sets the registration priority reported in collision diagnostics.
	pub fn with_priority(mut self, priority: i16) -> Self {
		self.priority = priority;
		self
	}

	/// Records the declaration site reported in collision diagnostics.
	pub fn with_site(mut self, site: Site) -> Self {
		self.site = Some(site);
		self
	}

	pub fn key(&self) -> K {
		self.key
	}

	/// Builds a new product instance.
	pub fn create_instance(&self) -> Arc<A> {
		(self.construct)()
	}

	/// Fully qualified name of the concrete product type.
	pub fn type_name(&self) -> &'static str {
		self.type_name
	}

	pub fn type_id(&self) -> TypeId {
		self.type_id
	}

	pub fn priority(&self) -> i16 {
		self.priority
	}

	pub fn site(&self) -> Option<Site> {
		self.site
	}

	/// Returns true if this producer builds instances of `T`.
	pub fn produces<T: 'static>(&self) -> bool {
		self.type_id == TypeId::of::<T>()
	}

	/// Inserts this producer into `builder` under [`key`](Self::key).
	pub fn register_to(self, builder: &mut FactoryBuilder<K, A>) -> Result<(), FactoryError> {
		builder.register_producer(self)
	}
}

impl<K: Copy, A: ?Sized> Clone for Producer<K, A> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<K: Copy, A: ?Sized> Copy for Producer<K, A> {}

impl<K: fmt::Debug, A: ?Sized> fmt::Debug for Producer<K, A> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Producer")
			.field("key", &self.key)
			.field("type_name", &self.type_name)
			.field("priority", &self.priority)
			.field("site", &self.site)
			.finish_non_exhaustive()
	}
}
