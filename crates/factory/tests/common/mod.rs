#![allow(dead_code)]

use std::any::Any;

/// Product family shared by the integration tests.
pub trait Product: Any + Send + Sync {
	fn name(&self) -> &'static str;
	fn as_any(&self) -> &dyn Any;
	fn hits(&self) -> u32;
	fn hit(&mut self);
}

macro_rules! product {
	($($ty:ident => $name:literal),+ $(,)?) => {
		$(
			#[derive(Debug, Default)]
			pub struct $ty {
				pub hits: u32,
			}

			impl Product for $ty {
				fn name(&self) -> &'static str {
					$name
				}

				fn as_any(&self) -> &dyn Any {
					self
				}

				fn hits(&self) -> u32 {
					self.hits
				}

				fn hit(&mut self) {
					self.hits += 1;
				}
			}
		)+
	};
}

product! {
	Alpha => "alpha",
	Beta => "beta",
	Gamma1 => "gamma1",
	Gamma2 => "gamma2",
}

/// Returns true if `product` is a `T`.
pub fn is<T: Product>(product: &dyn Product) -> bool {
	product.as_any().downcast_ref::<T>().is_some()
}
