//! Declaration macros.

/// Declares one or more [`KeyedFactory`](crate::KeyedFactory) statics.
///
/// The static's name doubles as the factory name in diagnostics. Options
/// default to [`FactoryOptions::new`](crate::FactoryOptions::new).
///
/// ```rust
/// use xeno_factory::{DuplicatePolicy, FactoryOptions, keyed_factory};
///
/// pub trait Codec: Send + Sync {}
///
/// keyed_factory! {
/// 	pub static CODECS: &'static str => dyn Codec;
/// 	static STRICT_CODECS: &'static str => dyn Codec =
/// 		FactoryOptions::new().policy(DuplicatePolicy::Reject);
/// }
///
/// assert_eq!(CODECS.name(), "CODECS");
/// assert!(STRICT_CODECS.is_empty());
/// ```
#[macro_export]
macro_rules! keyed_factory {
	($(
		$(#[$attr:meta])*
		$vis:vis static $name:ident: $key:ty => $product:ty $(= $options:expr)?;
	)+) => {
		$(
			$(#[$attr])*
			$vis static $name: $crate::KeyedFactory<$key, $product> =
				$crate::KeyedFactory::with_options(
					::core::stringify!($name),
					$crate::__factory_opt!($({$options})?, $crate::FactoryOptions::new()),
				);
		)+
	};
}

/// Registers product type `$product` into `$factory` under `$key`.
///
/// This is the only wiring a product type needs. The product is built with
/// `Default` unless `with = ctor` names a `fn() -> $product`. A higher
/// `priority` registers later, so it wins key collisions under the default
/// policy; at equal priority the declaration written later in a module wins.
///
/// ```rust,ignore
/// keyed_producer!(SCANNERS, ExactScanner, "exact");
/// keyed_producer!(SCANNERS, FuzzyScanner, "fuzzy", with = FuzzyScanner::tolerant);
/// keyed_producer!(SCANNERS, FastExactScanner, "exact", priority = 10);
/// ```
#[macro_export]
macro_rules! keyed_producer {
	($factory:path, $product:ty, $key:expr, with = $ctor:expr $(, priority = $priority:expr)? $(,)?) => {
		$crate::__keyed_producer!(
			$factory,
			$product,
			$key,
			|| ::std::sync::Arc::new(($ctor)()),
			$crate::__factory_opt!($({$priority})?, 0)
		);
	};
	($factory:path, $product:ty, $key:expr $(, priority = $priority:expr)? $(,)?) => {
		$crate::__keyed_producer!(
			$factory,
			$product,
			$key,
			|| ::std::sync::Arc::new(<$product as ::core::default::Default>::default()),
			$crate::__factory_opt!($({$priority})?, 0)
		);
	};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __keyed_producer {
	($factory:path, $product:ty, $key:expr, $construct:expr, $priority:expr) => {
		const _: () = {
			fn register(
				registration: &'static $crate::Registration,
				builder: &mut dyn ::core::any::Any,
			) -> ::core::result::Result<(), $crate::FactoryError> {
				$crate::__private::submit::<_, _, $product>(
					&$factory,
					registration,
					builder,
					$key,
					$construct,
				)
			}

			$crate::__private::inventory::submit! {
				$crate::Registration::new(
					&$factory,
					register,
					$priority,
					$crate::Site::new(
						::core::module_path!(),
						::core::file!(),
						::core::line!(),
						::core::column!(),
					),
				)
			}
		};
	};
}

/// Selects a provided value or falls back to a default.
#[doc(hidden)]
#[macro_export]
macro_rules! __factory_opt {
	({$val:expr}, $default:expr) => {
		$val
	};
	(, $default:expr) => {
		$default
	};
}
