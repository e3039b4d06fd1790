use std::any::Any;
use std::sync::Arc;

use pretty_assertions::assert_eq;

use super::{Registration, submit};
use crate::builder::FactoryBuilder;
use crate::error::FactoryError;
use crate::factory::KeyedFactory;
use crate::producer::Site;
use crate::test_fixtures::{Shape, Triangle};

static SHAPES: KeyedFactory<&'static str, dyn Shape> = KeyedFactory::new("shapes");
static OTHER_SHAPES: KeyedFactory<&'static str, dyn Shape> = KeyedFactory::new("other_shapes");

fn noop(_: &'static Registration, _: &mut dyn Any) -> Result<(), FactoryError> {
	Ok(())
}

static ENTRY: Registration = Registration::new(
	&SHAPES,
	noop,
	3,
	Site::new("shapes::fixtures", "src/fixtures.rs", 7, 1),
);

#[test]
fn entry_targets_only_its_factory() {
	assert!(ENTRY.targets(&SHAPES));
	assert!(!ENTRY.targets(&OTHER_SHAPES));
}

#[test]
fn submit_stamps_priority_and_site() {
	let mut builder: FactoryBuilder<&'static str, dyn Shape> = FactoryBuilder::new("shapes");
	submit::<_, _, Triangle>(&SHAPES, &ENTRY, &mut builder, "tri", || Arc::new(Triangle)).unwrap();

	let index = builder.build();
	let producer = index.producer(&"tri").expect("tri registered");
	assert_eq!(producer.priority(), 3);
	assert_eq!(producer.site(), Some(ENTRY.site()));
	assert!(producer.produces::<Triangle>());
}

#[test]
fn submit_rejects_builder_of_other_factory_type() {
	let mut foreign: FactoryBuilder<u8, dyn Shape> = FactoryBuilder::new("bytes");
	let err = submit::<_, _, Triangle>(&SHAPES, &ENTRY, &mut foreign, "tri", || Arc::new(Triangle))
		.unwrap_err();

	assert_eq!(
		err,
		FactoryError::ForeignBuilder {
			factory: "shapes",
			site: "src/fixtures.rs:7:1".to_string(),
		}
	);
	assert!(foreign.is_empty());
}
