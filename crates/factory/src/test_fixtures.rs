use std::sync::Arc;

use crate::producer::Producer;

pub(crate) type ShapeProducer = Producer<&'static str, dyn Shape>;

pub(crate) trait Shape: Send + Sync {
	fn sides(&self) -> u32;
}

#[derive(Default)]
pub(crate) struct Triangle;

impl Shape for Triangle {
	fn sides(&self) -> u32 {
		3
	}
}

#[derive(Default)]
pub(crate) struct Square;

impl Shape for Square {
	fn sides(&self) -> u32 {
		4
	}
}

#[derive(Default)]
pub(crate) struct Pentagon;

impl Shape for Pentagon {
	fn sides(&self) -> u32 {
		5
	}
}

pub(crate) fn triangle(key: &'static str) -> ShapeProducer {
	ShapeProducer::new::<Triangle>(key, || Arc::new(Triangle))
}

pub(crate) fn square(key: &'static str) -> ShapeProducer {
	ShapeProducer::new::<Square>(key, || Arc::new(Square))
}

pub(crate) fn pentagon(key: &'static str) -> ShapeProducer {
	ShapeProducer::new::<Pentagon>(key, || Arc::new(Pentagon))
}
