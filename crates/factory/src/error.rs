/// Failures surfaced by factory registration and the opt-in strict lookups.
///
/// Unknown keys are not an error for [`create_instance`](crate::FactoryIndex::create_instance);
/// [`UnknownKey`](Self::UnknownKey) only comes from
/// [`require`](crate::FactoryIndex::require).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FactoryError {
	#[error("{factory}: key {key} is already produced by {existing}, rejecting {incoming}")]
	DuplicateKey {
		factory: &'static str,
		key: String,
		existing: &'static str,
		incoming: &'static str,
	},
	#[error("{factory}: no producer registered for key {key}")]
	UnknownKey { factory: &'static str, key: String },
	#[error("{factory}: registration at {site} reached a builder of another factory type")]
	ForeignBuilder { factory: &'static str, site: String },
}
