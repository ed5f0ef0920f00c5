use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};

/// A value persisted in origin-scoped local storage. One slot per type, full
/// overwrite on store, last writer wins; a single active tab is assumed.
///
/// Absence is not an error. Views that read a missing slot degrade (a generic
/// greeting instead of a personalized one) rather than fail.
pub trait StorageValue {
	fn key() -> &'static str;

	fn load() -> Option<Self>
	where
		Self: for<'de> Deserialize<'de>,
	{
		LocalStorage::get::<Self>(Self::key()).ok()
	}

	fn store(&self)
	where
		Self: Serialize,
	{
		let _ = LocalStorage::set(Self::key(), self);
	}

	fn delete() {
		LocalStorage::delete(Self::key());
	}
}
