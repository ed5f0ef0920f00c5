use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::storage::StorageValue;

/// Biometrics and dietary flags the backend uses to derive personalized daily
/// amino-acid needs. The id is assigned once and never changes; an upsert with
/// a known id overwrites every other field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
	pub id: Uuid,
	pub name: String,
	pub weight: f64,
	pub age: u32,
	pub is_athlete: bool,
	pub is_vegan: bool,
	pub is_longevity_focused: bool,
}

impl StorageValue for UserProfile {
	fn key() -> &'static str {
		"userData"
	}
}
