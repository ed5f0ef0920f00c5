use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(
	Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct FoodId(pub Uuid);

impl std::fmt::Display for FoodId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}

/// A selectable food. Nutrient content stays server-side; the client only
/// ever handles ids and display names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
	pub id: FoodId,
	pub name: String,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn food_ids_serialize_as_bare_uuids() {
		let id = FoodId(Uuid::nil());
		let json = serde_json::to_string(&id).unwrap();
		assert_eq!(json, "\"00000000-0000-0000-0000-000000000000\"");
	}

	#[test]
	fn parses_a_catalog_entry() {
		let item: FoodItem = serde_json::from_str(
			r#"{"id": "3fa85f64-5717-4562-b3fc-2c963f66afa6", "name": "Lentils"}"#,
		)
		.unwrap();
		assert_eq!(item.name, "Lentils");
	}
}
