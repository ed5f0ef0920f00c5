use std::collections::{BTreeMap, BTreeSet};

use reqwest::Method;
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::data::{AminoAcidProfile, FoodId, FoodItem, NeedsVector, UserProfile};
use crate::response::{ApiError, Response};
use crate::storage::StorageValue;

/// Client for the nutrition backend. One instance is built at app mount from
/// [`Config`] and handed to views through context; the base address never
/// changes afterward.
#[derive(Debug, Clone, PartialEq)]
pub struct Api {
	base_url: String,
}

impl Api {
	pub fn new(config: &Config) -> Self {
		Self {
			base_url: config.api_base_url.as_str().trim_end_matches('/').to_owned(),
		}
	}

	fn endpoint(&self, path: &str) -> String {
		format!("{}{}", self.base_url, path)
	}

	fn request<T>(&self, method: Method, path: &str) -> Response<T>
	where
		T: DeserializeOwned,
	{
		let mut builder = reqwest::Client::new().request(method, self.endpoint(path));
		builder = builder.header("Accept", "application/json");
		builder = builder.header("Content-Type", "application/json");
		Response::<T>::from(builder)
	}

	/// Idempotent PUT; the backend echoes the stored profile back on 200.
	pub fn upsert_profile(&self, profile: &UserProfile) -> Response<UserProfile> {
		self.request(Method::PUT, "/user-data/update")
			.with_json(profile)
	}

	/// Upsert on the backend, then refresh the local cache with the echoed
	/// profile. The cache is only touched after a successful round trip, so
	/// callers see server and local state move together.
	pub async fn save_profile(&self, profile: &UserProfile) -> Result<UserProfile, ApiError> {
		let stored = self.upsert_profile(profile).send().await?;
		stored.store();
		Ok(stored)
	}

	pub fn list_food_items(&self) -> Response<Vec<FoodItem>> {
		self.request(Method::GET, "/food-items/all")
	}

	pub fn sum_amino_profile(&self, foods: &BTreeSet<FoodId>) -> Response<AminoAcidProfile> {
		self.request(Method::POST, "/amino-profile/sum")
			.with_json(foods)
	}

	/// Needs are resolved server-side from the stored user; the request
	/// carries no parameters.
	pub fn daily_needs(&self) -> Response<NeedsVector> {
		self.request(Method::GET, "/amino-profile/daily-needs")
	}

	pub fn coverage(
		&self,
		sum: &AminoAcidProfile,
		needs: &NeedsVector,
	) -> Response<BTreeMap<String, f64>> {
		#[derive(serde::Serialize)]
		struct Body<'a> {
			sum: &'a AminoAcidProfile,
			needs: &'a NeedsVector,
		}
		self.request(Method::POST, "/amino-profile/coverage")
			.with_json(&Body { sum, needs })
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn endpoints_join_against_the_configured_base() {
		let api = Api::new(&Config::default());
		assert_eq!(
			api.endpoint("/amino-profile/sum"),
			"http://localhost:8080/api/amino-profile/sum"
		);
		assert_eq!(
			api.endpoint("/user-data/update"),
			"http://localhost:8080/api/user-data/update"
		);
	}

	#[test]
	fn a_trailing_slash_on_the_base_does_not_double_up() {
		let config = Config::with_base("https://nutrition.example.com/api/").unwrap();
		let api = Api::new(&config);
		assert_eq!(
			api.endpoint("/food-items/all"),
			"https://nutrition.example.com/api/food-items/all"
		);
	}
}
