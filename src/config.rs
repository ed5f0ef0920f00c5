use url::Url;

static DEFAULT_API_BASE: &str = "http://localhost:8080/api";

/// Where the backend lives. Built once at startup and handed to [`crate::api::Api`];
/// nothing else in the app reads or mutates the base address.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
	pub api_base_url: Url,
}

impl Config {
	/// Uses the `API_BASE_URL` value baked in at compile time, falling back to
	/// the local development backend.
	pub fn from_env() -> Self {
		let Some(base) = option_env!("API_BASE_URL") else {
			return Self::default();
		};
		match Self::with_base(base) {
			Ok(config) => config,
			Err(err) => {
				log::warn!("ignoring invalid API_BASE_URL {base:?}: {err}");
				Self::default()
			}
		}
	}

	pub fn with_base(base: &str) -> anyhow::Result<Self> {
		let api_base_url = Url::parse(base.trim_end_matches('/'))?;
		Ok(Self { api_base_url })
	}
}

impl Default for Config {
	fn default() -> Self {
		Self {
			api_base_url: Url::parse(DEFAULT_API_BASE).unwrap(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_points_at_the_local_backend() {
		let config = Config::default();
		assert_eq!(config.api_base_url.as_str(), "http://localhost:8080/api");
	}

	#[test]
	fn trailing_slashes_are_trimmed() {
		let config = Config::with_base("https://nutrition.example.com/api/").unwrap();
		assert_eq!(config.api_base_url.as_str(), "https://nutrition.example.com/api");
	}

	#[test]
	fn garbage_base_is_an_error() {
		assert!(Config::with_base("not a url").is_err());
	}
}
