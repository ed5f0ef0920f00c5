use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Summed amino-acid content of a food set, keyed by amino-acid name.
/// Computed by the backend; the client renders it and passes it back to the
/// coverage endpoint without interpreting the keys.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AminoAcidProfile(pub BTreeMap<String, f64>);

/// Daily requirement per amino acid for the stored profile.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NeedsVector(pub BTreeMap<String, f64>);

/// Everything the results view renders: the summed intake, the personalized
/// needs, and the percentage coverage the backend derived from the two.
/// Assembled client-side after the final call of a compute run; no partial
/// result is ever constructed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CoverageResult {
	pub sum: AminoAcidProfile,
	pub needs: NeedsVector,
	pub coverage: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CoverageRow {
	pub amino_acid: String,
	pub sum: Option<f64>,
	pub need: Option<f64>,
	pub coverage: Option<f64>,
}

impl CoverageResult {
	/// One row per amino acid named by any of the three maps, in lexical
	/// order. Absent entries stay `None` so the table can render a dash
	/// instead of a fabricated zero.
	pub fn rows(&self) -> Vec<CoverageRow> {
		let keys: BTreeSet<&String> = self
			.sum
			.0
			.keys()
			.chain(self.needs.0.keys())
			.chain(self.coverage.keys())
			.collect();
		keys.into_iter()
			.map(|key| CoverageRow {
				amino_acid: key.clone(),
				sum: self.sum.0.get(key).copied(),
				need: self.needs.0.get(key).copied(),
				coverage: self.coverage.get(key).copied(),
			})
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn map(entries: &[(&str, f64)]) -> BTreeMap<String, f64> {
		entries
			.iter()
			.map(|(name, value)| (name.to_string(), *value))
			.collect()
	}

	#[test]
	fn vectors_serialize_as_plain_objects() {
		let profile = AminoAcidProfile(map(&[("Lysine", 2.4)]));
		assert_eq!(
			serde_json::to_string(&profile).unwrap(),
			r#"{"Lysine":2.4}"#
		);
	}

	#[test]
	fn parses_a_backend_sum() {
		let profile: AminoAcidProfile =
			serde_json::from_str(r#"{"Lysine": 2.4, "Leucine": 3.1}"#).unwrap();
		assert_eq!(profile.0.get("Leucine"), Some(&3.1));
	}

	#[test]
	fn rows_cover_the_union_of_keys() {
		let result = CoverageResult {
			sum: AminoAcidProfile(map(&[("Leucine", 3.1), ("Lysine", 2.4)])),
			needs: NeedsVector(map(&[("Lysine", 2.8)])),
			coverage: map(&[("Lysine", 85.7), ("Valine", 0.0)]),
		};
		let rows = result.rows();
		let names: Vec<&str> = rows.iter().map(|row| row.amino_acid.as_str()).collect();
		assert_eq!(names, vec!["Leucine", "Lysine", "Valine"]);

		let lysine = &rows[1];
		assert_eq!(lysine.sum, Some(2.4));
		assert_eq!(lysine.need, Some(2.8));
		assert_eq!(lysine.coverage, Some(85.7));

		let leucine = &rows[0];
		assert_eq!(leucine.need, None);
		assert_eq!(leucine.coverage, None);
	}

	#[test]
	fn empty_result_has_no_rows() {
		assert!(CoverageResult::default().rows().is_empty());
	}
}
