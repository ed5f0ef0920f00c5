use std::collections::{BTreeMap, BTreeSet};

use yewdux::prelude::*;

use crate::api::Api;
use crate::data::{CoverageResult, FoodId, FoodItem};
use crate::response::ApiError;

/// Everything that can interrupt a coverage run. The first two are caught
/// locally before any request goes out; `Api` surfaces from the transport.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum WorkflowError {
	#[error("select at least one food before calculating")]
	EmptySelection,
	#[error("a calculation is already running")]
	ComputeInFlight,
	#[error(transparent)]
	Api(#[from] ApiError),
}

impl WorkflowError {
	/// Whether retrying the same run as-is can help. Only transport failures
	/// qualify; the selection view offers its retry affordance off this.
	pub fn is_retryable(&self) -> bool {
		match self {
			Self::Api(err) => err.is_retryable(),
			Self::EmptySelection | Self::ComputeInFlight => false,
		}
	}
}

/// Where a single coverage run currently stands.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Phase {
	#[default]
	Idle,
	Selecting,
	Computing,
	Succeeded(CoverageResult),
	Failed(WorkflowError),
}

/// The selection-to-results coordinator. Lives in a shared store so the
/// selection and results views observe the same run; every transition is a
/// plain method so the machine can be exercised without a rendered UI.
#[derive(Debug, Clone, PartialEq, Default, Store)]
pub struct Workflow {
	phase: Phase,
	selection: BTreeMap<FoodId, FoodItem>,
}

impl Workflow {
	pub fn phase(&self) -> &Phase {
		&self.phase
	}

	pub fn is_computing(&self) -> bool {
		matches!(self.phase, Phase::Computing)
	}

	pub fn error(&self) -> Option<&WorkflowError> {
		match &self.phase {
			Phase::Failed(err) => Some(err),
			_ => None,
		}
	}

	/// Present only in `Succeeded`; a failed run never exposes a partial result.
	pub fn coverage(&self) -> Option<&CoverageResult> {
		match &self.phase {
			Phase::Succeeded(result) => Some(result),
			_ => None,
		}
	}

	pub fn is_selected(&self, id: FoodId) -> bool {
		self.selection.contains_key(&id)
	}

	pub fn selected_items(&self) -> impl Iterator<Item = &FoodItem> {
		self.selection.values()
	}

	pub fn selected_ids(&self) -> BTreeSet<FoodId> {
		self.selection.keys().copied().collect()
	}

	/// Entering the selection view. A fresh visit starts with an empty set;
	/// coming back after a failure keeps the previous picks so the user can
	/// retry without re-selecting.
	pub fn begin_selection(&mut self) {
		match self.phase {
			Phase::Idle | Phase::Succeeded(_) => {
				self.selection.clear();
				self.phase = Phase::Selecting;
			}
			Phase::Selecting | Phase::Computing | Phase::Failed(_) => {}
		}
	}

	/// Idempotent toggle: the second toggle of an item removes it again.
	/// Ignored mid-computation; after a failure it also clears the stale error.
	pub fn toggle(&mut self, item: FoodItem) {
		match self.phase {
			Phase::Computing => return,
			Phase::Failed(_) => self.phase = Phase::Selecting,
			_ => {}
		}
		if self.selection.remove(&item.id).is_none() {
			self.selection.insert(item.id, item);
		}
	}

	/// The calculate action. An empty set is rejected locally so no request
	/// is ever issued for a meaningless run; otherwise the run enters
	/// `Computing` and the caller drives [`run_compute`] with the snapshot
	/// from [`Self::selected_ids`].
	pub fn begin_compute(&mut self) -> Result<(), WorkflowError> {
		if self.is_computing() {
			return Err(WorkflowError::ComputeInFlight);
		}
		if self.selection.is_empty() {
			let err = WorkflowError::EmptySelection;
			self.phase = Phase::Failed(err.clone());
			return Err(err);
		}
		self.phase = Phase::Computing;
		Ok(())
	}

	/// A successful run: recorded exactly once. The selection is kept so the
	/// results view can list what was chosen.
	pub fn complete(&mut self, result: CoverageResult) {
		if self.is_computing() {
			self.phase = Phase::Succeeded(result);
		}
	}

	/// A failed run keeps the selection intact for a retry.
	pub fn fail(&mut self, error: WorkflowError) {
		if self.is_computing() {
			self.phase = Phase::Failed(error);
		}
	}

	/// The in-flight future was dropped (view unmounted mid-run). Nothing
	/// from that run may land afterward, so roll straight back to selecting.
	pub fn cancel(&mut self) {
		if self.is_computing() {
			self.phase = Phase::Selecting;
		}
	}

	/// Close-and-restart from the results view.
	pub fn reset(&mut self) {
		self.selection.clear();
		self.phase = Phase::Idle;
	}
}

/// The three backend calls of one compute, strictly sequential. The backend
/// resolves needs against server-side user state, so call order is treated as
/// part of the contract rather than an optimization surface.
pub async fn run_compute(
	api: Api,
	foods: BTreeSet<FoodId>,
) -> Result<CoverageResult, WorkflowError> {
	let sum = api.sum_amino_profile(&foods).send().await?;
	let needs = api.daily_needs().send().await?;
	let coverage = api.coverage(&sum, &needs).send().await?;
	Ok(CoverageResult {
		sum,
		needs,
		coverage,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use uuid::Uuid;

	fn food(name: &str) -> FoodItem {
		FoodItem {
			id: FoodId(Uuid::new_v4()),
			name: name.into(),
		}
	}

	fn selecting(items: &[FoodItem]) -> Workflow {
		let mut workflow = Workflow::default();
		workflow.begin_selection();
		for item in items {
			workflow.toggle(item.clone());
		}
		workflow
	}

	fn result() -> CoverageResult {
		let mut coverage = BTreeMap::new();
		coverage.insert("Lysine".to_string(), 85.7);
		CoverageResult {
			coverage,
			..Default::default()
		}
	}

	#[test]
	fn mounting_the_selection_view_starts_empty() {
		let mut workflow = Workflow::default();
		workflow.begin_selection();
		assert_eq!(workflow.phase(), &Phase::Selecting);
		assert!(workflow.selected_ids().is_empty());
	}

	#[test]
	fn toggle_twice_is_identity() {
		let item = food("Lentils");
		let mut workflow = selecting(&[food("Oats")]);
		let before = workflow.selected_ids();

		workflow.toggle(item.clone());
		assert!(workflow.is_selected(item.id));
		workflow.toggle(item);
		assert_eq!(workflow.selected_ids(), before);
	}

	#[test]
	fn empty_selection_never_reaches_the_network() {
		let mut workflow = Workflow::default();
		workflow.begin_selection();
		assert_eq!(workflow.begin_compute(), Err(WorkflowError::EmptySelection));
		// Still no run in progress; the error is carried for the banner.
		assert_eq!(workflow.error(), Some(&WorkflowError::EmptySelection));
		assert!(!workflow.is_computing());
	}

	#[test]
	fn a_successful_run_yields_exactly_one_result() {
		let mut workflow = selecting(&[food("Lentils"), food("Oats"), food("Quinoa")]);
		workflow.begin_compute().unwrap();
		assert!(workflow.is_computing());
		assert!(workflow.coverage().is_none());

		workflow.complete(result());
		assert_eq!(workflow.coverage(), Some(&result()));
		// A late duplicate completion is ignored.
		workflow.complete(CoverageResult::default());
		assert_eq!(workflow.coverage(), Some(&result()));
	}

	#[test]
	fn starting_a_second_run_mid_flight_is_rejected() {
		let mut workflow = selecting(&[food("Lentils")]);
		workflow.begin_compute().unwrap();
		assert_eq!(workflow.begin_compute(), Err(WorkflowError::ComputeInFlight));
		assert!(workflow.is_computing());
	}

	#[test]
	fn only_the_click_that_started_the_run_may_drive_it() {
		// Two calculate clicks land back to back. The phase is `Computing`
		// after both, so the begin_compute results are the only way to tell
		// the starter apart from the duplicate; exactly one may spawn calls.
		let mut workflow = selecting(&[food("Lentils")]);
		let clicks = [workflow.begin_compute(), workflow.begin_compute()];
		assert!(workflow.is_computing());
		let started = clicks.iter().filter(|outcome| outcome.is_ok()).count();
		assert_eq!(started, 1);
		assert_eq!(clicks[1], Err(WorkflowError::ComputeInFlight));

		// The single run completes normally afterward.
		workflow.complete(result());
		assert_eq!(workflow.coverage(), Some(&result()));
	}

	#[test]
	fn only_transport_failures_offer_a_retry() {
		assert!(WorkflowError::Api(ApiError::Network("timeout".into())).is_retryable());
		assert!(!WorkflowError::Api(ApiError::Server {
			status: 400,
			body: String::new(),
		})
		.is_retryable());
		assert!(!WorkflowError::EmptySelection.is_retryable());
		assert!(!WorkflowError::ComputeInFlight.is_retryable());
	}

	#[test]
	fn toggling_is_ignored_while_computing() {
		let mut workflow = selecting(&[food("Lentils")]);
		let before = workflow.selected_ids();
		workflow.begin_compute().unwrap();
		workflow.toggle(food("Oats"));
		assert_eq!(workflow.selected_ids(), before);
	}

	#[test]
	fn failure_keeps_the_selection_for_a_retry() {
		let mut workflow = selecting(&[food("Lentils"), food("Oats")]);
		let before = workflow.selected_ids();
		workflow.begin_compute().unwrap();

		let err = WorkflowError::Api(ApiError::Network("connection refused".into()));
		workflow.fail(err.clone());
		assert_eq!(workflow.error(), Some(&err));
		assert_eq!(workflow.selected_ids(), before);
		assert!(workflow.coverage().is_none());

		// Retrying without touching the selection works.
		workflow.begin_compute().unwrap();
		assert!(workflow.is_computing());
	}

	#[test]
	fn remounting_after_a_failure_keeps_the_picks() {
		let mut workflow = selecting(&[food("Lentils")]);
		let before = workflow.selected_ids();
		workflow.begin_compute().unwrap();
		workflow.fail(WorkflowError::Api(ApiError::Server {
			status: 500,
			body: String::new(),
		}));

		workflow.begin_selection();
		assert_eq!(workflow.selected_ids(), before);
	}

	#[test]
	fn toggling_after_a_failure_clears_the_error() {
		let mut workflow = selecting(&[food("Lentils")]);
		workflow.begin_compute().unwrap();
		workflow.fail(WorkflowError::Api(ApiError::Network("timeout".into())));

		workflow.toggle(food("Oats"));
		assert!(workflow.error().is_none());
		assert_eq!(workflow.phase(), &Phase::Selecting);
	}

	#[test]
	fn cancel_rolls_an_abandoned_run_back_to_selecting() {
		let mut workflow = selecting(&[food("Lentils")]);
		workflow.begin_compute().unwrap();
		workflow.cancel();
		assert_eq!(workflow.phase(), &Phase::Selecting);
		// A straggling completion from the aborted run must not land.
		workflow.complete(result());
		assert!(workflow.coverage().is_none());
	}

	#[test]
	fn reset_clears_result_and_selection() {
		let mut workflow = selecting(&[food("Lentils")]);
		workflow.begin_compute().unwrap();
		workflow.complete(result());

		workflow.reset();
		assert_eq!(workflow.phase(), &Phase::Idle);
		assert!(workflow.selected_ids().is_empty());
		assert!(workflow.coverage().is_none());
	}

	#[test]
	fn a_fresh_visit_after_success_starts_over() {
		let mut workflow = selecting(&[food("Lentils")]);
		workflow.begin_compute().unwrap();
		workflow.complete(result());

		workflow.begin_selection();
		assert_eq!(workflow.phase(), &Phase::Selecting);
		assert!(workflow.selected_ids().is_empty());
	}
}
