use yew::prelude::*;
use yew_router::prelude::use_navigator;
use yewdux::prelude::*;

use crate::components::AminoTable;
use crate::data::UserProfile;
use crate::page::Route;
use crate::storage::StorageValue;
use crate::workflow::Workflow;

#[function_component]
pub fn Results() -> Html {
	let navigator = use_navigator().unwrap();
	let (state, dispatch) = use_store::<Workflow>();
	let profile = UserProfile::load();

	let onclose = {
		let navigator = navigator.clone();
		let dispatch = dispatch.clone();
		Callback::from(move |_: MouseEvent| {
			dispatch.reduce_mut(Workflow::reset);
			navigator.push(&Route::Home);
		})
	};

	// Deep links land here without a run; render a placeholder, never an error.
	let Some(result) = state.coverage() else {
		return html! {
			<section class="section">
				<h1 class="title" data-cy="results-heading">{"No results yet"}</h1>
				<p class="block">{"Pick some foods first, then calculate your coverage."}</p>
				<button class="button" data-cy="close-button" onclick={onclose}>
					{"Back to start"}
				</button>
			</section>
		};
	};

	let heading = match &profile {
		Some(profile) => format!("Hello {}, here is your amino-acid coverage", profile.name),
		None => "Your amino-acid coverage".to_owned(),
	};
	html! {
		<section class="section">
			<h1 class="title" data-cy="results-heading">{heading}</h1>
			<h2 class="subtitle" data-cy="selected-foods-heading">{"Selected foods"}</h2>
			<ul class="block">
				{for state.selected_items().map(|item| html! {
					<li>{&item.name}</li>
				})}
			</ul>
			<AminoTable result={result.clone()} />
			<button class="button is-primary" data-cy="close-button" onclick={onclose}>
				{"Start over"}
			</button>
		</section>
	}
}
