use std::collections::BTreeSet;

use futures::future::{AbortHandle, Abortable};
use yew::prelude::*;
use yew_hooks::{use_async_with_options, use_mount, UseAsyncOptions};
use yew_router::prelude::use_navigator;
use yewdux::prelude::*;

use crate::api::Api;
use crate::components::FoodCard;
use crate::data::{FoodId, FoodItem};
use crate::page::Route;
use crate::workflow::{self, Workflow};

#[function_component]
pub fn Selection() -> Html {
	let api = use_context::<Api>().unwrap();
	let navigator = use_navigator().unwrap();
	let (state, dispatch) = use_store::<Workflow>();

	{
		let dispatch = dispatch.clone();
		use_mount(move || {
			dispatch.reduce_mut(Workflow::begin_selection);
		});
	}

	let catalog = {
		let api = api.clone();
		use_async_with_options(
			async move { api.list_food_items().send().await },
			UseAsyncOptions::enable_auto(),
		)
	};

	// In-flight compute, aborted if the user navigates away mid-run so no
	// state update lands after unmount.
	let abort = use_mut_ref(|| None::<AbortHandle>);
	{
		let abort = abort.clone();
		let dispatch = dispatch.clone();
		use_effect_with((), move |_| {
			move || {
				if let Some(handle) = abort.borrow_mut().take() {
					handle.abort();
					dispatch.reduce_mut(Workflow::cancel);
				}
			}
		});
	}

	let ontoggle = {
		let dispatch = dispatch.clone();
		Callback::from(move |item: FoodItem| {
			dispatch.reduce_mut(move |workflow| workflow.toggle(item));
		})
	};

	let oncalculate = {
		let api = api.clone();
		let navigator = navigator.clone();
		let dispatch = dispatch.clone();
		let abort = abort.clone();
		Callback::from(move |_: MouseEvent| {
			// Only the dispatch whose begin_compute returned Ok may spawn the
			// run; the phase alone cannot tell this click apart from one that
			// landed while a run was already in flight.
			let mut started = None;
			dispatch.reduce_mut(|workflow| started = Some(workflow.begin_compute()));
			let foods: BTreeSet<FoodId> = match started {
				Some(Ok(())) => dispatch.get().selected_ids(),
				// Rejected locally; any error is in the store for the banner.
				_ => return,
			};

			let (handle, registration) = AbortHandle::new_pair();
			*abort.borrow_mut() = Some(handle);
			let api = api.clone();
			let navigator = navigator.clone();
			let dispatch = dispatch.clone();
			let abort = abort.clone();
			wasm_bindgen_futures::spawn_local(async move {
				let run = Abortable::new(workflow::run_compute(api, foods), registration);
				match run.await {
					Ok(Ok(result)) => {
						abort.borrow_mut().take();
						dispatch.reduce_mut(|workflow| workflow.complete(result));
						navigator.push(&Route::Results);
					}
					Ok(Err(err)) => {
						abort.borrow_mut().take();
						log::warn!("coverage run failed: {err}");
						dispatch.reduce_mut(|workflow| workflow.fail(err));
					}
					// Aborted on unmount; the cleanup already rolled the phase back.
					Err(_aborted) => {}
				}
			});
		})
	};

	let foods = catalog.data.clone().unwrap_or_default();
	let computing = state.is_computing();
	html! {
		<section class="section">
			<h1 class="title">{"Choose your foods"}</h1>
			{if catalog.loading {
				html! { <progress class="progress is-small is-info" max="100" /> }
			} else {
				html! {}
			}}
			{match &catalog.error {
				Some(err) => {
					let retry = {
						let catalog = catalog.clone();
						Callback::from(move |_: MouseEvent| catalog.run())
					};
					html! {
						<div class="notification is-warning" data-cy="catalog-error">
							{format!("Could not load foods: {err}")}
							<button class="button is-small ml-2" onclick={retry}>{"Retry"}</button>
						</div>
					}
				}
				None => html! {},
			}}
			<div class="container" style="display: grid; grid-template-columns: repeat(auto-fill, minmax(250px,1fr)); grid-gap: 0.5em;">
				{for foods.iter().map(|item| html! {
					<FoodCard
						item={item.clone()}
						selected={state.is_selected(item.id)}
						ontoggle={ontoggle.clone()}
					/>
				})}
			</div>
			{match state.error() {
				Some(err) => {
					let retry = err.is_retryable().then(|| {
						let oncalculate = oncalculate.clone();
						html! {
							<button class="button is-small ml-2" data-cy="retry-button" onclick={oncalculate}>
								{"Try again"}
							</button>
						}
					});
					html! {
						<div class="notification is-danger mt-4" data-cy="calculate-error">
							{err.to_string()}
							{retry}
						</div>
					}
				}
				None => html! {},
			}}
			<button
				class="button is-primary mt-4"
				data-cy="calculate-button"
				disabled={computing}
				onclick={oncalculate}
			>
				{if computing { "Calculating..." } else { "Calculate coverage" }}
			</button>
		</section>
	}
}
