use anyhow::Context;
use uuid::Uuid;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::api::Api;
use crate::data::UserProfile;
use crate::page::Route;
use crate::storage::StorageValue;

#[derive(Clone, PartialEq, Default)]
struct FormRefs {
	name: NodeRef,
	weight: NodeRef,
	age: NodeRef,
	athlete: NodeRef,
	vegan: NodeRef,
	longevity: NodeRef,
}

impl FormRefs {
	fn input(node: &NodeRef, label: &str) -> anyhow::Result<HtmlInputElement> {
		node.cast::<HtmlInputElement>()
			.with_context(|| format!("{label} input not mounted"))
	}

	/// Fan-in of the form fields, mirroring the backend's validation bounds so
	/// obviously rejected profiles never leave the browser. A stored profile
	/// keeps its id; a first-time profile mints one.
	fn read(&self, existing: Option<&UserProfile>) -> anyhow::Result<UserProfile> {
		let name = Self::input(&self.name, "name")?.value();
		let name = name.trim().to_owned();
		anyhow::ensure!(
			(3..=15).contains(&name.chars().count()),
			"name must be 3 to 15 characters"
		);
		let weight: f64 = Self::input(&self.weight, "weight")?
			.value()
			.trim()
			.parse()
			.context("weight must be a number")?;
		anyhow::ensure!(
			(36.0..=150.0).contains(&weight),
			"weight must be between 36 and 150 kg"
		);
		let age: u32 = Self::input(&self.age, "age")?
			.value()
			.trim()
			.parse()
			.context("age must be a whole number")?;
		anyhow::ensure!((18..=120).contains(&age), "age must be between 18 and 120");
		Ok(UserProfile {
			id: existing.map(|profile| profile.id).unwrap_or_else(Uuid::new_v4),
			name,
			weight,
			age,
			is_athlete: Self::input(&self.athlete, "athlete")?.checked(),
			is_vegan: Self::input(&self.vegan, "vegan")?.checked(),
			is_longevity_focused: Self::input(&self.longevity, "longevity")?.checked(),
		})
	}
}

#[function_component]
pub fn Home() -> Html {
	let api = use_context::<Api>().unwrap();
	let profile = use_state(UserProfile::load);
	let message = use_state(|| None::<String>);
	let refs = use_state(FormRefs::default);

	let onsave = {
		let api = api.clone();
		let profile = profile.clone();
		let message = message.clone();
		let refs = refs.clone();
		Callback::from(move |_: MouseEvent| {
			let parsed = match refs.read(profile.as_ref()) {
				Ok(parsed) => parsed,
				Err(err) => {
					message.set(Some(err.to_string()));
					return;
				}
			};
			let api = api.clone();
			let profile = profile.clone();
			let message = message.clone();
			wasm_bindgen_futures::spawn_local(async move {
				match api.save_profile(&parsed).await {
					Ok(stored) => {
						log::debug!("profile {} saved", stored.id);
						message.set(None);
						profile.set(Some(stored));
					}
					Err(err) => {
						log::warn!("profile save failed: {err}");
						message.set(Some(err.to_string()));
					}
				}
			});
		})
	};

	let greeting = match &*profile {
		Some(profile) => format!("Hello {}", profile.name),
		None => "Hello".to_owned(),
	};
	let stored = profile.as_ref();
	html! {
		<section class="section">
			<h1 class="title" data-cy="home-greeting">{greeting}</h1>
			<p class="subtitle">{"Tell us about yourself, then pick your foods to see how well they cover your daily amino-acid needs."}</p>
			<div class="box" style="max-width: 30em;">
				<div class="field">
					<label class="label">{"Name"}</label>
					<input
						class="input" type="text" data-cy="profile-name"
						ref={refs.name.clone()}
						value={stored.map(|profile| profile.name.clone())}
					/>
				</div>
				<div class="field">
					<label class="label">{"Weight (kg)"}</label>
					<input
						class="input" type="number" data-cy="profile-weight"
						ref={refs.weight.clone()}
						value={stored.map(|profile| profile.weight.to_string())}
					/>
				</div>
				<div class="field">
					<label class="label">{"Age"}</label>
					<input
						class="input" type="number" data-cy="profile-age"
						ref={refs.age.clone()}
						value={stored.map(|profile| profile.age.to_string())}
					/>
				</div>
				<div class="field">
					<label class="checkbox">
						<input
							type="checkbox" data-cy="profile-athlete"
							ref={refs.athlete.clone()}
							checked={stored.map(|profile| profile.is_athlete).unwrap_or_default()}
						/>
						{" Athlete"}
					</label>
				</div>
				<div class="field">
					<label class="checkbox">
						<input
							type="checkbox" data-cy="profile-vegan"
							ref={refs.vegan.clone()}
							checked={stored.map(|profile| profile.is_vegan).unwrap_or_default()}
						/>
						{" Vegan"}
					</label>
				</div>
				<div class="field">
					<label class="checkbox">
						<input
							type="checkbox" data-cy="profile-longevity"
							ref={refs.longevity.clone()}
							checked={stored.map(|profile| profile.is_longevity_focused).unwrap_or_default()}
						/>
						{" Longevity focused"}
					</label>
				</div>
				{match &*message {
					Some(message) => html! {
						<div class="notification is-danger" data-cy="profile-error">{message}</div>
					},
					None => html! {},
				}}
				<button class="button is-primary" data-cy="profile-save" onclick={onsave}>
					{"Save profile"}
				</button>
			</div>
			<Link<Route> classes="button is-link" to={Route::Selection}>
				{"Choose foods"}
			</Link<Route>>
		</section>
	}
}
