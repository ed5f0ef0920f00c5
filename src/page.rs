use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::Api;
use crate::config::Config;

pub mod home;
pub mod results;
pub mod selection;

#[function_component]
pub fn App() -> Html {
	let api = use_memo((), |_| Api::new(&Config::from_env()));
	html! {
		<BrowserRouter>
			<ContextProvider<Api> context={(*api).clone()}>
				<Navbar />
				<Switch<Route> render={Route::html} />
			</ContextProvider<Api>>
		</BrowserRouter>
	}
}

#[function_component]
fn Navbar() -> Html {
	html! {
		<nav class="navbar is-dark" role="navigation">
			<div class="navbar-brand">
				<Link<Route> classes="navbar-item" to={Route::Home}>
					<strong>{"AminoTrack"}</strong>
				</Link<Route>>
			</div>
			<div class="navbar-start">
				<Link<Route> classes="navbar-item" to={Route::Home}>{"Home"}</Link<Route>>
				<Link<Route> classes="navbar-item" to={Route::Selection}>{"Food Selection"}</Link<Route>>
			</div>
		</nav>
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Routable)]
pub enum Route {
	#[at("/")]
	Home,
	#[at("/selection")]
	Selection,
	#[at("/results")]
	Results,
	#[not_found]
	#[at("/404")]
	NotFound,
}

impl Route {
	fn html(self) -> Html {
		match self {
			Self::Home => html! { <home::Home /> },
			Self::Selection => html! { <selection::Selection /> },
			Self::Results => html! { <results::Results /> },
			Self::NotFound => html! { <h1>{"404: Page not found"}</h1> },
		}
	}
}
