mod api;
mod components;
mod config;
mod data;
mod page;
mod response;
mod storage;
mod workflow;

#[cfg(target_family = "wasm")]
fn main() {
	wasm_logger::init(wasm_logger::Config::default());
	yew::Renderer::<page::App>::new().render();
}

// The app only renders in a browser; this keeps host-side `cargo test` linking.
#[cfg(not(target_family = "wasm"))]
fn main() {}
