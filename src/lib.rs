//! heart-particles: a pulsing particle heart for the browser.
//!
//! This crate provides a WASM-based canvas component that draws a heart out of
//! glowing particles, beating with a heartbeat rhythm and redrawn every
//! animation frame.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info};

// Only needed to enable browser entropy for `rand` on wasm.
use getrandom as _;

pub mod components;

pub use components::heart::HeartParticles;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("heart-particles: logging initialized");
}

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Heart" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<HeartParticles />
	}
}
