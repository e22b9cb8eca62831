//! Leptos component wrapping the heart canvas.
//!
//! The component creates a full-viewport canvas, keeps its backing store in
//! step with the window size and device pixel ratio, and runs the animation
//! via `requestAnimationFrame`. Unmounting cancels the pending frame, removes
//! the resize listener, and frees the particle field.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::ev;
use leptos::prelude::*;
use log::{debug, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::particles::RngSource;
use super::scale::Viewport;
use super::state::{HeartState, LoopGuard};

/// Reads the window's logical size and pixel ratio. Dimensions the host fails
/// to report keep their `previous` value.
fn read_viewport(window: &Window, previous: Option<Viewport>) -> Viewport {
	let dimension = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64());
	let (pw, ph) = previous.map_or((0.0, 0.0), |v| (v.width, v.height));
	Viewport::new(
		dimension(window.inner_width()).unwrap_or(pw),
		dimension(window.inner_height()).unwrap_or(ph),
		window.device_pixel_ratio(),
	)
}

/// Sizes the backing store in physical pixels and maps logical drawing
/// coordinates onto it.
fn apply_viewport(canvas: &HtmlCanvasElement, ctx: &CanvasRenderingContext2d, viewport: &Viewport) {
	let (w, h) = viewport.physical_size();
	canvas.set_width(w);
	canvas.set_height(h);

	let style = web_sys::HtmlElement::style(canvas);
	let _ = style.set_property("width", &format!("{}px", viewport.width));
	let _ = style.set_property("height", &format!("{}px", viewport.height));

	// Resizing resets the context, so the transform goes last.
	let r = viewport.pixel_ratio;
	let _ = ctx.set_transform(r, 0.0, 0.0, r, 0.0, 0.0);
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok().flatten()?.dyn_into().ok()
}

type FrameCallback = Closure<dyn FnMut(f64)>;

fn request_frame(cb: &FrameCallback) -> Option<i32> {
	web_sys::window()?
		.request_animation_frame(cb.as_ref().unchecked_ref())
		.ok()
}

/// Stops the loop, cancels its pending frame, then drops the frame callback
/// along with everything it captured.
///
/// The callback must outlive the cancellation: a frame firing into a dropped
/// callback throws.
fn release_loop<F: 'static>(
	guard: &LoopGuard,
	callback: StoredValue<Option<F>, LocalStorage>,
	cancel: impl FnOnce(i32),
) {
	if let Some(id) = guard.teardown() {
		cancel(id);
	}
	callback.dispose();
}

/// Renders the pulsing particle heart across the whole viewport.
///
/// Purely decorative: the canvas ignores pointer input and is hidden from the
/// accessibility tree. If no 2D context is available nothing is drawn.
#[component]
pub fn HeartParticles() -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};
		let Some(ctx) = context_2d(&canvas) else {
			warn!("heart: 2d canvas context unavailable, animation disabled");
			return;
		};

		let viewport = read_viewport(&window, None);
		apply_viewport(&canvas, &ctx, &viewport);
		let state = Rc::new(RefCell::new(HeartState::new(
			viewport,
			&mut RngSource(rand::thread_rng()),
		)));
		let guard = state.borrow().guard();

		let (state_resize, ctx_resize) = (state.clone(), ctx.clone());
		let resize_handle = window_event_listener(ev::resize, move |_| {
			let Some(win) = web_sys::window() else {
				return;
			};
			let mut s = state_resize.borrow_mut();
			let viewport = read_viewport(&win, Some(s.viewport));
			apply_viewport(&canvas, &ctx_resize, &viewport);
			s.resize(viewport, &mut RngSource(rand::thread_rng()));
		});

		// Held outside the closure so the callback can reschedule itself
		// without a reference cycle keeping the state alive after cleanup.
		let callback = StoredValue::new_local(None::<FrameCallback>);
		let guard_anim = guard.clone();
		let mut surface = ctx;
		callback.set_value(Some(Closure::new(move |time: f64| {
			if !state.borrow().frame(&mut surface, time) {
				return;
			}
			callback.try_with_value(|cb| {
				if let Some(cb) = cb
					&& let Some(id) = request_frame(cb)
				{
					guard_anim.set_pending(id);
				}
			});
		})));
		callback.with_value(|cb| {
			if let Some(cb) = cb
				&& let Some(id) = request_frame(cb)
			{
				guard.set_pending(id);
			}
		});
		info!("heart: animation started");

		on_cleanup(move || {
			release_loop(&guard, callback, |id| {
				if let Some(win) = web_sys::window() {
					let _ = win.cancel_animation_frame(id);
				}
			});
			resize_handle.remove();
			debug!("heart: animation torn down");
		});
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="heart-canvas"
			aria-hidden="true"
			style="position: fixed; inset: 0; display: block; pointer-events: none;"
		/>
	}
}
