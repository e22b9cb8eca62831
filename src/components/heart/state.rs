//! View-lifetime state for the heart animation.
//!
//! Owns the viewport and the particle field while the view is mounted. The
//! field is replaced wholesale on every resize; nothing outlives the view.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};

use log::debug;

use super::particles::{ParticleField, RandomSource};
use super::render::{self, Surface};
use super::scale::Viewport;
use super::theme::HeartTheme;

/// Shared stop switch for the frame loop.
///
/// Cheap to clone and `Send + Sync`, so it can be handed to cleanup hooks that
/// cannot hold the rest of the state.
#[derive(Clone, Debug, Default)]
pub struct LoopGuard {
	stopped: Arc<AtomicBool>,
	pending: Arc<AtomicI32>,
}

impl LoopGuard {
	pub fn is_stopped(&self) -> bool {
		self.stopped.load(Ordering::Relaxed)
	}

	/// Remembers the id of the most recently requested frame.
	pub fn set_pending(&self, id: i32) {
		self.pending.store(id, Ordering::Relaxed);
	}

	/// Stops the loop and returns the pending frame id to cancel.
	///
	/// Only the first call yields an id.
	pub fn teardown(&self) -> Option<i32> {
		if self.stopped.swap(true, Ordering::Relaxed) {
			return None;
		}
		Some(self.pending.load(Ordering::Relaxed))
	}
}

/// Everything the animation needs between frames.
pub struct HeartState {
	pub viewport: Viewport,
	pub field: ParticleField,
	pub theme: HeartTheme,
	guard: LoopGuard,
}

impl HeartState {
	pub fn new(viewport: Viewport, rng: &mut impl RandomSource) -> Self {
		let mut state = Self {
			viewport,
			field: ParticleField::default(),
			theme: HeartTheme::default(),
			guard: LoopGuard::default(),
		};
		state.regenerate(rng);
		state
	}

	fn regenerate(&mut self, rng: &mut impl RandomSource) {
		self.field = ParticleField::generate(self.viewport.width, self.viewport.height, rng);
		debug!(
			"heart: generated {:?} particles for {}x{} @{}x",
			self.field.counts(),
			self.viewport.width,
			self.viewport.height,
			self.viewport.pixel_ratio
		);
	}

	/// Adopts a new viewport and discards the old field for a fresh one.
	pub fn resize(&mut self, viewport: Viewport, rng: &mut impl RandomSource) {
		self.viewport = viewport;
		self.regenerate(rng);
	}

	pub fn guard(&self) -> LoopGuard {
		self.guard.clone()
	}

	/// Draws the frame at `time` ms. Returns whether another frame should be
	/// requested; after teardown nothing is drawn and this returns `false`.
	pub fn frame(&self, surface: &mut impl Surface, time: f64) -> bool {
		if self.guard.is_stopped() {
			return false;
		}
		render::render(surface, &self.viewport, &self.field, &self.theme, time);
		true
	}
}
