//! Viewport geometry and per-frame scaling.
//!
//! # Coordinate Spaces
//!
//! - **Logical pixels**: CSS pixels. All drawing happens in this space; the
//!   canvas transform maps it onto the backing store.
//! - **Physical pixels**: The canvas backing store, `logical * pixel_ratio`.
//! - **Curve units**: Output of [`heart_point`](super::curve::heart_point),
//!   mapped to logical pixels by [`FrameScale::heart_scale`].

use super::pulse::{heartbeat_scale, outer_breath};

/// Fraction of the shorter viewport side that one curve unit spans.
const CURVE_UNIT: f64 = 0.0185;
/// The heart sits slightly below the vertical center.
const CENTER_Y: f64 = 0.52;

/// Size of the drawing area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
	/// Logical width.
	pub width: f64,
	/// Logical height.
	pub height: f64,
	/// Device pixel ratio (physical pixels per logical pixel).
	pub pixel_ratio: f64,
}

impl Viewport {
	/// Builds a viewport, falling back to a pixel ratio of 1 when the reported
	/// one is missing or nonsensical.
	pub fn new(width: f64, height: f64, pixel_ratio: f64) -> Self {
		let pixel_ratio = if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
			pixel_ratio
		} else {
			1.0
		};
		Self {
			width: width.max(0.0),
			height: height.max(0.0),
			pixel_ratio,
		}
	}

	/// Backing store dimensions.
	pub fn physical_size(&self) -> (u32, u32) {
		(
			(self.width * self.pixel_ratio).round() as u32,
			(self.height * self.pixel_ratio).round() as u32,
		)
	}

	/// Where the heart's origin lands on screen.
	pub fn center(&self) -> (f64, f64) {
		(self.width * 0.5, self.height * CENTER_Y)
	}

	/// Logical pixels per curve unit before any pulsing.
	pub fn base_scale(&self) -> f64 {
		self.width.min(self.height) * CURVE_UNIT
	}
}

/// Pre-computed values for a single frame.
///
/// Create this once per frame and pass it to the layer renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameScale {
	/// Frame timestamp in milliseconds.
	pub time: f64,
	pub cx: f64,
	pub cy: f64,
	/// Base scale multiplied by the heartbeat.
	pub heart_scale: f64,
	pub outer_breath: f64,
}

impl FrameScale {
	pub fn new(viewport: &Viewport, time: f64) -> Self {
		let (cx, cy) = viewport.center();
		Self {
			time,
			cx,
			cy,
			heart_scale: viewport.base_scale() * heartbeat_scale(time),
			outer_breath: outer_breath(time),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_physical_size_rounds() {
		let vp = Viewport::new(1001.0, 500.0, 1.5);
		assert_eq!(vp.physical_size(), (1502, 750));
	}

	#[test]
	fn test_invalid_pixel_ratio_falls_back() {
		assert_eq!(Viewport::new(10.0, 10.0, 0.0).pixel_ratio, 1.0);
		assert_eq!(Viewport::new(10.0, 10.0, f64::NAN).pixel_ratio, 1.0);
		assert_eq!(Viewport::new(10.0, 10.0, 2.0).pixel_ratio, 2.0);
	}

	#[test]
	fn test_center_and_base_scale() {
		let vp = Viewport::new(1000.0, 800.0, 2.0);
		let (cx, cy) = vp.center();
		assert_eq!(cx, 500.0);
		assert!((cy - 416.0).abs() < 1e-9);
		assert!((vp.base_scale() - 14.8).abs() < 1e-12);
	}

	#[test]
	fn test_frame_scale_at_rest() {
		let vp = Viewport::new(1000.0, 800.0, 1.0);
		// 500ms into the beat both pulses are flat.
		let frame = FrameScale::new(&vp, 500.0);
		assert!((frame.heart_scale - vp.base_scale()).abs() < 1e-12);
	}
}
