//! Visual theming for the heart.
//!
//! Each particle category is painted by the same routine, parameterized by a
//! [`LayerStyle`]. The numbers here define the look of the effect; changing any
//! of them changes the rendered heart.

use super::particles::Category;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn to_css(self) -> String {
		format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

/// HSL color with alpha. Saturation and lightness are percentages.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
	pub h: f64,
	pub s: f64,
	pub l: f64,
	pub a: f64,
}

impl Hsla {
	pub fn to_css(self) -> String {
		format!("hsla({}, {}%, {}%, {})", self.h, self.s, self.l, self.a)
	}
}

/// Extra scale motion applied on top of the heartbeat.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Motion {
	/// Follows the heartbeat only.
	Steady,
	/// Adds a per-particle wobble: `1 + sin(t * speed + bump_phase) * amount`.
	Bump { speed: f64, amount: f64 },
	/// Follows the outer breath, multiplied by `gain`.
	Breath { gain: f64 },
}

/// A brightness flare applied when the twinkle exceeds `threshold`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sparkle {
	pub threshold: f64,
	pub boost: f64,
}

/// Linear response `base + input * gain`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ramp {
	pub base: f64,
	pub gain: f64,
}

/// Everything needed to paint one category of particles.
#[derive(Clone, Debug)]
pub struct LayerStyle {
	pub hue: f64,
	/// Saturation percentage.
	pub saturation: f64,
	/// Glow color drawn behind each dot.
	pub shadow: Color,
	/// Glow blur radius in logical pixels.
	pub blur: f64,
	pub motion: Motion,
	/// How much depth pushes a particle away from the center.
	pub depth_spread: f64,
	/// Twinkle angular speed (per millisecond).
	pub twinkle_speed: f64,
	/// Twinkle oscillates in `[0, 2 * twinkle_amplitude]`.
	pub twinkle_amplitude: f64,
	pub sparkle: Option<Sparkle>,
	/// Shade is `1 + depth * depth_gain + twinkle * twinkle_gain`.
	pub depth_gain: f64,
	pub twinkle_gain: f64,
	/// Lightness percentage from shade.
	pub lightness: Ramp,
	/// Lightness added per unit of sparkle.
	pub sparkle_lightness: f64,
	/// Base alpha; the twinkle adds `twinkle * alpha_twinkle`.
	pub alpha_base: f64,
	pub alpha_twinkle: f64,
	/// Alpha added per unit of the particle's scale factor.
	pub alpha_scale: f64,
	pub alpha_cap: f64,
	/// Radius multiplier from shade.
	pub radius: Ramp,
	/// Radius multiplier added per unit of sparkle.
	pub sparkle_radius: f64,
}

impl LayerStyle {
	/// Soft, dim fill of the heart body.
	pub fn inner() -> Self {
		Self {
			hue: 344.0,
			saturation: 88.0,
			shadow: Color::rgba(255, 90, 135, 0.5),
			blur: 8.0,
			motion: Motion::Bump {
				speed: 0.0022,
				amount: 0.05,
			},
			depth_spread: 0.2,
			twinkle_speed: 0.006,
			twinkle_amplitude: 0.5,
			sparkle: None,
			depth_gain: 0.55,
			twinkle_gain: 0.12,
			lightness: Ramp {
				base: 46.0,
				gain: 15.0,
			},
			sparkle_lightness: 0.0,
			alpha_base: 0.18,
			alpha_twinkle: 0.35,
			alpha_scale: 0.2,
			alpha_cap: 0.9,
			radius: Ramp {
				base: 1.0,
				gain: 0.55,
			},
			sparkle_radius: 0.0,
		}
	}

	/// Sparkling outline.
	pub fn border() -> Self {
		Self {
			hue: 346.0,
			saturation: 90.0,
			shadow: Color::rgba(255, 115, 150, 0.75),
			blur: 14.0,
			motion: Motion::Steady,
			depth_spread: 0.28,
			twinkle_speed: 0.006,
			twinkle_amplitude: 0.3,
			sparkle: Some(Sparkle {
				threshold: 0.92,
				boost: 0.3,
			}),
			depth_gain: 0.65,
			twinkle_gain: 0.15,
			lightness: Ramp {
				base: 55.0,
				gain: 18.0,
			},
			sparkle_lightness: 8.0,
			alpha_base: 0.52,
			alpha_twinkle: 0.35,
			alpha_scale: 0.0,
			alpha_cap: 0.98,
			radius: Ramp {
				base: 0.95,
				gain: 1.0,
			},
			sparkle_radius: 1.0,
		}
	}

	/// Bright highlights for 3D density along the outline.
	pub fn rim() -> Self {
		Self {
			hue: 347.0,
			saturation: 92.0,
			shadow: Color::rgba(255, 135, 170, 0.9),
			blur: 18.0,
			motion: Motion::Steady,
			depth_spread: 0.35,
			twinkle_speed: 0.007,
			twinkle_amplitude: 0.3,
			sparkle: Some(Sparkle {
				threshold: 0.9,
				boost: 0.35,
			}),
			depth_gain: 0.85,
			twinkle_gain: 0.18,
			lightness: Ramp {
				base: 60.0,
				gain: 20.0,
			},
			sparkle_lightness: 10.0,
			alpha_base: 0.62,
			alpha_twinkle: 0.35,
			alpha_scale: 0.0,
			alpha_cap: 0.99,
			radius: Ramp {
				base: 1.0,
				gain: 0.85,
			},
			sparkle_radius: 0.75,
		}
	}

	/// Blurred halo breathing independently from the heartbeat.
	pub fn outer() -> Self {
		Self {
			hue: 345.0,
			saturation: 88.0,
			shadow: Color::rgba(255, 120, 155, 0.45),
			blur: 26.0,
			motion: Motion::Breath { gain: 1.08 },
			depth_spread: 0.2,
			twinkle_speed: 0.004,
			twinkle_amplitude: 0.5,
			sparkle: None,
			depth_gain: 0.35,
			twinkle_gain: 0.12,
			lightness: Ramp {
				base: 56.0,
				gain: 14.0,
			},
			sparkle_lightness: 0.0,
			alpha_base: 0.32,
			alpha_twinkle: 0.35,
			alpha_scale: 0.0,
			alpha_cap: 0.65,
			radius: Ramp {
				base: 1.35,
				gain: 0.55,
			},
			sparkle_radius: 0.0,
		}
	}
}

/// Complete visual theme: one style per category.
#[derive(Clone, Debug)]
pub struct HeartTheme {
	pub inner: LayerStyle,
	pub border: LayerStyle,
	pub rim: LayerStyle,
	pub outer: LayerStyle,
}

impl HeartTheme {
	pub fn layer(&self, category: Category) -> &LayerStyle {
		match category {
			Category::Inner => &self.inner,
			Category::Border => &self.border,
			Category::Rim => &self.rim,
			Category::Outer => &self.outer,
		}
	}
}

impl Default for HeartTheme {
	fn default() -> Self {
		Self {
			inner: LayerStyle::inner(),
			border: LayerStyle::border(),
			rim: LayerStyle::rim(),
			outer: LayerStyle::outer(),
		}
	}
}
