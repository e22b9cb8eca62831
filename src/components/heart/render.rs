//! Canvas rendering for the heart.
//!
//! A frame is painted in four additive passes, one per category, in
//! [`Category::DRAW_ORDER`]:
//! 1. Inner glow filling the body
//! 2. Border sparkle along the outline
//! 3. Rim highlights for density
//! 4. Outer halo, breathing on its own rhythm

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::curve::heart_point;
use super::particles::{Category, Particle, ParticleField};
use super::scale::{FrameScale, Viewport};
use super::theme::{HeartTheme, Hsla, LayerStyle, Motion};

/// How new pixels combine with what is already drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Blend {
	/// Normal alpha compositing.
	SourceOver,
	/// Additive compositing; overlapping dots brighten.
	Lighter,
}

impl Blend {
	fn as_css(self) -> &'static str {
		match self {
			Blend::SourceOver => "source-over",
			Blend::Lighter => "lighter",
		}
	}
}

/// A 2D drawing target in logical pixels.
pub trait Surface {
	/// Erases the `width` x `height` area.
	fn clear(&mut self, width: f64, height: f64);
	fn set_blend(&mut self, blend: Blend);
	/// Sets the glow drawn behind subsequent dots.
	fn set_glow(&mut self, color: &str, blur: f64);
	/// Fills a circle.
	fn fill_dot(&mut self, x: f64, y: f64, radius: f64, fill: &str);
}

impl Surface for CanvasRenderingContext2d {
	fn clear(&mut self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn set_blend(&mut self, blend: Blend) {
		let _ = self.set_global_composite_operation(blend.as_css());
	}

	fn set_glow(&mut self, color: &str, blur: f64) {
		self.set_shadow_color(color);
		self.set_shadow_blur(blur);
	}

	fn fill_dot(&mut self, x: f64, y: f64, radius: f64, fill: &str) {
		self.set_fill_style_str(fill);
		self.begin_path();
		let _ = self.arc(x, y, radius, 0.0, PI * 2.0);
		self.fill();
	}
}

/// Screen placement and color of one particle in one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Dot {
	pub x: f64,
	pub y: f64,
	pub radius: f64,
	pub fill: Hsla,
}

/// Computes where and how `particle` is drawn this frame.
pub fn shade(particle: &Particle, style: &LayerStyle, frame: &FrameScale) -> Dot {
	let t = frame.time;
	let (bx, by) = heart_point(particle.angle);

	let motion = match style.motion {
		Motion::Steady => 1.0,
		Motion::Bump { speed, amount } => 1.0 + (t * speed + particle.bump_phase).sin() * amount,
		Motion::Breath { gain } => frame.outer_breath * gain,
	};
	let scale = frame.heart_scale * particle.scale_factor * motion;
	let depth_scale = 1.0 + particle.depth * style.depth_spread;
	let x = frame.cx + bx * scale * depth_scale + particle.jitter_x;
	let y = frame.cy - by * scale * depth_scale + particle.jitter_y;

	let twinkle = (t * style.twinkle_speed + particle.twinkle_phase).sin() * style.twinkle_amplitude
		+ style.twinkle_amplitude;
	let sparkle = match style.sparkle {
		Some(s) if twinkle > s.threshold => s.boost,
		_ => 0.0,
	};
	let shade = 1.0 + particle.depth * style.depth_gain + twinkle * style.twinkle_gain;

	let lightness =
		style.lightness.base + shade * style.lightness.gain + sparkle * style.sparkle_lightness;
	let alpha = style.alpha_base
		+ twinkle * style.alpha_twinkle
		+ particle.scale_factor * style.alpha_scale
		+ sparkle;
	let radius = particle.base_size
		* (style.radius.base + shade * style.radius.gain + sparkle * style.sparkle_radius);

	Dot {
		x,
		y,
		radius,
		fill: Hsla {
			h: style.hue,
			s: style.saturation,
			l: lightness,
			a: alpha.min(style.alpha_cap),
		},
	}
}

fn draw_layer(
	surface: &mut impl Surface,
	field: &ParticleField,
	category: Category,
	style: &LayerStyle,
	frame: &FrameScale,
) {
	surface.set_glow(&style.shadow.to_css(), style.blur);

	for particle in field.of(category) {
		let dot = shade(particle, style, frame);
		surface.fill_dot(dot.x, dot.y, dot.radius, &dot.fill.to_css());
	}
}

/// Renders the complete heart for the frame at `time` milliseconds.
pub fn render(
	surface: &mut impl Surface,
	viewport: &Viewport,
	field: &ParticleField,
	theme: &HeartTheme,
	time: f64,
) {
	surface.clear(viewport.width, viewport.height);
	surface.set_blend(Blend::Lighter);

	let frame = FrameScale::new(viewport, time);
	for category in Category::DRAW_ORDER {
		draw_layer(surface, field, category, theme.layer(category), &frame);
	}

	surface.set_blend(Blend::SourceOver);
}

#[cfg(test)]
pub(crate) mod tests {
	use super::*;
	use crate::components::heart::particles::RngSource;
	use crate::components::heart::theme::Sparkle;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	/// A surface that records every call.
	#[derive(Debug, Default)]
	pub(crate) struct Recorder {
		pub(crate) clears: usize,
		pub(crate) blends: Vec<Blend>,
		pub(crate) glows: Vec<(String, f64)>,
		pub(crate) dots: Vec<(f64, f64, f64, String)>,
	}

	impl Surface for Recorder {
		fn clear(&mut self, _width: f64, _height: f64) {
			self.clears += 1;
		}

		fn set_blend(&mut self, blend: Blend) {
			self.blends.push(blend);
		}

		fn set_glow(&mut self, color: &str, blur: f64) {
			self.glows.push((color.to_string(), blur));
		}

		fn fill_dot(&mut self, x: f64, y: f64, radius: f64, fill: &str) {
			self.dots.push((x, y, radius, fill.to_string()));
		}
	}

	fn particle(category: Category) -> Particle {
		Particle {
			category,
			angle: 0.0,
			scale_factor: 1.0,
			depth: 0.5,
			base_size: 1.0,
			jitter_x: 0.0,
			jitter_y: 0.0,
			twinkle_phase: 0.0,
			bump_phase: 0.0,
		}
	}

	fn frame_at(time: f64) -> FrameScale {
		FrameScale {
			time,
			cx: 100.0,
			cy: 100.0,
			heart_scale: 10.0,
			outer_breath: 1.0,
		}
	}

	#[test]
	fn test_inner_dot_at_time_zero() {
		let dot = shade(&particle(Category::Inner), &LayerStyle::inner(), &frame_at(0.0));

		// heart_point(0) = (0, 5); depth scale 1.1; y is flipped.
		assert!((dot.x - 100.0).abs() < 1e-9);
		assert!((dot.y - 45.0).abs() < 1e-9);

		// twinkle = 0.5, shade = 1 + 0.275 + 0.06
		let shade = 1.335;
		assert!((dot.fill.l - (46.0 + shade * 15.0)).abs() < 1e-9);
		assert!((dot.fill.a - (0.18 + 0.5 * 0.35 + 0.2)).abs() < 1e-9);
		assert!((dot.radius - (1.0 + shade * 0.55)).abs() < 1e-9);
		assert_eq!(dot.fill.h, 344.0);
		assert_eq!(dot.fill.s, 88.0);
	}

	#[test]
	fn test_alpha_is_capped() {
		let mut p = particle(Category::Outer);
		// sin(pi/2) = 1 so twinkle is at its peak of 1.0
		p.twinkle_phase = PI / 2.0;
		let dot = shade(&p, &LayerStyle::outer(), &frame_at(0.0));
		assert_eq!(dot.fill.a, 0.65);
	}

	#[test]
	fn test_outer_follows_breath() {
		let p = particle(Category::Outer);
		let mut frame = frame_at(0.0);
		let still = shade(&p, &LayerStyle::outer(), &frame);
		frame.outer_breath = 1.18;
		let swollen = shade(&p, &LayerStyle::outer(), &frame);

		let rise = |d: &Dot| 100.0 - d.y;
		assert!((rise(&swollen) / rise(&still) - 1.18).abs() < 1e-9);
	}

	#[test]
	fn test_jitter_offsets_position() {
		let mut p = particle(Category::Border);
		let base = shade(&p, &LayerStyle::border(), &frame_at(0.0));
		p.jitter_x = 0.5;
		p.jitter_y = -0.25;
		let moved = shade(&p, &LayerStyle::border(), &frame_at(0.0));
		assert!((moved.x - base.x - 0.5).abs() < 1e-9);
		assert!((moved.y - base.y + 0.25).abs() < 1e-9);
	}

	fn assert_dot(dot: &Dot, (x, y, l, a, radius): (f64, f64, f64, f64, f64)) {
		assert!((dot.x - x).abs() < 1e-9, "x {} != {x}", dot.x);
		assert!((dot.y - y).abs() < 1e-9, "y {} != {y}", dot.y);
		assert!((dot.fill.l - l).abs() < 1e-9, "lightness {} != {l}", dot.fill.l);
		assert!((dot.fill.a - a).abs() < 1e-9, "alpha {} != {a}", dot.fill.a);
		assert!((dot.radius - radius).abs() < 1e-9, "radius {} != {radius}", dot.radius);
	}

	/// A particle on the widest point of the right lobe, heart_point = (16, 4).
	fn lobe_particle(category: Category) -> Particle {
		Particle {
			angle: PI / 2.0,
			..particle(category)
		}
	}

	#[test]
	fn test_border_dot_coefficients() {
		let dot = shade(&lobe_particle(Category::Border), &LayerStyle::border(), &frame_at(0.0));

		// scale 10 * depth scale 1.14; twinkle 0.3; shade 1 + 0.325 + 0.045
		assert_dot(&dot, (282.4, 54.4, 55.0 + 1.37 * 18.0, 0.52 + 0.3 * 0.35, 0.95 + 1.37));
		assert_eq!((dot.fill.h, dot.fill.s), (346.0, 90.0));
	}

	#[test]
	fn test_rim_dot_coefficients() {
		let dot = shade(&lobe_particle(Category::Rim), &LayerStyle::rim(), &frame_at(0.0));

		// scale 10 * depth scale 1.175; twinkle 0.3; shade 1 + 0.425 + 0.054
		assert_dot(
			&dot,
			(288.0, 53.0, 60.0 + 1.479 * 20.0, 0.62 + 0.3 * 0.35, 1.0 + 1.479 * 0.85),
		);
		assert_eq!((dot.fill.h, dot.fill.s), (347.0, 92.0));
	}

	#[test]
	fn test_outer_dot_coefficients() {
		let dot = shade(&lobe_particle(Category::Outer), &LayerStyle::outer(), &frame_at(0.0));

		// scale 10 * breath gain 1.08 * depth scale 1.1; twinkle 0.5; shade 1 + 0.175 + 0.06
		assert_dot(
			&dot,
			(290.08, 52.48, 56.0 + 1.235 * 14.0, 0.32 + 0.5 * 0.35, 1.35 + 1.235 * 0.55),
		);
		assert_eq!((dot.fill.h, dot.fill.s), (345.0, 88.0));
	}

	#[test]
	fn test_inner_bump_follows_time() {
		let p = lobe_particle(Category::Inner);
		// sin(0.0022 t) = 1 adds the full 5% wobble.
		let t = (PI / 2.0) / 0.0022;
		let dot = shade(&p, &LayerStyle::inner(), &frame_at(t));
		assert!((dot.x - (100.0 + 16.0 * 10.0 * 1.05 * 1.1)).abs() < 1e-9);
	}

	#[test]
	fn test_sparkle_boosts_dot() {
		let style = LayerStyle::border();
		let plain = shade(&lobe_particle(Category::Border), &style, &frame_at(0.0));

		let mut flaring = style.clone();
		flaring.sparkle = Some(Sparkle {
			threshold: 0.2,
			boost: 0.3,
		});
		let dot = shade(&lobe_particle(Category::Border), &flaring, &frame_at(0.0));

		assert!((dot.fill.l - plain.fill.l - 0.3 * 8.0).abs() < 1e-9);
		assert!((dot.fill.a - plain.fill.a - 0.3).abs() < 1e-9);
		assert!((dot.radius - plain.radius - 0.3).abs() < 1e-9);
	}

	#[test]
	fn test_render_layers_in_order() {
		let mut rng = RngSource(StdRng::seed_from_u64(11));
		let field = ParticleField::generate(800.0, 600.0, &mut rng);
		let viewport = Viewport::new(800.0, 600.0, 1.0);
		let mut surface = Recorder::default();

		render(&mut surface, &viewport, &field, &HeartTheme::default(), 1234.0);

		assert_eq!(surface.clears, 1);
		assert_eq!(surface.blends, vec![Blend::Lighter, Blend::SourceOver]);
		let blurs: Vec<f64> = surface.glows.iter().map(|(_, b)| *b).collect();
		assert_eq!(blurs, vec![8.0, 14.0, 18.0, 26.0]);
		assert_eq!(surface.glows[0].0, "rgba(255, 90, 135, 0.5)");
		assert_eq!(surface.dots.len(), field.particles().len());

		let counts = field.counts();
		assert!(surface.dots[..counts.inner].iter().all(|d| d.3.starts_with("hsla(344,")));
		assert!(surface.dots[field.particles().len() - 1].3.starts_with("hsla(345,"));
	}
}
