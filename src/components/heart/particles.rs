//! Particle field generation.
//!
//! A field is built once per viewport size and never mutated afterwards. Every
//! particle carries its own random attributes, drawn from per-category ranges,
//! so the renderer can recompute its position and style from the elapsed time
//! alone.

use std::f64::consts::TAU;

use rand::Rng;

/// Upper bound on the particle count.
pub const MAX_PARTICLES: usize = 4000;
/// Lower bound on the particle count. Equal to [`MAX_PARTICLES`], so every
/// viewport ends up with the same field size.
pub const MIN_PARTICLES: usize = 4000;
/// Viewport area (in logical pixels) allotted to each particle before clamping.
pub const PIXELS_PER_PARTICLE: f64 = 320.0;

/// Source of uniform random numbers in `[0, 1)`.
pub trait RandomSource {
	/// Next uniform sample in `[0, 1)`.
	fn unit(&mut self) -> f64;

	/// Uniform sample in `[min, max)`.
	fn range(&mut self, min: f64, max: f64) -> f64 {
		min + self.unit() * (max - min)
	}
}

/// Adapts any [`rand::Rng`] into a [`RandomSource`].
#[derive(Clone, Debug)]
pub struct RngSource<R>(pub R);

impl<R: Rng> RandomSource for RngSource<R> {
	fn unit(&mut self) -> f64 {
		self.0.r#gen::<f64>()
	}
}

/// Rendering layer a particle belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
	/// Blurred halo around the heart that breathes on its own rhythm.
	Outer,
	/// Bright highlights hugging the outline.
	Rim,
	/// Sparkling outline of the heart.
	Border,
	/// Filled body of the heart.
	Inner,
}

impl Category {
	/// Layers in the order they are painted; later layers land on top.
	pub const DRAW_ORDER: [Category; 4] = [
		Category::Inner,
		Category::Border,
		Category::Rim,
		Category::Outer,
	];

	/// Range of the curve scale factor. Inner particles are skewed towards the
	/// top of their range, see [`Category::sample_scale`].
	fn scale_range(self) -> (f64, f64) {
		match self {
			Category::Outer => (1.02, 1.20),
			Category::Rim => (0.90, 1.06),
			Category::Border => (0.80, 1.06),
			Category::Inner => (0.0, 0.86),
		}
	}

	fn depth_range(self) -> (f64, f64) {
		match self {
			Category::Outer => (0.35, 0.90),
			Category::Rim => (0.50, 1.00),
			Category::Border => (0.15, 1.10),
			Category::Inner => (0.10, 1.00),
		}
	}

	fn size_range(self) -> (f64, f64) {
		match self {
			Category::Outer => (0.8, 2.2),
			Category::Rim => (0.7, 2.0),
			Category::Border => (0.6, 1.8),
			Category::Inner => (0.6, 1.7),
		}
	}

	fn sample_scale(self, rng: &mut impl RandomSource) -> f64 {
		let (min, max) = self.scale_range();
		let u = match self {
			// Exponent below one pushes the fill towards the outline.
			Category::Inner => rng.unit().powf(0.45),
			_ => rng.unit(),
		};
		min + u * (max - min)
	}
}

/// A single dot of the heart. Immutable once generated.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub category: Category,
	/// Parameter along the heart curve, in `[0, 2π)`.
	pub angle: f64,
	/// Multiplier on the curve's base size.
	pub scale_factor: f64,
	/// Synthetic z-distance driving brightness and apparent size.
	pub depth: f64,
	/// Dot radius before depth modulation.
	pub base_size: f64,
	pub jitter_x: f64,
	pub jitter_y: f64,
	pub twinkle_phase: f64,
	pub bump_phase: f64,
}

impl Particle {
	/// Draws one particle of `category`.
	///
	/// Samples are consumed in a fixed order: angle, scale factor, depth, base
	/// size, jitter x, jitter y, twinkle phase, bump phase.
	pub fn sample(category: Category, rng: &mut impl RandomSource) -> Self {
		let angle = rng.unit() * TAU;
		let scale_factor = category.sample_scale(rng);
		let (depth_min, depth_max) = category.depth_range();
		let depth = rng.range(depth_min, depth_max);
		let (size_min, size_max) = category.size_range();
		let base_size = rng.range(size_min, size_max);

		Self {
			category,
			angle,
			scale_factor,
			depth,
			base_size,
			jitter_x: (rng.unit() - 0.5) * 1.8,
			jitter_y: (rng.unit() - 0.5) * 1.8,
			twinkle_phase: rng.unit() * TAU,
			bump_phase: rng.unit() * TAU,
		}
	}
}

/// How many particles of each category a field holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategoryCounts {
	pub outer: usize,
	pub rim: usize,
	pub border: usize,
	pub inner: usize,
}

impl CategoryCounts {
	/// Splits `total` into 10% outer, 15% rim, 52% border and the remainder inner.
	pub fn split(total: usize) -> Self {
		let share = |fraction: f64| (total as f64 * fraction).round() as usize;
		let outer = share(0.10);
		let rim = share(0.15);
		let border = share(0.52);
		Self {
			outer,
			rim,
			border,
			inner: total.saturating_sub(outer + rim + border),
		}
	}

	/// Sum over all categories.
	pub fn total(&self) -> usize {
		self.outer + self.rim + self.border + self.inner
	}

	/// Count for a single category.
	pub fn get(&self, category: Category) -> usize {
		match category {
			Category::Outer => self.outer,
			Category::Rim => self.rim,
			Category::Border => self.border,
			Category::Inner => self.inner,
		}
	}
}

/// Particle count for a viewport of the given logical size.
pub fn particle_total(width: f64, height: f64) -> usize {
	let by_area = (width * height / PIXELS_PER_PARTICLE).round();
	let by_area = if by_area.is_finite() && by_area > 0.0 {
		by_area as usize
	} else {
		0
	};
	by_area.clamp(MIN_PARTICLES, MAX_PARTICLES)
}

/// An ordered, immutable collection of particles.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParticleField {
	particles: Vec<Particle>,
}

impl ParticleField {
	/// Builds a fresh field for a `width` x `height` viewport.
	///
	/// Particles are laid out in blocks: outer, rim, border, then inner.
	pub fn generate(width: f64, height: f64, rng: &mut impl RandomSource) -> Self {
		let total = particle_total(width, height);
		let counts = CategoryCounts::split(total);
		let mut particles = Vec::with_capacity(counts.total());

		for category in [
			Category::Outer,
			Category::Rim,
			Category::Border,
			Category::Inner,
		] {
			for _ in 0..counts.get(category) {
				particles.push(Particle::sample(category, rng));
			}
		}

		Self { particles }
	}

	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	/// Particles of one category, in generation order.
	pub fn of(&self, category: Category) -> impl Iterator<Item = &Particle> {
		self.particles
			.iter()
			.filter(move |p| p.category == category)
	}

	/// Tallies the field by category.
	pub fn counts(&self) -> CategoryCounts {
		let mut counts = CategoryCounts {
			outer: 0,
			rim: 0,
			border: 0,
			inner: 0,
		};
		for p in &self.particles {
			match p.category {
				Category::Outer => counts.outer += 1,
				Category::Rim => counts.rim += 1,
				Category::Border => counts.border += 1,
				Category::Inner => counts.inner += 1,
			}
		}
		counts
	}
}
