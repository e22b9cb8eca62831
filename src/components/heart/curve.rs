//! The parametric heart curve every particle is placed on.

/// Point on the heart curve for parameter `theta`, in curve units with Y up.
///
/// Spans roughly `[-16, 16]` horizontally and `[-17, 12]` vertically.
pub fn heart_point(theta: f64) -> (f64, f64) {
	let x = 16.0 * theta.sin().powi(3);
	let y = 13.0 * theta.cos()
		- 5.0 * (2.0 * theta).cos()
		- 2.0 * (3.0 * theta).cos()
		- (4.0 * theta).cos();
	(x, y)
}
