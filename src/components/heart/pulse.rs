//! Heartbeat and breathing rhythms.
//!
//! All functions take the frame timestamp in milliseconds. The heartbeat repeats
//! every [`BEAT_PERIOD_MS`]; the outer breath runs on its own slower sine.

/// Length of one heartbeat.
pub const BEAT_PERIOD_MS: f64 = 900.0;

const PRIMARY_WIDTH: f64 = 0.38;
const SECONDARY_WIDTH: f64 = 0.22;
const SECONDARY_LEAD_MS: f64 = 140.0;
const PRIMARY_GAIN: f64 = 0.08;
const SECONDARY_GAIN: f64 = 0.035;

/// A parabolic bump that peaks at 1 when `phase` is 0 and reaches 0 at `width`.
fn bump(phase: f64, width: f64) -> f64 {
	(1.0 - (phase / width).powi(2)).max(0.0)
}

/// Position within the current beat, in `[0, 1)`.
fn beat_phase(time: f64) -> f64 {
	(time % BEAT_PERIOD_MS) / BEAT_PERIOD_MS
}

/// The main contraction of the beat.
pub fn primary_pulse(time: f64) -> f64 {
	bump(beat_phase(time), PRIMARY_WIDTH)
}

/// A shorter echo that fires 140ms before each main contraction.
pub fn secondary_pulse(time: f64) -> f64 {
	bump(beat_phase(time + SECONDARY_LEAD_MS), SECONDARY_WIDTH)
}

/// Scale multiplier applied to the inner, border and rim layers.
pub fn heartbeat_scale(time: f64) -> f64 {
	1.0 + PRIMARY_GAIN * primary_pulse(time) + SECONDARY_GAIN * secondary_pulse(time)
}

/// Independent swell of the outer halo.
pub fn outer_breath(time: f64) -> f64 {
	1.0 + 0.18 * (0.003 * time).sin()
}
