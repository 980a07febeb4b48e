//! Sinusoidal color ramp
//!
//! Maps an index in `[0, max)` to a color by sampling three phase-shifted
//! sine waves, one per channel. Neighbouring indices get similar colors and
//! the whole range sweeps through the hue circle roughly once.

use orbitcloud_core::Rgba;

/// Angular frequency applied to the index rescaled into `[0, 255)`
pub const RAMP_FREQUENCY: f64 = 0.024;

/// Phase offsets in radians for the red, green and blue channels
pub const RAMP_PHASES: [f64; 3] = [0.0, 2.0, 4.0];

const RAMP_AMPLITUDE: f64 = 127.0;
const RAMP_OFFSET: f64 = 128.0;

/// Color for `number` out of `max` entries with the given opacity
///
/// A `max` of zero is treated as one.
pub fn number_to_color(number: usize, max: usize, alpha: f64) -> Rgba {
    let i = number as f64 * 255.0 / max.max(1) as f64;
    let [r, g, b] = RAMP_PHASES.map(|phase| ramp_channel(i, phase));
    Rgba::new(r, g, b, alpha)
}

/// One channel of the ramp, quantized to 8 bits and normalized to `[0, 1]`
fn ramp_channel(i: f64, phase: f64) -> f64 {
    let level = ((RAMP_FREQUENCY * i + phase).sin() * RAMP_AMPLITUDE + RAMP_OFFSET).round();
    level / 255.0
}
