// Duty-cycle actuator for the boost power stage. The regulator owns the
// duty clamp; this stage only maps the fraction to compare units and
// commits it.

use crate::config::PWM_HALF_PERIOD;
use crate::hal::ConverterHal;

/// Convert a duty fraction to PWM compare units and write it. The
/// counter runs up-down, so full scale is the half period. Returns the
/// compare value for the state record.
pub fn set_duty<H: ConverterHal>(hal: &mut H, duty: f32) -> u16 {
    let compare = (PWM_HALF_PERIOD as f32 * duty) as u16;
    hal.write_duty(compare);
    compare
}
