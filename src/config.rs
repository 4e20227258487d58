// Compile-time configuration. There is no runtime config surface; all
// tuning for the power stage and the control loop lives here.

use fugit::MicrosDurationU32;

/// Switching / control-rate frequency. The ADC trigger and the PWM
/// carrier run at the same rate, so one control event fires per
/// switching period.
pub const FS_HZ: u32 = 20_000;

/// One switching period, the deadline for the control-rate handler.
pub const CONTROL_PERIOD: MicrosDurationU32 =
    MicrosDurationU32::micros(1_000_000 / FS_HZ);

/// Integration step in seconds, 1/fs.
pub const TS: f32 = CONTROL_PERIOD.ticks() as f32 / 1e6;

/// PWM counter clock.
pub const PWM_TIMEBASE_HZ: u32 = 90_000_000;

/// Compare counts for 100% duty. The counter runs up-down, so full
/// scale is half the period in timebase counts.
pub const PWM_HALF_PERIOD: u16 = (PWM_TIMEBASE_HZ / FS_HZ) as u16;

/// Software timer period for the elapsed-time accumulator.
pub const TIMEBASE_TICK: MicrosDurationU32 = MicrosDurationU32::micros(10_000);

/// Timebase tick in seconds.
pub const TIMEBASE_TICK_S: f32 = TIMEBASE_TICK.ticks() as f32 / 1e6;

/// 12-bit converter.
pub const ADC_FULL_SCALE: u16 = 4095;

/// ADC reference, volts.
pub const ADC_VREF: f32 = 3.3;

/// Volts per ADC count.
pub const ADC_LSB_VOLTS: f32 = ADC_VREF / ADC_FULL_SCALE as f32;

/// Output volts per volt at the ADC pin: 10k/1.5k divider into a 100x
/// amplified sense path.
pub const SENSOR_GAIN: f32 = (10.0 / 1.5) * 100.0;

/// Control-rate events consumed by zero-offset calibration at startup.
pub const CAL_WINDOW: u32 = 50;

/// Proportional gain.
pub const KP: f32 = 0.1;

/// Integral gain.
pub const KI: f32 = 0.01;

/// Steady-state duty bias.
pub const D0: f32 = 0.5;

/// Symmetric saturation bound on the PI sum. Must be positive, the
/// duty mapping divides by it.
pub const UMAX: f32 = 1.0;

/// Safe operating band for the commanded duty fraction.
pub const DUTY_MIN: f32 = 0.3;
pub const DUTY_MAX: f32 = 0.99;

/// Regulation target at boot, volts.
pub const DEFAULT_REFERENCE_V: f32 = 80.0;

/// Ceiling for externally requested reference targets, volts.
pub const MAX_REFERENCE_V: f32 = 100.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_constants_are_consistent() {
        assert_eq!(CONTROL_PERIOD.ticks(), 50);
        assert!((TS - 1.0 / FS_HZ as f32).abs() < 1e-9);
        assert_eq!(PWM_HALF_PERIOD, 4500);
    }

    #[test]
    fn duty_band_contains_bias() {
        assert!(DUTY_MIN < DUTY_MAX);
        assert!(D0 >= DUTY_MIN && D0 <= DUTY_MAX);
        assert!(UMAX > 0.0);
    }
}
