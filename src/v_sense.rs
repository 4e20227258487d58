// Sample acquisition: zero-offset calibration and scaling of raw ADC
// codes to physical volts at the converter output.

use crate::config::{ADC_LSB_VOLTS, CAL_WINDOW, SENSOR_GAIN};
use crate::state::ControlState;

/// Feed the raw codes of one control-rate event to the calibration
/// stage and return the offset to subtract from the voltage code.
///
/// While the startup window is open the offsets track the incoming
/// codes themselves, so the last samples seen before the window closes
/// become the permanent biases. No averaging is performed.
pub fn observe(s: &mut ControlState, vout_code: u16, iout_code: u16) -> f32 {
    if s.cal_count < CAL_WINDOW {
        s.zero_offset = vout_code as f32;
        s.zero_offset_i = iout_code as f32;
        s.cal_count += 1;
        if s.cal_count == CAL_WINDOW {
            log::info!(
                "zero offsets frozen: vout {} counts, iout {} counts",
                s.zero_offset,
                s.zero_offset_i
            );
        }
    }
    s.zero_offset
}

/// Scale a raw code to volts at the converter output.
pub fn to_volts(raw_code: u16, zero_offset: f32) -> f32 {
    (raw_code as f32 - zero_offset) * ADC_LSB_VOLTS * SENSOR_GAIN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_sample_wins() {
        let mut s = ControlState::new();
        for code in 0..CAL_WINDOW as u16 {
            observe(&mut s, 100 + code, 200 + code);
        }
        assert_eq!(s.cal_count, CAL_WINDOW);
        assert_eq!(s.zero_offset, (100 + CAL_WINDOW as u16 - 1) as f32);
        assert_eq!(s.zero_offset_i, (200 + CAL_WINDOW as u16 - 1) as f32);
    }

    #[test]
    fn offset_is_frozen_after_the_window() {
        let mut s = ControlState::new();
        for _ in 0..CAL_WINDOW {
            observe(&mut s, 120, 0);
        }
        let offset = observe(&mut s, 4095, 4095);
        assert_eq!(offset, 120.0);
        assert_eq!(s.zero_offset, 120.0);
        assert_eq!(s.cal_count, CAL_WINDOW);
    }

    #[test]
    fn offset_tracks_codes_while_window_open() {
        let mut s = ControlState::new();
        let offset = observe(&mut s, 1234, 0);
        assert_eq!(offset, 1234.0);
        assert_eq!(s.cal_count, 1);
    }

    #[test]
    fn measurement_is_zero_at_the_offset() {
        assert_eq!(to_volts(1000, 1000.0), 0.0);
        assert_eq!(to_volts(0, 0.0), 0.0);
    }

    #[test]
    fn scaling_matches_the_sense_path() {
        // One full-scale swing above the offset covers vref * gain.
        let v = to_volts(4095, 0.0);
        assert!((v - 3.3 * (10.0 / 1.5) * 100.0).abs() < 1e-2);
        // Codes below the offset read negative.
        assert!(to_volts(100, 200.0) < 0.0);
    }
}
