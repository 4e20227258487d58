// Per-channel control state. One record exists for the lifetime of the
// running system; the interrupt handlers mutate it in place and a
// snapshot can be streamed out as raw bytes for host-side tooling, so
// the layout is fixed and padding-free.

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

use crate::config::{
    CAL_WINDOW, D0, DEFAULT_REFERENCE_V, DUTY_MAX, DUTY_MIN, KI, KP, TS, UMAX,
};
use crate::pi::{Config, Pi};

#[repr(C)]
#[derive(Debug, Clone, Copy, IntoBytes, FromBytes, Immutable, KnownLayout)]
pub struct ControlState {
    /// Control-rate events since boot.
    pub tick: u32,

    /// Raw ADC codes from the last conversions.
    pub vout_code: u32,
    pub iout_code: u32,

    /// Raw-code biases captured during the startup window. Written on
    /// every control-rate event until `cal_count` reaches the window,
    /// frozen afterwards.
    pub zero_offset: f32,
    pub zero_offset_i: f32,
    pub cal_count: u32,

    /// Calibrated output voltage, volts.
    pub vout: f32,

    /// Regulation target, volts.
    pub reference: f32,

    /// Commanded duty fraction and the compare value written for it.
    pub duty: f32,
    pub compare: u32,

    /// Timebase gate snapshot, 1 while enabled.
    pub enabled: u32,

    /// Enabled-time accumulator, reset while the gate is down.
    pub elapsed_s: f32,
    pub sample_count: u32,

    pub ctrl: Pi,
}

impl ControlState {
    pub const fn new() -> Self {
        Self {
            tick: 0,
            vout_code: 0,
            iout_code: 0,
            zero_offset: 0.0,
            zero_offset_i: 0.0,
            cal_count: 0,
            vout: 0.0,
            reference: DEFAULT_REFERENCE_V,
            duty: 0.0,
            compare: 0,
            enabled: 0,
            elapsed_s: 0.0,
            sample_count: 0,
            ctrl: Pi::new(Config {
                kp: KP,
                ki: KI,
                ts: TS,
                umax: UMAX,
                d0: D0,
                duty_min: DUTY_MIN,
                duty_max: DUTY_MAX,
            }),
        }
    }

    /// True once the startup window has consumed all its samples and the
    /// zero offsets are frozen.
    pub fn calibrated(&self) -> bool {
        self.cal_count >= CAL_WINDOW
    }
}

impl Default for ControlState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_layout_has_no_padding() {
        let s = ControlState::new();
        assert_eq!(s.as_bytes().len(), core::mem::size_of::<ControlState>());
    }

    #[test]
    fn boot_state_is_idle() {
        let s = ControlState::new();
        assert_eq!(s.cal_count, 0);
        assert!(!s.calibrated());
        assert_eq!(s.sample_count, 0);
        assert_eq!(s.elapsed_s, 0.0);
        assert_eq!(s.reference, 80.0);
    }
}
