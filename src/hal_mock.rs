// In-memory stand-in for the converter hardware. Lets the whole control
// path run on the host, for tests and hardware-out-of-the-loop checks.

use embedded_hal::digital::{ErrorType, OutputPin};
use heapless::Vec;

use crate::hal::{AdcChannel, ConverterHal};

pub struct MockConverter {
    /// Codes returned for the two sampled channels.
    pub vout_code: u16,
    pub iout_code: u16,

    /// Most recent compare write, plus a short history for assertions.
    pub last_compare: u16,
    pub writes: Vec<u16, 64>,

    pub acks: u32,
}

impl MockConverter {
    pub fn new() -> Self {
        Self {
            vout_code: 0,
            iout_code: 0,
            last_compare: 0,
            writes: Vec::new(),
            acks: 0,
        }
    }
}

impl Default for MockConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConverterHal for MockConverter {
    fn read_raw_sample(&mut self, channel: AdcChannel) -> u16 {
        match channel {
            AdcChannel::OutputVoltage => self.vout_code,
            AdcChannel::OutputCurrent => self.iout_code,
        }
    }

    fn write_duty(&mut self, compare: u16) {
        self.last_compare = compare;
        // History is best-effort; long runs only care about last_compare.
        self.writes.push(compare).ok();
    }

    fn acknowledge_interrupt(&mut self) {
        self.acks += 1;
    }
}

/// Diagnostic-pin double that records every commanded level.
pub struct MockPin {
    pub levels: Vec<bool, 64>,
}

impl MockPin {
    pub fn new() -> Self {
        Self { levels: Vec::new() }
    }
}

impl Default for MockPin {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorType for MockPin {
    type Error = core::convert::Infallible;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.levels.push(false).ok();
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.levels.push(true).ok();
        Ok(())
    }
}
