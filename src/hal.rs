// Hardware access boundary. Platform initialization owns the
// peripherals and configures the triggers (control-rate ADC start of
// conversion, timebase timer, enable-toggle edge input) before the core
// runs; the handlers only consume this narrow surface. The diagnostic
// timing pin is any `embedded_hal::digital::OutputPin` and is passed to
// the control-rate handler separately.

/// ADC channels sampled on the control-rate trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdcChannel {
    OutputVoltage,
    OutputCurrent,
}

pub trait ConverterHal {
    /// Latest conversion result for `channel`, a 12-bit code in 0..=4095.
    /// The result is always present once the sampling trigger has fired.
    fn read_raw_sample(&mut self, channel: AdcChannel) -> u16;

    /// Commit a PWM compare value. Takes effect at the next counter
    /// reload.
    fn write_duty(&mut self, compare: u16);

    /// Platform interrupt bookkeeping, called once per event after core
    /// logic completes.
    fn acknowledge_interrupt(&mut self);
}
