// Control-rate orchestration: acquisition, regulation, actuation. These
// are the entry points the platform's interrupt bindings call; each one
// runs to completion and acknowledges its interrupt last.

use embedded_hal::digital::OutputPin;
use zerocopy::IntoBytes;

use crate::boost;
use crate::config::MAX_REFERENCE_V;
use crate::hal::{AdcChannel, ConverterHal};
use crate::state::ControlState;
use crate::{timebase, v_sense};

/// Request a new regulation target in volts, clamped to the supported
/// range. Takes effect at the next control-rate event. The caller owns
/// the state record and must hold it exclusively, same as the handlers.
pub fn set_reference(s: &mut ControlState, volts: f32) {
    s.reference = volts.clamp(0.0, MAX_REFERENCE_V);
    log::info!("reference target set to {} V", s.reference);
}

/// One control-rate event, fired once per switching period. Must finish
/// well inside `config::CONTROL_PERIOD` so the next trigger is never
/// missed. The diagnostic pin frames the handler for external timing
/// measurement and has no functional meaning.
pub fn on_control_rate<H, P>(s: &mut ControlState, hal: &mut H, diag_pin: &mut P)
where
    H: ConverterHal,
    P: OutputPin,
{
    diag_pin.set_high().ok();

    let vout_code = hal.read_raw_sample(AdcChannel::OutputVoltage);
    let iout_code = hal.read_raw_sample(AdcChannel::OutputCurrent);
    s.vout_code = vout_code as u32;
    s.iout_code = iout_code as u32;

    let zero_offset = v_sense::observe(s, vout_code, iout_code);
    s.vout = v_sense::to_volts(vout_code, zero_offset);

    s.duty = s.ctrl.update(s.vout, s.reference);
    s.compare = boost::set_duty(hal, s.duty) as u32;

    s.tick = s.tick.wrapping_add(1);

    diag_pin.set_low().ok();
    hal.acknowledge_interrupt();
}

/// Timebase event, fired by the slow software timer independently of
/// the control rate.
pub fn on_timebase_tick<H: ConverterHal>(s: &mut ControlState, hal: &mut H) {
    timebase::tick(s);
    hal.acknowledge_interrupt();
}

/// Asynchronous enable-toggle edge event.
pub fn on_edge_event<H: ConverterHal>(hal: &mut H) {
    timebase::toggle_enable();
    hal.acknowledge_interrupt();
}

/// Raw snapshot of the state record, for host-side streaming.
pub fn snapshot(s: &ControlState) -> &[u8] {
    s.as_bytes()
}
