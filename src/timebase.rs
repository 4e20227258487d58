// Enable gate and elapsed-time accumulator. The edge handler and the
// tick handler may interleave, so the gate flag is the one cell shared
// between them and lives in an atomic. Neither the gate nor the
// accumulator feeds the regulator; they count enabled-time for
// supervisory use.

use portable_atomic::{AtomicBool, Ordering};

use crate::config::TIMEBASE_TICK_S;
use crate::state::ControlState;

static ENABLED: AtomicBool = AtomicBool::new(false);

/// Flip the gate. Called from the asynchronous edge event; there is no
/// explicit set/clear payload, only a toggle. Returns the new value.
pub fn toggle_enable() -> bool {
    let enabled = !ENABLED.fetch_xor(true, Ordering::Relaxed);
    if enabled {
        log::info!("enable gate set");
    } else {
        log::info!("enable gate cleared");
    }
    enabled
}

pub fn is_enabled() -> bool {
    ENABLED.load(Ordering::Relaxed)
}

/// Advance the accumulator by one tick while the gate is up, or hold it
/// at zero while the gate is down.
pub fn tick(s: &mut ControlState) {
    if ENABLED.load(Ordering::Relaxed) {
        s.elapsed_s += TIMEBASE_TICK_S;
        s.sample_count += 1;
        s.enabled = 1;
    } else {
        s.elapsed_s = 0.0;
        s.sample_count = 0;
        s.enabled = 0;
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::{Mutex, MutexGuard};

    // The gate is process-global; tests that touch it take this lock so
    // the harness can run them on parallel threads.
    static GATE_LOCK: Mutex<()> = Mutex::new(());

    pub(crate) fn lock_gate(enabled: bool) -> MutexGuard<'static, ()> {
        let guard = GATE_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        ENABLED.store(enabled, Ordering::Relaxed);
        guard
    }

    #[test]
    fn accumulator_advances_only_while_enabled() {
        let _guard = lock_gate(false);
        let mut s = ControlState::new();

        tick(&mut s);
        assert_eq!(s.sample_count, 0);
        assert_eq!(s.elapsed_s, 0.0);

        assert!(toggle_enable());
        for _ in 0..5 {
            tick(&mut s);
        }
        assert_eq!(s.sample_count, 5);
        assert!((s.elapsed_s - 5.0 * TIMEBASE_TICK_S).abs() < 1e-6);
        assert_eq!(s.enabled, 1);

        // Disabling resets the accumulator at the next tick.
        assert!(!toggle_enable());
        tick(&mut s);
        assert_eq!(s.sample_count, 0);
        assert_eq!(s.elapsed_s, 0.0);
        assert_eq!(s.enabled, 0);
    }

    #[test]
    fn toggle_is_a_strict_alternation() {
        let _guard = lock_gate(false);
        assert!(toggle_enable());
        assert!(is_enabled());
        assert!(!toggle_enable());
        assert!(!is_enabled());
    }
}
