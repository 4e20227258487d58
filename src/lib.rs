//! Closed-loop digital control for a boost DC-DC converter.
//!
//! The core runs from three interrupt-driven events: the
//! switching-synchronous control-rate trigger (sample, regulate, actuate),
//! a slower timebase tick, and an asynchronous enable toggle. Platform
//! bring-up (clocks, PWM, ADC, vector wiring) lives outside this crate;
//! the core reaches hardware only through [`hal::ConverterHal`].

#![cfg_attr(not(test), no_std)]

pub mod boost;
pub mod config;
pub mod converter;
pub mod hal;
pub mod hal_mock;
pub mod pi;
pub mod state;
pub mod timebase;
pub mod v_sense;
