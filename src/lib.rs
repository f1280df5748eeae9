//! Bit-banged driver for the TI TLC5947, a 24 channel, 12-bit PWM LED
//! controller (Adafruit breakout 1429).
//!
//! The chip is a long shift register: for each channel the 12 bits of its duty
//! cycle are clocked in on the data line, then a pulse on the latch line copies
//! the register into the PWM outputs. Any four output pins implementing
//! [`embedded_hal::digital::v2::OutputPin`] will do; their errors are folded
//! into [`PinError`].

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod support;

pub mod config;

mod pins;
pub use pins::{PinError, PinRole};

mod pwm;
pub use pwm::{Ascending, Channel, InvalidChannel, PwmValue, RangeError, Step};

mod tlc5947;
pub use tlc5947::Tlc5947;
