use embedded_hal::digital::v2::OutputPin;

use crate::config::CHANNEL_COUNT;
use crate::pins::{PinError, PinRole, RolePin};
use crate::pwm::{Channel, PwmValue};

/// A single TLC5947 wired to four output pins: L(atch), D(ata), O(utput
/// enable) and C(lock).
///
/// Duty cycles are buffered and only reach the chip on [`Tlc5947::flush`].
/// The pins are owned by the driver for its whole life, so nothing else can
/// toggle a line in the middle of a transfer. [`Tlc5947::release`] gives them
/// back.
pub struct Tlc5947<L, D, O, C>
where
    L: OutputPin,
    D: OutputPin,
    O: OutputPin,
    C: OutputPin,
{
    buffer: [PwmValue; CHANNEL_COUNT],

    latch: RolePin<L>,
    data: RolePin<D>,
    oe: RolePin<O>,
    clock: RolePin<C>,
}

impl<L, D, O, C> Tlc5947<L, D, O, C>
where
    L: OutputPin,
    D: OutputPin,
    O: OutputPin,
    C: OutputPin,
{
    /// Takes the pins. No line is touched until [`Tlc5947::begin`].
    pub fn new(latch: L, data: D, oe: O, clock: C) -> Self {
        Self {
            buffer: [PwmValue::default(); CHANNEL_COUNT],
            latch: RolePin::new(latch, PinRole::Latch),
            data: RolePin::new(data, PinRole::Data),
            oe: RolePin::new(oe, PinRole::OutputEnable),
            clock: RolePin::new(clock, PinRole::Clock),
        }
    }

    /// Pulls every line low and clears the buffer.
    ///
    /// Stops at the first pin that fails; lines already driven stay where
    /// they are. Call again to retry.
    pub fn begin(&mut self) -> Result<(), PinError> {
        debug!("tlc5947: begin");

        self.oe.set_low()?;
        self.latch.set_low()?;
        self.data.set_low()?;
        self.clock.set_low()?;

        self.buffer = [PwmValue::default(); CHANNEL_COUNT];

        Ok(())
    }

    pub fn write_pwm(&mut self, channel: Channel, value: PwmValue) {
        self.buffer[channel.id()] = value;
    }

    /// Buffered value of `channel`, not necessarily flushed yet.
    pub fn pwm(&self, channel: Channel) -> PwmValue {
        self.buffer[channel.id()]
    }

    /// Turns every channel off.
    pub fn all_black(&mut self) -> Result<(), PinError> {
        self.buffer = [PwmValue::default(); CHANNEL_COUNT];
        self.flush()
    }

    /// Shifts the whole buffer out and latches it.
    ///
    /// Channel 23 goes first so it ends up at the far end of the chip's shift
    /// register; each value is sent MSB first and sampled on the rising clock
    /// edge. On error the transfer is abandoned where it failed and the
    /// outputs are undefined until a successful [`Tlc5947::begin`] and
    /// [`Tlc5947::flush`].
    pub fn flush(&mut self) -> Result<(), PinError> {
        trace!("tlc5947: flush");

        self.latch.set_low()?;

        for value in self.buffer.iter().rev() {
            for bit in value.bits() {
                self.clock.set_low()?;

                if bit {
                    self.data.set_high()?;
                } else {
                    self.data.set_low()?;
                }

                self.clock.set_high()?;
            }
        }

        self.clock.set_low()?;
        self.latch.set_high()?;
        self.latch.set_low()
    }

    /// Gives back the pins as `(latch, data, oe, clock)`.
    pub fn release(self) -> (L, D, O, C) {
        (
            self.latch.into_inner(),
            self.data.into_inner(),
            self.oe.into_inner(),
            self.clock.into_inner(),
        )
    }
}
