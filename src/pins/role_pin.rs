use embedded_hal::digital::v2::OutputPin;

use super::{PinError, PinRole};

pub(crate) const SET_HIGH_FAILED: &str = "Failed to set high";
pub(crate) const SET_LOW_FAILED: &str = "Failed to set low";

/// An output pin tagged with the line it drives. Converts any HAL error into
/// [`PinError`].
pub(crate) struct RolePin<T> {
    pin: T,
    role: PinRole,
}

impl<T> RolePin<T>
where
    T: OutputPin,
{
    pub fn new(pin: T, role: PinRole) -> Self {
        Self { pin, role }
    }

    pub fn into_inner(self) -> T {
        self.pin
    }

    #[cfg(test)]
    pub fn inner(&self) -> &T {
        &self.pin
    }
}

impl<T> OutputPin for RolePin<T>
where
    T: OutputPin,
{
    type Error = PinError;

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.pin.set_high().map_err(|_| {
            warn!("{} pin: {}", self.role, SET_HIGH_FAILED);
            PinError::new(self.role, SET_HIGH_FAILED)
        })
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.pin.set_low().map_err(|_| {
            warn!("{} pin: {}", self.role, SET_LOW_FAILED);
            PinError::new(self.role, SET_LOW_FAILED)
        })
    }
}
