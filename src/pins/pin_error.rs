use derive_more::{Display, Error};

/// Functional line of the controller a pin is wired to.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Display)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinRole {
    #[display("latch")]
    Latch,
    #[display("data")]
    Data,
    #[display("output-enable")]
    OutputEnable,
    #[display("clock")]
    Clock,
}

/// A pin refused to change level.
///
/// Whatever the HAL reported is dropped; only the role of the failing line and
/// a fixed message survive, so every board produces the same error type.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Display, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[display("{role} pin: {message}")]
pub struct PinError {
    role: PinRole,
    message: &'static str,
}

impl PinError {
    pub(crate) fn new(role: PinRole, message: &'static str) -> Self {
        Self { role, message }
    }

    pub fn role(&self) -> PinRole {
        self.role
    }

    pub fn message(&self) -> &'static str {
        self.message
    }
}
