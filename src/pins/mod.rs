mod pin_error;
pub use pin_error::{PinError, PinRole};

mod role_pin;
pub(crate) use role_pin::RolePin;
