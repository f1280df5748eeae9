mod pwm_value;
pub use pwm_value::{Ascending, PwmValue, RangeError};

mod step;
pub use step::Step;

mod pwm_channel;
pub use pwm_channel::{Channel, InvalidChannel};
