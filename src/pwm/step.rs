use core::ops::{Add, Sub};

use crate::config::MAX_PWM_VAL;

use super::{PwmValue, RangeError};

const STEP_LIMIT: i32 = MAX_PWM_VAL as i32;

/// Signed increment applied to a [`PwmValue`] while fading.
///
/// The amount always lies in `-4095..=4095`, so a single step can cross the
/// whole duty-cycle range but never more.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Step {
    amount: i16,
}

impl Step {
    /// Clamping constructor.
    ///
    /// ```
    /// use tlc5947_bitbang::Step;
    ///
    /// assert_eq!(Step::new(5000), Step::new(4095));
    /// assert_eq!(Step::new(-5000), Step::new(-4095));
    /// ```
    pub fn new(amount: i32) -> Self {
        Self {
            amount: num::clamp(amount, -STEP_LIMIT, STEP_LIMIT) as i16,
        }
    }

    pub fn checked_new(amount: i32) -> Result<Self, RangeError> {
        if amount < -STEP_LIMIT {
            Err(RangeError::Underflow)
        } else if amount > STEP_LIMIT {
            Err(RangeError::Overflow)
        } else {
            Ok(Self {
                amount: amount as i16,
            })
        }
    }

    pub const fn amount(self) -> i16 {
        self.amount
    }

    pub const fn reverse(self) -> Self {
        Self {
            amount: -self.amount,
        }
    }

    pub fn double(self) -> Result<Self, RangeError> {
        Self::checked_new(i32::from(self.amount) * 2)
    }

    // Fractions truncate toward zero.

    pub const fn half(self) -> Self {
        self.divided(2)
    }

    pub const fn quarter(self) -> Self {
        self.divided(4)
    }

    pub const fn eighth(self) -> Self {
        self.divided(8)
    }

    pub const fn sixteenth(self) -> Self {
        self.divided(16)
    }

    const fn divided(self, by: i16) -> Self {
        Self {
            amount: self.amount / by,
        }
    }
}

impl Default for Step {
    fn default() -> Self {
        Self { amount: 1 }
    }
}

impl Add for Step {
    type Output = Result<Self, RangeError>;

    fn add(self, rhs: Self) -> Self::Output {
        Self::checked_new(i32::from(self.amount) + i32::from(rhs.amount))
    }
}

impl Sub for Step {
    type Output = Result<Self, RangeError>;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::checked_new(i32::from(self.amount) - i32::from(rhs.amount))
    }
}

/// Saturating, same as [`PwmValue::step`].
impl Add<Step> for PwmValue {
    type Output = PwmValue;

    fn add(self, rhs: Step) -> Self::Output {
        self.step(i32::from(rhs.amount))
    }
}

impl PwmValue {
    /// Like `value + step` but reports hitting either end instead of
    /// saturating.
    pub fn checked_add(self, step: Step) -> Result<Self, RangeError> {
        Self::new(i32::from(self.get()) + i32::from(step.amount))
    }
}
