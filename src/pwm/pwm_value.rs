use core::iter::FusedIterator;

use derive_more::{Display, Error};

use crate::config::{MAX_PWM_VAL, PWM_BITS};

/// Duty cycle of one channel, `0..=4095`.
///
/// A value outside the 12-bit range can't be built: [`PwmValue::new`] rejects
/// it, while [`PwmValue::step`] and `value + step` saturate at the ends so a
/// fade loop never fails halfway.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PwmValue {
    raw: i16,
}

/// Requested number falls outside the allowed range.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Display, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RangeError {
    #[display("value below the PWM range")]
    Underflow,
    #[display("value above the PWM range")]
    Overflow,
}

impl PwmValue {
    pub const MIN: Self = Self { raw: 0 };
    pub const MAX: Self = Self {
        raw: MAX_PWM_VAL as i16,
    };

    /// Checked constructor.
    ///
    /// ```
    /// use tlc5947_bitbang::{PwmValue, RangeError};
    ///
    /// assert_eq!(PwmValue::new(27).map(PwmValue::get), Ok(27));
    /// assert_eq!(PwmValue::new(-1), Err(RangeError::Underflow));
    /// assert_eq!(PwmValue::new(4096), Err(RangeError::Overflow));
    /// ```
    pub fn new(value: i32) -> Result<Self, RangeError> {
        if value < 0 {
            Err(RangeError::Underflow)
        } else if value > MAX_PWM_VAL as i32 {
            Err(RangeError::Overflow)
        } else {
            Ok(Self { raw: value as i16 })
        }
    }

    pub const fn minimum() -> Self {
        Self::MIN
    }

    pub const fn maximum() -> Self {
        Self::MAX
    }

    pub const fn get(self) -> u16 {
        self.raw as u16
    }

    /// `self - other`. Two 12-bit magnitudes always fit an `i16`.
    pub const fn difference(self, other: Self) -> i16 {
        self.raw - other.raw
    }

    /// Moves the value by `delta`, clamping to `0..=4095`.
    ///
    /// ```
    /// use tlc5947_bitbang::PwmValue;
    ///
    /// assert_eq!(PwmValue::MAX.step(100), PwmValue::MAX);
    /// assert_eq!(PwmValue::MIN.step(-100), PwmValue::MIN);
    /// ```
    pub fn step(self, delta: i32) -> Self {
        let moved = i32::from(self.raw).saturating_add(delta);
        Self {
            raw: num::clamp(moved, 0, MAX_PWM_VAL as i32) as i16,
        }
    }

    /// Every value from `self` up to and including [`PwmValue::MAX`].
    pub fn ascending(self) -> Ascending {
        Ascending { next: Some(self) }
    }

    /// The 12 bits of the duty cycle, most significant first. This is the
    /// order the controller expects them on the data line.
    pub fn bits(self) -> impl Iterator<Item = bool> {
        (0..PWM_BITS).rev().map(move |bit| self.raw & (1 << bit) != 0)
    }
}

impl Default for PwmValue {
    fn default() -> Self {
        Self::MIN
    }
}

impl TryFrom<i32> for PwmValue {
    type Error = RangeError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PwmValue> for u16 {
    fn from(value: PwmValue) -> Self {
        value.get()
    }
}

/// Widens an 8-bit intensity to 12 bits.
///
/// The input is split into 16 bands of 16; band `i` gets `i` ORed into the
/// low nibble of `v << 4`. Zero stays zero and 255 reaches full scale.
///
/// ```
/// use tlc5947_bitbang::PwmValue;
///
/// assert_eq!(PwmValue::from(0u8), PwmValue::MIN);
/// assert_eq!(PwmValue::from(16u8).get(), (16 << 4) | 1);
/// assert_eq!(PwmValue::from(255u8), PwmValue::MAX);
/// ```
impl From<u8> for PwmValue {
    fn from(value: u8) -> Self {
        let value = u16::from(value);
        let band = value >> 4;
        Self {
            raw: ((value << 4) | band) as i16,
        }
    }
}

/// Forward-only walk towards full scale, see [`PwmValue::ascending`].
#[derive(Clone, Debug)]
pub struct Ascending {
    next: Option<PwmValue>,
}

impl Iterator for Ascending {
    type Item = PwmValue;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = (current < PwmValue::MAX).then(|| current.step(1));
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self
            .next
            .map_or(0, |v| (PwmValue::MAX.difference(v) + 1) as usize);
        (left, Some(left))
    }
}

impl ExactSizeIterator for Ascending {}

impl FusedIterator for Ascending {}
