use derive_more::{Display, Error};

use crate::config::CHANNEL_COUNT;

/// Output index of the controller, `0..24`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Channel(u8);

/// Channel index past the last output.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Display, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[display("channel {_0} out of range")]
pub struct InvalidChannel(#[error(not(source))] pub usize);

impl Channel {
    pub const fn new(id: usize) -> Option<Self> {
        if id < CHANNEL_COUNT {
            Some(Self(id as u8))
        } else {
            None
        }
    }

    pub const fn id(self) -> usize {
        self.0 as usize
    }

    /// All channels, lowest first.
    pub fn all() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        (0..CHANNEL_COUNT as u8).map(Self)
    }
}

impl TryFrom<usize> for Channel {
    type Error = InvalidChannel;

    fn try_from(id: usize) -> Result<Self, Self::Error> {
        Self::new(id).ok_or(InvalidChannel(id))
    }
}

impl From<Channel> for usize {
    fn from(channel: Channel) -> Self {
        channel.id()
    }
}
