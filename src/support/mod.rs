#[macro_use]
mod fmt;

#[cfg(test)]
pub(crate) mod mock;
