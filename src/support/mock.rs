//! Output pin double that records every level change into a journal shared
//! by all pins of one device.

use std::cell::RefCell;
use std::rc::Rc;

use embedded_hal::digital::v2::OutputPin;

use crate::PinRole;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Event {
    pub role: PinRole,
    pub high: bool,
}

#[derive(Default)]
struct Inner {
    events: Vec<Event>,
    calls: usize,
    fail_from: Option<usize>,
    fail_only: Option<usize>,
}

#[derive(Clone, Default)]
pub struct Journal(Rc<RefCell<Inner>>);

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call starting with the `n`-th (1-based) fails.
    pub fn failing_from(n: usize) -> Self {
        let journal = Self::default();
        journal.0.borrow_mut().fail_from = Some(n);
        journal
    }

    /// Only the `n`-th (1-based) call fails.
    pub fn failing_only(n: usize) -> Self {
        let journal = Self::default();
        journal.0.borrow_mut().fail_only = Some(n);
        journal
    }

    /// Attempted pin operations, including the failed one.
    pub fn calls(&self) -> usize {
        self.0.borrow().calls
    }

    /// Successful level changes in order.
    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().events.clone()
    }

    pub fn clear(&self) {
        let mut inner = self.0.borrow_mut();
        inner.events.clear();
        inner.calls = 0;
    }

    fn record(&self, role: PinRole, high: bool) -> Result<(), ()> {
        let mut inner = self.0.borrow_mut();
        inner.calls += 1;
        if matches!(inner.fail_from, Some(n) if inner.calls >= n)
            || inner.fail_only == Some(inner.calls)
        {
            return Err(());
        }
        inner.events.push(Event { role, high });
        Ok(())
    }
}

pub struct MockPin {
    journal: Journal,
    role: PinRole,
    high: bool,
}

impl MockPin {
    pub fn new(journal: &Journal, role: PinRole) -> Self {
        Self {
            journal: journal.clone(),
            role,
            high: false,
        }
    }

    pub fn with_level(journal: &Journal, role: PinRole, high: bool) -> Self {
        Self {
            high,
            ..Self::new(journal, role)
        }
    }

    pub fn is_high(&self) -> bool {
        self.high
    }
}

impl OutputPin for MockPin {
    type Error = ();

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.journal.record(self.role, true)?;
        self.high = true;
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.journal.record(self.role, false)?;
        self.high = false;
        Ok(())
    }
}
