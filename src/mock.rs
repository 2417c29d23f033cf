//! Recording interface and delay shared by the unit tests

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use embedded_hal::delay::DelayNs;

use crate::interface::DisplayInterface;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Event {
    Configure,
    Reset,
    Command(u8),
    Data(Vec<u8>),
    DelayMs(u32),
}

pub(crate) type Log = Rc<RefCell<Vec<Event>>>;

#[derive(Debug)]
pub(crate) struct MockInterface {
    pub(crate) log: Log,
    /// Fail the nth bus operation (0-based), if set
    pub(crate) fail_at: Option<usize>,
    ops: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BusFault;

impl MockInterface {
    pub(crate) fn new(log: Log) -> Self {
        Self {
            log,
            fail_at: None,
            ops: 0,
        }
    }

    fn record(&mut self, event: Event) -> Result<(), BusFault> {
        let op = self.ops;
        self.ops += 1;
        if self.fail_at == Some(op) {
            return Err(BusFault);
        }
        self.log.borrow_mut().push(event);
        Ok(())
    }
}

impl DisplayInterface for MockInterface {
    type Error = BusFault;

    fn configure(&mut self) -> Result<(), Self::Error> {
        self.record(Event::Configure)
    }

    fn send_command(&mut self, command: u8) -> Result<(), Self::Error> {
        self.record(Event::Command(command))
    }

    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.record(Event::Data(data.to_vec()))
    }

    fn reset<D: DelayNs>(&mut self, _delay: &mut D) -> Result<(), Self::Error> {
        self.record(Event::Reset)
    }
}

pub(crate) struct MockDelay(pub(crate) Log);

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, _ns: u32) {}

    fn delay_ms(&mut self, ms: u32) {
        self.0.borrow_mut().push(Event::DelayMs(ms));
    }
}

pub(crate) fn new_log() -> Log {
    Rc::new(RefCell::new(Vec::new()))
}

/// Commands in the log, in order
pub(crate) fn commands(log: &Log) -> Vec<u8> {
    log.borrow()
        .iter()
        .filter_map(|event| match event {
            Event::Command(cmd) => Some(*cmd),
            _ => None,
        })
        .collect()
}
