// tests/helpers/mounter.rs
// In-process Mounter that records every attempt and fails on request.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use mountyard::adapters::Mounter;
use mountyard::types::MountFlags;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Call {
    pub source: String,
    pub target: String,
    pub fstype: String,
    pub flags: u64,
    pub data: String,
}

#[derive(Clone, Default)]
pub struct RecordingMounter {
    calls: Rc<RefCell<Vec<Call>>>,
    bad_types: Rc<RefCell<HashSet<String>>>,
    bad_devices: Rc<RefCell<HashSet<String>>>,
}

impl RecordingMounter {
    pub fn new() -> Self { Self::default() }

    /// Attempts with this type fail with ENODEV.
    pub fn reject_type(self, t: &str) -> Self {
        self.bad_types.borrow_mut().insert(t.to_string());
        self
    }

    /// Attempts on this device fail with ENOENT.
    pub fn reject_device(self, d: &str) -> Self {
        self.bad_devices.borrow_mut().insert(d.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Call> { self.calls.borrow().clone() }

    pub fn boxed(&self) -> Box<dyn Mounter> { Box::new(self.clone()) }
}

impl Mounter for RecordingMounter {
    fn mount(
        &self,
        source: &str,
        target: &str,
        fstype: &str,
        flags: MountFlags,
        data: &str,
    ) -> std::io::Result<()> {
        self.calls.borrow_mut().push(Call {
            source: source.to_string(),
            target: target.to_string(),
            fstype: fstype.to_string(),
            flags: flags.bits(),
            data: data.to_string(),
        });
        if self.bad_devices.borrow().contains(source) {
            return Err(std::io::Error::from_raw_os_error(libc::ENOENT));
        }
        if self.bad_types.borrow().contains(fstype) {
            return Err(std::io::Error::from_raw_os_error(libc::ENODEV));
        }
        Ok(())
    }
}
