//! Testing utilities for CrabStream
//!
//! Provides a recording stand-in for the native engine so forwarding behavior
//! can be asserted without a real SDK attached.

use crate::bridge::{NativeBridge, NativeCommand};
use crate::errors::StreamError;
use crate::types::ViewHandle;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// Bridge implementation that records every dispatched instruction.
///
/// Each dispatch attempt is recorded before the optional failure injection
/// kicks in, so tests can count forwards even on error paths.
#[derive(Default)]
pub struct RecordingBridge {
    forwarded: Mutex<Vec<(ViewHandle, NativeCommand)>>,
    failing: AtomicBool,
}

impl RecordingBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every (handle, command) pair dispatched so far, in order.
    pub fn forwarded(&self) -> Vec<(ViewHandle, NativeCommand)> {
        self.forwarded.lock().unwrap().clone()
    }

    /// Commands dispatched for one handle, in order.
    pub fn commands_for(&self, handle: ViewHandle) -> Vec<NativeCommand> {
        self.forwarded
            .lock()
            .unwrap()
            .iter()
            .filter(|(h, _)| *h == handle)
            .map(|(_, c)| c.clone())
            .collect()
    }

    pub fn count(&self) -> usize {
        self.forwarded.lock().unwrap().len()
    }

    pub fn clear(&self) {
        self.forwarded.lock().unwrap().clear();
    }

    /// Make subsequent dispatches fail after being recorded.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

impl NativeBridge for RecordingBridge {
    fn dispatch(&self, handle: ViewHandle, command: NativeCommand) -> Result<(), StreamError> {
        log::debug!("RecordingBridge: {} -> {}", handle, command.name());
        self.forwarded.lock().unwrap().push((handle, command));

        if self.failing.load(Ordering::SeqCst) {
            return Err(StreamError::BridgeError(
                "Injected dispatch failure".to_string(),
            ));
        }
        Ok(())
    }
}
