// SPDX-License-Identifier: MIT
//
// System clipboard, mirrored into an in-memory register.
//
// Cut and Copy always land in the register and, when a system clipboard is
// reachable, in it too. Paste prefers the system clipboard so text copied in
// other programs is available, and falls back to the register when the
// system clipboard is missing, empty or not holding text.

use arboard::Clipboard as SystemHandle;
use n_editor::clipboard::{Clipboard, Register};

pub struct SystemClipboard {
    system: Option<SystemHandle>,
    register: Register,
}

impl SystemClipboard {
    /// Connect to the system clipboard if `enabled`. Failure to connect is
    /// logged and leaves a register-only clipboard.
    pub fn new(enabled: bool) -> Self {
        let system = if enabled {
            match SystemHandle::new() {
                Ok(handle) => Some(handle),
                Err(err) => {
                    log::warn!("system clipboard unavailable: {err}");
                    None
                }
            }
        } else {
            None
        };
        Self {
            system,
            register: Register::new(),
        }
    }

    pub const fn is_system(&self) -> bool {
        self.system.is_some()
    }
}

impl Clipboard for SystemClipboard {
    fn get(&mut self) -> Option<String> {
        let system = self
            .system
            .as_mut()
            .and_then(|handle| handle.get_text().ok())
            .filter(|text| !text.is_empty());
        system.or_else(|| self.register.get())
    }

    fn set(&mut self, text: String) {
        if let Some(handle) = self.system.as_mut() {
            if let Err(err) = handle.set_text(text.clone()) {
                log::warn!("cannot write system clipboard: {err}");
            }
        }
        self.register.set(text);
    }
}
