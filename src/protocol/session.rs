//! Remote Session
//!
//! Per-transport mutable state threaded through every remote command.

/// Session state of one active transport
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RemoteSession {
    /// Periodic status lines enabled
    pub log_enabled: bool,
    /// Uptime of the last status line, in milliseconds
    pub last_status_ms: u32,
    /// Status line sequence number (wraps)
    pub seqnum: u8,
}

impl RemoteSession {
    /// Create a session at transport activation
    #[must_use]
    pub const fn new(now_ms: u32) -> Self {
        Self {
            log_enabled: false,
            last_status_ms: now_ms,
            seqnum: 0,
        }
    }

    /// Flip the logging flag, returning the new state
    pub fn toggle_log(&mut self) -> bool {
        self.log_enabled = !self.log_enabled;
        self.log_enabled
    }

    /// Check whether a status line is due at `now_ms`
    #[must_use]
    pub const fn status_due(&self, now_ms: u32, interval_ms: u32) -> bool {
        self.log_enabled && now_ms.wrapping_sub(self.last_status_ms) >= interval_ms
    }

    /// Mark a status line as sent, returning its sequence number
    pub fn mark_status(&mut self, now_ms: u32) -> u8 {
        self.last_status_ms = now_ms;
        self.seqnum = self.seqnum.wrapping_add(1);
        self.seqnum
    }
}

impl Default for RemoteSession {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for RemoteSession {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Session(log {}, seq {})", self.log_enabled, self.seqnum);
    }
}
