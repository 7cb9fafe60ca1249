//! The fixed delays of the controller protocol, collected in one place
//!
//! The sequences in [`Epd7in5`](crate::Epd7in5) consume these values instead
//! of scattering literal waits through the code, so the real-time contract of
//! the protocol stays inspectable and tests can inject shorter values.

/// Protocol delay table, all values in milliseconds
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Timings {
    /// Time the reset line is held high before and after the reset pulse
    pub reset_hold_ms: u32,
    /// Width of the low reset pulse
    pub reset_pulse_ms: u32,
    /// Settle time after the power-on command, before the busy line is polled
    pub power_on_ms: u32,
    /// Settle time after the busy line reports ready
    pub busy_settle_ms: u32,
    /// Interval between two busy line polls, must be non-zero
    pub busy_poll_ms: u32,
    /// Upper bound for one busy wait; when exceeded the operation fails with
    /// [`Error::DeviceNotReady`](crate::Error::DeviceNotReady)
    pub busy_timeout_ms: u32,
    /// Latch time between the refresh command and the first busy poll
    pub refresh_latch_ms: u32,
    /// Settle time after entering deep sleep
    pub sleep_settle_ms: u32,
}

impl Default for Timings {
    /// The delays mandated by the controller documentation
    fn default() -> Self {
        Timings {
            reset_hold_ms: 200,
            reset_pulse_ms: 2,
            power_on_ms: 100,
            busy_settle_ms: 200,
            busy_poll_ms: 1,
            busy_timeout_ms: 30_000,
            refresh_latch_ms: 100,
            sleep_settle_ms: 2_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_defaults() {
        let t = Timings::default();
        assert_eq!(t.reset_hold_ms, 200);
        assert_eq!(t.reset_pulse_ms, 2);
        assert_eq!(t.busy_settle_ms, 200);
        assert_eq!(t.busy_poll_ms, 1);
        assert_eq!(t.refresh_latch_ms, 100);
        assert_eq!(t.sleep_settle_ms, 2_000);
    }
}
