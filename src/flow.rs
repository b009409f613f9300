//! Gallery access flow: the popup's three-phase state machine.
//!
//! The popup walks a visitor through Initial -> Counting -> ReadyToEnter.
//! Transitions are one-directional; the only way back is the full reset that
//! happens whenever the popup is (re)opened or dismissed. The machine itself
//! is timer-free: the component that owns it arms a 1 s interval on `join`
//! and feeds the elapsed seconds back through [`AccessFlow::tick`], so every
//! transition stays observable in plain unit tests.

/// Seconds displayed when the countdown arms; ticks count down to zero.
pub const COUNTDOWN_SECONDS: u32 = 10;

/// Exactly one phase is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupPhase {
    /// Popup just opened; "join" and dismiss are the only actions.
    Initial,
    /// Countdown running; entry is not offered yet.
    Counting,
    /// Countdown finished; "enter" is offered.
    ReadyToEnter,
}

/// What a countdown tick produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// The tick arrived outside the Counting phase (a stale timer fired
    /// after a reset); nothing changed and the timer should be dropped.
    Ignored,
    /// Still counting; this remaining value is what the popup displays.
    Remaining(u32),
    /// Reached zero: the phase moved to ReadyToEnter and the interval must
    /// be dropped. `seconds_remaining` stays at zero so the final value can
    /// be kept on screen.
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessFlow {
    phase: PopupPhase,
    seconds_remaining: u32,
}

impl AccessFlow {
    pub fn new() -> Self {
        Self {
            phase: PopupPhase::Initial,
            seconds_remaining: COUNTDOWN_SECONDS,
        }
    }

    pub fn phase(&self) -> PopupPhase {
        self.phase
    }

    /// Remaining seconds for display. Shows the full constant right after a
    /// join, before the first tick lands.
    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    /// Opening (or reopening) the popup always lands here, whatever the
    /// prior phase. The caller drops any live interval before calling.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// The "join" action. Only valid in Initial, which guards against a
    /// double click arming two countdowns. Returns whether the countdown
    /// should be armed.
    pub fn join(&mut self) -> bool {
        if self.phase != PopupPhase::Initial {
            return false;
        }
        self.phase = PopupPhase::Counting;
        self.seconds_remaining = COUNTDOWN_SECONDS;
        true
    }

    /// One second elapsed on the owning interval.
    pub fn tick(&mut self) -> Tick {
        if self.phase != PopupPhase::Counting {
            return Tick::Ignored;
        }
        self.seconds_remaining = self.seconds_remaining.saturating_sub(1);
        if self.seconds_remaining == 0 {
            self.phase = PopupPhase::ReadyToEnter;
            Tick::Finished
        } else {
            Tick::Remaining(self.seconds_remaining)
        }
    }

    /// Entry is only offered once the countdown has run out.
    pub fn may_enter(&self) -> bool {
        self.phase == PopupPhase::ReadyToEnter
    }
}

impl Default for AccessFlow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_in_initial_with_full_countdown() {
        let flow = AccessFlow::new();
        assert_eq!(flow.phase(), PopupPhase::Initial);
        assert_eq!(flow.seconds_remaining(), COUNTDOWN_SECONDS);
        assert!(!flow.may_enter());
    }

    #[test]
    fn join_arms_countdown_only_from_initial() {
        let mut flow = AccessFlow::new();
        assert!(flow.join());
        assert_eq!(flow.phase(), PopupPhase::Counting);

        // A second activation must not rewind the running countdown.
        flow.tick();
        assert!(!flow.join());
        assert_eq!(flow.seconds_remaining(), COUNTDOWN_SECONDS - 1);
    }

    #[test]
    fn ten_ticks_count_nine_down_to_zero_and_finish_once() {
        let mut flow = AccessFlow::new();
        flow.join();

        let mut observed = Vec::new();
        let mut finishes = 0;
        for _ in 0..COUNTDOWN_SECONDS {
            match flow.tick() {
                Tick::Remaining(n) => observed.push(n),
                Tick::Finished => {
                    observed.push(flow.seconds_remaining());
                    finishes += 1;
                }
                Tick::Ignored => panic!("live countdown ignored a tick"),
            }
        }

        assert_eq!(observed, vec![9, 8, 7, 6, 5, 4, 3, 2, 1, 0]);
        assert_eq!(finishes, 1);
        assert_eq!(flow.phase(), PopupPhase::ReadyToEnter);
        assert!(flow.may_enter());
    }

    #[test]
    fn ticks_outside_counting_are_ignored() {
        let mut flow = AccessFlow::new();
        assert_eq!(flow.tick(), Tick::Ignored);

        flow.join();
        for _ in 0..COUNTDOWN_SECONDS {
            flow.tick();
        }
        // The interval is dropped on Finished, but a queued callback could
        // still land once; it must not move the machine.
        assert_eq!(flow.tick(), Tick::Ignored);
        assert_eq!(flow.phase(), PopupPhase::ReadyToEnter);
    }

    #[test]
    fn reset_discards_any_phase() {
        let mut flow = AccessFlow::new();
        flow.join();
        flow.tick();
        flow.tick();
        flow.reset();
        assert_eq!(flow.phase(), PopupPhase::Initial);
        assert_eq!(flow.seconds_remaining(), COUNTDOWN_SECONDS);

        flow.join();
        for _ in 0..COUNTDOWN_SECONDS {
            flow.tick();
        }
        flow.reset();
        assert_eq!(flow.phase(), PopupPhase::Initial);
        assert!(!flow.may_enter());
    }

    #[test]
    fn stale_tick_after_reset_cannot_touch_fresh_state() {
        let mut flow = AccessFlow::new();
        flow.join();
        flow.tick();
        flow.reset();
        assert_eq!(flow.tick(), Tick::Ignored);
        assert_eq!(flow.seconds_remaining(), COUNTDOWN_SECONDS);
    }

    #[test]
    fn reopen_mid_countdown_shows_full_value_again() {
        let mut flow = AccessFlow::new();
        flow.join();
        flow.tick();
        flow.tick();
        flow.tick();
        assert_eq!(flow.seconds_remaining(), 7);

        flow.reset();
        assert_eq!(flow.seconds_remaining(), COUNTDOWN_SECONDS);
        assert!(flow.join());
        assert_eq!(flow.seconds_remaining(), COUNTDOWN_SECONDS);
    }

    #[test]
    fn enter_is_gated_to_ready() {
        let mut flow = AccessFlow::new();
        assert!(!flow.may_enter());
        flow.join();
        assert!(!flow.may_enter());
        for _ in 0..COUNTDOWN_SECONDS {
            flow.tick();
        }
        assert!(flow.may_enter());
    }

    #[test]
    fn zero_stays_readable_after_the_finish() {
        let mut flow = AccessFlow::new();
        flow.join();
        for _ in 0..COUNTDOWN_SECONDS {
            flow.tick();
        }
        // The popup keeps the countdown frame up for a beat after the
        // finish and paints this value through the hold.
        assert_eq!(flow.phase(), PopupPhase::ReadyToEnter);
        assert_eq!(flow.seconds_remaining(), 0);
    }
}
