//! Match state machine
//!
//! Idle -> Countdown -> Playing -> Ended, with replay/home from Ended and a
//! global reset back to Idle.

use serde::Serialize;

/// Match states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchStatus {
    Idle,
    Countdown,
    Playing,
    Ended,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchAction {
    Start,
    CountdownDone,
    Finish,
    Replay,
    Home,
    Reset,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from: MatchStatus,
    pub to: MatchStatus,
    pub action: MatchAction,
}

/// Match finite state machine
#[derive(Debug, Clone)]
pub struct MatchFsm {
    state: MatchStatus,
}

impl MatchFsm {
    pub fn new() -> Self {
        Self {
            state: MatchStatus::Idle,
        }
    }

    pub fn state(&self) -> MatchStatus {
        self.state
    }

    pub fn can_transition(&self, action: MatchAction) -> bool {
        self.next_state(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: MatchAction) -> TransitionResult {
        let from = self.state;
        match self.next_state(action) {
            Some(to) => {
                self.state = to;
                if from != to {
                    log::info!("Match {from:?} -> {to:?} ({action:?})");
                }
                TransitionResult {
                    success: true,
                    from,
                    to,
                    action,
                }
            }
            None => TransitionResult {
                success: false,
                from,
                to: from,
                action,
            },
        }
    }

    fn next_state(&self, action: MatchAction) -> Option<MatchStatus> {
        match (self.state, action) {
            // Reset works from anywhere
            (_, MatchAction::Reset) => Some(MatchStatus::Idle),

            (MatchStatus::Idle, MatchAction::Start) => Some(MatchStatus::Countdown),

            (MatchStatus::Countdown, MatchAction::CountdownDone) => Some(MatchStatus::Playing),

            (MatchStatus::Playing, MatchAction::Finish) => Some(MatchStatus::Ended),

            (MatchStatus::Ended, MatchAction::Replay) => Some(MatchStatus::Countdown),
            (MatchStatus::Ended, MatchAction::Home) => Some(MatchStatus::Idle),

            _ => None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.state == MatchStatus::Playing
    }

    /// Pointer input is honoured while counting down and while playing
    pub fn accepts_pointer(&self) -> bool {
        matches!(self.state, MatchStatus::Countdown | MatchStatus::Playing)
    }
}

impl Default for MatchFsm {
    fn default() -> Self {
        Self::new()
    }
}
