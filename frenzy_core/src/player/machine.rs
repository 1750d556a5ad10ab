//! PlayerStateMachine - Validated transitions with synchronous listeners

use super::PlayerState;
use crate::config::StateDurations;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Emitted to every subscriber after a state change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateChange {
    pub from: PlayerState,
    pub to: PlayerState,
    pub timestamp: u64,
}

/// Listener invoked on every state change
pub type StateChangeCallback = Box<dyn FnMut(&StateChange) + Send>;

/// Handle returned by [`PlayerStateMachine::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Player state machine with transition validation
///
/// Listeners run synchronously, in subscription order, before `transition`
/// or `force_state` returns. The machine never decides when a timed state
/// ends; it only exposes elapsed time and the configured durations.
pub struct PlayerStateMachine {
    state: PlayerState,
    /// When the current state was entered (ms)
    entered_at: u64,
    durations: StateDurations,
    listeners: Vec<(SubscriptionId, StateChangeCallback)>,
    next_subscription: u64,
}

impl fmt::Debug for PlayerStateMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlayerStateMachine")
            .field("state", &self.state)
            .field("entered_at", &self.entered_at)
            .field("durations", &self.durations)
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl PlayerStateMachine {
    /// Create a machine in Running, entered at `timestamp`
    pub fn new(timestamp: u64) -> Self {
        Self::with_durations(PlayerState::Running, timestamp, StateDurations::default())
    }

    /// Create a machine with a starting state and tuned durations
    pub fn with_durations(initial: PlayerState, timestamp: u64, durations: StateDurations) -> Self {
        PlayerStateMachine {
            state: initial,
            entered_at: timestamp,
            durations,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Current state
    pub fn state(&self) -> PlayerState {
        self.state
    }

    /// When the current state was entered
    pub fn entered_at(&self) -> u64 {
        self.entered_at
    }

    pub fn durations(&self) -> &StateDurations {
        &self.durations
    }

    /// Milliseconds spent in the current state
    pub fn state_time(&self, now: u64) -> u64 {
        now.saturating_sub(self.entered_at)
    }

    /// Configured duration of the current state, if it is a timed state
    pub fn current_duration(&self) -> Option<u64> {
        self.durations.for_state(self.state)
    }

    /// Attempt a table-checked transition
    ///
    /// Returns false and leaves the state untouched when the move is not in
    /// the transition table.
    pub fn transition(&mut self, next: PlayerState, timestamp: u64) -> bool {
        if !self.can_transition(next) {
            tracing::trace!(from = ?self.state, to = ?next, "rejected player transition");
            return false;
        }
        self.apply(next, timestamp);
        true
    }

    /// Check whether `next` is reachable from the current state
    pub fn can_transition(&self, next: PlayerState) -> bool {
        self.state.can_transition_to(next)
    }

    /// Set the state without consulting the table
    pub fn force_state(&mut self, next: PlayerState, timestamp: u64) {
        tracing::debug!(from = ?self.state, to = ?next, timestamp, "forcing player state");
        self.apply(next, timestamp);
    }

    /// Force back to Running at `timestamp`
    pub fn reset(&mut self, timestamp: u64) {
        self.force_state(PlayerState::Running, timestamp);
    }

    fn apply(&mut self, next: PlayerState, timestamp: u64) {
        let change = StateChange {
            from: self.state,
            to: next,
            timestamp,
        };

        self.state = next;
        self.entered_at = timestamp;
        tracing::debug!(from = ?change.from, to = ?change.to, timestamp, "player state changed");

        for (_, listener) in self.listeners.iter_mut() {
            listener(&change);
        }
    }

    /// Register a listener for every future state change
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&StateChange) + Send + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(callback)));
        id
    }

    /// Remove a listener. Returns false if it was already removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        match self.listeners.iter().position(|(sub, _)| *sub == id) {
            Some(index) => {
                self.listeners.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Not staggered, recovering or dead
    pub fn can_act(&self) -> bool {
        self.state.can_act()
    }

    /// Anything but airborne
    pub fn is_grounded(&self) -> bool {
        self.state.is_grounded()
    }

    /// Attacking or blocking
    pub fn is_acting(&self) -> bool {
        self.state.is_acting()
    }
}
