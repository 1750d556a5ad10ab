//! Player state - Combat/movement states and the transition table

mod machine;

pub use machine::{PlayerStateMachine, StateChange, StateChangeCallback, SubscriptionId};

use serde::{Deserialize, Serialize};

/// Player combat/movement state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerState {
    /// On the ground (default auto-runner state)
    Running,
    /// Jumping or falling
    Airborne,
    /// Sword swing in progress
    Attacking,
    /// Shield up
    Blocking,
    /// Recoiling from a failed block or resisted attack
    Staggered,
    /// Getting back up after a stagger
    Recovering,
    Dead,
}

impl PlayerState {
    /// Get all states
    pub fn all() -> &'static [PlayerState] {
        &[
            PlayerState::Running,
            PlayerState::Airborne,
            PlayerState::Attacking,
            PlayerState::Blocking,
            PlayerState::Staggered,
            PlayerState::Recovering,
            PlayerState::Dead,
        ]
    }

    /// States reachable from this one through a validated transition
    pub fn allowed_transitions(self) -> &'static [PlayerState] {
        use PlayerState::*;
        match self {
            Running => &[Airborne, Attacking, Blocking, Staggered, Dead],
            Airborne => &[Running, Attacking, Staggered, Dead],
            Attacking => &[Running, Airborne, Staggered, Dead],
            Blocking => &[Running, Staggered, Dead],
            Staggered => &[Recovering, Dead],
            Recovering => &[Running, Dead],
            Dead => &[],
        }
    }

    /// Check the transition table
    pub fn can_transition_to(self, next: PlayerState) -> bool {
        self.allowed_transitions().contains(&next)
    }

    /// Whether the player may start new actions in this state
    pub fn can_act(self) -> bool {
        !matches!(
            self,
            PlayerState::Staggered | PlayerState::Recovering | PlayerState::Dead
        )
    }

    pub fn is_grounded(self) -> bool {
        self != PlayerState::Airborne
    }

    /// Attacking or blocking
    pub fn is_acting(self) -> bool {
        matches!(self, PlayerState::Attacking | PlayerState::Blocking)
    }

    pub fn is_terminal(self) -> bool {
        self.allowed_transitions().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PlayerState::*;

    #[test]
    fn test_transition_table() {
        assert!(Running.can_transition_to(Airborne));
        assert!(Running.can_transition_to(Blocking));
        assert!(!Running.can_transition_to(Recovering));
        assert!(!Running.can_transition_to(Running));

        assert!(Airborne.can_transition_to(Attacking));
        assert!(!Airborne.can_transition_to(Blocking));

        assert!(Attacking.can_transition_to(Airborne));
        assert!(!Blocking.can_transition_to(Airborne));

        assert!(Staggered.can_transition_to(Recovering));
        assert!(!Staggered.can_transition_to(Running));
        assert!(Recovering.can_transition_to(Running));
        assert!(!Recovering.can_transition_to(Attacking));
    }

    #[test]
    fn test_dead_is_the_only_terminal_state() {
        for &state in PlayerState::all() {
            assert_eq!(state.is_terminal(), state == Dead);
            assert!(!Dead.can_transition_to(state));
            if state != Dead {
                assert!(state.can_transition_to(Dead), "{:?} must reach Dead", state);
            }
        }
    }

    #[test]
    fn test_no_self_loops() {
        for &state in PlayerState::all() {
            assert!(!state.can_transition_to(state));
        }
    }

    #[test]
    fn test_predicates() {
        let acting: Vec<_> = PlayerState::all().iter().filter(|s| s.is_acting()).collect();
        assert_eq!(acting, vec![&Attacking, &Blocking]);

        let helpless: Vec<_> = PlayerState::all().iter().filter(|s| !s.can_act()).collect();
        assert_eq!(helpless, vec![&Staggered, &Recovering, &Dead]);

        assert!(!Airborne.is_grounded());
        assert!(Dead.is_grounded());
    }
}
