//! PlayerSession - One player's input buffer, state machine and combat rules
//!
//! A session is created per player and owns everything that player needs;
//! there are no shared instances. Per frame the caller feeds key presses and
//! calls [`PlayerSession::tick`], which:
//! 1. Ends every timed state whose configured duration has elapsed, so a
//!    late tick settles a whole Staggered -> Recovering -> Running chain
//! 2. Prunes the input buffer
//! 3. Fires buffered actions the state machine currently permits

use crate::combat::{AttackResult, BlockResult, CombatResolver};
use crate::config::FrenzyConstants;
use crate::element::Element;
use crate::input::{InputAction, InputBuffer, KeyBindings};
use crate::player::{PlayerState, PlayerStateMachine, StateChange, SubscriptionId};
use serde::{Deserialize, Serialize};

/// A buffered action that was consumed and acted on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiredAction {
    pub action: InputAction,
    pub state: PlayerState,
    pub timestamp: u64,
}

/// State entered when an action fires
fn target_state(action: InputAction) -> PlayerState {
    match action {
        InputAction::Jump => PlayerState::Airborne,
        InputAction::Attack => PlayerState::Attacking,
        InputAction::Block => PlayerState::Blocking,
    }
}

/// Where a timed state goes once its duration has elapsed. An attack
/// started mid-air falls back to Airborne.
fn expiry_target(state: PlayerState, airborne: bool) -> Option<PlayerState> {
    match state {
        PlayerState::Attacking if airborne => Some(PlayerState::Airborne),
        PlayerState::Attacking | PlayerState::Blocking => Some(PlayerState::Running),
        PlayerState::Staggered => Some(PlayerState::Recovering),
        PlayerState::Recovering => Some(PlayerState::Running),
        PlayerState::Running | PlayerState::Airborne | PlayerState::Dead => None,
    }
}

/// Everything one player owns during a play session
#[derive(Debug)]
pub struct PlayerSession {
    input: InputBuffer,
    machine: PlayerStateMachine,
    combat: CombatResolver,
    bindings: KeyBindings,
    /// Element of the player's sword and shield
    element: Element,
    /// Off the ground since the last jump, including while attacking in the air
    airborne: bool,
}

impl PlayerSession {
    /// Start a session in Running at `timestamp`
    pub fn new(element: Element, constants: &FrenzyConstants, timestamp: u64) -> Self {
        PlayerSession {
            input: InputBuffer::with_windows(constants.input.clone()),
            machine: PlayerStateMachine::with_durations(
                PlayerState::Running,
                timestamp,
                constants.states.clone(),
            ),
            combat: CombatResolver::new(constants.combat.clone()),
            bindings: constants.bindings.clone(),
            element,
            airborne: false,
        }
    }

    pub fn element(&self) -> Element {
        self.element
    }

    /// Swap the player's element (elemental stance change)
    pub fn set_element(&mut self, element: Element) {
        self.element = element;
    }

    pub fn state(&self) -> PlayerState {
        self.machine.state()
    }

    pub fn input(&self) -> &InputBuffer {
        &self.input
    }

    pub fn machine(&self) -> &PlayerStateMachine {
        &self.machine
    }

    /// Whether the player has jumped and not landed yet
    pub fn is_airborne(&self) -> bool {
        self.airborne
    }

    /// Listen for state changes of this player
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&StateChange) + Send + 'static,
    {
        self.machine.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.machine.unsubscribe(id)
    }

    /// Buffer the action bound to `key`. Unbound keys are ignored.
    pub fn press(&mut self, key: &str, now: u64) -> Option<InputAction> {
        let action = self.bindings.action_for(key)?;
        self.input.push(action, now);
        Some(action)
    }

    /// Buffer an action directly
    pub fn push(&mut self, action: InputAction, now: u64) {
        self.input.push(action, now);
    }

    /// Advance the session to `now`
    pub fn tick(&mut self, now: u64) -> Vec<FiredAction> {
        self.expire_timed_state(now);
        self.input.prune(now);
        if self.machine.state().is_terminal() {
            return Vec::new();
        }

        let mut fired = Vec::new();
        for &action in InputAction::all() {
            if let Some(event) = self.try_fire(action, now) {
                fired.push(event);
            }
        }
        fired
    }

    fn expire_timed_state(&mut self, now: u64) {
        loop {
            let state = self.machine.state();
            let (Some(duration), Some(next)) = (
                self.machine.current_duration(),
                expiry_target(state, self.airborne),
            ) else {
                return;
            };
            if self.machine.state_time(now) < duration {
                return;
            }

            // Leave the state at the moment it actually ended
            let ended_at = self.machine.entered_at().saturating_add(duration);
            if !self.machine.transition(next, ended_at) {
                return;
            }
        }
    }

    fn try_fire(&mut self, action: InputAction, now: u64) -> Option<FiredAction> {
        if !self.machine.can_act() || !self.input.has(action, now) {
            return None;
        }
        if action == InputAction::Jump && (self.is_airborne() || !self.machine.is_grounded()) {
            return None;
        }

        let next = target_state(action);
        if !self.machine.can_transition(next) {
            return None;
        }

        self.input.consume(action, now);
        self.machine.transition(next, now);
        if action == InputAction::Jump {
            self.airborne = true;
        }
        tracing::debug!(?action, state = ?next, now, "fired buffered action");

        Some(FiredAction {
            action,
            state: next,
            timestamp: now,
        })
    }

    /// Touch down after a jump. An air attack in progress keeps swinging
    /// and expires to Running. Returns false if the player was not in the air.
    pub fn land(&mut self, now: u64) -> bool {
        if !self.airborne {
            return false;
        }
        self.airborne = false;
        if self.machine.state() == PlayerState::Airborne {
            self.machine.transition(PlayerState::Running, now);
        }
        true
    }

    /// Staggering knocks the player out of the air
    fn stagger(&mut self, now: u64) {
        if self.machine.transition(PlayerState::Staggered, now) {
            self.airborne = false;
        }
    }

    /// Hit an enemy body of `defense` with the player's element.
    /// A resisted hit staggers the player.
    pub fn strike(&mut self, defense: Element, base_damage: Option<u32>, now: u64) -> AttackResult {
        let result = match base_damage {
            Some(damage) => self.combat.attack_with_damage(self.element, defense, damage),
            None => self.combat.attack(self.element, defense),
        };

        if result.attacker_stagger {
            self.stagger(now);
        }
        result
    }

    /// Take an incoming projectile. Blocks with the player's shield when
    /// blocking; otherwise the hit lands in full.
    pub fn receive(&mut self, projectile: Element, damage: u32, now: u64) -> BlockResult {
        let result = if self.machine.state() == PlayerState::Blocking {
            self.combat.block(projectile, self.element, damage)
        } else {
            BlockResult::unblocked(damage)
        };

        if result.stagger {
            self.stagger(now);
        }
        result
    }

    /// Authoritative death signal
    pub fn kill(&mut self, now: u64) {
        self.airborne = false;
        self.machine.force_state(PlayerState::Dead, now);
    }

    /// Level restart: drop pending inputs and run again
    pub fn reset(&mut self, now: u64) {
        self.input.clear();
        self.airborne = false;
        self.machine.reset(now);
    }
}
