//! InputBuffer - Time-windowed queue of recent inputs

use super::InputAction;
use crate::config::InputConstants;
use serde::{Deserialize, Serialize};

/// An input waiting to be consumed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BufferedInput {
    pub action: InputAction,
    /// Time of the input in milliseconds
    pub timestamp: u64,
}

impl BufferedInput {
    /// Milliseconds since the input arrived. Inputs stamped after `now` have age 0.
    pub fn age(&self, now: u64) -> u64 {
        now.saturating_sub(self.timestamp)
    }
}

/// Input buffer for one player
///
/// Entries are kept in arrival order. `has` and `consume` always check the
/// action's own window; `prune` only drops entries older than the largest
/// window, so an expired entry may linger until then without ever matching.
#[derive(Debug, Clone, Default)]
pub struct InputBuffer {
    entries: Vec<BufferedInput>,
    windows: InputConstants,
}

impl InputBuffer {
    /// Create a buffer with default windows
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer with tuned windows
    pub fn with_windows(windows: InputConstants) -> Self {
        InputBuffer {
            entries: Vec::new(),
            windows,
        }
    }

    pub fn windows(&self) -> &InputConstants {
        &self.windows
    }

    /// Record an input. No deduplication, no capacity limit.
    pub fn push(&mut self, action: InputAction, timestamp: u64) {
        self.entries.push(BufferedInput { action, timestamp });
    }

    fn is_live(&self, input: &BufferedInput, action: InputAction, now: u64) -> bool {
        input.action == action && input.age(now) <= self.windows.window(action)
    }

    /// Check whether an action is buffered and still within its window
    pub fn has(&self, action: InputAction, now: u64) -> bool {
        self.entries.iter().any(|input| self.is_live(input, action, now))
    }

    /// Remove the earliest live entry for an action
    ///
    /// Returns true if an entry was consumed.
    pub fn consume(&mut self, action: InputAction, now: u64) -> bool {
        let index = self
            .entries
            .iter()
            .position(|input| self.is_live(input, action, now));

        match index {
            Some(index) => {
                let input = self.entries.remove(index);
                tracing::trace!(?action, timestamp = input.timestamp, now, "consumed buffered input");
                true
            }
            None => false,
        }
    }

    /// Drop entries older than the largest window
    pub fn prune(&mut self, now: u64) {
        let max_window = self.windows.max_window();
        self.entries.retain(|input| input.age(now) <= max_window);
    }

    /// Remove everything
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Oldest entry of any action
    pub fn peek(&self) -> Option<&BufferedInput> {
        self.entries.first()
    }

    /// Number of stored entries, live or not
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over stored entries in arrival order
    pub fn iter(&self) -> impl Iterator<Item = &BufferedInput> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use InputAction::*;

    #[test]
    fn test_window_boundary_is_inclusive() {
        let mut buffer = InputBuffer::new();
        buffer.push(Jump, 0);

        assert!(buffer.has(Jump, 149));
        assert!(buffer.has(Jump, 150));
        assert!(!buffer.has(Jump, 151));
    }

    #[test]
    fn test_windows_are_per_action() {
        let mut buffer = InputBuffer::new();
        buffer.push(Attack, 0);
        buffer.push(Jump, 0);

        assert!(!buffer.has(Attack, 120));
        assert!(buffer.has(Jump, 120));
        assert!(!buffer.has(Block, 0));
    }

    #[test]
    fn test_consume_removes_exactly_one() {
        let mut buffer = InputBuffer::new();
        buffer.push(Attack, 10);

        assert!(buffer.consume(Attack, 50));
        assert!(!buffer.consume(Attack, 50));
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_consume_is_fifo_per_action() {
        let mut buffer = InputBuffer::new();
        buffer.push(Block, 0);
        buffer.push(Attack, 10);
        buffer.push(Attack, 20);

        assert!(buffer.consume(Attack, 30));
        let remaining: Vec<_> = buffer.iter().copied().collect();
        assert_eq!(
            remaining,
            vec![
                BufferedInput { action: Block, timestamp: 0 },
                BufferedInput { action: Attack, timestamp: 20 },
            ]
        );
    }

    #[test]
    fn test_consume_skips_expired_entries() {
        let mut buffer = InputBuffer::new();
        buffer.push(Attack, 0);
        buffer.push(Attack, 100);

        // First entry is out of its 100ms window at t=150
        assert!(buffer.consume(Attack, 150));
        assert_eq!(buffer.len(), 1);
        assert_eq!(buffer.peek().map(|i| i.timestamp), Some(0));
    }

    #[test]
    fn test_consume_miss_leaves_buffer_untouched() {
        let mut buffer = InputBuffer::new();
        buffer.push(Jump, 0);
        assert!(!buffer.consume(Attack, 0));
        assert!(!buffer.consume(Jump, 500));
        assert_eq!(buffer.len(), 1);
    }

    #[test]
    fn test_prune_uses_largest_window() {
        let mut buffer = InputBuffer::new();
        buffer.push(Attack, 0);
        buffer.push(Jump, 100);

        // Attack expired at 101 but survives until the 150ms global threshold
        buffer.prune(120);
        assert_eq!(buffer.len(), 2);
        assert!(!buffer.has(Attack, 120));

        buffer.prune(151);
        assert_eq!(buffer.len(), 1);
        assert_eq!(buffer.peek().map(|i| i.action), Some(Jump));
    }

    #[test]
    fn test_future_timestamps_count_as_fresh() {
        let mut buffer = InputBuffer::new();
        buffer.push(Block, 500);
        assert!(buffer.has(Block, 400));
        buffer.prune(0);
        assert_eq!(buffer.len(), 1);
    }

    #[test]
    fn test_peek_and_clear() {
        let mut buffer = InputBuffer::new();
        assert!(buffer.peek().is_none());

        buffer.push(Block, 5);
        buffer.push(Jump, 6);
        assert_eq!(buffer.peek(), Some(&BufferedInput { action: Block, timestamp: 5 }));
        assert_eq!(buffer.len(), 2);

        buffer.clear();
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_custom_windows() {
        let mut buffer = InputBuffer::with_windows(InputConstants {
            jump_buffer_ms: 50,
            attack_buffer_ms: 300,
            block_buffer_ms: 10,
        });
        buffer.push(Attack, 0);
        buffer.push(Jump, 0);
        assert!(buffer.has(Attack, 300));
        assert!(!buffer.has(Jump, 51));

        buffer.prune(301);
        assert!(buffer.is_empty());
    }
}
