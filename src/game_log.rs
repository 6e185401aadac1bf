use crate::core::constants::GAME_LOG_CAPACITY;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameLogEntry {
    pub timestamp: i64,
    pub message: String,
}

/// Rolling log of notable game events, capped at 100 entries. Persisted as
/// its own record; battle logs are ephemeral and only summaries land here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameLog {
    entries: VecDeque<GameLogEntry>,
}

impl GameLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, timestamp: i64, message: impl Into<String>) {
        if self.entries.len() >= GAME_LOG_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(GameLogEntry {
            timestamp,
            message: message.into(),
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = &GameLogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_iterate_in_order() {
        let mut log = GameLog::new();
        log.push(1, "began cultivation");
        log.push(2, "slew a Mist Rat");
        let messages: Vec<_> = log.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["began cultivation", "slew a Mist Rat"]);
    }

    #[test]
    fn test_log_caps_at_capacity() {
        let mut log = GameLog::new();
        for i in 0..150 {
            log.push(i, format!("event {}", i));
        }
        assert_eq!(log.len(), GAME_LOG_CAPACITY);
        // Oldest entries were evicted
        assert_eq!(log.iter().next().unwrap().message, "event 50");
        assert_eq!(log.iter().last().unwrap().message, "event 149");
    }
}
