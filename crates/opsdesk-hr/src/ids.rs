//! Employee id generation.

use chrono::Utc;
use uuid::Uuid;

use crate::config::IdStrategy;

/// Produces ids that are unique for the lifetime of the process.
///
/// The caller passes a predicate for ids already in use; the generator keeps
/// drawing until it finds a free one, so seed ids such as `"1"` can never be
/// handed out again.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    strategy: IdStrategy,
    last_timestamp: i64,
}

impl IdGenerator {
    pub fn new(strategy: IdStrategy) -> Self {
        IdGenerator {
            strategy,
            last_timestamp: 0,
        }
    }

    /// Returns a fresh id for which `taken` is false.
    pub fn next_id<F>(&mut self, taken: F) -> String
    where
        F: Fn(&str) -> bool,
    {
        loop {
            let candidate = self.draw();
            if !taken(&candidate) {
                return candidate;
            }
        }
    }

    fn draw(&mut self) -> String {
        match self.strategy {
            IdStrategy::Uuid => Uuid::new_v4().to_string(),
            IdStrategy::Timestamp => {
                let now = Utc::now().timestamp_millis();
                self.last_timestamp = now.max(self.last_timestamp + 1);
                self.last_timestamp.to_string()
            }
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        IdGenerator::new(IdStrategy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_uuid_ids_are_distinct() {
        let mut ids = IdGenerator::new(IdStrategy::Uuid);
        let drawn: HashSet<String> = (0..100).map(|_| ids.next_id(|_| false)).collect();
        assert_eq!(drawn.len(), 100);
    }

    #[test]
    fn test_timestamp_ids_strictly_increase() {
        let mut ids = IdGenerator::new(IdStrategy::Timestamp);
        let drawn: Vec<i64> = (0..50)
            .map(|_| ids.next_id(|_| false).parse().unwrap())
            .collect();
        assert!(drawn.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_skips_taken_ids() {
        let mut ids = IdGenerator::new(IdStrategy::Timestamp);
        let first = ids.next_id(|_| false);
        let blocked: i64 = first.parse::<i64>().unwrap() + 1;
        let blocked = blocked.to_string();

        let second = ids.next_id(|id| id == blocked);
        assert_ne!(second, blocked);
        assert!(second.parse::<i64>().unwrap() > first.parse::<i64>().unwrap());
    }
}
