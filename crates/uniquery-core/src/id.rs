//! Injectable id generation for groups and conditions.
//!
//! Ids must stay unique for the lifetime of an editor session; centralizing
//! generation behind a trait makes uniqueness one component's property and
//! lets tests supply deterministic ids.

use rand::distributions::Alphanumeric;
use rand::Rng;

/// Source of opaque unique ids.
pub trait IdGenerator {
    /// Produce the next id.
    fn next_id(&mut self) -> String;
}

/// Default generator: millisecond timestamp plus a random alphanumeric
/// suffix. The timestamp part is bumped monotonically so two calls within the
/// same millisecond still differ in the left part.
#[derive(Debug, Default)]
pub struct SessionIdGenerator {
    last_millis: i64,
}

impl SessionIdGenerator {
    /// Create a generator.
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SessionIdGenerator {
    fn next_id(&mut self) -> String {
        let now = chrono::Utc::now().timestamp_millis();
        let millis = if now <= self.last_millis {
            self.last_millis + 1
        } else {
            now
        };
        self.last_millis = millis;

        let suffix: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(6)
            .map(char::from)
            .collect();
        format!("{millis}-{suffix}")
    }
}

/// Deterministic generator for tests: `prefix-1`, `prefix-2`, ...
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: u64,
}

impl SequentialIdGenerator {
    /// Create a generator with the given prefix.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 0,
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> String {
        self.next += 1;
        format!("{}-{}", self.prefix, self.next)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_session_ids_are_unique_under_bursts() {
        let mut gen = SessionIdGenerator::new();
        let ids: HashSet<String> = (0..1000).map(|_| gen.next_id()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_session_id_shape() {
        let mut gen = SessionIdGenerator::new();
        let id = gen.next_id();
        let (millis, suffix) = id.split_once('-').unwrap();
        assert!(millis.parse::<i64>().is_ok());
        assert_eq!(suffix.len(), 6);
    }

    #[test]
    fn test_sequential_ids() {
        let mut gen = SequentialIdGenerator::new("grp");
        assert_eq!(gen.next_id(), "grp-1");
        assert_eq!(gen.next_id(), "grp-2");
    }
}
