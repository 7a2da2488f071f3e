//! Correlation id generation
//!
//! Calls built without an explicit id get one from an [`IdGenerator`]. The
//! default is [`UuidGenerator`]; [`SequentialIds`] gives predictable numeric
//! ids. No registry of issued ids is kept.

use crate::types::Id;
use std::sync::atomic::{AtomicI64, Ordering};

/// Source of fresh correlation ids
pub trait IdGenerator: Send + Sync {
    /// Produce the next id
    fn next_id(&self) -> Id;
}

/// Generate a random version 4 UUID
///
/// The result is 36 characters of lowercase hex in 8-4-4-4-12 groups. The
/// version nibble (index 14) is `4` and the variant nibble (index 19) is one
/// of `8`, `9`, `a`, `b`.
///
/// # Examples
///
/// ```rust
/// let id = jrpc_core::uuid();
/// assert_eq!(id.len(), 36);
/// assert_eq!(id.as_bytes()[14], b'4');
/// ```
pub fn uuid() -> String {
    uuid::Uuid::new_v4().hyphenated().to_string()
}

/// Ids as random v4 UUID strings
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> Id {
        Id::String(uuid())
    }
}

/// Monotonically increasing numeric ids
///
/// Starts at 1 by default: a zero id is stripped by
/// [`OmissionPolicy::EmptyValues`](crate::OmissionPolicy::EmptyValues), which
/// would turn the call into a notification on the wire.
#[derive(Debug)]
pub struct SequentialIds {
    next: AtomicI64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: i64) -> Self {
        Self {
            next: AtomicI64::new(first),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> Id {
        Id::from(self.next.fetch_add(1, Ordering::Relaxed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn test_uuid_shape() {
        for _ in 0..64 {
            let id = uuid();
            assert_eq!(id.len(), 36);

            let bytes = id.as_bytes();
            assert_eq!(bytes[14], b'4');
            assert!(matches!(bytes[19], b'8' | b'9' | b'a' | b'b'));

            for (i, c) in id.char_indices() {
                if [8, 13, 18, 23].contains(&i) {
                    assert_eq!(c, '-');
                } else {
                    assert!(c.is_ascii_hexdigit());
                }
            }
        }
    }

    #[test]
    fn test_uuid_generator_ids_differ() {
        let generator = UuidGenerator;
        let ids: HashSet<Id> = (0..100).map(|_| generator.next_id()).collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn test_sequential_ids() {
        let ids = SequentialIds::new();
        assert_eq!(ids.next_id(), Id::from(1));
        assert_eq!(ids.next_id(), Id::from(2));
        assert_eq!(ids.next_id(), Id::from(3));
    }

    #[test]
    fn test_sequential_ids_across_threads() {
        let ids = Arc::new(SequentialIds::starting_at(100));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let ids = ids.clone();
                std::thread::spawn(move || (0..25).map(|_| ids.next_id()).collect::<Vec<_>>())
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(seen.insert(id));
            }
        }
        assert_eq!(seen.len(), 100);
        assert!(seen.contains(&Id::from(100)));
        assert!(seen.contains(&Id::from(199)));
    }
}
