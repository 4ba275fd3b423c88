//! Memoized nodes for the dashboard's dataflow graph.
//!
//! A [`Memo`] caches the value computed for its last input key. Reading it
//! with a key equal to the cached one returns the cached value; any other
//! key recomputes. Each node also carries the [`Revision`] at which its
//! value last changed. When a recomputation produces a value equal to the
//! previous one the old revision is kept, so nodes keyed on that revision
//! downstream stay fresh.

/// Monotonic change counter shared by all nodes of one graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Revision(u64);

/// Hands out revisions for a graph.
#[derive(Debug, Default)]
pub struct Runtime {
    current: Revision,
}

impl Runtime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance and return the new revision.
    fn bump(&mut self) -> Revision {
        self.current.0 += 1;
        self.current
    }
}

#[derive(Debug)]
struct Entry<K, V> {
    key: K,
    value: V,
    changed_at: Revision,
}

/// A lazily evaluated, value-checked graph node.
#[derive(Debug)]
pub struct Memo<K, V> {
    entry: Option<Entry<K, V>>,
    recomputes: usize,
}

impl<K, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self {
            entry: None,
            recomputes: 0,
        }
    }
}

impl<K: PartialEq, V: PartialEq> Memo<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the value for `key`, running `compute` only when the key differs
    /// from the cached one. Also returns the revision the value last changed at.
    pub fn get(
        &mut self,
        runtime: &mut Runtime,
        key: K,
        compute: impl FnOnce(&K) -> V,
    ) -> (&V, Revision) {
        let entry = match self.entry.take() {
            Some(entry) if entry.key == key => entry,
            previous => {
                self.recomputes += 1;
                let value = compute(&key);
                let changed_at = match previous {
                    Some(prev) if prev.value == value => prev.changed_at,
                    _ => runtime.bump(),
                };
                Entry {
                    key,
                    value,
                    changed_at,
                }
            }
        };
        let entry = self.entry.insert(entry);
        (&entry.value, entry.changed_at)
    }

    /// How many times the value has been computed.
    pub fn recomputes(&self) -> usize {
        self.recomputes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_key_hits_cache() {
        let mut rt = Runtime::new();
        let mut memo: Memo<u32, u32> = Memo::new();
        let mut calls = 0;

        let (v, r1) = memo.get(&mut rt, 2, |k| {
            calls += 1;
            k * 10
        });
        assert_eq!(*v, 20);
        let (v, r2) = memo.get(&mut rt, 2, |k| {
            calls += 1;
            k * 10
        });
        assert_eq!(*v, 20);
        assert_eq!(r1, r2);
        assert_eq!(calls, 1);
        assert_eq!(memo.recomputes(), 1);
    }

    #[test]
    fn test_changed_key_recomputes_and_bumps() {
        let mut rt = Runtime::new();
        let mut memo: Memo<u32, u32> = Memo::new();
        let (_, r1) = memo.get(&mut rt, 1, |k| k + 1);
        let (v, r2) = memo.get(&mut rt, 5, |k| k + 1);
        assert_eq!(*v, 6);
        assert!(r2 > r1);
        assert_eq!(memo.recomputes(), 2);
    }

    #[test]
    fn test_equal_value_keeps_revision() {
        let mut rt = Runtime::new();
        let mut memo: Memo<i32, bool> = Memo::new();
        let (_, r1) = memo.get(&mut rt, 2, |k| k % 2 == 0);
        let (v, r2) = memo.get(&mut rt, 4, |k| k % 2 == 0);
        assert!(*v);
        assert_eq!(r1, r2);
        assert_eq!(memo.recomputes(), 2);

        let (_, r3) = memo.get(&mut rt, 3, |k| k % 2 == 0);
        assert!(r3 > r2);
    }

    #[test]
    fn test_nodes_share_one_revision_counter() {
        let mut rt = Runtime::new();
        let mut a: Memo<u8, u8> = Memo::new();
        let mut b: Memo<u8, u8> = Memo::new();
        let (_, ra) = a.get(&mut rt, 1, |k| *k);
        let (_, rb) = b.get(&mut rt, 1, |k| *k);
        assert_ne!(ra, rb);
    }
}
