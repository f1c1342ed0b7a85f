use thiserror::Error;

/// Errors raised by [`TextStore`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The allocator refused to extend the buffer.
    #[error("failed to grow text buffer from {capacity} to {requested} bytes")]
    Allocation { capacity: usize, requested: usize },
}

/// Growable byte storage for the document text.
///
/// Capacity is tracked logically and only ever grows, by a fixed
/// `increment`, when an insertion finds the store full. Deletion never
/// shrinks it. Every byte move in the editor happens here; callers only
/// deal in offsets.
#[derive(Clone, PartialEq, Eq)]
pub struct TextStore {
    text: Vec<u8>,
    capacity: usize,
    increment: usize,
    growths: usize,
}

impl TextStore {
    /// Create an empty store with the given initial capacity and growth
    /// increment. A zero increment is bumped to one so growth always makes
    /// room.
    pub fn new(capacity: usize, increment: usize) -> Self {
        Self {
            text: Vec::with_capacity(capacity),
            capacity,
            increment: increment.max(1),
            growths: 0,
        }
    }

    /// Create a store pre-filled with `bytes`, growing from `capacity` in
    /// whole increments until the content fits.
    pub fn from_bytes(bytes: &[u8], capacity: usize, increment: usize) -> Self {
        let mut store = Self::new(capacity, increment);
        while store.capacity < bytes.len() {
            store.capacity += store.increment;
            store.growths += 1;
        }
        store.text.reserve_exact(store.capacity);
        store.text.extend_from_slice(bytes);
        store
    }

    /// Number of valid bytes.
    pub const fn len(&self) -> usize {
        self.text.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Logical allocated size.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Fixed amount added to the capacity on each growth.
    pub const fn increment(&self) -> usize {
        self.increment
    }

    /// How many times the store has grown since creation.
    pub const fn growth_count(&self) -> usize {
        self.growths
    }

    /// The valid content.
    pub fn as_bytes(&self) -> &[u8] {
        &self.text
    }

    /// Byte at `offset`, if it is within the content.
    pub fn char_at(&self, offset: usize) -> Option<u8> {
        self.text.get(offset).copied()
    }

    pub fn is_newline(&self, offset: usize) -> bool {
        self.char_at(offset) == Some(b'\n')
    }

    pub fn is_tab(&self, offset: usize) -> bool {
        self.char_at(offset) == Some(b'\t')
    }

    pub fn is_space(&self, offset: usize) -> bool {
        self.char_at(offset) == Some(b' ')
    }

    /// Grow by one increment when the store is full.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Allocation`] if the allocator cannot provide
    /// the extra room. The store is left unchanged in that case.
    pub fn grow_if_needed(&mut self) -> Result<(), StoreError> {
        if self.text.len() < self.capacity {
            return Ok(());
        }
        let requested = self.capacity + self.increment;
        self.text
            .try_reserve_exact(requested - self.text.len())
            .map_err(|_| StoreError::Allocation {
                capacity: self.capacity,
                requested,
            })?;
        tracing::debug!(from = self.capacity, to = requested, "text store grew");
        self.capacity = requested;
        self.growths += 1;
        Ok(())
    }

    /// Insert `byte` at `offset`, shifting the tail right by one.
    ///
    /// Offsets past the end are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Allocation`] if growth was needed and failed.
    pub fn insert_at(&mut self, offset: usize, byte: u8) -> Result<(), StoreError> {
        if offset > self.text.len() {
            return Ok(());
        }
        self.grow_if_needed()?;
        self.text.insert(offset, byte);
        Ok(())
    }

    /// Remove the byte at `offset`, shifting the tail left by one.
    ///
    /// Returns `false` (and does nothing) when `offset` is not inside the
    /// content.
    pub fn delete_at(&mut self, offset: usize) -> bool {
        if offset >= self.text.len() {
            return false;
        }
        self.text.remove(offset);
        true
    }
}

impl std::fmt::Debug for TextStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextStore")
            .field("len", &self.text.len())
            .field("capacity", &self.capacity)
            .field("increment", &self.increment)
            .field("growths", &self.growths)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(text: &str) -> TextStore {
        let mut store = TextStore::new(50, 50);
        for (i, b) in text.bytes().enumerate() {
            store.insert_at(i, b).unwrap();
        }
        store
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = TextStore::new(50, 50);
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert_eq!(store.capacity(), 50);
        assert_eq!(store.growth_count(), 0);
    }

    #[test]
    fn test_insert_at_end_appends() {
        let store = store_with("abc");
        assert_eq!(store.as_bytes(), b"abc");
    }

    #[test]
    fn test_insert_at_start_shifts_right() {
        let mut store = store_with("bc");
        store.insert_at(0, b'a').unwrap();
        assert_eq!(store.as_bytes(), b"abc");
    }

    #[test]
    fn test_insert_in_middle() {
        let mut store = store_with("ac");
        store.insert_at(1, b'b').unwrap();
        assert_eq!(store.as_bytes(), b"abc");
    }

    #[test]
    fn test_insert_past_end_is_noop() {
        let mut store = store_with("abc");
        store.insert_at(10, b'x').unwrap();
        assert_eq!(store.as_bytes(), b"abc");
    }

    #[test]
    fn test_delete_at_shifts_left() {
        let mut store = store_with("abc");
        assert!(store.delete_at(1));
        assert_eq!(store.as_bytes(), b"ac");
    }

    #[test]
    fn test_delete_out_of_range_is_noop() {
        let mut store = store_with("abc");
        assert!(!store.delete_at(3));
        assert!(!store.delete_at(usize::MAX));
        assert_eq!(store.as_bytes(), b"abc");
    }

    #[test]
    fn test_delete_on_empty_is_noop() {
        let mut store = TextStore::new(50, 50);
        assert!(!store.delete_at(0));
        assert!(store.is_empty());
    }

    #[test]
    fn test_deleting_never_shrinks_capacity() {
        let mut store = TextStore::new(2, 3);
        for i in 0..4 {
            store.insert_at(i, b'x').unwrap();
        }
        assert_eq!(store.capacity(), 5);
        while store.delete_at(0) {}
        assert_eq!(store.capacity(), 5);
    }

    #[test]
    fn test_growth_happens_only_when_full() {
        let mut store = TextStore::new(50, 50);
        for i in 0..50 {
            store.insert_at(i, b'a').unwrap();
        }
        assert_eq!(store.capacity(), 50);
        assert_eq!(store.growth_count(), 0);

        store.insert_at(50, b'b').unwrap();
        assert_eq!(store.capacity(), 100);
        assert_eq!(store.growth_count(), 1);
        assert_eq!(store.len(), 51);
        assert_eq!(store.char_at(50), Some(b'b'));
    }

    #[test]
    fn test_zero_capacity_grows_on_first_insert() {
        let mut store = TextStore::new(0, 10);
        store.insert_at(0, b'a').unwrap();
        assert_eq!(store.capacity(), 10);
        assert_eq!(store.as_bytes(), b"a");
    }

    #[test]
    fn test_zero_increment_is_bumped() {
        let store = TextStore::new(0, 0);
        assert_eq!(store.increment(), 1);
    }

    #[test]
    fn test_from_bytes_rounds_capacity_up_to_increment() {
        let store = TextStore::from_bytes(&[b'x'; 120], 50, 50);
        assert_eq!(store.len(), 120);
        assert_eq!(store.capacity(), 150);
        assert_eq!(store.growth_count(), 2);
    }

    #[test]
    fn test_from_bytes_keeps_capacity_when_content_fits() {
        let store = TextStore::from_bytes(b"abc", 50, 50);
        assert_eq!(store.capacity(), 50);
        assert_eq!(store.growth_count(), 0);
    }

    #[test]
    fn test_queries_are_bounds_checked() {
        let store = store_with("a\t\n ");
        assert_eq!(store.char_at(0), Some(b'a'));
        assert!(store.is_tab(1));
        assert!(store.is_newline(2));
        assert!(store.is_space(3));
        assert_eq!(store.char_at(4), None);
        assert!(!store.is_newline(4));
        assert!(!store.is_tab(100));
        assert!(!store.is_space(100));
    }

    #[test]
    fn test_allocation_error_message() {
        let err = StoreError::Allocation {
            capacity: 50,
            requested: 100,
        };
        assert_eq!(
            err.to_string(),
            "failed to grow text buffer from 50 to 100 bytes"
        );
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Op {
            Insert(usize, u8),
            Delete(usize),
        }

        fn op() -> impl Strategy<Value = Op> {
            prop_oneof![
                (0..200usize, any::<u8>()).prop_map(|(o, b)| Op::Insert(o, b)),
                (0..200usize).prop_map(Op::Delete),
            ]
        }

        proptest! {
            #[test]
            fn length_never_exceeds_capacity(
                capacity in 0..20usize,
                increment in 1..20usize,
                ops in prop::collection::vec(op(), 0..300),
            ) {
                let mut store = TextStore::new(capacity, increment);
                let mut last_capacity = store.capacity();
                for op in ops {
                    match op {
                        Op::Insert(o, b) => store.insert_at(o, b).unwrap(),
                        Op::Delete(o) => {
                            store.delete_at(o);
                        }
                    }
                    prop_assert!(store.len() <= store.capacity());
                    prop_assert!(store.capacity() >= last_capacity);
                    prop_assert_eq!((store.capacity() - capacity) % increment, 0);
                    last_capacity = store.capacity();
                }
            }

            #[test]
            fn matches_vec_model(ops in prop::collection::vec(op(), 0..300)) {
                let mut store = TextStore::new(5, 7);
                let mut model: Vec<u8> = Vec::new();
                for op in ops {
                    match op {
                        Op::Insert(o, b) => {
                            store.insert_at(o, b).unwrap();
                            if o <= model.len() {
                                model.insert(o, b);
                            }
                        }
                        Op::Delete(o) => {
                            store.delete_at(o);
                            if o < model.len() {
                                model.remove(o);
                            }
                        }
                    }
                }
                prop_assert_eq!(store.as_bytes(), model.as_slice());
            }
        }
    }
}
