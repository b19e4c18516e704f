//! Recency List Module
//!
//! Arena-backed doubly linked list that orders cache entries by access time.
//! Links are slot indices into a `Vec`, so splicing a node to the front,
//! unlinking it and popping the oldest are all O(1) without raw pointers.

/// Link value meaning "no node".
const NIL: usize = usize::MAX;

#[derive(Debug)]
struct Node<K, V> {
    key: K,
    value: V,
    prev: usize,
    next: usize,
}

// == Recency List ==
/// Orders entries by recency of use.
///
/// - Front (head) = most recently used
/// - Back (tail) = least recently used
///
/// Every entry lives in a slot; the slot index stays stable for the lifetime
/// of the entry, so callers can keep it in a side index (see `LruStore`).
#[derive(Debug)]
pub struct RecencyList<K, V> {
    /// Node storage, `None` marks a free slot
    slots: Vec<Option<Node<K, V>>>,
    /// Free slot indices available for reuse
    free: Vec<usize>,
    head: usize,
    tail: usize,
    len: usize,
}

impl<K, V> Default for RecencyList<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> RecencyList<K, V> {
    // == Constructor ==
    /// Creates a new empty list.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty list with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: NIL,
            tail: NIL,
            len: 0,
        }
    }

    // == Push Front ==
    /// Adds a new entry as the most recently used one and returns its slot.
    pub fn push_front(&mut self, key: K, value: V) -> usize {
        let node = Node {
            key,
            value,
            prev: NIL,
            next: NIL,
        };

        let slot = match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Some(node);
                slot
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        };

        self.link_front(slot);
        self.len += 1;
        slot
    }

    // == Touch ==
    /// Marks the entry in `slot` as most recently used.
    ///
    /// Unknown or free slots are ignored.
    pub fn touch(&mut self, slot: usize) {
        if slot == self.head || !self.is_occupied(slot) {
            return;
        }
        self.unlink(slot);
        self.link_front(slot);
    }

    // == Remove ==
    /// Unlinks the entry in `slot` and frees the slot.
    ///
    /// The relative order of the remaining entries is unchanged.
    pub fn remove(&mut self, slot: usize) -> Option<(K, V)> {
        if !self.is_occupied(slot) {
            return None;
        }
        self.unlink(slot);
        let node = self.slots[slot].take()?;
        self.free.push(slot);
        self.len -= 1;
        Some((node.key, node.value))
    }

    // == Evict Oldest ==
    /// Removes and returns the least recently used entry.
    ///
    /// Returns None if the list is empty.
    pub fn evict_oldest(&mut self) -> Option<(K, V)> {
        if self.tail == NIL {
            return None;
        }
        self.remove(self.tail)
    }

    // == Peek Oldest ==
    /// Returns the least recently used entry without removing it.
    pub fn peek_oldest(&self) -> Option<(&K, &V)> {
        self.node(self.tail).map(|node| (&node.key, &node.value))
    }

    pub fn get(&self, slot: usize) -> Option<&V> {
        self.node(slot).map(|node| &node.value)
    }

    pub fn get_mut(&mut self, slot: usize) -> Option<&mut V> {
        self.slots
            .get_mut(slot)
            .and_then(Option::as_mut)
            .map(|node| &mut node.value)
    }

    // == Iteration ==
    /// Iterates entries from most to least recently used.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            slots: &self.slots,
            cursor: self.head,
            remaining: self.len,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drops every entry and releases all slots.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = NIL;
        self.tail = NIL;
        self.len = 0;
    }

    // == Link Helpers ==
    fn node(&self, slot: usize) -> Option<&Node<K, V>> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    fn is_occupied(&self, slot: usize) -> bool {
        self.node(slot).is_some()
    }

    /// Detaches `slot` from its neighbours, leaving the node in place.
    fn unlink(&mut self, slot: usize) {
        let (prev, next) = match self.node(slot) {
            Some(node) => (node.prev, node.next),
            None => return,
        };

        if prev == NIL {
            self.head = next;
        } else if let Some(node) = self.slots[prev].as_mut() {
            node.next = next;
        }

        if next == NIL {
            self.tail = prev;
        } else if let Some(node) = self.slots[next].as_mut() {
            node.prev = prev;
        }

        if let Some(node) = self.slots[slot].as_mut() {
            node.prev = NIL;
            node.next = NIL;
        }
    }

    /// Links a detached `slot` in front of the current head.
    fn link_front(&mut self, slot: usize) {
        let old_head = self.head;

        if let Some(node) = self.slots[slot].as_mut() {
            node.prev = NIL;
            node.next = old_head;
        }

        if old_head == NIL {
            self.tail = slot;
        } else if let Some(node) = self.slots[old_head].as_mut() {
            node.prev = slot;
        }

        self.head = slot;
    }
}

// == Iterator ==
/// Iterator over `(key, value)` pairs, most recently used first.
pub struct Iter<'a, K, V> {
    slots: &'a [Option<Node<K, V>>],
    cursor: usize,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.slots.get(self.cursor)?.as_ref()?;
        self.cursor = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
