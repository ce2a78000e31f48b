//! Arena-backed doubly linked recency list
//!
//! Nodes live in a `Vec` of slots and link to each other by slot index, so the
//! list owns every entry while the lookup index only holds plain `usize` slots.
//! Freed slots are recycled through a free list. Head is the most recently
//! used entry, tail the least recently used.

/// Null link
const NIL: usize = usize::MAX;

#[derive(Debug)]
struct Node<K, V> {
    key: K,
    value: V,
    prev: usize,
    next: usize,
}

/// Recency-ordered list of key/value entries with O(1) relinking
#[derive(Debug)]
pub(crate) struct RecencyList<K, V> {
    slots: Vec<Option<Node<K, V>>>,
    free: Vec<usize>,
    head: usize,
    tail: usize,
    len: usize,
}

impl<K, V> RecencyList<K, V> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            // one extra slot: a set may briefly exceed capacity before eviction
            slots: Vec::with_capacity(capacity.saturating_add(1)),
            free: Vec::new(),
            head: NIL,
            tail: NIL,
            len: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert a new entry at the head and return its slot
    pub(crate) fn push_front(&mut self, key: K, value: V) -> usize {
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

    /// Promote an entry to the head
    pub(crate) fn move_to_front(&mut self, slot: usize) {
        if self.head == slot || self.node(slot).is_none() {
            return;
        }
        self.unlink(slot);
        self.link_front(slot);
    }

    /// Detach an entry and release its slot
    pub(crate) fn remove(&mut self, slot: usize) -> Option<(K, V)> {
        self.node(slot)?;
        self.unlink(slot);
        let node = self.slots[slot].take()?;
        self.free.push(slot);
        self.len -= 1;
        Some((node.key, node.value))
    }

    /// Detach the least recently used entry
    pub(crate) fn pop_back(&mut self) -> Option<(K, V)> {
        if self.tail == NIL {
            return None;
        }
        self.remove(self.tail)
    }

    pub(crate) fn value(&self, slot: usize) -> Option<&V> {
        self.node(slot).map(|node| &node.value)
    }

    pub(crate) fn value_mut(&mut self, slot: usize) -> Option<&mut V> {
        self.slots
            .get_mut(slot)
            .and_then(Option::as_mut)
            .map(|node| &mut node.value)
    }

    /// Iterate from most to least recently used
    pub(crate) fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            list: self,
            cursor: self.head,
            remaining: self.len,
        }
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = NIL;
        self.tail = NIL;
        self.len = 0;
    }

    /// Verify that forward and backward traversals agree with `len`
    pub(crate) fn is_consistent(&self) -> bool {
        let mut forward = 0;
        let mut prev = NIL;
        let mut cursor = self.head;
        while cursor != NIL {
            let Some(node) = self.node(cursor) else {
                return false;
            };
            if node.prev != prev || forward > self.len {
                return false;
            }
            forward += 1;
            prev = cursor;
            cursor = node.next;
        }
        let occupied = self.slots.iter().filter(|slot| slot.is_some()).count();
        prev == self.tail && forward == self.len && occupied == self.len
    }

    fn node(&self, slot: usize) -> Option<&Node<K, V>> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    fn set_prev(&mut self, slot: usize, prev: usize) {
        if let Some(Some(node)) = self.slots.get_mut(slot) {
            node.prev = prev;
        }
    }

    fn set_next(&mut self, slot: usize, next: usize) {
        if let Some(Some(node)) = self.slots.get_mut(slot) {
            node.next = next;
        }
    }

    fn link_front(&mut self, slot: usize) {
        let old_head = self.head;
        self.set_prev(slot, NIL);
        self.set_next(slot, old_head);
        if old_head == NIL {
            self.tail = slot;
        } else {
            self.set_prev(old_head, slot);
        }
        self.head = slot;
    }

    fn unlink(&mut self, slot: usize) {
        let Some(node) = self.node(slot) else {
            return;
        };
        let (prev, next) = (node.prev, node.next);

        if prev == NIL {
            self.head = next;
        } else {
            self.set_next(prev, next);
        }

        if next == NIL {
            self.tail = prev;
        } else {
            self.set_prev(next, prev);
        }

        self.set_prev(slot, NIL);
        self.set_next(slot, NIL);
    }
}

/// Iterator over `(slot, key, value)` from head to tail
pub(crate) struct Iter<'a, K, V> {
    list: &'a RecencyList<K, V>,
    cursor: usize,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (usize, &'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let slot = self.cursor;
        let node = self.list.node(slot)?;
        self.cursor = node.next;
        self.remaining -= 1;
        Some((slot, &node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}
