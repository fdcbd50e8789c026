//! Arena-backed doubly linked list with in-place reordering.
//!
//! Every element lives in a slot of a single `Vec`, and the `prev`/`next` links
//! are slot indices rather than pointers. Slots 0 and 1 are the head and tail
//! sentinels: they never hold a value, so every real element always has two
//! neighbours and linking code needs no edge cases. Removed slots are kept on a
//! free list and handed out again by the next [`List::push_front`].

use alloc::vec::Vec;
use core::fmt;

/// Slot index of the head sentinel. Its `next` is the first element.
const HEAD: usize = 0;
/// Slot index of the tail sentinel. Its `prev` is the last element.
const TAIL: usize = 1;

/// Stable reference to an element of a [`List`].
///
/// A handle stays valid until the element it names is removed. After that the
/// slot may be reused, so callers must drop handles of removed elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Handle(usize);

struct Slot<T> {
    /// `None` for the sentinels and for slots on the free list.
    val: Option<T>,
    prev: usize,
    next: usize,
}

impl<T> Slot<T> {
    fn sentinel() -> Self {
        Slot {
            val: None,
            prev: HEAD,
            next: TAIL,
        }
    }
}

/// A doubly linked list stored in an arena of slots.
///
/// The front of the list is the slot after the head sentinel; the back is the
/// slot before the tail sentinel. All operations other than iteration are O(1).
pub(crate) struct List<T> {
    slots: Vec<Slot<T>>,
    free: Vec<usize>,
    len: usize,
}

impl<T> List<T> {
    /// Creates an empty list with room for `cap` elements before reallocating.
    pub(crate) fn with_capacity(cap: usize) -> List<T> {
        let mut slots = Vec::with_capacity(cap.saturating_add(2));
        slots.push(Slot::sentinel());
        slots.push(Slot::sentinel());
        List {
            slots,
            free: Vec::new(),
            len: 0,
        }
    }

    /// Returns the number of elements in the list.
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[allow(dead_code)]
    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn is_occupied(&self, idx: usize) -> bool {
        idx != HEAD
            && idx != TAIL
            && self.slots.get(idx).map_or(false, |slot| slot.val.is_some())
    }

    /// Unlinks `idx` from its neighbours. The slot's own links are left stale.
    fn detach(&mut self, idx: usize) {
        let (prev, next) = (self.slots[idx].prev, self.slots[idx].next);
        self.slots[prev].next = next;
        self.slots[next].prev = prev;
    }

    /// Links `idx` directly after the head sentinel.
    fn attach_front(&mut self, idx: usize) {
        let first = self.slots[HEAD].next;
        self.slots[idx].prev = HEAD;
        self.slots[idx].next = first;
        self.slots[first].prev = idx;
        self.slots[HEAD].next = idx;
    }

    /// Inserts `val` at the front and returns its handle.
    pub(crate) fn push_front(&mut self, val: T) -> Handle {
        let idx = match self.free.pop() {
            Some(idx) => {
                self.slots[idx].val = Some(val);
                idx
            }
            None => {
                self.slots.push(Slot {
                    val: Some(val),
                    prev: HEAD,
                    next: TAIL,
                });
                self.slots.len() - 1
            }
        };
        self.attach_front(idx);
        self.len += 1;
        Handle(idx)
    }

    /// Moves the element named by `handle` to the front.
    ///
    /// Returns `false` if the handle does not name a live element.
    pub(crate) fn move_to_front(&mut self, handle: Handle) -> bool {
        let idx = handle.0;
        if !self.is_occupied(idx) {
            return false;
        }
        if self.slots[HEAD].next != idx {
            self.detach(idx);
            self.attach_front(idx);
        }
        true
    }

    /// Removes the element named by `handle` and returns its value.
    pub(crate) fn remove(&mut self, handle: Handle) -> Option<T> {
        let idx = handle.0;
        if !self.is_occupied(idx) {
            return None;
        }
        self.detach(idx);
        let val = self.slots[idx].val.take();
        self.free.push(idx);
        self.len -= 1;
        val
    }

    /// Returns the handle of the first element, if any.
    #[allow(dead_code)]
    pub(crate) fn front(&self) -> Option<Handle> {
        let first = self.slots[HEAD].next;
        (first != TAIL).then_some(Handle(first))
    }

    /// Returns the handle of the last element, if any.
    pub(crate) fn back(&self) -> Option<Handle> {
        let last = self.slots[TAIL].prev;
        (last != HEAD).then_some(Handle(last))
    }

    /// Removes the last element and returns its value.
    pub(crate) fn pop_back(&mut self) -> Option<T> {
        let handle = self.back()?;
        self.remove(handle)
    }

    pub(crate) fn get(&self, handle: Handle) -> Option<&T> {
        self.slots.get(handle.0)?.val.as_ref()
    }

    pub(crate) fn get_mut(&mut self, handle: Handle) -> Option<&mut T> {
        self.slots.get_mut(handle.0)?.val.as_mut()
    }

    /// Iterates from front to back.
    pub(crate) fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.slots[HEAD].next,
            remaining: self.len,
        }
    }

    /// Number of slots ever allocated, sentinels included.
    #[cfg(test)]
    pub(crate) fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Walks the list front to back and checks every link.
    #[cfg(test)]
    pub(crate) fn assert_links(&self) {
        let mut seen = 0;
        let mut prev = HEAD;
        let mut cur = self.slots[HEAD].next;
        while cur != TAIL {
            assert!(self.is_occupied(cur), "linked slot {} holds no value", cur);
            assert_eq!(self.slots[cur].prev, prev, "broken back link at {}", cur);
            prev = cur;
            cur = self.slots[cur].next;
            seen += 1;
            assert!(seen <= self.len, "cycle in recency list");
        }
        assert_eq!(self.slots[TAIL].prev, prev);
        assert_eq!(seen, self.len);
        assert_eq!(self.slots.len(), self.len + self.free.len() + 2);
    }
}

impl<T> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("List")
            .field("len", &self.len)
            .field("slots", &self.slots.len())
            .field("free", &self.free.len())
            .finish()
    }
}

/// Front-to-back iterator over a [`List`].
pub(crate) struct Iter<'a, T> {
    list: &'a List<T>,
    cursor: usize,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.cursor == TAIL {
            return None;
        }
        let slot = &self.list.slots[self.cursor];
        self.cursor = slot.next;
        self.remaining -= 1;
        slot.val.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            list: self.list,
            cursor: self.cursor,
            remaining: self.remaining,
        }
    }
}
