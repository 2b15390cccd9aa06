//! Fixed-capacity bitset of selected slots.

use crate::blocks::Slot;
use crate::input::{SelectMode, SlotRange};
use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::fmt;

const WORD_BITS: usize = u64::BITS as usize;

/// The committed selection of one column.
///
/// Capacity is the column's slot count and never changes. Membership and
/// toggling are O(1); iteration is always ascending.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SlotSet {
    words: Box<[u64]>,
    capacity: u16,
}

impl SlotSet {
    pub fn new(capacity: u16) -> Self {
        let words = (capacity as usize).div_ceil(WORD_BITS);
        Self {
            words: vec![0; words].into_boxed_slice(),
            capacity,
        }
    }

    /// Build from indices; anything outside the capacity is dropped.
    pub fn from_slots<I>(capacity: u16, slots: I) -> Self
    where
        I: IntoIterator<Item = Slot>,
    {
        let mut set = Self::new(capacity);
        for slot in slots {
            set.insert(slot);
        }
        set
    }

    #[inline]
    pub fn capacity(&self) -> u16 {
        self.capacity
    }

    #[inline]
    fn locate(slot: Slot) -> (usize, u64) {
        let i = slot.index() as usize;
        (i / WORD_BITS, 1u64 << (i % WORD_BITS))
    }

    #[inline]
    pub fn contains(&self, slot: Slot) -> bool {
        if slot.index() >= self.capacity {
            return false;
        }
        let (word, bit) = Self::locate(slot);
        self.words[word] & bit != 0
    }

    /// Returns true if the slot was newly added.
    pub fn insert(&mut self, slot: Slot) -> bool {
        if slot.index() >= self.capacity {
            return false;
        }
        let (word, bit) = Self::locate(slot);
        let was_set = self.words[word] & bit != 0;
        self.words[word] |= bit;
        !was_set
    }

    /// Returns true if the slot was present.
    pub fn remove(&mut self, slot: Slot) -> bool {
        if slot.index() >= self.capacity {
            return false;
        }
        let (word, bit) = Self::locate(slot);
        let was_set = self.words[word] & bit != 0;
        self.words[word] &= !bit;
        was_set
    }

    /// Flip membership; returns the new membership.
    pub fn toggle(&mut self, slot: Slot) -> bool {
        if self.contains(slot) {
            self.remove(slot);
            false
        } else {
            self.insert(slot)
        }
    }

    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|w| *w == 0)
    }

    pub fn iter(&self) -> impl Iterator<Item = Slot> + '_ {
        (0..self.capacity)
            .map(Slot)
            .filter(move |slot| self.contains(*slot))
    }

    /// Ascending raw indices, the serialized form.
    pub fn to_vec(&self) -> Vec<u16> {
        self.iter().map(Slot::index).collect()
    }

    /// The set that results from applying `mode` over `range`.
    ///
    /// `Select` is a union, `Deselect` a set difference.
    pub fn applied(&self, mode: SelectMode, range: SlotRange) -> SlotSet {
        let mut next = self.clone();
        for slot in range.iter() {
            match mode {
                SelectMode::Select => next.insert(slot),
                SelectMode::Deselect => next.remove(slot),
            };
        }
        next
    }

    /// Number of slots in `range` whose membership `mode` would flip.
    pub fn changes_under(&self, mode: SelectMode, range: SlotRange) -> usize {
        range
            .iter()
            .filter(|slot| mode.would_change(self.contains(*slot)))
            .count()
    }
}

impl fmt::Debug for SlotSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(Slot::index)).finish()
    }
}

impl Serialize for SlotSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for slot in self.iter() {
            seq.serialize_element(&slot.index())?;
        }
        seq.end()
    }
}
