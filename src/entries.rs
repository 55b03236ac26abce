//! Placed vectors and their letter labels.

use crate::vector::Vec2;

/// Capacity reserved on the first push.
const INITIAL_CAPACITY: usize = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[derive(Clone, Debug, PartialEq)]
pub struct Entry {
    pub vector: Vec2,
    pub color: Rgb,
    pub label: String,
}

/// Letter label for a zero-based index in bijective base-26:
/// 0 → "a", 25 → "z", 26 → "aa", 701 → "zz", 702 → "aaa".
pub fn make_label(index: usize) -> String {
    let mut digits = Vec::new();
    let mut x = index + 1;
    while x > 0 {
        x -= 1;
        digits.push(b'a' + (x % 26) as u8);
        x /= 26;
    }
    digits.reverse();
    digits.into_iter().map(char::from).collect()
}

/// Ordered list of placed vectors. Entries are only ever appended or cleared
/// all at once; clearing also restarts labelling from "a".
#[derive(Debug, Default)]
pub struct EntryList {
    entries: Vec<Entry>,
    next_label: usize,
}

impl EntryList {
    pub fn new() -> EntryList {
        EntryList::default()
    }

    /// Makes room for `want` entries in total. Capacity starts at 16 and
    /// doubles, jumping straight to `want` when doubling is not enough.
    pub fn reserve(&mut self, want: usize) {
        let cap = self.entries.capacity();
        if want <= cap {
            return;
        }
        let new_cap = if cap == 0 { INITIAL_CAPACITY } else { cap * 2 }.max(want);
        self.entries.reserve_exact(new_cap - self.entries.len());
    }

    /// Appends a vector and returns the label it was given.
    pub fn push(&mut self, vector: Vec2, color: Rgb) -> &str {
        self.reserve(self.entries.len() + 1);
        let label = make_label(self.next_label);
        self.next_label += 1;
        self.entries.push(Entry {
            vector,
            color,
            label,
        });
        &self.entries[self.entries.len() - 1].label
    }

    pub fn extend<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = (Vec2, Rgb)>,
        I::IntoIter: ExactSizeIterator,
    {
        let items = items.into_iter();
        self.reserve(self.entries.len() + items.len());
        for (vector, color) in items {
            self.push(vector, color);
        }
    }

    /// Drops every entry, keeping the allocation, and resets the label counter.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.next_label = 0;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[Entry] {
        &self.entries
    }
}

impl<'a> IntoIterator for &'a EntryList {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
