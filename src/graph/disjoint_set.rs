use rustc_hash::FxHashMap as HashMap;
use std::{cmp::Ordering, hash::Hash};

/// [Disjoint-set forest](https://en.wikipedia.org/wiki/Disjoint-set_data_structure) with path compression and union by rank.
///
/// Elements are mapped to dense slots on insertion, the forest itself works on slots.
#[derive(Debug, Clone)]
pub struct DisjointSet<T> {
    elements: Vec<T>,
    element_to_slot: HashMap<T, usize>,
    parent: Vec<usize>,
    rank: Vec<u8>,
    set_count: usize,
}

impl<T> Default for DisjointSet<T> {
    fn default() -> Self {
        Self {
            elements: vec![],
            element_to_slot: HashMap::default(),
            parent: vec![],
            rank: vec![],
            set_count: 0,
        }
    }
}

impl<T: Clone + Eq + Hash> DisjointSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let mut element_to_slot = HashMap::default();
        element_to_slot.reserve(capacity);
        Self {
            elements: Vec::with_capacity(capacity),
            element_to_slot,
            parent: Vec::with_capacity(capacity),
            rank: Vec::with_capacity(capacity),
            set_count: 0,
        }
    }

    /// Add `x` as a singleton set. Returns false if `x` was already present, in which case its set is untouched.
    pub fn make_set(&mut self, x: T) -> bool {
        if self.element_to_slot.contains_key(&x) {
            return false;
        }
        self.slot_or_insert(x);
        true
    }

    /// Representative of the set containing `x`, or [None] if `x` was never added.
    pub fn find(&mut self, x: &T) -> Option<T> {
        let slot = *self.element_to_slot.get(x)?;
        let root = self.find_slot(slot);
        Some(self.elements[root].clone())
    }

    /// Merge the sets containing `x` and `y`, adding either as a singleton first if needed.
    ///
    /// Returns false when they were already in the same set, i.e. linking them would close a cycle.
    pub fn union(&mut self, x: &T, y: &T) -> bool {
        let x = self.slot_or_insert(x.clone());
        let y = self.slot_or_insert(y.clone());
        self.union_slots(x, y)
    }

    pub fn same_set(&mut self, x: &T, y: &T) -> bool {
        match (self.element_to_slot.get(x), self.element_to_slot.get(y)) {
            (Some(x), Some(y)) => {
                let (x, y) = (*x, *y);
                self.find_slot(x) == self.find_slot(y)
            }
            _ => false,
        }
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Number of disjoint sets
    pub fn set_count(&self) -> usize {
        self.set_count
    }

    fn slot_or_insert(&mut self, x: T) -> usize {
        if let Some(slot) = self.element_to_slot.get(&x) {
            return *slot;
        }
        let slot = self.elements.len();
        self.element_to_slot.insert(x.clone(), slot);
        self.elements.push(x);
        self.parent.push(slot);
        self.rank.push(0);
        self.set_count += 1;
        slot
    }

    fn find_slot(&mut self, slot: usize) -> usize {
        let mut root = slot;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // Second pass: point everything on the path straight at the root
        let mut current = slot;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    fn union_slots(&mut self, x: usize, y: usize) -> bool {
        let x_root = self.find_slot(x);
        let y_root = self.find_slot(y);
        if x_root == y_root {
            return false;
        }
        match self.rank[x_root].cmp(&self.rank[y_root]) {
            Ordering::Less => self.parent[x_root] = y_root,
            Ordering::Greater => self.parent[y_root] = x_root,
            Ordering::Equal => {
                self.parent[y_root] = x_root;
                self.rank[x_root] += 1;
            }
        }
        self.set_count -= 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn singletons_are_their_own_representative() {
        let mut set = DisjointSet::new();
        for x in 0..4 {
            assert!(set.make_set(x));
        }
        assert!(!set.make_set(2));
        for x in 0..4 {
            assert_eq!(set.find(&x), Some(x));
        }
        assert_eq!(set.set_count(), 4);
        assert_eq!(set.find(&9), None);
    }

    #[test]
    fn union_reports_cycles() {
        let mut set = DisjointSet::new();
        assert!(set.union(&"A", &"B"));
        assert!(set.union(&"B", &"C"));
        assert!(!set.union(&"A", &"C"));
        assert!(set.same_set(&"A", &"C"));
        assert_eq!(set.set_count(), 1);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn union_by_rank_keeps_larger_root() {
        let mut set = DisjointSet::new();
        set.union(&1, &2);
        // {1, 2} has rank 1, so a singleton is attached below its root
        set.union(&3, &1);
        assert_eq!(set.find(&3), Some(1));
        assert_eq!(set.find(&2), Some(1));
    }

    #[test]
    fn find_compresses_paths() {
        let mut set = DisjointSet::new();
        // Build a chain of depth 2: (0 <- 1) <- (2 <- 3)
        set.union(&0, &1);
        set.union(&2, &3);
        set.union(&0, &2);
        assert_eq!(set.parent[3], 2);
        assert_eq!(set.find(&3), Some(0));
        assert_eq!(set.parent[3], 0);
    }

    #[test]
    fn disjoint_sets_stay_apart() {
        let mut set = DisjointSet::with_capacity(4);
        set.union(&0, &1);
        set.union(&2, &3);
        assert!(!set.same_set(&0, &2));
        assert!(!set.same_set(&0, &7));
        assert_eq!(set.set_count(), 2);
        assert!(!set.is_empty());
    }
}
