//! Disjoint-set forest keyed by a caller-supplied extractor.
//!
//! [`UnionFind`] stores parent pointers in a vector indexed by `key(&element)`,
//! so elements must map to small dense integers (vertex ids, typically). Slots
//! are created lazily: an element is tracked once it has been passed to
//! [`add`](UnionFind::add) or [`union`](UnionFind::union).
//!
//! Union is by size. `find` halves paths on mutating operations; the read-only
//! [`is_connected`](UnionFind::is_connected) walks to the root without
//! rewriting anything.

use std::fmt;

/// A union-find structure over elements of type `T`.
///
/// # Examples
///
/// ```rust
/// use graphscope::utils::UnionFind;
///
/// let mut uf = UnionFind::new(|n: &usize| *n);
/// uf.union(&1, &2);
/// uf.union(&3, &4);
///
/// assert!(uf.is_connected(&1, &2));
/// assert!(!uf.is_connected(&2, &3));
/// assert_eq!(uf.len(), 4);
/// assert_eq!(uf.set_count(), 2);
/// ```
pub struct UnionFind<T, F>
where
    F: Fn(&T) -> usize,
{
    key: F,
    /// Parent slot per key; `None` for keys never tracked
    parent: Vec<Option<usize>>,
    /// Size of the tree rooted at each slot
    size: Vec<usize>,
    tracked: usize,
    sets: usize,
    _marker: std::marker::PhantomData<fn(&T)>,
}

impl<T, F> UnionFind<T, F>
where
    F: Fn(&T) -> usize,
{
    /// Creates an empty structure using `key` to map elements to slots.
    pub fn new(key: F) -> Self {
        UnionFind {
            key,
            parent: Vec::new(),
            size: Vec::new(),
            tracked: 0,
            sets: 0,
            _marker: std::marker::PhantomData,
        }
    }

    /// Tracks `element` as a singleton set. No-op if already tracked.
    pub fn add(&mut self, element: &T) {
        let slot = (self.key)(element);
        self.track(slot);
    }

    /// Merges the sets containing `a` and `b`, tracking either if needed.
    ///
    /// Returns `true` if two distinct sets were merged.
    pub fn union(&mut self, a: &T, b: &T) -> bool {
        let a = (self.key)(a);
        let b = (self.key)(b);
        self.track(a);
        self.track(b);

        let mut root_a = self.find_mut(a);
        let mut root_b = self.find_mut(b);
        if root_a == root_b {
            return false;
        }

        if self.size[root_a] < self.size[root_b] {
            std::mem::swap(&mut root_a, &mut root_b);
        }
        self.parent[root_b] = Some(root_a);
        self.size[root_a] += self.size[root_b];
        self.sets -= 1;
        true
    }

    /// Returns `true` if `a` and `b` belong to the same set.
    ///
    /// An element is always connected to itself, tracked or not. Two distinct
    /// untracked elements are never connected.
    #[must_use]
    pub fn is_connected(&self, a: &T, b: &T) -> bool {
        let a = (self.key)(a);
        let b = (self.key)(b);
        if a == b {
            return true;
        }
        match (self.find(a), self.find(b)) {
            (Some(root_a), Some(root_b)) => root_a == root_b,
            _ => false,
        }
    }

    /// Returns `true` if `element` has been tracked.
    #[must_use]
    pub fn contains(&self, element: &T) -> bool {
        let slot = (self.key)(element);
        matches!(self.parent.get(slot), Some(Some(_)))
    }

    /// Returns the number of tracked elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tracked
    }

    /// Returns `true` if nothing has been tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tracked == 0
    }

    /// Returns the number of disjoint sets among tracked elements.
    #[must_use]
    pub fn set_count(&self) -> usize {
        self.sets
    }

    fn track(&mut self, slot: usize) {
        if slot >= self.parent.len() {
            self.parent.resize(slot + 1, None);
            self.size.resize(slot + 1, 0);
        }
        if self.parent[slot].is_none() {
            self.parent[slot] = Some(slot);
            self.size[slot] = 1;
            self.tracked += 1;
            self.sets += 1;
        }
    }

    fn find(&self, mut slot: usize) -> Option<usize> {
        loop {
            let parent = (*self.parent.get(slot)?)?;
            if parent == slot {
                return Some(slot);
            }
            slot = parent;
        }
    }

    /// Root lookup with path halving. `slot` must be tracked.
    fn find_mut(&mut self, mut slot: usize) -> usize {
        while let Some(parent) = self.parent[slot] {
            if parent == slot {
                break;
            }
            let grandparent = self.parent[parent].unwrap_or(parent);
            self.parent[slot] = Some(grandparent);
            slot = grandparent;
        }
        slot
    }
}

impl<T, F> fmt::Debug for UnionFind<T, F>
where
    F: Fn(&T) -> usize,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnionFind")
            .field("tracked", &self.tracked)
            .field("sets", &self.sets)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> UnionFind<usize, impl Fn(&usize) -> usize> {
        UnionFind::new(|n: &usize| *n)
    }

    #[test]
    fn test_empty() {
        let uf = identity();
        assert!(uf.is_empty());
        assert_eq!(uf.len(), 0);
        assert_eq!(uf.set_count(), 0);
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut uf = identity();
        uf.add(&5);
        uf.add(&5);
        assert_eq!(uf.len(), 1);
        assert_eq!(uf.set_count(), 1);
        assert!(uf.contains(&5));
        assert!(!uf.contains(&4));
    }

    #[test]
    fn test_union_tracks_implicitly() {
        let mut uf = identity();
        assert!(uf.union(&0, &9));
        assert_eq!(uf.len(), 2);
        assert!(uf.contains(&9));
        assert!(uf.is_connected(&9, &0));
    }

    #[test]
    fn test_union_same_set_returns_false() {
        let mut uf = identity();
        assert!(uf.union(&1, &2));
        assert!(uf.union(&2, &3));
        assert!(!uf.union(&1, &3));
        assert_eq!(uf.set_count(), 1);
    }

    #[test]
    fn test_transitive_connectivity() {
        let mut uf = identity();
        for i in 0..10 {
            uf.union(&i, &(i + 1));
        }
        assert!(uf.is_connected(&0, &10));
        assert_eq!(uf.set_count(), 1);
        assert_eq!(uf.len(), 11);
    }

    #[test]
    fn test_self_connected_even_untracked() {
        let uf = identity();
        assert!(uf.is_connected(&3, &3));
        assert!(!uf.is_connected(&3, &4));
    }

    #[test]
    fn test_custom_key() {
        #[derive(Debug)]
        struct Item {
            id: usize,
        }

        let mut uf = UnionFind::new(|item: &Item| item.id);
        let a = Item { id: 0 };
        let b = Item { id: 1 };
        let c = Item { id: 2 };
        uf.union(&a, &b);
        uf.add(&c);

        assert!(uf.is_connected(&a, &b));
        assert!(!uf.is_connected(&a, &c));
        assert_eq!(uf.set_count(), 2);
    }
}
