//! Figure registry for managing registered figures.

use std::collections::BTreeMap;

use crate::figure::{Figure, FigureId};

/// Registry for managing all figures in triplot.
///
/// Figures are keyed by their id, assigned in registration order starting
/// at 1. Iteration is in ascending id order, which keeps multi-figure
/// rendering deterministic.
pub struct Registry {
    figures: BTreeMap<FigureId, Figure>,
    next_id: u32,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self {
            figures: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Registers a figure, assigning it the next free id.
    ///
    /// Returns the id the figure was registered under.
    pub fn register(&mut self, mut figure: Figure) -> FigureId {
        let id = FigureId(self.next_id);
        self.next_id += 1;
        figure.set_id(id);
        self.figures.insert(id, figure);
        id
    }

    /// Gets a reference to a figure by id.
    pub fn get(&self, id: FigureId) -> Option<&Figure> {
        self.figures.get(&id)
    }

    /// Gets a mutable reference to a figure by id.
    pub fn get_mut(&mut self, id: FigureId) -> Option<&mut Figure> {
        self.figures.get_mut(&id)
    }

    /// Checks if a figure with the given id exists.
    pub fn contains(&self, id: FigureId) -> bool {
        self.figures.contains_key(&id)
    }

    /// Removes a figure by id.
    pub fn remove(&mut self, id: FigureId) -> Option<Figure> {
        self.figures.remove(&id)
    }

    /// Removes all figures from the registry.
    ///
    /// Id numbering continues from where it left off.
    pub fn clear(&mut self) {
        self.figures.clear();
    }

    /// Returns an iterator over all figures in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Figure> {
        self.figures.values()
    }

    /// Returns a mutable iterator over all figures in ascending id order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Figure> + '_ {
        self.figures.values_mut()
    }

    /// Returns the number of registered figures.
    pub fn len(&self) -> usize {
        self.figures.len()
    }

    /// Returns true if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.figures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_assigns_sequential_ids() {
        let mut registry = Registry::new();
        let a = registry.register(Figure::new("first"));
        let b = registry.register(Figure::new("second"));
        assert_eq!(a, FigureId(1));
        assert_eq!(b, FigureId(2));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_get_and_contains() {
        let mut registry = Registry::new();
        let id = registry.register(Figure::new("fig"));
        assert!(registry.contains(id));
        let fig = registry.get(id).unwrap();
        assert_eq!(fig.title(), "fig");
        assert_eq!(fig.id(), id);
        assert!(!registry.contains(FigureId(99)));
    }

    #[test]
    fn test_remove() {
        let mut registry = Registry::new();
        let id = registry.register(Figure::new("fig"));
        let removed = registry.remove(id);
        assert!(removed.is_some());
        assert!(registry.is_empty());
        assert!(registry.remove(id).is_none());
    }

    #[test]
    fn test_clear_keeps_numbering() {
        let mut registry = Registry::new();
        registry.register(Figure::new("a"));
        registry.register(Figure::new("b"));
        registry.clear();
        assert!(registry.is_empty());
        let c = registry.register(Figure::new("c"));
        assert_eq!(c, FigureId(3));
    }

    #[test]
    fn test_iter_order() {
        let mut registry = Registry::new();
        registry.register(Figure::new("a"));
        registry.register(Figure::new("b"));
        registry.register(Figure::new("c"));
        let ids: Vec<u32> = registry.iter().map(|f| f.id().0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
