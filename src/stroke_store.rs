use crate::stroke::{Stroke, StrokeId};

/// All strokes on the canvas in insertion order.
///
/// Insertion order is render order: the last stroke is drawn on top, so hit
/// testing walks the store in reverse.
#[derive(Debug, Default, Clone)]
pub struct StrokeStore {
    strokes: Vec<Stroke>,
}

impl StrokeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a stroke on top of all others.
    ///
    /// A stroke whose id is already stored is ignored.
    pub fn append(&mut self, stroke: Stroke) -> StrokeId {
        let id = stroke.id();
        if self.contains(id) {
            log::warn!("Stroke {id} is already in the store, ignoring append");
            return id;
        }
        self.strokes.push(stroke);
        id
    }

    /// Remove a stroke by identity. Removing an absent stroke is a no-op.
    pub fn remove(&mut self, id: StrokeId) -> Option<Stroke> {
        let index = self.strokes.iter().position(|s| s.id() == id)?;
        Some(self.strokes.remove(index))
    }

    pub fn get(&self, id: StrokeId) -> Option<&Stroke> {
        self.strokes.iter().find(|s| s.id() == id)
    }

    pub fn get_mut(&mut self, id: StrokeId) -> Option<&mut Stroke> {
        self.strokes.iter_mut().find(|s| s.id() == id)
    }

    pub fn contains(&self, id: StrokeId) -> bool {
        self.strokes.iter().any(|s| s.id() == id)
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Render order, oldest first
    pub fn iter_bottom_to_top(&self) -> impl DoubleEndedIterator<Item = &Stroke> + '_ {
        self.strokes.iter()
    }

    /// Hit-test order, most recently added first
    pub fn iter_top_to_bottom(&self) -> impl DoubleEndedIterator<Item = &Stroke> + '_ {
        self.strokes.iter().rev()
    }
}
