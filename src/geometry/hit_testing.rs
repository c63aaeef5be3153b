use egui::Pos2;

use crate::stroke::StrokeId;
use crate::stroke_store::StrokeStore;

/// Extra slack around a stroke's box when picking it with the pointer
pub const DEFAULT_HIT_TOLERANCE: f32 = 5.0;

/// The top-most stroke under `pos`.
///
/// Later strokes are drawn over earlier ones, so the store is walked from the
/// most recently added stroke down.
pub fn first_hit(store: &StrokeStore, pos: Pos2, tolerance: f32) -> Option<StrokeId> {
    store
        .iter_top_to_bottom()
        .find(|stroke| stroke.hit_test(pos, tolerance))
        .map(|stroke| stroke.id())
}

/// Every stroke under `pos`, top-most first
pub fn all_hits(store: &StrokeStore, pos: Pos2, tolerance: f32) -> Vec<StrokeId> {
    store
        .iter_top_to_bottom()
        .filter(|stroke| stroke.hit_test(pos, tolerance))
        .map(|stroke| stroke.id())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stroke::Stroke;
    use egui::{Color32, pos2};

    fn line(from: Pos2, to: Pos2) -> Stroke {
        let mut stroke = Stroke::new(Color32::BLACK, 2.0, from);
        stroke.add_point(to);
        stroke
    }

    #[test]
    fn top_most_stroke_wins() {
        let mut store = StrokeStore::new();
        let bottom = store.append(line(pos2(0.0, 0.0), pos2(100.0, 100.0)));
        let top = store.append(line(pos2(40.0, 40.0), pos2(60.0, 60.0)));

        assert_eq!(first_hit(&store, pos2(50.0, 50.0), 0.0), Some(top));
        assert_eq!(first_hit(&store, pos2(10.0, 10.0), 0.0), Some(bottom));
        assert_eq!(first_hit(&store, pos2(300.0, 300.0), 0.0), None);
    }

    #[test]
    fn all_hits_are_ordered_top_first() {
        let mut store = StrokeStore::new();
        let a = store.append(line(pos2(0.0, 0.0), pos2(100.0, 100.0)));
        let b = store.append(line(pos2(40.0, 40.0), pos2(60.0, 60.0)));
        store.append(line(pos2(200.0, 200.0), pos2(210.0, 210.0)));

        assert_eq!(all_hits(&store, pos2(50.0, 50.0), 0.0), vec![b, a]);
    }

    #[test]
    fn empty_store_has_no_hits() {
        let store = StrokeStore::new();
        assert!(first_hit(&store, Pos2::ZERO, DEFAULT_HIT_TOLERANCE).is_none());
        assert!(all_hits(&store, Pos2::ZERO, DEFAULT_HIT_TOLERANCE).is_empty());
    }
}
