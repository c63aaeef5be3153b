use egui::{Color32, Pos2, Rect, Vec2, pos2};
use sketch_canvas::{Stroke, StrokeError, StrokeStore};

const EPS: f32 = 1e-4;

fn approx(a: Pos2, b: Pos2) -> bool {
    (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
}

fn approx_rect(a: Rect, b: Rect) -> bool {
    approx(a.min, b.min) && approx(a.max, b.max)
}

fn zigzag() -> Stroke {
    let mut stroke = Stroke::new(Color32::RED, 2.0, pos2(10.0, 10.0));
    for point in [
        pos2(30.0, -5.0),
        pos2(-12.5, 40.0),
        pos2(22.0, 18.0),
        pos2(7.0, 55.5),
    ] {
        stroke.add_point(point);
    }
    stroke
}

#[test]
fn test_new_stroke_has_one_point() {
    let stroke = Stroke::new(Color32::BLUE, 3.0, pos2(4.0, 7.0));

    assert_eq!(stroke.points(), &[pos2(4.0, 7.0)]);
    assert_eq!(stroke.bounds(), Rect::from_min_max(pos2(4.0, 7.0), pos2(4.0, 7.0)));
    assert_eq!(stroke.color(), Color32::BLUE);
    assert_eq!(stroke.base_width(), 3.0);
    assert!(!stroke.is_selected());
}

#[test]
fn test_bounds_track_every_added_point() {
    let mut stroke = Stroke::new(Color32::BLACK, 1.0, pos2(0.0, 0.0));
    let samples = [
        pos2(5.0, -3.0),
        pos2(-8.0, 2.0),
        pos2(1.0, 12.0),
        pos2(3.0, 3.0),
    ];

    let mut seen = vec![pos2(0.0, 0.0)];
    for point in samples {
        stroke.add_point(point);
        seen.push(point);

        let min_x = seen.iter().map(|p| p.x).fold(f32::INFINITY, f32::min);
        let max_x = seen.iter().map(|p| p.x).fold(f32::NEG_INFINITY, f32::max);
        let min_y = seen.iter().map(|p| p.y).fold(f32::INFINITY, f32::min);
        let max_y = seen.iter().map(|p| p.y).fold(f32::NEG_INFINITY, f32::max);
        assert_eq!(
            stroke.bounds(),
            Rect::from_min_max(pos2(min_x, min_y), pos2(max_x, max_y))
        );
    }
}

#[test]
fn test_translate_and_back_restores_stroke() {
    let mut stroke = zigzag();
    let original_points = stroke.points().to_vec();
    let original_bounds = stroke.bounds();

    stroke.translate(Vec2::new(13.25, -7.5));
    assert!(approx(stroke.points()[0], pos2(23.25, 2.5)));
    assert!(approx_rect(
        stroke.bounds(),
        original_bounds.translate(Vec2::new(13.25, -7.5))
    ));

    stroke.translate(Vec2::new(-13.25, 7.5));
    for (moved, original) in stroke.points().iter().zip(&original_points) {
        assert!(approx(*moved, *original));
    }
    assert!(approx_rect(stroke.bounds(), original_bounds));
}

#[test]
fn test_scale_and_inverse_restores_stroke() {
    let mut stroke = zigzag();
    let original_points = stroke.points().to_vec();
    let center = stroke.center();

    stroke.scale(2.5, center).unwrap();
    assert!(approx(stroke.center(), center));
    assert!((stroke.bounds().width() - 2.5 * (30.0 + 12.5)).abs() < EPS);

    stroke.scale(1.0 / 2.5, center).unwrap();
    for (scaled, original) in stroke.points().iter().zip(&original_points) {
        assert!(approx(*scaled, *original));
    }
}

#[test]
fn test_scale_recomputes_bounds_exactly() {
    let mut stroke = Stroke::new(Color32::BLACK, 1.0, pos2(0.0, 0.0));
    stroke.add_point(pos2(10.0, 20.0));

    stroke.scale(0.5, pos2(0.0, 0.0)).unwrap();

    assert_eq!(stroke.points(), &[pos2(0.0, 0.0), pos2(5.0, 10.0)]);
    assert_eq!(stroke.bounds(), Rect::from_min_max(pos2(0.0, 0.0), pos2(5.0, 10.0)));
}

#[test]
fn test_invalid_scale_factor_is_rejected() {
    let mut stroke = zigzag();
    let before = stroke.points().to_vec();
    let bounds = stroke.bounds();

    for factor in [0.0, -1.0, f32::NAN, f32::INFINITY] {
        let center = stroke.center();
        assert!(matches!(
            stroke.scale(factor, center),
            Err(StrokeError::InvalidScaleFactor(_))
        ));
    }
    assert_eq!(stroke.points(), before.as_slice());
    assert_eq!(stroke.bounds(), bounds);
}

#[test]
fn test_hit_test_uses_tolerance_and_half_width() {
    let mut stroke = Stroke::new(Color32::BLACK, 4.0, pos2(10.0, 10.0));
    stroke.add_point(pos2(20.0, 20.0));

    // Own first point, zero tolerance
    assert!(stroke.hit_test(pos2(10.0, 10.0), 0.0));
    // Inside the box but away from the line still counts
    assert!(stroke.hit_test(pos2(19.0, 11.0), 0.0));
    // Margin is tolerance + width / 2 = 5 + 2
    assert!(stroke.hit_test(pos2(27.0, 15.0), 5.0));
    assert!(!stroke.hit_test(pos2(27.5, 15.0), 5.0));
    assert!(!stroke.hit_test(pos2(15.0, 2.5), 5.0));
}

#[test]
fn test_far_points_miss() {
    let stroke = zigzag();
    let bounds = stroke.bounds();
    let tolerance = 5.0;
    let reach = bounds.width().max(bounds.height()) + tolerance + stroke.base_width() / 2.0 + 1.0;

    assert!(!stroke.hit_test(pos2(bounds.max.x + reach, bounds.center().y), tolerance));
    assert!(!stroke.hit_test(pos2(bounds.center().x, bounds.min.y - reach), tolerance));
}

#[test]
fn test_set_width_changes_base_width() {
    let mut stroke = Stroke::new(Color32::BLACK, 3.0, pos2(0.0, 0.0));
    stroke.set_width(8.0);
    assert_eq!(stroke.base_width(), 8.0);
    assert_eq!(stroke.effective_width(), 8.0);
}

#[test]
fn test_store_keeps_insertion_order() {
    let mut store = StrokeStore::new();
    let a = store.append(Stroke::new(Color32::BLACK, 1.0, pos2(0.0, 0.0)));
    let b = store.append(Stroke::new(Color32::BLACK, 1.0, pos2(1.0, 1.0)));
    let c = store.append(Stroke::new(Color32::BLACK, 1.0, pos2(2.0, 2.0)));

    let render: Vec<_> = store.iter_bottom_to_top().map(Stroke::id).collect();
    let picking: Vec<_> = store.iter_top_to_bottom().map(Stroke::id).collect();
    assert_eq!(render, vec![a, b, c]);
    assert_eq!(picking, vec![c, b, a]);
}

#[test]
fn test_store_remove_is_idempotent() {
    let mut store = StrokeStore::new();
    let a = store.append(Stroke::new(Color32::BLACK, 1.0, pos2(0.0, 0.0)));
    let b = store.append(Stroke::new(Color32::BLACK, 1.0, pos2(1.0, 1.0)));

    assert_eq!(store.remove(a).map(|s| s.id()), Some(a));
    assert!(store.remove(a).is_none());
    assert_eq!(store.len(), 1);
    assert!(store.contains(b));
}

#[test]
fn test_store_ignores_duplicate_append() {
    let mut store = StrokeStore::new();
    let stroke = Stroke::new(Color32::BLACK, 1.0, pos2(0.0, 0.0));
    let id = store.append(stroke.clone());

    assert_eq!(store.append(stroke), id);
    assert_eq!(store.len(), 1);
}
