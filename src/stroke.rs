use egui::{Color32, Pos2, Rect, Vec2};
use uuid::Uuid;

use crate::error::StrokeError;

/// Color used to render the selected stroke
pub const SELECTION_COLOR: Color32 = Color32::from_rgb(144, 202, 249);

/// Extra width added to a stroke while it is selected
pub const SELECTION_WIDTH_BONUS: f32 = 2.0;

/// Stable identity of a stroke, used by the store and the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StrokeId(Uuid);

impl StrokeId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for StrokeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One continuous freehand line.
///
/// The bounding box is kept equal to the exact min/max of `points` after
/// every mutation, so hit testing never has to walk the polyline.
#[derive(Debug, Clone)]
pub struct Stroke {
    id: StrokeId,
    points: Vec<Pos2>,
    color: Color32,
    base_width: f32,
    bounds: Rect,
    selected: bool,
}

impl Stroke {
    /// Create a stroke holding a single point
    pub fn new(color: Color32, width: f32, first_point: Pos2) -> Self {
        Self {
            id: StrokeId::new(),
            points: vec![first_point],
            color,
            base_width: width,
            bounds: Rect::from_min_max(first_point, first_point),
            selected: false,
        }
    }

    pub fn id(&self) -> StrokeId {
        self.id
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn base_width(&self) -> f32 {
        self.base_width
    }

    /// Tight axis-aligned box around all points
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn center(&self) -> Pos2 {
        self.bounds.center()
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    /// Color the stroke is drawn with, highlighted when selected
    pub fn effective_color(&self) -> Color32 {
        if self.selected {
            SELECTION_COLOR
        } else {
            self.color
        }
    }

    /// Width the stroke is drawn with, thicker when selected
    pub fn effective_width(&self) -> f32 {
        if self.selected {
            self.base_width + SELECTION_WIDTH_BONUS
        } else {
            self.base_width
        }
    }

    pub fn add_point(&mut self, point: Pos2) {
        self.points.push(point);
        self.bounds.extend_with(point);
    }

    pub fn set_width(&mut self, width: f32) {
        self.base_width = width;
    }

    /// Bounding-box hit test.
    ///
    /// The box is grown by `tolerance` plus half the rendered width. This is an
    /// approximation: a point in an empty corner of the box of a curved stroke
    /// still counts as a hit.
    pub fn hit_test(&self, pos: Pos2, tolerance: f32) -> bool {
        if self.points.is_empty() {
            return false;
        }

        let margin = tolerance + self.effective_width() / 2.0;
        self.bounds.expand(margin).contains(pos)
    }

    pub fn translate(&mut self, delta: Vec2) {
        for point in &mut self.points {
            *point += delta;
        }
        self.bounds = self.bounds.translate(delta);
    }

    /// Scale every point about `center`.
    ///
    /// A factor that is not positive and finite is rejected and the stroke
    /// is left untouched.
    pub fn scale(&mut self, factor: f32, center: Pos2) -> Result<(), StrokeError> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(StrokeError::InvalidScaleFactor(factor));
        }

        for point in &mut self.points {
            *point = center + (*point - center) * factor;
        }
        self.bounds = calculate_bounds(&self.points);
        Ok(())
    }
}

/// Exact bounding box of a set of points, `Rect::NOTHING` when empty
pub(crate) fn calculate_bounds(points: &[Pos2]) -> Rect {
    points.iter().fold(Rect::NOTHING, |mut rect, point| {
        rect.extend_with(*point);
        rect
    })
}
