use egui::{Color32, Painter, Pos2, Rect, Shape, Stroke as EguiStroke, Vec2};

use crate::stroke::Stroke;

/// Backend-agnostic drawing record for one stroke.
///
/// Built fresh from the model on every redraw and never written back.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderStroke {
    pub points: Vec<Pos2>,
    pub color: Color32,
    pub width: f32,
}

impl RenderStroke {
    pub fn from_stroke(stroke: &Stroke) -> Self {
        Self {
            points: stroke.points().to_vec(),
            color: stroke.effective_color(),
            width: stroke.effective_width(),
        }
    }

    /// The egui shape for this stroke with canvas coordinates shifted by `offset`.
    ///
    /// A single point has no segment to stroke, so it becomes a dot.
    pub fn to_shape(&self, offset: Vec2) -> Shape {
        match self.points.as_slice() {
            [] => Shape::Noop,
            [point] => Shape::circle_filled(*point + offset, self.width / 2.0, self.color),
            points => Shape::line(
                points.iter().map(|p| *p + offset).collect(),
                EguiStroke::new(self.width, self.color),
            ),
        }
    }
}

/// Paints the canvas background, border and strokes
#[derive(Debug, Clone)]
pub struct Renderer {
    background: Color32,
    border: EguiStroke,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            background: Color32::WHITE,
            border: EguiStroke::new(1.0, Color32::from_gray(189)),
        }
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw `strokes` bottom-to-top inside `rect`, whose top-left corner is the
    /// canvas origin.
    pub fn render(&self, painter: &Painter, rect: Rect, strokes: &[RenderStroke]) {
        let painter = painter.with_clip_rect(rect);
        painter.rect_filled(rect, 10.0, self.background);

        let offset = rect.min.to_vec2();
        painter.extend(strokes.iter().map(|stroke| stroke.to_shape(offset)));

        painter.rect_stroke(rect, 10.0, self.border);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    fn painter(ctx: &egui::Context, rect: Rect) -> Painter {
        Painter::new(ctx.clone(), egui::LayerId::background(), rect)
    }

    #[test]
    fn test_render_basics() {
        let renderer = Renderer::new();
        let ctx = egui::Context::default();
        let rect = Rect::from_min_size(pos2(0.0, 0.0), vec2(100.0, 100.0));

        let mut stroke = Stroke::new(Color32::RED, 2.0, pos2(10.0, 10.0));
        stroke.add_point(pos2(20.0, 20.0));
        let strokes = vec![
            RenderStroke::from_stroke(&stroke),
            RenderStroke::from_stroke(&Stroke::new(Color32::BLUE, 4.0, pos2(50.0, 50.0))),
        ];

        renderer.render(&painter(&ctx, rect), rect, &strokes);
    }

    #[test]
    fn single_point_is_a_dot() {
        let record = RenderStroke::from_stroke(&Stroke::new(Color32::BLUE, 4.0, pos2(5.0, 5.0)));
        match record.to_shape(vec2(10.0, 0.0)) {
            Shape::Circle(circle) => {
                assert_eq!(circle.center, pos2(15.0, 5.0));
                assert_eq!(circle.radius, 2.0);
                assert_eq!(circle.fill, Color32::BLUE);
            }
            other => panic!("expected a circle, got {other:?}"),
        }
    }

    #[test]
    fn polyline_is_offset_into_screen_space() {
        let mut stroke = Stroke::new(Color32::BLACK, 3.0, pos2(0.0, 0.0));
        stroke.add_point(pos2(10.0, 0.0));
        let record = RenderStroke::from_stroke(&stroke);

        match record.to_shape(vec2(100.0, 50.0)) {
            Shape::Path(path) => {
                assert_eq!(path.points, vec![pos2(100.0, 50.0), pos2(110.0, 50.0)]);
            }
            other => panic!("expected a path, got {other:?}"),
        }
    }

    #[test]
    fn record_uses_selection_style() {
        let mut stroke = Stroke::new(Color32::BLACK, 3.0, pos2(0.0, 0.0));
        stroke.set_selected(true);
        let record = RenderStroke::from_stroke(&stroke);
        assert_eq!(record.color, crate::stroke::SELECTION_COLOR);
        assert_eq!(record.width, 5.0);
    }
}
