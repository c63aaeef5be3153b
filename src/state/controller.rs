use egui::{Color32, Pos2};
use log::{debug, info, trace, warn};

use super::{EditorState, Mode};
use crate::config::CanvasConfig;
use crate::event::{CanvasEvent, Changes};
use crate::geometry::hit_testing::{all_hits, first_hit};
use crate::input::{PointerEvent, PointerEventKind};
use crate::pressure::{PointerSample, SpeedToWidth};
use crate::renderer::RenderStroke;
use crate::stroke::{Stroke, StrokeId};
use crate::stroke_store::StrokeStore;

/// Brush values picked in the toolbar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrushSettings {
    pub color: Color32,
    pub base_width: f32,
    pub pressure_ceiling: f32,
    pub pressure_sensitive: bool,
}

/// What the width slider currently shows and edits
#[derive(Debug, Clone, PartialEq)]
pub struct WidthSlider {
    pub value: f32,
    pub label: &'static str,
    pub range: std::ops::RangeInclusive<f32>,
}

impl WidthSlider {
    pub fn value_text(&self) -> String {
        format!("{:.1}", self.value)
    }
}

/// Owns the strokes and interprets pointer input according to the mode.
///
/// Every entry point returns the [`Changes`] it made so the backend knows
/// when to redraw.
#[derive(Debug, Clone)]
pub struct InteractionController {
    store: StrokeStore,
    mode: Mode,
    state: EditorState,
    selected: Option<StrokeId>,
    brush: BrushSettings,
    speed_mapping: SpeedToWidth,
    hit_tolerance: f32,
    width_range: std::ops::RangeInclusive<f32>,
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new(&CanvasConfig::default())
    }
}

impl InteractionController {
    /// Brush widths from `config` are clamped into its slider range
    pub fn new(config: &CanvasConfig) -> Self {
        let mut controller = Self {
            store: StrokeStore::new(),
            mode: Mode::Draw,
            state: EditorState::Idle,
            selected: None,
            brush: BrushSettings {
                color: config.color,
                base_width: config.base_width,
                pressure_ceiling: config.pressure_ceiling,
                pressure_sensitive: config.pressure_sensitive,
            },
            speed_mapping: config.speed_mapping,
            hit_tolerance: config.hit_tolerance,
            width_range: config.slider_range(),
        };
        controller.set_base_width(config.base_width);
        controller.set_pressure_ceiling(config.pressure_ceiling);
        controller
    }

    pub fn store(&self) -> &StrokeStore {
        &self.store
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn brush(&self) -> BrushSettings {
        self.brush
    }

    pub fn selected_id(&self) -> Option<StrokeId> {
        self.selected
    }

    pub fn selected(&self) -> Option<&Stroke> {
        self.selected.and_then(|id| self.store.get(id))
    }

    /// Delete and scale are only offered for a selection in Select mode
    pub fn can_manipulate(&self) -> bool {
        self.mode == Mode::Select && self.selected.is_some()
    }

    /// Strokes in render order, as the backend should draw them
    pub fn render_list(&self) -> Vec<RenderStroke> {
        self.store
            .iter_bottom_to_top()
            .map(RenderStroke::from_stroke)
            .collect()
    }

    pub fn handle(&mut self, event: PointerEvent) -> Changes {
        match event.kind {
            PointerEventKind::Down => self.pointer_down(event.pos, event.time),
            PointerEventKind::Move => self.pointer_move(event.pos, event.time),
            PointerEventKind::Up => self.pointer_up(),
        }
    }

    pub fn pointer_down(&mut self, pos: Pos2, time: f64) -> Changes {
        let mut changes = Changes::none();
        // A down without a matching up leaves a stale session behind.
        if !self.state.is_idle() {
            changes.extend(self.pointer_up());
        }

        match self.mode {
            Mode::Draw => {
                let width = if self.brush.pressure_sensitive {
                    self.brush.pressure_ceiling
                } else {
                    self.brush.base_width
                };
                let id = self.store.append(Stroke::new(self.brush.color, width, pos));
                let pressure = self
                    .brush
                    .pressure_sensitive
                    .then(|| PointerSample::new(time, pos));
                self.state = EditorState::DrawingStroke { stroke: id, pressure };
                debug!("Started stroke {id} at {pos:?}");
                changes.push(CanvasEvent::StrokeStarted(id));
            }
            Mode::Select => match first_hit(&self.store, pos, self.hit_tolerance) {
                Some(id) => {
                    changes.extend(self.select(Some(id)));
                    self.state = EditorState::DraggingSelection { anchor: pos };
                }
                None => changes.extend(self.select(None)),
            },
            Mode::Erase => {
                if let Some(id) = first_hit(&self.store, pos, self.hit_tolerance) {
                    changes.extend(self.remove_stroke(id));
                }
            }
        }

        changes
    }

    pub fn pointer_move(&mut self, pos: Pos2, time: f64) -> Changes {
        if self.mode == Mode::Erase {
            return self.erase_at(pos);
        }

        let mut changes = Changes::none();
        match self.state {
            EditorState::DrawingStroke { stroke: id, pressure } => {
                let Some(stroke) = self.store.get_mut(id) else {
                    warn!("Active stroke {id} vanished from the store");
                    self.state = EditorState::Idle;
                    return changes;
                };
                stroke.add_point(pos);
                changes.push(CanvasEvent::StrokeExtended(id));

                if let Some(prev) = pressure {
                    let cur = PointerSample::new(time, pos);
                    if cur.time > prev.time {
                        let width = self.speed_mapping.map(
                            prev,
                            cur,
                            self.brush.pressure_ceiling,
                            stroke.base_width(),
                        );
                        trace!("Pressure width {width:.2} for stroke {id}");
                        stroke.set_width(width);
                        changes.push(CanvasEvent::StrokeWidthChanged { id, width });
                        self.state = EditorState::DrawingStroke {
                            stroke: id,
                            pressure: Some(cur),
                        };
                    }
                }
            }
            EditorState::DraggingSelection { anchor } => {
                let delta = pos - anchor;
                match self.selected.and_then(|id| self.store.get_mut(id)) {
                    Some(stroke) => {
                        stroke.translate(delta);
                        changes.push(CanvasEvent::StrokeMoved {
                            id: stroke.id(),
                            delta,
                        });
                        self.state = EditorState::DraggingSelection { anchor: pos };
                    }
                    None => self.state = EditorState::Idle,
                }
            }
            EditorState::Idle => {}
        }
        changes
    }

    pub fn pointer_up(&mut self) -> Changes {
        let mut changes = Changes::none();
        if !self.state.is_idle() {
            trace!("Ending {} session", self.state.name());
        }
        if let EditorState::DrawingStroke { stroke, .. } = self.state {
            debug!("Finished stroke {stroke}");
            changes.push(CanvasEvent::StrokeFinished(stroke));
        }
        self.state = EditorState::Idle;
        changes
    }

    /// Switch mode, ending any session and dropping the selection
    pub fn set_mode(&mut self, mode: Mode) -> Changes {
        if mode == self.mode {
            return Changes::none();
        }

        let mut changes = self.pointer_up();
        changes.extend(self.select(None));
        let old = std::mem::replace(&mut self.mode, mode);
        info!("Mode changed from {} to {}", old.name(), mode.name());
        changes.push(CanvasEvent::ModeChanged { old, new: mode });
        changes
    }

    pub fn delete_selected(&mut self) -> Changes {
        if !self.can_manipulate() {
            return Changes::none();
        }
        match self.selected {
            Some(id) => {
                self.state = EditorState::Idle;
                self.remove_stroke(id)
            }
            None => Changes::none(),
        }
    }

    /// Scale the selected stroke about the center of its bounding box
    pub fn scale_selected(&mut self, factor: f32) -> Changes {
        if !self.can_manipulate() {
            return Changes::none();
        }
        let Some(stroke) = self.selected.and_then(|id| self.store.get_mut(id)) else {
            return Changes::none();
        };

        let center = stroke.center();
        match stroke.scale(factor, center) {
            Ok(()) => {
                let mut changes = Changes::none();
                changes.push(CanvasEvent::StrokeScaled {
                    id: stroke.id(),
                    factor,
                });
                changes
            }
            Err(err) => {
                warn!("Ignoring scale of stroke {}: {err}", stroke.id());
                Changes::none()
            }
        }
    }

    /// New strokes use this color; existing strokes keep theirs
    pub fn set_color(&mut self, color: Color32) {
        self.brush.color = color;
    }

    pub fn set_base_width(&mut self, width: f32) {
        self.brush.base_width = self.clamp_width(width);
    }

    pub fn set_pressure_ceiling(&mut self, width: f32) {
        self.brush.pressure_ceiling = self.clamp_width(width);
    }

    pub fn set_pressure_sensitive(&mut self, enabled: bool) {
        if self.brush.pressure_sensitive != enabled {
            info!("Pressure simulation {}", if enabled { "enabled" } else { "disabled" });
        }
        self.brush.pressure_sensitive = enabled;
    }

    fn pressure_slider_active(&self) -> bool {
        self.brush.pressure_sensitive && self.mode == Mode::Draw
    }

    /// The slider edits the pressure ceiling while pressure drawing is
    /// active, otherwise the fixed base width.
    pub fn width_slider(&self) -> WidthSlider {
        let (value, label) = if self.pressure_slider_active() {
            (self.brush.pressure_ceiling, "Max width")
        } else {
            (self.brush.base_width, "Width")
        };
        WidthSlider {
            value,
            label,
            range: self.width_range.clone(),
        }
    }

    pub fn set_width_slider(&mut self, value: f32) {
        if self.pressure_slider_active() {
            self.set_pressure_ceiling(value);
        } else {
            self.set_base_width(value);
        }
    }

    fn clamp_width(&self, width: f32) -> f32 {
        // Unlike `f32::clamp`, never panics on an inverted range
        width.max(*self.width_range.start()).min(*self.width_range.end())
    }

    fn select(&mut self, id: Option<StrokeId>) -> Changes {
        let old = self.selected;
        if old == id {
            return Changes::none();
        }

        if let Some(stroke) = old.and_then(|old| self.store.get_mut(old)) {
            stroke.set_selected(false);
        }
        self.selected = id.filter(|id| self.store.contains(*id));
        if let Some(stroke) = self.selected.and_then(|new| self.store.get_mut(new)) {
            stroke.set_selected(true);
        }

        debug!("Selection changed from {old:?} to {:?}", self.selected);
        let mut changes = Changes::none();
        changes.push(CanvasEvent::SelectionChanged {
            old,
            new: self.selected,
        });
        changes
    }

    fn remove_stroke(&mut self, id: StrokeId) -> Changes {
        let mut changes = Changes::none();
        if self.store.remove(id).is_none() {
            return changes;
        }
        info!("Removed stroke {id}");

        if self.selected == Some(id) {
            self.selected = None;
            changes.push(CanvasEvent::SelectionChanged {
                old: Some(id),
                new: None,
            });
        }
        if self.state.active_stroke() == Some(id) {
            self.state = EditorState::Idle;
        }
        changes.push(CanvasEvent::StrokeRemoved(id));
        changes
    }

    /// Remove every stroke under `pos`, each at most once
    fn erase_at(&mut self, pos: Pos2) -> Changes {
        let mut changes = Changes::none();
        for id in all_hits(&self.store, pos, self.hit_tolerance) {
            changes.extend(self.remove_stroke(id));
        }
        changes
    }
}
