use egui::Vec2;

use crate::state::Mode;
use crate::stroke::StrokeId;

/// Something the controller changed while handling an input
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasEvent {
    StrokeStarted(StrokeId),
    StrokeExtended(StrokeId),
    StrokeWidthChanged { id: StrokeId, width: f32 },
    StrokeFinished(StrokeId),
    StrokeMoved { id: StrokeId, delta: Vec2 },
    StrokeScaled { id: StrokeId, factor: f32 },
    StrokeRemoved(StrokeId),
    SelectionChanged {
        old: Option<StrokeId>,
        new: Option<StrokeId>,
    },
    ModeChanged { old: Mode, new: Mode },
}

impl CanvasEvent {
    /// Whether the canvas looks different after this event
    pub fn is_visual(&self) -> bool {
        !matches!(self, Self::StrokeFinished(_) | Self::ModeChanged { .. })
    }
}

/// Everything that changed while handling one input, for the backend to act on
#[must_use]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Changes {
    events: Vec<CanvasEvent>,
}

impl Changes {
    pub fn none() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, event: CanvasEvent) {
        self.events.push(event);
    }

    pub(crate) fn extend(&mut self, other: Changes) {
        self.events.extend(other.events);
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn events(&self) -> &[CanvasEvent] {
        &self.events
    }

    pub fn needs_redraw(&self) -> bool {
        self.events.iter().any(CanvasEvent::is_visual)
    }

    /// Ids of the strokes removed, in removal order
    pub fn removed(&self) -> Vec<StrokeId> {
        self.events
            .iter()
            .filter_map(|event| match event {
                CanvasEvent::StrokeRemoved(id) => Some(*id),
                _ => None,
            })
            .collect()
    }
}

impl IntoIterator for Changes {
    type Item = CanvasEvent;
    type IntoIter = std::vec::IntoIter<CanvasEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}
