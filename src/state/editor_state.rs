//! The gesture state machine for the canvas.
//!
//! A session runs from pointer-down to pointer-up. At most one session is
//! open at a time, which the enum makes structural:
//!
//! ```text
//!               pointer-down (Draw)            pointer-up
//!   ┌──────┐ ───────────────────────► DrawingStroke ─────────┐
//!   │ Idle │                                                 │
//!   └──────┘ ───────────────────────► DraggingSelection ─────┤
//!      ▲      pointer-down (Select, hit)                     │
//!      └─────────────────────────────────────────────────────┘
//! ```
//!
//! Erase mode never leaves `Idle`: every event is a standalone action.

use egui::Pos2;

use crate::pressure::PointerSample;
use crate::stroke::StrokeId;

/// Which behavior pointer input drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Draw,
    Select,
    Erase,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Draw, Mode::Select, Mode::Erase];

    pub fn name(self) -> &'static str {
        match self {
            Mode::Draw => "Draw",
            Mode::Select => "Select",
            Mode::Erase => "Erase",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Mode::Draw => "✏",
            Mode::Select => "👆",
            Mode::Erase => "⌫",
        }
    }
}

/// The open interaction session, if any
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum EditorState {
    #[default]
    Idle,
    /// A stroke is being drawn
    DrawingStroke {
        stroke: StrokeId,
        /// Last sample used for speed-based width, only with pressure on
        pressure: Option<PointerSample>,
    },
    /// The selected stroke follows the pointer
    DraggingSelection {
        /// Pointer position at the previous event of the drag
        anchor: Pos2,
    },
}

impl EditorState {
    pub fn is_idle(&self) -> bool {
        matches!(self, EditorState::Idle)
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self, EditorState::DrawingStroke { .. })
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, EditorState::DraggingSelection { .. })
    }

    /// The stroke being drawn, if a drawing session is open
    pub fn active_stroke(&self) -> Option<StrokeId> {
        match self {
            EditorState::DrawingStroke { stroke, .. } => Some(*stroke),
            _ => None,
        }
    }

    pub fn drag_anchor(&self) -> Option<Pos2> {
        match self {
            EditorState::DraggingSelection { anchor } => Some(*anchor),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            EditorState::Idle => "Idle",
            EditorState::DrawingStroke { .. } => "DrawingStroke",
            EditorState::DraggingSelection { .. } => "DraggingSelection",
        }
    }
}
