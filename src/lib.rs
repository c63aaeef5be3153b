#![warn(clippy::all, rust_2018_idioms)]

//! A freehand sketch canvas: draw, select, move, scale and erase strokes,
//! with optional speed-simulated pen pressure.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod event;
pub mod geometry;
pub mod input;
pub mod panels;
pub mod pressure;
pub mod renderer;
pub mod state;
pub mod stroke;
pub mod stroke_store;

pub use app::PaintApp;
pub use config::CanvasConfig;
pub use error::{ConfigError, StrokeError};
pub use event::{CanvasEvent, Changes};
pub use input::{InputHandler, PointerEvent, PointerEventKind};
pub use pressure::{PointerSample, SpeedToWidth};
pub use renderer::{RenderStroke, Renderer};
pub use state::{EditorState, InteractionController, Mode};
pub use stroke::{Stroke, StrokeId};
pub use stroke_store::StrokeStore;
