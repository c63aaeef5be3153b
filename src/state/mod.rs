mod editor_state;
pub mod controller;

pub use controller::{BrushSettings, InteractionController, WidthSlider};
pub use editor_state::{EditorState, Mode};
