use crate::config::{CONFIG_KEY, CanvasConfig};
use crate::event::Changes;
use crate::input::InputHandler;
use crate::panels::{central_panel, tools_panel};
use crate::renderer::Renderer;
use crate::state::InteractionController;

/// The drawing application: a toolbar over a single freehand canvas.
///
/// Only the settings are persisted; strokes live for the session.
pub struct PaintApp {
    config: CanvasConfig,
    controller: InteractionController,
    input: InputHandler,
    renderer: Renderer,
}

impl Default for PaintApp {
    fn default() -> Self {
        Self::with_config(CanvasConfig::default())
    }
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = cc
            .storage
            .and_then(|storage| eframe::get_value::<CanvasConfig>(storage, CONFIG_KEY))
            .map(CanvasConfig::or_default_if_invalid)
            .unwrap_or_default();
        log::info!("Starting canvas with config {config:?}");

        Self::with_config(config)
    }

    pub fn with_config(config: CanvasConfig) -> Self {
        Self {
            controller: InteractionController::new(&config),
            input: InputHandler::new(config.min_move_interval),
            renderer: Renderer::new(),
            config,
        }
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut InteractionController {
        &mut self.controller
    }

    pub fn input_mut(&mut self) -> &mut InputHandler {
        &mut self.input
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// React to controller changes: log them and schedule a repaint if needed
    pub fn apply(&self, ctx: &egui::Context, changes: Changes) {
        if changes.needs_redraw() {
            ctx.request_repaint();
        }
        for event in changes {
            log::trace!("Canvas event: {event:?}");
        }
    }

    /// The config with the current brush settings folded in
    fn current_config(&self) -> CanvasConfig {
        let brush = self.controller.brush();
        CanvasConfig {
            color: brush.color,
            base_width: brush.base_width,
            pressure_ceiling: brush.pressure_ceiling,
            pressure_sensitive: brush.pressure_sensitive,
            ..self.config.clone()
        }
    }
}

impl eframe::App for PaintApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.config = self.current_config();
        eframe::set_value(storage, CONFIG_KEY, &self.config);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        tools_panel(self, ctx);
        central_panel(self, ctx);
    }
}
