use crate::PaintApp;
use crate::components::ModeButton;
use crate::state::Mode;

pub fn tools_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("tools_panel").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.horizontal_wrapped(|ui| {
            let active_mode = app.controller().mode();
            for mode in Mode::ALL {
                if ModeButton::new(mode, mode == active_mode).show(ui).clicked() {
                    log::info!("Mode selected from UI: {}", mode.name());
                    let changes = app.controller_mut().set_mode(mode);
                    app.apply(ctx, changes);
                }
            }

            ui.separator();
            ui.strong("Color:");
            let current = app.controller().brush().color;
            let palette = app.config().palette.clone();
            for color in palette {
                let marker = if color == current { "◉" } else { "●" };
                let button = egui::Button::new(egui::RichText::new(marker).color(color).size(18.0))
                    .frame(false);
                if ui.add(button).on_hover_text(format!("{color:?}")).clicked() {
                    app.controller_mut().set_color(color);
                }
            }
        });

        ui.horizontal_wrapped(|ui| {
            if app.controller().mode() == Mode::Draw {
                drawing_controls(app, ui);
                ui.separator();
            }

            let enabled = app.controller().can_manipulate();
            let (scale_up, scale_down) = (app.config().scale_up, app.config().scale_down);
            if ui
                .add_enabled(enabled, egui::Button::new("🗑"))
                .on_hover_text("Delete selected stroke")
                .clicked()
            {
                let changes = app.controller_mut().delete_selected();
                app.apply(ctx, changes);
            }
            if ui
                .add_enabled(enabled, egui::Button::new("➕"))
                .on_hover_text("Enlarge selected stroke")
                .clicked()
            {
                let changes = app.controller_mut().scale_selected(scale_up);
                app.apply(ctx, changes);
            }
            if ui
                .add_enabled(enabled, egui::Button::new("➖"))
                .on_hover_text("Shrink selected stroke")
                .clicked()
            {
                let changes = app.controller_mut().scale_selected(scale_down);
                app.apply(ctx, changes);
            }
        });
        ui.add_space(4.0);
    });
}

fn drawing_controls(app: &mut PaintApp, ui: &mut egui::Ui) {
    let slider = app.controller().width_slider();
    ui.strong(format!("{}:", slider.label));

    let mut value = slider.value;
    let response = ui
        .add(
            egui::Slider::new(&mut value, slider.range.clone())
                .step_by(0.5)
                .fixed_decimals(1),
        )
        .on_hover_text("Stroke width");
    if response.changed() {
        app.controller_mut().set_width_slider(value);
    }

    ui.separator();
    let mut pressure = app.controller().brush().pressure_sensitive;
    if ui
        .checkbox(&mut pressure, "Pressure (speed based)")
        .on_hover_text("Vary stroke width with drawing speed")
        .changed()
    {
        app.controller_mut().set_pressure_sensitive(pressure);
    }
}
