use crate::PaintApp;

pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());

        // Handle input
        let events = app.input_mut().process_input(ctx, &response);
        for event in events {
            let changes = app.controller_mut().handle(event);
            app.apply(ctx, changes);
        }

        // Render the canvas
        let strokes = app.controller().render_list();
        app.renderer().render(&painter, response.rect, &strokes);
    });
}
