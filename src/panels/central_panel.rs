use crate::PaintApp;
use crate::input::route_event;

pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    let frame = egui::Frame::central_panel(&ctx.style()).inner_margin(20.0);
    egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::drag());
        let canvas_rect = response.rect;

        app.editor_mut().surface_mut().resize(canvas_rect.size());
        let input = app.input_mut();
        input.set_canvas_rect(canvas_rect);
        let events = input.process_input(ctx);

        // a popup above the canvas, or the modal shape chooser, takes the pointer
        let blocked = app.shape_popup_open() || !response.contains_pointer();
        for event in &events {
            route_event(event, app.editor_mut(), blocked);
        }

        app.editor().surface().paint(&painter, canvas_rect);
    });
}
