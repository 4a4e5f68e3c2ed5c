use egui::{Color32, RichText};

use super::ToolButton;
use crate::PaintApp;
use crate::tools::{MAX_BRUSH_SIZE, MIN_BRUSH_SIZE, Mode};

pub fn tools_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::SidePanel::right("tools_panel")
        .resizable(false)
        .default_width(180.0)
        .show(ctx, |ui| {
            ui.add_space(10.0);

            ui.label("Brush Size:");
            let mut size = app.editor().brush().size();
            if ui
                .add(egui::Slider::new(&mut size, MIN_BRUSH_SIZE..=MAX_BRUSH_SIZE))
                .changed()
            {
                app.set_brush_size(size);
            }

            ui.add_space(10.0);
            ui.horizontal(|ui| {
                ui.label("Select Color:");
                let mut color = app.editor().brush().color();
                if egui::color_picker::color_edit_button_srgba(
                    ui,
                    &mut color,
                    egui::color_picker::Alpha::Opaque,
                )
                .changed()
                {
                    app.choose_color(color);
                }
            });

            ui.add_space(10.0);
            let mode = app.editor().mode();
            if ToolButton::new("Free Draw", mode == Mode::FreeDraw).show(ui).clicked() {
                app.select_mode(Mode::FreeDraw);
            }
            if ToolButton::new("Eraser", mode == Mode::Erase).show(ui).clicked() {
                app.select_mode(Mode::Erase);
            }
            let shapes = ToolButton::new("Shapes", mode.shape().is_some()).show(ui);
            if shapes.clicked() {
                app.toggle_shape_popup(shapes.rect.left_bottom() + egui::vec2(0.0, 5.0));
            }

            ui.separator();

            let can_undo = app.editor().can_undo();
            let can_redo = app.editor().can_redo();
            ui.horizontal(|ui| {
                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.undo();
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    app.redo();
                }
            });

            let history = app.editor().history();
            let cursor = history
                .cursor()
                .map_or_else(|| "-".to_owned(), |index| index.to_string());
            ui.label(format!("Strokes: {}  Cursor: {}", history.len(), cursor));

            ui.add_space(10.0);
            let clear = egui::Button::new(RichText::new("Clear Canvas").color(Color32::WHITE))
                .fill(Color32::RED)
                .min_size(egui::vec2(150.0, 36.0));
            if ui.add(clear).clicked() {
                app.clear();
            }

            ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
                ui.label(
                    RichText::new(concat!("simple_paint v", env!("CARGO_PKG_VERSION")))
                        .small()
                        .italics()
                        .color(Color32::GRAY),
                );
            });
        });
}
