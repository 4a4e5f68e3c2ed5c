use egui::{Color32, Stroke};

const SELECTED_FILL: Color32 = Color32::from_rgb(173, 216, 230);

/// Wide labelled button that stays highlighted while its tool is active
pub struct ToolButton<'a> {
    label: &'a str,
    selected: bool,
}

impl<'a> ToolButton<'a> {
    pub fn new(label: &'a str, selected: bool) -> Self {
        Self { label, selected }
    }

    pub fn show(self, ui: &mut egui::Ui) -> egui::Response {
        let mut button = egui::Button::new(self.label)
            .min_size(egui::vec2(150.0, 36.0))
            .selected(self.selected);
        if self.selected {
            button = button
                .fill(SELECTED_FILL)
                .stroke(Stroke::new(2.0, Color32::from_rgb(33, 150, 243)));
        }
        ui.add(button)
    }
}
