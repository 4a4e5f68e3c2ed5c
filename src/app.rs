use egui::{Color32, Pos2, Rect};

use crate::canvas::Canvas;
use crate::config::{PaintConfig, ToolSettings};
use crate::input::InputHandler;
use crate::panels::{self, PopupOutcome, ShapePopup};
use crate::state::Editor;
use crate::tools::Mode;

/// The paint window: tool panel on the right, canvas filling the rest.
///
/// Only [`ToolSettings`] survive a restart; the drawing lives for the session.
pub struct PaintApp {
    editor: Editor<Canvas>,
    input: InputHandler,
    shape_popup: ShapePopup,
}

impl Default for PaintApp {
    fn default() -> Self {
        Self::with_config(PaintConfig::default(), None)
    }
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: PaintConfig) -> Self {
        let settings = cc
            .storage
            .and_then(|storage| eframe::get_value::<ToolSettings>(storage, eframe::APP_KEY));
        if let Some(settings) = &settings {
            log::info!("Restored tool settings: {} / size {}", settings.mode, settings.brush.size());
        }
        Self::with_config(config, settings)
    }

    pub fn with_config(config: PaintConfig, settings: Option<ToolSettings>) -> Self {
        let canvas = Canvas::new(config.background, config.window_size());
        let mut editor = Editor::with_config(canvas, &config);
        if let Some(settings) = settings.map(ToolSettings::normalized) {
            editor.set_mode(settings.mode);
            editor.set_color(settings.brush.color());
            editor.set_brush_size(settings.brush.size());
        }
        Self {
            editor,
            input: InputHandler::new(Rect::NOTHING),
            shape_popup: ShapePopup::default(),
        }
    }

    pub fn editor(&self) -> &Editor<Canvas> {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut Editor<Canvas> {
        &mut self.editor
    }

    pub(crate) fn input_mut(&mut self) -> &mut InputHandler {
        &mut self.input
    }

    pub fn shape_popup_open(&self) -> bool {
        self.shape_popup.is_open()
    }

    pub fn tool_settings(&self) -> ToolSettings {
        ToolSettings::new(self.editor.mode(), *self.editor.brush())
    }

    /// Activate a tool and close the shape chooser
    pub fn select_mode(&mut self, mode: Mode) {
        self.editor.set_mode(mode);
        self.shape_popup.close();
    }

    /// A confirmed colour pick also switches back to free drawing
    pub fn choose_color(&mut self, color: Color32) {
        self.editor.set_color(color);
        self.select_mode(Mode::FreeDraw);
    }

    pub fn set_brush_size(&mut self, size: u32) {
        self.editor.set_brush_size(size);
    }

    pub fn toggle_shape_popup(&mut self, anchor: Pos2) {
        self.shape_popup.toggle(anchor);
    }

    pub fn undo(&mut self) {
        self.editor.undo();
        self.shape_popup.close();
    }

    pub fn redo(&mut self) {
        self.editor.redo();
        self.shape_popup.close();
    }

    pub fn clear(&mut self) {
        self.editor.clear();
        self.shape_popup.close();
    }
}

impl eframe::App for PaintApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.tool_settings());
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::tools_panel(self, ctx);

        match self.shape_popup.show(ctx) {
            PopupOutcome::Selected(kind) => self.select_mode(Mode::Shape(kind)),
            PopupOutcome::Cancelled => log::debug!("Shape selection cancelled"),
            PopupOutcome::Pending => {}
        }

        panels::central_panel(self, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::{BrushConfig, ShapeKind};

    #[test]
    fn test_color_choice_switches_to_free_draw() {
        let mut app = PaintApp::default();
        app.select_mode(Mode::Erase);

        app.choose_color(Color32::RED);

        assert_eq!(app.editor().mode(), Mode::FreeDraw);
        assert_eq!(app.editor().brush().color(), Color32::RED);
    }

    #[test]
    fn test_selecting_a_mode_closes_shape_popup() {
        let mut app = PaintApp::default();
        app.toggle_shape_popup(Pos2::ZERO);
        assert!(app.shape_popup_open());

        app.select_mode(Mode::Shape(ShapeKind::Line));
        assert!(!app.shape_popup_open());
        assert_eq!(app.editor().mode(), Mode::LINE);
    }

    #[test]
    fn test_history_actions_close_shape_popup() {
        let mut app = PaintApp::default();
        let actions: [fn(&mut PaintApp); 3] = [PaintApp::undo, PaintApp::redo, PaintApp::clear];
        for action in actions {
            app.toggle_shape_popup(Pos2::ZERO);
            action(&mut app);
            assert!(!app.shape_popup_open());
        }
    }

    #[test]
    fn test_restores_tool_settings() {
        let settings = ToolSettings::new(Mode::CIRCLE, BrushConfig::new(Color32::BLUE, 9));
        let app = PaintApp::with_config(PaintConfig::default(), Some(settings));

        assert_eq!(app.tool_settings(), settings);
    }
}
