use egui::Pos2;

use crate::tools::ShapeKind;

/// Result of showing the shape chooser for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupOutcome {
    /// Still open, nothing chosen yet (or not open at all)
    Pending,
    Selected(ShapeKind),
    /// Closed through its window button without a choice
    Cancelled,
}

/// The small "Select Shape" window opened from the tools panel.
///
/// While it is open the canvas does not accept new drags.
#[derive(Debug, Default)]
pub struct ShapePopup {
    open: bool,
    anchor: Option<Pos2>,
}

impl ShapePopup {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open below `anchor`, or close if already open
    pub fn toggle(&mut self, anchor: Pos2) {
        if self.open {
            self.close();
        } else {
            self.open = true;
            self.anchor = Some(anchor);
        }
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn show(&mut self, ctx: &egui::Context) -> PopupOutcome {
        if !self.open {
            return PopupOutcome::Pending;
        }

        let mut still_open = true;
        let mut chosen = None;
        let mut window = egui::Window::new("Select Shape")
            .collapsible(false)
            .resizable(false)
            .open(&mut still_open);
        if let Some(anchor) = self.anchor {
            window = window.default_pos(anchor);
        }
        window.show(ctx, |ui| {
            for kind in ShapeKind::ALL {
                let button = egui::Button::new(kind.label()).min_size(egui::vec2(120.0, 32.0));
                if ui.add(button).clicked() {
                    chosen = Some(kind);
                }
            }
        });

        match chosen {
            Some(kind) => {
                self.close();
                PopupOutcome::Selected(kind)
            }
            None if !still_open => {
                self.close();
                PopupOutcome::Cancelled
            }
            None => PopupOutcome::Pending,
        }
    }
}
