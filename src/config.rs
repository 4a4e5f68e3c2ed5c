use egui::{Color32, Vec2};
use serde::{Deserialize, Serialize};

use crate::tools::{BrushConfig, Mode};

/// Static application settings. Missing fields fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaintConfig {
    /// Window title
    pub title: String,
    /// Initial window size in points
    pub window_size: [f32; 2],
    /// Canvas background, also the eraser paint colour
    pub background: Color32,
    /// Outline colour of the eraser size indicator
    pub indicator_color: Color32,
    /// Outline width of the eraser size indicator
    pub indicator_width: f32,
    /// Brush used on first start
    pub brush: BrushConfig,
}

impl Default for PaintConfig {
    fn default() -> Self {
        Self {
            title: "Simple Paint".to_owned(),
            window_size: [1100.0, 750.0],
            background: Color32::WHITE,
            indicator_color: Color32::GRAY,
            indicator_width: 1.0,
            brush: BrushConfig::default(),
        }
    }
}

impl PaintConfig {
    pub fn window_size(&self) -> Vec2 {
        Vec2::from(self.window_size)
    }
}

/// Tool settings restored across restarts. Drawings themselves are never saved.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolSettings {
    pub mode: Mode,
    pub brush: BrushConfig,
}

impl ToolSettings {
    pub fn new(mode: Mode, brush: BrushConfig) -> Self {
        Self { mode, brush }
    }

    /// Clamp values that may come from an older or hand-edited store
    pub fn normalized(self) -> Self {
        Self {
            mode: self.mode,
            brush: self.brush.normalized(),
        }
    }
}
