use egui::Color32;
use serde::{Deserialize, Serialize};

pub const MIN_BRUSH_SIZE: u32 = 1;
pub const MAX_BRUSH_SIZE: u32 = 15;

/// Brush parameters shared by every drawing operation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrushConfig {
    color: Color32,
    size: u32,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            color: Color32::BLACK,
            size: 3,
        }
    }
}

impl BrushConfig {
    pub fn new(color: Color32, size: u32) -> Self {
        Self {
            color,
            size: clamp_size(size),
        }
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn set_color(&mut self, color: Color32) {
        self.color = color;
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Set the brush size, clamped into the supported range
    pub fn set_size(&mut self, size: u32) {
        self.size = clamp_size(size);
    }

    /// Stroke width in surface units
    pub fn width(&self) -> f32 {
        self.size as f32
    }

    /// Re-clamp after deserializing a hand-edited or older value
    pub(crate) fn normalized(self) -> Self {
        Self::new(self.color, self.size)
    }
}

fn clamp_size(size: u32) -> u32 {
    size.clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE)
}
