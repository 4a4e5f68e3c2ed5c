use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseModeError;

mod brush;
pub use brush::{BrushConfig, MAX_BRUSH_SIZE, MIN_BRUSH_SIZE};

/// Shapes offered by the shape chooser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Rectangle,
    Circle,
    Line,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Rectangle, ShapeKind::Circle, ShapeKind::Line];

    /// Label shown in the shape chooser
    pub fn label(self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Circle => "Circle/Oval",
            ShapeKind::Line => "Straight Line",
        }
    }
}

/// The active drawing tool. Exactly one is active at a time.
///
/// Persisted by name (`"draw"`, `"erase"`, `"rectangle"`, `"circle"`, `"line"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Mode {
    #[default]
    FreeDraw,
    Erase,
    Shape(ShapeKind),
}

impl Mode {
    pub const RECTANGLE: Mode = Mode::Shape(ShapeKind::Rectangle);
    pub const CIRCLE: Mode = Mode::Shape(ShapeKind::Circle);
    pub const LINE: Mode = Mode::Shape(ShapeKind::Line);

    /// Freehand modes leave a trail of segments, shape modes preview then commit once
    pub fn is_freehand(self) -> bool {
        matches!(self, Mode::FreeDraw | Mode::Erase)
    }

    pub fn shape(self) -> Option<ShapeKind> {
        match self {
            Mode::Shape(kind) => Some(kind),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Mode::FreeDraw => "draw",
            Mode::Erase => "erase",
            Mode::Shape(ShapeKind::Rectangle) => "rectangle",
            Mode::Shape(ShapeKind::Circle) => "circle",
            Mode::Shape(ShapeKind::Line) => "line",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "draw" | "freedraw" => Ok(Mode::FreeDraw),
            "erase" | "eraser" => Ok(Mode::Erase),
            "rectangle" | "rect" => Ok(Mode::RECTANGLE),
            "circle" | "oval" => Ok(Mode::CIRCLE),
            "line" => Ok(Mode::LINE),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

impl TryFrom<String> for Mode {
    type Error = ParseModeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Mode> for String {
    fn from(mode: Mode) -> Self {
        mode.name().to_owned()
    }
}
