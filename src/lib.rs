#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod config;
pub mod error;
pub mod history;
pub mod input;
pub mod panels;
pub mod state;
pub mod stroke;
pub mod surface;
pub mod tools;

pub use app::PaintApp;
pub use canvas::{Canvas, CanvasItem, Primitive};
pub use config::{PaintConfig, ToolSettings};
pub use error::{ParseModeError, SurfaceError};
pub use history::History;
pub use input::{InputEvent, InputHandler, InputLocation};
pub use state::{Editor, EditorState};
pub use stroke::{Stroke, StrokeBuilder};
pub use surface::{DrawableHandle, Surface};
pub use tools::{BrushConfig, Mode, ShapeKind};
