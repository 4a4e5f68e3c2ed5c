//! The rendering collaborator consumed by the editor core.
//!
//! A surface owns every rendered primitive. The core only ever sees opaque
//! [`DrawableHandle`]s and asks the surface to create, hide, show or delete them.

use std::fmt;

use egui::{Color32, Pos2, Vec2};

use crate::error::SurfaceError;

/// Opaque reference to one primitive owned by a [`Surface`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DrawableHandle(usize);

impl DrawableHandle {
    pub(crate) fn new(id: usize) -> Self {
        Self(id)
    }

    pub(crate) fn id(self) -> usize {
        self.0
    }
}

impl fmt::Display for DrawableHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Rendering surface the editor draws onto.
///
/// Every `create_*` call returns a new, visible handle. Handles are never reused
/// after [`Surface::delete`].
pub trait Surface {
    /// Freehand segment with round caps
    fn create_segment(&mut self, from: Pos2, to: Pos2, color: Color32, width: f32) -> DrawableHandle;

    /// Rectangle outline spanning the two corners
    fn create_rectangle(&mut self, from: Pos2, to: Pos2, outline: Color32, width: f32) -> DrawableHandle;

    /// Oval outline inscribed in the box spanned by the two corners
    fn create_oval(&mut self, from: Pos2, to: Pos2, outline: Color32, width: f32) -> DrawableHandle;

    /// Straight line between the two points
    fn create_line(&mut self, from: Pos2, to: Pos2, color: Color32, width: f32) -> DrawableHandle;

    /// Release a primitive. The handle is invalid afterwards.
    fn delete(&mut self, handle: DrawableHandle) -> Result<(), SurfaceError>;

    /// Show or hide a primitive without releasing it
    fn set_visible(&mut self, handle: DrawableHandle, visible: bool) -> Result<(), SurfaceError>;

    /// Current surface size in surface coordinates
    fn bounds(&self) -> Vec2;

    /// Background colour, used as paint colour by the eraser
    fn background(&self) -> Color32;
}
