use std::collections::BTreeMap;

use egui::{Color32, Painter, Pos2, Rect, Shape, Stroke as EguiStroke, Vec2};

use crate::error::SurfaceError;
use crate::surface::{DrawableHandle, Surface};

/// Number of line segments used to approximate an oval outline
const OVAL_SEGMENTS: usize = 64;

/// Geometry of one rendered primitive
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    Segment { from: Pos2, to: Pos2 },
    Rectangle { from: Pos2, to: Pos2 },
    Oval { from: Pos2, to: Pos2 },
    Line { from: Pos2, to: Pos2 },
}

impl Primitive {
    /// The two points the primitive was created from
    pub fn endpoints(&self) -> (Pos2, Pos2) {
        match *self {
            Primitive::Segment { from, to }
            | Primitive::Rectangle { from, to }
            | Primitive::Oval { from, to }
            | Primitive::Line { from, to } => (from, to),
        }
    }

    /// Axis-aligned box spanned by the endpoints
    pub fn bounding_rect(&self) -> Rect {
        let (from, to) = self.endpoints();
        Rect::from_two_pos(from, to)
    }
}

/// A primitive plus its paint attributes and visibility
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasItem {
    pub primitive: Primitive,
    pub color: Color32,
    pub width: f32,
    pub visible: bool,
}

impl CanvasItem {
    fn draw(&self, painter: &Painter, offset: Vec2) {
        let stroke = EguiStroke::new(self.width, self.color);
        match self.primitive {
            Primitive::Segment { from, to } => {
                let (from, to) = (from + offset, to + offset);
                painter.line_segment([from, to], stroke);
                // round caps
                painter.circle_filled(from, self.width / 2.0, self.color);
                painter.circle_filled(to, self.width / 2.0, self.color);
            }
            Primitive::Line { from, to } => {
                painter.line_segment([from + offset, to + offset], stroke);
            }
            Primitive::Rectangle { .. } => {
                painter.rect_stroke(self.primitive.bounding_rect().translate(offset), 0.0, stroke);
            }
            Primitive::Oval { .. } => {
                let rect = self.primitive.bounding_rect().translate(offset);
                painter.add(Shape::closed_line(oval_points(rect), stroke));
            }
        }
    }
}

fn oval_points(rect: Rect) -> Vec<Pos2> {
    let center = rect.center();
    let radius = rect.size() / 2.0;
    (0..OVAL_SEGMENTS)
        .map(|i| {
            let angle = i as f32 / OVAL_SEGMENTS as f32 * std::f32::consts::TAU;
            Pos2::new(
                center.x + radius.x * angle.cos(),
                center.y + radius.y * angle.sin(),
            )
        })
        .collect()
}

/// Arena of rendered primitives backing the paint area.
///
/// Items are keyed by a monotonically increasing id, so iteration follows
/// creation (paint) order and a deleted handle is never reissued. Deleted
/// items are removed outright.
#[derive(Debug, Clone)]
pub struct Canvas {
    items: BTreeMap<usize, CanvasItem>,
    next_id: usize,
    size: Vec2,
    background: Color32,
}

impl Canvas {
    pub fn new(background: Color32, size: Vec2) -> Self {
        Self {
            items: BTreeMap::new(),
            next_id: 0,
            size,
            background,
        }
    }

    /// Update the size after the hosting panel changed
    pub fn resize(&mut self, size: Vec2) {
        self.size = size;
    }

    pub fn get(&self, handle: DrawableHandle) -> Option<&CanvasItem> {
        self.items.get(&handle.id())
    }

    /// Iterate live items in creation (paint) order
    pub fn items(&self) -> impl Iterator<Item = (DrawableHandle, &CanvasItem)> {
        self.items
            .iter()
            .map(|(&id, item)| (DrawableHandle::new(id), item))
    }

    /// Number of live (not deleted) items, visible or hidden
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn visible_count(&self) -> usize {
        self.items.values().filter(|item| item.visible).count()
    }

    /// Paint every visible item, with surface coordinates anchored at `rect.min`
    pub fn paint(&self, painter: &Painter, rect: Rect) {
        painter.rect_filled(rect, 0.0, self.background);
        let offset = rect.min.to_vec2();
        for item in self.items.values().filter(|item| item.visible) {
            item.draw(painter, offset);
        }
    }

    fn insert(&mut self, primitive: Primitive, color: Color32, width: f32) -> DrawableHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.items.insert(
            id,
            CanvasItem {
                primitive,
                color,
                width,
                visible: true,
            },
        );
        DrawableHandle::new(id)
    }
}

impl Surface for Canvas {
    fn create_segment(&mut self, from: Pos2, to: Pos2, color: Color32, width: f32) -> DrawableHandle {
        self.insert(Primitive::Segment { from, to }, color, width)
    }

    fn create_rectangle(&mut self, from: Pos2, to: Pos2, outline: Color32, width: f32) -> DrawableHandle {
        self.insert(Primitive::Rectangle { from, to }, outline, width)
    }

    fn create_oval(&mut self, from: Pos2, to: Pos2, outline: Color32, width: f32) -> DrawableHandle {
        self.insert(Primitive::Oval { from, to }, outline, width)
    }

    fn create_line(&mut self, from: Pos2, to: Pos2, color: Color32, width: f32) -> DrawableHandle {
        self.insert(Primitive::Line { from, to }, color, width)
    }

    fn delete(&mut self, handle: DrawableHandle) -> Result<(), SurfaceError> {
        self.items
            .remove(&handle.id())
            .map(|_| ())
            .ok_or(SurfaceError::UnknownHandle(handle))
    }

    fn set_visible(&mut self, handle: DrawableHandle, visible: bool) -> Result<(), SurfaceError> {
        let item = self
            .items
            .get_mut(&handle.id())
            .ok_or(SurfaceError::UnknownHandle(handle))?;
        item.visible = visible;
        Ok(())
    }

    fn bounds(&self) -> Vec2 {
        self.size
    }

    fn background(&self) -> Color32 {
        self.background
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> Canvas {
        Canvas::new(Color32::WHITE, Vec2::new(400.0, 300.0))
    }

    #[test]
    fn test_handles_are_not_reused() {
        let mut canvas = canvas();
        let first = canvas.create_segment(Pos2::ZERO, Pos2::new(5.0, 5.0), Color32::BLACK, 3.0);
        canvas.delete(first).unwrap();
        let second = canvas.create_line(Pos2::ZERO, Pos2::new(5.0, 5.0), Color32::BLACK, 3.0);

        assert_ne!(first, second);
        assert!(canvas.get(first).is_none());
        assert_eq!(canvas.len(), 1);
    }

    #[test]
    fn test_unknown_handle_is_an_error() {
        let mut canvas = canvas();
        let handle = canvas.create_oval(Pos2::ZERO, Pos2::new(10.0, 10.0), Color32::GRAY, 1.0);
        canvas.delete(handle).unwrap();

        assert_eq!(canvas.delete(handle), Err(SurfaceError::UnknownHandle(handle)));
        assert_eq!(
            canvas.set_visible(handle, false),
            Err(SurfaceError::UnknownHandle(handle))
        );
    }

    #[test]
    fn test_deleted_items_are_dropped() {
        let mut canvas = canvas();
        let kept = canvas.create_line(Pos2::ZERO, Pos2::new(5.0, 0.0), Color32::BLACK, 1.0);
        for i in 0..1000 {
            let pos = Pos2::new(i as f32, 10.0);
            let handle = canvas.create_oval(pos, pos + Vec2::splat(4.0), Color32::GRAY, 1.0);
            canvas.delete(handle).unwrap();
        }
        let last = canvas.create_segment(Pos2::ZERO, Pos2::new(0.0, 5.0), Color32::BLACK, 1.0);

        assert_eq!(canvas.len(), 2);
        assert_eq!(canvas.items.len(), 2);
        let order: Vec<_> = canvas.items().map(|(handle, _)| handle).collect();
        assert_eq!(order, vec![kept, last]);
    }

    #[test]
    fn test_visibility_toggle() {
        let mut canvas = canvas();
        let handle = canvas.create_rectangle(Pos2::ZERO, Pos2::new(10.0, 10.0), Color32::RED, 2.0);
        assert_eq!(canvas.visible_count(), 1);

        canvas.set_visible(handle, false).unwrap();
        assert_eq!(canvas.visible_count(), 0);
        assert_eq!(canvas.len(), 1);

        canvas.set_visible(handle, true).unwrap();
        assert!(canvas.get(handle).unwrap().visible);
    }

    #[test]
    fn test_paint_basics() {
        let mut canvas = canvas();
        canvas.create_segment(Pos2::new(1.0, 1.0), Pos2::new(20.0, 20.0), Color32::BLACK, 3.0);
        canvas.create_oval(Pos2::new(10.0, 10.0), Pos2::new(50.0, 30.0), Color32::BLUE, 2.0);

        let ctx = egui::Context::default();
        let rect = Rect::from_min_size(Pos2::new(20.0, 20.0), canvas.bounds());
        let painter = Painter::new(ctx, egui::LayerId::background(), rect);
        canvas.paint(&painter, rect);
    }

    #[test]
    fn test_oval_points_stay_inside_box() {
        let rect = Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(40.0, 20.0));
        let points = oval_points(rect);
        assert_eq!(points.len(), OVAL_SEGMENTS);
        assert!(points.iter().all(|p| rect.expand(0.001).contains(*p)));
    }
}
