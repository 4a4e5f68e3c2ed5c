use crate::surface::DrawableHandle;

/// One committed drag: the handles it produced, in creation order.
///
/// A stroke is never empty and its handle list never changes after commit.
/// Undo and redo only toggle the visibility of its handles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stroke {
    handles: Vec<DrawableHandle>,
}

impl Stroke {
    pub fn handles(&self) -> &[DrawableHandle] {
        &self.handles
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

/// Stroke under construction during a drag
#[derive(Debug, Clone, Default)]
pub struct StrokeBuilder {
    handles: Vec<DrawableHandle>,
}

impl StrokeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, handle: DrawableHandle) {
        self.handles.push(handle);
    }

    pub fn handles(&self) -> &[DrawableHandle] {
        &self.handles
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Seal the buffer. Returns `None` when the drag produced nothing.
    pub fn finish(self) -> Option<Stroke> {
        if self.handles.is_empty() {
            None
        } else {
            Some(Stroke {
                handles: self.handles,
            })
        }
    }
}
