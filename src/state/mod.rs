mod editor;
mod editor_state;

pub use editor::Editor;
pub use editor_state::EditorState;
