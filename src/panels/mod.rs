mod central_panel;
mod shape_popup;
mod tool_button;
mod tools_panel;

pub use central_panel::central_panel;
pub use shape_popup::{PopupOutcome, ShapePopup};
pub use tool_button::ToolButton;
pub use tools_panel::tools_panel;
