//! Shared UI components

pub mod button;
pub mod editor_panel;
pub mod icons;
pub mod preview;
pub mod select;
pub mod text_input;
pub mod toast;

pub use button::{Button, ButtonSize, ButtonVariant, ChromelessButton};
pub use editor_panel::{EditorPanelView, EDITOR_PANEL_ID};
pub use icons::{BrushIcon, XIcon};
pub use preview::PreviewView;
pub use select::FontSelect;
pub use text_input::{NumberInput, TextInput};
pub use toast::Toast;
