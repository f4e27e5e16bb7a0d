//! UIコンポーネント

pub mod header;
pub mod language_select;
pub mod file_picker;
pub mod api_key_input;
pub mod analyze_button;
pub mod result_panel;
pub mod error_panel;
