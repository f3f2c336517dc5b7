pub mod common;
pub mod skeleton_editor;
