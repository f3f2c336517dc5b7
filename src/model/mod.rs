pub mod joint;
pub mod skeleton;
