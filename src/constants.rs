use eframe::egui::Color32;

pub const WINDOW_TITLE: &str = "Image";

pub const CANVAS_WIDTH: f32 = 1000.0;
pub const CANVAS_HEIGHT: f32 = 1000.0;
pub const CANVAS_COLOR: Color32 = Color32::BLACK;

pub const LIMB_COLOR: Color32 = Color32::from_rgb(255, 255, 0);
pub const LIMB_THICKNESS: f32 = 2.0;

pub const JOINT_RADIUS: f32 = 5.0;
pub const JOINT_COLOR: Color32 = Color32::from_rgb(0, 0, 255);
pub const SELECTED_JOINT_COLOR: Color32 = Color32::from_rgb(0, 255, 0);

pub const LABEL_COLOR: Color32 = Color32::WHITE;
pub const LABEL_OFFSET_X: i32 = -15;
pub const LABEL_OFFSET_Y: i32 = -10;
pub const LABEL_FONT_SCALE: f32 = 0.4;
// Point size of the label font at scale 1.0.
pub const LABEL_BASE_FONT_SIZE: f32 = 30.0;

// Distances are compared after rounding to this many decimal digits.
pub const DISTANCE_DECIMALS: i32 = 3;
