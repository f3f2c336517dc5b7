use crate::model::joint::JointName;
use eframe::egui;
use egui::{Event, Key, PointerButton, Pos2};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorKey {
    Escape,
    Deselect,
    Other,
}

impl EditorKey {
    pub fn from_egui(key: Key) -> Self {
        match key {
            Key::Escape => EditorKey::Escape,
            _ => EditorKey::Other,
        }
    }

    /// Deselect is bound to the typed character `c`, so Shift, Caps Lock and
    /// Alt variants that produce another character do not trigger it.
    pub fn from_text(text: &str) -> Self {
        match text {
            "c" => EditorKey::Deselect,
            _ => EditorKey::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorEvent {
    Click { x: i32, y: i32 },
    Key(EditorKey),
}

impl EditorEvent {
    /// Translates one egui input event. Only primary-button presses, Escape
    /// and the typed `c` matter; click positions become pixels relative to `canvas_origin`.
    pub fn from_egui(event: &Event, canvas_origin: Pos2) -> Option<Self> {
        match event {
            Event::PointerButton {
                pos,
                button: PointerButton::Primary,
                pressed: true,
                ..
            } => Some(EditorEvent::Click {
                x: (pos.x - canvas_origin.x).round() as i32,
                y: (pos.y - canvas_origin.y).round() as i32,
            }),
            Event::Key {
                key,
                pressed: true,
                ..
            } => match EditorKey::from_egui(*key) {
                EditorKey::Escape => Some(EditorEvent::Key(EditorKey::Escape)),
                _ => None,
            },
            Event::Text(text) => match EditorKey::from_text(text) {
                EditorKey::Deselect => Some(EditorEvent::Key(EditorKey::Deselect)),
                _ => None,
            },
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Selected(JointName),
    Moved(JointName),
}
