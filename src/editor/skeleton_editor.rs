use super::common::{ClickOutcome, EditorEvent, EditorKey, LoopControl};
use crate::constants::DISTANCE_DECIMALS;
use crate::model::joint::JointName;
use crate::model::skeleton::Skeleton;

fn round_distance(distance: f64) -> f64 {
    let scale = 10f64.powi(DISTANCE_DECIMALS);
    (distance * scale).round() / scale
}

#[derive(Debug)]
pub struct SkeletonEditor {
    pub skeleton: Skeleton,
    selected_joint: Option<JointName>,
}

impl Default for SkeletonEditor {
    fn default() -> Self {
        SkeletonEditor::new(Skeleton::default())
    }
}

impl SkeletonEditor {
    pub fn new(skeleton: Skeleton) -> Self {
        SkeletonEditor {
            skeleton,
            selected_joint: None,
        }
    }

    pub fn selected_joint(&self) -> Option<JointName> {
        self.selected_joint
    }

    pub fn apply(&mut self, event: EditorEvent) -> LoopControl {
        match event {
            EditorEvent::Click { x, y } => {
                match self.handle_click(x, y) {
                    Some(ClickOutcome::Selected(name)) => log::debug!("Selected {}", name),
                    Some(ClickOutcome::Moved(name)) => {
                        log::debug!("Moved {} to ({}, {})", name, x, y)
                    }
                    None => {}
                }
                LoopControl::Continue
            }
            EditorEvent::Key(key) => self.handle_key(key),
        }
    }

    /// Applies queued events in order, dropping everything after a `Stop`.
    pub fn apply_all(&mut self, events: impl IntoIterator<Item = EditorEvent>) -> LoopControl {
        for event in events {
            if self.apply(event) == LoopControl::Stop {
                return LoopControl::Stop;
            }
        }
        LoopControl::Continue
    }

    /// With no selection, arms the joint nearest to `(x, y)`. With a
    /// selection, moves that joint to `(x, y)`; the selection stays armed so
    /// further clicks keep moving the same joint until it is cleared.
    pub fn handle_click(&mut self, x: i32, y: i32) -> Option<ClickOutcome> {
        let min_dist = round_distance(self.skeleton.min_distance(x, y));
        let mut outcome = None;

        for joint in self.skeleton.joints() {
            if self.selected_joint == Some(joint.name) {
                outcome = Some(ClickOutcome::Moved(joint.name));
                break;
            } else if self.selected_joint.is_none()
                && round_distance(joint.distance_to(x, y)) == min_dist
            {
                outcome = Some(ClickOutcome::Selected(joint.name));
                break;
            }
        }

        match outcome {
            Some(ClickOutcome::Moved(name)) => self.skeleton.set_position(name, x, y),
            Some(ClickOutcome::Selected(name)) => self.selected_joint = Some(name),
            None => {}
        }

        println!("Points: {}", self.skeleton);
        outcome
    }

    pub fn handle_key(&mut self, key: EditorKey) -> LoopControl {
        match key {
            EditorKey::Escape => LoopControl::Stop,
            EditorKey::Deselect => {
                if let Some(name) = self.selected_joint.take() {
                    log::debug!("Cleared selection of {}", name);
                }
                LoopControl::Continue
            }
            EditorKey::Other => LoopControl::Continue,
        }
    }
}
