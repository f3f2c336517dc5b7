// skeleton.rs
use super::joint::{Joint, JointName};
use std::fmt;

/// Limb segments drawn between joints.
pub const CONNECTIONS: [(JointName, JointName); 12] = [
    (JointName::LeftShoulder, JointName::RightShoulder),
    (JointName::LeftShoulder, JointName::LeftHip),
    (JointName::RightShoulder, JointName::RightHip),
    (JointName::RightShoulder, JointName::RightElbow),
    (JointName::RightWrist, JointName::RightElbow),
    (JointName::LeftHip, JointName::RightHip),
    (JointName::LeftHip, JointName::LeftKnee),
    (JointName::RightHip, JointName::RightKnee),
    (JointName::RightKnee, JointName::RightAnkle),
    (JointName::LeftKnee, JointName::LeftAnkle),
    (JointName::LeftElbow, JointName::LeftShoulder),
    (JointName::LeftWrist, JointName::LeftElbow),
];

const DEFAULT_POSITIONS: [(i32, i32); JointName::COUNT] = [
    (863, 403),
    (742, 347),
    (621, 256),
    (582, 521),
    (575, 703),
    (600, 863),
    (131, 400),
    (278, 334),
    (390, 252),
    (408, 519),
    (403, 694),
    (374, 860),
];

/// The full point set. Every `JointName` has exactly one slot, so joints can
/// be moved but never added or removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skeleton {
    joints: [Joint; JointName::COUNT],
}

impl Skeleton {
    pub fn from_positions(positions: [(i32, i32); JointName::COUNT]) -> Self {
        let joints = JointName::ALL.map(|name| {
            let (x, y) = positions[name.index()];
            Joint::new(name, x, y)
        });
        Skeleton { joints }
    }

    pub fn joint(&self, name: JointName) -> &Joint {
        &self.joints[name.index()]
    }

    /// Joints in their stable iteration order.
    pub fn joints(&self) -> &[Joint] {
        &self.joints
    }

    pub fn set_position(&mut self, name: JointName, x: i32, y: i32) {
        self.joints[name.index()].set_position(x, y);
    }

    pub fn segments(&self) -> impl Iterator<Item = (&Joint, &Joint)> + '_ {
        CONNECTIONS
            .iter()
            .map(move |&(a, b)| (self.joint(a), self.joint(b)))
    }

    pub fn min_distance(&self, x: i32, y: i32) -> f64 {
        self.joints
            .iter()
            .map(|joint| joint.distance_to(x, y))
            .fold(f64::INFINITY, f64::min)
    }
}

impl Default for Skeleton {
    fn default() -> Self {
        Skeleton::from_positions(DEFAULT_POSITIONS)
    }
}

impl fmt::Display for Skeleton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, joint) in self.joints.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: ({}, {})", joint.name, joint.x, joint.y)?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_skeleton_holds_every_joint_in_order() {
        let skeleton = Skeleton::default();
        assert_eq!(skeleton.joints().len(), JointName::COUNT);
        for (joint, name) in skeleton.joints().iter().zip(JointName::ALL) {
            assert_eq!(joint.name, name);
        }
        let wrist = skeleton.joint(JointName::RightWrist);
        assert_eq!((wrist.x, wrist.y), (863, 403));
        let ankle = skeleton.joint(JointName::LeftAnkle);
        assert_eq!((ankle.x, ankle.y), (374, 860));
    }

    #[test]
    fn every_joint_is_reached_by_some_connection() {
        for name in JointName::ALL {
            assert!(CONNECTIONS.iter().any(|&(a, b)| a == name || b == name));
        }
    }

    #[test]
    fn segments_follow_moved_joints() {
        let mut skeleton = Skeleton::default();
        skeleton.set_position(JointName::RightWrist, 1, 2);
        let (a, b) = skeleton.segments().nth(4).unwrap();
        assert_eq!((a.name, a.x, a.y), (JointName::RightWrist, 1, 2));
        assert_eq!(b.name, JointName::RightElbow);
        assert_eq!(skeleton.segments().count(), CONNECTIONS.len());
    }

    #[test]
    fn min_distance_is_zero_on_a_joint() {
        let skeleton = Skeleton::default();
        assert_eq!(skeleton.min_distance(742, 347), 0.0);
    }

    #[test]
    fn display_lists_name_and_coordinates() {
        let text = Skeleton::default().to_string();
        assert!(text.starts_with("{rightWrist: (863, 403), rightElbow: (742, 347), "));
        assert!(text.ends_with("leftAnkle: (374, 860)}"));
    }
}
