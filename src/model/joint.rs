use nalgebra::Point2;
use std::fmt;

/// Body landmarks of the calibration skeleton, in their fixed iteration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JointName {
    RightWrist,
    RightElbow,
    RightShoulder,
    RightHip,
    RightKnee,
    RightAnkle,
    LeftWrist,
    LeftElbow,
    LeftShoulder,
    LeftHip,
    LeftKnee,
    LeftAnkle,
}

impl JointName {
    pub const COUNT: usize = 12;

    pub const ALL: [JointName; JointName::COUNT] = [
        JointName::RightWrist,
        JointName::RightElbow,
        JointName::RightShoulder,
        JointName::RightHip,
        JointName::RightKnee,
        JointName::RightAnkle,
        JointName::LeftWrist,
        JointName::LeftElbow,
        JointName::LeftShoulder,
        JointName::LeftHip,
        JointName::LeftKnee,
        JointName::LeftAnkle,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            JointName::RightWrist => "rightWrist",
            JointName::RightElbow => "rightElbow",
            JointName::RightShoulder => "rightShoulder",
            JointName::RightHip => "rightHip",
            JointName::RightKnee => "rightKnee",
            JointName::RightAnkle => "rightAnkle",
            JointName::LeftWrist => "leftWrist",
            JointName::LeftElbow => "leftElbow",
            JointName::LeftShoulder => "leftShoulder",
            JointName::LeftHip => "leftHip",
            JointName::LeftKnee => "leftKnee",
            JointName::LeftAnkle => "leftAnkle",
        }
    }
}

impl fmt::Display for JointName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Joint {
    pub name: JointName,
    pub x: i32,
    pub y: i32,
}

impl Joint {
    pub fn new(name: JointName, x: i32, y: i32) -> Self {
        Joint { name, x, y }
    }

    pub fn position(&self) -> Point2<f64> {
        Point2::new(f64::from(self.x), f64::from(self.y))
    }

    pub fn set_position(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    /// Euclidean distance from this joint to the pixel `(x, y)`.
    pub fn distance_to(&self, x: i32, y: i32) -> f64 {
        let target = Point2::new(f64::from(x), f64::from(y));
        nalgebra::distance(&self.position(), &target)
    }
}
