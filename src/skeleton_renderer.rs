use crate::constants::{
    CANVAS_COLOR, JOINT_COLOR, JOINT_RADIUS, LABEL_BASE_FONT_SIZE, LABEL_COLOR, LABEL_FONT_SCALE,
    LABEL_OFFSET_X, LABEL_OFFSET_Y, LIMB_COLOR, LIMB_THICKNESS, SELECTED_JOINT_COLOR,
};
use crate::model::joint::{Joint, JointName};
use crate::model::skeleton::Skeleton;
use eframe::egui::{Align2, Color32, FontId, Pos2, Rect, Stroke};

#[derive(Debug, Clone, PartialEq)]
pub enum RenderItem {
    Line {
        from: Pos2,
        to: Pos2,
        stroke: Stroke,
    },
    Dot {
        center: Pos2,
        radius: f32,
        fill: Color32,
    },
    /// `anchor` is the bottom-left corner of the text.
    Label {
        anchor: Pos2,
        text: &'static str,
        font_size: f32,
        color: Color32,
    },
}

fn joint_pos(joint: &Joint) -> Pos2 {
    Pos2::new(joint.x as f32, joint.y as f32)
}

pub struct SkeletonRenderer {
    label_font: FontId,
}

impl Default for SkeletonRenderer {
    fn default() -> Self {
        SkeletonRenderer {
            label_font: FontId::proportional(LABEL_FONT_SCALE * LABEL_BASE_FONT_SIZE),
        }
    }
}

impl SkeletonRenderer {
    /// Builds the draw list for one frame: limbs first, then a dot and a
    /// label per joint so joints are painted over the lines.
    pub fn render(&self, skeleton: &Skeleton, selected: Option<JointName>) -> Vec<RenderItem> {
        let mut items = Vec::with_capacity(skeleton.joints().len() * 3);

        for (a, b) in skeleton.segments() {
            items.push(RenderItem::Line {
                from: joint_pos(a),
                to: joint_pos(b),
                stroke: Stroke::new(LIMB_THICKNESS, LIMB_COLOR),
            });
        }

        for joint in skeleton.joints() {
            let fill = if selected == Some(joint.name) {
                SELECTED_JOINT_COLOR
            } else {
                JOINT_COLOR
            };
            items.push(RenderItem::Dot {
                center: joint_pos(joint),
                radius: JOINT_RADIUS,
                fill,
            });
            items.push(RenderItem::Label {
                anchor: Pos2::new(
                    joint.x.saturating_add(LABEL_OFFSET_X) as f32,
                    joint.y.saturating_add(LABEL_OFFSET_Y) as f32,
                ),
                text: joint.name.as_str(),
                font_size: self.label_font.size,
                color: LABEL_COLOR,
            });
        }

        items
    }

    /// Clears `canvas` to the base color and paints `items` relative to its origin.
    pub fn paint(&self, painter: &egui::Painter, canvas: Rect, items: &[RenderItem]) {
        painter.rect_filled(canvas, 0.0, CANVAS_COLOR);
        let offset = canvas.min.to_vec2();

        for item in items {
            match item {
                RenderItem::Line { from, to, stroke } => {
                    painter.line_segment([*from + offset, *to + offset], *stroke);
                }
                RenderItem::Dot {
                    center,
                    radius,
                    fill,
                } => {
                    painter.circle_filled(*center + offset, *radius, *fill);
                }
                RenderItem::Label {
                    anchor,
                    text,
                    font_size,
                    color,
                } => {
                    painter.text(
                        *anchor + offset,
                        Align2::LEFT_BOTTOM,
                        *text,
                        FontId::new(*font_size, self.label_font.family.clone()),
                        *color,
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dots(items: &[RenderItem]) -> Vec<(Pos2, Color32)> {
        items
            .iter()
            .filter_map(|item| match item {
                RenderItem::Dot { center, fill, .. } => Some((*center, *fill)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn one_line_per_connection_then_dot_and_label_per_joint() {
        let items = SkeletonRenderer::default().render(&Skeleton::default(), None);

        assert_eq!(items.len(), 12 + 2 * JointName::COUNT);
        assert!(items[..12]
            .iter()
            .all(|item| matches!(item, RenderItem::Line { stroke, .. }
                if *stroke == Stroke::new(2.0, Color32::from_rgb(255, 255, 0)))));
        assert_eq!(
            items[0],
            RenderItem::Line {
                from: Pos2::new(390.0, 252.0),
                to: Pos2::new(621.0, 256.0),
                stroke: Stroke::new(LIMB_THICKNESS, LIMB_COLOR),
            }
        );
    }

    #[test]
    fn selected_joint_is_green_others_blue() {
        let items =
            SkeletonRenderer::default().render(&Skeleton::default(), Some(JointName::RightKnee));

        for (center, fill) in dots(&items) {
            if center == Pos2::new(575.0, 703.0) {
                assert_eq!(fill, Color32::from_rgb(0, 255, 0));
            } else {
                assert_eq!(fill, Color32::from_rgb(0, 0, 255));
            }
        }
    }

    #[test]
    fn labels_sit_above_left_of_their_joint() {
        let items = SkeletonRenderer::default().render(&Skeleton::default(), None);

        let wrist_label = items.iter().find_map(|item| match item {
            RenderItem::Label {
                anchor,
                text: "rightWrist",
                font_size,
                color,
            } => Some((*anchor, *font_size, *color)),
            _ => None,
        });
        assert_eq!(
            wrist_label,
            Some((
                Pos2::new(848.0, 393.0),
                LABEL_FONT_SCALE * LABEL_BASE_FONT_SIZE,
                Color32::WHITE
            ))
        );
    }

    #[test]
    fn rendering_reflects_moves_without_touching_the_skeleton() {
        let mut skeleton = Skeleton::default();
        skeleton.set_position(JointName::LeftElbow, 10, 20);
        let before = skeleton.clone();

        let items = SkeletonRenderer::default().render(&skeleton, None);

        assert_eq!(skeleton, before);
        assert!(dots(&items).contains(&(Pos2::new(10.0, 20.0), JOINT_COLOR)));
    }
}
