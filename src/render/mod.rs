use crate::geometry::{CanvasPoint, CanvasRect, Rgba};
use crate::shape::{ShapeKind, ShapeRecord};

/// Corner radius for rounded squares.
pub const CORNER_RADIUS: f32 = 15.0;

pub const LABEL_COLOR: Rgba = Rgba::opaque(0x00, 0x00, 0x00);
pub const LABEL_TEXT_SIZE: f32 = 48.0;
pub const LABEL_ORIGIN: CanvasPoint = CanvasPoint::new(20.0, 60.0);

/// Drawing primitive the host surface replays in order.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillCircle {
        center: CanvasPoint,
        radius: f32,
        color: Rgba,
    },
    FillRect {
        rect: CanvasRect,
        color: Rgba,
    },
    FillRoundedRect {
        rect: CanvasRect,
        corner_radius: f32,
        color: Rgba,
    },
    Label {
        origin: CanvasPoint,
        text_size: f32,
        color: Rgba,
        text: String,
    },
}

/// Map one record to its primitive.
pub fn shape_command(record: &ShapeRecord) -> DrawCommand {
    match record.kind {
        ShapeKind::Circle => DrawCommand::FillCircle {
            center: record.center,
            radius: record.size / 2.0,
            color: record.color,
        },
        ShapeKind::Square => DrawCommand::FillRect {
            rect: record.bounding_rect(),
            color: record.color,
        },
        ShapeKind::RoundedSquare => DrawCommand::FillRoundedRect {
            rect: record.bounding_rect(),
            corner_radius: effective_corner_radius(record.size),
            color: record.color,
        },
    }
}

/// Full scene: the count label first, then every shape in insertion order, so
/// shapes stamped later paint over earlier ones and over the label.
pub fn scene_commands(records: &[ShapeRecord], count_label: &str) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(records.len() + 1);
    commands.push(DrawCommand::Label {
        origin: LABEL_ORIGIN,
        text_size: LABEL_TEXT_SIZE,
        color: LABEL_COLOR,
        text: format!("{count_label}{}", records.len()),
    });
    commands.extend(records.iter().map(shape_command));
    commands
}

/// Keep the rounded corners inside the square: the radius never exceeds half
/// the side.
fn effective_corner_radius(side: f32) -> f32 {
    CORNER_RADIUS.min(side / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(kind: ShapeKind, size: f32) -> ShapeRecord {
        ShapeRecord::new(
            kind,
            Rgba::opaque(0xAB, 0xCD, 0xEF),
            size,
            CanvasPoint::new(100.0, 80.0),
        )
    }

    #[test]
    fn circle_maps_to_half_size_radius() {
        let command = shape_command(&record(ShapeKind::Circle, 40.0));
        assert_eq!(
            command,
            DrawCommand::FillCircle {
                center: CanvasPoint::new(100.0, 80.0),
                radius: 20.0,
                color: Rgba::opaque(0xAB, 0xCD, 0xEF),
            }
        );
    }

    #[test]
    fn square_maps_to_a_centered_rect_with_side_equal_to_size() {
        let command = shape_command(&record(ShapeKind::Square, 40.0));
        assert_eq!(
            command,
            DrawCommand::FillRect {
                rect: CanvasRect::new(80.0, 60.0, 40.0, 40.0),
                color: Rgba::opaque(0xAB, 0xCD, 0xEF),
            }
        );
    }

    #[test]
    fn rounded_square_uses_the_fixed_corner_radius() {
        let command = shape_command(&record(ShapeKind::RoundedSquare, 40.0));
        let DrawCommand::FillRoundedRect {
            rect,
            corner_radius,
            ..
        } = &command
        else {
            panic!("expected a rounded rect, got {command:?}");
        };
        assert_eq!(*rect, CanvasRect::new(80.0, 60.0, 40.0, 40.0));
        assert_eq!(*corner_radius, CORNER_RADIUS);
    }

    #[test]
    fn tiny_rounded_square_clamps_the_radius_to_half_its_side() {
        let command = shape_command(&record(ShapeKind::RoundedSquare, 20.0));
        let DrawCommand::FillRoundedRect { corner_radius, .. } = &command else {
            panic!("expected a rounded rect, got {command:?}");
        };
        assert_eq!(*corner_radius, 10.0);
    }

    #[test]
    fn scene_paints_the_label_first_then_shapes_in_insertion_order() {
        let records = [
            record(ShapeKind::Circle, 30.0),
            record(ShapeKind::Square, 30.0),
        ];
        let commands = scene_commands(&records, "Shapes: ");
        assert_eq!(commands.len(), 3);
        let DrawCommand::Label { ref text, .. } = commands[0] else {
            panic!("expected the label first, got {:?}", commands[0]);
        };
        assert_eq!(text, "Shapes: 2");
        assert!(matches!(commands[1], DrawCommand::FillCircle { .. }));
        assert!(matches!(commands[2], DrawCommand::FillRect { .. }));
    }

    #[test]
    fn empty_scene_still_shows_a_zero_count() {
        let commands = scene_commands(&[], "Shapes: ");
        assert_eq!(commands.len(), 1);
        let DrawCommand::Label { ref text, .. } = commands[0] else {
            panic!("expected only the label, got {:?}", commands[0]);
        };
        assert_eq!(text, "Shapes: 0");
    }
}
