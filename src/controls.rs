use raylib::prelude::*;
use crate::constants::*;
use crate::state::Direction;

/// The previous/next buttons in the bottom-right corner of the viewport.
pub struct Controls {
    previous: Vector2,
    next: Vector2,
    radius: f32,
}

impl Controls {
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        let radius = CONTROL_SIZE * 0.5;
        let center_y = viewport_height - CONTROL_MARGIN - radius;
        let next_x = viewport_width - CONTROL_MARGIN - radius;
        let previous_x = next_x - CONTROL_SIZE - CONTROL_GAP;
        Self {
            previous: Vector2::new(previous_x, center_y),
            next: Vector2::new(next_x, center_y),
            radius,
        }
    }

    pub fn hit(&self, x: f32, y: f32) -> Option<Direction> {
        let point = Vector2::new(x, y);
        if point.distance_to(self.previous) <= self.radius {
            Some(Direction::Backward)
        } else if point.distance_to(self.next) <= self.radius {
            Some(Direction::Forward)
        } else {
            None
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, hovered: Option<Direction>) {
        for (center, direction) in [(self.previous, Direction::Backward), (self.next, Direction::Forward)] {
            let alpha = if hovered == Some(direction) { 77 } else { 51 };
            d.draw_circle_v(center, self.radius, Color::new(255, 255, 255, alpha));
            d.draw_circle_lines(center.x as i32, center.y as i32, self.radius, Color::new(255, 255, 255, 77));

            // Chevron pointing in the direction of travel
            let dx = 4.0 * direction.sign() as f32;
            let tip = Vector2::new(center.x + dx, center.y);
            let top = Vector2::new(center.x - dx, center.y - 7.0);
            let bottom = Vector2::new(center.x - dx, center.y + 7.0);
            d.draw_line_ex(top, tip, 2.0, Color::WHITE);
            d.draw_line_ex(tip, bottom, 2.0, Color::WHITE);
        }
    }
}
