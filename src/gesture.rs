use crate::constants::DRAG_TOLERANCE;
use crate::state::Direction;

/// Raw input sampled once per frame, in render coordinates.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PointerInput {
    pub position: Option<(f32, f32)>, // None when the cursor is outside the window
    pub pressed: bool,
    pub down: bool,
    pub released: bool,
    pub wheel: f32,                   // Positive when scrolling up
    pub key: Option<Direction>,
}

/// Turns wheel, drag and key input into directional intents.
pub struct GestureObserver {
    tolerance: f32,
    drag_origin: Option<f32>,
    drag_fired: bool,
    killed: bool,
}

impl GestureObserver {
    pub fn new() -> Self {
        Self::with_tolerance(DRAG_TOLERANCE)
    }

    pub fn with_tolerance(tolerance: f32) -> Self {
        Self {
            tolerance,
            drag_origin: None,
            drag_fired: false,
            killed: false,
        }
    }

    /// Stops observing. Every later call to `observe` yields nothing.
    pub fn kill(&mut self) {
        self.killed = true;
        self.drag_origin = None;
    }

    #[cfg(test)]
    pub fn is_killed(&self) -> bool {
        self.killed
    }

    /// Forgets the drag in progress, e.g. when a press lands on a control.
    pub fn cancel_drag(&mut self) {
        self.drag_origin = None;
        self.drag_fired = false;
    }

    pub fn observe(&mut self, input: &PointerInput) -> Option<Direction> {
        if self.killed {
            return None;
        }

        if input.key.is_some() {
            return input.key;
        }

        // Wheel runs inverted: scrolling down moves forward
        if input.wheel < 0.0 {
            return Some(Direction::Forward);
        }
        if input.wheel > 0.0 {
            return Some(Direction::Backward);
        }

        self.observe_drag(input)
    }

    fn observe_drag(&mut self, input: &PointerInput) -> Option<Direction> {
        if input.pressed {
            self.drag_origin = input.position.map(|(_, y)| y);
            self.drag_fired = false;
        }

        let intent = match (self.drag_origin, input.position) {
            (Some(origin), Some((_, y))) if input.down && !self.drag_fired => {
                let travel = y - origin;
                if travel <= -self.tolerance {
                    Some(Direction::Forward)
                } else if travel >= self.tolerance {
                    Some(Direction::Backward)
                } else {
                    None
                }
            }
            _ => None,
        };
        if intent.is_some() {
            self.drag_fired = true;
        }

        if input.released || !input.down {
            self.drag_origin = None;
        }
        intent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: f32) -> PointerInput {
        PointerInput { position: Some((500.0, y)), down: true, ..Default::default() }
    }

    #[test]
    fn wheel_down_moves_forward() {
        let mut observer = GestureObserver::new();
        let down = PointerInput { wheel: -1.0, ..Default::default() };
        let up = PointerInput { wheel: 1.0, ..Default::default() };
        assert_eq!(observer.observe(&down), Some(Direction::Forward));
        assert_eq!(observer.observe(&up), Some(Direction::Backward));
        assert_eq!(observer.observe(&PointerInput::default()), None);
    }

    #[test]
    fn drag_must_clear_tolerance() {
        let mut observer = GestureObserver::new();
        let press = PointerInput { pressed: true, ..at(400.0) };
        assert_eq!(observer.observe(&press), None);
        assert_eq!(observer.observe(&at(395.0)), None);
        assert_eq!(observer.observe(&at(389.0)), Some(Direction::Forward));
    }

    #[test]
    fn one_intent_per_drag() {
        let mut observer = GestureObserver::new();
        observer.observe(&PointerInput { pressed: true, ..at(100.0) });
        assert_eq!(observer.observe(&at(150.0)), Some(Direction::Backward));
        assert_eq!(observer.observe(&at(300.0)), None);

        let release = PointerInput { released: true, down: false, ..at(300.0) };
        assert_eq!(observer.observe(&release), None);

        observer.observe(&PointerInput { pressed: true, ..at(300.0) });
        assert_eq!(observer.observe(&at(250.0)), Some(Direction::Forward));
    }

    #[test]
    fn cancelled_drag_is_ignored() {
        let mut observer = GestureObserver::new();
        observer.observe(&PointerInput { pressed: true, ..at(100.0) });
        observer.cancel_drag();
        assert_eq!(observer.observe(&at(200.0)), None);
    }

    #[test]
    fn keys_map_directly() {
        let mut observer = GestureObserver::new();
        let key = PointerInput { key: Some(Direction::Backward), ..Default::default() };
        assert_eq!(observer.observe(&key), Some(Direction::Backward));
    }

    #[test]
    fn killed_observer_is_silent() {
        let mut observer = GestureObserver::new();
        observer.kill();
        let wheel = PointerInput { wheel: -3.0, ..Default::default() };
        assert_eq!(observer.observe(&wheel), None);
        assert!(observer.is_killed());
    }
}
