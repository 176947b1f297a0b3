#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// +1 for forward, -1 for backward. Also the sign of the screen-space travel.
    pub fn sign(self) -> i32 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct TransitionPlan {
    pub from: usize,
    pub to: usize,
    pub direction: Direction,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum NavigatorState {
    Resting,                        // Showing ring[current_index], ready to move
    Transitioning(TransitionPlan),  // A transition is in flight, navigation requests are dropped
}
