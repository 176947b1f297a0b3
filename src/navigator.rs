use crate::ring::SlideRing;
use crate::state::{Direction, NavigatorState, TransitionPlan};

/// Cyclic transition state over a ring of `slide_count + 2` frames.
///
/// The index only moves when a transition completes; while one is in flight
/// every further request is dropped.
pub struct Navigator {
    ring: SlideRing<usize>,
    current_index: usize,
    state: NavigatorState,
}

impl Navigator {
    pub fn new(slide_count: usize) -> Self {
        let sources: Vec<usize> = (0..slide_count).collect();
        Self {
            ring: SlideRing::new(&sources),
            current_index: 1,
            state: NavigatorState::Resting,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Position of the resting slide in the source order.
    pub fn current_slide(&self) -> Option<usize> {
        self.ring.real_index(self.current_index)
    }

    #[cfg(test)]
    pub fn state(&self) -> NavigatorState {
        self.state
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.state, NavigatorState::Transitioning(_))
    }

    /// The transition a `navigate(direction)` would start, or `None` when one
    /// is already in flight or there is nothing to move between.
    pub fn plan(&self, direction: Direction) -> Option<TransitionPlan> {
        if self.is_animating() || self.ring.real_len() < 2 {
            return None;
        }
        Some(TransitionPlan {
            from: self.current_index,
            to: self.ring.step(self.current_index, direction),
            direction,
        })
    }

    pub fn begin(&mut self, plan: TransitionPlan) {
        if self.is_animating() || plan.from != self.current_index {
            return;
        }
        self.state = NavigatorState::Transitioning(plan);
    }

    /// Commits the in-flight transition. Returns the plan that completed.
    pub fn complete(&mut self) -> Option<TransitionPlan> {
        let NavigatorState::Transitioning(plan) = self.state else {
            return None;
        };
        self.current_index = plan.to;
        self.state = NavigatorState::Resting;
        Some(plan)
    }

    /// Drops the in-flight transition without moving the index.
    pub fn abandon(&mut self) -> Option<TransitionPlan> {
        let NavigatorState::Transitioning(plan) = self.state else {
            return None;
        };
        self.state = NavigatorState::Resting;
        Some(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn navigate(nav: &mut Navigator, direction: Direction) {
        let plan = nav.plan(direction).expect("navigator should accept the request");
        nav.begin(plan);
        nav.complete();
    }

    #[test]
    fn starts_resting_on_first_real_slide() {
        let nav = Navigator::new(4);
        assert_eq!(nav.current_index(), 1);
        assert_eq!(nav.current_slide(), Some(0));
        assert_eq!(nav.state(), NavigatorState::Resting);
    }

    #[test]
    fn forward_steps_return_to_start_after_n() {
        for n in 2..9 {
            let mut nav = Navigator::new(n);
            let start = nav.current_index();
            for _ in 0..n {
                navigate(&mut nav, Direction::Forward);
                assert!((1..=n).contains(&nav.current_index()));
            }
            assert_eq!(nav.current_index(), start, "ring of {n} slides");
        }
    }

    #[test]
    fn three_slide_walkthrough() {
        let mut nav = Navigator::new(3);
        let mut seen = vec![nav.current_index()];
        for _ in 0..3 {
            navigate(&mut nav, Direction::Forward);
            seen.push(nav.current_index());
        }
        assert_eq!(seen, vec![1, 2, 3, 1]);
    }

    #[test]
    fn forward_shows_the_following_slide() {
        let mut nav = Navigator::new(5);
        for _ in 0..12 {
            let before = nav.current_slide().unwrap();
            navigate(&mut nav, Direction::Forward);
            assert_eq!(nav.current_slide().unwrap(), (before + 1) % 5);
        }
    }

    #[test]
    fn backward_wraps_first_to_last() {
        let mut nav = Navigator::new(4);
        navigate(&mut nav, Direction::Backward);
        assert_eq!(nav.current_index(), 4);
        assert_eq!(nav.current_slide(), Some(3));
        navigate(&mut nav, Direction::Backward);
        assert_eq!(nav.current_index(), 3);
    }

    #[test]
    fn requests_in_flight_are_dropped() {
        let mut nav = Navigator::new(3);
        let plan = nav.plan(Direction::Forward).unwrap();
        nav.begin(plan);

        assert!(nav.is_animating());
        assert_eq!(nav.plan(Direction::Forward), None);
        assert_eq!(nav.plan(Direction::Backward), None);

        let other = TransitionPlan { from: 1, to: 3, direction: Direction::Backward };
        nav.begin(other);
        assert_eq!(nav.state(), NavigatorState::Transitioning(plan));
        assert_eq!(nav.current_index(), 1);

        assert_eq!(nav.complete(), Some(plan));
        assert_eq!(nav.current_index(), 2);
    }

    #[test]
    fn abandon_keeps_the_index() {
        let mut nav = Navigator::new(3);
        nav.begin(nav.plan(Direction::Forward).unwrap());
        assert!(nav.abandon().is_some());
        assert_eq!(nav.current_index(), 1);
        assert!(!nav.is_animating());
        assert_eq!(nav.complete(), None);
    }

    #[test]
    fn fewer_than_two_slides_never_move() {
        for n in 0..2 {
            let nav = Navigator::new(n);
            assert_eq!(nav.plan(Direction::Forward), None);
            assert_eq!(nav.plan(Direction::Backward), None);
            assert_eq!(nav.current_index(), 1);
        }
        assert_eq!(Navigator::new(0).current_slide(), None);
    }
}
