use tracing::{debug, info};
use crate::autoplay::Autoplay;
use crate::controls::Controls;
use crate::gesture::{GestureObserver, PointerInput};
use crate::navigator::Navigator;
use crate::state::{Direction, TransitionPlan};

/// The animation engine behind the carousel. It owns the frame handles and is
/// the only thing that touches them.
pub trait Animator {
    /// Starts animating `plan`. Returns false, animating nothing, when a frame
    /// handle for either end is missing.
    fn start(&mut self, plan: TransitionPlan) -> bool;
    /// Advances the running animation; true once it has completed.
    fn advance(&mut self, dt: f32) -> bool;
    /// Settles the frames after `plan` completed.
    fn finish(&mut self, plan: TransitionPlan);
    /// Drops the running animation where it stands.
    fn abandon(&mut self);
}

pub struct Carousel<A: Animator> {
    navigator: Navigator,
    autoplay: Autoplay,
    gestures: GestureObserver,
    controls: Controls,
    animator: A,
    hovered: bool,
    hovered_control: Option<Direction>,
    mounted: bool,
}

impl<A: Animator> Carousel<A> {
    pub fn new(slide_count: usize, autoplay_ms: i64, controls: Controls, animator: A) -> Self {
        let autoplay = Autoplay::new(autoplay_ms);
        if !autoplay.is_enabled() {
            info!(autoplay_ms, "autoplay disabled");
        }
        Self {
            navigator: Navigator::new(slide_count),
            autoplay,
            gestures: GestureObserver::new(),
            controls,
            animator,
            hovered: false,
            hovered_control: None,
            mounted: true,
        }
    }

    #[cfg(test)]
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn animator(&self) -> &A {
        &self.animator
    }

    pub fn controls(&self) -> &Controls {
        &self.controls
    }

    #[cfg(test)]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn hovered_control(&self) -> Option<Direction> {
        self.hovered_control
    }

    /// Requests one step in `direction`. True when a transition started.
    pub fn navigate(&mut self, direction: Direction) -> bool {
        if !self.mounted {
            return false;
        }
        let Some(plan) = self.navigator.plan(direction) else {
            debug!(?direction, "navigation dropped");
            return false;
        };
        if !self.animator.start(plan) {
            debug!(from = plan.from, to = plan.to, "frame handle missing, navigation skipped");
            return false;
        }
        self.navigator.begin(plan);
        debug!(from = plan.from, to = plan.to, ?direction, "transition started");
        true
    }

    pub fn update(&mut self, dt: f32, input: &PointerInput) {
        if !self.mounted {
            return;
        }
        self.track_hover(input);

        let control = input.position.and_then(|(x, y)| self.controls.hit(x, y));
        self.hovered_control = control;

        let intent = match control {
            Some(direction) if input.pressed => {
                self.gestures.cancel_drag();
                Some(direction)
            }
            _ => self.gestures.observe(input),
        };
        if let Some(direction) = intent {
            self.navigate(direction);
        }

        if self.autoplay.tick(dt) {
            self.navigate(Direction::Forward);
        }

        if self.navigator.is_animating() && self.animator.advance(dt) {
            if let Some(plan) = self.navigator.complete() {
                self.animator.finish(plan);
                debug!(index = plan.to, slide = ?self.navigator.current_slide(), "transition complete");
            }
        }
    }

    /// Stops autoplay and input observation and drops any transition in
    /// flight without committing it. Later updates do nothing.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.autoplay.stop();
        self.gestures.kill();
        if let Some(plan) = self.navigator.abandon() {
            self.animator.abandon();
            debug!(from = plan.from, to = plan.to, "transition abandoned");
        }
    }

    fn track_hover(&mut self, input: &PointerInput) {
        let hovered = input.position.is_some();
        if hovered == self.hovered {
            return;
        }
        self.hovered = hovered;
        if hovered {
            self.autoplay.pause();
        } else {
            self.autoplay.resume();
        }
        debug!(hovered, "pointer hover changed");
    }
}

impl<A: Animator> Drop for Carousel<A> {
    fn drop(&mut self) {
        self.unmount();
    }
}
