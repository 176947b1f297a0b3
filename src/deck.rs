use raylib::prelude::*;
use crate::carousel::Animator;
use crate::layout::FrameGeometry;
use crate::slide::SlideFrame;
use crate::state::TransitionPlan;
use crate::transition::Transition;

/// Frame handles keyed by ring index. A slot is `None` when its frame is not
/// available; transitions touching it are refused.
pub struct Deck {
    frames: Vec<Option<SlideFrame>>,
    transition: Option<Transition>,
    duration: f32,
}

impl Deck {
    pub fn new(mut frames: Vec<Option<SlideFrame>>, duration: f32) -> Self {
        // The navigator rests on ring index 1 at mount
        if let Some(Some(first)) = frames.get_mut(1) {
            first.active = true;
        }
        Self {
            frames,
            transition: None,
            duration,
        }
    }

    fn frame_mut(&mut self, index: usize) -> Option<&mut SlideFrame> {
        self.frames.get_mut(index).and_then(Option::as_mut)
    }

    fn has_frame(&self, index: usize) -> bool {
        matches!(self.frames.get(index), Some(Some(_)))
    }

    fn apply_geometry(&mut self) {
        let Some(transition) = &self.transition else {
            return;
        };
        let (plan, outgoing, incoming) = (transition.plan, transition.outgoing(), transition.incoming());
        if let Some(frame) = self.frame_mut(plan.from) {
            frame.geometry = outgoing;
        }
        if let Some(frame) = self.frame_mut(plan.to) {
            frame.geometry = incoming;
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        for frame in self.frames.iter().flatten() {
            frame.draw(d);
        }
    }
}

impl Animator for Deck {
    fn start(&mut self, plan: TransitionPlan) -> bool {
        if !self.has_frame(plan.from) || !self.has_frame(plan.to) {
            return false;
        }

        self.transition = Some(Transition::new(plan, self.duration));
        if let Some(frame) = self.frame_mut(plan.to) {
            frame.active = true;
        }
        self.apply_geometry();
        true
    }

    fn advance(&mut self, dt: f32) -> bool {
        let done = match self.transition.as_mut() {
            Some(transition) => transition.update(dt),
            None => true,
        };
        self.apply_geometry();
        done
    }

    fn finish(&mut self, plan: TransitionPlan) {
        self.transition = None;
        if let Some(frame) = self.frame_mut(plan.from) {
            frame.active = false;
            frame.geometry = FrameGeometry::RESTING;
        }
        if let Some(frame) = self.frame_mut(plan.to) {
            frame.geometry = FrameGeometry::RESTING;
        }
    }

    fn abandon(&mut self) {
        self.transition = None;
    }
}
