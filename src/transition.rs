use raylib::prelude::*;
use crate::constants::INNER_STRETCH;
use crate::layout::FrameGeometry;
use crate::state::{Direction, TransitionPlan};

/// One slide change: the outgoing frame leaves in the direction of travel
/// while the incoming one enters from the opposite edge. Every tween shares
/// the same easing and duration, so the two frames stay edge to edge.
pub struct Transition {
    pub plan: TransitionPlan,

    duration: f32,
    timer: f32,
    finished: bool,

    outgoing: FrameGeometry,
    incoming: FrameGeometry,
    outgoing_end: FrameGeometry,
    incoming_end: FrameGeometry,

    tween_outgoing_offset: ease::Tween,
    tween_outgoing_scale: ease::Tween,
    tween_incoming_offset: ease::Tween,
    tween_incoming_inner: ease::Tween,
    tween_incoming_scale: ease::Tween,
}

impl Transition {
    pub fn new(plan: TransitionPlan, duration: f32) -> Self {
        let dir = plan.direction.sign() as f32;

        // Stretch anchors on the leading edge for the outgoing image, trailing edge for the incoming one
        let (outgoing_origin, incoming_origin) = match plan.direction {
            Direction::Forward => (1.0, 0.0),
            Direction::Backward => (0.0, 1.0),
        };

        let outgoing = FrameGeometry { inner_origin: outgoing_origin, ..FrameGeometry::RESTING };
        let incoming = FrameGeometry {
            offset: dir,
            inner_offset: -dir,
            inner_scale: INNER_STRETCH,
            inner_origin: incoming_origin,
        };
        let outgoing_end = FrameGeometry { offset: -dir, inner_scale: INNER_STRETCH, ..outgoing };
        let incoming_end = FrameGeometry { inner_origin: incoming_origin, ..FrameGeometry::RESTING };

        Self {
            plan,
            duration,
            timer: 0.0,
            finished: duration <= 0.0,
            outgoing,
            incoming,
            outgoing_end,
            incoming_end,
            tween_outgoing_offset: ease::Tween::new(ease::cubic_in_out, 0.0, -dir, duration),
            tween_outgoing_scale:  ease::Tween::new(ease::cubic_in_out, 1.0, INNER_STRETCH, duration),
            tween_incoming_offset: ease::Tween::new(ease::cubic_in_out, dir, 0.0, duration),
            tween_incoming_inner:  ease::Tween::new(ease::cubic_in_out, -dir, 0.0, duration),
            tween_incoming_scale:  ease::Tween::new(ease::cubic_in_out, INNER_STRETCH, 1.0, duration),
        }
    }

    pub fn outgoing(&self) -> FrameGeometry {
        if self.finished { self.outgoing_end } else { self.outgoing }
    }

    pub fn incoming(&self) -> FrameGeometry {
        if self.finished { self.incoming_end } else { self.incoming }
    }

    #[cfg(test)]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advances every tween by `dt`; true once the transition has completed.
    pub fn update(&mut self, dt: f32) -> bool {
        if self.finished {
            return true;
        }

        self.timer += dt;
        if self.timer >= self.duration {
            self.finished = true;
            return true;
        }

        self.outgoing.offset = self.tween_outgoing_offset.apply(dt);
        self.outgoing.inner_scale = self.tween_outgoing_scale.apply(dt);
        self.incoming.offset = self.tween_incoming_offset.apply(dt);
        self.incoming.inner_offset = self.tween_incoming_inner.apply(dt);
        self.incoming.inner_scale = self.tween_incoming_scale.apply(dt);
        false
    }
}
