//! Drag gesture tracking for reply targeting.
//!
//! A bubble drag is tracked as an explicit value from pointer-down to
//! pointer-up rather than as attribute state on the element, so the
//! completion rule is a pure function of recorded coordinates.

#[cfg(test)]
#[path = "gesture_test.rs"]
mod gesture_test;

use wire::ReplyRef;

/// Minimum rightward travel, in CSS pixels, for a drag to arm a reply.
pub const REPLY_DRAG_THRESHOLD_PX: f64 = 100.0;

/// An in-progress bubble drag, recorded at pointer-down.
#[derive(Clone, Debug, PartialEq)]
pub struct ReplyDrag {
    /// Pointer that started the gesture.
    pub pointer_id: i32,
    /// Viewport x coordinate at pointer-down.
    pub start_x: f64,
    /// Reply snapshot to arm if the gesture completes.
    pub target: ReplyRef,
}

impl ReplyDrag {
    /// Finish the gesture. Returns the reply target when the same pointer
    /// travelled rightward past the threshold, `None` otherwise.
    #[must_use]
    pub fn complete(self, pointer_id: i32, end_x: f64) -> Option<ReplyRef> {
        if pointer_id == self.pointer_id && end_x - self.start_x > REPLY_DRAG_THRESHOLD_PX {
            Some(self.target)
        } else {
            None
        }
    }
}

/// At most one drag is tracked at a time. Finishing or cancelling always
/// consumes the tracked gesture, so a drag that ended elsewhere can never
/// arm a reply from a later, unrelated release.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DragTracker {
    active: Option<ReplyDrag>,
}

impl DragTracker {
    /// Start tracking a gesture, replacing any previous one.
    pub fn begin(&mut self, drag: ReplyDrag) {
        self.active = Some(drag);
    }

    /// Drop the tracked gesture without arming anything.
    pub fn cancel(&mut self) {
        self.active = None;
    }

    /// End the tracked gesture. The gesture is consumed whether or not it
    /// arms a reply.
    pub fn finish(&mut self, pointer_id: i32, end_x: f64) -> Option<ReplyRef> {
        self.active.take().and_then(|drag| drag.complete(pointer_id, end_x))
    }
}
