//! Tactile feedback hook.
//!
//! The flow reports *what kind* of pulse fits a transition; the host maps it to
//! its platform haptics API or ignores it. Feedback never changes flow state.

use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImpactStyle {
    Light,
    Medium,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feedback {
    /// A selection changed.
    Selection,
    Impact(ImpactStyle),
    /// The flow finished.
    Success,
}

pub trait FeedbackSink: 'static {
    fn emit(&self, feedback: Feedback);
}

/// Adapts a closure into a sink, e.g. `FeedbackFn(|f| platform::vibrate(f))`.
pub struct FeedbackFn<F>(pub F);

impl<F: Fn(Feedback) + 'static> FeedbackSink for FeedbackFn<F> {
    fn emit(&self, feedback: Feedback) {
        (self.0)(feedback)
    }
}

pub struct NoFeedback;

impl FeedbackSink for NoFeedback {
    fn emit(&self, _feedback: Feedback) {}
}

/// Collects every pulse; clones share the buffer.
#[derive(Clone, Default)]
pub struct RecordingFeedback {
    events: Rc<RefCell<Vec<Feedback>>>,
}

impl RecordingFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Feedback> {
        self.events.borrow().clone()
    }

    pub fn take(&self) -> Vec<Feedback> {
        std::mem::take(&mut *self.events.borrow_mut())
    }
}

impl FeedbackSink for RecordingFeedback {
    fn emit(&self, feedback: Feedback) {
        self.events.borrow_mut().push(feedback);
    }
}

/// Gate between the flow and the host sink, honoring `haptics_enabled`.
pub(crate) struct Haptics {
    enabled: bool,
    sink: Box<dyn FeedbackSink>,
}

impl Haptics {
    pub(crate) fn new(enabled: bool, sink: Box<dyn FeedbackSink>) -> Self {
        Self { enabled, sink }
    }

    pub(crate) fn emit(&self, feedback: Feedback) {
        if self.enabled {
            log::trace!("feedback {feedback:?}");
            self.sink.emit(feedback);
        }
    }
}
