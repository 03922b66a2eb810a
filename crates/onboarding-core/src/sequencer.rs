//! The "personalizing your experience" sequence.
//!
//! A small deadline-driven state machine. It never sleeps: the host polls it
//! with the current instant and it fires whatever became due, chaining each
//! deadline from the previous one so a late poll catches up without drift.
//!
//! ```text
//! Stepping --(step_delay) x N--> Settling --(settle_delay)--> AllSet --(all_set_delay)--> Done
//! ```

use std::rc::Rc;

use web_time::Instant;

use crate::OnboardingConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Stepping,
    /// Every step is ticked and progress is pinned at 1.0.
    Settling,
    AllSet,
    Done,
    Cancelled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequencerEvent {
    /// `current_step` moved to this value (1-based count of finished steps).
    Step(usize),
    AllSet,
    Finished,
}

pub struct LoadingSequencer {
    config: Rc<OnboardingConfig>,
    stage: Stage,
    current_step: usize,
    progress: f32,
    deadline: Option<Instant>,
}

impl LoadingSequencer {
    pub fn start(config: Rc<OnboardingConfig>, now: Instant) -> Self {
        let timings = config.timings;
        let (stage, progress, deadline) = if config.loading_steps.is_empty() {
            // Nothing to step through; skip straight to the settle pause.
            (Stage::Settling, 1.0, now + timings.settle_delay())
        } else {
            (Stage::Stepping, 0.0, now + timings.step_delay())
        };
        log::debug!(
            "loading sequence started: {} steps",
            config.loading_steps.len()
        );
        Self {
            config,
            stage,
            current_step: 0,
            progress,
            deadline: Some(deadline),
        }
    }

    /// Fires every transition due at `now`, in order.
    pub fn poll(&mut self, now: Instant) -> Vec<SequencerEvent> {
        let mut events = Vec::new();
        while let Some(due) = self.deadline {
            if due > now {
                break;
            }
            match self.fire(due) {
                Some(event) => events.push(event),
                None => break,
            }
        }
        events
    }

    fn fire(&mut self, due: Instant) -> Option<SequencerEvent> {
        let timings = self.config.timings;
        match self.stage {
            Stage::Stepping => {
                let total = self.config.loading_steps.len();
                self.current_step += 1;
                log::trace!("loading step {}/{}", self.current_step, total);
                if self.current_step >= total {
                    self.progress = 1.0;
                    self.stage = Stage::Settling;
                    self.deadline = Some(due + timings.settle_delay());
                } else {
                    self.progress = self.current_step as f32 / total as f32;
                    self.deadline = Some(due + timings.step_delay());
                }
                Some(SequencerEvent::Step(self.current_step))
            }
            Stage::Settling => {
                self.stage = Stage::AllSet;
                self.deadline = Some(due + timings.all_set_delay());
                Some(SequencerEvent::AllSet)
            }
            Stage::AllSet => {
                self.stage = Stage::Done;
                self.deadline = None;
                Some(SequencerEvent::Finished)
            }
            // Terminal; a stray deadline is dropped without reporting anything.
            Stage::Done | Stage::Cancelled => {
                self.deadline = None;
                None
            }
        }
    }

    /// Drops the pending deadline. Returns false if already done or cancelled.
    pub fn cancel(&mut self) -> bool {
        match self.stage {
            Stage::Done | Stage::Cancelled => false,
            _ => {
                self.stage = Stage::Cancelled;
                self.deadline = None;
                true
            }
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn steps(&self) -> &[String] {
        &self.config.loading_steps
    }

    /// Caption under the progress bar; rotates with the step while stepping.
    pub fn caption(&self) -> Option<&str> {
        let texts = &self.config.loading_texts;
        match self.stage {
            Stage::Stepping | Stage::Settling if !texts.is_empty() => {
                Some(texts[self.current_step % texts.len()].as_str())
            }
            _ => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.stage, Stage::Done | Stage::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use web_time::Duration;

    fn config(steps: &[&str]) -> Rc<OnboardingConfig> {
        Rc::new(OnboardingConfig {
            loading_steps: steps.iter().map(|s| s.to_string()).collect(),
            loading_texts: vec!["one".into(), "two".into()],
            ..OnboardingConfig::default()
        })
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn steps_then_settle_then_all_set() {
        let t0 = Instant::now();
        let mut s = LoadingSequencer::start(config(&["A", "B"]), t0);
        assert_eq!(s.progress(), 0.0);
        assert_eq!(s.caption(), Some("one"));

        assert!(s.poll(t0 + ms(799)).is_empty());
        assert_eq!(s.poll(t0 + ms(800)), vec![SequencerEvent::Step(1)]);
        assert_eq!(s.progress(), 0.5);
        assert_eq!(s.caption(), Some("two"));

        assert_eq!(s.poll(t0 + ms(1600)), vec![SequencerEvent::Step(2)]);
        assert_eq!(s.progress(), 1.0);
        assert_eq!(s.stage(), Stage::Settling);

        assert_eq!(s.poll(t0 + ms(2100)), vec![SequencerEvent::AllSet]);
        assert_eq!(s.caption(), None);
        assert_eq!(s.deadline(), Some(t0 + ms(3600)));

        assert!(s.poll(t0 + ms(3599)).is_empty());
        assert_eq!(s.poll(t0 + ms(3600)), vec![SequencerEvent::Finished]);
        assert!(s.is_finished());
        assert_eq!(s.deadline(), None);
        assert!(s.poll(t0 + ms(10_000)).is_empty());
    }

    #[test]
    fn late_poll_catches_up_in_order() {
        let t0 = Instant::now();
        let mut s = LoadingSequencer::start(config(&["A", "B", "C"]), t0);
        let events = s.poll(t0 + ms(60_000));
        assert_eq!(
            events,
            vec![
                SequencerEvent::Step(1),
                SequencerEvent::Step(2),
                SequencerEvent::Step(3),
                SequencerEvent::AllSet,
                SequencerEvent::Finished,
            ]
        );
    }

    #[test]
    fn empty_steps_start_at_full_progress() {
        let t0 = Instant::now();
        let mut s = LoadingSequencer::start(config(&[]), t0);
        assert_eq!(s.progress(), 1.0);
        assert_eq!(s.stage(), Stage::Settling);
        assert_eq!(s.current_step(), 0);
        let events = s.poll(t0 + ms(2000));
        assert_eq!(events, vec![SequencerEvent::AllSet, SequencerEvent::Finished]);
        assert!(!events.iter().any(|e| matches!(e, SequencerEvent::Step(_))));
    }

    #[test]
    fn finished_is_reported_once() {
        let t0 = Instant::now();
        let mut s = LoadingSequencer::start(config(&["A"]), t0);
        let mut finished = 0;
        for n in 0..40 {
            let events = s.poll(t0 + ms(n * 250));
            finished += events
                .iter()
                .filter(|e| **e == SequencerEvent::Finished)
                .count();
        }
        assert_eq!(finished, 1);
        assert_eq!(s.stage(), Stage::Done);
        assert!(s.poll(t0 + ms(60_000)).is_empty());
    }

    #[test]
    fn cancel_is_idempotent_and_final() {
        let t0 = Instant::now();
        let mut s = LoadingSequencer::start(config(&["A"]), t0);
        assert!(s.cancel());
        assert!(!s.cancel());
        assert_eq!(s.deadline(), None);
        assert!(s.poll(t0 + ms(60_000)).is_empty());
        assert_eq!(s.stage(), Stage::Cancelled);
    }
}
