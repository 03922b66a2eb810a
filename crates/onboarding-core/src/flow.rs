use std::rc::Rc;

use web_time::Instant;

use crate::feedback::Haptics;
use crate::{
    Clock, Feedback, FeedbackSink, ImpactStyle, InterestSet, LoadingSequencer, NoFeedback,
    OnComplete, OnboardingConfig, OnboardingResult, SequencerEvent, Signal, SystemClock, Toggle,
    signal,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Page {
    Intro,
    Profession,
    Interests,
}

impl Page {
    pub const COUNT: usize = 3;
    pub const ALL: [Page; Page::COUNT] = [Page::Intro, Page::Profession, Page::Interests];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(i: usize) -> Option<Page> {
        Self::ALL.get(i).copied()
    }

    pub fn next(self) -> Option<Page> {
        Self::from_index(self.index() + 1)
    }

    pub fn prev(self) -> Option<Page> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    pub fn is_last(self) -> bool {
        self.next().is_none()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// The user is on one of the wizard pages.
    Pages,
    Loading,
    /// The completion callback has fired.
    Finished,
    /// Torn down before finishing; the callback will never fire.
    Cancelled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    Moved(Page),
    StartedLoading,
    /// Page not valid yet, or the wizard is no longer on its pages.
    Blocked,
}

/// One run of the onboarding wizard.
///
/// All state changes happen inside the calls below: user events
/// (`select_profession`, `toggle_interest`, `advance`, `back`, `skip`) and
/// host pumps (`pump`) while the loading screen runs. Invalid actions are
/// no-ops.
pub struct OnboardingFlow {
    config: Rc<OnboardingConfig>,
    clock: Box<dyn Clock>,
    haptics: Haptics,
    profession: String,
    interests: InterestSet,
    sequencer: Option<LoadingSequencer>,
    on_complete: Option<OnComplete>,

    page: Signal<Page>,
    phase: Signal<Phase>,
    progress: Signal<f32>,
    step: Signal<usize>,
    version: Signal<u64>,
}

impl OnboardingFlow {
    pub fn new(
        config: impl Into<Rc<OnboardingConfig>>,
        on_complete: impl FnOnce(OnboardingResult) + 'static,
    ) -> Self {
        let config = config.into();
        Self {
            clock: Box::new(SystemClock),
            haptics: Haptics::new(config.haptics_enabled, Box::new(NoFeedback)),
            profession: String::new(),
            interests: InterestSet::new(config.max_interest_selection),
            sequencer: None,
            on_complete: Some(Box::new(on_complete)),
            page: signal(Page::Intro),
            phase: signal(Phase::Pages),
            progress: signal(0.0),
            step: signal(0),
            version: signal(0),
            config,
        }
    }

    pub fn with_clock(mut self, clock: impl Clock) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Pulses reach `sink` only if the config has `haptics_enabled`.
    pub fn with_feedback(mut self, sink: impl FeedbackSink) -> Self {
        self.haptics = Haptics::new(self.config.haptics_enabled, Box::new(sink));
        self
    }

    pub fn config(&self) -> &Rc<OnboardingConfig> {
        &self.config
    }

    pub fn page(&self) -> Page {
        self.page.get()
    }

    pub fn phase(&self) -> Phase {
        self.phase.get()
    }

    pub fn profession(&self) -> &str {
        &self.profession
    }

    pub fn interests(&self) -> &[String] {
        self.interests.as_slice()
    }

    pub fn is_loading(&self) -> bool {
        self.phase() == Phase::Loading
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase(), Phase::Finished | Phase::Cancelled)
    }

    pub fn sequencer(&self) -> Option<&LoadingSequencer> {
        self.sequencer.as_ref()
    }

    pub fn page_signal(&self) -> Signal<Page> {
        self.page.clone()
    }

    pub fn phase_signal(&self) -> Signal<Phase> {
        self.phase.clone()
    }

    pub fn progress_signal(&self) -> Signal<f32> {
        self.progress.clone()
    }

    pub fn step_signal(&self) -> Signal<usize> {
        self.step.clone()
    }

    /// Bumped on every state change, including selections.
    pub fn version_signal(&self) -> Signal<u64> {
        self.version.clone()
    }

    fn bump(&self) {
        self.version.update(|v| *v = v.wrapping_add(1));
    }

    fn on_pages(&self) -> bool {
        self.phase() == Phase::Pages
    }

    // Selection

    /// Single-select; overwrites any prior choice.
    pub fn select_profession(&mut self, title: impl Into<String>) -> bool {
        if !self.on_pages() {
            return false;
        }
        let title = title.into();
        if !self.config.professions.contains(&title) {
            log::debug!("profession '{title}' is not in the catalog");
        }
        log::debug!("profession -> '{title}'");
        self.profession = title;
        self.haptics.emit(Feedback::Selection);
        self.bump();
        true
    }

    pub fn toggle_interest(&mut self, title: &str) -> Toggle {
        if !self.on_pages() {
            return Toggle::Rejected;
        }
        let outcome = self.interests.toggle(title);
        log::debug!(
            "interest '{title}' {outcome:?} ({}/{})",
            self.interests.len(),
            self.interests.capacity()
        );
        if outcome.changed() {
            self.haptics.emit(Feedback::Selection);
            self.bump();
        }
        outcome
    }

    pub fn is_profession_selected(&self, title: &str) -> bool {
        !self.profession.is_empty() && self.profession == title
    }

    pub fn is_interest_selected(&self, title: &str) -> bool {
        self.interests.contains(title)
    }

    /// False for unselected interests once the cap is reached.
    pub fn is_interest_selectable(&self, title: &str) -> bool {
        self.interests.is_selectable(title)
    }

    // Navigation

    pub fn can_advance(&self) -> bool {
        self.on_pages() && self.page_is_valid(self.page())
    }

    fn page_is_valid(&self, page: Page) -> bool {
        match page {
            Page::Intro => true,
            Page::Profession => !self.profession.is_empty(),
            Page::Interests => !self.interests.is_empty(),
        }
    }

    pub fn advance(&mut self) -> Advance {
        if !self.can_advance() {
            return Advance::Blocked;
        }
        let page = self.page();
        match page.next() {
            Some(next) => {
                log::debug!("page {page:?} -> {next:?}");
                self.page.set(next);
                self.haptics.emit(Feedback::Impact(ImpactStyle::Medium));
                self.bump();
                Advance::Moved(next)
            }
            None => {
                self.haptics.emit(Feedback::Impact(ImpactStyle::Medium));
                self.start_loading();
                Advance::StartedLoading
            }
        }
    }

    /// Clamped at the first page.
    pub fn back(&mut self) -> bool {
        if !self.on_pages() {
            return false;
        }
        let page = self.page();
        let Some(prev) = page.prev() else {
            return false;
        };
        log::debug!("page {page:?} -> {prev:?}");
        self.page.set(prev);
        self.haptics.emit(Feedback::Impact(ImpactStyle::Light));
        self.bump();
        true
    }

    /// Ends the flow without selections. Not available once loading started.
    pub fn skip(&mut self) -> bool {
        if !self.on_pages() {
            return false;
        }
        log::info!("onboarding skipped from {:?}", self.page());
        self.haptics.emit(Feedback::Impact(ImpactStyle::Light));
        self.finish(OnboardingResult::skipped());
        true
    }

    // Loading

    fn start_loading(&mut self) {
        let now = self.clock.now();
        let sequencer = LoadingSequencer::start(self.config.clone(), now);
        self.progress.set(sequencer.progress());
        self.step.set(sequencer.current_step());
        self.sequencer = Some(sequencer);
        self.phase.set(Phase::Loading);
        self.bump();
    }

    /// When the host should pump next; `None` when nothing is scheduled.
    pub fn next_deadline(&self) -> Option<Instant> {
        if !self.is_loading() {
            return None;
        }
        self.sequencer.as_ref().and_then(LoadingSequencer::deadline)
    }

    pub fn pump(&mut self) -> Vec<SequencerEvent> {
        let now = self.clock.now();
        self.pump_at(now)
    }

    /// Fires every loading transition due at `now`. Completes the flow when
    /// the sequence ends.
    pub fn pump_at(&mut self, now: Instant) -> Vec<SequencerEvent> {
        if !self.is_loading() {
            return Vec::new();
        }
        let Some(seq) = self.sequencer.as_mut() else {
            return Vec::new();
        };
        let events = seq.poll(now);
        if events.is_empty() {
            return events;
        }
        let (progress, step) = (seq.progress(), seq.current_step());
        log::trace!("pump: {events:?}");

        for event in &events {
            match event {
                SequencerEvent::Step(_) => self.haptics.emit(Feedback::Impact(ImpactStyle::Light)),
                SequencerEvent::AllSet => self.haptics.emit(Feedback::Success),
                SequencerEvent::Finished => {}
            }
        }
        self.progress.set_if_changed(progress);
        self.step.set_if_changed(step);
        self.bump();

        if events.contains(&SequencerEvent::Finished) {
            let result =
                OnboardingResult::completed(self.profession.clone(), self.interests.to_vec());
            log::info!(
                "onboarding completed: profession='{}' interests={:?}",
                result.profession,
                result.interests
            );
            self.finish(result);
        }
        events
    }

    fn finish(&mut self, result: OnboardingResult) {
        self.phase.set(Phase::Finished);
        self.bump();
        if let Some(cb) = self.on_complete.take() {
            cb(result);
        }
    }

    /// Forced teardown. The completion callback will not fire. Returns false
    /// if the flow had already finished or been cancelled.
    pub fn cancel(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }
        if let Some(seq) = self.sequencer.as_mut() {
            seq.cancel();
        }
        self.on_complete = None;
        log::info!("onboarding cancelled during {:?}", self.phase());
        self.phase.set(Phase::Cancelled);
        self.bump();
        true
    }
}
