//! Platform-neutral snapshot of what the flow should show right now.
//!
//! A host renderer (repose views, a native toolkit, a terminal) draws a
//! [`Screen`] plus its [`Chrome`] and wires taps back to the flow. The rules
//! for "selected", "disabled at capacity" and "which button is enabled" live
//! here so every renderer agrees on them.

use crate::{Catalog, OnboardingFlow, Page, Phase, Stage};

#[derive(Clone, Debug, PartialEq)]
pub struct OptionRow {
    pub glyph: String,
    pub title: String,
    pub selected: bool,
    pub enabled: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepStatus {
    Done,
    Active,
    Pending,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StepRow {
    pub label: String,
    pub status: StepStatus,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Screen {
    Welcome {
        title: String,
        subtitle: String,
    },
    Profession {
        title: String,
        options: Vec<OptionRow>,
    },
    Interests {
        title: String,
        options: Vec<OptionRow>,
        selected: usize,
        max: usize,
    },
    Loading {
        steps: Vec<StepRow>,
        progress: f32,
        caption: Option<String>,
    },
    AllSet {
        title: String,
        profession: String,
        interests: Vec<String>,
    },
    Closed,
}

/// Controls around the page content. Absent while loading.
#[derive(Clone, Debug, PartialEq)]
pub struct Chrome {
    /// (current page index, page count) for the dot indicator.
    pub indicator: (usize, usize),
    pub show_back: bool,
    pub back_label: String,
    pub show_skip: bool,
    pub skip_label: String,
    pub primary_label: String,
    pub primary_enabled: bool,
}

fn rows(
    catalog: &Catalog,
    selected: impl Fn(&str) -> bool,
    enabled: impl Fn(&str) -> bool,
) -> Vec<OptionRow> {
    catalog
        .iter()
        .map(|o| OptionRow {
            glyph: o.glyph.clone(),
            title: o.title.clone(),
            selected: selected(&o.title),
            enabled: enabled(&o.title),
        })
        .collect()
}

impl OnboardingFlow {
    pub fn screen(&self) -> Screen {
        let config = self.config();
        let copy = &config.copy;
        match self.phase() {
            Phase::Finished | Phase::Cancelled => Screen::Closed,
            Phase::Pages => match self.page() {
                Page::Intro => Screen::Welcome {
                    title: copy.welcome_title.clone(),
                    subtitle: copy.welcome_subtitle.clone(),
                },
                Page::Profession => Screen::Profession {
                    title: copy.profession_title.clone(),
                    options: rows(
                        &config.professions,
                        |t| self.is_profession_selected(t),
                        |_| true,
                    ),
                },
                Page::Interests => Screen::Interests {
                    title: copy.interests_title.clone(),
                    options: rows(
                        &config.interests,
                        |t| self.is_interest_selected(t),
                        |t| self.is_interest_selectable(t),
                    ),
                    selected: self.interests().len(),
                    max: config.max_interest_selection,
                },
            },
            Phase::Loading => match self.sequencer() {
                Some(seq) if seq.stage() == Stage::AllSet || seq.stage() == Stage::Done => {
                    Screen::AllSet {
                        title: copy.all_set_title.clone(),
                        profession: self.profession().to_string(),
                        interests: self.interests().to_vec(),
                    }
                }
                Some(seq) => {
                    let done = seq.current_step();
                    let stepping = seq.stage() == Stage::Stepping;
                    Screen::Loading {
                        steps: seq
                            .steps()
                            .iter()
                            .enumerate()
                            .map(|(i, label)| StepRow {
                                label: label.clone(),
                                status: if i < done {
                                    StepStatus::Done
                                } else if i == done && stepping {
                                    StepStatus::Active
                                } else {
                                    StepStatus::Pending
                                },
                            })
                            .collect(),
                        progress: seq.progress(),
                        caption: seq.caption().map(str::to_string),
                    }
                }
                None => Screen::Closed,
            },
        }
    }

    pub fn chrome(&self) -> Option<Chrome> {
        if self.phase() != Phase::Pages {
            return None;
        }
        let page = self.page();
        let copy = &self.config().copy;
        Some(Chrome {
            indicator: (page.index(), Page::COUNT),
            show_back: page.prev().is_some(),
            back_label: copy.back_label.clone(),
            show_skip: true,
            skip_label: copy.skip_label.clone(),
            primary_label: if page.is_last() {
                copy.finish_label.clone()
            } else {
                copy.continue_label.clone()
            },
            primary_enabled: self.can_advance(),
        })
    }
}
