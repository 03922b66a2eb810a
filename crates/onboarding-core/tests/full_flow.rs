use std::cell::RefCell;
use std::rc::Rc;

use onboarding_core::prelude::*;

fn run_to_end(flow: &mut OnboardingFlow, clock: &ManualClock) -> usize {
    let mut pumps = 0;
    while let Some(due) = flow.next_deadline() {
        clock.set(due);
        flow.pump();
        pumps += 1;
    }
    pumps
}

#[test]
fn developer_with_two_interests() {
    let config = OnboardingConfig::from_json_str(
        r#"{
            "max_interest_selection": 3,
            "loading_steps": ["A", "B"],
            "loading_texts": []
        }"#,
    )
    .unwrap();

    let clock = ManualClock::default();
    let result = Rc::new(RefCell::new(None::<OnboardingResult>));
    let pulses = Rc::new(RefCell::new(0usize));
    let mut flow = OnboardingFlow::new(config, {
        let result = result.clone();
        move |r| {
            assert!(result.borrow().is_none(), "completion fired twice");
            *result.borrow_mut() = Some(r);
        }
    })
    .with_clock(clock.clone())
    .with_feedback(FeedbackFn({
        let pulses = pulses.clone();
        move |_: Feedback| *pulses.borrow_mut() += 1
    }));

    assert_eq!(flow.advance(), Advance::Moved(Page::Profession));
    flow.select_profession("Developer");
    assert_eq!(flow.advance(), Advance::Moved(Page::Interests));
    assert_eq!(flow.toggle_interest("Technology"), Toggle::Added);
    assert_eq!(flow.toggle_interest("Gaming"), Toggle::Added);
    assert_eq!(flow.advance(), Advance::StartedLoading);

    // Step A, step B, all set, finished.
    assert_eq!(run_to_end(&mut flow, &clock), 4);

    let r = result.borrow().clone().unwrap();
    assert_eq!(r.profession, "Developer");
    assert_eq!(r.interests, vec!["Technology", "Gaming"]);
    assert!(r.completed);
    assert!(*pulses.borrow() > 0);
    assert_eq!(flow.screen(), Screen::Closed);
}

#[test]
fn skipped_flow_reports_nothing_selected() {
    let result = Rc::new(RefCell::new(None::<OnboardingResult>));
    let mut flow = OnboardingFlow::new(OnboardingConfig::default(), {
        let result = result.clone();
        move |r| *result.borrow_mut() = Some(r)
    });
    flow.advance();
    flow.select_profession("Teacher");
    assert!(flow.skip());
    assert_eq!(
        result.borrow().as_ref(),
        Some(&OnboardingResult {
            profession: String::new(),
            interests: Vec::new(),
            completed: false,
        })
    );
    assert_eq!(flow.next_deadline(), None);
}

#[test]
fn teardown_mid_loading_never_completes() {
    let clock = ManualClock::default();
    let fired = Rc::new(RefCell::new(false));
    let mut flow = OnboardingFlow::new(OnboardingConfig::default(), {
        let fired = fired.clone();
        move |_| *fired.borrow_mut() = true
    })
    .with_clock(clock.clone());

    flow.advance();
    flow.select_profession("Engineer");
    flow.advance();
    flow.toggle_interest("Science");
    flow.advance();
    clock.advance_ms(1000);
    flow.pump();

    assert!(flow.cancel());
    assert!(!flow.cancel());
    assert_eq!(run_to_end(&mut flow, &clock), 0);
    assert!(!*fired.borrow());
}

#[test]
fn empty_interest_catalog_cannot_finish() {
    let config = OnboardingConfig {
        interests: Catalog::default(),
        ..OnboardingConfig::default()
    };
    let mut flow = OnboardingFlow::new(config, |_| {});
    flow.advance();
    flow.select_profession("Other");
    flow.advance();
    assert_eq!(flow.advance(), Advance::Blocked);
    let Screen::Interests { options, .. } = flow.screen() else {
        panic!("expected interests screen");
    };
    assert!(options.is_empty());
}
