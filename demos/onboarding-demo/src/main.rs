use std::cell::RefCell;
use std::rc::Rc;

use onboarding_core::prelude::*;
use web_time::Instant;

mod render;

fn show(flow: &OnboardingFlow) {
    print!("{}", render::screen(&flow.screen()));
    if let Some(chrome) = flow.chrome() {
        print!("{}", render::chrome(&chrome));
    }
    println!();
}

fn load_config() -> anyhow::Result<OnboardingConfig> {
    match std::env::args().nth(1) {
        Some(path) => Ok(OnboardingConfig::from_json_file(path)?),
        None => Ok(OnboardingConfig::default()),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config = load_config()?;

    let first_profession = config.professions.iter().next().map(|o| o.title.clone());
    let picks: Vec<String> = config
        .interests
        .iter()
        .take(config.max_interest_selection.min(2))
        .map(|o| o.title.clone())
        .collect();

    let result = Rc::new(RefCell::new(None::<OnboardingResult>));
    let mut flow = OnboardingFlow::new(config, {
        let result = result.clone();
        move |r| *result.borrow_mut() = Some(r)
    })
    .with_feedback(FeedbackFn(|f: Feedback| log::info!("haptic: {f:?}")));

    show(&flow);
    flow.advance();
    show(&flow);

    let Some(profession) = first_profession else {
        log::warn!("no professions configured; skipping");
        flow.skip();
        println!("{}", result.borrow().clone().unwrap_or_default().to_json()?);
        return Ok(());
    };
    flow.select_profession(profession);
    flow.advance();
    for title in &picks {
        flow.toggle_interest(title);
    }
    show(&flow);

    if flow.advance() != Advance::StartedLoading {
        log::warn!("interests page is not completable with this config; skipping");
        flow.skip();
    }

    // Host loop: sleep until the next deadline, then pump.
    while let Some(due) = flow.next_deadline() {
        std::thread::sleep(due.saturating_duration_since(Instant::now()));
        if !flow.pump().is_empty() {
            show(&flow);
        }
    }

    let out = result
        .borrow()
        .clone()
        .ok_or_else(|| anyhow::anyhow!("flow ended without a result"))?;
    println!("{}", out.to_json()?);
    Ok(())
}
