//! # Onboarding flow
//!
//! A three page wizard (welcome, profession, interests) followed by a short
//! scripted "personalizing your experience" screen. The crate holds the
//! interaction model only; rendering is the host's business.
//!
//! - `OnboardingConfig` — immutable settings: theme, option catalogs, the
//!   interest cap, loading copy and timings.
//! - `OnboardingFlow` — page navigation, selections, and the loading
//!   sequence, ending in a single completion callback.
//! - `Screen` / `Chrome` — what to draw right now.
//!
//! ## Driving a flow
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use onboarding_core::*;
//!
//! let clock = ManualClock::default();
//! let out = Rc::new(RefCell::new(None));
//! let mut flow = OnboardingFlow::new(OnboardingConfig::default(), {
//!     let out = out.clone();
//!     move |r| *out.borrow_mut() = Some(r)
//! })
//! .with_clock(clock.clone());
//!
//! flow.advance();
//! flow.select_profession("Developer");
//! flow.advance();
//! flow.toggle_interest("Gaming");
//! assert_eq!(flow.advance(), Advance::StartedLoading);
//!
//! // The host pumps from its frame loop or a timer set to `next_deadline()`.
//! while let Some(due) = flow.next_deadline() {
//!     clock.set(due);
//!     flow.pump();
//! }
//! assert_eq!(out.borrow().as_ref().map(|r| r.completed), Some(true));
//! ```
//!
//! ## Observing state
//!
//! Progress, step, page and phase are `Signal`s. Subscriptions return a
//! `Dispose` guard:
//!
//! ```rust
//! use onboarding_core::*;
//!
//! let flow = OnboardingFlow::new(OnboardingConfig::default(), |_| {});
//! let sub = flow.progress_signal().subscribe(|p| assert!((0.0..=1.0).contains(p)));
//! // ...
//! sub.run();
//! ```
//!
//! Everything is single-threaded (`Rc`/`RefCell`); a flow lives on the thread
//! that renders it.

pub mod catalog;
pub mod clock;
pub mod config;
pub mod effects;
pub mod error;
pub mod feedback;
pub mod flow;
pub mod prelude;
pub mod result;
pub mod screen;
pub mod selection;
pub mod sequencer;
pub mod signal;
pub mod theme;

pub use catalog::*;
pub use clock::*;
pub use config::*;
pub use effects::*;
pub use error::*;
pub use feedback::*;
pub use flow::*;
pub use result::*;
pub use screen::*;
pub use selection::*;
pub use sequencer::*;
pub use signal::*;
pub use theme::*;
