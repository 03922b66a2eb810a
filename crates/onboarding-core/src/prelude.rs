pub use crate::catalog::{Catalog, OptionItem};
pub use crate::clock::{Clock, ManualClock, SystemClock};
pub use crate::config::{FlowCopy, LoadingTimings, OnboardingConfig};
pub use crate::effects::Dispose;
pub use crate::error::ConfigError;
pub use crate::feedback::{
    Feedback, FeedbackFn, FeedbackSink, ImpactStyle, NoFeedback, RecordingFeedback,
};
pub use crate::flow::{Advance, OnboardingFlow, Page, Phase};
pub use crate::result::OnboardingResult;
pub use crate::screen::{Chrome, OptionRow, Screen, StepRow, StepStatus};
pub use crate::selection::Toggle;
pub use crate::signal::{Signal, signal};
pub use crate::theme::{Color, Theme};
