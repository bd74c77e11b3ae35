//! Submission rate limiting with an injected clock.

pub mod clock;
pub mod limiter;

pub use clock::{Clock, ManualClock, SystemClock};
pub use limiter::SubmissionLimiter;
