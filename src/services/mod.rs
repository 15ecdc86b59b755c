pub mod cafe_source;
pub use cafe_source::CafeSource;

pub mod debounce;
pub use debounce::Debouncer;

pub mod listing;
pub use listing::{ListingController, RenderEvent, RenderOutcome, Trigger};

pub mod submission;
pub use submission::{CafeDraft, SubmissionController, SubmitOutcome};
