pub mod client;
pub mod sanitize;
pub mod validate;

mod submission;

pub use submission::{ContactError, ContactSubmission, SanitizedSubmission, SubmitInput};
pub use validate::{Field, FieldError};
