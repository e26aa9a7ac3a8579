//! Form domain layer
//!
//! Field identifiers, the contact form state holder and its validation rules.

mod field;
mod form_state;
mod validation;

pub use field::Field;
pub use form_state::{ContactForm, FormFields, SubmissionStatus, SubmitAttempt, SEND_ROW};
pub use validation::utf16_len;
