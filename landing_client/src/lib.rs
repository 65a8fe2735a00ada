//! Browser side of the contact form: field state, validation, submission and
//! the cookie consent banner.

pub mod api;
pub mod consent;
pub mod schema;
pub mod submission;
