//! Small browser and form helpers.

pub mod redirect;
pub mod validate;
