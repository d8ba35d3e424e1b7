//! HTTP request handlers.

pub(crate) mod contact;
pub(crate) mod placeholder;
