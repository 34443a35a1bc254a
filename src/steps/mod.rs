//! Step definitions binding scenario phrases to page driver calls.

pub mod files;
