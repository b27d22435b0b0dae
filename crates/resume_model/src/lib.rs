pub mod content;
pub mod domain;
pub mod error;

pub use content::Resume;
pub use domain::TabId;
pub use error::ContentError;

#[cfg(test)]
#[path = "tests/content_tests.rs"]
mod tests;
