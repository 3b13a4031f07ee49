pub mod lenient;
pub mod resume;
