pub mod progress;
pub mod redactor;
