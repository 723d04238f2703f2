//! Example catalog: records, the registry that holds them and the lessons
//! that organize them.
//!
//! ```text
//! demos::*::register ──▶ Registry ◀── LessonCatalog::members_of
//!                           │
//!                           ▼
//!                        Runner
//! ```

mod example;
mod lessons;
mod registry;
mod sample;

pub use example::{Example, ExampleFn, ExampleResult, Resource};
pub use lessons::{Lesson, LessonCatalog, LESSONS};
pub use registry::Registry;
pub use sample::SampleData;
