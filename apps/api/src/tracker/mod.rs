// Course Tracker — learner-maintained semesters/courses and the GPA engine.
// GPA figures are derived caches: recomputed from the semester list on every
// save, never mutated independently.

pub mod gpa;
pub mod handlers;
pub mod models;
