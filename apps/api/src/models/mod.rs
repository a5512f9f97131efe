pub mod course;
pub mod quiz;
pub mod riasec;
