// Recommendation engine: answer scoring, career matching, skill gaps, course selection.
// Everything below handlers is pure and reads only from the loaded Catalog.

pub mod courses;
pub mod handlers;
pub mod matcher;
pub mod pathway;
pub mod profile;
pub mod quiz;
pub mod scorer;
pub mod skill_gap;
