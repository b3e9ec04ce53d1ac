mod format;
mod resume;

pub use format::DocumentFormat;
pub use resume::{EducationEntry, ExperienceEntry, ResumeRecord};
