pub mod analysis;
pub mod resume;

pub use analysis::{AnalysisResult, SKILL_GAP_CATEGORIES};
pub use resume::{Experience, ResumeData};
