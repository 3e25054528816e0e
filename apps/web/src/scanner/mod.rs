// Scanner view: job description input, scan state machine, resume
// serialization for the prompt, and the analysis report.
// All AI calls go through the gateway; nothing here talks to Gemini directly.

pub mod handlers;
pub mod render;
pub mod resume_text;
pub mod scan;
pub mod state;

pub use state::ScannerState;
