//! Scanner engine: image capture and the single analysis call.
mod analysis;
mod capture;
mod engine;
mod prompt;
mod types;

pub use analysis::{parse_outcome, AnalysisSettings, Analyzer, HttpAnalyzer, DEFAULT_ENDPOINT};
pub use capture::load_image;
pub use engine::EngineHandle;
pub use prompt::ANALYSIS_PROMPT;
pub use types::{
    AnalysisOutcome, AnalyzeError, AnalyzeFailureKind, CaptureError, EngineEvent, Generation,
    IngredientEntry, LoadedImage,
};
