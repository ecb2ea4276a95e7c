//! Scanner core: pure view-state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{AnalysisResult, CapturedImage, Generation, Ingredient, ScannerState};
pub use update::update;
pub use view_model::{ImagePreview, IngredientRow, OutcomeView, ScannerViewModel, ViewState};
