/// Which screen the interface currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Idle,
    Previewing,
    Analyzing,
    Resulted,
    Failed,
}

/// Preview line for the active image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePreview {
    pub source_name: String,
    pub media_type: String,
    pub byte_len: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientRow {
    pub name: String,
    pub explanation: String,
}

/// What to render for a settled analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutcomeView {
    /// Non-empty rows, in the order the label printed them.
    Ingredients(Vec<IngredientRow>),
    /// The "no ingredient list found" banner text.
    Message(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScannerViewModel {
    pub view_state: ViewState,
    /// Present in every state except Idle.
    pub preview: Option<ImagePreview>,
    /// Present only in Resulted.
    pub outcome: Option<OutcomeView>,
    /// True only in Failed; the generic retry banner.
    pub error_banner: bool,
    /// The analyze trigger is offered only while Previewing or Failed.
    pub analyze_enabled: bool,
    pub dirty: bool,
}
