/// Stamp carried by an analysis command and echoed in its completion
/// event. The shell forwards it to the state machine, which drops
/// completions whose stamp is no longer current.
pub type Generation = u64;

/// An image read from disk and encoded for transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedImage {
    /// File name for display.
    pub source_name: String,
    /// Media type sniffed from the file's magic bytes.
    pub media_type: String,
    /// `data:<media type>;base64,<payload>`.
    pub encoded: String,
    pub byte_len: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientEntry {
    pub name: String,
    pub explanation: String,
}

/// Decoded answer from the completion endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisOutcome {
    /// Non-empty, in the order the label printed them.
    Ingredients(Vec<IngredientEntry>),
    NoIngredients { message: String },
}

/// One completion event per engine command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    ImageLoaded {
        result: Result<LoadedImage, CaptureError>,
    },
    AnalysisCompleted {
        generation: Generation,
        result: Result<AnalysisOutcome, AnalyzeError>,
    },
}

/// The capture surface has a single failure mode: the path did not yield
/// readable bytes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("failed to read {path}: {message}")]
pub struct CaptureError {
    pub path: String,
    pub message: String,
}

impl CaptureError {
    pub(crate) fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct AnalyzeError {
    pub kind: AnalyzeFailureKind,
    pub message: String,
}

impl AnalyzeError {
    pub(crate) fn new(kind: AnalyzeFailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AnalyzeFailureKind {
    #[error("network error")]
    Network,
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("no text content part in response")]
    MissingTextPart,
    #[error("response text is not the expected ingredient JSON")]
    MalformedJson,
}
