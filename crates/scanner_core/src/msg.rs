#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User picked a file path to capture.
    CapturePicked(String),
    /// Capture finished loading and encoding an image.
    ImageCaptured(crate::CapturedImage),
    /// Capture yielded no usable file. Ignored: the screen does not
    /// change, the failure is only logged at the engine boundary.
    CaptureFailed,
    /// User asked for the current preview to be analyzed.
    AnalyzeRequested,
    /// The stamped analysis dispatch settled successfully.
    AnalysisSucceeded {
        generation: crate::Generation,
        result: crate::AnalysisResult,
    },
    /// The stamped analysis dispatch failed (details already logged at the
    /// engine boundary; the user sees one generic banner).
    AnalysisFailed { generation: crate::Generation },
    /// User cleared the screen back to the upload prompt.
    ResetRequested,
}
