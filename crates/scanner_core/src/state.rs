use crate::view_model::{ImagePreview, IngredientRow, OutcomeView, ScannerViewModel, ViewState};

/// Stamp attached to every analysis dispatch.
///
/// Reset, re-capture, and each new dispatch bump the counter, so a
/// completion event carrying an older stamp is recognized as orphaned and
/// dropped instead of being applied to state.
pub type Generation = u64;

/// The single in-memory image artifact currently active in the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedImage {
    /// Display name for the preview (typically the file name).
    pub source_name: String,
    /// Declared media type, e.g. `image/jpeg`.
    pub media_type: String,
    /// Transport-safe form: `data:<media type>;base64,<payload>`.
    pub encoded: String,
    /// Size of the original file in bytes, for the preview line.
    pub byte_len: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub name: String,
    pub explanation: String,
}

/// Structured outcome of one analysis call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisResult {
    /// The label was read; entries are in printed order and non-empty.
    Ingredients(Vec<Ingredient>),
    /// No ingredient list was detected in the image.
    NoIngredients { message: String },
}

/// What the screen currently holds. Variants carry exactly the data that
/// can exist in that state, so a result and an error cannot coexist and
/// Analyzing always has an image.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum Phase {
    #[default]
    Idle,
    Previewing {
        image: CapturedImage,
    },
    Analyzing {
        image: CapturedImage,
    },
    Resulted {
        image: CapturedImage,
        result: AnalysisResult,
    },
    Failed {
        image: CapturedImage,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScannerState {
    phase: Phase,
    generation: Generation,
    dirty: bool,
}

impl ScannerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamp of the most recent dispatch. Completion events older than this
    /// are orphaned.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Returns whether the view changed since the last render, and clears
    /// the latch.
    pub fn consume_dirty(&mut self) -> bool {
        let was = self.dirty;
        self.dirty = false;
        was
    }

    /// Replaces the active image and clears any result or error downstream.
    pub(crate) fn accept_capture(&mut self, image: CapturedImage) {
        self.generation += 1;
        self.phase = Phase::Previewing { image };
        self.dirty = true;
    }

    /// Moves Previewing or Failed into Analyzing and hands back the stamped
    /// dispatch. Any other phase has no analyze affordance.
    pub(crate) fn begin_analysis(&mut self) -> Option<(Generation, CapturedImage)> {
        let image = match &self.phase {
            Phase::Previewing { image } | Phase::Failed { image } => image.clone(),
            Phase::Idle | Phase::Analyzing { .. } | Phase::Resulted { .. } => return None,
        };
        self.generation += 1;
        self.phase = Phase::Analyzing {
            image: image.clone(),
        };
        self.dirty = true;
        Some((self.generation, image))
    }

    /// Applies a successful completion if it is the one still awaited.
    pub(crate) fn apply_success(&mut self, generation: Generation, result: AnalysisResult) -> bool {
        if generation != self.generation {
            return false;
        }
        let Phase::Analyzing { image } = &self.phase else {
            return false;
        };
        self.phase = Phase::Resulted {
            image: image.clone(),
            result,
        };
        self.dirty = true;
        true
    }

    /// Applies a failed completion if it is the one still awaited. The
    /// preview is retained so the user can retry without re-capturing.
    pub(crate) fn apply_failure(&mut self, generation: Generation) -> bool {
        if generation != self.generation {
            return false;
        }
        let Phase::Analyzing { image } = &self.phase else {
            return false;
        };
        self.phase = Phase::Failed {
            image: image.clone(),
        };
        self.dirty = true;
        true
    }

    /// Clears image, result, and error; any in-flight completion becomes
    /// orphaned.
    pub(crate) fn reset(&mut self) {
        self.generation += 1;
        self.phase = Phase::Idle;
        self.dirty = true;
    }

    pub fn view(&self) -> ScannerViewModel {
        let preview = self.image().map(|image| ImagePreview {
            source_name: image.source_name.clone(),
            media_type: image.media_type.clone(),
            byte_len: image.byte_len,
        });

        let outcome = match &self.phase {
            Phase::Resulted { result, .. } => Some(match result {
                AnalysisResult::Ingredients(items) => OutcomeView::Ingredients(
                    items
                        .iter()
                        .map(|item| IngredientRow {
                            name: item.name.clone(),
                            explanation: item.explanation.clone(),
                        })
                        .collect(),
                ),
                AnalysisResult::NoIngredients { message } => {
                    OutcomeView::Message(message.clone())
                }
            }),
            _ => None,
        };

        ScannerViewModel {
            view_state: self.view_state(),
            preview,
            outcome,
            error_banner: matches!(self.phase, Phase::Failed { .. }),
            analyze_enabled: matches!(self.phase, Phase::Previewing { .. } | Phase::Failed { .. }),
            dirty: self.dirty,
        }
    }

    fn view_state(&self) -> ViewState {
        match &self.phase {
            Phase::Idle => ViewState::Idle,
            Phase::Previewing { .. } => ViewState::Previewing,
            Phase::Analyzing { .. } => ViewState::Analyzing,
            Phase::Resulted { .. } => ViewState::Resulted,
            Phase::Failed { .. } => ViewState::Failed,
        }
    }

    fn image(&self) -> Option<&CapturedImage> {
        match &self.phase {
            Phase::Idle => None,
            Phase::Previewing { image }
            | Phase::Analyzing { image }
            | Phase::Resulted { image, .. }
            | Phase::Failed { image } => Some(image),
        }
    }
}
