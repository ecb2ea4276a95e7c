use crate::{Effect, Msg, ScannerState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: ScannerState, msg: Msg) -> (ScannerState, Vec<Effect>) {
    let effects = match msg {
        Msg::CapturePicked(raw) => {
            let path = raw.trim().to_owned();
            if path.is_empty() {
                Vec::new()
            } else {
                vec![Effect::LoadImage { path }]
            }
        }
        Msg::ImageCaptured(image) => {
            state.accept_capture(image);
            Vec::new()
        }
        Msg::CaptureFailed => Vec::new(),
        Msg::AnalyzeRequested => match state.begin_analysis() {
            Some((generation, image)) => vec![Effect::Analyze { generation, image }],
            None => Vec::new(),
        },
        Msg::AnalysisSucceeded { generation, result } => {
            state.apply_success(generation, result);
            Vec::new()
        }
        Msg::AnalysisFailed { generation } => {
            state.apply_failure(generation);
            Vec::new()
        }
        Msg::ResetRequested => {
            state.reset();
            Vec::new()
        }
    };

    (state, effects)
}
