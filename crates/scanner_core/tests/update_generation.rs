use std::sync::Once;

use scanner_core::{
    update, AnalysisResult, CapturedImage, Ingredient, Msg, ScannerState, ViewState,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(scanner_logging::initialize_for_tests);
}

fn test_image(name: &str) -> CapturedImage {
    CapturedImage {
        source_name: name.to_string(),
        media_type: "image/png".to_string(),
        encoded: format!("data:image/png;base64,{name}"),
        byte_len: 3,
    }
}

fn water() -> AnalysisResult {
    AnalysisResult::Ingredients(vec![Ingredient {
        name: "WATER".to_string(),
        explanation: "Plain water.".to_string(),
    }])
}

#[test]
fn stale_success_after_reset_is_dropped() {
    init_logging();
    let state = ScannerState::new();
    let (state, _) = update(state, Msg::ImageCaptured(test_image("label.png")));
    let (state, _) = update(state, Msg::AnalyzeRequested);
    let in_flight = state.generation();

    // User resets while the call is outstanding.
    let (state, _) = update(state, Msg::ResetRequested);

    let (next, effects) = update(
        state,
        Msg::AnalysisSucceeded {
            generation: in_flight,
            result: water(),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(next.view().view_state, ViewState::Idle);
    assert!(next.view().outcome.is_none());
}

#[test]
fn stale_failure_after_recapture_is_dropped() {
    init_logging();
    let state = ScannerState::new();
    let (state, _) = update(state, Msg::ImageCaptured(test_image("first.png")));
    let (state, _) = update(state, Msg::AnalyzeRequested);
    let in_flight = state.generation();

    // A new capture replaces the screen before the call settles.
    let (state, _) = update(state, Msg::ImageCaptured(test_image("second.png")));

    let (next, _) = update(
        state,
        Msg::AnalysisFailed {
            generation: in_flight,
        },
    );
    let view = next.view();

    assert_eq!(view.view_state, ViewState::Previewing);
    assert!(!view.error_banner);
    assert_eq!(view.preview.unwrap().source_name, "second.png");
}

#[test]
fn completion_from_previous_attempt_does_not_settle_retry() {
    init_logging();
    let state = ScannerState::new();
    let (state, _) = update(state, Msg::ImageCaptured(test_image("label.png")));
    let (state, _) = update(state, Msg::AnalyzeRequested);
    let first_attempt = state.generation();
    let (state, _) = update(
        state,
        Msg::AnalysisFailed {
            generation: first_attempt,
        },
    );

    // Retry dispatches a new stamp; the first attempt's late success must
    // not resolve it.
    let (state, _) = update(state, Msg::AnalyzeRequested);
    let (next, _) = update(
        state,
        Msg::AnalysisSucceeded {
            generation: first_attempt,
            result: water(),
        },
    );

    assert_eq!(next.view().view_state, ViewState::Analyzing);
    assert!(next.view().outcome.is_none());
}

#[test]
fn current_completion_still_applies() {
    init_logging();
    let state = ScannerState::new();
    let (state, _) = update(state, Msg::ImageCaptured(test_image("label.png")));
    let (state, _) = update(state, Msg::AnalyzeRequested);
    let generation = state.generation();

    let (next, _) = update(
        state,
        Msg::AnalysisSucceeded {
            generation,
            result: water(),
        },
    );

    assert_eq!(next.view().view_state, ViewState::Resulted);
}
