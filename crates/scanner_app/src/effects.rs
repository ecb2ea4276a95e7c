use std::thread;
use std::time::Duration;

use scanner_core::{AnalysisResult, CapturedImage, Effect, Ingredient, Msg};
use scanner_engine::{AnalysisOutcome, AnalysisSettings, EngineEvent, EngineHandle, LoadedImage};
use scanner_logging::{scanner_info, scanner_warn};

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: AnalysisSettings) -> Self {
        Self {
            engine: EngineHandle::new(settings),
        }
    }

    /// Executes effects through the engine; returns how many completion
    /// events the caller should wait for.
    pub fn run(&self, effects: Vec<Effect>) -> usize {
        let mut issued = 0;
        for effect in effects {
            match effect {
                Effect::LoadImage { path } => {
                    scanner_info!("LoadImage path={path}");
                    self.engine.load_image(path);
                    issued += 1;
                }
                Effect::Analyze { generation, image } => {
                    scanner_info!(
                        "Analyze generation={} source={} media_type={}",
                        generation,
                        image.source_name,
                        image.media_type
                    );
                    self.engine.analyze(generation, map_image_out(image));
                    issued += 1;
                }
            }
        }
        issued
    }

    /// Blocks until the engine reports the next completion, mapped into a
    /// state-machine message.
    pub fn wait_event(&self) -> Msg {
        loop {
            if let Some(event) = self.engine.try_recv() {
                return map_event(event);
            }
            thread::sleep(Duration::from_millis(20));
        }
    }
}

/// Every engine failure is logged here with its kind; the state machine
/// only ever learns "it failed" and shows the one generic banner.
fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::ImageLoaded { result } => match result {
            Ok(image) => Msg::ImageCaptured(map_image_in(image)),
            Err(err) => {
                scanner_warn!("capture ignored: {err}");
                Msg::CaptureFailed
            }
        },
        EngineEvent::AnalysisCompleted { generation, result } => match result {
            Ok(outcome) => Msg::AnalysisSucceeded {
                generation,
                result: map_outcome(outcome),
            },
            Err(err) => {
                scanner_warn!("analysis {generation} failed: {err}");
                Msg::AnalysisFailed { generation }
            }
        },
    }
}

fn map_image_in(image: LoadedImage) -> CapturedImage {
    CapturedImage {
        source_name: image.source_name,
        media_type: image.media_type,
        encoded: image.encoded,
        byte_len: image.byte_len,
    }
}

fn map_image_out(image: CapturedImage) -> LoadedImage {
    LoadedImage {
        source_name: image.source_name,
        media_type: image.media_type,
        encoded: image.encoded,
        byte_len: image.byte_len,
    }
}

fn map_outcome(outcome: AnalysisOutcome) -> AnalysisResult {
    match outcome {
        AnalysisOutcome::Ingredients(entries) => AnalysisResult::Ingredients(
            entries
                .into_iter()
                .map(|entry| Ingredient {
                    name: entry.name,
                    explanation: entry.explanation,
                })
                .collect(),
        ),
        AnalysisOutcome::NoIngredients { message } => AnalysisResult::NoIngredients { message },
    }
}
