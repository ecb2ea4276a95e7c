use std::sync::{mpsc, Arc};
use std::thread;

use crate::analysis::{AnalysisSettings, Analyzer, HttpAnalyzer};
use crate::capture;
use crate::types::{EngineEvent, Generation, LoadedImage};

enum EngineCommand {
    LoadImage {
        path: String,
    },
    Analyze {
        generation: Generation,
        image: LoadedImage,
    },
}

pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: AnalysisSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let analyzer = Arc::new(HttpAnalyzer::new(settings));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let analyzer = analyzer.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(analyzer.as_ref(), command, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn load_image(&self, path: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::LoadImage { path: path.into() });
    }

    pub fn analyze(&self, generation: Generation, image: LoadedImage) {
        let _ = self.cmd_tx.send(EngineCommand::Analyze { generation, image });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    analyzer: &dyn Analyzer,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::LoadImage { path } => {
            let result = capture::load_image(&path);
            let _ = event_tx.send(EngineEvent::ImageLoaded { result });
        }
        EngineCommand::Analyze { generation, image } => {
            let result = analyzer.analyze(&image).await;
            let _ = event_tx.send(EngineEvent::AnalysisCompleted { generation, result });
        }
    }
}
