use chrono::Local;
use scanner_core::{OutcomeView, ScannerViewModel, ViewState};

/// Prints the current screen. Called whenever the state machine marks the
/// view dirty.
pub fn render(view: &ScannerViewModel) {
    println!();
    match view.view_state {
        ViewState::Idle => {
            println!("Photograph or choose a product label to get started.");
        }
        ViewState::Previewing => {
            println!("Ready to analyze.");
        }
        ViewState::Analyzing => {
            println!("Reading the label...");
        }
        ViewState::Resulted => {
            println!("Analyzed at {}", Local::now().format("%H:%M:%S"));
        }
        ViewState::Failed => {}
    }

    if let Some(preview) = &view.preview {
        println!(
            "Image: {} ({}, {} bytes)",
            preview.source_name, preview.media_type, preview.byte_len
        );
    }

    match &view.outcome {
        Some(OutcomeView::Ingredients(rows)) => {
            println!();
            for (index, row) in rows.iter().enumerate() {
                println!("{:>3}. {}: {}", index + 1, row.name, row.explanation);
            }
        }
        Some(OutcomeView::Message(message)) => {
            println!();
            println!("{message}");
        }
        None => {}
    }

    if view.error_banner {
        println!("Something went wrong while reading the label. Please try again.");
    }
}
