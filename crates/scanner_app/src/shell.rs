use anyhow::Context;
use dialoguer::{Input, Select};
use scanner_core::{update, Msg, ScannerState, ScannerViewModel, ViewState};

use crate::effects::EffectRunner;
use crate::render;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Capture,
    Analyze,
    Reset,
    Quit,
}

/// Interactive loop: render, prompt for the next action, dispatch it, and
/// wait out any engine work it started. One engine command is in flight at
/// most; the analyze prompt simply is not offered while Analyzing.
pub fn run(initial_image: Option<String>, runner: &EffectRunner) -> anyhow::Result<()> {
    let mut state = ScannerState::new();
    let mut pending = 0usize;
    let mut first_render = true;

    if let Some(path) = initial_image {
        let (next, effects) = update(state, Msg::CapturePicked(path));
        state = next;
        pending += runner.run(effects);
    }

    loop {
        if state.consume_dirty() || first_render {
            render::render(&state.view());
            first_render = false;
        }

        if pending > 0 {
            let msg = runner.wait_event();
            pending -= 1;
            let (next, effects) = update(state, msg);
            state = next;
            pending += runner.run(effects);
            continue;
        }

        let Some(msg) = prompt(&state.view())? else {
            return Ok(());
        };
        let (next, effects) = update(state, msg);
        state = next;
        pending += runner.run(effects);
    }
}

fn prompt(view: &ScannerViewModel) -> anyhow::Result<Option<Msg>> {
    let mut labels = Vec::new();
    let mut actions = Vec::new();

    if view.analyze_enabled {
        labels.push(if view.view_state == ViewState::Failed {
            "Try again"
        } else {
            "Analyze this label"
        });
        actions.push(Action::Analyze);
    }
    labels.push(if view.preview.is_some() {
        "Scan a different image"
    } else {
        "Scan an image"
    });
    actions.push(Action::Capture);
    if view.preview.is_some() {
        labels.push("Start over");
        actions.push(Action::Reset);
    }
    labels.push("Quit");
    actions.push(Action::Quit);

    let choice = Select::new()
        .with_prompt("What next?")
        .items(&labels)
        .default(0)
        .interact()
        .context("reading menu selection")?;

    match actions[choice] {
        Action::Capture => {
            let path: String = Input::new()
                .with_prompt("Image path")
                .allow_empty(true)
                .interact_text()
                .context("reading image path")?;
            Ok(Some(Msg::CapturePicked(path)))
        }
        Action::Analyze => Ok(Some(Msg::AnalyzeRequested)),
        Action::Reset => Ok(Some(Msg::ResetRequested)),
        Action::Quit => Ok(None),
    }
}
