//! Event script replay

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

use bubble_app::{BubbleApp, Frame, InputEvent};

/// One printed frame and the event that led to it
#[derive(Debug, Serialize)]
pub struct Step {
    pub step: usize,
    /// `None` for the final settled frame
    pub event: Option<InputEvent>,
    pub frame: Frame,
}

/// Read a JSON array of input events
pub fn load_script(path: &Path) -> Result<Vec<InputEvent>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read script {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse script {}", path.display()))
}

/// Dispatch every event in order, then let the animator settle
///
/// `tick` events also advance the headless animator by the same amount.
/// With `trace`, a frame is kept after each event; the settled final frame is
/// always kept.
pub fn drive(
    app: &mut BubbleApp,
    events: Vec<InputEvent>,
    trace: bool,
    settle_secs: f32,
) -> Vec<Step> {
    let mut steps = Vec::new();

    for (step, event) in events.into_iter().enumerate() {
        app.dispatch(event);
        if let InputEvent::Tick { ms } = event {
            app.animator_mut().tick(ms / 1000.0);
        }

        if trace {
            steps.push(Step {
                step,
                event: Some(event),
                frame: app.frame(),
            });
        }
    }

    app.animator_mut().settle(settle_secs);
    if !app.animator().is_settled() {
        tracing::warn!("Animations still running after {}s", settle_secs);
    }

    steps.push(Step {
        step: steps.len(),
        event: None,
        frame: app.frame(),
    });
    steps
}
