use std::io::Write;

use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use tokio::sync::broadcast::{self, error::RecvError};
use tracing::debug;

use crate::runner::ProgressSnapshot;

/// Prints one line per progress sample until the run's reporter goes away.
pub(super) fn spawn_progress_printer(
    mut progress_rx: broadcast::Receiver<ProgressSnapshot>,
    no_color: bool,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            match progress_rx.recv().await {
                Ok(sample) => {
                    if let Err(err) = render_progress_line(&sample, no_color) {
                        debug!("Failed to render progress: {}", err);
                        break;
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    debug!("Progress printer skipped {} samples", skipped);
                }
                Err(RecvError::Closed) => break,
            }
        }
    })
}

fn render_progress_line(sample: &ProgressSnapshot, no_color: bool) -> Result<(), std::io::Error> {
    let mut out = std::io::stdout();
    for segment in build_progress_line(sample, no_color) {
        if let Some(color) = segment.color {
            queue!(
                out,
                SetForegroundColor(color),
                Print(&segment.text),
                ResetColor
            )?;
        } else {
            queue!(out, Print(&segment.text))?;
        }
    }
    queue!(out, Print("\n"))?;
    out.flush()?;
    Ok(())
}

fn build_progress_line(sample: &ProgressSnapshot, no_color: bool) -> Vec<ProgressSegment> {
    let segments = [
        (format!("[{:02}s]", sample.elapsed_secs), None),
        (format!(" Req: {}", sample.total), None),
        (format!(" | RPS: {}", sample.rps), Some(Color::Cyan)),
        (format!(" | ok {}", sample.success), Some(Color::Green)),
        (format!(" | failed {}", sample.failed), Some(Color::Red)),
        (format!(" | blocked {}", sample.blocked), Some(Color::Yellow)),
        (format!(" | timeouts {}", sample.timeouts), Some(Color::Magenta)),
    ];
    segments
        .into_iter()
        .map(|(text, color)| match (color, no_color) {
            (Some(color), false) => ProgressSegment::colored(text, color),
            (Some(_) | None, _) => ProgressSegment::plain(text),
        })
        .collect()
}

struct ProgressSegment {
    text: String,
    color: Option<Color>,
}

impl ProgressSegment {
    const fn plain(text: String) -> Self {
        Self { text, color: None }
    }

    const fn colored(text: String, color: Color) -> Self {
        Self {
            text,
            color: Some(color),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AppError, AppResult};

    fn sample() -> ProgressSnapshot {
        ProgressSnapshot {
            elapsed_secs: 3,
            total: 1200,
            delta: 400,
            rps: 400,
            success: 1000,
            failed: 50,
            blocked: 100,
            timeouts: 10,
        }
    }

    #[test]
    fn progress_line_text() -> AppResult<()> {
        let text: String = build_progress_line(&sample(), true)
            .into_iter()
            .map(|segment| segment.text)
            .collect();
        let expected = "[03s] Req: 1200 | RPS: 400 | ok 1000 | failed 50 | blocked 100 | timeouts 10";
        if text != expected {
            return Err(AppError::validation(format!("Unexpected line '{}'", text)));
        }
        Ok(())
    }

    #[test]
    fn no_color_strips_colors() -> AppResult<()> {
        if build_progress_line(&sample(), true)
            .iter()
            .any(|segment| segment.color.is_some())
        {
            return Err(AppError::validation("Expected plain segments"));
        }
        if !build_progress_line(&sample(), false)
            .iter()
            .any(|segment| segment.color.is_some())
        {
            return Err(AppError::validation("Expected colored segments"));
        }
        Ok(())
    }
}
