//! Plain-text rendering of a solution path.
//!
//! One box per step, stacked top to bottom, joined by arrows labelled
//! with the action taken:
//!
//! ```text
//! +--------------------+
//! | Step 0             |
//! | Agent: A           |
//! | A: dirty, B: dirty |
//! | F=2 (G=0, H=2)     |
//! +--------------------+
//!   |
//!   | Suck
//!   v
//! +--------------------+
//! | Step 1             |
//! ...
//! ```

use std::fmt::{Display, Write as _};

use sweep_kernel::carrier::location::Location;
use sweep_kernel::carrier::room_state::RoomStateV1;
use sweep_search::path::SolutionPath;

/// Lines describing a state inside a rendered box.
pub trait StateLabel {
    fn label_lines(&self) -> Vec<String>;
}

impl StateLabel for RoomStateV1 {
    fn label_lines(&self) -> Vec<String> {
        let rooms: Vec<String> = self
            .rooms()
            .map(|(room, status)| format!("{room}: {status}"))
            .collect();
        vec![format!("Agent: {}", self.agent()), rooms.join(", ")]
    }
}

impl StateLabel for Location {
    fn label_lines(&self) -> Vec<String> {
        vec![self.to_string()]
    }
}

/// Render `path` as stacked boxes. Every box has the same width.
#[must_use]
pub fn render_path<S, A>(path: &SolutionPath<S, A>) -> String
where
    S: StateLabel,
    A: Display,
{
    let boxes: Vec<Vec<String>> = path
        .steps()
        .iter()
        .enumerate()
        .map(|(i, step)| {
            let mut lines = vec![format!("Step {i}")];
            lines.extend(step.state.label_lines());
            lines.push(format!("F={} (G={}, H={})", step.f, step.g, step.h));
            lines
        })
        .collect();

    let width = boxes
        .iter()
        .flatten()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);
    let border = format!("+{}+", "-".repeat(width + 2));

    let mut out = String::new();
    for (i, lines) in boxes.iter().enumerate() {
        if let Some(action) = path.steps()[i].action.as_ref() {
            let _ = writeln!(out, "  |\n  | {action}\n  v");
        }
        out.push_str(&border);
        out.push('\n');
        for line in lines {
            let pad = width - line.chars().count();
            let _ = writeln!(out, "| {line}{} |", " ".repeat(pad));
        }
        out.push_str(&border);
        out.push('\n');
    }
    out
}

/// One-line summary: `cost 3 via Suck -> MoveRight -> Suck`.
#[must_use]
pub fn summarize_path<S, A: Display>(path: &SolutionPath<S, A>) -> String {
    let actions: Vec<String> = path.actions().iter().map(ToString::to_string).collect();
    if actions.is_empty() {
        format!("cost {} (initial state is a goal)", path.total_cost())
    } else {
        format!("cost {} via {}", path.total_cost(), actions.join(" -> "))
    }
}
