use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use pharmscan::engine::progress::{Progress, ProgressCallback};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::warn;

const SPINNER_TICK_MS: u64 = 80;

/// What the terminal shows for the stage currently running.
struct StageDisplay {
    bar: ProgressBar,
    stage: Option<&'static str>,
    summary: Option<String>,
    completed: Vec<String>,
}

impl StageDisplay {
    fn begin_stage(&mut self, name: &'static str) {
        self.stage = Some(name);
        self.summary = None;
        self.bar.reset();
        self.bar.set_length(0);
        self.bar.set_style(spinner_style());
        self.bar.set_prefix(name);
        self.bar.set_message("");
        self.bar.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
    }

    fn begin_steps(&mut self, total_steps: u64) {
        self.bar.disable_steady_tick();
        self.bar.reset();
        self.bar.set_length(total_steps);
        self.bar.set_style(bar_style());
    }

    fn step(&mut self, label: &'static str) {
        self.bar.inc(1);
        self.bar.set_message(label);
    }

    fn fill_steps(&mut self) {
        if let Some(length) = self.bar.length() {
            self.bar.set_position(length);
        }
        self.bar.finish();
    }

    fn note(&mut self, text: String) {
        match self.stage {
            Some(_) => self.summary = Some(text),
            None => self.bar.println(format!("  {text}")),
        }
    }

    /// Prints "stage: summary" above the bar and clears it.
    fn end_stage(&mut self) {
        self.bar.disable_steady_tick();
        let Some(stage) = self.stage.take() else {
            return;
        };
        let line = match self.summary.take() {
            Some(summary) => format!("{stage}: {summary}"),
            None => stage.to_string(),
        };
        self.bar.println(format!("✓ {line}"));
        self.bar.finish_and_clear();
        self.completed.push(line);
    }
}

/// Renders analysis stages on stderr: a spinner while a stage runs, a bar labelled with
/// the current rule during classification, and one summary line per finished stage.
#[derive(Clone)]
pub struct CliProgressHandler {
    display: Arc<Mutex<StageDisplay>>,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        Self::with_draw_target(ProgressDrawTarget::stderr())
    }

    /// A handler that draws nowhere, used when logging is silenced.
    pub fn hidden() -> Self {
        Self::with_draw_target(ProgressDrawTarget::hidden())
    }

    fn with_draw_target(target: ProgressDrawTarget) -> Self {
        let bar = ProgressBar::with_draw_target(Some(0), target).with_style(spinner_style());
        bar.finish_and_clear();

        Self {
            display: Arc::new(Mutex::new(StageDisplay {
                bar,
                stage: None,
                summary: None,
                completed: Vec::new(),
            })),
        }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let shared = Arc::clone(&self.display);

        Box::new(move |event: Progress| {
            let Ok(mut display) = shared.lock() else {
                warn!("Progress display mutex was poisoned. Dropping event.");
                return;
            };

            match event {
                Progress::PhaseStart { name } => display.begin_stage(name),
                Progress::TaskStart { total_steps } => display.begin_steps(total_steps),
                Progress::TaskIncrement { label } => display.step(label),
                Progress::TaskFinish => display.fill_steps(),
                Progress::Message(text) => display.note(text),
                Progress::PhaseFinish => display.end_stage(),
            }
        })
    }
}

impl Default for CliProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}

fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.green} {prefix:.bold} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

fn bar_style() -> ProgressStyle {
    ProgressStyle::with_template("  {prefix:.bold} [{bar:30.cyan/blue}] {pos}/{len} {wide_msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=> ")
}
