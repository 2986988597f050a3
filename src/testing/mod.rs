//! Ordered scenario runner used by the smoke binary.
//!
//! A scenario is a plain function returning `Err(reason)` on failure. A panic
//! escaping a scenario is caught and counted as a failure.

use std::panic::catch_unwind;
use std::time::Instant;

use tracing::{debug, warn};

use crate::config::RunnerConfig;
use crate::error::panic_message;
use crate::utilities::colors::Painter;

pub type ScenarioFn = fn() -> Result<(), String>;

/// Every selected scenario passed
pub const EXIT_OK: i32 = 0;
/// At least one scenario failed
pub const EXIT_FAILED: i32 = 1;
/// Invalid configuration, or a filter that selects nothing
pub const EXIT_USAGE: i32 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioResult {
    pub name: String,
    pub passed: bool,
    pub message: Option<String>,
    pub duration_us: u64,
}

pub struct ScenarioRunner {
    scenarios: Vec<(String, ScenarioFn)>,
}

impl ScenarioRunner {
    pub fn new() -> Self {
        ScenarioRunner {
            scenarios: Vec::new(),
        }
    }

    /// Scenarios run in registration order
    pub fn register(&mut self, name: impl Into<String>, scenario: ScenarioFn) {
        self.scenarios.push((name.into(), scenario));
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.scenarios.iter().map(|(name, _)| name.as_str())
    }

    pub fn run_all(&self, config: &RunnerConfig) -> RunSummary {
        let results: Vec<ScenarioResult> = self
            .scenarios
            .iter()
            .filter(|(name, _)| config.selects(name))
            .map(|(name, scenario)| run_one(name, *scenario))
            .collect();

        let passed = results.iter().filter(|r| r.passed).count();
        RunSummary {
            total: results.len(),
            passed,
            failed: results.len() - passed,
            results,
        }
    }

    pub fn run_single(&self, name: &str) -> Option<ScenarioResult> {
        self.scenarios
            .iter()
            .find(|(n, _)| n == name)
            .map(|(n, scenario)| run_one(n, *scenario))
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}

fn run_one(name: &str, scenario: ScenarioFn) -> ScenarioResult {
    debug!(scenario = name, "running");
    let start = Instant::now();
    let outcome = match catch_unwind(scenario) {
        Ok(outcome) => outcome,
        Err(payload) => Err(format!(
            "panicked: {}",
            panic_message(&*payload).unwrap_or("<non-string payload>")
        )),
    };
    let duration_us = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX);

    match outcome {
        Ok(()) => {
            debug!(scenario = name, duration_us, "passed");
            ScenarioResult {
                name: name.to_string(),
                passed: true,
                message: None,
                duration_us,
            }
        }
        Err(reason) => {
            warn!(scenario = name, reason = %reason, "failed");
            ScenarioResult {
                name: name.to_string(),
                passed: false,
                message: Some(reason),
                duration_us,
            }
        }
    }
}

/// What a smoke run prints and how it exits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Lines for stdout
    pub lines: Vec<String>,
    /// Message for stderr, if the run could not start
    pub error: Option<String>,
    pub exit_code: i32,
}

impl RunReport {
    fn usage_error(message: String) -> Self {
        RunReport {
            lines: Vec::new(),
            error: Some(message),
            exit_code: EXIT_USAGE,
        }
    }
}

/// Validate `config`, then list or run the selected scenarios.
pub fn run_with(runner: &ScenarioRunner, config: &RunnerConfig) -> RunReport {
    if let Err(e) = config.validate() {
        return RunReport::usage_error(e);
    }

    if config.list {
        return RunReport {
            lines: runner.names().map(str::to_string).collect(),
            error: None,
            exit_code: EXIT_OK,
        };
    }

    if !runner.names().any(|name| config.selects(name)) {
        let message = match config.filter.as_deref() {
            Some(filter) => {
                warn!(filter, "no scenario matches the filter");
                format!("No scenario matches filter: {}", filter)
            }
            None => "No scenarios registered".to_string(),
        };
        return RunReport::usage_error(message);
    }

    let summary = runner.run_all(config);
    let painter = Painter::new(config.color);
    let mut lines = if config.quiet {
        Vec::new()
    } else {
        summary.render_lines(&painter)
    };
    lines.push(summary.render_summary(&painter));

    RunReport {
        lines,
        error: None,
        exit_code: if summary.all_passed() { EXIT_OK } else { EXIT_FAILED },
    }
}

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub results: Vec<ScenarioResult>,
}

impl RunSummary {
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// One `name : PASS|FAIL` line per scenario, with the reason on failure
    pub fn render_lines(&self, painter: &Painter) -> Vec<String> {
        self.results
            .iter()
            .map(|r| match &r.message {
                Some(reason) => format!("{} : {} ({})", r.name, painter.verdict(false), reason),
                None => format!("{} : {}", r.name, painter.verdict(r.passed)),
            })
            .collect()
    }

    pub fn render_summary(&self, painter: &Painter) -> String {
        let tally = format!("{} passed, {} failed, {} total", self.passed, self.failed, self.total);
        if self.all_passed() {
            format!("{} {}", painter.header("Summary:"), painter.success(&tally))
        } else {
            format!("{} {}", painter.header("Summary:"), painter.failure(&tally))
        }
    }
}
