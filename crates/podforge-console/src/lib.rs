//! Colored console output for round planning.
//!
//! Provides a custom `tracing` layer that formats planner events with colors.
//! Everything is written to stderr; stdout stays reserved for result
//! documents.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (plan start/end, model built, warm start, solve end)
//! - **DEBUG**: Phase progress (construction, local search, MILP start)
//! - **TRACE**: Individual local search steps

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

#[cfg(test)]
mod tests;

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static PLAN_START_NANOS: AtomicU64 = AtomicU64::new(0);

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_DIRECTIVE: &str = "podforge_solver=info";

/// Initializes console logging.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the banner and installs a registry with an `EnvFilter`
/// (`RUST_LOG`, default [`DEFAULT_DIRECTIVE`], CLI events always at info)
/// and [`PlannerConsoleLayer`].
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let mut builder = EnvFilter::builder();
        if let Ok(directive) = DEFAULT_DIRECTIVE.parse::<Directive>() {
            builder = builder.with_default_directive(directive);
        }
        let mut filter = builder.from_env_lossy();
        if let Ok(directive) = "podforge::commands=info".parse::<Directive>() {
            filter = filter.add_directive(directive);
        }

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(PlannerConsoleLayer)
            .try_init();
    });
}

// Marks the start of a plan for elapsed time tracking.
fn mark_plan_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos() as u64;
    PLAN_START_NANOS.store(nanos, Ordering::Relaxed);
}

// Returns elapsed time since the last plan start.
fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start_nanos = PLAN_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

fn print_banner() {
    let banner = r#"
 ____           _ _____
|  _ \ ___   __| |  ___|__  _ __ __ _  ___
| |_) / _ \ / _` | |_ / _ \| '__/ _` |/ _ \
|  __/ (_) | (_| |  _| (_) | | | (_| |  __/
|_|   \___/ \__,_|_|  \___/|_|  \__, |\___|
                                |___/
"#;

    let version_line = format!("            v{} - Pod and Cube Round Planner\n", VERSION);

    let mut stderr = io::stderr().lock();
    let _ = writeln!(stderr, "{}", banner.bright_cyan());
    let _ = writeln!(stderr, "{}", version_line.bright_white().bold());
    let _ = stderr.flush();
}

/// A tracing layer that formats planner events with colors.
pub struct PlannerConsoleLayer;

impl<S: Subscriber> Layer<S> for PlannerConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("podforge") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stderr(), "{}", output);
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct EventVisitor {
    event: Option<String>,
    backend: Option<String>,
    status: Option<String>,
    message: Option<String>,
    warning: Option<String>,
    outcome: Option<String>,
    reason: Option<String>,
    candidate: Option<String>,
    path: Option<String>,
    round: Option<u64>,
    players: Option<u64>,
    pods: Option<u64>,
    cubes: Option<u64>,
    variables: Option<u64>,
    constraints: Option<u64>,
    indicators: Option<u64>,
    rows: Option<u64>,
    steps: Option<u64>,
    seed: Option<u64>,
    want_count: Option<u64>,
    avoid_count: Option<u64>,
    warnings: Option<u64>,
    duration_ms: Option<u64>,
    budget_ms: Option<u64>,
    objective: Option<f64>,
    score: Option<f64>,
    best_score: Option<f64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value).trim_matches('"').to_string();
        match field.name() {
            "event" => self.event = Some(s),
            "backend" => self.backend = Some(s),
            "status" => self.status = Some(s),
            "message" => self.message = Some(s),
            "warning" | "error" => self.warning = Some(s),
            "outcome" => self.outcome = Some(s),
            "reason" => self.reason = Some(s),
            "candidate" => self.candidate = Some(s),
            "path" => self.path = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "round" => self.round = Some(value),
            "players" => self.players = Some(value),
            "pods" => self.pods = Some(value),
            "cubes" => self.cubes = Some(value),
            "variables" => self.variables = Some(value),
            "constraints" => self.constraints = Some(value),
            "indicators" => self.indicators = Some(value),
            "rows" => self.rows = Some(value),
            "steps" => self.steps = Some(value),
            "seed" => self.seed = Some(value),
            "want_count" => self.want_count = Some(value),
            "avoid_count" => self.avoid_count = Some(value),
            "warnings" => self.warnings = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "budget_ms" => self.budget_ms = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        match field.name() {
            "objective" => self.objective = Some(value),
            "score" | "search_score" => self.score = Some(value),
            "best_score" => self.best_score = Some(value),
            _ => {}
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "backend" => self.backend = Some(value.to_string()),
            "status" => self.status = Some(value.to_string()),
            "message" => self.message = Some(value.to_string()),
            "warning" | "error" => self.warning = Some(value.to_string()),
            "outcome" => self.outcome = Some(value.to_string()),
            "reason" => self.reason = Some(value.to_string()),
            "path" => self.path = Some(value.to_string()),
            _ => {}
        }
    }
}

pub(crate) fn format_event(v: &EventVisitor, level: Level) -> String {
    let event = v.event.as_deref().unwrap_or("");

    match event {
        "plan_start" => format_plan_start(v),
        "model_built" => format_model_built(v),
        "warm_start" => format_warm_start(v),
        "construction_end" | "construction_failed" => format_construction(v),
        "local_search_end" => format_local_search_end(v),
        "milp_start" => format_milp_start(v),
        "solve_end" => format_solve_end(v),
        "plan_end" => format_plan_end(v),
        "step" => format_step(v, level),
        "lp_written" | "lp_skipped" => format_lp(v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn count(value: Option<u64>) -> String {
    value
        .unwrap_or(0)
        .to_formatted_string(&Locale::en)
        .bright_yellow()
        .to_string()
}

fn format_plan_start(v: &EventVisitor) -> String {
    mark_plan_start();
    format!(
        "{} {} Round {} │ {} players │ {} pods │ {} cubes │ {} backend",
        format_elapsed(),
        "▶".bright_green().bold(),
        v.round.unwrap_or(0).to_string().white().bold(),
        count(v.players),
        count(v.pods),
        count(v.cubes),
        v.backend.as_deref().unwrap_or("unknown").bright_magenta()
    )
}

fn format_model_built(v: &EventVisitor) -> String {
    let mut output = format!(
        "{} {} Model │ {} variables │ {} constraints",
        format_elapsed(),
        "◆".bright_blue(),
        count(v.variables),
        count(v.constraints)
    );
    if v.indicators.is_some_and(|n| n > 0) {
        output.push_str(&format!(" │ {} indicator rows", count(v.indicators)));
    }
    output
}

fn format_warm_start(v: &EventVisitor) -> String {
    if let Some(outcome) = &v.outcome {
        return format!(
            "{} {} Warm start │ {}",
            format_elapsed(),
            "!".bright_yellow().bold(),
            outcome.yellow()
        );
    }
    let mut output = format!(
        "{} {} Warm start │ {} │ objective {}",
        format_elapsed(),
        "◀".bright_blue(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        format_objective(v.objective)
    );
    if let Some(seed) = v.seed {
        output.push_str(&format!(" │ seed {}", seed.to_string().bright_black()));
    }
    output
}

fn format_construction(v: &EventVisitor) -> String {
    match (&v.reason, v.score) {
        (Some(reason), _) => format!(
            "{} {} Construction failed │ {}",
            format_elapsed(),
            "✗".bright_red(),
            reason.bright_red()
        ),
        (None, score) => format!(
            "{} {} Construction │ score {}",
            format_elapsed(),
            "◀".bright_blue(),
            format_objective(score)
        ),
    }
}

fn format_local_search_end(v: &EventVisitor) -> String {
    format!(
        "{} {} Local search │ {} steps │ best {}",
        format_elapsed(),
        "◀".bright_blue(),
        v.steps
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .white(),
        format_objective(v.best_score)
    )
}

fn format_milp_start(v: &EventVisitor) -> String {
    format!(
        "{} {} MILP │ {} variables │ {} rows │ {} budget",
        format_elapsed(),
        "▶".bright_blue(),
        count(v.variables),
        count(v.rows),
        format_duration_ms(v.budget_ms.unwrap_or(0)).yellow()
    )
}

fn format_solve_end(v: &EventVisitor) -> String {
    let status = v.status.as_deref().unwrap_or("UNKNOWN");
    let mut output = format!(
        "{} {} Solved │ {} │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        format_status(status),
        format_objective(v.objective)
    );
    if let Some(message) = v.message.as_deref().filter(|m| !m.is_empty()) {
        output.push_str(&format!(" │ {}", message.bright_black()));
    }
    output
}

fn format_plan_end(v: &EventVisitor) -> String {
    if let Some(warning) = &v.warning {
        return format!(
            "{} {} Round {} │ {}",
            format_elapsed(),
            "!".bright_yellow().bold(),
            v.round.unwrap_or(0).to_string().white().bold(),
            warning.yellow()
        );
    }

    let status = v.status.as_deref().unwrap_or("UNKNOWN");
    let mut output = format!(
        "{} {} Round {} planned │ {} │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        v.round.unwrap_or(0).to_string().white().bold(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        format_status(status)
    );

    output.push_str("\n\n");
    output.push_str(
        &"╔══════════════════════════════════════════════════════════╗"
            .bright_cyan()
            .to_string(),
    );
    output.push('\n');
    for (label, value) in [
        ("Status:", status.to_string()),
        ("Players on desired cube:", v.want_count.unwrap_or(0).to_string()),
        ("Players on avoided cube:", v.avoid_count.unwrap_or(0).to_string()),
        ("Warnings:", v.warnings.unwrap_or(0).to_string()),
    ] {
        output.push_str(&format!(
            "{}  {:<26}{:>28}  {}",
            "║".bright_cyan(),
            label,
            value,
            "║".bright_cyan()
        ));
        output.push('\n');
    }
    output.push_str(
        &"╚══════════════════════════════════════════════════════════╝"
            .bright_cyan()
            .to_string(),
    );
    output.push('\n');

    output
}

fn format_lp(v: &EventVisitor) -> String {
    match (&v.path, &v.reason) {
        (Some(path), _) => format!(
            "{} {} LP model written │ {}",
            format_elapsed(),
            "◆".bright_blue(),
            path.white()
        ),
        (None, reason) => format!(
            "{} {} LP model skipped │ {}",
            format_elapsed(),
            "!".bright_yellow().bold(),
            reason.as_deref().unwrap_or("no model").yellow()
        ),
    }
}

fn format_step(v: &EventVisitor, level: Level) -> String {
    if level != Level::TRACE {
        return String::new();
    }

    format!(
        "{} {} {} │ {}",
        format_elapsed(),
        "·".bright_black(),
        v.candidate.as_deref().unwrap_or("?").bright_black(),
        format_objective(v.score).bright_black()
    )
}

pub(crate) fn format_status(status: &str) -> String {
    match status {
        "OPTIMAL" => status.bright_green().bold().to_string(),
        "FEASIBLE" => status.green().to_string(),
        "INFEASIBLE" | "ERROR" => status.bright_red().bold().to_string(),
        _ => status.white().to_string(),
    }
}

pub(crate) fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

pub(crate) fn format_objective(objective: Option<f64>) -> String {
    let Some(value) = objective else {
        return "N/A".white().to_string();
    };
    let text = format!("{:.2}", value);
    if value < 0.0 {
        text.bright_red().to_string()
    } else if value > 0.0 {
        text.bright_green().to_string()
    } else {
        text.white().to_string()
    }
}
