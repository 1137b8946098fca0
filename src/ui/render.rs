use chrono::{DateTime, Local, SecondsFormat, Utc};
use serde_json::Value;

use crate::store::{Algorithm, ModelCard, StoreError};
use crate::tasks::{AssessError, AssessmentReport};

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const FG_RED: &str = "\x1b[31m";
pub const FG_GREEN: &str = "\x1b[32m";
pub const FG_YELLOW: &str = "\x1b[33m";
pub const FG_CYAN: &str = "\x1b[36m";
pub const FG_GREY: &str = "\x1b[90m";

const GAUGE_WIDTH: usize = 30;
const RULE: &str = "────────────────────────────────────────────────────────────────────────";

pub const DISCLAIMER: &str =
    "This tool is for educational purposes only. Always consult a healthcare professional.";
pub const PROBABILITY_CAPTION: &str =
    "Probability of coronary artery disease based on the provided clinical parameters.";

pub fn banner() -> Vec<String> {
    vec![
        format!("{BOLD}{FG_CYAN}▶ HeartGuard AI{RESET}"),
        format!("{DIM}Advanced Cardiac Risk Assessment System{RESET}"),
        format!("{FG_GREY}{RULE}{RESET}"),
    ]
}

fn progress_bar(current: f64, total: f64, width: usize) -> String {
    if total.is_finite() && total > 0.0 {
        let ratio = (current / total).clamp(0.0, 1.0);
        let filled = (ratio * width as f64).round() as usize;
        let empty = width.saturating_sub(filled);
        return format!("[{}{}]", "█".repeat(filled), "░".repeat(empty));
    }

    String::new()
}

/// A 0-100 bar, red above 50 and green otherwise.
pub fn gauge(percent: f64) -> String {
    let color = if percent > 50.0 { FG_RED } else { FG_GREEN };
    format!(
        "{color}{}{RESET} {BOLD}{:.1}%{RESET}",
        progress_bar(percent, 100.0, GAUGE_WIDTH),
        percent
    )
}

fn badge(high_risk: bool) -> String {
    if high_risk {
        format!("{BOLD}{FG_RED}⚠️  High Risk Detected{RESET}")
    } else {
        format!("{BOLD}{FG_GREEN}✅ Low Risk Detected{RESET}")
    }
}

fn timestamp(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local)
        .to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub fn render_report(report: &AssessmentReport) -> String {
    let v = &report.verdict;
    let mut lines = vec![
        format!(
            "{BOLD}Risk Analysis{RESET}  {DIM}{} · {}{RESET}",
            report.algorithm,
            timestamp(report.assessed_at)
        ),
        badge(v.high_risk),
        gauge(v.percent()),
        format!("{DIM}{PROBABILITY_CAPTION}{RESET}"),
        String::new(),
        format!("{BOLD}Clinical Recommendations{RESET}"),
    ];
    for r in report.recommendations {
        lines.push(format!("  • {BOLD}{}:{RESET} {}", r.title, r.detail));
    }
    lines.push(String::new());
    lines.push(format!("{FG_YELLOW}{DISCLAIMER}{RESET}"));
    lines.join("\n")
}

pub fn render_failure(err: &AssessError) -> String {
    format!("{FG_RED}✗ {}{RESET}", err.user_message())
}

fn hyperparameter_text(card: &ModelCard) -> String {
    card.hyperparameters
        .iter()
        .map(|(k, v)| match v {
            Value::String(s) => format!("{k}={s}"),
            other => format!("{k}={other}"),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// One block per algorithm for the model listing.
pub fn render_model_card(
    algorithm: Algorithm,
    card: &Result<Option<ModelCard>, StoreError>,
) -> String {
    let head = format!("{BOLD}{algorithm}{RESET}");
    match card {
        Err(e) if e.is_missing() => format!("{head}  {FG_GREY}not trained{RESET}"),
        Err(e) => format!("{head}  {FG_RED}unusable: {e}{RESET}"),
        Ok(None) => format!("{head}  {DIM}no model card{RESET}"),
        Ok(Some(card)) => {
            let mut lines = vec![match card.test_accuracy {
                Some(acc) => format!("{head}  {FG_CYAN}Accuracy: {:.1}%{RESET}", acc * 100.0),
                None => head,
            }];
            if !card.hyperparameters.is_empty() {
                lines.push(format!("  {DIM}params{RESET}  {}", hyperparameter_text(card)));
            }
            if let Some(d) = card.dataset {
                lines.push(format!(
                    "  {DIM}dataset{RESET} {} samples ({} train / {} test)",
                    d.total, d.train, d.test
                ));
            }
            if let Some(at) = card.trained_at {
                lines.push(format!("  {DIM}trained{RESET} {}", timestamp(at)));
            }
            lines.join("\n")
        }
    }
}

/// The short accuracy line shown under the algorithm choice.
pub fn accuracy_line(card: Option<&ModelCard>) -> Option<String> {
    let acc = card?.test_accuracy?;
    Some(format!("{DIM}Model Accuracy: {:.1}%{RESET}", acc * 100.0))
}
