use crate::api::fraud::{AnalysisOutcome, AnalysisResult, Device, FraudApi, Stats, Transaction};
use crate::models::TransactionForm;
use crate::services::dashboard_service::Dashboard;
use crate::utils::Table;

pub const HEADING: &str = "AI Fraud Detection Dashboard";

const SUBMIT_LABEL: &str = "Analyze Transaction";
const BUSY_LABEL: &str = "Analyzing...";

/// Visual treatment of the result panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultStyle {
    Error,
    Fraud,
    Safe,
}

pub fn result_style(outcome: &AnalysisOutcome) -> ResultStyle {
    match outcome {
        AnalysisOutcome::Error { .. } => ResultStyle::Error,
        AnalysisOutcome::Verdict(r) if r.is_fraud => ResultStyle::Fraud,
        AnalysisOutcome::Verdict(_) => ResultStyle::Safe,
    }
}

/// Score in [0, 1] as a percentage with one decimal, e.g. `82.0%`.
/// Ties round away from zero, so `0.0025` shows as `0.3%`.
pub fn format_percent(score: f64) -> String {
    format!("{:.1}%", (score * 1000.0).round() / 10.0)
}

/// Label of the submit control and whether it accepts input
pub fn submit_control(loading: bool) -> (&'static str, bool) {
    if loading {
        (BUSY_LABEL, false)
    } else {
        (SUBMIT_LABEL, true)
    }
}

/// Render the whole dashboard
pub fn render_dashboard<A: FraudApi>(dashboard: &Dashboard<A>) -> String {
    let mut sections = vec![
        format!("{}\n{}\n", HEADING, "=".repeat(HEADING.len())),
        render_stat_cards(&dashboard.stats),
        render_form(&dashboard.form, dashboard.loading),
    ];
    if let Some(outcome) = &dashboard.result {
        sections.push(render_result(outcome));
    }
    sections.push(render_transactions(&dashboard.transactions));
    sections.join("\n")
}

pub fn render_stat_cards(stats: &Stats) -> String {
    let cards = [
        ("📈", "Total Transactions", stats.total_transactions.to_string()),
        ("🚨", "Flagged as Fraud", stats.flagged_count.to_string()),
        ("✅", "Model Accuracy", format!("{}%", stats.accuracy)),
    ];

    cards
        .iter()
        .map(|(icon, label, value)| format!("[ {} {}: {} ]", icon, label, value))
        .collect::<Vec<_>>()
        .join("  ")
        + "\n"
}

pub fn render_form(form: &TransactionForm, loading: bool) -> String {
    let devices = Device::ALL
        .iter()
        .map(Device::as_str)
        .collect::<Vec<_>>()
        .join(" | ");

    let fields = [
        ("Transaction ID", form.transaction_id.clone()),
        ("User ID", form.user_id.clone()),
        ("Amount (Rs.)", form.amount.clone()),
        ("Location", form.location.clone()),
        ("Device", format!("{}  ({})", form.device, devices)),
    ];

    let mut output = String::from("Analyze Transaction\n-------------------\n");
    for (label, value) in fields {
        output.push_str(&format!("  {:<15}: {}\n", label, value));
    }

    let (label, enabled) = submit_control(loading);
    if enabled {
        output.push_str(&format!("  [ {} ]\n", label));
    } else {
        output.push_str(&format!("  [ {} ] (disabled)\n", label));
    }
    output
}

pub fn render_result(outcome: &AnalysisOutcome) -> String {
    let verdict = match outcome {
        AnalysisOutcome::Error { error } => return format!("[ERROR] ❌ Error\n  {}\n", error),
        AnalysisOutcome::Verdict(result) => result,
    };

    let headline = match result_style(outcome) {
        ResultStyle::Fraud => "[FRAUD] ⚠️ Fraud Detected",
        _ => "[SAFE] ✅ Transaction Safe",
    };
    render_verdict(headline, verdict)
}

fn render_verdict(headline: &str, result: &AnalysisResult) -> String {
    let mut output = format!(
        "{}\n  Transaction ID: {}\n  Risk Score: {}\n  Confidence: {}\n",
        headline,
        result.transaction_id,
        format_percent(result.risk_score),
        format_percent(result.confidence),
    );
    if let Some(reason) = result.reason.as_deref().filter(|r| !r.is_empty()) {
        output.push_str(&format!("  Reason: {}\n", reason));
    }
    output
}

/// Transaction table in the order the backend returned it
pub fn render_transactions(transactions: &[Transaction]) -> String {
    let mut table = Table::new(&[
        "Transaction ID",
        "User ID",
        "Amount",
        "Location",
        "Device",
        "Timestamp",
    ]);

    for tx in transactions {
        table.add_row(vec![
            tx.transaction_id.clone(),
            tx.user_id.clone(),
            tx.amount.to_string(),
            tx.location.clone().unwrap_or_default(),
            tx.device.clone().unwrap_or_default(),
            tx.timestamp.clone().unwrap_or_default(),
        ]);
    }

    format!("All Transactions\n----------------\n{}", table.render())
}
