//! alarm-check — reads an alarm settings file, builds the rule set and
//! reports validation findings.
//!
//! Exits non-zero when the document cannot be built, when validation finds
//! errors, or (with `--strict`) when it finds warnings.

use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::{error, info, warn};

use alarm_rules::config::{load_dotenv, AlarmConfig};
use alarm_rules::validation::validate_rule_set;
use alarm_rules::{RuleSet, RuleSetBuilder};

// ── CLI ─────────────────────────────────────────────────────────────

/// Check an alarm settings file.
#[derive(Parser, Debug)]
#[command(name = "alarm-check", version, about)]
struct Cli {
    /// Path to the alarm settings file. Defaults to ALARM_SETTINGS_PATH.
    #[arg(long, short)]
    settings: Option<PathBuf>,

    /// Output format for the built rule set.
    #[arg(long, value_enum, default_value_t = Format::Summary)]
    format: Format,

    /// Fail on validation warnings too.
    #[arg(long)]
    strict: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Summary,
    Json,
    Yaml,
}

// ── Output ──────────────────────────────────────────────────────────

fn print_summary(rule_set: &RuleSet) {
    println!("rules: {}", rule_set.rules().len());
    for rule in rule_set.rules() {
        println!(
            "  {} metrics={} op={} threshold={} period={} count={} silence={}",
            rule.name,
            rule.metrics_name,
            rule.op.as_deref().unwrap_or("-"),
            rule.threshold,
            rule.period,
            rule.count,
            rule.silence_period,
        );
    }
    println!("webhooks: {}", rule_set.webhooks().len());
    if let Some(grpc) = &rule_set.grpc_hook {
        println!(
            "gRPC hook: {}",
            grpc.target().unwrap_or_else(|| "incomplete".to_string())
        );
    }
    if let Some(chat) = &rule_set.chat_hook {
        println!(
            "chat hook: {} webhook(s), {} template",
            chat.webhooks.len(),
            if chat.uses_default_template() { "default" } else { "custom" }
        );
    }
}

fn run(cli: Cli) -> anyhow::Result<bool> {
    let config = AlarmConfig::from_env();
    let path = cli.settings.unwrap_or(config.settings_path);
    let strict = cli.strict || config.strict;

    let file = File::open(&path)
        .with_context(|| format!("failed to open alarm settings {}", path.display()))?;
    let rule_set = RuleSetBuilder::from_reader(file)
        .with_context(|| format!("failed to build alarm rules from {}", path.display()))?;
    info!(path = %path.display(), rules = rule_set.rules().len(), "loaded alarm settings");

    let result = validate_rule_set(&rule_set);
    for e in &result.errors {
        match &e.suggestion {
            Some(s) => error!(path = %e.path, suggestion = %s, "{}", e.message),
            None => error!(path = %e.path, "{}", e.message),
        }
    }
    for w in &result.warnings {
        warn!(path = %w.path, "{}", w.message);
    }

    match cli.format {
        Format::Summary => print_summary(&rule_set),
        Format::Json => println!("{}", serde_json::to_string_pretty(&rule_set)?),
        Format::Yaml => print!("{}", serde_yaml::to_string(&rule_set)?),
    }

    Ok(result.valid && !(strict && !result.warnings.is_empty()))
}

// ── main ────────────────────────────────────────────────────────────

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    load_dotenv();
    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => {
            warn!("alarm settings check failed");
            ExitCode::FAILURE
        }
        Err(e) => {
            error!(error = %format!("{e:#}"), "alarm settings check aborted");
            ExitCode::FAILURE
        }
    }
}
