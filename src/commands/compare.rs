//! Compare command implementation.
//!
//! The compare command:
//! 1. Loads the run config
//! 2. Discovers apps and actions
//! 3. Runs every (feature, app) unit in parallel
//! 4. Writes one JSON report per feature

use super::discovery::{list_actions, list_apps};
use super::models::{CompareArgs, CompareSummary};
use crate::aggregator::DirTraceSource;
use crate::features::Feature;
use crate::output::{group_by_feature, render_table, write_report};
use crate::pipeline::{run_batch, AppInput, UnitOutcome};
use crate::utils::config::RunConfig;
use crate::utils::error::PipelineError;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::sync::Arc;
use std::time::Instant;

/// An app ready to run, owning what its `AppInput` borrows
struct PreparedApp {
    name: String,
    actions: Vec<String>,
    local_ip: String,
    source: DirTraceSource,
}

/// Execute the compare command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Config loading or validation failures
/// * Scripts folder cannot be listed (a single app folder only fails that app)
/// * Report files cannot be written
/// * Every unit failed
pub fn execute_compare(args: CompareArgs) -> Result<CompareSummary> {
    let start_time = Instant::now();

    // Step 1: Load config
    info!("Step 1/4: Loading config from {}", args.config.display());
    let mut config = RunConfig::load(&args.config)
        .with_context(|| format!("Failed to load config {}", args.config.display()))?;

    if let Some(iterations) = args.iterations {
        config.iterations = iterations;
    }
    if let Some(output_dir) = &args.output_dir {
        config.output_dir = output_dir.clone();
    }
    config.validate().context("Invalid config after overrides")?;

    let features = select_features(&args.features, config.features.as_deref())?;
    debug!("Features: {:?}", features);

    // Step 2: Discover apps and actions
    info!("Step 2/4: Discovering apps in {}", config.scripts_dir.display());
    let app_names = list_apps(&config.scripts_dir).with_context(|| {
        format!("Failed to list apps in {}", config.scripts_dir.display())
    })?;

    let mut prepared = Vec::new();
    let mut outcomes: Vec<UnitOutcome> = Vec::new();

    for app in app_names {
        match prepare_app(&config, app, &features) {
            Ok(app) => {
                debug!("{}: {} actions", app.name, app.actions.len());
                prepared.push(app);
            }
            Err(failures) => outcomes.extend(failures),
        }
    }

    let inputs: Vec<AppInput<'_>> = prepared
        .iter()
        .map(|app| AppInput {
            app: &app.name,
            actions: &app.actions,
            local_ip: &app.local_ip,
            iterations: config.iterations,
            source: &app.source,
        })
        .collect();

    // Step 3: Run units
    info!(
        "Step 3/4: Computing {} features for {} apps ({} iterations)",
        features.len(),
        inputs.len(),
        config.iterations
    );
    let batch = match args.jobs {
        Some(jobs) => rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build()
            .context("Failed to build worker pool")?
            .install(|| run_batch(&features, &inputs)),
        None => run_batch(&features, &inputs),
    };
    outcomes.extend(batch);

    let units = outcomes.len();
    let failed = outcomes.iter().filter(|o| !o.is_ok()).count();

    if args.print_summary {
        print_summary(&outcomes);
    }

    // Step 4: Write reports
    info!("Step 4/4: Writing reports to {}", config.output_dir.display());
    let mut reports = Vec::new();
    for report in group_by_feature(&features, outcomes) {
        let path = config.output_dir.join(report.file_name());
        write_report(&report, &path)
            .with_context(|| format!("Failed to write report {}", path.display()))?;
        reports.push(path);
    }

    if units > 0 && failed == units {
        anyhow::bail!("All {} units failed", units);
    }

    let elapsed = start_time.elapsed();
    info!(
        "✓ {} reports written, {} of {} units failed, in {:.2}s",
        reports.len(),
        failed,
        units,
        elapsed.as_secs_f64()
    );

    Ok(CompareSummary {
        reports,
        units,
        failed,
    })
}

/// Resolve an app's device address and actions
///
/// On failure, returns one failed outcome per feature so the app shows up
/// in every report while the other apps keep running.
///
/// **Private** - internal helper for execute_compare
fn prepare_app(
    config: &RunConfig,
    app: String,
    features: &[Feature],
) -> std::result::Result<PreparedApp, Vec<UnitOutcome>> {
    let Some(local_ip) = config.device_ip(&app) else {
        warn!("No device address for {}, skipping", app);
        return Err(failed_units(&app, features, || {
            PipelineError::UnknownDevice(app.clone())
        }));
    };

    let actions = match list_actions(&config.scripts_dir, &app) {
        Ok(actions) => actions,
        Err(e) => {
            warn!("Failed to list actions of {}: {}, skipping", app, e);
            let source = Arc::new(e);
            return Err(failed_units(&app, features, || PipelineError::Discovery {
                app: app.clone(),
                source: Arc::clone(&source),
            }));
        }
    };

    Ok(PreparedApp {
        local_ip: local_ip.to_string(),
        source: DirTraceSource::new(config.traces_dir.join(&app)),
        name: app,
        actions,
    })
}

fn failed_units(
    app: &str,
    features: &[Feature],
    error: impl Fn() -> PipelineError,
) -> Vec<UnitOutcome> {
    features
        .iter()
        .map(|&feature| UnitOutcome {
            app: app.to_string(),
            feature,
            result: Err(error()),
        })
        .collect()
}

/// Resolve feature names from the CLI, then the config, then all
///
/// **Private** - internal helper for execute_compare
fn select_features(cli: &[String], config: Option<&[String]>) -> Result<Vec<Feature>> {
    let names = if !cli.is_empty() {
        cli
    } else if let Some(names) = config.filter(|n| !n.is_empty()) {
        names
    } else {
        return Ok(Feature::ALL.to_vec());
    };

    let mut features = Vec::with_capacity(names.len());
    for name in names {
        let feature: Feature = name.parse().map_err(anyhow::Error::msg)?;
        if !features.contains(&feature) {
            features.push(feature);
        }
    }

    Ok(features)
}

/// Print each table, or why its unit failed
///
/// **Private** - internal helper for execute_compare
fn print_summary(outcomes: &[UnitOutcome]) {
    println!("\n{}", "=".repeat(80));
    println!("COMPARISON SUMMARY");
    println!("{}", "=".repeat(80));

    for outcome in outcomes {
        match &outcome.result {
            Ok(table) => println!("\n{}", render_table(table)),
            Err(e) => println!("\n  {} / {}: FAILED ({})", outcome.app, outcome.feature, e),
        }
    }

    println!("{}", "=".repeat(80));
}

/// Validate compare arguments
///
/// **Public** - can be called before execute_compare for early validation
pub fn validate_args(args: &CompareArgs) -> Result<()> {
    if args.config.as_os_str().is_empty() {
        anyhow::bail!("Config path cannot be empty");
    }

    if args.iterations == Some(0) {
        anyhow::bail!("iterations must be greater than 0");
    }

    if args.jobs == Some(0) {
        anyhow::bail!("jobs must be greater than 0");
    }

    for name in &args.features {
        name.parse::<Feature>().map_err(anyhow::Error::msg)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::path::Path;

    fn config_for(scripts_dir: &Path, devices: &[(&str, &str)]) -> RunConfig {
        RunConfig {
            traces_dir: scripts_dir.join("Traces"),
            scripts_dir: scripts_dir.to_path_buf(),
            output_dir: scripts_dir.join("Reports"),
            iterations: 1,
            devices: devices
                .iter()
                .map(|(app, ip)| (app.to_string(), ip.to_string()))
                .collect::<BTreeMap<_, _>>(),
            features: None,
        }
    }

    #[test]
    fn test_prepare_app_unreadable_scripts() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(dir.path(), &[("Ghost", "192.168.1.5")]);
        let features = [Feature::TotSize, Feature::ActionDuration];

        let failures = match prepare_app(&config, "Ghost".to_string(), &features) {
            Err(failures) => failures,
            Ok(_) => panic!("expected discovery failure"),
        };

        assert_eq!(failures.len(), 2);
        for (outcome, feature) in failures.iter().zip(features) {
            assert_eq!(outcome.app, "Ghost");
            assert_eq!(outcome.feature, feature);
            assert!(matches!(
                &outcome.result,
                Err(PipelineError::Discovery { app, .. }) if app == "Ghost"
            ));
        }
    }

    #[test]
    fn test_prepare_app_unknown_device() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(dir.path(), &[]);

        let failures = match prepare_app(&config, "Gmail".to_string(), &[Feature::TotSize]) {
            Err(failures) => failures,
            Ok(_) => panic!("expected unknown device"),
        };
        assert!(matches!(failures[0].result, Err(PipelineError::UnknownDevice(_))));
    }

    #[test]
    fn test_prepare_app_lists_actions() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("Gmail")).unwrap();
        std::fs::write(dir.path().join("Gmail/Gmail_send.sh"), "").unwrap();
        let config = config_for(dir.path(), &[("Gmail", "192.168.1.5")]);

        let app = match prepare_app(&config, "Gmail".to_string(), &[Feature::TotSize]) {
            Ok(app) => app,
            Err(_) => panic!("expected prepared app"),
        };
        assert_eq!(app.actions, vec!["Gmail_send".to_string()]);
        assert_eq!(app.local_ip, "192.168.1.5");
    }

    #[test]
    fn test_validate_args_default() {
        assert!(validate_args(&CompareArgs::default()).is_ok());
    }

    #[test]
    fn test_validate_args_zero_iterations() {
        let args = CompareArgs {
            iterations: Some(0),
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_zero_jobs() {
        let args = CompareArgs {
            jobs: Some(0),
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_unknown_feature() {
        let args = CompareArgs {
            features: vec!["Median Pack".to_string()],
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_select_features_precedence() {
        let cli = vec!["Tot Size".to_string(), "totsize".to_string()];
        let config = vec!["Avg In Pack".to_string()];

        assert_eq!(select_features(&cli, Some(config.as_slice())).unwrap(), vec![Feature::TotSize]);
        assert_eq!(select_features(&[], Some(config.as_slice())).unwrap(), vec![Feature::AvgInPack]);
        assert_eq!(select_features(&[], None).unwrap().len(), 11);
    }
}
