use std::fs;
use std::path::Path;
use traffic_footprint::commands::{execute_compare, validate_args, CompareArgs};
use traffic_footprint::features::{Feature, Measurement};
use traffic_footprint::output::read_report;

const HEADER: &str = "frame.number\t_ws.col.Time\tip.src\tip.dst\tframe.len\n";

fn write_trace(path: &Path, rows: &[(&str, &str, u64)]) {
    let mut text = String::from(HEADER);
    for (i, (src, dst, len)) in rows.iter().enumerate() {
        text.push_str(&format!("{}\t{}\t{}\t{}\t{}\n", i + 1, i, src, dst, len));
    }
    fs::write(path, text).unwrap();
}

/// Scripts and traces for Gmail (complete) and Dropbox (one trace missing)
fn setup(root: &Path) -> std::path::PathBuf {
    let scripts = root.join("UserActions");
    let traces = root.join("Traces");

    for app in ["Gmail", "Dropbox"] {
        fs::create_dir_all(scripts.join(app)).unwrap();
        fs::create_dir_all(traces.join(app)).unwrap();
    }
    fs::write(scripts.join("Gmail/Gmail_send.sh"), "#!/bin/sh\n").unwrap();
    fs::write(scripts.join("Dropbox/Dropbox_upload.sh"), "#!/bin/sh\n").unwrap();

    let me = "192.168.1.5";
    let peer = "8.8.8.8";
    write_trace(&traces.join("Gmail/Gmail_send_0.csv"), &[(me, peer, 100), (peer, me, 300)]);
    write_trace(&traces.join("Gmail/Gmail_send_tor_0.csv"), &[(me, peer, 586)]);
    write_trace(&traces.join("Dropbox/Dropbox_upload_0.csv"), &[(me, peer, 60)]);

    let config = root.join("footprint.toml");
    fs::write(
        &config,
        format!(
            "traces_dir = {:?}\nscripts_dir = {:?}\noutput_dir = {:?}\niterations = 1\n\n[devices]\nGmail = \"{}\"\nDropbox = \"{}\"\n",
            traces,
            scripts,
            root.join("Reports"),
            me,
            me
        ),
    )
    .unwrap();

    config
}

#[test]
fn test_compare_writes_feature_reports() {
    let dir = tempfile::tempdir().unwrap();
    let config = setup(dir.path());

    let args = CompareArgs {
        config,
        features: vec!["Tot Size".to_string(), "Num Tot Packs".to_string()],
        jobs: Some(2),
        ..Default::default()
    };
    validate_args(&args).unwrap();

    let summary = execute_compare(args).unwrap();
    assert_eq!(summary.units, 4);
    assert_eq!(summary.failed, 2);
    assert_eq!(summary.reports.len(), 2);

    let report = read_report(dir.path().join("Reports/totsize.json")).unwrap();
    assert_eq!(report.feature, Feature::TotSize);
    assert_eq!(report.tables.len(), 1);
    assert_eq!(report.tables[0].app, "Gmail");
    assert_eq!(report.tables[0].rows[0].action.as_str(), "send");
    assert_eq!(report.tables[0].rows[0].default, Measurement::Value(400.0));
    assert_eq!(report.tables[0].rows[0].overlay, Measurement::Value(586.0));

    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].app, "Dropbox");
    assert!(report.failures[0].error.contains("Dropbox_upload_tor_0.csv"));
}

#[test]
fn test_compare_fails_when_every_unit_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = setup(dir.path());
    fs::remove_file(dir.path().join("Traces/Gmail/Gmail_send_tor_0.csv")).unwrap();

    let args = CompareArgs {
        config,
        features: vec!["Avg All Pack".to_string()],
        ..Default::default()
    };

    assert!(execute_compare(args).is_err());
}

#[test]
fn test_compare_missing_config() {
    let dir = tempfile::tempdir().unwrap();
    let args = CompareArgs {
        config: dir.path().join("nope.toml"),
        ..Default::default()
    };

    assert!(execute_compare(args).is_err());
}

#[test]
fn test_compare_app_without_device_fails_per_feature() {
    let dir = tempfile::tempdir().unwrap();
    let config = setup(dir.path());
    let slack = dir.path().join("UserActions/Slack");
    fs::create_dir_all(&slack).unwrap();
    fs::write(slack.join("Slack_post.sh"), "#!/bin/sh\n").unwrap();

    let args = CompareArgs {
        config,
        features: vec!["Tot Size".to_string(), "Num Tot Packs".to_string()],
        ..Default::default()
    };

    let summary = execute_compare(args).unwrap();
    assert_eq!(summary.units, 6);
    // Slack for both features, Dropbox for its missing overlay trace
    assert_eq!(summary.failed, 4);

    for file in ["totsize.json", "numtotpacks.json"] {
        let report = read_report(dir.path().join("Reports").join(file)).unwrap();
        assert_eq!(report.tables.len(), 1);
        assert_eq!(report.tables[0].app, "Gmail");

        let slack_failures: Vec<_> = report.failures.iter().filter(|f| f.app == "Slack").collect();
        assert_eq!(slack_failures.len(), 1);
        assert!(slack_failures[0].error.contains("No local device address"));
    }
}
