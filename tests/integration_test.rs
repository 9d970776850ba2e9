use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use anyhow::{anyhow, Result};
use tempfile::tempdir;

const SCENARIO_CSV: &str = "\
order_detail_id,order_date,category,product_name,quantity,totalprice_rupiah,gender
1,2024-01-05,Bike,Roadster,2,1000000,M
2,2024-01-20,Bike,Roadster,1,500000,F
3,2024-02-01,Parts,Chain,5,100000,M
";

fn run_dashboard(working_directory: &Path, input: &str) -> Result<Output> {
    let binary_path = env!("CARGO_BIN_EXE_sales-dashboard");

    let mut child = Command::new(binary_path)
        .current_dir(working_directory)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    let mut stdin = child.stdin.take().ok_or_else(|| anyhow!("stdin not captured"))?;

    //NOTE: A dashboard that fails to load exits before reading, so a broken pipe is expected there
    let _ = stdin.write_all(input.as_bytes());
    drop(stdin);

    Ok(child.wait_with_output()?)
}

fn create_workspace(csv_content: &str) -> Result<tempfile::TempDir> {
    let directory = tempdir()?;
    fs::create_dir(directory.path().join("data"))?;
    fs::write(directory.path().join("data").join("dataset_bee_cycle.csv"), csv_content)?;

    Ok(directory)
}

#[test]
fn test_cli_renders_unfiltered_dashboard_on_start() -> Result<()> {
    let workspace = create_workspace(SCENARIO_CSV)?;
    let output = run_dashboard(workspace.path(), "quit\n")?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;

    assert!(stdout.contains("Showing 3 transactions from 2024-01-05 to 2024-02-01"));
    assert!(stdout.contains("1,600,000"));
    assert!(stdout.contains("533,333"));
    assert!(stdout.contains("Roadster"));

    Ok(())
}

#[test]
fn test_cli_applies_filters_from_input() -> Result<()> {
    let workspace = create_workspace(SCENARIO_CSV)?;
    let output = run_dashboard(workspace.path(), "categories Bike\ndetails\nquit\n")?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let last_dashboard = stdout.rsplit("# Bee Cycle Sales Dashboard").next()
        .ok_or_else(|| anyhow!("dashboard missing from output"))?;

    assert!(last_dashboard.contains("Showing 2 transactions from 2024-01-05 to 2024-02-01"));
    assert!(last_dashboard.contains("1,500,000"));
    assert!(last_dashboard.contains("750,000"));
    assert!(last_dashboard.contains("2024-01"));
    assert!(last_dashboard.contains("## Transaction Data"));
    assert!(!last_dashboard.contains("Chain"));

    Ok(())
}

#[test]
fn test_cli_reports_rejected_commands_and_keeps_running() -> Result<()> {
    let workspace = create_workspace(SCENARIO_CSV)?;
    let output = run_dashboard(workspace.path(), "product Unicycle\ncategories none\n")?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;

    assert!(stdout.contains("Unknown product [Unicycle]"));
    assert!(stdout.contains("Showing 0 transactions"));

    Ok(())
}

#[test]
fn test_cli_fails_when_dataset_is_missing() -> Result<()> {
    let directory = tempdir()?;
    let output = run_dashboard(directory.path(), "quit\n")?;

    assert!(!output.status.success());

    let stderr = String::from_utf8(output.stderr)?;

    assert!(stderr.contains("Unable to open dataset"));

    Ok(())
}

#[test]
fn test_cli_fails_when_dates_cannot_be_parsed() -> Result<()> {
    let workspace = create_workspace("\
order_detail_id,order_date,category,product_name,quantity,totalprice_rupiah,gender
1,someday,Bike,Roadster,2,1000000,M
")?;
    let output = run_dashboard(workspace.path(), "quit\n")?;

    assert!(!output.status.success());
    assert!(String::from_utf8(output.stdout)?.is_empty());

    Ok(())
}
