#![cfg(feature = "cli")]

use anyhow::Result;
use std::process::Command;
use tempdist::app::convert_once;
use tempdist::ConversionKind;

fn run_binary(args: &[&str]) -> Result<(String, String, Option<i32>)> {
    let output = Command::new(env!("CARGO_BIN_EXE_tempdist"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()?;
    Ok((
        String::from_utf8(output.stdout)?,
        String::from_utf8(output.stderr)?,
        output.status.code(),
    ))
}

#[test]
fn test_json_output_is_single_line_record() -> Result<()> {
    let (mut output, mut errors) = (Vec::new(), Vec::new());
    let code = convert_once(ConversionKind::Distance, "1", true, &mut output, &mut errors)?;
    assert_eq!(code, 0);
    assert!(errors.is_empty());

    let output = String::from_utf8(output)?;
    assert_eq!(output.lines().count(), 1);

    let record: serde_json::Value = serde_json::from_str(output.trim_end())?;
    assert_eq!(record["kind"], "distance");
    assert_eq!(record["input"], "1");
    assert_eq!(record["formatted"], "1.609");
    assert_eq!(record["message"], "1 miles equals 1.609 kilometers.");
    Ok(())
}

#[test]
fn test_binary_prints_success_line() -> Result<()> {
    let (stdout, stderr, code) = run_binary(&["temperature", "212"])?;
    assert_eq!(stdout, "212 F equals 100 °C.\n");
    assert!(stderr.is_empty());
    assert_eq!(code, Some(0));
    Ok(())
}

#[test]
fn test_binary_invalid_input_exits_with_two() -> Result<()> {
    let (stdout, stderr, code) = run_binary(&["distance", "abc"])?;
    assert!(stdout.is_empty());
    assert!(stderr.contains("Invalid distance entered. Please enter a valid numeric value:"));
    assert_eq!(code, Some(2));
    Ok(())
}

#[test]
fn test_binary_json_flag() -> Result<()> {
    let (stdout, _, code) = run_binary(&["--json", "distance", "1"])?;
    assert_eq!(code, Some(0));

    let record: serde_json::Value = serde_json::from_str(stdout.trim_end())?;
    assert_eq!(record["kind"], "distance");
    assert_eq!(record["formatted"], "1.609");
    Ok(())
}

#[test]
fn test_binary_accepts_negative_value() -> Result<()> {
    let (stdout, _, code) = run_binary(&["temperature", "-40"])?;
    assert_eq!(stdout, "-40 F equals -40 °C.\n");
    assert_eq!(code, Some(0));
    Ok(())
}
