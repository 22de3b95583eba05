use tempdist::{
    convert_distance, convert_temperature, format_result, parse_input, ConversionEngine,
    ConversionKind, ConversionOutcome, ConversionResult,
};

#[test]
fn test_formulas_match_arithmetic() {
    for f in [-459.67, -40.0, 0.0, 32.0, 98.6, 212.0, 1.0e6, -3.5e-3] {
        assert_eq!(convert_temperature(f), (f - 32.0) * 5.0 / 9.0);
        assert_eq!(convert_distance(f), f * 1.60934);
    }
}

#[test]
fn test_nan_and_infinity_propagate() {
    assert!(convert_temperature(f64::NAN).is_nan());
    assert!(convert_distance(f64::NAN).is_nan());
    assert_eq!(convert_temperature(f64::INFINITY), f64::INFINITY);
    assert_eq!(convert_distance(f64::INFINITY), f64::INFINITY);
    assert_eq!(convert_distance(f64::NEG_INFINITY), f64::NEG_INFINITY);
}

#[test]
fn test_boiling_and_freezing_points() {
    assert_eq!(format_result(convert_temperature(32.0)), "0");
    assert_eq!(format_result(convert_temperature(212.0)), "100");
}

#[test]
fn test_one_mile_and_zero_miles() {
    assert_eq!(format_result(convert_distance(1.0)), "1.609");
    assert_eq!(format_result(convert_distance(0.0)), "0");
}

#[test]
fn test_integer_literal_same_as_decimal() {
    let whole = parse_input(ConversionKind::Temperature, "100").unwrap();
    let decimal = parse_input(ConversionKind::Temperature, "100.0").unwrap();
    assert_eq!(whole.value(), decimal.value());
    assert_eq!(whole.convert(), decimal.convert());
}

#[test]
fn test_engine_success_messages() {
    let engine = ConversionEngine::new();

    let outcome = engine.run(ConversionKind::Distance, "1");
    assert_eq!(outcome.message(), "1 miles equals 1.609 kilometers.");
    assert_eq!(outcome.result(), ConversionResult::Value(1.60934));

    let outcome = engine.run(ConversionKind::Temperature, "212");
    assert_eq!(outcome.message(), "212 F equals 100 °C.");

    let outcome = engine.run(ConversionKind::Temperature, "100");
    assert_eq!(outcome.message(), "100 F equals 37.778 °C.");

    // 負距離不做限制
    let outcome = engine.run(ConversionKind::Distance, "-10");
    assert_eq!(outcome.message(), "-10 miles equals -16.093 kilometers.");
}

#[test]
fn test_negative_results_rounding_to_zero_keep_sign() {
    let engine = ConversionEngine::new();

    let outcome = engine.run(ConversionKind::Distance, "-0");
    assert_eq!(outcome.message(), "-0 miles equals -0 kilometers.");

    let outcome = engine.run(ConversionKind::Temperature, "31.9999");
    assert_eq!(outcome.message(), "31.9999 F equals -0 °C.");

    let outcome = engine.run(ConversionKind::Distance, "0");
    assert_eq!(outcome.message(), "0 miles equals 0 kilometers.");
}

#[test]
fn test_engine_keeps_raw_input_in_message() {
    let engine = ConversionEngine::new();
    let outcome = engine.run(ConversionKind::Distance, "1e1");
    assert_eq!(outcome.message(), "1e1 miles equals 16.093 kilometers.");
}

#[test]
fn test_engine_invalid_input() {
    let engine = ConversionEngine::new();

    for kind in ConversionKind::ALL {
        let outcome = engine.run(kind, "abc");
        assert!(!outcome.is_success());
        assert_eq!(outcome.result(), ConversionResult::InvalidInput);
        assert_eq!(
            outcome.message(),
            format!("Invalid {} entered. Please enter a valid numeric value:", kind.noun())
        );
        match outcome {
            ConversionOutcome::Failure(e) => {
                assert_eq!(e.kind, kind);
                assert_eq!(e.input, "abc");
            }
            ConversionOutcome::Success(_) => panic!("expected failure"),
        }
    }
}

#[test]
fn test_record_serializes_with_lowercase_kind() -> anyhow::Result<()> {
    let engine = ConversionEngine::new();
    let ConversionOutcome::Success(record) = engine.run(ConversionKind::Temperature, "32") else {
        panic!("expected success");
    };

    let json: serde_json::Value = serde_json::to_value(&record)?;
    assert_eq!(json["kind"], "temperature");
    assert_eq!(json["input"], "32");
    assert_eq!(json["formatted"], "0");
    assert_eq!(json["message"], "32 F equals 0 °C.");
    Ok(())
}
