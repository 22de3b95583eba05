use crate::core::engine::{render_record, ConversionEngine};
use crate::core::{ConversionKind, ConversionOutcome};
use crate::utils::error::{ConverterError, Result};
use std::io::Write;

/// Run one conversion and return the process exit status.
///
/// The result goes to `output`, an invalid-input message to `errors`.
pub fn convert_once<W: Write, E: Write>(
    kind: ConversionKind,
    raw: &str,
    json: bool,
    output: &mut W,
    errors: &mut E,
) -> Result<u8> {
    match ConversionEngine::new().run(kind, raw) {
        ConversionOutcome::Success(record) => {
            writeln!(output, "{}", render_record(&record, json)?)?;
            Ok(0)
        }
        ConversionOutcome::Failure(e) => {
            writeln!(errors, "{}", e)?;
            Ok(ConverterError::Parse(e).exit_code())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_goes_to_output() {
        let (mut output, mut errors) = (Vec::new(), Vec::new());
        let code = convert_once(ConversionKind::Temperature, "212", false, &mut output, &mut errors)
            .unwrap();

        assert_eq!(code, 0);
        assert_eq!(String::from_utf8(output).unwrap(), "212 F equals 100 °C.\n");
        assert!(errors.is_empty());
    }

    #[test]
    fn test_failure_goes_to_errors() {
        let (mut output, mut errors) = (Vec::new(), Vec::new());
        let code =
            convert_once(ConversionKind::Distance, "abc", false, &mut output, &mut errors).unwrap();

        assert_eq!(code, 2);
        assert!(output.is_empty());
        assert_eq!(
            String::from_utf8(errors).unwrap(),
            "Invalid distance entered. Please enter a valid numeric value:\n"
        );
    }
}
