use crate::domain::dimensions::Dimensions;
use crate::domain::ports::{InputSourceBox, OutputSinkBox};
use crate::domain::report::Report;
use crate::error::Result;
use crate::interfaces::text::input_reader::parse_input;
use num_bigint::BigUint;
use num_traits::Zero;

/// Counts the strings of length 2 through N over an alphabet of K symbols.
///
/// Returns `Σ_{i=2}^{N} K^i` computed exactly. The sum is empty, and the
/// result zero, when N is 1.
pub fn count_strings(dims: &Dimensions) -> BigUint {
    let alphabet = BigUint::from(dims.alphabet());
    let mut total = BigUint::zero();
    for length in 2..=dims.length() {
        total += alphabet.pow(length);
    }
    total
}

/// Parses, validates and computes the report for raw input text.
pub fn solve(input: &str) -> Result<Report> {
    let dims = parse_input(input)?;
    tracing::debug!(n = dims.length(), k = dims.alphabet(), "parsed input");
    Ok(Report::new(count_strings(&dims)))
}

/// Drives one computation from an input source to an output sink.
///
/// Nothing is written to the sink unless the input parses, validates and
/// the report is fully rendered.
pub struct StringCountEngine {
    source: InputSourceBox,
    sink: OutputSinkBox,
}

impl StringCountEngine {
    /// Creates a new `StringCountEngine`.
    ///
    /// # Arguments
    ///
    /// * `source` - Where the `N K` input text is read from.
    /// * `sink` - Where the two-line report is written to.
    pub fn new(source: InputSourceBox, sink: OutputSinkBox) -> Self {
        Self { source, sink }
    }

    pub async fn run(&self) -> Result<Report> {
        let input = self.source.read_input().await?;
        let report = solve(&input)?;
        let text = report.to_string();
        self.sink.write_output(&text).await?;

        tracing::info!(
            total = %report.total,
            digits = text.lines().next().map_or(0, str::len),
            "computed total"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StringCountError;
    use crate::infrastructure::in_memory::{InMemoryInputSource, InMemoryOutputSink};

    fn count(n: i32, k: i32) -> BigUint {
        count_strings(&Dimensions::new(n, k).unwrap())
    }

    #[test]
    fn test_known_values() {
        assert_eq!(count(2, 3), BigUint::from(9u32));
        assert_eq!(count(1, 1), BigUint::zero());
        assert_eq!(count(2, 2), BigUint::from(4u32));
        assert_eq!(count(3, 2), BigUint::from(12u32));
        assert_eq!(count(3, 1), BigUint::from(2u32));
        assert_eq!(count(3, 100), BigUint::from(1_010_000u32));
    }

    #[test]
    fn test_single_length_is_always_zero() {
        for k in [1, 2, 50, 100] {
            assert!(count(1, k).is_zero());
        }
    }

    #[test]
    fn test_unit_alphabet_counts_lengths() {
        assert_eq!(count(100, 1), BigUint::from(99u32));
    }

    #[test]
    fn test_maximum_input_exceeds_machine_integers() {
        // In base 100 the sum has digit 1 at positions 2..=100 and 0 below.
        let expected: String = std::iter::once("1")
            .chain(std::iter::repeat_n("01", 98))
            .chain(std::iter::once("0000"))
            .collect();
        let total = count(100, 100);
        assert_eq!(total.to_string(), expected);
        assert_eq!(expected.len(), 201);
    }

    #[test]
    fn test_solve_is_idempotent() {
        let first = solve("17 29").unwrap().to_string();
        let second = solve("17 29").unwrap().to_string();
        assert_eq!(first, second);
        assert!(first.ends_with("\n1"));
    }

    #[tokio::test]
    async fn test_engine_writes_report() {
        let sink = InMemoryOutputSink::new();
        let engine = StringCountEngine::new(
            Box::new(InMemoryInputSource::new("3 2")),
            Box::new(sink.clone()),
        );

        let report = engine.run().await.unwrap();
        assert_eq!(report.total, BigUint::from(12u32));
        assert_eq!(sink.contents().await.as_deref(), Some("12\n1"));
    }

    #[tokio::test]
    async fn test_engine_failure_leaves_sink_untouched() {
        let sink = InMemoryOutputSink::new();
        let engine = StringCountEngine::new(
            Box::new(InMemoryInputSource::new("x y")),
            Box::new(sink.clone()),
        );

        let err = engine.run().await.unwrap_err();
        assert!(matches!(err, StringCountError::Format { .. }));
        assert!(sink.contents().await.is_none());
    }
}
