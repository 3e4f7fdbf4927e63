use crate::types::GenomicCoordinateRecord;

/// Outcome of parsing a raw position cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedPosition {
    Valid(i64),
    Invalid,
}

impl ParsedPosition {
    pub fn value(self) -> Option<i64> {
        match self {
            ParsedPosition::Valid(p) => Some(p),
            ParsedPosition::Invalid => None,
        }
    }
}

/// Lenient parse used for interval building: surrounding whitespace is
/// ignored and a leading sign is accepted. Values outside the `i64` range
/// are invalid.
pub fn parse_position(raw: &str) -> ParsedPosition {
    match raw.trim().parse::<i64>() {
        Ok(p) => ParsedPosition::Valid(p),
        Err(_) => ParsedPosition::Invalid,
    }
}

/// Strict parse used on the resistance path: after trimming, the text must
/// be a non-empty run of ASCII digits. Signs are rejected.
pub fn parse_digit_position(raw: &str) -> ParsedPosition {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return ParsedPosition::Invalid;
    }
    match trimmed.parse::<i64>() {
        Ok(p) => ParsedPosition::Valid(p),
        Err(_) => ParsedPosition::Invalid,
    }
}

/// A coordinates row whose position parsed.
#[derive(Debug, Clone, Copy)]
pub struct NormalizedRecord<'a> {
    pub record: &'a GenomicCoordinateRecord,
    pub position: i64,
}

/// Partition of the coordinates sheet into usable and rejected rows.
#[derive(Debug, Default)]
pub struct Normalized<'a> {
    pub accepted: Vec<NormalizedRecord<'a>>,
    pub invalid: Vec<&'a GenomicCoordinateRecord>,
}

/// Split `records` by [`parse_position`]. Every row lands in exactly one side.
pub fn normalize(records: &[GenomicCoordinateRecord]) -> Normalized<'_> {
    let mut normalized = Normalized::default();

    for record in records {
        match parse_position(&record.position) {
            ParsedPosition::Valid(position) => normalized
                .accepted
                .push(NormalizedRecord { record, position }),
            ParsedPosition::Invalid => normalized.invalid.push(record),
        }
    }

    normalized
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    fn record(position: &str) -> GenomicCoordinateRecord {
        GenomicCoordinateRecord {
            position: position.to_string(),
            reference_allele: "A".to_string(),
            alternative_allele: "G".to_string(),
            variant: "v".to_string(),
            fields: IndexMap::new(),
        }
    }

    #[test]
    fn test_parse_position_lenient() {
        assert_eq!(parse_position("761155"), ParsedPosition::Valid(761155));
        assert_eq!(parse_position("  42 \t"), ParsedPosition::Valid(42));
        assert_eq!(parse_position("+7"), ParsedPosition::Valid(7));
        assert_eq!(parse_position("-3"), ParsedPosition::Valid(-3));
        assert_eq!(parse_position(""), ParsedPosition::Invalid);
        assert_eq!(parse_position("12.0"), ParsedPosition::Invalid);
        assert_eq!(parse_position("1 2"), ParsedPosition::Invalid);
        assert_eq!(parse_position("761155-761157"), ParsedPosition::Invalid);
    }

    #[test]
    fn test_parse_position_bounds() {
        assert_eq!(
            parse_position("9223372036854775807"),
            ParsedPosition::Valid(i64::MAX)
        );
        assert_eq!(
            parse_position("-9223372036854775808"),
            ParsedPosition::Valid(i64::MIN)
        );
        assert_eq!(parse_position("9223372036854775808"), ParsedPosition::Invalid);
    }

    #[test]
    fn test_parse_digit_position_strict() {
        assert_eq!(parse_digit_position(" 761155 "), ParsedPosition::Valid(761155));
        assert_eq!(parse_digit_position("+7"), ParsedPosition::Invalid);
        assert_eq!(parse_digit_position("-3"), ParsedPosition::Invalid);
        assert_eq!(parse_digit_position("1 2"), ParsedPosition::Invalid);
        assert_eq!(parse_digit_position(""), ParsedPosition::Invalid);
        assert_eq!(parse_digit_position("99999999999999999999999"), ParsedPosition::Invalid);
    }

    #[test]
    fn test_strictness_differs_only_on_signs() {
        for raw in ["+5", "-5"] {
            assert!(parse_position(raw).value().is_some());
            assert_eq!(parse_digit_position(raw), ParsedPosition::Invalid);
        }
    }

    #[test]
    fn test_normalize_is_a_partition() {
        let records: Vec<_> = ["10", "x", " 11 ", "", "-2", "NA"]
            .iter()
            .map(|p| record(p))
            .collect();
        let normalized = normalize(&records);

        assert_eq!(normalized.accepted.len() + normalized.invalid.len(), records.len());
        assert_eq!(
            normalized.accepted.iter().map(|r| r.position).collect::<Vec<_>>(),
            vec![10, 11, -2]
        );
        assert_eq!(
            normalized.invalid.iter().map(|r| r.position.as_str()).collect::<Vec<_>>(),
            vec!["x", "", "NA"]
        );
    }
}
