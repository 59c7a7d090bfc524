//! Serialization and parsing of condition expressions.

use thiserror::Error;

use crate::vector::DimensionVector;

/// Which side of the `==` comparison an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Left,
    Right,
}

impl std::fmt::Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}

/// Why a condition expression could not be decoded into a dimension vector.
///
/// These are expected, recoverable inputs; callers typically treat a failed
/// parse as "no recognizable configuration dimensions" and move on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConditionParseError {
    #[error("condition has no `==` comparison")]
    MissingEquality,

    #[error("{side} operand is not enclosed in single quotes")]
    UnquotedOperand { side: Operand },

    #[error("condition compares empty dimension lists")]
    EmptyDimensionList,

    #[error("dimension name count {names} does not match value count {values}")]
    DimensionCountMismatch { names: usize, values: usize },

    #[error("`{token}` is not a `$(Name)` dimension reference")]
    MalformedDimensionReference { token: String },
}

/// Serialize a dimension vector to its condition-expression form.
///
/// The empty vector serializes to the empty string, matching the host
/// format's convention that "no condition" is an empty attribute rather
/// than an omitted one.
pub fn serialize_condition(dimensions: &DimensionVector) -> String {
    if dimensions.is_empty() {
        return String::new();
    }
    let names = dimensions
        .iter()
        .map(|(name, _)| format!("$({name})"))
        .collect::<Vec<_>>()
        .join("|");
    let values = dimensions
        .iter()
        .map(|(_, value)| value)
        .collect::<Vec<_>>()
        .join("|");
    format!("'{names}'=='{values}'")
}

/// Parse a condition expression back into a dimension vector.
///
/// The empty string parses to the empty vector; that is a deliberate
/// non-error case. Any malformation yields an error and discards partial
/// results. Duplicate dimension names are not rejected: the last occurrence
/// wins, preserving a quirk of the legacy format.
pub fn parse_condition(condition: &str) -> Result<DimensionVector, ConditionParseError> {
    if condition.is_empty() {
        return Ok(DimensionVector::new());
    }

    // `==` has no case, but the host format searches case-insensitively and
    // requires the operator at an offset greater than zero.
    let eq = condition
        .find("==")
        .filter(|&at| at > 0)
        .ok_or(ConditionParseError::MissingEquality)?;

    let left = unquote(condition[..eq].trim(), Operand::Left)?;
    let right = unquote(condition[eq + 2..].trim(), Operand::Right)?;
    if left.is_empty() {
        return Err(ConditionParseError::EmptyDimensionList);
    }

    let names: Vec<&str> = left.split('|').collect();
    let values: Vec<&str> = right.split('|').collect();
    if names.len() != values.len() {
        return Err(ConditionParseError::DimensionCountMismatch {
            names: names.len(),
            values: values.len(),
        });
    }

    let mut vector = DimensionVector::new();
    for (reference, value) in names.into_iter().zip(values) {
        vector.insert(dimension_name(reference)?, value);
    }
    Ok(vector)
}

/// Derive the configuration name directly from a condition expression.
///
/// Parse failure is swallowed at this derived layer only: a malformed
/// condition yields the empty string, as does the empty condition.
pub fn configuration_name(condition: &str) -> String {
    parse_condition(condition)
        .map(|vector| vector.configuration_name())
        .unwrap_or_default()
}

fn unquote(operand: &str, side: Operand) -> Result<&str, ConditionParseError> {
    // Quote characters are ASCII, so byte slicing stays on char boundaries.
    if operand.len() >= 2 && operand.starts_with('\'') && operand.ends_with('\'') {
        Ok(&operand[1..operand.len() - 1])
    } else {
        Err(ConditionParseError::UnquotedOperand { side })
    }
}

/// Validate a `$(Name)` dimension reference and return the bare name.
///
/// An explicit character-class scan: the token must be exactly `$(` + a
/// non-empty run of characters excluding `$`, `(`, `)` + `)`.
fn dimension_name(token: &str) -> Result<&str, ConditionParseError> {
    let malformed = || ConditionParseError::MalformedDimensionReference {
        token: token.to_string(),
    };
    let name = token
        .strip_prefix("$(")
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(malformed)?;
    if name.is_empty() || name.chars().any(|c| matches!(c, '$' | '(' | ')')) {
        return Err(malformed());
    }
    Ok(name)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn vector(pairs: &[(&str, &str)]) -> DimensionVector {
        pairs
            .iter()
            .map(|(n, v)| (n.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn serialize_empty_vector_is_empty_string() {
        assert_eq!(serialize_condition(&DimensionVector::new()), "");
    }

    #[test]
    fn serialize_two_dimensions() {
        let dims = vector(&[("Configuration", "Debug"), ("Platform", "AnyCPU")]);
        assert_eq!(
            serialize_condition(&dims),
            "'$(Configuration)|$(Platform)'=='Debug|AnyCPU'"
        );
    }

    #[test]
    fn parse_empty_string_is_empty_vector() {
        assert_eq!(parse_condition("").unwrap(), DimensionVector::new());
    }

    #[test]
    fn parse_literal_example() {
        let parsed = parse_condition("'$(Configuration)|$(Platform)'=='Debug|AnyCPU'").unwrap();
        assert_eq!(parsed, vector(&[("Configuration", "Debug"), ("Platform", "AnyCPU")]));
        assert_eq!(parsed.configuration_name(), "Debug|AnyCPU");
    }

    #[test]
    fn parse_tolerates_surrounding_whitespace() {
        let parsed = parse_condition(" '$(Configuration)' == 'Release' ").unwrap();
        assert_eq!(parsed, vector(&[("Configuration", "Release")]));
    }

    #[test]
    fn parse_missing_equality_fails() {
        assert_eq!(
            parse_condition("'$(Configuration)'"),
            Err(ConditionParseError::MissingEquality)
        );
    }

    #[test]
    fn parse_leading_equality_fails() {
        assert_eq!(
            parse_condition("=='Debug'"),
            Err(ConditionParseError::MissingEquality)
        );
    }

    #[test]
    fn parse_unquoted_left_side_fails() {
        assert_eq!(
            parse_condition("$(Configuration)=='Debug'"),
            Err(ConditionParseError::UnquotedOperand {
                side: Operand::Left
            })
        );
    }

    #[test]
    fn parse_unquoted_right_side_fails() {
        assert_eq!(
            parse_condition("'$(Configuration)'==Debug"),
            Err(ConditionParseError::UnquotedOperand {
                side: Operand::Right
            })
        );
    }

    #[test]
    fn parse_mismatched_arity_fails() {
        assert_eq!(
            parse_condition("'$(Configuration)|$(Platform)'=='Debug'"),
            Err(ConditionParseError::DimensionCountMismatch {
                names: 2,
                values: 1
            })
        );
    }

    #[test]
    fn parse_malformed_dimension_reference_fails() {
        for token in ["Configuration", "$(Configuration", "$()", "$($(X))"] {
            let condition = format!("'{token}'=='Debug'");
            assert_eq!(
                parse_condition(&condition),
                Err(ConditionParseError::MalformedDimensionReference {
                    token: token.to_string()
                }),
                "token {token:?} should be rejected"
            );
        }
    }

    #[test]
    fn parse_empty_left_operand_fails() {
        assert_eq!(
            parse_condition("''=='Debug'"),
            Err(ConditionParseError::EmptyDimensionList)
        );
    }

    // Pins a quirk of the legacy format: duplicate dimension names are not
    // rejected and the last occurrence wins.
    #[test]
    fn parse_duplicate_dimension_last_occurrence_wins() {
        let parsed =
            parse_condition("'$(Configuration)|$(Configuration)'=='Debug|Release'").unwrap();
        assert_eq!(parsed, vector(&[("Configuration", "Release")]));
    }

    #[test]
    fn parse_allows_empty_values() {
        let parsed = parse_condition("'$(Configuration)'==''").unwrap();
        assert_eq!(parsed, vector(&[("Configuration", "")]));
    }

    #[test]
    fn round_trip_preserves_vector_and_order() {
        let cases = [
            vector(&[]),
            vector(&[("Configuration", "Debug")]),
            vector(&[("Configuration", "Debug"), ("Platform", "AnyCPU")]),
            vector(&[("Platform", "x64"), ("Configuration", "Release"), ("Flavor", "CI")]),
        ];
        for dims in cases {
            assert_eq!(parse_condition(&serialize_condition(&dims)).unwrap(), dims);
        }
    }

    #[test]
    fn configuration_name_swallows_parse_failure() {
        assert_eq!(configuration_name(""), "");
        assert_eq!(configuration_name("not a condition"), "");
        assert_eq!(
            configuration_name("'$(Configuration)|$(Platform)'=='Debug|AnyCPU'"),
            "Debug|AnyCPU"
        );
    }
}
