//! Operation names understood by the coercer.

/// Target name of the sequence coercion (`convert-to-sequence`).
pub const SEQUENCE_TARGET: &str = "sequence";
/// Target name of the mapping coercion (`convert-to-mapping`).
pub const MAPPING_TARGET: &str = "mapping";

/// A classified coercion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation<'a> {
    /// Convert to an ordered sequence.
    Sequence,
    /// Convert to a key-to-value mapping.
    Mapping,
    /// Any other target; the argument is returned unchanged.
    Passthrough { target: &'a str },
}

impl<'a> Operation<'a> {
    /// Classifies `name` against `prefix`.
    ///
    /// Returns `None` when `name` is not a coercion request at all. Only the
    /// prefix is matched, so the bare prefix is a passthrough with an empty
    /// target.
    pub fn parse(name: &'a str, prefix: &str) -> Option<Self> {
        let target = name.strip_prefix(prefix)?;
        Some(match target {
            SEQUENCE_TARGET => Operation::Sequence,
            MAPPING_TARGET => Operation::Mapping,
            target => Operation::Passthrough { target },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_OPERATION_PREFIX;

    fn parse(name: &str) -> Option<Operation<'_>> {
        Operation::parse(name, DEFAULT_OPERATION_PREFIX)
    }

    #[test]
    fn test_recognized_targets() {
        assert_eq!(parse("convert-to-sequence"), Some(Operation::Sequence));
        assert_eq!(parse("convert-to-mapping"), Some(Operation::Mapping));
    }

    #[test]
    fn test_unknown_target_is_passthrough() {
        assert_eq!(
            parse("convert-to-whatever"),
            Some(Operation::Passthrough { target: "whatever" })
        );
        assert_eq!(
            parse("convert-to-Sequence"),
            Some(Operation::Passthrough { target: "Sequence" })
        );
    }

    #[test]
    fn test_bare_prefix_is_passthrough() {
        assert_eq!(
            parse("convert-to-"),
            Some(Operation::Passthrough { target: "" })
        );
    }

    #[test]
    fn test_non_coercion_names() {
        assert_eq!(parse("sequence"), None);
        assert_eq!(parse("xconvert-to-sequence"), None);
        assert_eq!(parse(""), None);
        assert_eq!(parse("convert-to"), None);
    }

    #[test]
    fn test_custom_prefix() {
        assert_eq!(Operation::parse("to_sequence", "to_"), Some(Operation::Sequence));
        assert_eq!(Operation::parse("convert-to-sequence", "to_"), None);
    }
}
