use thiserror::Error;

/// Represents all possible errors that can occur while parsing a
/// schedule expression.
///
/// Every variant is terminal for the parse attempt that produced it:
/// parsing fails fast on the first error and never returns a partial
/// result. Variants carry the label of the slot they occurred in where
/// one applies, so the message alone identifies the offending field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CronexError {
    /// Wrong argument count at the process boundary.
    #[error("invalid number of arguments")]
    Usage,

    /// Input does not split into exactly five fields plus a command.
    #[error("invalid number of sections")]
    InvalidSectionCount,

    /// Field text contains a character outside the slot's grammar.
    #[error("`{section}` does not match expected pattern `{pattern}` in `{slot}`")]
    InvalidCharacter {
        section: String,
        pattern: &'static str,
        slot: &'static str,
    },

    /// Step token is zero, non-numeric, or malformed.
    #[error("invalid step in `{slot}`")]
    InvalidStep { slot: &'static str },

    /// Range start is unparsable or below the slot minimum.
    #[error("invalid range start in `{slot}`")]
    InvalidRangeStart { slot: &'static str },

    /// Range end is unparsable or above the slot maximum.
    #[error("invalid range end in `{slot}`")]
    InvalidRangeEnd { slot: &'static str },

    /// Range start exceeds range end.
    #[error("invalid range, start `{start}` > end `{end}` in `{slot}`")]
    InvalidRangeOrder {
        start: u32,
        end: u32,
        slot: &'static str,
    },

    /// Single value does not parse as an integer.
    #[error("invalid value `{value}` in `{slot}`")]
    InvalidValue { value: String, slot: &'static str },

    /// Single value parses but lies outside the slot bounds.
    #[error("value `{value}` out of range in `{slot}`")]
    OutOfRange { value: u32, slot: &'static str },
}
