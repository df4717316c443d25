//! Field expansion and schedule parsing.
//!
//! This module provides functionality for splitting a raw cron-style
//! expression into its five field sections plus trailing command, and
//! for expanding each field into the concrete set of integer values it
//! denotes.

use log::{debug, trace};

use crate::errors::CronexError;
use crate::slots::{Slot, SLOTS};
use crate::Result;

/// Expanded values of a single schedule field.
///
/// `values` is sorted strictly ascending with no duplicates, and every
/// entry lies within the bounds of the slot that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldResult {
    /// Printable field name, copied from the slot.
    pub label: String,
    /// Sorted, deduplicated expansion of the field text.
    pub values: Vec<u32>,
}

/// A fully parsed schedule expression.
///
/// Holds one [`FieldResult`] per catalog slot, in slot order, plus the
/// untouched command remainder of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleResult {
    /// One expanded field per slot, in slot order.
    pub fields: Vec<FieldResult>,
    /// Everything after the last field, verbatim. May contain spaces.
    pub command: String,
}

/// Parses a full schedule expression against the built-in slot catalog.
///
/// The input is five space-separated field sections followed by a
/// command; the command keeps any further spaces. Fields are expanded
/// left to right and the first failure aborts the parse.
///
/// # Examples
///
/// ```
/// let result = cronex::parse("*/15 0 1,15 * 1-5 /usr/bin/find").unwrap();
/// assert_eq!(result.fields[0].values, vec![0, 15, 30, 45]);
/// assert_eq!(result.command, "/usr/bin/find");
/// ```
///
/// # Errors
///
/// Returns [`CronexError::InvalidSectionCount`] when the input does
/// not split into exactly six parts, or the first field-level error
/// encountered during expansion.
pub fn parse(input: &str) -> Result<ScheduleResult> {
    parse_with_slots(input, &SLOTS)
}

fn parse_with_slots(input: &str, slots: &[Slot]) -> Result<ScheduleResult> {
    debug!("Parsing schedule expression: {}", input);

    let input = input.trim();
    let n = slots.len() + 1; // field sections + command
    let sections: Vec<&str> = input.splitn(n, ' ').collect();
    if sections.len() != n {
        return Err(CronexError::InvalidSectionCount);
    }

    let command = sections[n - 1].to_string();
    let mut fields = Vec::with_capacity(slots.len());
    for (section, slot) in sections[..n - 1].iter().zip(slots) {
        fields.push(expand_field(section, slot)?);
    }

    Ok(ScheduleResult { fields, command })
}

/// Expands one raw field section against its slot definition.
///
/// Runs the full pipeline: alias normalization, character-grammar
/// validation, wildcard substitution, comma-joined unit expansion, and
/// a final sort/dedup pass.
///
/// # Errors
///
/// Returns the slot-labeled [`CronexError`] for the first stage that
/// rejects the section.
pub fn expand_field(section: &str, slot: &Slot) -> Result<FieldResult> {
    trace!("Expanding `{}` for slot `{}`", section, slot.label);

    let section = normalize_aliases(section, slot);
    validate_grammar(&section, slot)?;
    let section = substitute_wildcards(&section, slot);

    let mut values = Vec::new();
    for unit in section.split(',') {
        expand_unit(unit, slot, &mut values)?;
    }
    values.sort_unstable();
    values.dedup();

    Ok(FieldResult {
        label: slot.label.to_string(),
        values,
    })
}

/// Lowercases the section and applies the slot's alias replacements.
///
/// Replacement is plain substring substitution in table order, not
/// word-boundary aware. No-op for slots without aliases.
fn normalize_aliases(section: &str, slot: &Slot) -> String {
    if slot.aliases.is_empty() {
        return section.to_string();
    }
    let mut section = section.to_lowercase();
    for (token, replacement) in slot.aliases {
        section = section.replace(token, replacement);
    }
    section
}

fn validate_grammar(section: &str, slot: &Slot) -> Result<()> {
    // An empty section is invalid too: the grammar requires at least
    // one character.
    if section.is_empty() || section.chars().any(|c| !slot.grammar.accepts(c)) {
        return Err(CronexError::InvalidCharacter {
            section: section.to_string(),
            pattern: slot.grammar.pattern(),
            slot: slot.label,
        });
    }
    Ok(())
}

/// Replaces every `*` and `?` with the slot's full `min-max` range.
///
/// Purely textual, so a wildcard composes with adjacent step syntax
/// (`*/15` becomes `0-59/15`) before structural parsing.
fn substitute_wildcards(section: &str, slot: &Slot) -> String {
    let full_range = format!("{}-{}", slot.min, slot.max);
    section.replace('*', &full_range).replace('?', &full_range)
}

fn expand_unit(unit: &str, slot: &Slot, out: &mut Vec<u32>) -> Result<()> {
    let (step, base) = extract_step(unit, slot)?;
    match base.split_once('-') {
        Some((start, end)) => expand_range(start, end, step, slot, out),
        None => expand_single(base, step, slot, out),
    }
}

/// Splits off an optional `/step` suffix.
///
/// Only the first `/` is split on; a second one stays embedded in the
/// step text and fails integer parsing. Returns step 0 when the unit
/// has no step, meaning "no step" as opposed to a step of 1.
fn extract_step<'a>(unit: &'a str, slot: &Slot) -> Result<(u32, &'a str)> {
    match unit.split_once('/') {
        None => Ok((0, unit)),
        Some((base, step_text)) => {
            let step: u32 = step_text
                .parse()
                .map_err(|_| CronexError::InvalidStep { slot: slot.label })?;
            if step == 0 {
                return Err(CronexError::InvalidStep { slot: slot.label });
            }
            Ok((step, base))
        }
    }
}

/// Emits `start, start+step, ..., <= end` for a `start-end` base.
///
/// Only the first `-` was split on, so a second one is folded into the
/// end text and surfaces as an invalid range end.
fn expand_range(
    start_text: &str,
    end_text: &str,
    step: u32,
    slot: &Slot,
    out: &mut Vec<u32>,
) -> Result<()> {
    let start: u32 = start_text
        .parse()
        .map_err(|_| CronexError::InvalidRangeStart { slot: slot.label })?;
    if start < slot.min {
        return Err(CronexError::InvalidRangeStart { slot: slot.label });
    }

    let end: u32 = end_text
        .parse()
        .map_err(|_| CronexError::InvalidRangeEnd { slot: slot.label })?;
    if end > slot.max {
        return Err(CronexError::InvalidRangeEnd { slot: slot.label });
    }

    if start > end {
        return Err(CronexError::InvalidRangeOrder {
            start,
            end,
            slot: slot.label,
        });
    }

    let stride = if step > 0 { step } else { 1 };
    out.extend((start..=end).step_by(stride as usize));
    Ok(())
}

/// Emits a single value, or the repeating sequence it anchors when a
/// step is present.
///
/// A stepped single value repeats from the value up to the slot
/// maximum, not up to any range end.
fn expand_single(base: &str, step: u32, slot: &Slot, out: &mut Vec<u32>) -> Result<()> {
    let value: u32 = base.parse().map_err(|_| CronexError::InvalidValue {
        value: base.to_string(),
        slot: slot.label,
    })?;
    if !slot.contains(value) {
        return Err(CronexError::OutOfRange {
            value,
            slot: slot.label,
        });
    }

    if step > 0 {
        out.extend((value..=slot.max).step_by(step as usize));
    } else {
        out.push(value);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn slot(label: &'static str) -> &'static Slot {
        SLOTS
            .iter()
            .find(|s| s.label == label)
            .unwrap_or_else(|| panic!("no slot labeled {}", label))
    }

    fn values(section: &str, slot: &Slot) -> Vec<u32> {
        expand_field(section, slot).unwrap().values
    }

    #[test]
    fn test_full_range_round_trip() {
        for s in &SLOTS {
            let text = format!("{}-{}", s.min, s.max);
            let expected: Vec<u32> = (s.min..=s.max).collect();
            assert_eq!(values(&text, s), expected, "slot {}", s.label);
        }
    }

    #[test]
    fn test_wildcards_equal_full_range() {
        for s in &SLOTS {
            let full: Vec<u32> = (s.min..=s.max).collect();
            assert_eq!(values("*", s), full, "`*` on {}", s.label);
            if s.grammar.accepts('?') {
                assert_eq!(values("?", s), full, "`?` on {}", s.label);
            }
        }
    }

    #[test]
    fn test_wildcard_with_step() {
        assert_eq!(values("*/15", slot("minute")), vec![0, 15, 30, 45]);
        assert_eq!(values("*/20", slot("hour")), vec![0, 20]);
    }

    #[test]
    fn test_list_and_dedup() {
        assert_eq!(values("1,15", slot("day of month")), vec![1, 15]);
        assert_eq!(values("1,2,1", slot("minute")), vec![1, 2]);
        assert_eq!(values("5,1-3,2", slot("hour")), vec![1, 2, 3, 5]);
    }

    #[test]
    fn test_range_with_step() {
        assert_eq!(values("1-10/3", slot("minute")), vec![1, 4, 7, 10]);
        // A step wider than the range yields just the start.
        assert_eq!(values("1-5/10", slot("minute")), vec![1]);
    }

    #[test]
    fn test_single_value_step_anchors_at_value() {
        // Steps from the named value to the slot max, no wraparound.
        assert_eq!(values("1/5", slot("month")), vec![1, 6, 11]);
        assert_eq!(values("50/7", slot("minute")), vec![50, 57]);
    }

    #[test]
    fn test_alias_case_insensitivity() {
        assert_eq!(values("FeB", slot("month")), vec![2]);
        assert_eq!(values("tUe", slot("day of week")), vec![2]);
        assert_eq!(values("JAN-mar", slot("month")), vec![1, 2, 3]);
    }

    #[test]
    fn test_thr_is_thursday() {
        assert_eq!(values("thr", slot("day of week")), vec![4]);
        // The conventional "thu" spelling is not in the alias table.
        assert!(expand_field("thu", slot("day of week")).is_err());
    }

    #[test]
    fn test_invalid_character() {
        let err = expand_field("1;2", slot("minute")).unwrap_err();
        assert_eq!(
            err,
            CronexError::InvalidCharacter {
                section: "1;2".to_string(),
                pattern: "[0-9*,-/]",
                slot: "minute",
            }
        );
        // `?` is only grammar-legal on the day slots.
        assert!(expand_field("?", slot("minute")).is_err());
    }

    #[test]
    fn test_invalid_step() {
        assert_eq!(
            expand_field("1/0", slot("minute")).unwrap_err(),
            CronexError::InvalidStep { slot: "minute" }
        );
        assert_eq!(
            expand_field("1/x", slot("minute")).unwrap_err(),
            CronexError::InvalidStep { slot: "minute" }
        );
        // A second `/` stays embedded in the step text.
        assert_eq!(
            expand_field("1/2/3", slot("minute")).unwrap_err(),
            CronexError::InvalidStep { slot: "minute" }
        );
        // Trailing `/` leaves an empty step text.
        assert_eq!(
            expand_field("5/", slot("minute")).unwrap_err(),
            CronexError::InvalidStep { slot: "minute" }
        );
    }

    #[test]
    fn test_range_errors() {
        assert_eq!(
            expand_field("2-1", slot("minute")).unwrap_err(),
            CronexError::InvalidRangeOrder {
                start: 2,
                end: 1,
                slot: "minute",
            }
        );
        assert_eq!(
            expand_field("0-5", slot("month")).unwrap_err(),
            CronexError::InvalidRangeStart { slot: "month" }
        );
        assert_eq!(
            expand_field("1-13", slot("month")).unwrap_err(),
            CronexError::InvalidRangeEnd { slot: "month" }
        );
        // Second `-` folds into the end text.
        assert_eq!(
            expand_field("1-2-3", slot("minute")).unwrap_err(),
            CronexError::InvalidRangeEnd { slot: "minute" }
        );
        // Leading `-` leaves an empty start text.
        assert_eq!(
            expand_field("-5", slot("minute")).unwrap_err(),
            CronexError::InvalidRangeStart { slot: "minute" }
        );
    }

    #[test]
    fn test_single_value_errors() {
        assert_eq!(
            expand_field("60", slot("minute")).unwrap_err(),
            CronexError::OutOfRange {
                value: 60,
                slot: "minute",
            }
        );
        assert_eq!(
            expand_field("0", slot("month")).unwrap_err(),
            CronexError::OutOfRange {
                value: 0,
                slot: "month",
            }
        );
    }

    #[test]
    fn test_empty_units_rejected() {
        // Consecutive commas produce an empty unit, rejected at
        // integer parsing.
        assert_eq!(
            expand_field("1,,2", slot("minute")).unwrap_err(),
            CronexError::InvalidValue {
                value: String::new(),
                slot: "minute",
            }
        );
    }

    #[test]
    fn test_values_sorted_dedup_in_bounds() {
        for s in &SLOTS {
            let result = expand_field("*/2,1-3", s);
            let result = match result {
                Ok(r) => r,
                Err(e) => panic!("{}: {}", s.label, e),
            };
            for pair in result.values.windows(2) {
                assert!(pair[0] < pair[1], "not strictly ascending in {}", s.label);
            }
            for v in &result.values {
                assert!(s.contains(*v), "{} out of bounds in {}", v, s.label);
            }
        }
    }

    #[test]
    fn test_parse_full_expression() {
        let result = parse("*/15 0 1,15 * 1-5 /usr/bin/find").unwrap();
        assert_eq!(result.fields.len(), SLOTS.len());
        assert_eq!(result.fields[0].values, vec![0, 15, 30, 45]);
        assert_eq!(result.fields[1].values, vec![0]);
        assert_eq!(result.fields[2].values, vec![1, 15]);
        assert_eq!(result.fields[3].values, (1..=12).collect::<Vec<u32>>());
        assert_eq!(result.fields[4].values, vec![1, 2, 3, 4, 5]);
        assert_eq!(result.command, "/usr/bin/find");
    }

    #[test]
    fn test_parse_command_keeps_spaces() {
        let result = parse("* * * * * /usr/bin/find / -type f -name foo").unwrap();
        assert_eq!(result.command, "/usr/bin/find / -type f -name foo");
    }

    #[test]
    fn test_parse_trims_surrounding_whitespace() {
        let result = parse("  * * * * * /bin/true  ").unwrap();
        assert_eq!(result.command, "/bin/true");
    }

    #[test]
    fn test_parse_section_count() {
        assert_eq!(
            parse("0 0 /usr/bin/find").unwrap_err(),
            CronexError::InvalidSectionCount
        );
        assert_eq!(parse("").unwrap_err(), CronexError::InvalidSectionCount);
    }

    #[test]
    fn test_parse_fails_fast_left_to_right() {
        // Both minute and hour are invalid; the minute error wins.
        assert_eq!(
            parse("1/0 99 * * * /bin/true").unwrap_err(),
            CronexError::InvalidStep { slot: "minute" }
        );
        assert_eq!(
            parse("* 99 2-1 * * /bin/true").unwrap_err(),
            CronexError::OutOfRange {
                value: 99,
                slot: "hour",
            }
        );
    }

    #[test]
    fn test_double_space_between_fields() {
        // The capped split leaves an empty section, which the grammar
        // rejects.
        assert_eq!(
            parse("*  * * * * /bin/true").unwrap_err(),
            CronexError::InvalidCharacter {
                section: String::new(),
                pattern: "[0-9*,-/]",
                slot: "hour",
            }
        );
    }
}
