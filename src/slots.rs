//! Static definitions of the five schedule fields.
//!
//! The catalog is fixed at compile time and never mutated; concurrent
//! readers need no synchronization.

/// Character grammar accepted by a slot.
///
/// Every slot accepts digits, `*`, `-`, `,` and `/`; day-of-month and
/// day-of-week additionally accept `?`. A direct per-character check
/// keeps validation free of any pattern engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grammar {
    allows_question: bool,
}

impl Grammar {
    /// Digits plus `*`, `-`, `,`, `/`.
    pub const BASE: Grammar = Grammar {
        allows_question: false,
    };

    /// [`Grammar::BASE`] extended with `?`.
    pub const WITH_QUESTION: Grammar = Grammar {
        allows_question: true,
    };

    /// Returns `true` if `c` belongs to this grammar's character class.
    pub fn accepts(&self, c: char) -> bool {
        c.is_ascii_digit()
            || matches!(c, '*' | '-' | ',' | '/')
            || (self.allows_question && c == '?')
    }

    /// Printable form of the character class, used in diagnostics.
    pub fn pattern(&self) -> &'static str {
        if self.allows_question {
            "[0-9*,-/?]"
        } else {
            "[0-9*,-/]"
        }
    }
}

/// Immutable definition of one schedule field.
///
/// A `Slot` carries everything the expander needs: the printable
/// label, the inclusive value range, the character grammar, and the
/// case-insensitive alias table (empty for numeric-only fields).
#[derive(Debug, Clone, Copy)]
pub struct Slot {
    /// Printable field name, e.g. "day of month".
    pub label: &'static str,
    /// Smallest value the field accepts.
    pub min: u32,
    /// Largest value the field accepts.
    pub max: u32,
    /// Allowed character class for the raw field text.
    pub grammar: Grammar,
    /// Ordered token -> numeric-string replacements, applied as plain
    /// substring substitution after lowercasing.
    pub aliases: &'static [(&'static str, &'static str)],
}

impl Slot {
    /// Returns `true` if `value` lies within the slot's bounds.
    pub fn contains(&self, value: u32) -> bool {
        value >= self.min && value <= self.max
    }
}

const MONTH_ALIASES: &[(&str, &str)] = &[
    ("jan", "1"),
    ("feb", "2"),
    ("mar", "3"),
    ("apr", "4"),
    ("may", "5"),
    ("jun", "6"),
    ("jul", "7"),
    ("aug", "8"),
    ("sep", "9"),
    ("oct", "10"),
    ("nov", "11"),
    ("dec", "12"),
];

// "thr" (not "thu") is the accepted Thursday token, kept verbatim from
// the upstream alias table.
const WEEKDAY_ALIASES: &[(&str, &str)] = &[
    ("sun", "0"),
    ("mon", "1"),
    ("tue", "2"),
    ("wed", "3"),
    ("thr", "4"),
    ("fri", "5"),
    ("sat", "6"),
];

/// Ordered list of the five cron fields.
pub static SLOTS: [Slot; 5] = [
    Slot {
        label: "minute",
        min: 0,
        max: 59,
        grammar: Grammar::BASE,
        aliases: &[],
    },
    Slot {
        label: "hour",
        min: 0,
        max: 23,
        grammar: Grammar::BASE,
        aliases: &[],
    },
    Slot {
        label: "day of month",
        min: 1,
        max: 31,
        grammar: Grammar::WITH_QUESTION,
        aliases: &[],
    },
    Slot {
        label: "month",
        min: 1,
        max: 12,
        grammar: Grammar::BASE,
        aliases: MONTH_ALIASES,
    },
    Slot {
        label: "day of week",
        min: 0,
        max: 6,
        grammar: Grammar::WITH_QUESTION,
        aliases: WEEKDAY_ALIASES,
    },
];
