//! Natural, case-aware string collation.
//!
//! Strings are compared level by level, the way a file explorer lists names:
//!
//! 1. base characters: whitespace, then punctuation and symbols, then numbers
//!    (digit runs compared by value), then letters compared without case;
//! 2. accents, then leading zeros of numbers;
//! 3. letter case, upper-first or lower-first;
//! 4. raw code points, so distinct strings never compare equal.

use std::cmp::Ordering;
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseFirst {
    Upper,
    Lower,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collator {
    case_first: CaseFirst,
}

impl Collator {
    pub const UPPER_FIRST: Collator = Collator::new(CaseFirst::Upper);
    pub const LOWER_FIRST: Collator = Collator::new(CaseFirst::Lower);

    pub const fn new(case_first: CaseFirst) -> Self {
        Self { case_first }
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.key(a).cmp(&self.key(b))
    }

    /// Precomputed sort key, for sorting many strings with one decomposition each.
    pub fn key(&self, text: &str) -> CollationKey {
        CollationKey {
            elements: elements(text),
            raw: text.to_string(),
            case_first: self.case_first,
        }
    }
}

/// Sort key of one string under one [`Collator`]. Only keys built by the same
/// collator are meant to be compared.
#[derive(Debug, Clone)]
pub struct CollationKey {
    elements: Vec<Element>,
    raw: String,
    case_first: CaseFirst,
}

impl CollationKey {
    /// The string the key was built from.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    fn case_ranks(&self) -> impl Iterator<Item = u8> + '_ {
        self.elements.iter().map(|element| match (element.case, self.case_first) {
            (Case::Uncased, _) => 0,
            (Case::Upper, CaseFirst::Upper) | (Case::Lower, CaseFirst::Lower) => 1,
            (Case::Upper, CaseFirst::Lower) | (Case::Lower, CaseFirst::Upper) => 2,
        })
    }
}

impl Ord for CollationKey {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_primary(&self.elements, &other.elements)
            .then_with(|| compare_secondary(&self.elements, &other.elements))
            .then_with(|| self.case_ranks().cmp(other.case_ranks()))
            .then_with(|| self.raw.cmp(&other.raw))
    }
}

impl PartialOrd for CollationKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for CollationKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for CollationKey {}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Primary {
    Space(char),
    Punct(char),
    /// Digits without leading zeros, ordered by length first so the value decides.
    Number { len: usize, digits: String },
    Letter(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Case {
    Uncased,
    Upper,
    Lower,
}

#[derive(Debug, Clone)]
struct Element {
    primary: Primary,
    accents: String,
    leading_zeros: usize,
    case: Case,
}

impl Element {
    fn plain(primary: Primary, case: Case) -> Self {
        Self {
            primary,
            accents: String::new(),
            leading_zeros: 0,
            case,
        }
    }
}

fn elements(text: &str) -> Vec<Element> {
    let mut out: Vec<Element> = Vec::new();
    let mut chars = text.nfd().peekable();

    while let Some(c) = chars.next() {
        if c.is_ascii_digit() {
            let mut run = String::from(c);
            while let Some(digit) = chars.next_if(char::is_ascii_digit) {
                run.push(digit);
            }
            let digits = run.trim_start_matches('0');
            out.push(Element {
                primary: Primary::Number {
                    len: digits.len(),
                    digits: digits.to_string(),
                },
                accents: String::new(),
                leading_zeros: run.len() - digits.len(),
                case: Case::Uncased,
            });
        } else if is_combining_mark(c) {
            match out.last_mut() {
                Some(last) => last.accents.push(c),
                None => out.push(Element::plain(Primary::Punct(c), Case::Uncased)),
            }
        } else if c.is_alphabetic() {
            let case = if c.is_uppercase() {
                Case::Upper
            } else if c.is_lowercase() {
                Case::Lower
            } else {
                Case::Uncased
            };
            let lower = c.to_lowercase().next().unwrap_or(c);
            out.push(Element::plain(Primary::Letter(lower), case));
        } else if c.is_whitespace() {
            out.push(Element::plain(Primary::Space(c), Case::Uncased));
        } else {
            out.push(Element::plain(Primary::Punct(c), Case::Uncased));
        }
    }
    out
}

fn compare_primary(left: &[Element], right: &[Element]) -> Ordering {
    left.iter()
        .map(|e| &e.primary)
        .cmp(right.iter().map(|e| &e.primary))
}

fn compare_secondary(left: &[Element], right: &[Element]) -> Ordering {
    left.iter()
        .map(|e| (&e.accents, e.leading_zeros))
        .cmp(right.iter().map(|e| (&e.accents, e.leading_zeros)))
}
