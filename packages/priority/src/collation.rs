//! Russian and Kazakh aware name ordering.
//!
//! Object names are mostly Cyrillic, and many contain Kazakh letters
//! (`ә`, `ғ`, `қ`, `ң`, `ө`, `ұ`, `ү`, `һ`, `і`) that Unicode places after
//! `я`. Plain `str` ordering also puts every uppercase letter before every
//! lowercase one, so names are compared on a collation key instead:
//!
//! 1. primary: case-folded characters ranked by class, then by position
//!    within the class (symbols, digits, Latin, Cyrillic, everything else)
//! 2. tertiary: lowercase before uppercase at the first differing position
//!
//! Cyrillic follows the Kazakh alphabet, which is the Russian alphabet with
//! each Kazakh letter placed after its base letter and `ё` directly after
//! `е`.

use std::cmp::Ordering;

/// Cyrillic letters in collation order.
const CYRILLIC_ORDER: &str = "аәбвгғдеёжзийкқлмнңоөпрстуұүфхһцчшщъыіьэюя";

/// Compares two names in Kazakh/Russian alphabetical order.
#[must_use]
pub fn compare_names(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(primary_key(b))
        .then_with(|| tertiary_key(a).cmp(tertiary_key(b)))
}

fn primary_key(s: &str) -> impl Iterator<Item = (CharClass, u32)> + '_ {
    s.chars().flat_map(char::to_lowercase).map(primary_weight)
}

fn tertiary_key(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.chars().map(char::is_uppercase)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Symbol,
    Digit,
    Latin,
    Cyrillic,
    Other,
}

fn primary_weight(c: char) -> (CharClass, u32) {
    if let Some(digit) = c.to_digit(10) {
        return (CharClass::Digit, digit);
    }
    if c.is_ascii_alphabetic() {
        return (CharClass::Latin, u32::from(c));
    }
    if let Some(position) = CYRILLIC_ORDER.chars().position(|letter| letter == c) {
        return (CharClass::Cyrillic, u32::try_from(position).unwrap_or(u32::MAX));
    }
    if ('\u{0400}'..='\u{04FF}').contains(&c) {
        // Cyrillic letters outside the alphabet go after `я`.
        return (CharClass::Cyrillic, u32::from(c));
    }
    if c.is_alphanumeric() {
        return (CharClass::Other, u32::from(c));
    }
    (CharClass::Symbol, u32::from(c))
}
