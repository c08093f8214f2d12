//! Character classification for the Monkey lexer.
//!
//! Every predicate takes the lexer's current character slot, where `None`
//! is the end-of-input sentinel. The sentinel is rejected by all three.

/// Checks if a character can appear in an identifier.
///
/// Only unaccented ASCII letters and underscore qualify. Digits do not, so
/// `foo1` scans as an identifier followed by an integer.
///
/// # Example
///
/// ```
/// use monkey_lex::chars::is_letter;
///
/// assert!(is_letter(Some('a')));
/// assert!(is_letter(Some('_')));
/// assert!(!is_letter(Some('1')));
/// assert!(!is_letter(Some('é')));
/// assert!(!is_letter(None));
/// ```
pub fn is_letter(ch: Option<char>) -> bool {
    matches!(ch, Some(c) if c.is_ascii_alphabetic() || c == '_')
}

/// Checks if a character is an ASCII decimal digit.
///
/// # Example
///
/// ```
/// use monkey_lex::chars::is_digit;
///
/// assert!(is_digit(Some('0')));
/// assert!(is_digit(Some('9')));
/// assert!(!is_digit(Some('a')));
/// assert!(!is_digit(None));
/// ```
pub fn is_digit(ch: Option<char>) -> bool {
    matches!(ch, Some(c) if c.is_ascii_digit())
}

/// Checks if a character is whitespace.
pub fn is_whitespace(ch: Option<char>) -> bool {
    matches!(ch, Some(c) if c.is_whitespace())
}
