//! Sanitizing archive text for terminal output
//!
//! Titles and message bodies come straight from the export and may contain
//! escape sequences. Anything printed to a terminal goes through
//! [`strip_ansi_codes`] first, so an archived conversation cannot move the
//! cursor, recolor the screen, or set the window title.

use std::borrow::Cow;

const ESC: char = '\x1b';
const BEL: char = '\x07';

/// Strips ANSI escape sequences and stray control characters
///
/// Removes CSI sequences (`ESC [ ... final`), OSC sequences (`ESC ] ...`
/// terminated by BEL or `ESC \`), two-byte escapes, and every control
/// character except tab, newline and carriage return. Text without any of
/// these is returned borrowed.
///
/// # Examples
///
/// ```
/// use chat_archive_explorer::utils::terminal::strip_ansi_codes;
///
/// let text = "\x1b[31mRed text\x1b[0m";
/// assert_eq!(strip_ansi_codes(text), "Red text");
/// ```
pub fn strip_ansi_codes(text: &str) -> Cow<'_, str> {
    if !text.chars().any(is_unwanted_control) {
        return Cow::Borrowed(text);
    }

    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == ESC {
            match chars.peek() {
                Some('[') => {
                    chars.next();
                    // CSI ends at the first byte in 0x40..=0x7E
                    for next in chars.by_ref() {
                        if ('\x40'..='\x7e').contains(&next) {
                            break;
                        }
                    }
                }
                Some(']') => {
                    chars.next();
                    while let Some(next) = chars.next() {
                        if next == BEL {
                            break;
                        }
                        if next == ESC && chars.peek() == Some(&'\\') {
                            chars.next();
                            break;
                        }
                    }
                }
                Some(_) => {
                    chars.next();
                }
                None => {}
            }
            continue;
        }

        if is_unwanted_control(ch) {
            continue;
        }

        result.push(ch);
    }

    Cow::Owned(result)
}

fn is_unwanted_control(ch: char) -> bool {
    ch.is_control() && ch != '\t' && ch != '\n' && ch != '\r'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_color_codes() {
        assert_eq!(strip_ansi_codes("\x1b[31mRed text\x1b[0m normal"), "Red text normal");
        assert_eq!(strip_ansi_codes("\x1b[1;38;5;82mBold\x1b[0m"), "Bold");
    }

    #[test]
    fn test_strip_cursor_movement() {
        assert_eq!(strip_ansi_codes("\x1b[2J\x1b[H Cleared screen"), " Cleared screen");
    }

    #[test]
    fn test_strip_osc_title() {
        assert_eq!(strip_ansi_codes("\x1b]0;pwned\x07Title"), "Title");
        assert_eq!(strip_ansi_codes("\x1b]8;;http://x\x1b\\link"), "link");
    }

    #[test]
    fn test_strip_two_byte_escape() {
        assert_eq!(strip_ansi_codes("a\x1bcb"), "ab");
        assert_eq!(strip_ansi_codes("trailing\x1b"), "trailing");
    }

    #[test]
    fn test_strip_control_characters() {
        assert_eq!(strip_ansi_codes("Alert! \x07"), "Alert! ");
        assert_eq!(strip_ansi_codes("Test\x08"), "Test");
    }

    #[test]
    fn test_plain_text_is_borrowed() {
        let text = "Line 1\nLine 2\rLine 3\tTabbed 👋";
        assert!(matches!(strip_ansi_codes(text), Cow::Borrowed(_)));
        assert_eq!(strip_ansi_codes(text), text);
    }

    #[test]
    fn test_only_escape_sequences() {
        assert_eq!(strip_ansi_codes("\x1b[31m\x1b[0m\x1b[2J"), "");
        assert_eq!(strip_ansi_codes(""), "");
    }
}
