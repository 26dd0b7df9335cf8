//! Rule to detect unmatched or unclosed brackets and quotes.
//!
//! This is the one rule doing real stateful reasoning over the byte
//! stream: a single left-to-right pass that classifies each position as
//! code, line comment, block comment, string literal, or char literal,
//! while tracking nested bracket balance on an explicit stack. Brackets
//! inside comments or literals never affect nesting; naive bracket
//! counting gets exactly that wrong.

use lexlint_core::{LineIndex, Rule, Suggestion};
use tracing::debug;

/// Rule name for unclosed-construct.
pub const NAME: &str = "unclosed-construct";

/// An open bracket awaiting its closer.
struct Frame {
    ch: u8,
    pos: usize,
}

/// Expected closer for an opening bracket.
///
/// Frames only ever hold `(`, `{`, or `[`.
const fn closer_for(open: u8) -> u8 {
    match open {
        b'(' => b')',
        b'[' => b']',
        _ => b'}',
    }
}

/// Detects unmatched closing brackets, unclosed opening brackets, and
/// unterminated string/char literals.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnclosedConstruct;

impl UnclosedConstruct {
    /// Creates a new rule instance.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for UnclosedConstruct {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Detects unmatched brackets and unterminated literals"
    }

    fn apply(&self, text: &str, index: &LineIndex) -> Vec<Suggestion> {
        let bytes = text.as_bytes();
        let mut out = Vec::new();
        let mut stack: Vec<Frame> = Vec::new();
        let mut i = 0;

        while i < bytes.len() {
            let c = bytes[i];

            // Comments take priority over every other interpretation.
            if c == b'/' && i + 1 < bytes.len() {
                if bytes[i + 1] == b'/' {
                    while i < bytes.len() && bytes[i] != b'\n' {
                        i += 1;
                    }
                    i += 1;
                    continue;
                }
                if bytes[i + 1] == b'*' {
                    // An unterminated block comment swallows the rest of
                    // the text without a finding.
                    i = match find_block_close(bytes, i + 2) {
                        Some(star) => star + 2,
                        None => bytes.len(),
                    };
                    continue;
                }
            }

            match c {
                b'(' | b'{' | b'[' => stack.push(Frame { ch: c, pos: i }),
                b')' | b'}' | b']' => match stack.last() {
                    Some(frame) if closer_for(frame.ch) == c => {
                        stack.pop();
                    }
                    // A stray closer never pops an unrelated frame.
                    _ => out.push(Suggestion::new(
                        index.line_of(i),
                        format!("Unmatched '{}'", c as char),
                    )),
                },
                b'"' | b'\'' => match skip_literal(bytes, i, c) {
                    Some(close) => i = close,
                    None => {
                        let kind = if c == b'"' { "string" } else { "char" };
                        out.push(Suggestion::new(
                            index.line_of(i),
                            format!("Unclosed {kind} literal"),
                        ));
                        debug!(offset = i, "unterminated literal, scan aborted");
                        // Everything after an unterminated quote is
                        // lexically ambiguous: stop immediately and do
                        // not report open frames.
                        return out;
                    }
                },
                _ => {}
            }

            i += 1;
        }

        // Leftover frames are unclosed brackets, innermost first.
        while let Some(frame) = stack.pop() {
            out.push(Suggestion::new(
                index.line_of(frame.pos),
                format!("Unclosed '{}'", frame.ch as char),
            ));
        }

        out
    }
}

/// Finds the `*` of the first `*/` at or after `from`.
fn find_block_close(bytes: &[u8], from: usize) -> Option<usize> {
    bytes[from..]
        .windows(2)
        .position(|w| w == b"*/")
        .map(|p| from + p)
}

/// Scans past a string or char literal body.
///
/// Returns the offset of the closing quote, treating `\` as an escape
/// that consumes the following byte. `None` means end of text was
/// reached first.
fn skip_literal(bytes: &[u8], start: usize, quote: u8) -> Option<usize> {
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            c if c == quote => return Some(i),
            _ => i += 1,
        }
    }
    None
}
