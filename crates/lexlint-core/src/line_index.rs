//! Offset-to-line lookup built once per analyzed text.

/// Maps absolute byte offsets to 1-based line numbers.
///
/// Built with a single scan over the text; answers `line_of` queries via
/// binary search over the recorded line-start offsets. The index is
/// immutable after construction and shared read-only by every rule.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Byte offset of the start of each line. Strictly increasing;
    /// the first entry is always 0.
    line_starts: Vec<usize>,
}

impl LineIndex {
    /// Builds an index from raw text.
    ///
    /// Empty text still yields a valid index with a single entry for
    /// line 1.
    #[must_use]
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0];
        for (i, b) in text.bytes().enumerate() {
            if b == b'\n' {
                line_starts.push(i + 1);
            }
        }
        Self { line_starts }
    }

    /// Returns the 1-based line number containing `offset`.
    ///
    /// Resolves to the greatest line start less than or equal to
    /// `offset`. Callers must pass offsets within `[0, text.len()]`;
    /// anything larger maps to the last line.
    #[must_use]
    pub fn line_of(&self, offset: usize) -> usize {
        self.line_starts.partition_point(|&start| start <= offset)
    }

    /// Number of lines in the indexed text.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Byte offsets at which each line starts.
    #[must_use]
    pub fn line_starts(&self) -> &[usize] {
        &self.line_starts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_has_one_line() {
        let index = LineIndex::new("");
        assert_eq!(index.line_count(), 1);
        assert_eq!(index.line_of(0), 1);
    }

    #[test]
    fn entry_count_is_newline_count_plus_one() {
        let index = LineIndex::new("a\nb\nc");
        assert_eq!(index.line_count(), 3);

        let index = LineIndex::new("a\nb\n");
        assert_eq!(index.line_count(), 3);
    }

    #[test]
    fn line_starts_are_strictly_increasing() {
        let index = LineIndex::new("one\ntwo\nthree\n");
        let starts = index.line_starts();
        assert_eq!(starts, &[0, 4, 8, 14]);
        assert!(starts.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn line_of_every_line_start_is_sequential() {
        let text = "alpha\nbeta\ngamma\ndelta";
        let index = LineIndex::new(text);
        let lines: Vec<usize> = index
            .line_starts()
            .to_vec()
            .into_iter()
            .map(|start| index.line_of(start))
            .collect();
        assert_eq!(lines, vec![1, 2, 3, 4]);
    }

    #[test]
    fn boundary_offsets() {
        let text = "ab\ncd";
        let index = LineIndex::new(text);
        assert_eq!(index.line_of(0), 1); // start of text
        assert_eq!(index.line_of(2), 1); // the newline itself
        assert_eq!(index.line_of(3), 2); // exact line start
        assert_eq!(index.line_of(4), 2); // mid line
        assert_eq!(index.line_of(text.len()), 2); // end of text
    }

    #[test]
    fn offsets_inside_lines() {
        let index = LineIndex::new("first\nsecond\nthird");
        assert_eq!(index.line_of(3), 1);
        assert_eq!(index.line_of(8), 2);
        assert_eq!(index.line_of(15), 3);
    }
}
