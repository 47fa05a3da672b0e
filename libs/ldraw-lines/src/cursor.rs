//! # Line Cursor
//!
//! Whitespace-delimited token cursor over a single line.
//!
//! Sub-file reference lines end in a file name that may contain spaces, so
//! the cursor must hand out the untokenized remainder verbatim; a plain
//! `split_whitespace` collect would lose the original spacing.

/// Token cursor over one trimmed line.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    rest: &'a str,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor over a line, trimming outer whitespace.
    pub fn new(line: &'a str) -> Self {
        Self { rest: line.trim() }
    }

    /// Returns the next whitespace-delimited token, if any.
    pub fn next_token(&mut self) -> Option<&'a str> {
        self.rest = self.rest.trim_start();
        if self.rest.is_empty() {
            return None;
        }
        match self.rest.find(char::is_whitespace) {
            Some(end) => {
                let (token, rest) = self.rest.split_at(end);
                self.rest = rest;
                Some(token)
            }
            None => {
                let token = self.rest;
                self.rest = "";
                Some(token)
            }
        }
    }

    /// Parses the next token as a decimal number.
    pub fn next_f64(&mut self) -> Option<f64> {
        self.next_token()?.parse().ok()
    }

    /// Fills `out` with consecutive decimal numbers; `None` on any failure.
    pub fn fill_f64(&mut self, out: &mut [f64]) -> Option<()> {
        for slot in out.iter_mut() {
            *slot = self.next_f64()?;
        }
        Some(())
    }

    /// Returns everything not yet consumed, trimmed, without advancing.
    pub fn remainder(&self) -> &'a str {
        self.rest.trim()
    }

    /// True when no tokens remain.
    pub fn is_exhausted(&self) -> bool {
        self.rest.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_in_order() {
        let mut cursor = Cursor::new("  3 16 0.5 -1 ");
        assert_eq!(cursor.next_token(), Some("3"));
        assert_eq!(cursor.next_token(), Some("16"));
        assert_eq!(cursor.next_token(), Some("0.5"));
        assert_eq!(cursor.next_token(), Some("-1"));
        assert_eq!(cursor.next_token(), None);
    }

    #[test]
    fn test_remainder_keeps_inner_spacing() {
        let mut cursor = Cursor::new("1 16 part with  spaces.dat");
        cursor.next_token();
        cursor.next_token();
        assert_eq!(cursor.remainder(), "part with  spaces.dat");
    }

    #[test]
    fn test_next_f64_rejects_garbage() {
        let mut cursor = Cursor::new("abc");
        assert_eq!(cursor.next_f64(), None);
    }

    #[test]
    fn test_fill_f64() {
        let mut cursor = Cursor::new("1 2.5 -3");
        let mut values = [0.0; 3];
        assert!(cursor.fill_f64(&mut values).is_some());
        assert_eq!(values, [1.0, 2.5, -3.0]);
        assert!(cursor.is_exhausted());
    }

    #[test]
    fn test_fill_f64_short_line() {
        let mut cursor = Cursor::new("1 2");
        let mut values = [0.0; 3];
        assert!(cursor.fill_f64(&mut values).is_none());
    }

    #[test]
    fn test_exhausted_on_trailing_whitespace() {
        let mut cursor = Cursor::new("4  ");
        cursor.next_token();
        assert!(cursor.is_exhausted());
    }
}
