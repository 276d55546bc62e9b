use crate::Error;

/// Extension methods for byte classification.
pub(crate) trait ByteExt {
    /// Checks if a byte is a numeric sign.
    fn is_sign(&self) -> bool;

    /// Checks if a byte is a digit.
    ///
    /// `[0-9]`
    fn is_digit(&self) -> bool;

    /// Checks if a byte is a hex digit.
    ///
    /// `[0-9A-Fa-f]`
    fn is_hex_digit(&self) -> bool;

    /// Checks if a byte is a whitespace.
    ///
    /// Attribute values treat the whole `0x01..=0x20` range as whitespace,
    /// not just the XML space characters.
    fn is_space(&self) -> bool;

    /// Checks if a byte is a list separator: whitespace, `,` or `;`.
    fn is_separator(&self) -> bool;

    /// Checks if a byte is an ASCII ident char.
    fn is_ascii_ident(&self) -> bool;
}

impl ByteExt for u8 {
    #[inline]
    fn is_sign(&self) -> bool {
        matches!(*self, b'+' | b'-')
    }

    #[inline]
    fn is_digit(&self) -> bool {
        matches!(*self, b'0'..=b'9')
    }

    #[inline]
    fn is_hex_digit(&self) -> bool {
        matches!(*self, b'0'..=b'9' | b'A'..=b'F' | b'a'..=b'f')
    }

    #[inline]
    fn is_space(&self) -> bool {
        matches!(*self, 1..=32)
    }

    #[inline]
    fn is_separator(&self) -> bool {
        self.is_space() || *self == b',' || *self == b';'
    }

    #[inline]
    fn is_ascii_ident(&self) -> bool {
        matches!(*self, b'0'..=b'9' | b'A'..=b'Z' | b'a'..=b'z' | b'-' | b'_')
    }
}

/// A streaming text parsing interface.
///
/// The stream is `Copy`, which is how backtracking works: copy the stream,
/// run a fallible sub-grammar on the copy and assign it back only on success.
/// Primitives themselves never advance on failure.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Stream<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> From<&'a str> for Stream<'a> {
    #[inline]
    fn from(text: &'a str) -> Self {
        Stream { text, pos: 0 }
    }
}

impl<'a> Stream<'a> {
    /// Returns the current position in bytes.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Checks if the stream reached the end.
    #[inline]
    pub fn at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Returns a byte from the current stream position.
    #[inline]
    pub fn curr_byte(&self) -> Result<u8, Error> {
        if self.at_end() {
            return Err(Error);
        }

        Ok(self.curr_byte_unchecked())
    }

    /// Returns a byte from the current stream position.
    ///
    /// # Panics
    ///
    /// - if the current position is after the end of the data
    #[inline]
    pub fn curr_byte_unchecked(&self) -> u8 {
        self.text.as_bytes()[self.pos]
    }

    /// Checks that the current byte is equal to the provided one.
    ///
    /// Returns `false` if no bytes left.
    #[inline]
    pub fn is_curr_byte_eq(&self, c: u8) -> bool {
        if !self.at_end() {
            self.curr_byte_unchecked() == c
        } else {
            false
        }
    }

    /// Returns the byte after the current one.
    #[inline]
    pub fn next_byte(&self) -> Result<u8, Error> {
        if self.pos + 1 >= self.text.len() {
            return Err(Error);
        }

        Ok(self.text.as_bytes()[self.pos + 1])
    }

    /// Advances by `n` bytes.
    #[inline]
    pub fn advance(&mut self, n: usize) {
        debug_assert!(self.pos + n <= self.text.len());
        self.pos += n;
    }

    /// Skips whitespace.
    pub fn skip_spaces(&mut self) {
        while !self.at_end() && self.curr_byte_unchecked().is_space() {
            self.advance(1);
        }
    }

    /// Skips whitespace and list separators, if any.
    pub fn skip_separators(&mut self) {
        while !self.at_end() && self.curr_byte_unchecked().is_separator() {
            self.advance(1);
        }
    }

    /// Consumes one-or-more whitespace/separator bytes.
    ///
    /// Unlike [`skip_separators`], at least one byte must be consumed.
    ///
    /// [`skip_separators`]: #method.skip_separators
    pub fn consume_separators(&mut self) -> Result<(), Error> {
        let start = self.pos;
        self.skip_separators();
        if self.pos == start {
            return Err(Error);
        }

        Ok(())
    }

    /// Consumes the `comma-wsp` production: whitespace, or a single comma.
    ///
    /// Returns `false` when neither was present. The full
    /// `(wsp+ comma? wsp*) | (comma wsp*)` form is intentionally simplified,
    /// matching the grammars that use it: a comma surrounded by whitespace
    /// ends up split across two calls.
    pub fn consume_comma_wsp(&mut self) -> bool {
        let start = self.pos;
        self.skip_spaces();
        if self.pos != start {
            return true;
        }

        if self.is_curr_byte_eq(b',') {
            self.advance(1);
            return true;
        }

        false
    }

    /// Checks that the stream starts with the selected text.
    ///
    /// We are using `&[u8]` instead of `&str` for performance reasons.
    #[inline]
    pub fn starts_with(&self, text: &[u8]) -> bool {
        self.text.as_bytes()[self.pos..].starts_with(text)
    }

    /// Consumes the current byte if it's equal to the provided one.
    pub fn consume_byte(&mut self, c: u8) -> Result<(), Error> {
        if self.curr_byte()? != c {
            return Err(Error);
        }

        self.advance(1);
        Ok(())
    }

    /// Consumes the selected string.
    ///
    /// The match is exact and case-sensitive; no whitespace is skipped.
    pub fn consume_string(&mut self, text: &[u8]) -> Result<(), Error> {
        if !self.starts_with(text) {
            return Err(Error);
        }

        self.advance(text.len());
        Ok(())
    }

    /// Consumes bytes by the predicate and returns them.
    ///
    /// The result can be empty.
    pub fn consume_bytes<F>(&mut self, f: F) -> &'a str
    where
        F: Fn(u8) -> bool,
    {
        let start = self.pos;
        self.skip_bytes(f);
        self.slice_back(start)
    }

    /// Consumes bytes by the predicate.
    pub fn skip_bytes<F>(&mut self, f: F)
    where
        F: Fn(u8) -> bool,
    {
        while !self.at_end() && f(self.curr_byte_unchecked()) {
            self.advance(1);
        }
    }

    /// Consumes a single ident consisting of ASCII characters, if available.
    pub fn consume_ascii_ident(&mut self) -> &'a str {
        self.consume_bytes(|c| c.is_ascii_ident())
    }

    /// Slices data from `pos` to the current position.
    #[inline]
    pub fn slice_back(&self, pos: usize) -> &'a str {
        &self.text[pos..self.pos]
    }

    /// Slices data from the current position to the end.
    #[inline]
    pub fn slice_tail(&self) -> &'a str {
        &self.text[self.pos..]
    }

    /// Matches the stream against a keyword table.
    ///
    /// The first literal that matches wins, so tables with a shared prefix
    /// must list the longer literal first (`bolder` before `bold`).
    pub fn parse_enum_table<T: Clone>(&mut self, table: &[(&str, T)]) -> Result<T, Error> {
        for (name, value) in table {
            if self.starts_with(name.as_bytes()) {
                self.advance(name.len());
                return Ok(value.clone());
            }
        }

        Err(Error)
    }

    /// Parses a parenthesized call: `prefix? '(' body ')'`.
    ///
    /// Whitespace is allowed around every token. On error the stream may be
    /// left partially advanced; the caller is expected to backtrack via
    /// a stream copy.
    pub fn parse_parenthesized<T, F>(&mut self, prefix: Option<&[u8]>, body: F) -> Result<T, Error>
    where
        F: FnOnce(&mut Stream<'a>) -> Result<T, Error>,
    {
        self.skip_spaces();
        if let Some(prefix) = prefix {
            self.consume_string(prefix)?;
        }

        self.skip_spaces();
        self.consume_byte(b'(')?;
        self.skip_spaces();

        let value = body(self)?;

        self.skip_spaces();
        self.consume_byte(b')')?;
        Ok(value)
    }
}

#[rustfmt::skip]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consume_string_1() {
        let mut s = Stream::from("text");
        assert!(s.consume_string(b"te").is_ok());
        assert_eq!(s.slice_tail(), "xt");
    }

    #[test]
    fn consume_string_2() {
        // A failed match must not advance.
        let mut s = Stream::from("text");
        assert!(s.consume_string(b"ta").is_err());
        assert_eq!(s.pos(), 0);
    }

    #[test]
    fn consume_string_3() {
        // Case-sensitive.
        let mut s = Stream::from("Text");
        assert!(s.consume_string(b"text").is_err());
    }

    #[test]
    fn comma_wsp_1() {
        let mut s = Stream::from("  10");
        assert!(s.consume_comma_wsp());
        assert_eq!(s.slice_tail(), "10");
    }

    #[test]
    fn comma_wsp_2() {
        let mut s = Stream::from(",10");
        assert!(s.consume_comma_wsp());
        assert_eq!(s.slice_tail(), "10");
    }

    #[test]
    fn comma_wsp_3() {
        // Whitespace wins; the comma is left behind.
        let mut s = Stream::from(" ,10");
        assert!(s.consume_comma_wsp());
        assert_eq!(s.slice_tail(), ",10");
    }

    #[test]
    fn comma_wsp_4() {
        let mut s = Stream::from("10");
        assert!(!s.consume_comma_wsp());
    }

    #[test]
    fn separators_1() {
        let mut s = Stream::from(" ,; x");
        assert!(s.consume_separators().is_ok());
        assert_eq!(s.slice_tail(), "x");
    }

    #[test]
    fn separators_2() {
        let mut s = Stream::from("x");
        assert!(s.consume_separators().is_err());
        assert_eq!(s.pos(), 0);
    }

    #[test]
    fn enum_table_1() {
        let table = &[("bolder", 1), ("bold", 2)];
        let mut s = Stream::from("bolder");
        assert_eq!(s.parse_enum_table(table).unwrap(), 1);
        assert!(s.at_end());
    }

    #[test]
    fn parenthesized_1() {
        let mut s = Stream::from("url( #id )");
        let v = s.parse_parenthesized(Some(b"url"), |s| Ok(s.consume_bytes(|c| c != b' ')));
        assert_eq!(v.unwrap(), "#id");
        assert!(s.at_end());
    }
}
