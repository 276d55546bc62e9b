use std::str::FromStr;

use crate::stream::{ByteExt, Stream};
use crate::Error;

/// Parses a standalone [`<number>`] attribute value.
///
/// Trailing list separators are allowed, but nothing else.
///
/// [`<number>`]: https://www.w3.org/TR/SVG11/types.html#DataTypeNumber
pub fn parse_number(text: &str) -> Result<f64, Error> {
    let mut s = Stream::from(text);
    let n = s.parse_number()?;
    s.skip_separators();
    if !s.at_end() {
        return Err(Error);
    }

    Ok(n)
}

impl<'a> Stream<'a> {
    /// Skips digits.
    pub fn skip_digits(&mut self) {
        self.skip_bytes(|c| c.is_digit());
    }

    /// Parses a number from the stream.
    ///
    /// Consumes leading whitespace. Does not advance on failure.
    pub fn parse_number(&mut self) -> Result<f64, Error> {
        let mut s = *self;
        match s.parse_number_impl() {
            Ok(n) => {
                *self = s;
                Ok(n)
            }
            Err(_) => Err(Error),
        }
    }

    fn parse_number_impl(&mut self) -> Result<f64, Error> {
        self.skip_spaces();

        let start = self.pos();

        // Consume sign.
        if self.curr_byte()?.is_sign() {
            self.advance(1);
        }

        // Consume the integer part.
        match self.curr_byte()? {
            b'0'..=b'9' => self.skip_digits(),
            b'.' => {}
            _ => return Err(Error),
        }

        // Consume the fractional part.
        if self.is_curr_byte_eq(b'.') {
            self.advance(1);
            self.skip_digits();
        }

        // Consume the exponent, unless it is actually an 'em'/'ex' unit suffix.
        if matches!(self.curr_byte(), Ok(b'e') | Ok(b'E')) {
            let c = self.next_byte()?;
            if c != b'm' && c != b'x' {
                self.advance(1);

                match self.curr_byte()? {
                    b'+' | b'-' => {
                        self.advance(1);
                        self.skip_digits();
                    }
                    b'0'..=b'9' => self.skip_digits(),
                    _ => return Err(Error),
                }
            }
        }

        // Use the default f64 parser now.
        let text = self.slice_back(start);
        let n = f64::from_str(text).map_err(|_| Error)?;

        // inf, nan, etc. are an error.
        if !n.is_finite() {
            return Err(Error);
        }

        Ok(n)
    }

    /// Parses a signed integer from the stream.
    ///
    /// Consumes leading whitespace. Does not advance on failure.
    pub fn parse_integer(&mut self) -> Result<i32, Error> {
        let mut s = *self;
        match s.parse_integer_impl() {
            Ok(n) => {
                *self = s;
                Ok(n)
            }
            Err(_) => Err(Error),
        }
    }

    fn parse_integer_impl(&mut self) -> Result<i32, Error> {
        self.skip_spaces();

        let start = self.pos();

        // Consume sign.
        if self.curr_byte()?.is_sign() {
            self.advance(1);
        }

        // The current byte must be a digit.
        if !self.curr_byte()?.is_digit() {
            return Err(Error);
        }

        self.skip_digits();

        // Use the default i32 parser now.
        let text = self.slice_back(start);
        i32::from_str(text).map_err(|_| Error)
    }
}

#[rustfmt::skip]
#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_number {
        ($name:ident, $text:expr, $result:expr) => (
            #[test]
            fn $name() {
                let mut s = Stream::from($text);
                assert_eq!(s.parse_number().unwrap(), $result);
            }
        )
    }

    test_number!(number_1,  "0",      0.0);
    test_number!(number_2,  "1",      1.0);
    test_number!(number_3,  "-1",     -1.0);
    test_number!(number_4,  " -1",    -1.0);
    test_number!(number_5,  "  1  ",  1.0);
    test_number!(number_6,  ".4",     0.4);
    test_number!(number_7,  "-.4",    -0.4);
    test_number!(number_8,  "-.4text", -0.4);
    test_number!(number_9,  "-.01 text", -0.01);
    test_number!(number_10, "-.01 4",   -0.01);
    test_number!(number_11, ".0000000000008", 0.0000000000008);
    test_number!(number_12, "1000000000000", 1000000000000.0);
    test_number!(number_13, "123456.123456", 123456.123456);
    test_number!(number_14, "+10",    10.0);
    test_number!(number_15, "1e2",    100.0);
    test_number!(number_16, "1e+2",   100.0);
    test_number!(number_17, "1E2",    100.0);
    test_number!(number_18, "1e-2",   0.01);
    test_number!(number_19, "1ex",    1.0);
    test_number!(number_20, "1em",    1.0);
    test_number!(number_21, "12345678901234567890", 12345678901234567000.0);
    test_number!(number_22, "0.",     0.0);
    test_number!(number_23, "1.3e-2", 0.013);

    macro_rules! test_number_err {
        ($name:ident, $text:expr) => (
            #[test]
            fn $name() {
                let mut s = Stream::from($text);
                assert!(s.parse_number().is_err());
                assert_eq!(s.pos(), 0);
            }
        )
    }

    test_number_err!(number_err_1, "q");
    test_number_err!(number_err_2, "");
    test_number_err!(number_err_3, "-");
    test_number_err!(number_err_4, "+");
    test_number_err!(number_err_5, "-q");
    test_number_err!(number_err_6, ".");
    test_number_err!(number_err_7, "1e");

    #[test]
    fn integer_1() {
        let mut s = Stream::from("10");
        assert_eq!(s.parse_integer().unwrap(), 10);
    }

    #[test]
    fn integer_2() {
        let mut s = Stream::from("-10.5");
        assert_eq!(s.parse_integer().unwrap(), -10);
        assert_eq!(s.slice_tail(), ".5");
    }

    #[test]
    fn integer_err_1() {
        // overflow
        let mut s = Stream::from("10000000000000");
        assert!(s.parse_integer().is_err());
        assert_eq!(s.pos(), 0);
    }

    #[test]
    fn top_level_1() {
        assert_eq!(parse_number("3.14").unwrap(), 3.14);
    }

    #[test]
    fn top_level_2() {
        // trailing separators are allowed
        assert_eq!(parse_number(" 10, ").unwrap(), 10.0);
    }

    #[test]
    fn top_level_err_1() {
        assert!(parse_number("10 20").is_err());
    }

    #[test]
    fn top_level_err_2() {
        assert!(parse_number("10q").is_err());
    }
}
