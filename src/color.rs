use crate::stream::{ByteExt, Stream};
use crate::{colors, Error};

/// Representation of the [`<color>`] type.
///
/// [`<color>`]: https://www.w3.org/TR/SVG11/types.html#DataTypeColor
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[allow(missing_docs)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Color {
    /// Constructs a new `Color` from RGB values.
    #[inline]
    pub fn new_rgb(red: u8, green: u8, blue: u8) -> Color {
        Color {
            red,
            green,
            blue,
            alpha: 255,
        }
    }

    /// Constructs a new `Color` from RGBA values.
    #[inline]
    pub fn new_rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Color {
        Color {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Constructs a new `Color` set to black.
    #[inline]
    pub fn black() -> Color {
        Color::new_rgb(0, 0, 0)
    }

    /// Constructs a new `Color` set to white.
    #[inline]
    pub fn white() -> Color {
        Color::new_rgb(255, 255, 255)
    }

    /// Constructs a new `Color` set to red.
    #[inline]
    pub fn red() -> Color {
        Color::new_rgb(255, 0, 0)
    }

    /// Constructs a new `Color` set to green.
    #[inline]
    pub fn green() -> Color {
        Color::new_rgb(0, 128, 0)
    }

    /// Constructs a new `Color` set to blue.
    #[inline]
    pub fn blue() -> Color {
        Color::new_rgb(0, 0, 255)
    }
}

impl std::str::FromStr for Color {
    type Err = Error;

    /// Parses a `Color` from a string.
    ///
    /// Supported notations: `#rrggbb`, `#rgb` (expanded by nibble
    /// duplication), a color keyword and `rgb(r, g, b)` with either
    /// integer or percentage channels.
    fn from_str(text: &str) -> Result<Self, Error> {
        let mut s = Stream::from(text);
        let color = s.parse_color()?;

        s.skip_spaces();
        if !s.at_end() {
            return Err(Error);
        }

        Ok(color)
    }
}

impl<'a> Stream<'a> {
    /// Tries to parse a color, but doesn't advance on error.
    pub fn try_parse_color(&mut self) -> Option<Color> {
        let mut s = *self;
        if let Ok(color) = s.parse_color() {
            *self = s;
            Some(color)
        } else {
            None
        }
    }

    /// Parses a color as a sub-grammar.
    ///
    /// Trailing data is not checked here; top-level callers are
    /// responsible for the end-of-input test.
    pub fn parse_color(&mut self) -> Result<Color, Error> {
        self.skip_spaces();

        if self.curr_byte()? == b'#' {
            self.advance(1);
            let digits = self.consume_bytes(|c| c.is_hex_digit()).as_bytes();
            match digits.len() {
                6 => {
                    // #rrggbb
                    Ok(Color::new_rgb(
                        hex_pair(digits[0], digits[1]),
                        hex_pair(digits[2], digits[3]),
                        hex_pair(digits[4], digits[5]),
                    ))
                }
                3 => {
                    // #rgb
                    Ok(Color::new_rgb(
                        short_hex(digits[0]),
                        short_hex(digits[1]),
                        short_hex(digits[2]),
                    ))
                }
                _ => Err(Error),
            }
        } else {
            let name = self.consume_ascii_ident();
            if name == "rgb" {
                self.parse_parenthesized(None, |s| {
                    let red = s.parse_color_component()?;
                    s.consume_separators()?;
                    let green = s.parse_color_component()?;
                    s.consume_separators()?;
                    let blue = s.parse_color_component()?;
                    Ok(Color::new_rgb(red, green, blue))
                })
            } else {
                colors::from_str(&name.to_ascii_lowercase()).ok_or(Error)
            }
        }
    }

    /// Parses a single `rgb()` channel.
    ///
    /// Either an integer, optionally suffixed with `%`, or a fractional
    /// number that must be suffixed with `%` (the CSS2 rgb-percent syntax).
    /// The result is rounded and clamped into 0..=255.
    fn parse_color_component(&mut self) -> Result<u8, Error> {
        let mut s = *self;
        let n = match s.parse_integral_component() {
            Ok(n) => n,
            Err(_) => {
                s = *self;
                s.parse_fractional_component()?
            }
        };
        *self = s;

        Ok(n.max(0).min(255) as u8)
    }

    fn parse_integral_component(&mut self) -> Result<i32, Error> {
        let n = self.parse_integer()?;

        // A fractional value must take the percent path.
        if self.is_curr_byte_eq(b'.') {
            return Err(Error);
        }

        if self.is_curr_byte_eq(b'%') {
            self.advance(1);
            return Ok((n as f64 * 255.0 / 100.0).round() as i32);
        }

        Ok(n)
    }

    fn parse_fractional_component(&mut self) -> Result<i32, Error> {
        let n = self.parse_number()?;
        self.consume_byte(b'%')?;
        Ok((n * 255.0 / 100.0).round() as i32)
    }
}

#[inline]
fn from_hex(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => b'0',
    }
}

#[inline]
fn short_hex(c: u8) -> u8 {
    let h = from_hex(c);
    (h << 4) | h
}

#[inline]
fn hex_pair(c1: u8, c2: u8) -> u8 {
    let h1 = from_hex(c1);
    let h2 = from_hex(c2);
    (h1 << 4) | h2
}

#[rustfmt::skip]
#[cfg(test)]
mod tests {
    use std::str::FromStr;
    use crate::Color;

    macro_rules! test {
        ($name:ident, $text:expr, $color:expr) => {
            #[test]
            fn $name() {
                assert_eq!(Color::from_str($text).unwrap(), $color);
            }
        };
    }

    test!(
        rrggbb,
        "#ff0000",
        Color::new_rgb(255, 0, 0)
    );

    test!(
        rrggbb_upper,
        "#FF0000",
        Color::new_rgb(255, 0, 0)
    );

    test!(
        rgb_hex,
        "#f00",
        Color::new_rgb(255, 0, 0)
    );

    test!(
        rgb_hex_expansion,
        "#1a7",
        Color::new_rgb(0x11, 0xaa, 0x77)
    );

    test!(
        rrggbb_spaced,
        "  #ff0000  ",
        Color::new_rgb(255, 0, 0)
    );

    test!(
        rgb_numeric,
        "rgb(254, 203, 231)",
        Color::new_rgb(254, 203, 231)
    );

    test!(
        rgb_numeric_spaced,
        " rgb( 77 , 77 , 77 ) ",
        Color::new_rgb(77, 77, 77)
    );

    test!(
        rgb_percentage,
        "rgb(50%, 50%, 50%)",
        Color::new_rgb(128, 128, 128)
    );

    test!(
        rgb_percentage_overflow,
        "rgb(140%, -10%, 130%)",
        Color::new_rgb(255, 0, 255)
    );

    test!(
        rgb_percentage_float,
        "rgb(33.333%,46.666%,93.333%)",
        Color::new_rgb(85, 119, 238)
    );

    test!(
        rgb_numeric_overflow,
        "rgb(300, -10, 255)",
        Color::new_rgb(255, 0, 255)
    );

    test!(
        name_red,
        "red",
        Color::new_rgb(255, 0, 0)
    );

    test!(
        name_red_spaced,
        " red ",
        Color::new_rgb(255, 0, 0)
    );

    test!(
        name_red_upper_case,
        "RED",
        Color::new_rgb(255, 0, 0)
    );

    test!(
        name_cornflowerblue,
        "cornflowerblue",
        Color::new_rgb(100, 149, 237)
    );

    #[test]
    fn notations_agree() {
        let reference = Color::from_str("#ff0000").unwrap();
        assert_eq!(Color::from_str("rgb(255, 0, 0)").unwrap(), reference);
        assert_eq!(Color::from_str("red").unwrap(), reference);
    }

    macro_rules! test_err {
        ($name:ident, $text:expr) => {
            #[test]
            fn $name() {
                assert!(Color::from_str($text).is_err());
            }
        };
    }

    test_err!(err_not_a_color, "text");
    test_err!(err_empty, "");
    test_err!(err_four_hex_digits, "#f000");
    test_err!(err_seven_hex_digits, "#ff00001");
    test_err!(err_trailing_data, "#ff0000 extra");
    test_err!(err_rgb_fractional_channel, "rgb(0.5, 0, 0)");
    test_err!(err_rgb_missing_channel, "rgb(255, 0)");
    test_err!(err_rgb_missing_paren, "rgb(255, 0, 0");
    test_err!(err_rgb_upper_case, "RGB(255, 0, 0)");
}
