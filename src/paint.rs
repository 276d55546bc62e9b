use crate::stream::Stream;
use crate::{Color, Error};

/// Representation of the [`<paint>`] type.
///
/// `<icccolor>` and fallback colors after a `FuncIRI` are not supported.
///
/// [`<paint>`]: https://www.w3.org/TR/SVG11/painting.html#SpecifyingPaint
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Paint {
    /// The `none` value.
    None,
    /// The `currentColor` value.
    CurrentColor,
    /// The `inherit` value.
    Inherit,
    /// [`<color>`] value.
    ///
    /// [`<color>`]: https://www.w3.org/TR/SVG11/types.html#DataTypeColor
    Color(Color),
    /// A local `url(#id)` reference to a paint server.
    FuncIri(String),
}

impl std::str::FromStr for Paint {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Error> {
        let mut s = Stream::from(text);

        let paint = if let Some(color) = s.try_parse_color() {
            Paint::Color(color)
        } else {
            s.skip_spaces();
            if let Ok(keyword) = s.parse_enum_table(KEYWORDS) {
                keyword
            } else {
                let link = s.parse_func_iri()?;
                Paint::FuncIri(link.to_string())
            }
        };

        s.skip_spaces();
        if !s.at_end() {
            return Err(Error);
        }

        Ok(paint)
    }
}

const KEYWORDS: &[(&str, Paint)] = &[
    ("none", Paint::None),
    ("currentColor", Paint::CurrentColor),
    ("inherit", Paint::Inherit),
];

#[rustfmt::skip]
#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    macro_rules! test {
        ($name:ident, $text:expr, $result:expr) => (
            #[test]
            fn $name() {
                assert_eq!(Paint::from_str($text).unwrap(), $result);
            }
        )
    }

    test!(parse_1, "none", Paint::None);
    test!(parse_2, "  none   ", Paint::None);
    test!(parse_3, " currentColor ", Paint::CurrentColor);
    test!(parse_4, " inherit ", Paint::Inherit);
    test!(parse_5, " red ", Paint::Color(Color::red()));
    test!(parse_6, "#00ff00", Paint::Color(Color::new_rgb(0, 255, 0)));
    test!(parse_7, "rgb(255, 0, 0)", Paint::Color(Color::red()));
    test!(parse_8, " url(#qwe) ", Paint::FuncIri("qwe".to_string()));

    macro_rules! test_err {
        ($name:ident, $text:expr) => (
            #[test]
            fn $name() {
                assert!(Paint::from_str($text).is_err());
            }
        )
    }

    test_err!(parse_err_1, "qwe");
    test_err!(parse_err_2, "");
    test_err!(parse_err_3, "url(#qwe) red");
    test_err!(parse_err_4, "url(qwe)");
    test_err!(parse_err_5, "none extra");
    test_err!(parse_err_6, "currentcolor");
}
