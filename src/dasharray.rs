use crate::stream::Stream;
use crate::{Error, Length};

/// Representation of the `stroke-dasharray` property value.
#[derive(Clone, PartialEq, Debug)]
pub enum DashArray {
    /// The `none` value.
    None,
    /// The `inherit` value.
    Inherit,
    /// A list of dash lengths.
    ///
    /// Validation, like an even amount of non-negative values, is left
    /// to the caller.
    Array(Vec<Length>),
}

impl std::str::FromStr for DashArray {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Error> {
        let mut s = Stream::from(text);
        s.skip_spaces();

        if let Ok(keyword) = s.parse_enum_table(KEYWORDS) {
            s.skip_spaces();
            if !s.at_end() {
                return Err(Error);
            }

            return Ok(keyword);
        }

        // Each `parse_length` consumes its trailing separators,
        // so the list is just chained calls.
        let mut dashes = Vec::new();
        while !s.at_end() {
            dashes.push(s.parse_length()?);
        }

        if dashes.is_empty() {
            return Err(Error);
        }

        Ok(DashArray::Array(dashes))
    }
}

const KEYWORDS: &[(&str, DashArray)] = &[
    ("none", DashArray::None),
    ("inherit", DashArray::Inherit),
];

#[rustfmt::skip]
#[cfg(test)]
mod tests {
    use super::*;
    use crate::LengthUnit;
    use std::str::FromStr;

    macro_rules! test {
        ($name:ident, $text:expr, $result:expr) => (
            #[test]
            fn $name() {
                assert_eq!(DashArray::from_str($text).unwrap(), $result);
            }
        )
    }

    test!(parse_1, "none", DashArray::None);
    test!(parse_2, " inherit ", DashArray::Inherit);
    test!(parse_3, "5,3", DashArray::Array(vec![
        Length::new_number(5.0),
        Length::new_number(3.0),
    ]));
    test!(parse_4, " 10px 5% , 1em ", DashArray::Array(vec![
        Length::new(10.0, LengthUnit::Px),
        Length::new(5.0, LengthUnit::Percent),
        Length::new(1.0, LengthUnit::Em),
    ]));
    test!(parse_5, "1", DashArray::Array(vec![Length::new_number(1.0)]));

    macro_rules! test_err {
        ($name:ident, $text:expr) => (
            #[test]
            fn $name() {
                assert!(DashArray::from_str($text).is_err());
            }
        )
    }

    test_err!(parse_err_1, "");
    test_err!(parse_err_2, "5,3,q");
    test_err!(parse_err_3, "none 5");
    test_err!(parse_err_4, ",5");
}
