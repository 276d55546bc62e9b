use crate::stream::Stream;
use crate::Error;

/// Representation of the [`<viewBox>`] type.
///
/// [`<viewBox>`]: https://www.w3.org/TR/SVG11/coords.html#ViewBoxAttribute
#[allow(missing_docs)]
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ViewBox {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl ViewBox {
    /// Creates a new `ViewBox`.
    #[inline]
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        ViewBox { x, y, w, h }
    }
}

impl std::str::FromStr for ViewBox {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Error> {
        let mut s = Stream::from(text);

        let x = s.parse_number()?;
        s.consume_separators()?;
        let y = s.parse_number()?;
        s.consume_separators()?;
        let w = s.parse_number()?;
        s.consume_separators()?;
        let h = s.parse_number()?;

        s.skip_spaces();
        if !s.at_end() {
            return Err(Error);
        }

        Ok(ViewBox::new(x, y, w, h))
    }
}

#[rustfmt::skip]
#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    macro_rules! test {
        ($name:ident, $text:expr, $result:expr) => (
            #[test]
            fn $name() {
                let v = ViewBox::from_str($text).unwrap();
                assert_eq!(v, $result);
            }
        )
    }

    test!(parse_1, "-20 30 100 500", ViewBox::new(-20.0, 30.0, 100.0, 500.0));
    test!(parse_2, "0,0,100,50", ViewBox::new(0.0, 0.0, 100.0, 50.0));
    test!(parse_3, " 0 0 100 50 ", ViewBox::new(0.0, 0.0, 100.0, 50.0));

    macro_rules! test_err {
        ($name:ident, $text:expr) => (
            #[test]
            fn $name() {
                assert!(ViewBox::from_str($text).is_err());
            }
        )
    }

    test_err!(parse_err_1, "qwe");
    test_err!(parse_err_2, "10 20 30");
    test_err!(parse_err_3, "10 20 30 40 50");
    test_err!(parse_err_4, "10 20 30 40 qwe");
    test_err!(parse_err_5, "");
}
