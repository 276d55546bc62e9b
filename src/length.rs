use crate::stream::{ByteExt, Stream};
use crate::Error;

/// List of all SVG length units.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[allow(missing_docs)]
pub enum LengthUnit {
    None,
    Percent,
    Em,
    Ex,
    Px,
    Cm,
    Mm,
    In,
    Pt,
    Pc,
}

const UNITS: &[(&str, LengthUnit)] = &[
    ("%", LengthUnit::Percent),
    ("em", LengthUnit::Em),
    ("ex", LengthUnit::Ex),
    ("px", LengthUnit::Px),
    ("cm", LengthUnit::Cm),
    ("mm", LengthUnit::Mm),
    ("in", LengthUnit::In),
    ("pt", LengthUnit::Pt),
    ("pc", LengthUnit::Pc),
];

/// Representation of the [`<length>`] type.
///
/// [`<length>`]: https://www.w3.org/TR/SVG11/types.html#DataTypeLength
#[derive(Clone, Copy, PartialEq, Debug)]
#[allow(missing_docs)]
pub struct Length {
    pub number: f64,
    pub unit: LengthUnit,
}

impl Length {
    /// Constructs a new length.
    #[inline]
    pub fn new(number: f64, unit: LengthUnit) -> Length {
        Length { number, unit }
    }

    /// Constructs a new unitless length.
    #[inline]
    pub fn new_number(number: f64) -> Length {
        Length {
            number,
            unit: LengthUnit::None,
        }
    }

    /// Constructs a new length with a zero number.
    #[inline]
    pub fn zero() -> Length {
        Length {
            number: 0.0,
            unit: LengthUnit::None,
        }
    }
}

impl Default for Length {
    #[inline]
    fn default() -> Self {
        Length::zero()
    }
}

impl std::str::FromStr for Length {
    type Err = Error;

    #[inline]
    fn from_str(text: &str) -> Result<Self, Error> {
        let mut s = Stream::from(text);
        let l = s.parse_length()?;

        if !s.at_end() {
            return Err(Error);
        }

        Ok(l)
    }
}

impl<'a> Stream<'a> {
    /// Parses a length from the stream.
    ///
    /// A number without a unit suffix must be followed by a separator
    /// or the end of the input, so `50xx` fails as a whole instead of
    /// producing `50` with a leftover.
    ///
    /// Trailing separators are consumed, which is what allows length
    /// lists to be parsed by chained calls. Does not advance on failure.
    pub fn parse_length(&mut self) -> Result<Length, Error> {
        let mut s = *self;

        let n = s.parse_number()?;

        let unit = match s.parse_enum_table(UNITS) {
            Ok(unit) => unit,
            Err(_) => {
                if !s.at_end() && !s.curr_byte_unchecked().is_separator() {
                    return Err(Error);
                }

                LengthUnit::None
            }
        };

        s.skip_separators();
        *self = s;

        Ok(Length::new(n, unit))
    }
}
