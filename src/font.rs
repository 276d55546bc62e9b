use crate::stream::Stream;
use crate::{Error, Length};

/// Representation of the `font-family` property value.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum FontFamily {
    /// The `inherit` value.
    Inherit,
    /// A family name.
    Named(String),
}

impl std::str::FromStr for FontFamily {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Error> {
        let mut s = Stream::from(text);
        s.skip_spaces();

        if s.starts_with(b"inherit") {
            let mut s2 = s;
            s2.advance(7);
            s2.skip_spaces();
            if s2.at_end() {
                return Ok(FontFamily::Inherit);
            }
        }

        // Only the first family from a fallback list is kept.
        let tail = s.slice_tail();
        let name = match tail.find(',') {
            Some(idx) => {
                log::warn!("font-family fallback list is ignored: '{}'", tail);
                &tail[..idx]
            }
            None => tail,
        };

        let name = name.trim();
        if name.is_empty() {
            return Err(Error);
        }

        Ok(FontFamily::Named(name.to_string()))
    }
}

/// Representation of the `font-size` property value.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum FontSize {
    /// The `inherit` value.
    Inherit,
    /// [`<length>`] value.
    ///
    /// [`<length>`]: https://www.w3.org/TR/SVG11/types.html#DataTypeLength
    Length(Length),
}

impl std::str::FromStr for FontSize {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Error> {
        let mut s = Stream::from(text);
        s.skip_spaces();

        let size = if let Ok(length) = s.parse_length() {
            FontSize::Length(length)
        } else {
            s.consume_string(b"inherit")?;
            FontSize::Inherit
        };

        s.skip_spaces();
        if !s.at_end() {
            return Err(Error);
        }

        Ok(size)
    }
}

/// Representation of the `font-style` property value.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FontStyle {
    /// The `normal` value.
    Normal,
    /// The `italic` value.
    Italic,
    /// The `oblique` value.
    Oblique,
    /// The `inherit` value.
    Inherit,
}

impl std::str::FromStr for FontStyle {
    type Err = Error;

    #[inline]
    fn from_str(text: &str) -> Result<Self, Error> {
        crate::parse_keyword(text, STYLES)
    }
}

const STYLES: &[(&str, FontStyle)] = &[
    ("normal", FontStyle::Normal),
    ("italic", FontStyle::Italic),
    ("oblique", FontStyle::Oblique),
    ("inherit", FontStyle::Inherit),
];

/// Representation of the `font-weight` property value.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FontWeight {
    /// The `normal` value.
    Normal,
    /// The `bold` value.
    Bold,
    /// The `bolder` value.
    Bolder,
    /// The `lighter` value.
    Lighter,
    /// The `100` value.
    W100,
    /// The `200` value.
    W200,
    /// The `300` value.
    W300,
    /// The `400` value.
    W400,
    /// The `500` value.
    W500,
    /// The `600` value.
    W600,
    /// The `700` value.
    W700,
    /// The `800` value.
    W800,
    /// The `900` value.
    W900,
    /// The `inherit` value.
    Inherit,
}

impl std::str::FromStr for FontWeight {
    type Err = Error;

    #[inline]
    fn from_str(text: &str) -> Result<Self, Error> {
        crate::parse_keyword(text, WEIGHTS)
    }
}

// `bolder` must come before `bold`, otherwise the table lookup would
// stop at the shared prefix and leave `er` unconsumed.
const WEIGHTS: &[(&str, FontWeight)] = &[
    ("normal", FontWeight::Normal),
    ("bolder", FontWeight::Bolder),
    ("bold", FontWeight::Bold),
    ("lighter", FontWeight::Lighter),
    ("100", FontWeight::W100),
    ("200", FontWeight::W200),
    ("300", FontWeight::W300),
    ("400", FontWeight::W400),
    ("500", FontWeight::W500),
    ("600", FontWeight::W600),
    ("700", FontWeight::W700),
    ("800", FontWeight::W800),
    ("900", FontWeight::W900),
    ("inherit", FontWeight::Inherit),
];
