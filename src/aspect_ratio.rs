use crate::stream::Stream;
use crate::Error;

/// Representation of the `align` part of the [`preserveAspectRatio`] attribute.
///
/// [`preserveAspectRatio`]: https://www.w3.org/TR/SVG11/coords.html#PreserveAspectRatioAttribute
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[allow(missing_docs)]
pub enum Align {
    None,
    XMinYMin,
    XMidYMin,
    XMaxYMin,
    XMinYMid,
    XMidYMid,
    XMaxYMid,
    XMinYMax,
    XMidYMax,
    XMaxYMax,
}

/// Representation of the [`preserveAspectRatio`] attribute value.
///
/// The `defer` keyword is parsed, but has no effect, so it's not stored.
///
/// [`preserveAspectRatio`]: https://www.w3.org/TR/SVG11/coords.html#PreserveAspectRatioAttribute
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct AspectRatio {
    /// The alignment value.
    pub align: Align,
    /// Use `slice` scaling instead of `meet`.
    pub slice: bool,
}

impl Default for AspectRatio {
    #[inline]
    fn default() -> Self {
        AspectRatio {
            align: Align::XMidYMid,
            slice: false,
        }
    }
}

impl std::str::FromStr for AspectRatio {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Error> {
        let mut s = Stream::from(text);
        s.skip_spaces();

        // No separator is required after `defer`.
        if s.starts_with(b"defer") {
            s.advance(5);
            s.skip_spaces();
        }

        let align = s.parse_enum_table(ALIGNS)?;

        s.skip_spaces();
        let slice = match s.parse_enum_table(SCALES) {
            Ok(slice) => slice,
            Err(_) => false,
        };

        s.skip_spaces();
        if !s.at_end() {
            return Err(Error);
        }

        Ok(AspectRatio { align, slice })
    }
}

const ALIGNS: &[(&str, Align)] = &[
    ("none", Align::None),
    ("xMinYMin", Align::XMinYMin),
    ("xMidYMin", Align::XMidYMin),
    ("xMaxYMin", Align::XMaxYMin),
    ("xMinYMid", Align::XMinYMid),
    ("xMidYMid", Align::XMidYMid),
    ("xMaxYMid", Align::XMaxYMid),
    ("xMinYMax", Align::XMinYMax),
    ("xMidYMax", Align::XMidYMax),
    ("xMaxYMax", Align::XMaxYMax),
];

const SCALES: &[(&str, bool)] = &[("meet", false), ("slice", true)];
