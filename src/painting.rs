use crate::stream::Stream;
use crate::{Color, Error};

/// Representation of the `fill-rule` and `clip-rule` property values.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FillRule {
    /// The `nonzero` value.
    NonZero,
    /// The `evenodd` value.
    EvenOdd,
    /// The `inherit` value.
    Inherit,
}

impl std::str::FromStr for FillRule {
    type Err = Error;

    #[inline]
    fn from_str(text: &str) -> Result<Self, Error> {
        crate::parse_keyword(text, FILL_RULES)
    }
}

const FILL_RULES: &[(&str, FillRule)] = &[
    ("nonzero", FillRule::NonZero),
    ("evenodd", FillRule::EvenOdd),
    ("inherit", FillRule::Inherit),
];

/// Representation of the `stroke-linecap` property value.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LineCap {
    /// The `butt` value.
    Butt,
    /// The `round` value.
    Round,
    /// The `square` value.
    Square,
    /// The `inherit` value.
    Inherit,
}

impl std::str::FromStr for LineCap {
    type Err = Error;

    #[inline]
    fn from_str(text: &str) -> Result<Self, Error> {
        crate::parse_keyword(text, LINE_CAPS)
    }
}

const LINE_CAPS: &[(&str, LineCap)] = &[
    ("butt", LineCap::Butt),
    ("round", LineCap::Round),
    ("square", LineCap::Square),
    ("inherit", LineCap::Inherit),
];

/// Representation of the `stroke-linejoin` property value.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LineJoin {
    /// The `miter` value.
    Miter,
    /// The `round` value.
    Round,
    /// The `bevel` value.
    Bevel,
    /// The `inherit` value.
    Inherit,
}

impl std::str::FromStr for LineJoin {
    type Err = Error;

    #[inline]
    fn from_str(text: &str) -> Result<Self, Error> {
        crate::parse_keyword(text, LINE_JOINS)
    }
}

const LINE_JOINS: &[(&str, LineJoin)] = &[
    ("miter", LineJoin::Miter),
    ("round", LineJoin::Round),
    ("bevel", LineJoin::Bevel),
    ("inherit", LineJoin::Inherit),
];

/// Representation of the `visibility` property value.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Visibility {
    /// The `visible` value.
    Visible,
    /// The `hidden` value.
    Hidden,
    /// The `collapse` value.
    Collapse,
    /// The `inherit` value.
    Inherit,
}

impl std::str::FromStr for Visibility {
    type Err = Error;

    #[inline]
    fn from_str(text: &str) -> Result<Self, Error> {
        crate::parse_keyword(text, VISIBILITIES)
    }
}

const VISIBILITIES: &[(&str, Visibility)] = &[
    ("visible", Visibility::Visible),
    ("hidden", Visibility::Hidden),
    ("collapse", Visibility::Collapse),
    ("inherit", Visibility::Inherit),
];

/// Representation of the `spreadMethod` attribute value.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SpreadMethod {
    /// The `pad` value.
    Pad,
    /// The `reflect` value.
    Reflect,
    /// The `repeat` value.
    Repeat,
}

impl Default for SpreadMethod {
    #[inline]
    fn default() -> Self {
        SpreadMethod::Pad
    }
}

impl std::str::FromStr for SpreadMethod {
    type Err = Error;

    #[inline]
    fn from_str(text: &str) -> Result<Self, Error> {
        crate::parse_keyword(text, SPREAD_METHODS)
    }
}

const SPREAD_METHODS: &[(&str, SpreadMethod)] = &[
    ("pad", SpreadMethod::Pad),
    ("reflect", SpreadMethod::Reflect),
    ("repeat", SpreadMethod::Repeat),
];

/// Representation of the `gradientUnits` attribute value.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GradientUnits {
    /// The `userSpaceOnUse` value.
    UserSpaceOnUse,
    /// The `objectBoundingBox` value.
    ObjectBoundingBox,
}

impl std::str::FromStr for GradientUnits {
    type Err = Error;

    #[inline]
    fn from_str(text: &str) -> Result<Self, Error> {
        crate::parse_keyword(text, GRADIENT_UNITS)
    }
}

const GRADIENT_UNITS: &[(&str, GradientUnits)] = &[
    ("userSpaceOnUse", GradientUnits::UserSpaceOnUse),
    ("objectBoundingBox", GradientUnits::ObjectBoundingBox),
];

/// Representation of the `stop-color` property value.
///
/// Unlike [`Paint`], a stop color cannot reference a paint server.
///
/// [`Paint`]: crate::Paint
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StopColor {
    /// [`<color>`] value.
    ///
    /// [`<color>`]: https://www.w3.org/TR/SVG11/types.html#DataTypeColor
    Color(Color),
    /// The `currentColor` value.
    CurrentColor,
    /// The `inherit` value.
    Inherit,
}

impl std::str::FromStr for StopColor {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Error> {
        let mut s = Stream::from(text);

        let color = if let Some(color) = s.try_parse_color() {
            StopColor::Color(color)
        } else {
            s.skip_spaces();
            s.parse_enum_table(STOP_KEYWORDS)?
        };

        s.skip_spaces();
        if !s.at_end() {
            return Err(Error);
        }

        Ok(color)
    }
}

const STOP_KEYWORDS: &[(&str, StopColor)] = &[
    ("currentColor", StopColor::CurrentColor),
    ("inherit", StopColor::Inherit),
];
