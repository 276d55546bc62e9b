/*!
*svgattrs* is a collection of parsers for [SVG](https://www.w3.org/TR/SVG11/) attribute values.

Every parser consumes the whole input: leading and trailing whitespace is
allowed, but any other leftover makes the parse fail. There is no partial
success and no error recovery.

## Supported SVG types

- [`<color>`](https://www.w3.org/TR/SVG11/types.html#DataTypeColor)
- [`<number>`](https://www.w3.org/TR/SVG11/types.html#DataTypeNumber)
- [`<length>`](https://www.w3.org/TR/SVG11/types.html#DataTypeLength)
- [`<transform-list>`](https://www.w3.org/TR/SVG11/types.html#DataTypeTransformList)
- [`<viewBox>`](https://www.w3.org/TR/SVG11/coords.html#ViewBoxAttribute)
- [`<list-of-points>`](https://www.w3.org/TR/SVG11/shapes.html#PointsBNF)
- [`<paint>`](https://www.w3.org/TR/SVG11/painting.html#SpecifyingPaint)
- [`<FuncIRI>`](https://www.w3.org/TR/SVG11/types.html#DataTypeFuncIRI) (as part of `paint` and `clip-path`)
- [`<preserveAspectRatio>`](https://www.w3.org/TR/SVG11/coords.html#PreserveAspectRatioAttribute)
- `stroke-dasharray`, `fill-rule`, `stroke-linecap`, `stroke-linejoin`,
  `visibility`, `spreadMethod`, `gradientUnits`, `stop-color`,
  `font-family`, `font-size`, `font-style`, `font-weight`

## Limitations

- Accepts only [normalized](https://www.w3.org/TR/REC-xml/#AVNormalize) values,
  e.g. an input text should not contain `&#x20;` or `&data;`.
- All keywords must be lowercase, except named colors which are matched
  case-insensitively.
- `<icccolor>`, CSS3/CSS4 color notations and paint fallbacks are not supported.
- A transform list is flattened into a single matrix during parsing.

## Safety

- The library should not panic. Any panic considered as a critical bug and should be reported.
- The library forbids unsafe code.
*/

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
#![deny(missing_copy_implementations)]

mod aspect_ratio;
mod clip;
mod color;
#[rustfmt::skip] mod colors;
mod dasharray;
mod error;
mod font;
mod funciri;
mod length;
mod number;
mod paint;
mod painting;
mod points;
mod stream;
mod transform;
mod value;
mod viewbox;

pub use crate::aspect_ratio::*;
pub use crate::clip::*;
pub use crate::color::*;
pub use crate::dasharray::*;
pub use crate::error::*;
pub use crate::font::*;
pub use crate::length::*;
pub use crate::number::*;
pub use crate::paint::*;
pub use crate::painting::*;
pub use crate::points::*;
pub use crate::transform::*;
pub use crate::value::*;
pub use crate::viewbox::*;

/// Parses a single keyword attribute value: optional whitespace around one
/// table entry, nothing else.
pub(crate) fn parse_keyword<T: Clone>(text: &str, table: &[(&str, T)]) -> Result<T, Error> {
    let mut s = stream::Stream::from(text);
    s.skip_spaces();
    let value = s.parse_enum_table(table)?;

    s.skip_spaces();
    if !s.at_end() {
        return Err(Error);
    }

    Ok(value)
}
