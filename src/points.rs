use crate::stream::Stream;
use crate::Error;

/// Representation of the [`<list-of-points>`] type.
///
/// Used by the `points` attribute of the `polygon` and `polyline` elements.
///
/// [`<list-of-points>`]: https://www.w3.org/TR/SVG11/shapes.html#PointsBNF
#[derive(Clone, PartialEq, Debug)]
pub struct Points(
    /// The parsed coordinate pairs.
    pub Vec<(f64, f64)>,
);

impl std::str::FromStr for Points {
    type Err = Error;

    /// Parses a points list.
    ///
    /// Pairs are separated by comma-wsp. Within a pair the separator may
    /// be omitted when the second coordinate starts with `-`, which is
    /// what makes `-5-5` a valid pair. An odd trailing coordinate is
    /// dropped, per the SVG spec. At least one pair is required.
    fn from_str(text: &str) -> Result<Self, Error> {
        let mut s = Stream::from(text);
        let mut points = Vec::new();

        s.skip_spaces();

        loop {
            if !points.is_empty() && !s.consume_comma_wsp() {
                break;
            }

            let x = match s.parse_number() {
                Ok(x) => x,
                Err(_) => break,
            };

            if !s.consume_comma_wsp() && !s.at_end() && !s.is_curr_byte_eq(b'-') {
                break;
            }

            let y = match s.parse_number() {
                Ok(y) => y,
                Err(_) => break,
            };

            points.push((x, y));
        }

        if points.is_empty() || !s.at_end() {
            return Err(Error);
        }

        Ok(Points(points))
    }
}
