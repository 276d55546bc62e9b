use crate::stream::Stream;
use crate::Error;

/// Representation of the [`<transform-list>`] type, accumulated into
/// a single affine matrix.
///
/// [`<transform-list>`]: https://www.w3.org/TR/SVG11/coords.html#TransformAttribute
#[derive(Clone, Copy, PartialEq, Debug)]
#[allow(missing_docs)]
pub struct Transform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Transform {
    /// Constructs a new transform.
    #[inline]
    pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Transform { a, b, c, d, e, f }
    }

    /// Constructs a new translation transform.
    #[inline]
    pub fn new_translate(tx: f64, ty: f64) -> Self {
        Transform::new(1.0, 0.0, 0.0, 1.0, tx, ty)
    }

    /// Constructs a new scaling transform.
    #[inline]
    pub fn new_scale(sx: f64, sy: f64) -> Self {
        Transform::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// Constructs a new rotation transform. The angle is in degrees.
    pub fn new_rotate(angle: f64) -> Self {
        let v = angle.to_radians();
        let (sin, cos) = v.sin_cos();
        Transform::new(cos, sin, -sin, cos, 0.0, 0.0)
    }

    /// Constructs a new rotation transform around the `(cx, cy)` point.
    pub fn new_rotate_at(angle: f64, cx: f64, cy: f64) -> Self {
        let mut ts = Transform::new_translate(cx, cy);
        ts = multiply(&ts, &Transform::new_rotate(angle));
        multiply(&ts, &Transform::new_translate(-cx, -cy))
    }

    /// Constructs a new horizontal skew transform. The angle is in degrees.
    pub fn new_skew_x(angle: f64) -> Self {
        Transform::new(1.0, 0.0, angle.to_radians().tan(), 1.0, 0.0, 0.0)
    }

    /// Constructs a new vertical skew transform. The angle is in degrees.
    pub fn new_skew_y(angle: f64) -> Self {
        Transform::new(1.0, angle.to_radians().tan(), 0.0, 1.0, 0.0, 0.0)
    }
}

impl Default for Transform {
    #[inline]
    fn default() -> Transform {
        Transform::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }
}

#[inline(never)]
fn multiply(ts1: &Transform, ts2: &Transform) -> Transform {
    Transform {
        a: ts1.a * ts2.a + ts1.c * ts2.b,
        b: ts1.b * ts2.a + ts1.d * ts2.b,
        c: ts1.a * ts2.c + ts1.c * ts2.d,
        d: ts1.b * ts2.c + ts1.d * ts2.d,
        e: ts1.a * ts2.e + ts1.c * ts2.f + ts1.e,
        f: ts1.b * ts2.e + ts1.d * ts2.f + ts1.f,
    }
}

impl std::str::FromStr for Transform {
    type Err = Error;

    /// Parses a transform list into a single matrix.
    ///
    /// Functions are pre-concatenated in their textual order, so
    /// `translate(10,20) scale(2)` equals translate times scale,
    /// not the reverse. At least one function is required.
    fn from_str(text: &str) -> Result<Self, Error> {
        let mut s = Stream::from(text);
        let mut matrix = Transform::default();
        let mut parsed = false;

        while let Some(m) = parse_transform_fn(&mut s) {
            matrix = multiply(&matrix, &m);
            parsed = true;

            s.consume_comma_wsp();
        }

        s.skip_spaces();
        if !parsed || !s.at_end() {
            return Err(Error);
        }

        Ok(matrix)
    }
}

type BodyFn = fn(&mut Stream) -> Result<Transform, Error>;

const TRANSFORM_FNS: &[(&[u8], BodyFn)] = &[
    (b"matrix", parse_matrix),
    (b"translate", parse_translate),
    (b"scale", parse_scale),
    (b"rotate", parse_rotate),
    (b"skewX", parse_skew_x),
    (b"skewY", parse_skew_y),
];

/// Tries every transform function in order and commits the first match.
fn parse_transform_fn(s: &mut Stream) -> Option<Transform> {
    for &(name, body) in TRANSFORM_FNS {
        let mut sub = *s;
        if let Ok(m) = sub.parse_parenthesized(Some(name), body) {
            *s = sub;
            return Some(m);
        }
    }

    None
}

fn parse_matrix(s: &mut Stream) -> Result<Transform, Error> {
    let mut n = [0.0; 6];
    for (i, v) in n.iter_mut().enumerate() {
        *v = s.parse_number()?;
        if i < 5 {
            s.consume_separators()?;
        }
    }

    Ok(Transform::new(n[0], n[1], n[2], n[3], n[4], n[5]))
}

fn parse_translate(s: &mut Stream) -> Result<Transform, Error> {
    let tx = s.parse_number()?;

    // 'If <ty> is not provided, it is assumed to be zero.'
    let mut ty = 0.0;
    let mut sub = *s;
    if sub.consume_separators().is_ok() {
        if let Ok(n) = sub.parse_number() {
            ty = n;
            *s = sub;
        }
    }

    Ok(Transform::new_translate(tx, ty))
}

fn parse_scale(s: &mut Stream) -> Result<Transform, Error> {
    let sx = s.parse_number()?;

    // 'If <sy> is not provided, it is assumed to be equal to <sx>.'
    let mut sy = sx;
    let mut sub = *s;
    if sub.consume_separators().is_ok() {
        if let Ok(n) = sub.parse_number() {
            sy = n;
            *s = sub;
        }
    }

    Ok(Transform::new_scale(sx, sy))
}

fn parse_rotate(s: &mut Stream) -> Result<Transform, Error> {
    let angle = s.parse_number()?;

    let mut cx = 0.0;
    let mut cy = 0.0;

    // Optional [<cx> <cy>]; a lone <cx> fails the whole parse.
    let mut sub = *s;
    if sub.consume_separators().is_ok() {
        if let Ok(x) = sub.parse_number() {
            sub.consume_separators()?;
            let y = sub.parse_number()?;
            *s = sub;
            cx = x;
            cy = y;
        }
    }

    Ok(Transform::new_rotate_at(angle, cx, cy))
}

fn parse_skew_x(s: &mut Stream) -> Result<Transform, Error> {
    let angle = s.parse_number()?;
    Ok(Transform::new_skew_x(angle))
}

fn parse_skew_y(s: &mut Stream) -> Result<Transform, Error> {
    let angle = s.parse_number()?;
    Ok(Transform::new_skew_y(angle))
}

#[rustfmt::skip]
#[cfg(test)]
mod tests {
    use std::str::FromStr;
    use super::*;

    macro_rules! test {
        ($name:ident, $text:expr, $result:expr) => (
            #[test]
            fn $name() {
                let ts = Transform::from_str($text).unwrap();
                let s = format!("matrix({} {} {} {} {} {})", ts.a, ts.b, ts.c, ts.d, ts.e, ts.f);
                assert_eq!(s, $result);
            }
        )
    }

    test!(parse_1,
        "matrix(1 0 0 1 10 20)",
        "matrix(1 0 0 1 10 20)"
    );

    test!(parse_2,
        "translate(10 20)",
        "matrix(1 0 0 1 10 20)"
    );

    test!(parse_3,
        "translate(10)",
        "matrix(1 0 0 1 10 0)"
    );

    test!(parse_4,
        "scale(2 3)",
        "matrix(2 0 0 3 0 0)"
    );

    test!(parse_5,
        "scale(2)",
        "matrix(2 0 0 2 0 0)"
    );

    test!(parse_6,
        "rotate(30)",
        "matrix(0.8660254037844387 0.49999999999999994 -0.49999999999999994 0.8660254037844387 0 0)"
    );

    test!(parse_7,
        "rotate(30 10 20)",
        "matrix(0.8660254037844387 0.49999999999999994 -0.49999999999999994 0.8660254037844387 11.339745962155611 -2.3205080756887746)"
    );

    test!(parse_8,
        "translate(10,20) scale(2)",
        "matrix(2 0 0 2 10 20)"
    );

    test!(parse_9,
        "translate(25 215) scale(2) skewX(45)",
        "matrix(2 0 1.9999999999999998 2 25 215)"
    );

    test!(parse_10,
        "skewX(45)",
        "matrix(1 0 0.9999999999999999 1 0 0)"
    );

    test!(parse_11,
        "translate(10 15), translate(0 5)",
        "matrix(1 0 0 1 10 20)"
    );

    #[test]
    fn composition_order() {
        // translate * scale, not scale * translate
        let ts = Transform::from_str("translate(10,20) scale(2)").unwrap();
        let reference = multiply(&Transform::new_translate(10.0, 20.0),
                                 &Transform::new_scale(2.0, 2.0));
        assert_eq!(ts, reference);
    }

    macro_rules! test_err {
        ($name:ident, $text:expr) => (
            #[test]
            fn $name() {
                assert!(Transform::from_str($text).is_err());
            }
        )
    }

    test_err!(parse_err_1, "text");
    test_err!(parse_err_2, "");
    test_err!(parse_err_3, "scale(2) text");
    test_err!(parse_err_4, "rect()");
    test_err!(parse_err_5, "rotate(45 10)");
    test_err!(parse_err_6, "translate(10,)");
    test_err!(parse_err_7, "matrix(1 0 0 1 10)");
    test_err!(parse_err_8, "scale(2),,scale(2)");
    // comma-wsp is whitespace OR a single comma; after whitespace won,
    // a following comma has nothing left to consume it
    test_err!(parse_err_9, "scale(2) , scale(2)");
}
