use crate::{
    AspectRatio, Clip, Color, DashArray, FillRule, FontFamily, FontSize, FontStyle, FontWeight,
    GradientUnits, Length, LineCap, LineJoin, Paint, Points, SpreadMethod, StopColor, Transform,
    ViewBox, Visibility,
};

/// A parsed attribute value of any supported kind.
///
/// A closed union over every type this crate can produce, so collaborators
/// can store heterogeneous attribute values uniformly and dispatch with an
/// exhaustive `match`.
#[derive(Clone, Debug)]
pub enum Value {
    /// `clip-path` value.
    Clip(Clip),
    /// `<color>` value.
    Color(Color),
    /// `stroke-dasharray` value.
    DashArray(DashArray),
    /// `fill-rule` / `clip-rule` value.
    FillRule(FillRule),
    /// `font-family` value.
    FontFamily(FontFamily),
    /// `font-size` value.
    FontSize(FontSize),
    /// `font-style` value.
    FontStyle(FontStyle),
    /// `font-weight` value.
    FontWeight(FontWeight),
    /// `gradientUnits` value.
    GradientUnits(GradientUnits),
    /// `<length>` value.
    Length(Length),
    /// `stroke-linecap` value.
    LineCap(LineCap),
    /// `stroke-linejoin` value.
    LineJoin(LineJoin),
    /// `<number>` value.
    Number(f64),
    /// `<paint>` value.
    Paint(Paint),
    /// Path data.
    ///
    /// The path grammar itself is outside this crate; the payload is
    /// whatever an external path parser produced.
    Path(kurbo::BezPath),
    /// `points` attribute value.
    Points(Points),
    /// `preserveAspectRatio` value.
    PreserveAspectRatio(AspectRatio),
    /// `spreadMethod` value.
    SpreadMethod(SpreadMethod),
    /// `stop-color` value.
    StopColor(StopColor),
    /// A plain string value.
    String(String),
    /// `transform` value.
    Transform(Transform),
    /// `viewBox` value.
    ViewBox(ViewBox),
    /// `visibility` value.
    Visibility(Visibility),
}

macro_rules! impl_from {
    ($from:ty, $variant:ident) => {
        impl From<$from> for Value {
            #[inline]
            fn from(value: $from) -> Self {
                Value::$variant(value)
            }
        }
    };
}

impl_from!(Clip, Clip);
impl_from!(Color, Color);
impl_from!(DashArray, DashArray);
impl_from!(FillRule, FillRule);
impl_from!(FontFamily, FontFamily);
impl_from!(FontSize, FontSize);
impl_from!(FontStyle, FontStyle);
impl_from!(FontWeight, FontWeight);
impl_from!(GradientUnits, GradientUnits);
impl_from!(Length, Length);
impl_from!(LineCap, LineCap);
impl_from!(LineJoin, LineJoin);
impl_from!(f64, Number);
impl_from!(Paint, Paint);
impl_from!(kurbo::BezPath, Path);
impl_from!(Points, Points);
impl_from!(AspectRatio, PreserveAspectRatio);
impl_from!(SpreadMethod, SpreadMethod);
impl_from!(StopColor, StopColor);
impl_from!(String, String);
impl_from!(Transform, Transform);
impl_from!(ViewBox, ViewBox);
impl_from!(Visibility, Visibility);
