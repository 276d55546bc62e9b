use crate::stream::Stream;
use crate::Error;

/// Representation of the `clip-path` property value.
///
/// Basic shapes from CSS Masking are not supported, only element references.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Clip {
    /// The `none` value.
    None,
    /// The `inherit` value.
    Inherit,
    /// A local `url(#id)` reference to a `clipPath` element.
    FuncIri(String),
}

impl std::str::FromStr for Clip {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Error> {
        let mut s = Stream::from(text);
        s.skip_spaces();

        let clip = if let Ok(keyword) = s.parse_enum_table(KEYWORDS) {
            keyword
        } else {
            let link = s.parse_func_iri()?;
            Clip::FuncIri(link.to_string())
        };

        s.skip_spaces();
        if !s.at_end() {
            return Err(Error);
        }

        Ok(clip)
    }
}

const KEYWORDS: &[(&str, Clip)] = &[("none", Clip::None), ("inherit", Clip::Inherit)];
