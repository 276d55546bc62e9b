use crate::stream::Stream;
use crate::Error;

impl<'a> Stream<'a> {
    /// Parses a [`<FuncIRI>`]: `url(#id)`.
    ///
    /// Only local fragment references are supported; absolute IRIs fail.
    ///
    /// [`<FuncIRI>`]: https://www.w3.org/TR/SVG11/types.html#DataTypeFuncIRI
    pub fn parse_func_iri(&mut self) -> Result<&'a str, Error> {
        self.parse_parenthesized(Some(b"url"), |s| {
            s.consume_byte(b'#')?;
            let link = s.consume_bytes(|c| c != b' ' && c != b')');
            if link.is_empty() {
                return Err(Error);
            }

            Ok(link)
        })
    }
}

#[rustfmt::skip]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_func_iri_1() {
        let mut s = Stream::from("url(#id)");
        assert_eq!(s.parse_func_iri().unwrap(), "id");
        assert!(s.at_end());
    }

    #[test]
    fn parse_func_iri_2() {
        let mut s = Stream::from("    url(    #id    )   ");
        assert_eq!(s.parse_func_iri().unwrap(), "id");
        assert_eq!(s.slice_tail(), "   ");
    }

    #[test]
    fn parse_func_iri_3() {
        let mut s = Stream::from("url(#1)");
        assert_eq!(s.parse_func_iri().unwrap(), "1");
    }

    #[test]
    fn parse_err_func_iri_1() {
        // not a local fragment
        let mut s = Stream::from("url(http://example.com)");
        assert!(s.parse_func_iri().is_err());
    }

    #[test]
    fn parse_err_func_iri_2() {
        let mut s = Stream::from("url(#)");
        assert!(s.parse_func_iri().is_err());
    }

    #[test]
    fn parse_err_func_iri_3() {
        let mut s = Stream::from("url(# id)");
        assert!(s.parse_func_iri().is_err());
    }
}
