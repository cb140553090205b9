use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters that can't appear unescaped in a single IRI path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Appends free text (e.g. an instrument name) to `base` as one path segment.
pub fn mint_iri<T>(base: &str, segment: T) -> String
where
    T: AsRef<str>,
{
    format!(
        "{}{}",
        base,
        utf8_percent_encode(segment.as_ref().trim(), SEGMENT)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mint_iri_escapes_spaces_and_slashes() {
        assert_eq!(
            mint_iri("http://pid.geoscience.gov.au/instrument/", "Scintrex CS2"),
            "http://pid.geoscience.gov.au/instrument/Scintrex%20CS2"
        );
        assert_eq!(
            mint_iri("http://pid.geoscience.gov.au/platform/", " Plane/Heli "),
            "http://pid.geoscience.gov.au/platform/Plane%2FHeli"
        );
    }
}
