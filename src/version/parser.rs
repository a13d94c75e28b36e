//! Parsing of dotted version strings
//!
//! Accepts `"major.minor"` (patch becomes 0) or `"major.minor.patch"`. Each
//! component is an unsigned decimal number that fits in 32 bits.

use tracing::debug;

use crate::version::error::{Component, ParseError};
use crate::version::types::Version;

/// Parse a version string.
///
/// Examples:
/// - "2024.10" -> Version(2024, 10, 0)
/// - "2024.10.2" -> Version(2024, 10, 2)
/// - "1" -> `ParseError::MalformedFormat`
pub fn parse(text: &str) -> Result<Version, ParseError> {
    let parts: Vec<&str> = text.split('.').collect();

    let result = match parts.as_slice() {
        [_, _] => parse_major_minor(&parts).map(|(major, minor)| Version::new(major, minor, 0)),
        &[major, minor, patch] => parse_major_minor_patch([major, minor, patch]),
        _ => Err(ParseError::MalformedFormat),
    };

    result.inspect_err(|e| debug!("Failed to parse version '{}': {}", text, e))
}

/// Parse the major and minor components from the first two parts.
///
/// Takes two or three parts; a third part is ignored here.
pub fn parse_major_minor(parts: &[&str]) -> Result<(u32, u32), ParseError> {
    if !(2..=3).contains(&parts.len()) {
        return Err(ParseError::MalformedFormat);
    }

    let major = parse_component(parts[0], Component::Major)?;
    let minor = parse_component(parts[1], Component::Minor)?;
    Ok((major, minor))
}

/// Parse all three components.
///
/// A bad patch discards the major and minor that were already read.
pub fn parse_major_minor_patch(parts: [&str; 3]) -> Result<Version, ParseError> {
    let (major, minor) = parse_major_minor(&parts)?;
    let patch = parse_component(parts[2], Component::Patch)?;
    Ok(Version::new(major, minor, patch))
}

fn parse_component(text: &str, component: Component) -> Result<u32, ParseError> {
    let invalid = || ParseError::InvalidComponent {
        component,
        text: text.to_string(),
    };

    // `u32::from_str` accepts a leading '+'
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    text.parse().map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn invalid(component: Component, text: &str) -> ParseError {
        ParseError::InvalidComponent {
            component,
            text: text.to_string(),
        }
    }

    #[rstest]
    #[case(&[])]
    #[case(&["1"])]
    #[case(&["1", "2", "3", "4"])]
    fn parse_major_minor_rejects_wrong_part_count(#[case] parts: &[&str]) {
        assert_eq!(parse_major_minor(parts), Err(ParseError::MalformedFormat));
    }

    #[rstest]
    #[case(&["A", "2"], invalid(Component::Major, "A"))]
    #[case(&["1", "B"], invalid(Component::Minor, "B"))]
    #[case(&["", "2"], invalid(Component::Major, ""))]
    #[case(&["A", "B"], invalid(Component::Major, "A"))] // major is checked first
    fn parse_major_minor_reports_failing_component(
        #[case] parts: &[&str],
        #[case] expected: ParseError,
    ) {
        assert_eq!(parse_major_minor(parts), Err(expected));
    }

    #[rstest]
    #[case(&["1", "2"], (1, 2))]
    #[case(&["1", "2", "3"], (1, 2))] // third part ignored
    #[case(&["1", "2", "not a number"], (1, 2))]
    fn parse_major_minor_returns_components(#[case] parts: &[&str], #[case] expected: (u32, u32)) {
        assert_eq!(parse_major_minor(parts), Ok(expected));
    }

    #[test]
    fn parse_major_minor_patch_returns_all_components() {
        assert_eq!(
            parse_major_minor_patch(["1", "2", "3"]),
            Ok(Version::new(1, 2, 3))
        );
    }

    #[rstest]
    #[case(["1", "2", "C"], invalid(Component::Patch, "C"))]
    #[case(["1", "B", "3"], invalid(Component::Minor, "B"))]
    #[case(["A", "2", "3"], invalid(Component::Major, "A"))]
    fn parse_major_minor_patch_reports_failing_component(
        #[case] parts: [&str; 3],
        #[case] expected: ParseError,
    ) {
        assert_eq!(parse_major_minor_patch(parts), Err(expected));
    }

    #[rstest]
    #[case("2024.10", Version::new(2024, 10, 0))]
    #[case("2024.10.2", Version::new(2024, 10, 2))]
    #[case("0.0", Version::new(0, 0, 0))]
    #[case("007.08.09", Version::new(7, 8, 9))] // leading zeros are accepted on input
    #[case("4294967295.0.4294967295", Version::new(u32::MAX, 0, u32::MAX))]
    fn parse_accepts_two_and_three_parts(#[case] text: &str, #[case] expected: Version) {
        assert_eq!(parse(text), Ok(expected));
    }

    #[rstest]
    #[case("")]
    #[case("1")]
    #[case("no version string")]
    #[case("1.2.3.4")]
    #[case("...")]
    fn parse_rejects_wrong_part_count(#[case] text: &str) {
        assert_eq!(parse(text), Err(ParseError::MalformedFormat));
    }

    #[rstest]
    #[case("A.2", invalid(Component::Major, "A"))]
    #[case("1.B", invalid(Component::Minor, "B"))]
    #[case("2024.A", invalid(Component::Minor, "A"))]
    #[case("1.2.C", invalid(Component::Patch, "C"))]
    #[case("2024.10.C", invalid(Component::Patch, "C"))]
    #[case(".1", invalid(Component::Major, ""))]
    #[case("1.2.", invalid(Component::Patch, ""))]
    #[case("4294967296.0", invalid(Component::Major, "4294967296"))]
    #[case("-1.0", invalid(Component::Major, "-1"))]
    #[case("+1.0", invalid(Component::Major, "+1"))]
    #[case(" 1.0", invalid(Component::Major, " 1"))]
    #[case("1.0 ", invalid(Component::Minor, "0 "))]
    fn parse_rejects_invalid_component(#[case] text: &str, #[case] expected: ParseError) {
        assert_eq!(parse(text), Err(expected));
    }

    #[test]
    fn parse_error_messages_echo_the_offending_text() {
        assert_eq!(
            parse("1.2.C").unwrap_err().to_string(),
            "could not parse C as patch version"
        );
    }
}
