use nom::{
    IResult, Parser,
    bytes::complete::{tag, take_till},
    character::complete::char,
    combinator::{map_opt, rest},
    sequence::{preceded, separated_pair},
};

/// For parsing the username out of a profile header line, e.g. `[Profile: alice]`
///
/// The username is everything between the opening tag and the final `]` of the line, so a
/// username which itself contains `]` will keep its inner brackets.
pub fn parse_profile_header(line: &str) -> IResult<&str, &str> {
    preceded(
        tag("[Profile: "),
        map_opt(rest, |name: &str| name.strip_suffix(']')),
    )
    .parse(line)
}

/// For parsing a `name=path` library line. Splits on the first `=`; the path runs to the end
/// of the line, so paths containing `=` stay intact.
pub fn parse_library_line(line: &str) -> IResult<&str, (&str, &str)> {
    separated_pair(take_till(|c| c == '='), char('='), rest).parse(line)
}

#[cfg(test)]
pub mod test {
    use test_case::test_case;

    use super::*;

    #[test_case("[Profile: alice]", "alice")]
    #[test_case("[Profile: ]", "")]
    #[test_case("[Profile: a]b]", "a]b")]
    #[test_case("[Profile: two words]", "two words")]
    fn test_parse_profile_header(line: &str, expected: &str) {
        assert_eq!(parse_profile_header(line), Ok(("", expected)));
    }

    #[test_case("[Profile: alice"; "missing closing bracket")]
    #[test_case("[profile: alice]"; "wrong case")]
    #[test_case("Profile: alice]"; "missing opening bracket")]
    #[test_case(""; "empty line")]
    fn test_parse_profile_header_rejects(line: &str) {
        assert!(parse_profile_header(line).is_err());
    }

    #[test_case("Chess=/bin/chess", ("Chess", "/bin/chess"))]
    #[test_case("a=b=c", ("a", "b=c"); "splits on first equals")]
    #[test_case("=path", ("", "path"); "empty name")]
    #[test_case("name=", ("name", ""); "empty path")]
    fn test_parse_library_line(line: &str, expected: (&str, &str)) {
        assert_eq!(parse_library_line(line), Ok(("", expected)));
    }

    #[test]
    fn test_parse_library_line_requires_equals() {
        assert!(parse_library_line("no equals here").is_err());
    }
}
