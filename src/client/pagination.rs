//! `link` response-header parsing for GitHub's pagination scheme.

use reqwest::header::HeaderMap;

/// The absolute URL of the next page, from the `link` response header.
pub(crate) fn next_page_url(headers: &HeaderMap) -> Option<String> {
    let link = headers.get("link")?.to_str().ok()?;
    parse_next_link(link)
}

/// Pull the `rel="next"` target out of a `link` header value.
///
/// The header is a comma-separated list of `<url>; rel="kind"` entries.
/// Entries that do not parse are skipped rather than treated as errors: a
/// malformed or absent link simply ends pagination.
fn parse_next_link(value: &str) -> Option<String> {
    for entry in value.split(',') {
        let mut parts = entry.split(';');
        let url = parts.next().unwrap_or("").trim();
        if !url.starts_with('<') || !url.ends_with('>') {
            continue;
        }
        let is_next = parts.any(|param| matches!(param.trim(), r#"rel="next""# | "rel=next"));
        if is_next {
            return Some(url[1..url.len() - 1].to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_next_from_a_full_github_header() {
        let value = concat!(
            "<https://api.github.com/user/teams?per_page=100&page=2>; rel=\"next\", ",
            "<https://api.github.com/user/teams?per_page=100&page=5>; rel=\"last\""
        );
        assert_eq!(
            parse_next_link(value).as_deref(),
            Some("https://api.github.com/user/teams?per_page=100&page=2")
        );
    }

    #[test]
    fn next_is_found_regardless_of_position() {
        let value = concat!(
            "<https://api.github.com/user/orgs?page=1>; rel=\"prev\", ",
            "<https://api.github.com/user/orgs?page=3>; rel=\"next\""
        );
        assert_eq!(
            parse_next_link(value).as_deref(),
            Some("https://api.github.com/user/orgs?page=3")
        );
    }

    #[test]
    fn unquoted_rel_is_accepted() {
        let value = "<https://ghe.internal/api/v3/user/teams?page=2>; rel=next";
        assert_eq!(
            parse_next_link(value).as_deref(),
            Some("https://ghe.internal/api/v3/user/teams?page=2")
        );
    }

    #[test]
    fn extra_params_do_not_hide_next() {
        let value = "<https://api.github.com/user/orgs?page=2>; per_page=1; rel=\"next\"";
        assert_eq!(
            parse_next_link(value).as_deref(),
            Some("https://api.github.com/user/orgs?page=2")
        );
    }

    #[test]
    fn headers_without_next_end_pagination() {
        assert_eq!(parse_next_link(""), None);
        assert_eq!(
            parse_next_link("<https://api.github.com/user/orgs?page=1>; rel=\"first\""),
            None
        );
        assert_eq!(parse_next_link("not a link header"), None);
    }

    #[test]
    fn missing_brackets_are_skipped() {
        let value = "https://api.github.com/user/orgs?page=2; rel=\"next\"";
        assert_eq!(parse_next_link(value), None);
    }

    #[test]
    fn reads_the_link_header_from_a_header_map() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "link",
            "<https://api.github.com/user/orgs?page=2>; rel=\"next\""
                .parse()
                .unwrap(),
        );
        assert_eq!(
            next_page_url(&headers).as_deref(),
            Some("https://api.github.com/user/orgs?page=2")
        );
        assert_eq!(next_page_url(&HeaderMap::new()), None);
    }
}
