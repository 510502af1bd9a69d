//! Placeholder substitution for URL templates.

/// Replaces every occurrence of `placeholder` in `template` with `value`.
///
/// The value is inserted verbatim: no URL-encoding, trimming or validation.
/// An empty value still substitutes, leaving an empty segment. A template
/// without the placeholder, or an empty placeholder, is returned unchanged.
///
/// # Examples
///
/// ```
/// use osint_hub::utils::substitution::render;
///
/// assert_eq!(
///     render("https://crt.sh/?q=$domain", "$domain", "example.com"),
///     "https://crt.sh/?q=example.com"
/// );
/// assert_eq!(render("https://spydialer.com/", "$phone", "555"), "https://spydialer.com/");
/// ```
pub fn render(template: &str, placeholder: &str, value: &str) -> String {
    if placeholder.is_empty() {
        return template.to_string();
    }

    template.replace(placeholder, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_render_single_occurrence() {
        let url = render("https://github.com/$username", "$username", "alice");
        assert_eq!(url, "https://github.com/alice");
    }

    #[test]
    fn test_render_every_occurrence() {
        let url = render("https://$username.example/$username", "$username", "bob");
        assert_eq!(url, "https://bob.example/bob");
    }

    #[test]
    fn test_render_without_placeholder_is_unchanged() {
        let url = render("https://www.aperisolve.com/", "$image", "cat.png");
        assert_eq!(url, "https://www.aperisolve.com/");
    }

    #[test]
    fn test_render_empty_value_leaves_empty_segment() {
        let url = render("https://who.is/whois/$domain", "$domain", "");
        assert_eq!(url, "https://who.is/whois/");
    }

    #[test]
    fn test_render_does_not_encode() {
        let url = render("https://google.com/search?q=%22$email%22", "$email", "a b&c@d.e");
        assert_eq!(url, "https://google.com/search?q=%22a b&c@d.e%22");
    }

    #[test]
    fn test_render_does_not_trim() {
        let url = render("https://ok.ru/$username", "$username", "  x ");
        assert_eq!(url, "https://ok.ru/  x ");
    }

    #[test]
    fn test_render_empty_placeholder_is_unchanged() {
        assert_eq!(render("https://a.test/", "", "x"), "https://a.test/");
    }

    #[test]
    fn test_render_value_containing_placeholder_is_not_reexpanded() {
        let url = render("https://a.test/$ip", "$ip", "$ip$ip");
        assert_eq!(url, "https://a.test/$ip$ip");
    }

    proptest! {
        #[test]
        fn prop_render_without_placeholder_is_identity(
            template in "[a-z:/.?=]{0,40}",
            value in ".{0,20}",
        ) {
            prop_assert_eq!(render(&template, "$domain", &value), template);
        }

        #[test]
        fn prop_render_is_idempotent_when_value_is_placeholder_free(
            prefix in "[a-z:/.]{0,20}",
            suffix in "[a-z/?=]{0,20}",
            value in "[a-zA-Z0-9.@-]{0,20}",
        ) {
            let template = format!("{prefix}$username{suffix}$username");
            let once = render(&template, "$username", &value);
            let twice = render(&once, "$username", &value);
            prop_assert!(!once.contains("$username"));
            prop_assert_eq!(once, twice);
        }
    }
}
