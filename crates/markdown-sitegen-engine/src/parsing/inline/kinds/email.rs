use std::sync::OnceLock;

use regex::Regex;

use super::{Extractor, SpanMatch};
use crate::parsing::inline::types::FragmentKind;

/// Angle-bracketed address `<local@domain>`, linked through `mailto:`.
pub struct Email;

impl Email {
    pub const SCHEME: &'static str = "mailto:";

    fn regex() -> &'static Regex {
        static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
        EMAIL_REGEX.get_or_init(|| {
            Regex::new(r"<([A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)+)>")
                .expect("Invalid email regex")
        })
    }
}

impl Extractor for Email {
    const KIND: FragmentKind = FragmentKind::Email;

    fn find_all(text: &str) -> Vec<SpanMatch> {
        Self::regex()
            .captures_iter(text)
            .filter_map(|caps| {
                let full = caps.get(0)?;
                let address = &caps[1];
                Some(SpanMatch {
                    range: full.range(),
                    text: address.to_string(),
                    url: format!("{}{address}", Self::SCHEME),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn finds_addresses() {
        let text = "This is text with a <john.doe@gmail.com> and <foo.bar_baz@companyx.co.uk>.";
        let found: Vec<_> = Email::find_all(text)
            .into_iter()
            .map(|m| (m.text, m.url, text[m.range].to_string()))
            .collect();

        assert_eq!(
            found,
            vec![
                (
                    "john.doe@gmail.com".to_string(),
                    "mailto:john.doe@gmail.com".to_string(),
                    "<john.doe@gmail.com>".to_string()
                ),
                (
                    "foo.bar_baz@companyx.co.uk".to_string(),
                    "mailto:foo.bar_baz@companyx.co.uk".to_string(),
                    "<foo.bar_baz@companyx.co.uk>".to_string()
                ),
            ]
        );
    }

    #[test]
    fn ignores_non_addresses() {
        assert!(Email::find_all("<div>").is_empty());
        assert!(Email::find_all("<user@localhost>").is_empty());
        assert!(Email::find_all("john.doe@gmail.com").is_empty());
    }
}
