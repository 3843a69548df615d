use std::sync::OnceLock;

use regex::Regex;

use super::{Extractor, SpanMatch, url};
use crate::parsing::inline::types::FragmentKind;

/// Link syntax `[text](url)`.
///
/// Only ever run on text that image extraction already passed over, so the
/// `[alt](url)` tail of an image is never taken for a link.
pub struct Link;

impl Link {
    fn regex() -> &'static Regex {
        static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
        LINK_REGEX.get_or_init(|| {
            Regex::new(&format!(r"\[([^\[\]]+)\]\(({})\)", url::PATTERN))
                .expect("Invalid link regex")
        })
    }
}

impl Extractor for Link {
    const KIND: FragmentKind = FragmentKind::Link;

    fn find_all(text: &str) -> Vec<SpanMatch> {
        Self::regex()
            .captures_iter(text)
            .filter_map(|caps| {
                let full = caps.get(0)?;
                Some(SpanMatch {
                    range: full.range(),
                    text: caps[1].to_string(),
                    url: caps[2].to_string(),
                })
            })
            .collect()
    }
}
