use std::sync::OnceLock;

use regex::Regex;

use super::{Extractor, SpanMatch, url};
use crate::parsing::inline::types::FragmentKind;

/// Image syntax `![alt](url)`. The alt text may be empty.
pub struct Image;

impl Image {
    fn regex() -> &'static Regex {
        static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
        IMAGE_REGEX.get_or_init(|| {
            Regex::new(&format!(r"!\[([^\[\]]*)\]\(({})\)", url::PATTERN))
                .expect("Invalid image regex")
        })
    }
}

impl Extractor for Image {
    const KIND: FragmentKind = FragmentKind::Image;

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
