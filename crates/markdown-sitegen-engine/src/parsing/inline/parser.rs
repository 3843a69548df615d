use super::{
    kinds::{Delimiter, Email, Extractor, Image, Link},
    types::InlineFragment,
};

/// Tokenizes a run of inline text into typed fragments.
///
/// # Processing Order
/// 1. images, 2. links, 3. emails, then the paired delimiters bold, italic
/// and code. Each step only touches fragments that are still plain, so a
/// link's text is never re-read as emphasis.
///
/// # Returns
/// At least one fragment; empty input gives a single empty plain fragment.
/// Unpaired delimiters are left in the text as written.
pub fn tokenize(text: &str) -> Vec<InlineFragment> {
    let mut fragments = vec![InlineFragment::plain(text)];
    fragments = split_extracted::<Image>(fragments);
    fragments = split_extracted::<Link>(fragments);
    fragments = split_extracted::<Email>(fragments);
    for delimiter in Delimiter::ORDER {
        fragments = split_delimiter(fragments, delimiter);
    }
    // Markers with nothing between them leave no text at all
    if fragments.is_empty() {
        fragments.push(InlineFragment::plain(""));
    }
    log::trace!("tokenized {text:?} into {} fragments", fragments.len());
    fragments
}

/// Lifts every match of `E` out of the plain fragments.
///
/// Text around a match stays plain; empty surrounding text is dropped.
/// A fragment without matches passes through unchanged.
pub fn split_extracted<E: Extractor>(fragments: Vec<InlineFragment>) -> Vec<InlineFragment> {
    let mut out = Vec::with_capacity(fragments.len());
    for fragment in fragments {
        if !fragment.is_plain() {
            out.push(fragment);
            continue;
        }
        let matches = E::find_all(&fragment.text);
        if matches.is_empty() {
            out.push(fragment);
            continue;
        }

        let mut rest_start = 0;
        for m in matches {
            push_plain(&mut out, &fragment.text[rest_start..m.range.start]);
            out.push(InlineFragment::with_url(m.text, E::KIND, m.url));
            rest_start = m.range.end;
        }
        push_plain(&mut out, &fragment.text[rest_start..]);
    }
    out
}

/// Splits plain fragments on a paired delimiter.
///
/// Odd-numbered parts take the delimiter's kind. Fragments with no marker
/// or an unpaired one are kept whole.
pub fn split_delimiter(fragments: Vec<InlineFragment>, delimiter: Delimiter) -> Vec<InlineFragment> {
    let mut out = Vec::with_capacity(fragments.len());
    for fragment in fragments {
        let parts = if fragment.is_plain() {
            delimiter.split(&fragment.text)
        } else {
            None
        };
        let Some(parts) = parts else {
            out.push(fragment);
            continue;
        };

        for (i, part) in parts.into_iter().enumerate() {
            if part.is_empty() {
                continue;
            }
            if i % 2 == 0 {
                out.push(InlineFragment::plain(part));
            } else {
                out.push(InlineFragment::new(part, delimiter.kind));
            }
        }
    }
    out
}

fn push_plain(out: &mut Vec<InlineFragment>, text: &str) {
    if !text.is_empty() {
        out.push(InlineFragment::plain(text));
    }
}
