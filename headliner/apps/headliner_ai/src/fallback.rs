//! Rule-based rewrites used when generation is unavailable.
//!
//! Each style has four phrasings; which one a headline gets is picked from a
//! SHA-256 of the text, so the same headline always maps to the same phrasing,
//! across requests and across restarts.

use sha2::{Digest, Sha256};

use crate::style::Style;

pub const TEMPLATE_COUNT: usize = 4;

pub fn fallback_rewrite(text: &str, style: Style) -> String {
    let k = key_phrase(text);
    let variant = template_index(text);

    match (style, variant) {
        (Style::Formal, 0) => format!("Comprehensive Analysis of {k}"),
        (Style::Formal, 1) => format!("Strategic Overview: {k} Developments"),
        (Style::Formal, 2) => format!("Professional Assessment of {k}"),
        (Style::Formal, _) => format!("Formal Review: {k} Implications"),

        (Style::Casual, 0) => format!("Hey! Check this out about {k}"),
        (Style::Casual, 1) => format!("Wow! {text} - pretty cool, right?"),
        (Style::Casual, 2) => format!("You'll never believe this: {k} update!"),
        (Style::Casual, _) => format!("Quick news: {k} is making waves!"),

        (Style::Concise, 0) => format!("{k} Update"),
        (Style::Concise, 1) => format!("{k} Developments"),
        (Style::Concise, 2) => format!("{k} News"),
        (Style::Concise, _) => format!("{k} Report"),
    }
}

/// First three words, or the whole text when it has three or fewer.
pub fn key_phrase(text: &str) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() > 3 {
        words[..3].join(" ")
    } else {
        text.to_string()
    }
}

/// Stable template slot in `0..TEMPLATE_COUNT` for `text`.
pub fn template_index(text: &str) -> usize {
    let digest = Sha256::digest(text.as_bytes());
    let mut head = [0u8; 8];
    head.copy_from_slice(&digest[..8]);
    (u64::from_be_bytes(head) % TEMPLATE_COUNT as u64) as usize
}
