//! Minimal CSS selector matching for [`MemoryDom`](super::MemoryDom).
//!
//! Supported: type (`img`), id (`#x`), class (`.x`), attribute presence
//! (`[data-src]`), equality (`[type="button"]`), prefix (`[href^="#"]`),
//! and the descendant combinator (`.nav-links a`). That covers every
//! selector in the default config.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectorError {
    #[error("Empty selector")]
    Empty,
    #[error("Unterminated attribute in `{0}`")]
    UnterminatedAttribute(String),
    #[error("Unsupported selector syntax `{0}`")]
    Unsupported(String),
}

/// Element view needed for matching.
pub(crate) trait Matchable {
    fn tag(&self) -> &str;
    fn attr(&self, name: &str) -> Option<&str>;
    fn has_class(&self, class: &str) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum AttrTest {
    Present,
    Equals(String),
    Prefix(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<(String, AttrTest)>,
}

impl Compound {
    fn parse(src: &str) -> Result<Self, SelectorError> {
        let mut out = Compound::default();
        let mut rest = src;

        let tag_len = rest
            .find(|c: char| c == '.' || c == '#' || c == '[')
            .unwrap_or(rest.len());
        if tag_len > 0 {
            let tag = &rest[..tag_len];
            if tag != "*" && !is_ident(tag) {
                return Err(SelectorError::Unsupported(src.to_string()));
            }
            if tag != "*" {
                out.tag = Some(tag.to_ascii_lowercase());
            }
            rest = &rest[tag_len..];
        }

        while let Some(c) = rest.chars().next() {
            match c {
                '.' | '#' => {
                    let body = &rest[1..];
                    let end = body
                        .find(|c: char| c == '.' || c == '#' || c == '[')
                        .unwrap_or(body.len());
                    if end == 0 || !is_ident(&body[..end]) {
                        return Err(SelectorError::Unsupported(src.to_string()));
                    }
                    let name = body[..end].to_string();
                    if c == '.' {
                        out.classes.push(name);
                    } else {
                        out.id = Some(name);
                    }
                    rest = &body[end..];
                }
                '[' => {
                    let close = rest
                        .find(']')
                        .ok_or_else(|| SelectorError::UnterminatedAttribute(src.to_string()))?;
                    out.attrs.push(parse_attr(&rest[1..close], src)?);
                    rest = &rest[close + 1..];
                }
                _ => return Err(SelectorError::Unsupported(src.to_string())),
            }
        }
        Ok(out)
    }

    fn matches<M: Matchable + ?Sized>(&self, el: &M) -> bool {
        if let Some(tag) = &self.tag {
            if !el.tag().eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if el.attr("id") != Some(id.as_str()) {
                return false;
            }
        }
        if !self.classes.iter().all(|c| el.has_class(c)) {
            return false;
        }
        self.attrs.iter().all(|(name, test)| match (el.attr(name), test) {
            (None, _) => false,
            (Some(_), AttrTest::Present) => true,
            (Some(v), AttrTest::Equals(want)) => v == want,
            (Some(v), AttrTest::Prefix(want)) => v.starts_with(want.as_str()),
        })
    }
}

fn is_ident(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn parse_attr(body: &str, src: &str) -> Result<(String, AttrTest), SelectorError> {
    let unquote = |v: &str| v.trim().trim_matches(|c| c == '"' || c == '\'').to_string();
    if let Some((name, value)) = body.split_once("^=") {
        return Ok((name.trim().to_string(), AttrTest::Prefix(unquote(value))));
    }
    if let Some((name, value)) = body.split_once('=') {
        if name.ends_with(['~', '|', '$', '*']) {
            return Err(SelectorError::Unsupported(src.to_string()));
        }
        return Ok((name.trim().to_string(), AttrTest::Equals(unquote(value))));
    }
    let name = body.trim();
    if name.is_empty() {
        return Err(SelectorError::Unsupported(src.to_string()));
    }
    Ok((name.to_string(), AttrTest::Present))
}

/// A parsed selector: compounds joined by descendant combinators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    compounds: Vec<Compound>,
}

impl Selector {
    pub fn parse(src: &str) -> Result<Self, SelectorError> {
        let src = src.trim();
        if src.is_empty() {
            return Err(SelectorError::Empty);
        }
        let compounds = split_compounds(src)
            .into_iter()
            .map(Compound::parse)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { compounds })
    }

    /// Match `el`, whose ancestors are yielded nearest first.
    pub(crate) fn matches<'a, M, I>(&self, el: &M, ancestors: I) -> bool
    where
        M: Matchable + ?Sized + 'a,
        I: IntoIterator<Item = &'a M>,
    {
        let Some((last, rest)) = self.compounds.split_last() else {
            return false;
        };
        if !last.matches(el) {
            return false;
        }
        let mut pending = rest.iter().rev().peekable();
        for ancestor in ancestors {
            match pending.peek() {
                Some(compound) if compound.matches(ancestor) => {
                    pending.next();
                }
                Some(_) => {}
                None => break,
            }
        }
        pending.peek().is_none()
    }
}

/// Split on whitespace outside attribute brackets.
fn split_compounds(src: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = None;
    for (i, c) in src.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            c if c.is_whitespace() && depth == 0 => {
                if let Some(s) = start.take() {
                    parts.push(&src[s..i]);
                }
                continue;
            }
            _ => {}
        }
        if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        parts.push(&src[s..]);
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    struct El {
        tag: &'static str,
        classes: Vec<&'static str>,
        attrs: BTreeMap<&'static str, &'static str>,
    }

    impl Matchable for El {
        fn tag(&self) -> &str { self.tag }
        fn attr(&self, name: &str) -> Option<&str> { self.attrs.get(name).copied() }
        fn has_class(&self, class: &str) -> bool { self.classes.iter().any(|c| *c == class) }
    }

    fn el(tag: &'static str, classes: &[&'static str], attrs: &[(&'static str, &'static str)]) -> El {
        El { tag, classes: classes.to_vec(), attrs: attrs.iter().copied().collect() }
    }

    #[test]
    fn compound_parts() {
        let sel = Selector::parse("a.btn[href^=\"#\"]").unwrap();
        assert!(sel.matches(&el("a", &["btn"], &[("href", "#about")]), []));
        assert!(!sel.matches(&el("a", &["btn"], &[("href", "/about")]), []));
        assert!(!sel.matches(&el("button", &["btn"], &[("href", "#x")]), []));
    }

    #[test]
    fn id_and_presence() {
        let by_id = Selector::parse("#projectModal").unwrap();
        assert!(by_id.matches(&el("div", &[], &[("id", "projectModal")]), []));
        let lazy = Selector::parse("img[data-src]").unwrap();
        assert!(lazy.matches(&el("img", &["lazy"], &[("data-src", "a.png")]), []));
        assert!(!lazy.matches(&el("img", &["lazy"], &[]), []));
    }

    #[test]
    fn descendant_combinator() {
        let sel = Selector::parse(".nav-links a").unwrap();
        let link = el("a", &[], &[("href", "#work")]);
        let li = el("li", &[], &[]);
        let nav = el("ul", &["nav-links"], &[]);
        let other = el("div", &["footer"], &[]);
        assert!(sel.matches(&link, [&li, &nav]));
        assert!(!sel.matches(&link, [&li, &other]));
        assert!(!sel.matches(&link, []));
    }

    #[test]
    fn rejects_unsupported() {
        assert_eq!(Selector::parse("  "), Err(SelectorError::Empty));
        assert!(matches!(Selector::parse("ul > li"), Err(SelectorError::Unsupported(_))));
        assert!(matches!(Selector::parse("img[data-src"), Err(SelectorError::UnterminatedAttribute(_))));
    }
}
