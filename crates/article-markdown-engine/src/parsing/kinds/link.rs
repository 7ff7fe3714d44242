use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::{construct::Hit, cursor::Cursor};

/// `[title](url)`: the title may not contain brackets, the url ends at the
/// first `)` on the same line. Both may be empty.
static LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[(?<title>[^\[\]]*)\]\((?<url>[^\r\n]*?)\)").expect("link pattern is valid")
});

pub struct Link;

impl Link {
    pub const OPEN: char = '[';

    pub fn parse(cur: &Cursor<'_>) -> Option<Hit> {
        if cur.peek() != Some(Self::OPEN) {
            return None;
        }
        let caps = LINK.captures(cur.rest())?;
        let (title, url) = (caps.name("title")?, caps.name("url")?);
        let at = cur.i;
        Some(Hit::Link {
            title: at + title.start()..at + title.end(),
            url: at + url.start()..at + url.end(),
            end: at + caps.get(0)?.end(),
        })
    }
}
