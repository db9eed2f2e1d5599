//! Porcelain blame parser.
//!
//! Decodes the output of `git blame --porcelain` block by block. Each group of
//! lines starts with a header `<hash> <orig> <final> <count>`. The first group
//! of a commit is followed by `key value` metadata up to a `filename` line;
//! later groups of the same commit carry only the header. Every line of a group
//! occupies two stream positions (a header-ish line and a tab-prefixed content
//! line), so a group of `count` lines spans `count * 2` positions after the
//! line that precedes its first content line.
//!
//! Malformed input ends the parse early. Blocks decoded before the bad one are
//! kept.

use crate::git::registry::CommitRegistry;
use crate::models::Attribution;

/// Which blame field names the programmer credited for a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Identity {
    #[default]
    Author,
    Committer,
}

impl Identity {
    pub fn from_use_committer(use_committer: bool) -> Self {
        if use_committer {
            Identity::Committer
        } else {
            Identity::Author
        }
    }
}

/// Parse a whole porcelain stream into one attribution per header block.
pub fn parse_porcelain(stream: &str, identity: Identity) -> Vec<Attribution> {
    BlameBlocks::new(stream, identity).collect()
}

struct Header<'a> {
    hash: &'a str,
    lines: usize,
}

fn parse_header(line: &str) -> Option<Header<'_>> {
    let mut fields = line.split_whitespace();
    let hash = fields.next()?;
    let _orig_line = fields.next()?;
    let _final_line = fields.next()?;
    let lines = fields.next()?.parse().ok()?;
    Some(Header { hash, lines })
}

/// Metadata of a commit's first group.
#[derive(Default)]
struct Metadata<'a> {
    author: Option<&'a str>,
    committer: Option<&'a str>,
    /// Stream index of the `filename` line
    sentinel: usize,
}

impl<'a> Metadata<'a> {
    fn name(&self, identity: Identity) -> Option<&'a str> {
        match identity {
            Identity::Author => self.author,
            Identity::Committer => self.committer,
        }
    }
}

/// Iterator over the header blocks of one file's porcelain stream.
pub struct BlameBlocks<'a> {
    lines: Vec<&'a str>,
    cursor: usize,
    identity: Identity,
    registry: CommitRegistry,
    stopped_early: bool,
}

impl<'a> BlameBlocks<'a> {
    pub fn new(stream: &'a str, identity: Identity) -> Self {
        Self {
            lines: stream.lines().collect(),
            cursor: 0,
            identity,
            registry: CommitRegistry::new(),
            stopped_early: false,
        }
    }

    /// True once the parse ended on malformed input rather than end of stream.
    pub fn stopped_early(&self) -> bool {
        self.stopped_early
    }

    pub fn registry(&self) -> &CommitRegistry {
        &self.registry
    }

    fn read_metadata(&self, from: usize) -> Option<Metadata<'a>> {
        let mut metadata = Metadata::default();
        for (index, &line) in self.lines.iter().enumerate().skip(from) {
            if line.starts_with('\t') {
                // content reached without a filename line
                return None;
            }
            let (key, value) = line.split_once(' ').unwrap_or((line, ""));
            match key {
                "author" => metadata.author = Some(value),
                "committer" => metadata.committer = Some(value),
                "filename" => {
                    metadata.sentinel = index;
                    return Some(metadata);
                }
                _ => {}
            }
        }
        None
    }

    fn next_block(&mut self) -> Option<Attribution> {
        let start = self.cursor;
        let header = parse_header(self.lines[start])?;
        if header.lines == 0 {
            return None;
        }

        let (author, content_anchor, is_new) = match self.registry.get(header.hash) {
            Some(info) => (info.author.clone(), start, false),
            None => {
                let metadata = self.read_metadata(start + 1)?;
                let name = metadata.name(self.identity)?;
                (name.to_string(), metadata.sentinel, true)
            }
        };

        let end = content_anchor.checked_add(header.lines.checked_mul(2)?)?;
        if end > self.lines.len() {
            return None;
        }

        if is_new {
            self.registry.register(header.hash, &author, header.lines);
        }
        self.cursor = end;
        Some(Attribution::new(header.hash, author, header.lines))
    }
}

impl Iterator for BlameBlocks<'_> {
    type Item = Attribution;

    fn next(&mut self) -> Option<Attribution> {
        if self.stopped_early || self.cursor >= self.lines.len() {
            return None;
        }
        let block = self.next_block();
        if block.is_none() {
            self.stopped_early = true;
        }
        block
    }
}
