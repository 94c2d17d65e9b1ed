use crate::{
    models::{Article, Properties},
    parsing::{ParseOptions, inline},
};

use super::{
    classify::{LineClass, OutlineLineClassifier},
    emit, indent,
    kinds::{CodeFence, Extraction, FenceEvent, FenceTracker, PropertyBlock},
};

/// Where the walker is in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkState {
    /// Looking for the next marker line.
    Scanning,
    /// The cursor sits on a marker line whose descendants are collected next.
    InBlock,
    /// End of input or end-of-document sentinel reached.
    Done,
}

/// Walks a document line by line and yields one [`Article`] per marker block.
///
/// A single cursor moves forward through the lines; blocks never nest or
/// overlap, and each block is anchored at its own marker line's indentation.
pub struct BlockWalker<'a> {
    lines: Vec<LineClass<'a>>,
    options: &'a ParseOptions,
    source_file: &'a str,
    cursor: usize,
    fence: FenceTracker,
    state: WalkState,
}

impl<'a> BlockWalker<'a> {
    pub fn new(text: &'a str, source_file: &'a str, options: &'a ParseOptions) -> Self {
        let classifier = OutlineLineClassifier;
        Self {
            lines: text.lines().map(|l| classifier.classify(l)).collect(),
            options,
            source_file,
            cursor: 0,
            fence: FenceTracker::new(),
            state: WalkState::Scanning,
        }
    }

    pub fn state(&self) -> WalkState {
        self.state
    }

    fn is_end_of_document(&self, line: &LineClass<'_>) -> bool {
        self.options
            .end_token
            .as_deref()
            .is_some_and(|token| !token.is_empty() && line.raw.contains(token))
    }

    fn is_marker_line(&self, line: &LineClass<'_>) -> bool {
        let marker = self.options.marker_token.as_str();
        !marker.is_empty()
            && !line.is_property_line
            && line.raw.contains(marker)
            && inline::text_outside_code(line.raw).contains(marker)
    }

    fn title_of(&self, line: &LineClass<'_>) -> String {
        line.content
            .replace(self.options.marker_token.as_str(), "")
            .trim()
            .trim_start_matches('#')
            .trim()
            .to_string()
    }

    fn body_text(&self, content: &str) -> String {
        if self.options.sanitize_links {
            inline::sanitize_links(content)
        } else {
            content.to_string()
        }
    }

    /// Advances to the next marker line outside any fence.
    fn scan(&mut self) {
        while let Some(&line) = self.lines.get(self.cursor) {
            if self.is_end_of_document(&line) {
                self.state = WalkState::Done;
                return;
            }
            if self.fence.observe(&line, 0) == FenceEvent::Outline && self.is_marker_line(&line) {
                self.state = WalkState::InBlock;
                return;
            }
            self.cursor += 1;
        }
        self.state = WalkState::Done;
    }

    /// Collects the block anchored at the cursor's marker line.
    ///
    /// Fence delimiters are observed before any boundary check, so a fence
    /// at any depth is taken in whole. Outside a fence the block stops at the
    /// first line indented no deeper than the marker, or at another marker
    /// line; that line is left for the next scan.
    fn walk_block(&mut self) -> Article {
        let anchor = self.lines[self.cursor];
        let anchor_width = anchor.indent_width;
        let title = self.title_of(&anchor);
        let mut properties = Properties::new();
        let mut body: Vec<String> = Vec::new();

        self.cursor += 1;
        self.state = WalkState::Scanning;

        while let Some(&line) = self.lines.get(self.cursor) {
            if self.is_end_of_document(&line) {
                self.state = WalkState::Done;
                break;
            }
            if line.is_blank {
                if self.fence.is_inside() {
                    body.push(String::new());
                }
                self.cursor += 1;
                continue;
            }
            let level = indent::relative_level(line.indent, anchor_width);
            match self.fence.observe(&line, level) {
                FenceEvent::Opened => body.push(emit::fence_opener(level, &line)),
                FenceEvent::Code {
                    indent_width,
                    level,
                } => body.push(emit::fence_line(
                    level,
                    CodeFence::strip_baseline(line.raw, indent_width),
                )),
                FenceEvent::Closed { level } => body.push(emit::fence_closer(level)),
                FenceEvent::Outline => {
                    // Blocks never nest: a deeper marker starts the next article.
                    if line.indent_width <= anchor_width || self.is_marker_line(&line) {
                        break;
                    }
                    if PropertyBlock::opens(line.content, &self.options.property_label) {
                        let extracted = PropertyBlock::extract(
                            &self.lines,
                            self.cursor,
                            &mut properties,
                            |l| self.is_end_of_document(l),
                        );
                        match extracted {
                            Extraction::Resume(next) => {
                                self.cursor = next;
                                continue;
                            }
                            Extraction::EndOfDocument => {
                                self.state = WalkState::Done;
                                break;
                            }
                        }
                    }
                    if !line.is_property_line {
                        let content = self.body_text(line.content);
                        body.push(emit::outline_line(level, line.has_bullet, &content));
                    }
                }
            }
            self.cursor += 1;
        }

        // An unterminated fence keeps trailing blank lines; drop them.
        while body.last().is_some_and(String::is_empty) {
            body.pop();
        }

        log::debug!(
            "extracted block {title:?} from {} ({} body lines, {} properties)",
            self.source_file,
            body.len(),
            properties.len()
        );

        Article::block(title, properties, body.join("\n"), self.source_file)
    }
}

impl Iterator for BlockWalker<'_> {
    type Item = Article;

    fn next(&mut self) -> Option<Article> {
        loop {
            match self.state {
                WalkState::Scanning => self.scan(),
                WalkState::InBlock => return Some(self.walk_block()),
                WalkState::Done => return None,
            }
        }
    }
}
