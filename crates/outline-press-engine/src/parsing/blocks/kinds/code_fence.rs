use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::blocks::classify::LineClass;

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// A fence delimiter is a line whose content (bullet already stripped)
    /// starts with a backtick run. Backticks later in the line never count.
    pub fn is_delimiter(content: &str) -> bool {
        content.trim_start().starts_with(Self::BACKTICKS)
    }

    /// Lowercases the language tag right after the opening backticks.
    pub fn normalize_opener(content: &str) -> String {
        static LANG_REGEX: OnceLock<Regex> = OnceLock::new();
        let lang_regex = LANG_REGEX
            .get_or_init(|| Regex::new(r"^```([A-Za-z0-9_+\-]+)").expect("Invalid fence regex"));
        let content = content.trim();
        match lang_regex.captures(content).and_then(|c| c.get(1)) {
            Some(lang) => format!(
                "{}{}{}",
                Self::BACKTICKS,
                lang.as_str().to_lowercase(),
                &content[lang.end()..]
            ),
            None => content.to_string(),
        }
    }

    /// Strips up to `width` leading whitespace characters (the fence baseline)
    /// and trailing whitespace. Code text itself is never touched.
    pub fn strip_baseline(line: &str, width: usize) -> &str {
        let skip: usize = line
            .chars()
            .take(width)
            .take_while(|c| c.is_whitespace())
            .map(char::len_utf8)
            .sum();
        line[skip..].trim_end()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FenceState {
    #[default]
    Outside,
    Inside {
        /// Indentation of the opening fence line, the stripping baseline.
        indent_width: usize,
        /// Nesting level of the opening fence line.
        level: usize,
    },
}

/// What a line turned out to be once the fence state is taken into account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceEvent {
    Opened,
    Closed { level: usize },
    Code { indent_width: usize, level: usize },
    Outline,
}

/// Two-state toggle for fenced code regions.
#[derive(Debug, Default)]
pub struct FenceTracker {
    state: FenceState,
}

impl FenceTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FenceState {
        self.state
    }

    pub fn is_inside(&self) -> bool {
        matches!(self.state, FenceState::Inside { .. })
    }

    /// Feeds one line through the tracker. `level` is the line's nesting
    /// level, recorded when the line opens a fence.
    pub fn observe(&mut self, line: &LineClass<'_>, level: usize) -> FenceEvent {
        match (self.state, line.is_fence_delimiter) {
            (FenceState::Outside, true) => {
                self.state = FenceState::Inside {
                    indent_width: line.indent_width,
                    level,
                };
                FenceEvent::Opened
            }
            (FenceState::Inside { level, .. }, true) => {
                self.state = FenceState::Outside;
                FenceEvent::Closed { level }
            }
            (
                FenceState::Inside {
                    indent_width,
                    level,
                },
                false,
            ) => FenceEvent::Code {
                indent_width,
                level,
            },
            (FenceState::Outside, false) => FenceEvent::Outline,
        }
    }
}
