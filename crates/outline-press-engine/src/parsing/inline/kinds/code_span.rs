/// Code span inline type with owned delimiter constant.
///
/// Code spans are raw zones: a marker token or wiki link inside one is
/// plain text. A span opened by a run of N backticks closes only at the next
/// run of exactly N backticks on the same line.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';
}
