/// Code span inline type with owned delimiter constant.
///
/// A tick flips code style like any other toggle. Other markers stay live
/// inside the span; escape them to keep them literal.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that toggles code style.
    pub const TICK: u8 = b'`';
}
