pub mod parsing;

// Re-export key types for easier usage
pub use parsing::{
    ParseOptions,
    blocks::{CodeLine, ListItem, MarkdownNode, Table, XmlNode},
    inline::{CssUnit, CssUnitType, Image, Inline, TextRun, merge_runs, parse_text},
    parse, parse_with_options,
};
