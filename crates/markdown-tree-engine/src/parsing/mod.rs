pub mod blocks;
pub mod inline;
pub mod options;
pub mod snapshot;

#[cfg(test)]
mod tests;

use blocks::{BlockBuilder, MarkdownLineClassifier, MarkdownNode};

pub use options::ParseOptions;

/// Parses a document into its block tree using default options.
///
/// Never fails: malformed markup degrades to weaker constructs (usually
/// paragraphs or literal text) rather than producing an error.
pub fn parse(markdown: &str) -> Vec<MarkdownNode> {
    parse_with_options(markdown, &ParseOptions::default())
}

/// Parses a document into its block tree.
///
/// The input is split on `\n` only; every resulting line, including a
/// trailing empty one, is classified.
pub fn parse_with_options(markdown: &str, options: &ParseOptions) -> Vec<MarkdownNode> {
    parse_at_depth(markdown, *options, 0)
}

/// Parses `markdown` as a document nested `depth` blockquotes deep.
pub(crate) fn parse_at_depth(
    markdown: &str,
    options: ParseOptions,
    depth: usize,
) -> Vec<MarkdownNode> {
    let classifier = MarkdownLineClassifier::new(options.tab_width);
    let mut builder = BlockBuilder::new(options, depth);

    for (number, line) in markdown.split('\n').enumerate() {
        let lc = classifier.classify(line);
        log::trace!("depth {depth} line {number}: {:?}", lc.kind);
        builder.push(&lc);
    }

    builder.finish()
}
