use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

static BLOCK_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("valid pattern"));
static LINE_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"//.*").expect("valid pattern"));
static HASH_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#.*").expect("valid pattern"));

/// Comment syntax recognised while cleaning a source file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommentStyle {
    /// `/* ... */` blocks and `//` line comments.
    Slashes,
    /// `#` line comments.
    Hash,
    /// No comment handling; lines are only trimmed.
    Plain,
}

impl CommentStyle {
    /// Picks the style for a lower-cased suffix such as `.rs`.
    ///
    /// `.kts` build scripts map to [`CommentStyle::Plain`], so their
    /// comments survive; only trimming applies to them.
    #[must_use]
    pub fn for_suffix(suffix: &str) -> Self {
        match suffix {
            ".rs" | ".java" => Self::Slashes,
            ".toml" => Self::Hash,
            _ => Self::Plain,
        }
    }
}

/// Strips comments per the style, trims every line, and drops blank lines.
///
/// The result joins the surviving lines with `\n` and carries no trailing
/// newline. Stripping is textual: a comment marker inside a string literal
/// is treated as a comment, which is accepted for a read-only dump.
#[must_use]
pub fn clean_source(content: &str, style: CommentStyle) -> String {
    let without_blocks = match style {
        CommentStyle::Slashes => BLOCK_COMMENT.replace_all(content, ""),
        CommentStyle::Hash | CommentStyle::Plain => Cow::Borrowed(content),
    };

    let mut kept = Vec::new();
    for line in without_blocks.lines() {
        let line = match style {
            CommentStyle::Slashes => LINE_COMMENT.replace_all(line, ""),
            CommentStyle::Hash => HASH_COMMENT.replace_all(line, ""),
            CommentStyle::Plain => Cow::Borrowed(line),
        };

        let trimmed = line.trim();
        if !trimmed.is_empty() {
            kept.push(trimmed.to_owned());
        }
    }

    kept.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_comments_vanish_across_lines() {
        let source = "fn a() {}\n/* one\ntwo\nthree */\nfn b() {}\n";

        assert_eq!(
            clean_source(source, CommentStyle::Slashes),
            "fn a() {}\nfn b() {}"
        );
    }

    #[test]
    fn line_comments_and_blank_lines_are_dropped() {
        let source = "  let x = 1; // trailing\n\n// whole line\n  let y = 2;\n";

        assert_eq!(
            clean_source(source, CommentStyle::Slashes),
            "let x = 1;\nlet y = 2;"
        );
    }

    #[test]
    fn hash_style_keeps_slashes_untouched() {
        let source = "name = \"demo\" # comment\npath = \"a//b\"\n";

        assert_eq!(
            clean_source(source, CommentStyle::Hash),
            "name = \"demo\"\npath = \"a//b\""
        );
    }

    #[test]
    fn plain_style_only_trims() {
        let source = "  plugins { id(\"java\") } // kept\n\n  kotlin(\"jvm\")\n";

        assert_eq!(
            clean_source(source, CommentStyle::Plain),
            "plugins { id(\"java\") } // kept\nkotlin(\"jvm\")"
        );
    }

    #[test]
    fn stripping_is_heuristic_inside_strings() {
        // Known approximation: markers inside string literals are treated as
        // comments too.
        let source = "let url = \"http://example\";\n";

        assert_eq!(
            clean_source(source, CommentStyle::Slashes),
            "let url = \"http:"
        );
    }

    #[test]
    fn suffixes_pick_their_style() {
        assert_eq!(CommentStyle::for_suffix(".rs"), CommentStyle::Slashes);
        assert_eq!(CommentStyle::for_suffix(".java"), CommentStyle::Slashes);
        assert_eq!(CommentStyle::for_suffix(".toml"), CommentStyle::Hash);
        assert_eq!(CommentStyle::for_suffix(".kts"), CommentStyle::Plain);
        assert_eq!(CommentStyle::for_suffix(".md"), CommentStyle::Plain);
    }
}
