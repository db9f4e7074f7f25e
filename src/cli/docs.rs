//! Syntax reference for the classmark CLI

use super::CliError;

/// Available documentation topics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocTopic {
    Blocks,
    Inline,
    Classes,
    Tables,
    Errors,
}

impl DocTopic {
    /// Parse topic name from string
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "blocks" | "block" => Some(Self::Blocks),
            "inline" | "inlines" | "styles" => Some(Self::Inline),
            "classes" | "class" | "annotations" => Some(Self::Classes),
            "tables" | "table" => Some(Self::Tables),
            "errors" | "error" => Some(Self::Errors),
            _ => None,
        }
    }
}

/// Get the docs overview (topic listing)
pub fn get_docs_overview() -> &'static str {
    r#"CLASSMARK DOCUMENTATION

Classmark is a small markdown dialect. Any block or line can be tagged with a
bracket-quoted class name, which ends up as a class attribute in the HTML.

DOCUMENTATION TOPICS

  blocks     Headings, rules, quotes, code fences, lists, raw markup
  inline     Bold, italic, strikethrough, code, links, images
  classes    ["name"] annotations and how they attach
  tables     Pipe tables and the alignment line
  errors     The two inputs that fail a parse

QUICK REFERENCE

  # Heading           Heading levels 1-6
  ---                 Horizontal rule
  > quote             Blockquote
  - item / 1. item    Lists
  **b** _i_ ~~s~~     Inline styles
  ["name"] text       Class annotation

Run 'classmark doc <topic>' for details.
"#
}

/// Get documentation for a specific topic
pub fn get_doc_topic(name: &str) -> Result<&'static str, CliError> {
    match DocTopic::from_name(name) {
        Some(DocTopic::Blocks) => Ok(BLOCKS_DOC),
        Some(DocTopic::Inline) => Ok(INLINE_DOC),
        Some(DocTopic::Classes) => Ok(CLASSES_DOC),
        Some(DocTopic::Tables) => Ok(TABLES_DOC),
        Some(DocTopic::Errors) => Ok(ERRORS_DOC),
        None => Err(CliError::UnknownTopic(name.to_string())),
    }
}

const BLOCKS_DOC: &str = r#"BLOCKS

Blank lines are ignored. They do not separate paragraphs.

HEADINGS
  # One ... ###### Six
  One to six '#' followed by whitespace.

HORIZONTAL RULE
  ---
  Three or more dashes alone on a line.

BLOCKQUOTE
  > first line
  > second line
  Consecutive '>' lines form one quote.

CODE FENCE
  ```
  verbatim text
  ```
  Without a closing fence the text is kept as a paragraph.

LISTS
  - unordered (also * and +)
  1. ordered
  Consecutive item lines form one list. Items hold inline content only.

RAW MARKUP
  <div>
    anything
  </div>
  A line starting with '<' and ending with '>' is copied through as-is,
  up to and including the next line that starts with '</'.
"#;

const INLINE_DOC: &str = r#"INLINE

  `code`          Inline code
  **bold**        Bold
  _italic_        Italic
  ~~struck~~      Strikethrough
  [text](url)     Link
  ![alt](url)     Image

Styles do not nest: the text inside a span is kept as written.
A lone '*', '_', '`' or '~' with no partner is dropped.
"#;

const CLASSES_DOC: &str = r#"CLASS ANNOTATIONS

ON THEIR OWN LINE
  ["text-pink-500"]
  # Heading

  The class goes on the next heading, paragraph, blockquote or code block.

WITH CONTENT
  ["card"] # Heading

  The content after the annotation is parsed as its own document and
  wrapped in <div class="card">.

NESTING
  ["outer"] ["inner"] text

  Annotations may nest up to 10 levels (see --max-depth).
"#;

const TABLES_DOC: &str = r#"TABLES

  | Name | Role |
  |------|:----:|
  | Ada  | Lead |

The first '|' line is the header. The line after it must contain only
'|', '-', ':' and spaces. Every following '|' line is a row.
Empty cells are skipped.
"#;

const ERRORS_DOC: &str = r#"ERRORS

Most malformed input degrades quietly. Two cases fail the whole parse:

  Maximum nesting depth exceeded
    More class annotations nested inside each other than allowed.

  Invalid table syntax: missing separator line
    A '|' header line that is not followed by an alignment line.
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_aliases() {
        assert_eq!(DocTopic::from_name("Class"), Some(DocTopic::Classes));
        assert_eq!(DocTopic::from_name("styles"), Some(DocTopic::Inline));
        assert_eq!(DocTopic::from_name("nope"), None);
    }

    #[test]
    fn unknown_topic_is_an_error() {
        assert!(matches!(
            get_doc_topic("nope"),
            Err(CliError::UnknownTopic(name)) if name == "nope"
        ));
    }
}
