//! Block-level markdown parsing for post bodies.
//!
//! Only block structure is recognized (headings, paragraphs, fenced code,
//! blockquotes, lists, rules); inline text is carried verbatim.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Block {
    Heading {
        level: u8,
        text: String,
    },
    Paragraph {
        text: String,
    },
    Code {
        #[serde(skip_serializing_if = "Option::is_none")]
        language: Option<String>,
        code: String,
    },
    Blockquote {
        text: String,
    },
    List {
        ordered: bool,
        items: Vec<String>,
    },
    Rule,
}

/// Split a markdown document into structured blocks. Deterministic: the same
/// input always yields the same block sequence.
pub fn parse_blocks(content: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut lines = content.lines().peekable();

    while let Some(line) = lines.next() {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            continue;
        }

        if let Some(fence) = trimmed.strip_prefix("```") {
            let language = match fence.trim() {
                "" => None,
                lang => Some(lang.to_string()),
            };
            let mut code_lines = Vec::new();
            for code_line in lines.by_ref() {
                if code_line.trim().starts_with("```") {
                    break;
                }
                code_lines.push(code_line);
            }
            blocks.push(Block::Code {
                language,
                code: code_lines.join("\n"),
            });
            continue;
        }

        if let Some(block) = parse_heading(trimmed) {
            blocks.push(block);
            continue;
        }

        if is_rule(trimmed) {
            blocks.push(Block::Rule);
            continue;
        }

        if let Some(first) = quote_text(trimmed) {
            let mut parts = vec![first.to_string()];
            while let Some(&next) = lines.peek() {
                match quote_text(next.trim()) {
                    Some(text) => {
                        parts.push(text.to_string());
                        lines.next();
                    }
                    None => break,
                }
            }
            blocks.push(Block::Blockquote {
                text: parts.join(" ").trim().to_string(),
            });
            continue;
        }

        if let Some(first) = unordered_item(trimmed) {
            let mut items = vec![first.to_string()];
            while let Some(&next) = lines.peek() {
                match unordered_item(next.trim()) {
                    Some(item) => {
                        items.push(item.to_string());
                        lines.next();
                    }
                    None => break,
                }
            }
            blocks.push(Block::List {
                ordered: false,
                items,
            });
            continue;
        }

        if let Some(first) = ordered_item(trimmed) {
            let mut items = vec![first.to_string()];
            while let Some(&next) = lines.peek() {
                match ordered_item(next.trim()) {
                    Some(item) => {
                        items.push(item.to_string());
                        lines.next();
                    }
                    None => break,
                }
            }
            blocks.push(Block::List {
                ordered: true,
                items,
            });
            continue;
        }

        // Plain paragraph: join consecutive non-marker lines with a space.
        let mut parts = vec![trimmed.to_string()];
        while let Some(&next) = lines.peek() {
            let next = next.trim();
            if next.is_empty()
                || next.starts_with("```")
                || parse_heading(next).is_some()
                || is_rule(next)
                || quote_text(next).is_some()
                || unordered_item(next).is_some()
                || ordered_item(next).is_some()
            {
                break;
            }
            parts.push(next.to_string());
            lines.next();
        }
        blocks.push(Block::Paragraph {
            text: parts.join(" "),
        });
    }

    blocks
}

fn parse_heading(line: &str) -> Option<Block> {
    let hashes = line.chars().take_while(|&c| c == '#').count();
    if hashes == 0 || hashes > 6 {
        return None;
    }
    let rest = &line[hashes..];
    let text = rest.strip_prefix(' ')?;
    Some(Block::Heading {
        level: hashes as u8,
        text: text.trim().to_string(),
    })
}

fn is_rule(line: &str) -> bool {
    line.len() >= 3
        && (line.chars().all(|c| c == '-') || line.chars().all(|c| c == '*'))
}

fn quote_text(line: &str) -> Option<&str> {
    line.strip_prefix('>').map(|t| t.trim_start())
}

fn unordered_item(line: &str) -> Option<&str> {
    line.strip_prefix("- ")
        .or_else(|| line.strip_prefix("* "))
        .map(str::trim)
}

fn ordered_item(line: &str) -> Option<&str> {
    let dot = line.find(". ")?;
    if dot > 0 && line[..dot].chars().all(|c| c.is_ascii_digit()) {
        Some(line[dot + 2..].trim())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings_and_paragraphs() {
        let blocks = parse_blocks("# Title\n\nFirst line\nsecond line\n\n## Section");
        assert_eq!(
            blocks,
            vec![
                Block::Heading { level: 1, text: "Title".to_string() },
                Block::Paragraph { text: "First line second line".to_string() },
                Block::Heading { level: 2, text: "Section".to_string() },
            ]
        );
    }

    #[test]
    fn test_fenced_code_keeps_language_and_body() {
        let blocks = parse_blocks("```rust\nfn main() {}\n```\n");
        assert_eq!(
            blocks,
            vec![Block::Code {
                language: Some("rust".to_string()),
                code: "fn main() {}".to_string(),
            }]
        );
    }

    #[test]
    fn test_lists() {
        let blocks = parse_blocks("- one\n- two\n\n1. first\n2. second");
        assert_eq!(
            blocks,
            vec![
                Block::List {
                    ordered: false,
                    items: vec!["one".to_string(), "two".to_string()],
                },
                Block::List {
                    ordered: true,
                    items: vec!["first".to_string(), "second".to_string()],
                },
            ]
        );
    }

    #[test]
    fn test_blockquote_and_rule() {
        let blocks = parse_blocks("> quoted\n> words\n\n---");
        assert_eq!(
            blocks,
            vec![
                Block::Blockquote { text: "quoted words".to_string() },
                Block::Rule,
            ]
        );
    }

    #[test]
    fn test_hash_without_space_is_a_paragraph() {
        let blocks = parse_blocks("#hashtag");
        assert_eq!(blocks, vec![Block::Paragraph { text: "#hashtag".to_string() }]);
    }

    #[test]
    fn test_parse_is_deterministic() {
        let input = "# A\n\ntext\n\n- x\n- y\n";
        assert_eq!(parse_blocks(input), parse_blocks(input));
    }
}
