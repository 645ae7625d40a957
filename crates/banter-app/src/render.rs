//! Terminal markdown rendering for assistant replies.
//!
//! Walks the pulldown-cmark event stream and emits ANSI-styled text:
//! headings, emphasis, inline code, fenced code blocks, lists, and rules.

use colored::{ColoredString, Colorize};
use pulldown_cmark::{Event, Parser, Tag, TagEnd};

/// Render markdown to the terminal.
pub fn print_markdown(text: &str) {
    println!("{}", render_markdown(text));
}

#[derive(Default)]
struct StyleState {
    heading: bool,
    bold: bool,
    italic: bool,
    code_block: bool,
}

impl StyleState {
    fn apply(&self, text: &str) -> String {
        if self.code_block {
            return text.yellow().to_string();
        }
        if self.heading {
            return text.cyan().bold().to_string();
        }
        let mut styled = ColoredString::from(text);
        if self.bold {
            styled = styled.bold();
        }
        if self.italic {
            styled = styled.italic();
        }
        styled.to_string()
    }
}

/// Render markdown to a string with ANSI styling.
pub fn render_markdown(text: &str) -> String {
    let mut out = String::new();
    let mut style = StyleState::default();
    // Ordered lists carry the next item number; bullets carry None.
    let mut list_stack: Vec<Option<u64>> = Vec::new();

    for event in Parser::new(text) {
        match event {
            Event::Start(tag) => match tag {
                Tag::Heading { .. } => style.heading = true,
                Tag::Strong => style.bold = true,
                Tag::Emphasis => style.italic = true,
                Tag::CodeBlock(_) => style.code_block = true,
                Tag::List(start) => {
                    if !out.is_empty() && !out.ends_with('\n') {
                        out.push('\n');
                    }
                    list_stack.push(start);
                }
                Tag::Item => {
                    let indent = "  ".repeat(list_stack.len().saturating_sub(1));
                    match list_stack.last_mut() {
                        Some(Some(n)) => {
                            out.push_str(&format!("{indent}{n}. "));
                            *n += 1;
                        }
                        _ => out.push_str(&format!("{indent}• ")),
                    }
                }
                _ => {}
            },
            Event::End(tag) => match tag {
                TagEnd::Heading(_) => {
                    style.heading = false;
                    out.push_str("\n\n");
                }
                TagEnd::Strong => style.bold = false,
                TagEnd::Emphasis => style.italic = false,
                TagEnd::CodeBlock => {
                    style.code_block = false;
                    out.push('\n');
                }
                TagEnd::List(_) => {
                    list_stack.pop();
                    if list_stack.is_empty() {
                        out.push('\n');
                    }
                }
                TagEnd::Item => {
                    if !out.ends_with('\n') {
                        out.push('\n');
                    }
                }
                TagEnd::Paragraph => {
                    // Paragraphs inside list items flow on the item line.
                    if list_stack.is_empty() {
                        out.push_str("\n\n");
                    }
                }
                _ => {}
            },
            Event::Text(t) => out.push_str(&style.apply(&t)),
            Event::Code(t) => out.push_str(&t.yellow().to_string()),
            Event::SoftBreak | Event::HardBreak => out.push('\n'),
            Event::Rule => {
                out.push_str(&"────────".dimmed().to_string());
                out.push('\n');
            }
            _ => {}
        }
    }

    out.trim_end().to_string()
}
