// ABOUTME: Markdown cell classifier for the nbslides application
// ABOUTME: Turns a heading plus subheading or bullet list into a title or bullet slide

use crate::deck::{BulletSlide, Slide, TitleSlide};
use comrak::nodes::{AstNode, NodeValue};
use comrak::{parse_document, Arena, ComrakOptions};
use log::debug;

/// Classify a markdown cell by the shape of its first two blocks.
///
/// A heading followed by a heading is a title slide, a heading followed by a
/// list is a bullet slide, and a lone heading is a bullet slide without
/// bullets. Any other shape produces nothing.
pub fn classify(source: &str) -> Option<Slide> {
    let arena = Arena::new();
    let root = parse_document(&arena, source, &ComrakOptions::default());

    let mut blocks = root.children();
    let heading = blocks.next()?;
    if !matches!(heading.data.borrow().value, NodeValue::Heading(_)) {
        debug!("Markdown cell does not start with a heading, skipping");
        return None;
    }
    let title = inline_text(heading);

    let Some(second) = blocks.next() else {
        return Some(Slide::Bullet(BulletSlide {
            title,
            bullets: Vec::new(),
        }));
    };

    let slide = match &second.data.borrow().value {
        NodeValue::Heading(_) => Some(Slide::Title(TitleSlide {
            title,
            subtitle: inline_text(second),
        })),
        NodeValue::List(_) => Some(Slide::Bullet(BulletSlide {
            title,
            bullets: second.children().map(first_run_text).collect(),
        })),
        _ => {
            debug!("Heading is followed by an unsupported block, skipping");
            None
        }
    };
    slide
}

/// Plain text of all inline content under a node
fn inline_text<'a>(node: &'a AstNode<'a>) -> String {
    let mut text = String::new();
    collect_text(node, &mut text);
    text
}

fn collect_text<'a>(node: &'a AstNode<'a>, out: &mut String) {
    for child in node.children() {
        match &child.data.borrow().value {
            NodeValue::Text(text) => out.push_str(text),
            NodeValue::Code(code) => out.push_str(&code.literal),
            NodeValue::SoftBreak | NodeValue::LineBreak => out.push(' '),
            _ => collect_text(child, out),
        }
    }
}

// First inline run of a list item's first block; nested content is ignored
fn first_run_text<'a>(item: &'a AstNode<'a>) -> String {
    let Some(run) = item.first_child().and_then(|block| block.first_child()) else {
        return String::new();
    };
    let text = match &run.data.borrow().value {
        NodeValue::Text(text) => text.clone(),
        NodeValue::Code(code) => code.literal.clone(),
        _ => inline_text(run),
    };
    text
}
