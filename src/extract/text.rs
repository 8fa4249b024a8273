//! Plain-text flattening
//!
//! Walks the DOM collecting text nodes while skipping script and style
//! subtrees, then collapses all whitespace runs to single spaces.

use ego_tree::NodeRef;
use scraper::node::Node;
use scraper::Html;

/// Tags whose text content is never page text.
const NON_TEXT_TAGS: &[&str] = &["script", "style"];

/// Flattens a document into whitespace-collapsed text
pub fn flatten_text(document: &Html) -> String {
    let mut words = Vec::new();
    collect_text(document.tree.root(), &mut words);
    words.join(" ")
}

fn collect_text(node: NodeRef<'_, Node>, out: &mut Vec<String>) {
    for child in node.children() {
        match child.value() {
            Node::Text(text) => {
                for word in text.split_whitespace() {
                    out.push(word.to_string());
                }
            }
            Node::Element(element) => {
                if !NON_TEXT_TAGS.contains(&element.name()) {
                    collect_text(child, out);
                }
            }
            _ => {}
        }
    }
}
