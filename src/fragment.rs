// src/fragment.rs
//
// Fragment strategy: parse leniently, then walk the tree.
//
// - `blocks_of` is the top-level walk and only ever returns blocks.
// - `inline_of` is the inline flattener and only ever returns spans.
// Both accumulate through return values; neither touches shared state.

use crate::block::{escape_angles, Block, Span};
use crate::tag::{self, Role};
use crate::tree::{parse_fragment, Element, Node};

pub fn blocks(html: &str) -> Vec<Block> {
    blocks_of(&parse_fragment(html).children)
}

fn blocks_of(nodes: &[Node]) -> Vec<Block> {
    nodes.iter().flat_map(blocks_of_node).collect()
}

fn blocks_of_node(node: &Node) -> Vec<Block> {
    let el = match node {
        Node::Element(el) => el,
        Node::Text(text) => {
            return Block::paragraph(vec![text_span(text, false)])
                .into_iter()
                .collect()
        }
    };
    let block = match tag::role(el.name.as_bytes()) {
        Role::Container => return blocks_of(&el.children),
        Role::Ignored => None,
        Role::Paragraph => Block::paragraph(inline_of(&el.children, false)),
        Role::Heading => Block::heading(inline_of(&el.children, true)),
        // Flatten the element itself so a top-level <b> keeps its weight.
        Role::Other => Block::paragraph(inline_of_element(el, false)),
    };
    block.into_iter().collect()
}

fn inline_of(nodes: &[Node], bold: bool) -> Vec<Span> {
    nodes
        .iter()
        .flat_map(|node| match node {
            Node::Text(text) => vec![text_span(text, bold)],
            Node::Element(el) => inline_of_element(el, bold),
        })
        .collect()
}

fn inline_of_element(el: &Element, bold: bool) -> Vec<Span> {
    let name = el.name.as_bytes();
    if name == b"br" || tag::role(name) == Role::Ignored {
        Vec::new()
    } else if tag::is_bold(name) {
        inline_of(&el.children, true)
    } else {
        inline_of(&el.children, bold)
    }
}

fn text_span(text: &str, bold: bool) -> Span {
    Span {
        text: escape_angles(text).into_owned(),
        bold,
    }
}
