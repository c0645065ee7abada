use std::collections::HashSet;

use proptest::prelude::*;
use xmlgen::{Content, Element};
use xmlparser::{Token, Tokenizer};

const ELEMENT_NAMES: &[&str] = &["a", "b", "item", "doc", "x_1"];
const ATTRIBUTE_NAMES: &[&str] = &["q", "r", "s"];
const TEXT: &str = "[ -~]{0,12}";

#[derive(Debug, Clone)]
enum Node {
    Element {
        name: String,
        attributes: Vec<(String, String)>,
        children: Vec<Node>,
    },
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

fn arb_attribute() -> impl Strategy<Value = (String, String)> {
    (prop::sample::select(ATTRIBUTE_NAMES), TEXT)
        .prop_map(|(name, value)| (name.to_string(), value))
}

fn unduplicate_attributes(attributes: &[(String, String)]) -> Vec<(String, String)> {
    let mut seen = HashSet::new();
    attributes
        .iter()
        .filter(|(name, _)| seen.insert(name.clone()))
        .cloned()
        .collect()
}

fn arb_node() -> impl Strategy<Value = Node> {
    let leaf = prop_oneof![
        TEXT.prop_map(Node::Text),
        any::<i64>().prop_map(Node::Int),
        (-1.0e9..1.0e9_f64).prop_map(Node::Float),
        any::<bool>().prop_map(Node::Bool),
    ];
    leaf.prop_recursive(
        4,  // levels deep
        32, // maximum number of nodes
        4,  // up to 4 items per collection
        |inner| {
            (
                prop::sample::select(ELEMENT_NAMES),
                prop::collection::vec(arb_attribute(), 0..3),
                prop::collection::vec(inner, 0..4),
            )
                .prop_map(|(name, attributes, children)| Node::Element {
                    name: name.to_string(),
                    attributes: unduplicate_attributes(&attributes),
                    children,
                })
        },
    )
}

fn arb_root() -> impl Strategy<Value = Node> {
    (
        prop::sample::select(ELEMENT_NAMES),
        prop::collection::vec(arb_attribute(), 0..3),
        prop::collection::vec(arb_node(), 0..4),
    )
        .prop_map(|(name, attributes, children)| Node::Element {
            name: name.to_string(),
            attributes: unduplicate_attributes(&attributes),
            children,
        })
}

fn build_content(node: &Node) -> Content {
    match node {
        Node::Element {
            name,
            attributes,
            children,
        } => build_element(name, attributes, children).into(),
        Node::Text(text) => text.clone().into(),
        Node::Int(i) => (*i).into(),
        Node::Float(x) => (*x).into(),
        Node::Bool(b) => (*b).into(),
    }
}

fn build_element(name: &str, attributes: &[(String, String)], children: &[Node]) -> Element {
    let mut element = Element::new(name);
    for (name, value) in attributes {
        element = element.attribute(name.clone(), value.clone());
    }
    for child in children {
        element = element.content(build_content(child));
    }
    element
}

fn count_elements(node: &Node) -> usize {
    match node {
        Node::Element { children, .. } => {
            1 + children.iter().map(count_elements).sum::<usize>()
        }
        _ => 0,
    }
}

proptest! {
    // any tree of valid names and scalar values serializes to output
    // that an XML tokenizer accepts, with one start tag per element
    #[test]
    fn test_output_reparses(root in arb_root()) {
        let (name, attributes, children) = match &root {
            Node::Element { name, attributes, children } => (name, attributes, children),
            _ => unreachable!(),
        };
        let element = build_element(name, attributes, children);
        let output = element.serialize_to_string().unwrap();

        let mut starts = 0;
        for token in Tokenizer::from(output.as_str()) {
            let token = token.unwrap();
            if matches!(token, Token::ElementStart { .. }) {
                starts += 1;
            }
        }
        prop_assert_eq!(starts, count_elements(&root));
    }
}
