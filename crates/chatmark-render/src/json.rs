//! JSON output.
//!
//! Serializes a [`RenderTree`] with stable field order. Blocks carry a
//! `"type"` tag; inline spans are externally tagged by kind.

use crate::RenderTree;
use chatmark_core::{ChatmarkError, Result};
use serde_json::Value;

/// Pretty-printed JSON for a tree.
pub fn to_json(tree: &RenderTree) -> Result<String> {
    serde_json::to_string_pretty(tree).map_err(|e| ChatmarkError::Render(e.to_string()))
}

/// A tree as a JSON value.
pub fn to_json_value(tree: &RenderTree) -> Result<Value> {
    serde_json::to_value(tree).map_err(|e| ChatmarkError::Render(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render;
    use serde_json::json;

    #[test]
    fn test_paragraph_shape() {
        let value = to_json_value(&render("a **b**")).unwrap();
        assert_eq!(
            value,
            json!({
                "blocks": [{
                    "type": "paragraph",
                    "spans": [
                        { "plain_text": "a " },
                        { "bold": [{ "plain_text": "b" }] }
                    ]
                }]
            })
        );
    }

    #[test]
    fn test_link_and_heading() {
        let value = to_json_value(&render("## [x](https://y.z)")).unwrap();
        assert_eq!(
            value["blocks"][0],
            json!({
                "type": "heading",
                "level": 2,
                "spans": [{ "link": { "label": "x", "url": "https://y.z" } }]
            })
        );
    }

    #[test]
    fn test_code_block_shape() {
        let value = to_json_value(&render("```py\nx = 1\n```")).unwrap();
        let block = &value["blocks"][0];
        assert_eq!(block["type"], "code_block");
        assert_eq!(block["language"], "py");
        assert_eq!(block["line_numbers"], false);
        assert_eq!(block["lines"][0]["number"], 1);
        assert_eq!(block["lines"][0]["text"], "x = 1");
        assert_eq!(
            block["lines"][0]["tokens"],
            json!([
                { "kind": null, "text": "x = " },
                { "kind": "number", "text": "1" }
            ])
        );
    }

    #[test]
    fn test_pretty_output_is_deterministic() {
        let tree = render("- a\n- b\n\n|h|\n|-|\n|c|");
        assert_eq!(to_json(&tree).unwrap(), to_json(&tree).unwrap());
        assert!(to_json(&tree).unwrap().contains("\"type\": \"unordered_list\""));
    }

    #[test]
    fn test_empty_tree() {
        assert_eq!(to_json(&RenderTree::default()).unwrap(), "{\n  \"blocks\": []\n}");
    }
}
