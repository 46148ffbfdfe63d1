//! Outline skeletons for a target keyword.

use serde::{Deserialize, Serialize};

use crate::seo::templates::{
    CAPITALIZED_KEYWORD_PLACEHOLDER, KEYWORD_PLACEHOLDER, OUTLINE_CONCLUSION,
    OUTLINE_INTRODUCTION, OUTLINE_INTRO_PARAGRAPH, OUTLINE_SECTIONS,
};
use crate::seo::text::{capitalize_first, escape_html};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Heading,
    Paragraph,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineNode {
    #[serde(rename = "type")]
    pub node_type: NodeType,
    /// Present on headings only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
    pub content: String,
    #[serde(default)]
    pub expanded: bool,
}

impl OutlineNode {
    pub fn heading(level: u8, content: impl Into<String>) -> Self {
        Self {
            node_type: NodeType::Heading,
            level: Some(level),
            content: content.into(),
            expanded: false,
        }
    }

    pub fn paragraph(content: impl Into<String>) -> Self {
        Self {
            node_type: NodeType::Paragraph,
            level: None,
            content: content.into(),
            expanded: false,
        }
    }
}

/// Fixed 9-node skeleton: title, introduction heading and paragraph, the
/// `OUTLINE_SECTIONS` headings, conclusion.
pub fn generate_outline(keyword: &str) -> Vec<OutlineNode> {
    let capitalized = capitalize_first(keyword);
    let fill = |template: &str| {
        template
            .replace(CAPITALIZED_KEYWORD_PLACEHOLDER, &capitalized)
            .replace(KEYWORD_PLACEHOLDER, keyword)
    };

    let mut outline = Vec::with_capacity(OUTLINE_SECTIONS.len() + 4);
    outline.push(OutlineNode::heading(1, capitalized.clone()));
    outline.push(OutlineNode::heading(2, OUTLINE_INTRODUCTION));
    outline.push(OutlineNode::paragraph(fill(OUTLINE_INTRO_PARAGRAPH)));
    outline.extend(
        OUTLINE_SECTIONS
            .iter()
            .map(|section| OutlineNode::heading(2, fill(section))),
    );
    outline.push(OutlineNode::heading(2, OUTLINE_CONCLUSION));
    outline
}

/// Renders an outline as draft HTML: headings as `<hN>`, paragraphs as `<p>`.
pub fn render_outline_html(nodes: &[OutlineNode]) -> String {
    nodes
        .iter()
        .map(|node| {
            let text = escape_html(&node.content);
            match node.node_type {
                NodeType::Heading => {
                    let level = node.level.unwrap_or(2).clamp(1, 6);
                    format!("<h{level}>{text}</h{level}>")
                }
                NodeType::Paragraph => format!("<p>{text}</p>"),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seo::analysis::{analyze_seo, HEADING_STRUCTURE_LABEL};

    #[test]
    fn test_outline_shape() {
        let outline = generate_outline("digital marketing guide");
        assert_eq!(outline.len(), 9);
        assert_eq!(outline[0].level, Some(1));
        assert_eq!(outline[0].content, "Digital marketing guide");

        let paragraphs: Vec<_> = outline
            .iter()
            .filter(|n| n.node_type == NodeType::Paragraph)
            .collect();
        assert_eq!(paragraphs.len(), 1);
        assert_eq!(paragraphs[0].level, None);

        for node in outline.iter().skip(1) {
            if node.node_type == NodeType::Heading {
                assert_eq!(node.level, Some(2));
            }
        }
        assert!(outline.iter().all(|n| !n.expanded));
    }

    #[test]
    fn test_outline_substitutes_keyword() {
        let outline = generate_outline("home fitness");
        assert_eq!(outline[1].content, "Introduction");
        assert_eq!(outline[2].content, "A short introduction to home fitness");
        assert_eq!(outline[3].content, "What Is Home fitness?");
        assert_eq!(outline[4].content, "Benefits of Home fitness");
        assert_eq!(outline[8].content, "Conclusion");
    }

    #[test]
    fn test_outline_is_deterministic() {
        assert_eq!(generate_outline("seo"), generate_outline("seo"));
    }

    #[test]
    fn test_node_serializes_type_and_omits_paragraph_level() {
        let json = serde_json::to_value(OutlineNode::paragraph("text")).unwrap();
        assert_eq!(json["type"], "paragraph");
        assert!(json.get("level").is_none());

        let json = serde_json::to_value(OutlineNode::heading(2, "Intro")).unwrap();
        assert_eq!(json["type"], "heading");
        assert_eq!(json["level"], 2);
    }

    #[test]
    fn test_render_escapes_and_tags() {
        let html = render_outline_html(&[
            OutlineNode::heading(2, "A < B"),
            OutlineNode::paragraph("body"),
        ]);
        assert_eq!(html, "<h2>A &lt; B</h2>\n<p>body</p>");
    }

    #[test]
    fn test_more_headings_never_lower_heading_check() {
        let outline = generate_outline("rust");
        let heading_passed = |nodes: &[OutlineNode]| {
            analyze_seo(&render_outline_html(nodes), "")
                .checklist
                .iter()
                .find(|c| c.item == HEADING_STRUCTURE_LABEL)
                .map(|c| c.passed)
                .unwrap_or(false)
        };

        let mut previous = false;
        for n in 0..=outline.len() {
            let passed = heading_passed(&outline[..n]);
            assert!(passed || !previous, "heading check regressed at {n} nodes");
            previous = passed;
        }
        assert!(previous);
    }
}
