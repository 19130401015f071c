//! Whole-tree node counts.

use distill_model::{ExtractedNode, Summary};

/// Running counts of the node types the summary reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NodeCounts {
    pub frames: usize,
    pub text_nodes: usize,
    pub rectangles: usize,
}

impl NodeCounts {
    /// Count `node` and every descendant.
    pub fn tally(&mut self, node: &ExtractedNode) {
        match node.node_type.as_str() {
            "FRAME" | "COMPONENT" | "INSTANCE" => self.frames += 1,
            "TEXT" => self.text_nodes += 1,
            "RECTANGLE" => self.rectangles += 1,
            _ => {}
        }
        for child in node.children() {
            self.tally(child);
        }
    }
}

/// Summarize already-extracted pages.
///
/// Counts reflect the pruned tree: skipped and depth-truncated nodes are not
/// included.
pub fn summarize(pages: &[ExtractedNode]) -> Summary {
    let mut counts = NodeCounts::default();
    for page in pages {
        counts.tally(page);
    }
    Summary {
        total_pages: pages.len(),
        total_frames: counts.frames,
        total_text_nodes: counts.text_nodes,
        total_rectangles: counts.rectangles,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn with_children(mut node: ExtractedNode, children: Vec<ExtractedNode>) -> ExtractedNode {
        node.children = Some(children);
        node
    }

    #[test]
    fn test_empty() {
        assert_eq!(summarize(&[]), Summary::default());
    }

    #[test]
    fn test_counts_nested_types() {
        let page = with_children(
            ExtractedNode::new("0:1", "CANVAS", "Page"),
            vec![
                with_children(
                    ExtractedNode::new("1", "FRAME", "Card"),
                    vec![
                        ExtractedNode::new("2", "TEXT", "Title"),
                        ExtractedNode::new("3", "RECTANGLE", "Bg"),
                        with_children(
                            ExtractedNode::new("4", "INSTANCE", "Button"),
                            vec![ExtractedNode::new("5", "TEXT", "Label")],
                        ),
                    ],
                ),
                ExtractedNode::new("6", "COMPONENT", "Icon"),
                ExtractedNode::new("7", "GROUP", "Misc"),
            ],
        );
        let second = ExtractedNode::new("0:2", "CANVAS", "Empty");

        assert_eq!(
            summarize(&[page, second]),
            Summary {
                total_pages: 2,
                total_frames: 3,
                total_text_nodes: 2,
                total_rectangles: 1,
            }
        );
    }

    #[test]
    fn test_page_itself_is_counted() {
        let page = ExtractedNode::new("0:1", "FRAME", "Odd page");
        assert_eq!(summarize(&[page]).total_frames, 1);
    }
}
