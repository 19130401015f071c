//! Instruction payload for the HTML-generating model.

/// Rules the model follows when rebuilding the design.
pub const RULES: &str = "\
You are a front-end engineer. Rebuild the Figma design described by the JSON \
below as a single, complete HTML5 document with an embedded <style> block.

Rules:
1. Reproduce the node tree faithfully: one element per node, children in order.
2. Use x, y, width and height as pixel values. Nodes with layoutMode use flexbox \
(HORIZONTAL = row, VERTICAL = column) with their padding and itemSpacing as gap; \
all other children are absolutely positioned relative to their parent frame.
3. Use the precomputed hex values for colors. Apply opacity from fills, \
backgroundColor alpha and node opacity with rgba() or the opacity property.
4. Gradients map to linear-gradient or radial-gradient with the given stops.
5. Text nodes keep their characters verbatim and use fontFamily, fontSize, \
fontWeight, lineHeightPx, letterSpacing and textAlignHorizontal.
6. strokes become borders using strokeWeight; cornerRadius and cornerRadii \
(top-left, top-right, bottom-right, bottom-left) become border-radius.
7. DROP_SHADOW and INNER_SHADOW effects become box-shadow; LAYER_BLUR and \
BACKGROUND_BLUR become filter and backdrop-filter.
8. clipsContent means overflow: hidden.
9. Use canvasBackground as the page background.
10. Reply with the HTML document only.
";

/// Embed a compact extraction string into the full model instruction.
///
/// The JSON is inserted verbatim.
pub fn build_prompt(compact_json: &str) -> String {
    format!("{RULES}\nFigma JSON:\n{compact_json}\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_embedded_verbatim() {
        let json = r#"{"fileName":"Site","pages":[]}"#;
        let prompt = build_prompt(json);
        assert!(prompt.starts_with(RULES));
        assert!(prompt.ends_with(&format!("Figma JSON:\n{json}\n")));
    }

    #[test]
    fn test_rules_mention_hex() {
        assert!(RULES.contains("hex"));
    }
}
