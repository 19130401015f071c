//! figma-distill model
//!
//! Types on both sides of the extraction engine: a borrowed, lenient view over
//! the raw Figma REST document (`RawNode`), and the pruned, serializable output
//! tree (`ExtractedNode`, `ExtractionResult`).
//!
//! # Example
//!
//! ```
//! use distill_model::{rgb_to_hex, RawNode};
//!
//! let value = serde_json::json!({ "id": "1:2", "type": "FRAME", "name": "Hero" });
//! let node = RawNode::new(&value).unwrap();
//! assert_eq!(node.node_type(), "FRAME");
//! assert_eq!(rgb_to_hex(1.0, 0.0, 0.0), "#FF0000");
//! ```

pub mod color;
pub mod node;
pub mod number;
pub mod raw;

pub use color::{js_round, rgb_to_hex, Color};
pub use node::{
    Constraints, Effect, ExtractedNode, ExtractionResult, Fill, GradientFill, GradientStop,
    GradientType, Offset, SolidFill, Stroke, Summary,
};
pub use raw::{RawNode, Record};
