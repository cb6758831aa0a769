//! Diagram payloads attached to sections.
//!
//! A diagram is either mermaid source text or a structured payload for one of
//! the frontend's custom renderers. Custom payloads are a closed enum keyed by
//! `type`, so every renderer gets a concrete shape:
//!
//! ```yaml
//! diagram:
//!   kind: custom
//!   type: array
//!   caption: Contiguous storage
//!   data:
//!     values: ["1", "2", "3"]
//!     highlight: [0]
//! ```

use serde::{Deserialize, Serialize};

/// A visual aid for a section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase", try_from = "RawDiagram")]
pub enum Diagram {
  Mermaid {
    code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    caption: Option<String>,
  },
  Custom {
    #[serde(flatten)]
    payload: CustomDiagram,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    caption: Option<String>,
  },
}

impl Diagram {
  pub fn caption(&self) -> Option<&str> {
    match self {
      Diagram::Mermaid { caption, .. } | Diagram::Custom { caption, .. } => caption.as_deref(),
    }
  }

  /// `mermaid`, or the custom payload's `type`.
  pub fn type_name(&self) -> &'static str {
    match self {
      Diagram::Mermaid { .. } => "mermaid",
      Diagram::Custom { payload, .. } => payload.type_name(),
    }
  }
}

#[derive(Deserialize)]
#[serde(rename_all = "lowercase")]
enum RawKind {
  Mermaid,
  Custom,
}

/// Wire shape of [`Diagram`]. The custom variant flattens its payload, which
/// serde cannot combine with `deny_unknown_fields`, so the outer keys are
/// checked here first.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDiagram {
  kind: RawKind,
  #[serde(default, rename = "type")]
  type_name: Option<String>,
  #[serde(default)]
  data: Option<serde_json::Value>,
  #[serde(default)]
  code: Option<String>,
  #[serde(default)]
  caption: Option<String>,
}

impl TryFrom<RawDiagram> for Diagram {
  type Error = String;

  fn try_from(raw: RawDiagram) -> Result<Self, Self::Error> {
    let RawDiagram {
      kind,
      type_name,
      data,
      code,
      caption,
    } = raw;

    match kind {
      RawKind::Mermaid => {
        if type_name.is_some() || data.is_some() {
          return Err("mermaid diagram does not take `type` or `data`".to_string());
        }
        let code = code.ok_or_else(|| "missing field `code`".to_string())?;
        Ok(Diagram::Mermaid { code, caption })
      }
      RawKind::Custom => {
        if code.is_some() {
          return Err("custom diagram does not take `code`".to_string());
        }
        let type_name = type_name.ok_or_else(|| "missing field `type`".to_string())?;
        let mut tagged = serde_json::Map::new();
        tagged.insert("type".to_string(), serde_json::Value::String(type_name));
        if let Some(data) = data {
          tagged.insert("data".to_string(), data);
        }
        let payload = serde_json::from_value(serde_json::Value::Object(tagged)).map_err(|e| e.to_string())?;
        Ok(Diagram::Custom { payload, caption })
      }
    }
  }
}

/// Renderer-specific payload, tagged by `type` with its record under `data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "kebab-case")]
pub enum CustomDiagram {
  MemoryLayout(MemoryLayout),
  Array(ArrayDiagram),
  LinkedList(LinkedListDiagram),
  BinaryTree(BinaryTreeDiagram),
  HashMap(HashMapDiagram),
  Heap(HeapDiagram),
  Stack(StackDiagram),
}

impl CustomDiagram {
  /// The `type` tag as written in content files.
  pub fn type_name(&self) -> &'static str {
    match self {
      CustomDiagram::MemoryLayout(_) => "memory-layout",
      CustomDiagram::Array(_) => "array",
      CustomDiagram::LinkedList(_) => "linked-list",
      CustomDiagram::BinaryTree(_) => "binary-tree",
      CustomDiagram::HashMap(_) => "hash-map",
      CustomDiagram::Heap(_) => "heap",
      CustomDiagram::Stack(_) => "stack",
    }
  }
}

/// Stack/heap regions with labelled cells and pointer arrows between them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MemoryLayout {
  pub regions: Vec<MemoryRegion>,
  #[serde(default)]
  pub pointers: Vec<PointerArrow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MemoryRegion {
  /// e.g. `stack`, `heap`, `static`.
  pub name: String,
  pub cells: Vec<MemoryCell>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MemoryCell {
  /// Unique within the diagram; pointer arrows refer to it.
  pub id: String,
  pub label: String,
  pub value: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PointerArrow {
  pub from: String,
  pub to: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ArrayDiagram {
  pub values: Vec<String>,
  /// 0-based indices into `values`.
  #[serde(default)]
  pub highlight: Vec<usize>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LinkedListDiagram {
  pub nodes: Vec<String>,
  #[serde(default)]
  pub doubly: bool,
  /// 0-based indices into `nodes`.
  #[serde(default)]
  pub highlight: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BinaryTreeDiagram {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub root: Option<TreeNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TreeNode {
  pub value: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub left: Option<Box<TreeNode>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub right: Option<Box<TreeNode>>,
}

impl TreeNode {
  pub fn node_count(&self) -> usize {
    1 + self.left.as_ref().map_or(0, |n| n.node_count()) + self.right.as_ref().map_or(0, |n| n.node_count())
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HashMapDiagram {
  pub bucket_count: usize,
  pub buckets: Vec<HashBucket>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HashBucket {
  /// Must be below the diagram's `bucketCount`.
  pub index: usize,
  pub entries: Vec<KeyValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct KeyValue {
  pub key: String,
  pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeapOrder {
  Min,
  Max,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HeapDiagram {
  pub order: HeapOrder,
  /// Level-order (array) representation.
  pub values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StackDiagram {
  /// Bottom first, top last.
  pub items: Vec<String>,
  /// 0-based indices into `items`.
  #[serde(default)]
  pub highlight: Vec<usize>,
}
