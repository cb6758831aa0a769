//! Template content for the init command.
//!
//! `{id}` and `{label}` placeholders are substituted at init time. `{label}`
//! only ever appears inside double-quoted YAML scalars.

/// Template for the language manifest.
pub const LANGUAGE_YAML_TEMPLATE: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/language.yaml"));

/// Template for the first partition, holding one valid example entry.
pub const PARTITION_YAML_TEMPLATE: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/part1.yaml"));

/// Substitute `{id}` and `{label}` placeholders.
pub fn render(template: &str, id: &str, label: &str) -> String {
  template.replace("{id}", id).replace("{label}", &escape_double_quoted(label))
}

fn escape_double_quoted(value: &str) -> String {
  let mut out = String::with_capacity(value.len());
  for c in value.chars() {
    match c {
      '\\' => out.push_str("\\\\"),
      '"' => out.push_str("\\\""),
      '\n' => out.push_str("\\n"),
      '\t' => out.push_str("\\t"),
      '\r' => out.push_str("\\r"),
      c if c.is_control() => out.push_str(&format!("\\u{:04X}", c as u32)),
      c => out.push(c),
    }
  }
  out
}
