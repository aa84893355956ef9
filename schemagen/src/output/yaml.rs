//! Block-style YAML emitter with configurable indentation.
//!
//! `serde_yaml` decides how each scalar is quoted; this module only lays
//! out mappings and sequences. Indentation follows three widths:
//!
//! ```text
//! models:            <- key at column c
//!   - name: orders   <- dash at c + offset, content at c + sequence
//!     columns:
//!       - name: id
//! ```
//!
//! Nested mappings (a mapping directly under a key) move right by
//! `mapping`.

use serde_yaml::{Mapping, Value};

use crate::error::{WriteError, WriteResult};
use crate::models::Document;

/// Indentation widths for the emitted document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndentStyle {
    /// Indent of a mapping nested under a key.
    pub mapping: usize,
    /// Column of sequence item content, relative to the parent key.
    pub sequence: usize,
    /// Column of the `-`, relative to the parent key.
    pub offset: usize,
}

impl Default for IndentStyle {
    fn default() -> Self {
        Self {
            mapping: 2,
            sequence: 4,
            offset: 2,
        }
    }
}

impl IndentStyle {
    pub fn new(mapping: usize, sequence: usize, offset: usize) -> Self {
        Self { mapping, sequence, offset }
    }

    /// Reject widths that would produce invalid or ambiguous YAML.
    pub fn validate(&self) -> WriteResult<()> {
        let invalid = |reason| WriteError::InvalidIndent {
            mapping: self.mapping,
            sequence: self.sequence,
            offset: self.offset,
            reason,
        };

        if self.mapping == 0 {
            return Err(invalid("mapping indent must be at least 1"));
        }
        if self.sequence < self.offset + 2 {
            return Err(invalid("sequence indent must leave room for \"- \" after the offset"));
        }
        Ok(())
    }

    /// Spaces between the dash and the item content.
    fn dash_gap(&self) -> usize {
        self.sequence - self.offset - 1
    }
}

/// Render `doc` as a YAML string.
pub fn render_document(doc: &Document, style: &IndentStyle) -> WriteResult<String> {
    let value = serde_yaml::to_value(doc).map_err(|e| WriteError::Render(e.to_string()))?;
    render_value(&value, style)
}

/// Render any YAML value with `style`.
pub fn render_value(value: &Value, style: &IndentStyle) -> WriteResult<String> {
    style.validate()?;

    let mut emitter = Emitter {
        style,
        out: String::new(),
    };
    match value {
        Value::Mapping(map) if !map.is_empty() => emitter.mapping(map, 0, false)?,
        Value::Sequence(seq) if !seq.is_empty() => emitter.sequence(seq, 0, false)?,
        scalar => {
            let rendered = render_scalar(scalar)?;
            emitter.out.push_str(&rendered);
            emitter.out.push('\n');
        }
    }
    Ok(emitter.out)
}

struct Emitter<'a> {
    style: &'a IndentStyle,
    out: String,
}

impl Emitter<'_> {
    fn pad(&mut self, width: usize) {
        self.out.extend(std::iter::repeat(' ').take(width));
    }

    /// Emit `map` with keys at `column`. When `inline`, the cursor already
    /// sits at `column` (right after a dash).
    fn mapping(&mut self, map: &Mapping, column: usize, inline: bool) -> WriteResult<()> {
        for (i, (key, value)) in map.iter().enumerate() {
            if i > 0 || !inline {
                self.pad(column);
            }
            let key = render_scalar(key)?;
            self.out.push_str(&key);
            self.out.push(':');

            match value {
                Value::Mapping(child) if !child.is_empty() => {
                    self.out.push('\n');
                    self.mapping(child, column + self.style.mapping, false)?;
                }
                Value::Sequence(items) if !items.is_empty() => {
                    self.out.push('\n');
                    self.sequence(items, column + self.style.offset, false)?;
                }
                scalar => {
                    let rendered = render_scalar(scalar)?;
                    self.out.push(' ');
                    self.out.push_str(&rendered);
                    self.out.push('\n');
                }
            }
        }
        Ok(())
    }

    /// Emit `items` with dashes at `dash_column`.
    fn sequence(&mut self, items: &[Value], dash_column: usize, inline: bool) -> WriteResult<()> {
        let content_column = dash_column + self.style.dash_gap() + 1;

        for (i, item) in items.iter().enumerate() {
            if i > 0 || !inline {
                self.pad(dash_column);
            }
            self.out.push('-');
            self.pad(self.style.dash_gap());

            match item {
                Value::Mapping(map) if !map.is_empty() => self.mapping(map, content_column, true)?,
                Value::Sequence(nested) if !nested.is_empty() => {
                    self.sequence(nested, content_column, true)?
                }
                scalar => {
                    let rendered = render_scalar(scalar)?;
                    self.out.push_str(&rendered);
                    self.out.push('\n');
                }
            }
        }
        Ok(())
    }
}

/// Render a scalar (or empty collection) on a single line.
fn render_scalar(value: &Value) -> WriteResult<String> {
    match value {
        Value::Mapping(map) if map.is_empty() => Ok("{}".to_string()),
        Value::Sequence(seq) if seq.is_empty() => Ok("[]".to_string()),
        Value::String(s) => render_string(s),
        other => {
            let rendered = serde_yaml::to_string(other).map_err(|e| WriteError::Render(e.to_string()))?;
            Ok(rendered.trim_end_matches('\n').to_string())
        }
    }
}

/// Strings that `serde_yaml` would lay out as a multi-line block are written
/// as double-quoted JSON strings instead, which YAML reads back verbatim.
fn render_string(s: &str) -> WriteResult<String> {
    let rendered = serde_yaml::to_string(s).map_err(|e| WriteError::Render(e.to_string()))?;
    let rendered = rendered.strip_suffix('\n').unwrap_or(&rendered);

    if rendered.contains('\n') {
        serde_json::to_string(s).map_err(|e| WriteError::Render(e.to_string()))
    } else {
        Ok(rendered.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Column, Table};

    fn scenario() -> Document {
        let mut orders = Table::new("orders", "Orders table");
        orders.columns.push(
            Column::new("id")
                .with_description("Primary key")
                .with_tests(vec!["not_null".into(), "unique".into()]),
        );
        orders.columns.push(Column::new("amount"));

        let mut customers = Table::new("customers", "Customers table");
        customers.columns.push(Column::new("id").with_tests(vec!["unique".into()]));

        Document::new(vec![orders, customers])
    }

    #[test]
    fn test_default_style() {
        let yaml = render_document(&scenario(), &IndentStyle::default()).unwrap();

        let expected = "\
version: 2
models:
  - name: orders
    description: Orders table
    columns:
      - name: id
        description: Primary key
        tests:
          - not_null
          - unique
      - name: amount
  - name: customers
    description: Customers table
    columns:
      - name: id
        tests:
          - unique
";
        assert_eq!(yaml, expected);
    }

    #[test]
    fn test_wide_mapping_narrow_sequence_style() {
        let yaml = render_document(&scenario(), &IndentStyle::new(5, 3, 1)).unwrap();

        let expected_head = "\
version: 2
models:
 - name: orders
   description: Orders table
   columns:
    - name: id
      description: Primary key
      tests:
       - not_null
       - unique
    - name: amount
 - name: customers
";
        assert!(yaml.starts_with(expected_head), "got:\n{}", yaml);
    }

    #[test]
    fn test_zero_offset_style() {
        let doc = Document::new(vec![Table::new("orders", "x")]);
        let yaml = render_document(&doc, &IndentStyle::new(2, 2, 0)).unwrap();

        assert_eq!(yaml, "version: 2\nmodels:\n- name: orders\n  description: x\n  columns: []\n");
    }

    #[test]
    fn test_nested_mapping_uses_mapping_indent() {
        let value: Value = serde_yaml::from_str("outer:\n  inner: 1\n").unwrap();
        let yaml = render_value(&value, &IndentStyle::new(4, 4, 2)).unwrap();

        assert_eq!(yaml, "outer:\n    inner: 1\n");
    }

    #[test]
    fn test_empty_collections() {
        let doc = Document::new(vec![]);
        let yaml = render_document(&doc, &IndentStyle::default()).unwrap();
        assert_eq!(yaml, "version: 2\nmodels: []\n");

        let mut table = Table::new("orders", "Orders");
        table.columns.push(Column::new("id").with_tests(vec![]));
        let yaml = render_document(&Document::new(vec![table]), &IndentStyle::default()).unwrap();
        assert!(yaml.contains("        tests: []\n"));
    }

    #[test]
    fn test_awkward_scalars_round_trip() {
        let mut table = Table::new("2024", "");
        table.columns.push(Column::new("null").with_description("key: value # not a comment"));
        table.columns.push(Column::new("notes").with_description("first line\nsecond line"));
        table.columns.push(Column::new("flag").with_description("  padded  "));
        table.columns.push(Column::new("name").with_tests(vec!["true".into(), "#hash".into()]));
        let doc = Document::new(vec![table]);

        for style in [IndentStyle::default(), IndentStyle::new(5, 3, 1)] {
            let yaml = render_document(&doc, &style).unwrap();
            let parsed: Document = serde_yaml::from_str(&yaml).unwrap();
            assert_eq!(parsed, doc, "style {:?} produced:\n{}", style, yaml);
        }
    }

    #[test]
    fn test_multiline_string_stays_on_one_line() {
        let rendered = render_string("a\nb").unwrap();
        assert_eq!(rendered, "\"a\\nb\"");
    }

    #[test]
    fn test_invalid_styles_rejected() {
        let doc = Document::new(vec![]);

        let err = render_document(&doc, &IndentStyle::new(0, 4, 2)).unwrap_err();
        assert!(matches!(err, WriteError::InvalidIndent { .. }));

        let err = render_document(&doc, &IndentStyle::new(2, 3, 2)).unwrap_err();
        assert!(err.to_string().contains("sequence 3"));
    }
}
