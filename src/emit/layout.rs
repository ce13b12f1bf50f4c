//! Pretty-printing of flat object literals.
//!
//! Follows the layout Prettier gives a single object: keep it on one line when
//! the whole statement fits within the print width, otherwise put each entry
//! on its own indented line.

use unicode_width::UnicodeWidthStr;

/// Maximum line width before an object is broken over several lines.
pub const PRINT_WIDTH: usize = 80;

/// Indentation used for broken objects.
const INDENT: &str = "  ";

/// How an object literal is wrapped and punctuated.
#[derive(Debug, Clone, Copy)]
pub struct ObjectStyle<'a> {
  /// Text before the opening brace, e.g. `export default `.
  pub prefix: &'a str,
  /// Text after the closing brace, e.g. `;`.
  pub suffix: &'a str,
  /// Whether the last entry of a broken object keeps a comma.
  pub trailing_comma: bool,
}

/// Render `entries` (already-rendered `key` / `value` pairs) as an object
/// statement terminated by a newline.
pub fn render_object(entries: &[(String, String)], style: ObjectStyle<'_>) -> String {
  let flat = render_flat(entries, style);
  if flat.width() <= PRINT_WIDTH {
    return flat + "\n";
  }

  let mut out = String::new();
  out.push_str(style.prefix);
  out.push_str("{\n");

  let last = entries.len().saturating_sub(1);
  for (index, (key, value)) in entries.iter().enumerate() {
    out.push_str(INDENT);
    out.push_str(key);
    out.push_str(": ");
    out.push_str(value);
    if index < last || style.trailing_comma {
      out.push(',');
    }
    out.push('\n');
  }

  out.push('}');
  out.push_str(style.suffix);
  out.push('\n');
  out
}

fn render_flat(entries: &[(String, String)], style: ObjectStyle<'_>) -> String {
  if entries.is_empty() {
    return format!("{}{{}}{}", style.prefix, style.suffix);
  }

  let body = entries
    .iter()
    .map(|(key, value)| format!("{key}: {value}"))
    .collect::<Vec<_>>()
    .join(", ");

  format!("{}{{ {body} }}{}", style.prefix, style.suffix)
}
