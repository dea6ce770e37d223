//! The configuration tree written into mission files.
//!
//! A [`ConfigNode`] is rendered either in the simulator's bracketed format:
//!
//! ```text
//! <[tmmission_definition][mission][]
//!     <[string8][title][KCCR #1]>
//!     <[float64][origin_alt][1066.799965862401]> // 3500 ft MSL
//! >
//! ```
//!
//! or as the equivalent XML tree.

use std::fmt::{self, Write as _};

#[cfg(test)]
mod tests;

/// Indentation unit for one nesting level.
const INDENT: &str = "    ";

/// Separator placed between the children of a [spacer](ConfigNode::spacer) node.
pub const SPACER_SEPARATOR: &str = concat!(
    "\n// ",
    "-----------------------------------------------------------------------------",
    "\n"
);

/// The scalar payload of a node.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Free-form text.
    Text(String),
    /// A number, rendered in its shortest round-trip form.
    Number(f64),
    /// Space-separated text items.
    TextList(Vec<String>),
    /// Space-separated numbers.
    NumberList(Vec<f64>),
    /// `true` or `false`.
    Bool(bool),
}

impl Default for Value {
    fn default() -> Self { Self::Text(String::new()) }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(number) => fmt::Display::fmt(&Number(*number), f),
            Self::TextList(items) => write_joined(f, items.iter().map(String::as_str)),
            Self::NumberList(items) => write_joined(f, items.iter().copied().map(Number)),
            Self::Bool(value) => f.write_str(if *value { "true" } else { "false" }),
        }
    }
}

fn write_joined<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: impl IntoIterator<Item = T>,
) -> fmt::Result {
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_char(' ')?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl From<&str> for Value {
    fn from(value: &str) -> Self { Self::Text(value.to_owned()) }
}

impl From<String> for Value {
    fn from(value: String) -> Self { Self::Text(value) }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self { Self::Text(value.clone()) }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self { Self::Number(value) }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self { Self::Number(value.into()) }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self { Self::Number(value.into()) }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self { Self::Number(value.into()) }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self { Self::Number(value.into()) }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self { Self::Number(value.into()) }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self { Self::Number(value.into()) }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self { Self::Number(value.into()) }
}

impl From<usize> for Value {
    #[expect(clippy::cast_precision_loss, reason = "list indices stay far below 2^53")]
    fn from(value: usize) -> Self { Self::Number(value as f64) }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self { Self::Bool(value) }
}

impl From<Vec<String>> for Value {
    fn from(value: Vec<String>) -> Self { Self::TextList(value) }
}

impl From<Vec<&str>> for Value {
    fn from(value: Vec<&str>) -> Self { Self::TextList(value.into_iter().map(Into::into).collect()) }
}

impl From<&[String]> for Value {
    fn from(value: &[String]) -> Self { Self::TextList(value.to_vec()) }
}

impl From<Vec<f64>> for Value {
    fn from(value: Vec<f64>) -> Self { Self::NumberList(value) }
}

impl<const N: usize> From<[f64; N]> for Value {
    fn from(value: [f64; N]) -> Self { Self::NumberList(value.to_vec()) }
}

impl<const N: usize> From<[&str; N]> for Value {
    fn from(value: [&str; N]) -> Self {
        Self::TextList(value.iter().map(|&item| item.to_owned()).collect())
    }
}

/// Displays a number the way the simulator's own tooling writes it.
///
/// The shortest digit string that round-trips to the same `f64` is used.
/// Decimal notation covers magnitudes in `1e-7 <= |x| < 1e21`;
/// anything outside uses an exponent with an explicit sign, e.g. `1e+21` or `1.5e-7`.
/// Negative zero prints as `0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Number(pub f64);

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value.is_nan() {
            return f.write_str("NaN");
        }
        if value == 0.0 {
            return f.write_str("0");
        }
        if value.is_infinite() {
            return f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" });
        }
        if value < 0.0 {
            f.write_char('-')?;
        }

        // `{:e}` yields the shortest round-trip digits, e.g. `1.066799965862401e3`.
        let scientific = format!("{:e}", value.abs());
        let Some((mantissa, exponent)) = scientific.split_once('e') else {
            return Err(fmt::Error);
        };
        let exponent: i32 = exponent.parse().map_err(|_| fmt::Error)?;
        let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
        let len = i32::try_from(digits.len()).map_err(|_| fmt::Error)?;

        // number of digits before the decimal point
        let point = exponent + 1;

        if len <= point && point <= 21 {
            f.write_str(&digits)?;
            write_zeros(f, point - len)
        } else if 0 < point && point <= 21 {
            let (int, frac) = digits.split_at(usize::try_from(point).map_err(|_| fmt::Error)?);
            write!(f, "{int}.{frac}")
        } else if -6 < point && point <= 0 {
            f.write_str("0.")?;
            write_zeros(f, -point)?;
            f.write_str(&digits)
        } else {
            let (first, rest) = digits.split_at(1);
            f.write_str(first)?;
            if !rest.is_empty() {
                write!(f, ".{rest}")?;
            }
            let sign = if exponent < 0 { '-' } else { '+' };
            write!(f, "e{sign}{}", exponent.unsigned_abs())
        }
    }
}

fn write_zeros(f: &mut fmt::Formatter<'_>, count: i32) -> fmt::Result {
    for _ in 0..count {
        f.write_char('0')?;
    }
    Ok(())
}

/// How the lines of a node are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineStyle {
    /// Lines are emitted as-is.
    #[default]
    Plain,
    /// Lines are commented out, so the simulator ignores the node
    /// while the file still documents its shape.
    Commented,
}

/// A node in the configuration tree.
///
/// Nodes are append-only: children can be added but never removed or reordered,
/// and rendering never mutates the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigNode {
    kind:       String,
    label:      String,
    value:      Value,
    comment:    String,
    children:   Vec<ConfigNode>,
    separator:  String,
    line_style: LineStyle,
}

impl ConfigNode {
    /// Creates a node with an empty value and no children.
    pub fn new(kind: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            kind:       kind.into(),
            label:      label.into(),
            value:      Value::default(),
            comment:    String::new(),
            children:   Vec::new(),
            separator:  "\n".into(),
            line_style: LineStyle::Plain,
        }
    }

    /// Creates a node whose whole subtree is rendered commented out.
    pub fn commented(kind: impl Into<String>, label: impl Into<String>) -> Self {
        Self { line_style: LineStyle::Commented, ..Self::new(kind, label) }
    }

    /// Creates a node whose children are separated by a banner line in the bracketed format.
    pub fn spacer(kind: impl Into<String>, label: impl Into<String>) -> Self {
        Self { separator: SPACER_SEPARATOR.into(), ..Self::new(kind, label) }
    }

    /// Creates a leaf node holding `value`.
    pub fn leaf(kind: impl Into<String>, label: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(kind, label).with_value(value)
    }

    /// Replaces the scalar value.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = value.into();
        self
    }

    /// Replaces the trailing comment. An empty comment renders nothing.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Replaces the literal text placed between rendered children in the bracketed format.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Replaces the line style of this subtree.
    #[must_use]
    pub fn with_line_style(mut self, line_style: LineStyle) -> Self {
        self.line_style = line_style;
        self
    }

    /// Appends a child node.
    #[must_use]
    pub fn append(mut self, node: ConfigNode) -> Self {
        self.children.push(node);
        self
    }

    /// Appends all nodes in order.
    #[must_use]
    pub fn extend(mut self, nodes: impl IntoIterator<Item = ConfigNode>) -> Self {
        self.children.extend(nodes);
        self
    }

    /// Appends a leaf child.
    #[must_use]
    pub fn append_child(
        self,
        kind: impl Into<String>,
        label: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        self.append(Self::leaf(kind, label, value))
    }

    /// Appends a leaf child with a trailing comment.
    #[must_use]
    pub fn append_annotated(
        self,
        kind: impl Into<String>,
        label: impl Into<String>,
        value: impl Into<Value>,
        comment: impl Into<String>,
    ) -> Self {
        self.append(Self::leaf(kind, label, value).with_comment(comment))
    }

    /// Appends a child node in place.
    pub fn push(&mut self, node: ConfigNode) { self.children.push(node); }

    /// The format-specific type tag.
    pub fn kind(&self) -> &str { &self.kind }

    /// The field name, possibly empty.
    pub fn label(&self) -> &str { &self.label }

    /// The scalar value.
    pub fn value(&self) -> &Value { &self.value }

    /// The trailing comment, empty if absent.
    pub fn comment(&self) -> &str { &self.comment }

    /// The children in insertion order.
    pub fn children(&self) -> &[ConfigNode] { &self.children }

    /// The text placed between children in the bracketed format.
    pub fn separator(&self) -> &str { &self.separator }

    /// Whether this subtree is commented out.
    pub fn line_style(&self) -> LineStyle { self.line_style }

    /// The unescaped string form of the value.
    pub fn value_string(&self) -> String { self.value.to_string() }

    /// Renders the subtree in the bracketed format,
    /// with the first line indented by `indent` levels.
    pub fn render(&self, indent: usize) -> String {
        let indentation = INDENT.repeat(indent);

        let mut tag = format!(
            "{indentation}<[{}][{}][{}]",
            self.kind,
            self.label,
            escape_bracketed(&self.value_string())
        );

        if self.children.is_empty() {
            tag.push('>');
        } else {
            tag.push_str(&self.separator);
            for (i, child) in self.children.iter().enumerate() {
                if i > 0 {
                    tag.push_str(&self.separator);
                }
                tag.push_str(&child.render(indent + 1));
            }
            tag.push_str(&self.separator);
            tag.push_str(&indentation);
            tag.push('>');
        }

        if !self.comment.is_empty() {
            tag.push_str(" // ");
            tag.push_str(&single_line(&self.comment));
        }

        match self.line_style {
            LineStyle::Plain => tag,
            LineStyle::Commented => comment_out_lines(&tag),
        }
    }

    /// Renders the subtree as XML, with the first line indented by `indent` levels.
    ///
    /// The element name is the label, or the kind if the label is empty.
    /// Commented nodes are rendered as `<!-- name type="..">..</name -->`.
    /// XML comments cannot nest, so descendants of a commented node are written
    /// without their own comment markers and trailing comments.
    pub fn render_xml(&self, indent: usize) -> String { self.render_xml_inner(indent, false) }

    fn render_xml_inner(&self, indent: usize, in_comment: bool) -> String {
        let indentation = INDENT.repeat(indent);
        let name = if self.label.is_empty() { &self.kind } else { &self.label };
        let opens_comment = !in_comment && self.line_style == LineStyle::Commented;
        let (open, close) = if opens_comment { ("<!-- ", " -->") } else { ("<", ">") };
        let value = escape_xml(&self.value_string());

        let mut tag = if self.children.is_empty() {
            format!("{indentation}{open}{name} type=\"{}\">{value}</{name}{close}", self.kind)
        } else {
            let index =
                if value.is_empty() { String::new() } else { format!(" index=\"{value}\"") };
            let mut tag = format!("{indentation}{open}{name} type=\"{}\"{index}>", self.kind);
            for child in &self.children {
                tag.push('\n');
                tag.push_str(&child.render_xml_inner(indent + 1, in_comment || opens_comment));
            }
            tag.push('\n');
            tag.push_str(&indentation);
            tag.push_str("</");
            tag.push_str(name);
            tag.push_str(close);
            tag
        };

        if !in_comment && !self.comment.is_empty() {
            tag.push_str(" <!-- ");
            tag.push_str(&escape_xml(&self.comment));
            tag.push_str(" -->");
        }

        tag
    }
}

/// Renders the bracketed format at indent level 0.
impl fmt::Display for ConfigNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.render(0)) }
}

/// Escapes a value for the bracketed format,
/// replacing the delimiters `[` and `]` with `(` and `)`.
pub fn escape_bracketed(text: &str) -> String { text.replace('[', "(").replace(']', ")") }

/// Escapes `& < > " '` as XML entities.
///
/// The same rules apply to attribute values and text content.
pub fn escape_xml(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&#039;"),
            _ => output.push(ch),
        }
    }
    output
}

/// Collapses each line break into a single space,
/// since a `//` comment only extends to the end of its line.
fn single_line(comment: &str) -> String {
    comment.replace("\r\n", " ").replace(['\n', '\r'], " ")
}

/// Inserts `// ` after the indentation of every line not already commented.
fn comment_out_lines(text: &str) -> String {
    let mut output = String::with_capacity(text.len() + 16);
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            output.push('\n');
        }
        let content = line.trim_start_matches(' ');
        let indentation = &line[..line.len() - content.len()];
        output.push_str(indentation);
        if !content.starts_with("//") {
            output.push_str(if content.is_empty() { "//" } else { "// " });
        }
        output.push_str(content);
    }
    output
}
