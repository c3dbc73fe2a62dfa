//! Indenting XML writer.

use super::Indent;

/// An attribute name and its value. `None` values are not written at all.
pub type Attr<'a> = (&'a str, Option<&'a str>);

/// Single-pass, write-only builder for indented XML.
///
/// Every tag is written on its own line at the current depth. [`open`]
/// increases the depth after writing, [`close`] decreases it before writing.
///
/// # Example
///
/// ```
/// use rill_codegen::builder::XmlWriter;
///
/// let mut w = XmlWriter::new();
/// w.open("process", &[("id", Some("p1")), ("name", None)])
///     .self_close("startEvent", &[("id", Some("s"))])
///     .close("process");
///
/// assert_eq!(w.build(), "<process id=\"p1\">\n  <startEvent id=\"s\"/>\n</process>\n");
/// ```
///
/// [`open`]: XmlWriter::open
/// [`close`]: XmlWriter::close
#[derive(Debug, Clone)]
pub struct XmlWriter {
    depth: usize,
    indent: Indent,
    buffer: String,
}

impl XmlWriter {
    /// Create a writer with two-space indentation.
    pub fn new() -> Self {
        Self {
            depth: 0,
            indent: Indent::XML,
            buffer: String::new(),
        }
    }

    /// Write the fixed `<?xml ...?>` header.
    pub fn declaration(&mut self) -> &mut Self {
        self.buffer
            .push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        self
    }

    pub fn open(&mut self, tag: &str, attrs: &[Attr<'_>]) -> &mut Self {
        self.start_tag(tag, attrs);
        self.buffer.push_str(">\n");
        self.depth += 1;
        self
    }

    pub fn close(&mut self, tag: &str) -> &mut Self {
        self.depth = self.depth.saturating_sub(1);
        self.write_indent();
        self.buffer.push_str("</");
        self.buffer.push_str(tag);
        self.buffer.push_str(">\n");
        self
    }

    pub fn self_close(&mut self, tag: &str, attrs: &[Attr<'_>]) -> &mut Self {
        self.start_tag(tag, attrs);
        self.buffer.push_str("/>\n");
        self
    }

    /// Write `<tag>content</tag>` on one line with `content` escaped.
    pub fn text(&mut self, tag: &str, content: &str, attrs: &[Attr<'_>]) -> &mut Self {
        self.start_tag(tag, attrs);
        self.buffer.push('>');
        self.buffer.push_str(&escape_xml(content));
        self.end_inline(tag);
        self
    }

    /// Write `<tag><![CDATA[content]]></tag>` on one line, content unescaped.
    pub fn cdata(&mut self, tag: &str, content: &str, attrs: &[Attr<'_>]) -> &mut Self {
        self.start_tag(tag, attrs);
        self.buffer.push_str("><![CDATA[");
        self.buffer.push_str(content);
        self.buffer.push_str("]]>");
        self.end_inline(tag);
        self
    }

    /// Append `content` as-is, without indentation or newline.
    pub fn raw(&mut self, content: &str) -> &mut Self {
        self.buffer.push_str(content);
        self
    }

    pub fn current_depth(&self) -> usize {
        self.depth
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Consume the writer and return the document.
    pub fn build(self) -> String {
        self.buffer
    }

    fn start_tag(&mut self, tag: &str, attrs: &[Attr<'_>]) {
        self.write_indent();
        self.buffer.push('<');
        self.buffer.push_str(tag);
        for (name, value) in attrs {
            let Some(value) = value else { continue };
            self.buffer.push(' ');
            self.buffer.push_str(name);
            self.buffer.push_str("=\"");
            self.buffer.push_str(&escape_xml(value));
            self.buffer.push('"');
        }
    }

    fn end_inline(&mut self, tag: &str) {
        self.buffer.push_str("</");
        self.buffer.push_str(tag);
        self.buffer.push_str(">\n");
    }

    fn write_indent(&mut self) {
        for _ in 0..self.depth {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for XmlWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Replace `&`, `<`, `>`, `"` and `'` with their entities in one pass.
///
/// Existing entities are not recognized: `&amp;` becomes `&amp;amp;`.
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_ampersand() {
        assert_eq!(escape_xml("a & b"), "a &amp; b");
    }

    #[test]
    fn test_escape_angle_brackets() {
        assert_eq!(escape_xml("<x>"), "&lt;x&gt;");
    }

    #[test]
    fn test_escape_quotes() {
        assert_eq!(escape_xml("\"hello\""), "&quot;hello&quot;");
        assert_eq!(escape_xml("it's"), "it&apos;s");
    }

    #[test]
    fn test_escape_all_together() {
        assert_eq!(
            escape_xml("<a href=\"x&y\">it's</a>"),
            "&lt;a href=&quot;x&amp;y&quot;&gt;it&apos;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_is_single_pass() {
        assert_eq!(escape_xml("&amp;"), "&amp;amp;");
        assert_eq!(escape_xml("hello world 123"), "hello world 123");
    }

    #[test]
    fn test_declaration() {
        let mut w = XmlWriter::new();
        w.declaration();
        assert_eq!(w.build(), "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    }

    #[test]
    fn test_open_close() {
        let mut w = XmlWriter::new();
        w.open("root", &[]).close("root");
        assert_eq!(w.build(), "<root>\n</root>\n");
    }

    #[test]
    fn test_nested_indentation() {
        let mut w = XmlWriter::new();
        w.open("a", &[])
            .open("b", &[])
            .open("c", &[])
            .self_close("d", &[])
            .close("c")
            .close("b")
            .close("a");
        assert_eq!(
            w.build(),
            "<a>\n  <b>\n    <c>\n      <d/>\n    </c>\n  </b>\n</a>\n"
        );
    }

    #[test]
    fn test_absent_attributes_are_omitted() {
        let mut w = XmlWriter::new();
        w.open("task", &[("id", Some("t1")), ("name", None), ("type", Some("service"))])
            .close("task");
        assert_eq!(w.build(), "<task id=\"t1\" type=\"service\">\n</task>\n");
    }

    #[test]
    fn test_attribute_values_are_escaped() {
        let mut w = XmlWriter::new();
        w.self_close("item", &[("value", Some("a \"quoted\" & <special>"))]);
        assert_eq!(
            w.build(),
            "<item value=\"a &quot;quoted&quot; &amp; &lt;special&gt;\"/>\n"
        );
    }

    #[test]
    fn test_text_is_escaped() {
        let mut w = XmlWriter::new();
        w.open("root", &[])
            .text("name", "Hello & World", &[])
            .text("field", "value", &[("name", Some("foo"))])
            .close("root");
        assert_eq!(
            w.build(),
            "<root>\n  <name>Hello &amp; World</name>\n  <field name=\"foo\">value</field>\n</root>\n"
        );
    }

    #[test]
    fn test_cdata_is_not_escaped() {
        let mut w = XmlWriter::new();
        w.open("root", &[])
            .cdata("script", "x > 1", &[("language", Some("groovy"))])
            .close("root");
        assert_eq!(
            w.build(),
            "<root>\n  <script language=\"groovy\"><![CDATA[x > 1]]></script>\n</root>\n"
        );
    }

    #[test]
    fn test_raw_is_unindented() {
        let mut w = XmlWriter::new();
        w.open("root", &[]).raw("<!-- comment -->\n").close("root");
        assert_eq!(w.build(), "<root>\n<!-- comment -->\n</root>\n");
    }

    #[test]
    fn test_depth_tracking() {
        let mut w = XmlWriter::new();
        w.open("a", &[]).open("b", &[]);
        assert_eq!(w.current_depth(), 2);
        w.close("b");
        assert_eq!(w.current_depth(), 1);
        assert!(w.as_str().ends_with("</b>\n"));
    }
}
