// License: MIT
// Copyright © 2026 The cim-production Authors

//! RDF/XML rendering of entities.

use petgraph::graph::NodeIndex;

use crate::association::End;
use crate::entities::Record;
use crate::Model;

/// The namespace URI of the RDF vocabulary.
pub(crate) const RDF_NS_URI: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

/// A scalar attribute value that can be written as the text of an RDF/XML
/// element.
pub(crate) trait RdfValue {
    fn write_value(&self, out: &mut String);
}

impl RdfValue for f64 {
    fn write_value(&self, out: &mut String) {
        // `Debug` keeps the decimal point on whole numbers.
        out.push_str(&format!("{:?}", self));
    }
}

impl RdfValue for i32 {
    fn write_value(&self, out: &mut String) {
        out.push_str(&self.to_string());
    }
}

impl RdfValue for bool {
    fn write_value(&self, out: &mut String) {
        out.push_str(if *self { "true" } else { "false" });
    }
}

impl RdfValue for str {
    fn write_value(&self, out: &mut String) {
        escape_into(self, out);
    }
}

impl RdfValue for String {
    fn write_value(&self, out: &mut String) {
        escape_into(self, out);
    }
}

/// Appends `text` to `out`, escaping the XML markup characters.
pub(crate) fn escape_into(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
}

/// Implemented by every entity type, to write its references and attributes
/// into the element that represents it.
pub(crate) trait WriteRdf {
    fn write_rdf(&self, w: &mut RdfWriter<'_>);
}

/// Renders entities of a model as RDF/XML.
///
/// With `pretty` set, every element starts on its own line and is indented by
/// `depth` spaces per nesting level.  Otherwise no whitespace is emitted
/// between elements.
pub(crate) struct RdfWriter<'a> {
    model: &'a Model,
    prefix: &'a str,
    pretty: bool,
    depth: usize,
    level: usize,
    current: NodeIndex,
    out: String,
}

impl<'a> RdfWriter<'a> {
    pub(crate) fn new(model: &'a Model, pretty: bool, depth: usize) -> Self {
        Self {
            model,
            prefix: &model.config().ns_prefix,
            pretty,
            depth,
            level: 0,
            current: NodeIndex::end(),
            out: String::new(),
        }
    }

    /// Starts a new line at the current nesting level, unless this is the
    /// first element of the output.
    fn new_line(&mut self) {
        if self.pretty && !self.out.is_empty() {
            self.out.push('\n');
            self.out
                .extend(std::iter::repeat(' ').take(self.depth * self.level));
        }
    }

    /// Writes the XML declaration and opens the `rdf:RDF` envelope.
    pub(crate) fn open_document(&mut self) {
        self.out
            .push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        self.out.push_str(&format!(
            "<rdf:RDF xmlns:rdf=\"{}\" xmlns:{}=\"",
            RDF_NS_URI, self.prefix
        ));
        escape_into(&self.model.config().ns_uri, &mut self.out);
        self.out.push_str("\">");
        self.level += 1;
    }

    /// Closes the `rdf:RDF` envelope.
    pub(crate) fn close_document(&mut self) {
        self.level = self.level.saturating_sub(1);
        self.new_line();
        self.out.push_str("</rdf:RDF>");
    }

    /// Writes the element of the entity stored at `index`.
    pub(crate) fn entity(&mut self, index: NodeIndex, record: &Record) {
        let class = record.class();
        self.new_line();
        self.out
            .push_str(&format!("<{}:{} rdf:ID=\"", self.prefix, class));
        escape_into(record.uri(), &mut self.out);
        self.out.push_str("\">");

        self.current = index;
        self.level += 1;
        record.write_rdf(self);
        self.level -= 1;

        self.new_line();
        self.out.push_str(&format!("</{}:{}>", self.prefix, class));
    }

    /// Writes a scalar attribute, as `<prefix:Type.field>value</prefix:Type.field>`.
    pub(crate) fn field<V: RdfValue + ?Sized>(&mut self, token: &str, value: &V) {
        self.new_line();
        self.out.push_str(&format!("<{}:{}>", self.prefix, token));
        value.write_value(&mut self.out);
        self.out.push_str(&format!("</{}:{}>", self.prefix, token));
    }

    /// Writes one `rdf:resource` reference per entity related to the current
    /// entity through the given association end.
    pub(crate) fn references(&mut self, end: impl Into<End>) {
        let end = end.into();
        let model = self.model;
        for partner in model.partners(self.current, end) {
            let Some(record) = model.record(partner) else {
                continue;
            };
            self.new_line();
            self.out
                .push_str(&format!("<{}:{} rdf:resource=\"#", self.prefix, end));
            escape_into(record.uri(), &mut self.out);
            self.out.push_str("\"/>");
        }
    }

    pub(crate) fn finish(self) -> String {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<V: RdfValue + ?Sized>(value: &V) -> String {
        let mut out = String::new();
        value.write_value(&mut out);
        out
    }

    #[test]
    fn test_values() {
        assert_eq!(render(&0.0_f64), "0.0");
        assert_eq!(render(&250.5_f64), "250.5");
        assert_eq!(render(&-3.0_f64), "-3.0");
        assert_eq!(render(&7_i32), "7");
        assert_eq!(render(&true), "true");
        assert_eq!(render(&false), "false");
        assert_eq!(render("plain"), "plain");
        assert_eq!(
            render(&String::from("<a & 'b'>")),
            "&lt;a &amp; &apos;b&apos;&gt;"
        );
    }
}
