//! XML building blocks.
//!
//! - [`XmlWriter`] - Depth-tracking writer for indented XML
//! - [`Indent`] - Indentation configuration
//! - [`escape_xml`] - Entity escaping for text and attribute values

mod indent;
mod xml_writer;

pub use indent::Indent;
pub use xml_writer::{Attr, XmlWriter, escape_xml};
