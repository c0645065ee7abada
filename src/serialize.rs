use std::io::Write;

use crate::element::{Content, Element};
use crate::error::{Error, ErrorKind};
use crate::name::is_valid_name;

impl Element {
    /// Serialize the element tree to a sink.
    ///
    /// Output is a single XML element, written in one forward pass with
    /// no XML declaration. An element with no contents is self-closed
    /// (`<a/>`); an element with contents always gets an explicit
    /// close tag. Attributes are written in insertion order.
    ///
    /// On failure, bytes already written are not rolled back; the
    /// caller must treat the sink as holding an incomplete document.
    /// The error carries the path from the root to the failing node.
    pub fn serialize<W: Write>(&self, w: &mut W) -> Result<(), Error> {
        let mut path = Vec::new();
        self.serialize_node(w, &mut path)
    }

    /// Serialize the element tree to a string.
    ///
    /// See [`Element::serialize`] for the output rules.
    pub fn serialize_to_string(&self) -> Result<String, Error> {
        let mut buf = Vec::new();
        self.serialize(&mut buf)?;
        // everything the serializer emits is UTF-8; Encode fragments
        // are required to be
        Ok(String::from_utf8(buf).expect("serialized output is UTF-8"))
    }

    fn serialize_node<W: Write>(&self, w: &mut W, path: &mut Vec<String>) -> Result<(), Error> {
        path.push(self.name.clone());

        if !is_valid_name(&self.name) {
            return Err(Error::new(
                ErrorKind::InvalidTagName(self.name.clone()),
                path,
            ));
        }

        write!(w, "<{}", self.name).map_err(|e| Error::new(e.into(), path))?;

        for (name, value) in self.attributes.iter() {
            if !is_valid_name(name) {
                return Err(Error::new(
                    ErrorKind::InvalidAttributeName(name.to_string()),
                    path,
                ));
            }
            // a name that passed validation contains nothing escapable
            write!(w, " {}=\"", name).map_err(|e| Error::new(e.into(), path))?;
            value
                .write_attribute(w)
                .map_err(|kind| Error::new(kind, path))?;
            w.write_all(b"\"").map_err(|e| Error::new(e.into(), path))?;
        }

        if self.contents.is_empty() {
            w.write_all(b"/>").map_err(|e| Error::new(e.into(), path))?;
            path.pop();
            return Ok(());
        }

        w.write_all(b">").map_err(|e| Error::new(e.into(), path))?;

        for content in &self.contents {
            match content {
                Content::Element(element) => element.serialize_node(w, path)?,
                Content::Custom(value) => value.to_element().serialize_node(w, path)?,
                Content::Value(value) => {
                    value.write_text(w).map_err(|kind| Error::new(kind, path))?
                }
            }
        }

        write!(w, "</{}>", self.name).map_err(|e| Error::new(e.into(), path))?;

        path.pop();
        Ok(())
    }
}
