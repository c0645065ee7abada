#![forbid(unsafe_code)]

//! Build XML element trees in memory and serialize them to a stream.
//!
//! An [`Element`] has a name, attributes and ordered contents; content
//! items are nested elements, scalar values, values that supply their
//! own element representation through [`ToElement`], or structured
//! values rendered by an external [`Encode`] implementation. The
//! serializer walks the tree once, escaping text and attribute values
//! and validating every name, and reports failures with the exact path
//! from the root to the offending node.
//!
//! This crate only generates XML; it does not parse it.
//!
//! ```
//! use xmlgen::Element;
//!
//! let doc = Element::new("greeting")
//!     .attribute("lang", "en")
//!     .content("hello");
//! assert_eq!(
//!     doc.serialize_to_string().unwrap(),
//!     r#"<greeting lang="en">hello</greeting>"#
//! );
//! ```

mod element;
mod entity;
mod error;
mod name;
mod serialize;
mod value;

pub use element::{Attributes, Content, Element, ToElement};
pub use error::{Error, ErrorKind, Path};
pub use name::is_valid_name;
pub use value::{Encode, EncodeError, Value};
