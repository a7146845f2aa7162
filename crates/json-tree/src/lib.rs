//! A self-contained JSON value model, recursive-descent parser, and
//! two-pass serializer with dotted-path tree access.
//!
//! ```
//! let mut root = json_tree::Value::object();
//! root.add("name", "ferris").unwrap();
//! root.dotset("address.city", "portland").unwrap();
//!
//! let text = json_tree::to_string(&root).unwrap();
//! let parsed = json_tree::parse(&text).unwrap();
//! assert_eq!(parsed.dotget_str("address.city"), "portland");
//! ```

mod comments;
mod error;
mod io;
mod limits;
mod parser;
mod path;
mod serializer;
mod strings;
mod validate;
mod value;

pub use error::Error;
pub use io::{parse_file, parse_file_with_comments, serialize_to_file};
pub use limits::{ARRAY_MAX_CAPACITY, MAX_NESTING, NUMBER_EPSILON, OBJECT_MAX_CAPACITY};
pub use parser::{parse, parse_with_comments};
pub use serializer::{serialize_size, to_string, write_into};
pub use validate::validate;
pub use value::{Tag, Value};
