//! Error and status types returned by the decode/encode paths of this crate.
//!
//! One type per concern, with hand-written `Display`/`Error` impls, matching
//! the style used throughout this crate rather than pulling in an
//! error-derive crate.

mod decode_error;
pub use decode_error::*;

mod encode_error;
pub use encode_error::*;

mod parse_status;
pub use parse_status::*;
