//! The binary-field engine: bit-granular reading and writing of the
//! primitive fields (`UInt`, `Buf`) that every header, extension, and IE in
//! this crate is built from.
//!
//! Composite shapes (`Group`, `Alt`, `Sequence`, `Array` from the wire
//! format this crate implements) are not modelled as a generic tree here;
//! each header/IE/message type resolves its own computed fields with plain
//! Rust methods, the way [`crate::header::GtpHeader::to_bytes`] derives the
//! header's length octet from its extensions and the caller-supplied IE
//! block length rather than registering a callback with a shared engine.

mod bit_cursor;
pub use bit_cursor::*;

mod bit_sink;
pub use bit_sink::*;
