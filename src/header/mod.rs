//! The GTPv1-C / GTP' header pipeline: the fixed 8-octet base header, the
//! optional 4-octet sub-header, and the chain of 32-bit-aligned header
//! extensions (TS 29.060 section 6, TS 32.295 section 6.2).

mod protocol_type;
pub use protocol_type::*;

mod next_extension_type;
pub use next_extension_type::*;

mod header_extension;
pub use header_extension::*;

mod gtp_header;
pub use gtp_header::*;
