//! The Information Element (IE) layer: the type catalogue, TV/TLV framing,
//! a handful of deeply structured IE payloads, and the message IE sequence
//! (template-driven decode/encode with mandatory-IE enforcement).

mod catalog;
pub use catalog::*;

mod value;
pub use value::*;

mod framing;
pub use framing::*;

mod template;
pub use template::*;

mod cause;
pub use cause::*;

mod gsn_address;
pub use gsn_address::*;

mod uli;
pub use uli::*;

mod rab_setup_info;
pub use rab_setup_info::*;

mod common_flags;
pub use common_flags::*;

mod private_extension;
pub use private_extension::*;

mod mbms_ip_multicast_distrib;
pub use mbms_ip_multicast_distrib::*;

mod pdp_context;
pub use pdp_context::*;

mod mm_context;
pub use mm_context::*;
