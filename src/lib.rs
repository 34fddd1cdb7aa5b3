//! A codec for the control-plane side of the GPRS Tunnelling Protocol,
//! version 1 (GTPv1-C), and its charging variant GTP', as specified in
//! 3GPP TS 29.060 and TS 32.295.
//!
//! Currently supported:
//! * The base 8-octet header plus the GTP' optional sub-header and the
//!   32-bit-aligned header extension chain.
//! * The full Information Element catalogue, in both Tag-Value and
//!   Tag-Length-Value framing, including the extended-type escape.
//! * The message catalogue: every GTPv1-C / GTP' message class, each
//!   modelled as an ordered, mandatory/optional-tagged IE template.
//! * SGSN-side and GGSN-side top-level dispatch.
//!
//! # Usage
//!
//! Add the following to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! gtpv1c = "0.1"
//! ```
//!
//! # How to parse a message?
//! The top-level entry points pick a message class off the header's type
//! code and decode the IE block against that class's template:
//!
//! ```
//! use gtpv1c::dispatch::parse_sgsn;
//!
//! let buf = [0x30, 0x02, 0x00, 0x02, 0x00, 0x00, 0x00, 0x00, 0x0E, 0x2A];
//! let (message, status) = parse_sgsn(&buf);
//! let message = message.unwrap();
//! println!("{:?}: {:?}", message.message_type, status);
//! ```
//!
//! `parse_sgsn` and [`dispatch::parse_ggsn`] differ only in how they
//! resolve type codes 18/19 (Update PDP Context Request/Response), which
//! name different message classes depending on which side originated them.
//!
//! Individual pieces — [`header::GtpHeader`], the [`ie`] catalogue, and a
//! message class's [`message::MessageType::template`] — are usable on
//! their own for callers that already know which message class they are
//! decoding.
//!
//! # References
//! * 3GPP TS 29.060, GPRS Tunnelling Protocol across the Gn and Gp interface
//! * 3GPP TS 32.295, Charging Data Record (CDR) transfer, GTP'

// Removes all std and alloc default imports & enables "non std" support.
#![no_std]

extern crate alloc;
#[cfg(test)]
extern crate proptest;
#[cfg(any(feature = "std", test))]
extern crate std;

/// Error and status types returned by the decode/encode paths.
pub mod err;

mod field;

/// The GTP header: base 8 octets, optional sub-header, extension chain.
pub mod header;

/// The Information Element catalogue, value types, and TV/TLV framing.
pub mod ie;

/// The message catalogue: message classes and their IE templates.
pub mod message;

/// SGSN-side and GGSN-side top-level parsers.
pub mod dispatch;
