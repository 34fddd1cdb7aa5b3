use crate::err::{DecodeError, EncodeError};
use crate::ie::{IeType, IeValue};
use alloc::vec::Vec;

/// Type code of the IE extended-type escape (TS 29.060 section 7.7).
pub const EXTENDED_TYPE_ESCAPE: u8 = 238;

/// Peek the next IE's type code at `pos`, honouring the 238 escape.
///
/// Returns the resolved type code (widened to 16 bits; values above 255 only
/// arise via the escape) and how many bytes the type tag itself occupies (1,
/// or 3 when the escape was used).
pub fn peek_type(buf: &[u8], pos: usize) -> Result<(u16, usize), DecodeError> {
    let first = *buf.get(pos).ok_or(DecodeError::BufTooShort {
        what: "IE type tag",
        required_bytes: pos + 1,
        available_bytes: buf.len(),
    })?;
    if first == EXTENDED_TYPE_ESCAPE {
        if buf.len() < pos + 3 {
            return Err(DecodeError::BufTooShort {
                what: "IE extended type tag",
                required_bytes: pos + 3,
                available_bytes: buf.len(),
            });
        }
        let extended = u16::from_be_bytes([buf[pos + 1], buf[pos + 2]]);
        Ok((extended, 3))
    } else {
        Ok((first as u16, 1))
    }
}

/// Decode one IE at `pos` whose type is already known to be `ie_type` (the
/// caller peeked and matched it against a template entry). Returns the
/// decoded value and the total number of bytes consumed, including the tag.
pub fn decode_known(buf: &[u8], pos: usize, ie_type: IeType) -> Result<(IeValue, usize), DecodeError> {
    if ie_type.is_tag_value() {
        let len = ie_type.fixed_len().ok_or(DecodeError::BufInvalid {
            what: "TV IE",
            reason: "catalogued type has no fixed length",
        })?;
        if buf.len() < pos + 1 + len {
            return Err(DecodeError::BufTooShort {
                what: "TV IE payload",
                required_bytes: pos + 1 + len,
                available_bytes: buf.len(),
            });
        }
        let payload = &buf[pos + 1..pos + 1 + len];
        let value = IeValue::decode(ie_type, payload)?;
        Ok((value, 1 + len))
    } else {
        decode_tlv_body(buf, pos, Some(ie_type))
    }
}

/// Decode one anonymous trailing IE: peek its type (honouring the escape),
/// then decode it as TLV (per the spec's "remaining trailing bytes are
/// decoded as anonymous Tag-Length-Value IEs", regardless of whether the
/// peeked tag would normally be TV-framed).
pub fn decode_trailing(buf: &[u8], pos: usize) -> Result<(u16, IeValue, usize), DecodeError> {
    let (type_code, _) = peek_type(buf, pos)?;
    let ie_type = u8::try_from(type_code).ok().and_then(IeType::from_code);
    let (value, consumed) = decode_tlv_body(buf, pos, ie_type)?;
    Ok((type_code, value, consumed))
}

fn decode_tlv_body(
    buf: &[u8],
    pos: usize,
    ie_type: Option<IeType>,
) -> Result<(IeValue, usize), DecodeError> {
    let first = *buf.get(pos).ok_or(DecodeError::BufTooShort {
        what: "TLV IE tag",
        required_bytes: pos + 1,
        available_bytes: buf.len(),
    })?;
    let extended = first == EXTENDED_TYPE_ESCAPE;
    let header_len = if extended { 3 } else { 1 };
    if buf.len() < pos + header_len + 2 {
        return Err(DecodeError::BufTooShort {
            what: "TLV IE length",
            required_bytes: pos + header_len + 2,
            available_bytes: buf.len(),
        });
    }
    let len_pos = pos + header_len;
    let declared_len = u16::from_be_bytes([buf[len_pos], buf[len_pos + 1]]) as usize;
    // When the escape is in use, the declared length includes the two
    // extended-type octets that already sit ahead of the length field.
    let payload_len = if extended {
        declared_len
            .checked_sub(2)
            .ok_or(DecodeError::BufInvalid {
                what: "TLV IE length",
                reason: "extended-type length shorter than the extended-type octets",
            })?
    } else {
        declared_len
    };
    let payload_start = len_pos + 2;
    if buf.len() < payload_start + payload_len {
        return Err(DecodeError::BufTooShort {
            what: "TLV IE payload",
            required_bytes: payload_start + payload_len,
            available_bytes: buf.len(),
        });
    }
    let payload = &buf[payload_start..payload_start + payload_len];
    let value = match ie_type {
        Some(t) => IeValue::decode(t, payload)?,
        None => IeValue::Raw(payload.to_vec()),
    };
    Ok((value, payload_start + payload_len - pos))
}

/// Encode one IE whose type is `ie_type`, in the framing its type code
/// implies (TV for codes < 128, TLV otherwise).
pub fn encode_known(ie_type: IeType, value: &IeValue) -> Result<Vec<u8>, EncodeError> {
    let payload = value.encode()?;
    let mut out = Vec::with_capacity(payload.len() + 3);
    if ie_type.is_tag_value() {
        out.push(ie_type as u8);
        out.extend_from_slice(&payload);
    } else {
        out.push(ie_type as u8);
        out.extend_from_slice(&(payload.len() as u16).to_be_bytes());
        out.extend_from_slice(&payload);
    }
    Ok(out)
}

/// Encode one anonymous trailing IE. Uses the 238 escape when `type_code`
/// does not fit in 8 bits.
pub fn encode_trailing(type_code: u16, value: &IeValue) -> Result<Vec<u8>, EncodeError> {
    let payload = value.encode()?;
    let mut out = Vec::with_capacity(payload.len() + 5);
    if type_code <= 0xff {
        out.push(type_code as u8);
        out.extend_from_slice(&(payload.len() as u16).to_be_bytes());
    } else {
        out.push(EXTENDED_TYPE_ESCAPE);
        out.extend_from_slice(&type_code.to_be_bytes());
        out.extend_from_slice(&((payload.len() + 2) as u16).to_be_bytes());
    }
    out.extend_from_slice(&payload);
    Ok(out)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn tv_roundtrip() {
        let value = IeValue::Raw(alloc::vec![0x2a]);
        let encoded = encode_known(IeType::Recovery, &value).unwrap();
        assert_eq!(encoded, [14, 0x2a]);
        let (decoded, consumed) = decode_known(&encoded, 0, IeType::Recovery).unwrap();
        assert_eq!(consumed, encoded.len());
        assert_eq!(decoded, value);
    }

    #[test]
    fn tlv_roundtrip() {
        let value = IeValue::Raw(alloc::vec![1, 2, 3]);
        let encoded = encode_known(IeType::APN, &value).unwrap();
        assert_eq!(encoded, [131, 0, 3, 1, 2, 3]);
        let (decoded, consumed) = decode_known(&encoded, 0, IeType::APN).unwrap();
        assert_eq!(consumed, encoded.len());
        assert_eq!(decoded, value);
    }

    #[test]
    fn trailing_anonymous_roundtrip() {
        let value = IeValue::Raw(alloc::vec![9, 9]);
        let encoded = encode_trailing(200, &value).unwrap();
        let (type_code, decoded, consumed) = decode_trailing(&encoded, 0).unwrap();
        assert_eq!(type_code, 200);
        assert_eq!(consumed, encoded.len());
        assert_eq!(decoded, value);
    }

    #[test]
    fn extended_type_escape_roundtrip() {
        let value = IeValue::Raw(alloc::vec![1, 2]);
        let encoded = encode_trailing(1000, &value).unwrap();
        assert_eq!(encoded[0], EXTENDED_TYPE_ESCAPE);
        let (type_code, decoded, consumed) = decode_trailing(&encoded, 0).unwrap();
        assert_eq!(type_code, 1000);
        assert_eq!(consumed, encoded.len());
        assert_eq!(decoded, value);
    }

    #[test]
    fn out_of_range_value_propagates_as_encode_error() {
        use crate::ie::Cause;
        let value = IeValue::Cause(Cause {
            response: false,
            reject: false,
            value: 0x40,
        });
        assert!(encode_known(IeType::Cause, &value).is_err());
    }
}
