use crate::err::DecodeError;
use crate::header::NextExtensionType;
use alloc::vec::Vec;

/// One entry in the header extension chain.
///
/// The frame on the wire is `(length in units of 4 octets, content, next
/// extension type)`; `next extension type` is not stored here because it is
/// fully determined by chain position (the following entry's `ext_type`, or
/// [`NextExtensionType::None`] for the last entry) — storing it separately
/// would just be a second, independently-mutable copy of that information.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeaderExtension {
    pub ext_type: NextExtensionType,
    pub content: Vec<u8>,
}

impl HeaderExtension {
    /// Total on-wire length of this extension frame in octets: the length
    /// byte, the content, and the next-type byte, rounded to a multiple of 4.
    pub fn frame_len(&self) -> usize {
        let raw = self.content.len() + 2;
        raw.div_ceil(4) * 4
    }
}

/// Decode the extension chain starting at `cursor`, given the type of the
/// first extension (from the optional sub-header's or preceding extension's
/// next-type field).
pub(crate) fn decode_chain(
    buf: &[u8],
    mut pos: usize,
    mut next_type: NextExtensionType,
) -> Result<(Vec<HeaderExtension>, usize), DecodeError> {
    let mut out = Vec::new();
    while next_type != NextExtensionType::None {
        if buf.len() < pos + 1 {
            return Err(DecodeError::BufTooShort {
                what: "header extension length",
                required_bytes: pos + 1,
                available_bytes: buf.len(),
            });
        }
        let len_units = buf[pos] as usize;
        let frame_len = len_units * 4;
        if frame_len < 4 || buf.len() < pos + frame_len {
            return Err(DecodeError::BufTooShort {
                what: "header extension content",
                required_bytes: pos + frame_len.max(4),
                available_bytes: buf.len(),
            });
        }
        // The frame's declared length rounds up to a 4-octet multiple and may
        // pad beyond the type's true content length; a known type's padding
        // is not content, so only its catalogued length is kept. An `Other`
        // type's shape isn't catalogued, so the whole padded region between
        // the length and next-type bytes is kept as its opaque content.
        let content_end = match next_type.known_content_len() {
            Some(known_len) => pos + 1 + known_len,
            None => pos + frame_len - 1,
        };
        if content_end > pos + frame_len - 1 {
            return Err(DecodeError::BufInvalid {
                what: "header extension content",
                reason: "catalogued content length exceeds the frame's declared length",
            });
        }
        let content = buf[pos + 1..content_end].to_vec();
        let following = NextExtensionType::from_code(buf[pos + frame_len - 1]);
        out.push(HeaderExtension {
            ext_type: next_type,
            content,
        });
        pos += frame_len;
        next_type = following;
    }
    Ok((out, pos))
}

/// Encode the extension chain, returning its bytes and the type to place in
/// the preceding sub-header/extension's next-type field (`None` if `chain`
/// is empty).
pub(crate) fn encode_chain(chain: &[HeaderExtension]) -> (Vec<u8>, NextExtensionType) {
    let mut out = Vec::new();
    for (i, ext) in chain.iter().enumerate() {
        let frame_len = ext.frame_len();
        let len_units = (frame_len / 4) as u8;
        let next = chain
            .get(i + 1)
            .map(|e| e.ext_type)
            .unwrap_or(NextExtensionType::None);
        out.push(len_units);
        out.extend_from_slice(&ext.content);
        // pad content to the frame's declared length minus the 2 framing bytes.
        let padding = frame_len - 2 - ext.content.len();
        out.extend(core::iter::repeat(0u8).take(padding));
        out.push(next.code());
    }
    let head = chain.first().map(|e| e.ext_type).unwrap_or(NextExtensionType::None);
    (out, head)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn chain_roundtrip() {
        // MBMS support indication carries no content of its own, so its
        // frame is 2 octets of padding sandwiched between the length and
        // next-type bytes; PDCP PDU number's 2-octet content exactly fills
        // its frame with no padding at all.
        let chain = alloc::vec![
            HeaderExtension {
                ext_type: NextExtensionType::MbmsSupportIndication,
                content: Vec::new(),
            },
            HeaderExtension {
                ext_type: NextExtensionType::PdcpPduNumber,
                content: alloc::vec![0x01, 0x02],
            },
        ];
        let (bytes, head_type) = encode_chain(&chain);
        assert_eq!(head_type, NextExtensionType::MbmsSupportIndication);
        let (decoded, pos) = decode_chain(&bytes, 0, head_type).unwrap();
        assert_eq!(pos, bytes.len());
        assert_eq!(decoded, chain);
    }

    #[test]
    fn unknown_extension_keeps_its_whole_padded_region_as_content() {
        // An uncatalogued type's true content length isn't known, so the
        // entire region between the length and next-type bytes round trips
        // as opaque content as long as the caller already supplied it
        // 4-octet-frame-aligned (no further padding added on re-encode).
        let chain = alloc::vec![HeaderExtension {
            ext_type: NextExtensionType::Other(77),
            content: alloc::vec![0xaa, 0xbb],
        }];
        let (bytes, head_type) = encode_chain(&chain);
        assert_eq!(head_type, NextExtensionType::Other(77));
        let (decoded, pos) = decode_chain(&bytes, 0, head_type).unwrap();
        assert_eq!(pos, bytes.len());
        assert_eq!(decoded, chain);
    }

    #[test]
    fn empty_chain_is_none() {
        let (bytes, head_type) = encode_chain(&[]);
        assert!(bytes.is_empty());
        assert_eq!(head_type, NextExtensionType::None);
    }
}
