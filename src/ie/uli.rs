use crate::err::DecodeError;
use alloc::vec::Vec;

/// User Location Information IE (TS 29.060 section 7.7.51).
///
/// The location payload's internal PLMN/LAC/cell layout is an external
/// collaborator's concern (TS 24.008 cell/routing identities); this crate
/// only distinguishes CGI/SAI/RAI by their fixed length and otherwise
/// carries the location payload opaquely.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Uli {
    /// Cell Global Identification: PLMN + LAC + Cell Id, 7 octets.
    Cgi([u8; 7]),
    /// Service Area Identification: PLMN + LAC + SAC, 7 octets.
    Sai([u8; 7]),
    /// Routing Area Identification: PLMN + LAC + RAC, 6 octets.
    Rai([u8; 6]),
    /// A location type code not in {0, 1, 2}; carried as an opaque buffer.
    Unknown { location_type: u8, data: Vec<u8> },
}

impl Uli {
    pub fn decode(payload: &[u8]) -> Result<Uli, DecodeError> {
        let location_type = *payload.first().ok_or(DecodeError::BufTooShort {
            what: "ULI",
            required_bytes: 1,
            available_bytes: payload.len(),
        })?;
        let rest = &payload[1..];
        match location_type {
            0 => fixed::<7>(rest).map(Uli::Cgi),
            1 => fixed::<7>(rest).map(Uli::Sai),
            2 => fixed::<6>(rest).map(Uli::Rai),
            other => Ok(Uli::Unknown {
                location_type: other,
                data: rest.to_vec(),
            }),
        }
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::new();
        match self {
            Uli::Cgi(d) => {
                out.push(0);
                out.extend_from_slice(d);
            }
            Uli::Sai(d) => {
                out.push(1);
                out.extend_from_slice(d);
            }
            Uli::Rai(d) => {
                out.push(2);
                out.extend_from_slice(d);
            }
            Uli::Unknown { location_type, data } => {
                out.push(*location_type);
                out.extend_from_slice(data);
            }
        }
        out
    }
}

fn fixed<const N: usize>(buf: &[u8]) -> Result<[u8; N], DecodeError> {
    if buf.len() != N {
        return Err(DecodeError::BufInvalid {
            what: "ULI location",
            reason: "wrong length for the declared location type",
        });
    }
    let mut out = [0u8; N];
    out.copy_from_slice(buf);
    Ok(out)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn cgi_roundtrip() {
        let mut bytes = alloc::vec![0u8];
        bytes.extend_from_slice(&[1, 2, 3, 4, 5, 6, 7]);
        let uli = Uli::decode(&bytes).unwrap();
        assert_eq!(uli, Uli::Cgi([1, 2, 3, 4, 5, 6, 7]));
        assert_eq!(uli.encode(), bytes);
    }

    #[test]
    fn unknown_type_is_opaque() {
        let bytes = [9u8, 0xaa, 0xbb];
        let uli = Uli::decode(&bytes).unwrap();
        assert_eq!(
            uli,
            Uli::Unknown {
                location_type: 9,
                data: alloc::vec![0xaa, 0xbb]
            }
        );
        assert_eq!(uli.encode(), bytes);
    }
}
