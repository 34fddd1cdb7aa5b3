use crate::err::{DecodeError, EncodeError};

/// The Cause IE (TS 29.060 section 7.7.1).
///
/// The value's meaning is one of three disjoint dictionaries depending on
/// the `response`/`reject` flags: a request cause (both clear), a
/// response-accepted cause (`response` set, `reject` clear), or a
/// response-rejected cause (both set). Kept as three associated functions
/// rather than one merged table so an out-of-range combination cannot
/// silently resolve to the wrong dictionary's entry.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cause {
    pub response: bool,
    pub reject: bool,
    pub value: u8,
}

impl Cause {
    pub fn decode(payload: &[u8]) -> Result<Cause, DecodeError> {
        let byte = *payload.first().ok_or(DecodeError::BufTooShort {
            what: "Cause",
            required_bytes: 1,
            available_bytes: payload.len(),
        })?;
        Ok(Cause {
            response: byte & 0x80 != 0,
            reject: byte & 0x40 != 0,
            value: byte & 0x3f,
        })
    }

    pub fn encode(&self) -> Result<[u8; 1], EncodeError> {
        if self.value > 0x3f {
            return Err(EncodeError::ValueOutOfRange {
                what: "Cause.value",
                bits: 6,
                value: self.value as u64,
            });
        }
        let byte = ((self.response as u8) << 7) | ((self.reject as u8) << 6) | self.value;
        Ok([byte])
    }

    /// Human-readable name for this cause's value, drawn from whichever of
    /// the three dictionaries the flags select. `None` for values the
    /// referenced dictionary leaves unassigned.
    pub fn description(&self) -> Option<&'static str> {
        match (self.response, self.reject) {
            (false, false) => request_cause_name(self.value),
            (true, false) => response_cause_name(self.value),
            (true, true) => response_rejected_cause_name(self.value),
            // (false, true) is not a meaningful combination; no dictionary applies.
            (false, true) => None,
        }
    }
}

fn request_cause_name(value: u8) -> Option<&'static str> {
    Some(match value {
        0 => "Request IMSI",
        1 => "Request IMEI",
        2 => "Request IMSI and IMEI",
        3 => "No identity needed",
        4 => "MS Refuses",
        5 => "MS is not GPRS Responding",
        6 => "Reactivation Requested",
        7 => "PDP address inactivity timer expires",
        8 => "Network Failure",
        9 => "QoS parameter mismatch",
        _ => return None,
    })
}

fn response_cause_name(value: u8) -> Option<&'static str> {
    Some(match value {
        0 => "Request accepted",
        1 => "New PDP type due to network preference",
        2 => "New PDP type due to single address bearer only",
        _ => return None,
    })
}

fn response_rejected_cause_name(value: u8) -> Option<&'static str> {
    Some(match value {
        0 => "Non-existent",
        1 => "Invalid message format",
        2 => "IMSI/IMEI not known",
        3 => "MS is GPRS Detached",
        4 => "MS is not GPRS Responding",
        5 => "MS Refuses",
        6 => "Version not supported",
        7 => "No resources available",
        8 => "Service not supported",
        9 => "Mandatory IE incorrect",
        10 => "Mandatory IE missing",
        11 => "Optional IE incorrect",
        12 => "System failure",
        13 => "Roaming restriction",
        14 => "P-TMSI Signature mismatch",
        15 => "GPRS connection suspended",
        16 => "Authentication failure",
        17 => "User authentication failed",
        18 => "Context not found",
        19 => "All dynamic PDP addresses are occupied",
        20 => "No memory is available",
        21 => "Relocation failure",
        22 => "Unknown mandatory extension header",
        23 => "Semantic error in the TFT operation",
        24 => "Syntactic error in the TFT operation",
        25 => "Semantic errors in packet filter(s)",
        26 => "Syntactic errors in packet filter(s)",
        27 => "Missing or unknown APN",
        28 => "Unknown PDP address or PDP type",
        29 => "PDP context without TFT already activated",
        30 => "APN access denied - no subscription",
        31 => "APN Restriction type incompatibility with currently active PDP Contexts",
        32 => "MS MBMS Capabilities Insufficient",
        33 => "Invalid Correlation-ID",
        34 => "MBMS Bearer Context Superseded",
        35 => "Bearer Control Mode violation",
        36 => "Collision with network initiated request",
        37 => "APN Congestion",
        38 => "Bearer handling not supported",
        39 => "Target access restricted for the subscriber",
        40 => "UE is temporarily not reachable due to power saving",
        41 => "Relocation failure due to NAS message redirection",
        _ => return None,
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn decode_encode_roundtrip() {
        let bytes = [0b1000_0000u8]; // response, not rejected, value 0
        let cause = Cause::decode(&bytes).unwrap();
        assert_eq!(
            cause,
            Cause {
                response: true,
                reject: false,
                value: 0
            }
        );
        assert_eq!(cause.encode().unwrap(), bytes);
        assert_eq!(cause.description(), Some("Request accepted"));
    }

    #[test]
    fn request_cause_names() {
        let cause = Cause {
            response: false,
            reject: false,
            value: 4,
        };
        assert_eq!(cause.description(), Some("MS Refuses"));
    }

    #[test]
    fn rejected_cause_names() {
        let cause = Cause {
            response: true,
            reject: true,
            value: 10,
        };
        assert_eq!(cause.description(), Some("Mandatory IE missing"));
    }

    #[test]
    fn value_out_of_range() {
        let cause = Cause {
            response: false,
            reject: false,
            value: 0x40,
        };
        assert!(cause.encode().is_err());
    }

    #[test]
    fn too_short() {
        assert!(Cause::decode(&[]).is_err());
    }
}
