use crate::err::{DecodeError, EncodeError};
use crate::ie::{
    Cause, CommonFlags, ExtCommonFlags, GsnAddress, IeType, MbmsIpMulticastDistrib, MmContext,
    PdpContext, PrivateExtension, RabSetupInfo, Uli,
};
use alloc::vec::Vec;

/// The decoded payload of one Information Element.
///
/// Most of the ~150 catalogued types (and every type the catalogue marks
/// [`IeType::is_undefined`]) decode as [`IeValue::Raw`] — an opaque buffer,
/// consumed only as framing/ordering/length/composition per this crate's
/// scope. A handful of deeply structured IEs get a dedicated variant.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum IeValue {
    Raw(Vec<u8>),
    Cause(Cause),
    GsnAddress(GsnAddress),
    Uli(Uli),
    RabSetupInfo(RabSetupInfo),
    CommonFlags(CommonFlags),
    ExtCommonFlags(ExtCommonFlags),
    PrivateExtension(PrivateExtension),
    MbmsIpMulticastDistrib(MbmsIpMulticastDistrib),
    PdpContext(PdpContext),
    MmContext(MmContext),
}

impl IeValue {
    pub fn decode(ie_type: IeType, payload: &[u8]) -> Result<IeValue, DecodeError> {
        Ok(match ie_type {
            IeType::Cause => IeValue::Cause(Cause::decode(payload)?),
            IeType::GSNAddr => IeValue::GsnAddress(GsnAddress::decode(payload)?),
            IeType::ULI => IeValue::Uli(Uli::decode(payload)?),
            IeType::RABSetupInfo | IeType::AdditionalRABSetupInfo => {
                IeValue::RabSetupInfo(RabSetupInfo::decode(payload)?)
            }
            IeType::CommonFlags => IeValue::CommonFlags(CommonFlags::decode(payload)?),
            IeType::ExtCommonFlags => IeValue::ExtCommonFlags(ExtCommonFlags::decode(payload)?),
            IeType::PrivateExt => IeValue::PrivateExtension(PrivateExtension::decode(payload)?),
            IeType::MBMSIPMulticastDistrib => {
                IeValue::MbmsIpMulticastDistrib(MbmsIpMulticastDistrib::decode(payload)?)
            }
            IeType::PDPContext => IeValue::PdpContext(PdpContext::decode(payload)?),
            IeType::MMContext => IeValue::MmContext(MmContext::decode(payload)?),
            _ => IeValue::Raw(payload.to_vec()),
        })
    }

    pub fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        Ok(match self {
            IeValue::Raw(bytes) => bytes.clone(),
            IeValue::Cause(v) => v.encode()?.to_vec(),
            IeValue::GsnAddress(v) => v.encode(),
            IeValue::Uli(v) => v.encode(),
            IeValue::RabSetupInfo(v) => v.encode(),
            IeValue::CommonFlags(v) => v.encode().to_vec(),
            IeValue::ExtCommonFlags(v) => v.encode().to_vec(),
            IeValue::PrivateExtension(v) => v.encode(),
            IeValue::MbmsIpMulticastDistrib(v) => v.encode()?,
            IeValue::PdpContext(v) => v.encode()?,
            IeValue::MmContext(v) => v.encode()?,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn unstructured_type_is_raw() {
        let v = IeValue::decode(IeType::TriggerId, &[1, 2, 3]).unwrap();
        assert_eq!(v, IeValue::Raw(alloc::vec![1, 2, 3]));
        assert_eq!(v.encode().unwrap(), alloc::vec![1, 2, 3]);
    }

    #[test]
    fn cause_decodes_structurally() {
        let v = IeValue::decode(IeType::Cause, &[0x80]).unwrap();
        assert!(matches!(v, IeValue::Cause(_)));
        assert_eq!(v.encode().unwrap(), alloc::vec![0x80]);
    }

    #[test]
    fn out_of_range_cause_value_is_an_encode_error_not_a_panic() {
        let v = IeValue::Cause(Cause {
            response: false,
            reject: false,
            value: 0x40, // 6-bit field, max 0x3f
        });
        assert!(v.encode().is_err());
    }
}
