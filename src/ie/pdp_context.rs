use crate::err::{DecodeError, EncodeError};
use crate::field::{BitCursor, BitSink};
use crate::ie::GsnAddress;
use alloc::vec::Vec;

/// PDP Context IE (TS 29.060 section 7.7.29).
///
/// QoS profile, PDP address, and APN payloads are carried opaquely: their
/// internal layout belongs to external codec collaborators (QoS, TS 24.008
/// PDP address encoding, APN label encoding) that this crate only composes
/// by reference, per the framing/ordering/length/composition contract this
/// codec guarantees.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PdpContext {
    pub extension_activity: bool,
    pub vplmn_address_allowed: bool,
    pub activity_status_indicator: bool,
    pub reordering_required: bool,
    pub nsapi: u8,
    pub sapi: u8,
    pub qos_subscribed: Vec<u8>,
    pub qos_requested: Vec<u8>,
    pub qos_negotiated: Vec<u8>,
    pub sequence_number_down: u16,
    pub sequence_number_up: u16,
    pub send_npdu_number: u8,
    pub receive_npdu_number: u8,
    pub uplink_teid_control_plane: u32,
    pub uplink_teid_data_i: u32,
    pub pdp_context_identifier: u8,
    pub pdp_type_organization: u8,
    pub pdp_type_number: u8,
    pub pdp_address: Vec<u8>,
    pub gsn_address_control_plane: GsnAddress,
    pub gsn_address_user_plane: GsnAddress,
    pub apn: Vec<u8>,
    pub transaction_identifier: u8,
    pub pdp_type_number_2: u8,
    pub pdp_address_2: Vec<u8>,
}

fn read_lv<'a>(c: &mut BitCursor<'a>, what: &'static str) -> Result<&'a [u8], DecodeError> {
    let len = c.read_uint(what, 8)? as usize;
    c.read_bytes(what, len)
}

fn write_lv(s: &mut BitSink, what: &'static str, bytes: &[u8]) -> Result<(), EncodeError> {
    s.write_uint(what, 8, bytes.len() as u64)?;
    s.write_bytes(bytes);
    Ok(())
}

impl PdpContext {
    pub fn decode(payload: &[u8]) -> Result<PdpContext, DecodeError> {
        let mut c = BitCursor::new(payload);
        let extension_activity = c.read_uint("PDPContext.EA", 1)? != 0;
        let vplmn_address_allowed = c.read_uint("PDPContext.VAA", 1)? != 0;
        let activity_status_indicator = c.read_uint("PDPContext.ASI", 1)? != 0;
        let reordering_required = c.read_uint("PDPContext.Order", 1)? != 0;
        let nsapi = c.read_uint("PDPContext.NSAPI", 4)? as u8;
        let _spare = c.read_uint("PDPContext.spare1", 4)?;
        let sapi = c.read_uint("PDPContext.SAPI", 4)? as u8;

        let qos_subscribed = read_lv(&mut c, "PDPContext.QoSSub")?.to_vec();
        let qos_requested = read_lv(&mut c, "PDPContext.QoSReq")?.to_vec();
        let qos_negotiated = read_lv(&mut c, "PDPContext.QoSNeg")?.to_vec();

        let sequence_number_down = c.read_uint("PDPContext.SeqNumDL", 16)? as u16;
        let sequence_number_up = c.read_uint("PDPContext.SeqNumUL", 16)? as u16;
        let send_npdu_number = c.read_uint("PDPContext.SendNPDUNum", 8)? as u8;
        let receive_npdu_number = c.read_uint("PDPContext.RecvNPDUNum", 8)? as u8;
        let uplink_teid_control_plane = c.read_uint("PDPContext.ULTEIDCP", 32)? as u32;
        let uplink_teid_data_i = c.read_uint("PDPContext.ULTEIDDataI", 32)? as u32;
        let pdp_context_identifier = c.read_uint("PDPContext.PDPCtxtID", 8)? as u8;
        let _spare2 = c.read_uint("PDPContext.spare2", 4)?;
        let pdp_type_organization = c.read_uint("PDPContext.PDPTypeOrg", 4)? as u8;
        let pdp_type_number = c.read_uint("PDPContext.PDPType", 8)? as u8;
        let pdp_address = read_lv(&mut c, "PDPContext.PDPAddr")?.to_vec();
        let gsn_address_control_plane = GsnAddress::decode(read_lv(&mut c, "PDPContext.GSNAddrCP")?)?;
        let gsn_address_user_plane = GsnAddress::decode(read_lv(&mut c, "PDPContext.GSNAddrUP")?)?;
        let apn = read_lv(&mut c, "PDPContext.APN")?.to_vec();
        let _spare3 = c.read_uint("PDPContext.spare3", 4)?;
        let transaction_identifier = c.read_uint("PDPContext.TI", 4)? as u8;
        let pdp_type_number_2 = c.read_uint("PDPContext.PDPType2", 8)? as u8;
        let pdp_address_2 = read_lv(&mut c, "PDPContext.PDPAddr2")?.to_vec();

        Ok(PdpContext {
            extension_activity,
            vplmn_address_allowed,
            activity_status_indicator,
            reordering_required,
            nsapi,
            sapi,
            qos_subscribed,
            qos_requested,
            qos_negotiated,
            sequence_number_down,
            sequence_number_up,
            send_npdu_number,
            receive_npdu_number,
            uplink_teid_control_plane,
            uplink_teid_data_i,
            pdp_context_identifier,
            pdp_type_organization,
            pdp_type_number,
            pdp_address,
            gsn_address_control_plane,
            gsn_address_user_plane,
            apn,
            transaction_identifier,
            pdp_type_number_2,
            pdp_address_2,
        })
    }

    pub fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        let mut s = BitSink::new();
        s.write_uint("EA", 1, self.extension_activity as u64)?;
        s.write_uint("VAA", 1, self.vplmn_address_allowed as u64)?;
        s.write_uint("ASI", 1, self.activity_status_indicator as u64)?;
        s.write_uint("Order", 1, self.reordering_required as u64)?;
        s.write_uint("NSAPI", 4, self.nsapi as u64)?;
        s.write_uint("spare1", 4, 0)?;
        s.write_uint("SAPI", 4, self.sapi as u64)?;

        write_lv(&mut s, "QoSSub", &self.qos_subscribed)?;
        write_lv(&mut s, "QoSReq", &self.qos_requested)?;
        write_lv(&mut s, "QoSNeg", &self.qos_negotiated)?;

        s.write_uint("SeqNumDL", 16, self.sequence_number_down as u64)?;
        s.write_uint("SeqNumUL", 16, self.sequence_number_up as u64)?;
        s.write_uint("SendNPDUNum", 8, self.send_npdu_number as u64)?;
        s.write_uint("RecvNPDUNum", 8, self.receive_npdu_number as u64)?;
        s.write_uint("ULTEIDCP", 32, self.uplink_teid_control_plane as u64)?;
        s.write_uint("ULTEIDDataI", 32, self.uplink_teid_data_i as u64)?;
        s.write_uint("PDPCtxtID", 8, self.pdp_context_identifier as u64)?;
        s.write_uint("spare2", 4, 0)?;
        s.write_uint("PDPTypeOrg", 4, self.pdp_type_organization as u64)?;
        s.write_uint("PDPType", 8, self.pdp_type_number as u64)?;
        write_lv(&mut s, "PDPAddr", &self.pdp_address)?;
        write_lv(&mut s, "GSNAddrCP", &self.gsn_address_control_plane.encode())?;
        write_lv(&mut s, "GSNAddrUP", &self.gsn_address_user_plane.encode())?;
        write_lv(&mut s, "APN", &self.apn)?;
        s.write_uint("spare3", 4, 0)?;
        s.write_uint("TI", 4, self.transaction_identifier as u64)?;
        s.write_uint("PDPType2", 8, self.pdp_type_number_2 as u64)?;
        write_lv(&mut s, "PDPAddr2", &self.pdp_address_2)?;

        Ok(s.finish())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn sample() -> PdpContext {
        PdpContext {
            extension_activity: false,
            vplmn_address_allowed: true,
            activity_status_indicator: false,
            reordering_required: true,
            nsapi: 5,
            sapi: 3,
            qos_subscribed: alloc::vec![1, 2, 3],
            qos_requested: alloc::vec![1, 2, 3],
            qos_negotiated: alloc::vec![1, 2, 3],
            sequence_number_down: 10,
            sequence_number_up: 20,
            send_npdu_number: 0,
            receive_npdu_number: 0,
            uplink_teid_control_plane: 0x1111_1111,
            uplink_teid_data_i: 0x2222_2222,
            pdp_context_identifier: 1,
            pdp_type_organization: 1,
            pdp_type_number: 0x21,
            pdp_address: alloc::vec![10, 0, 0, 1],
            gsn_address_control_plane: GsnAddress::V4([192, 0, 2, 1]),
            gsn_address_user_plane: GsnAddress::V4([192, 0, 2, 2]),
            apn: alloc::vec![3, b'a', b'p', b'n'],
            transaction_identifier: 0,
            pdp_type_number_2: 0x21,
            pdp_address_2: Vec::new(),
        }
    }

    #[test]
    fn roundtrip() {
        let ctx = sample();
        let bytes = ctx.encode().unwrap();
        let decoded = PdpContext::decode(&bytes).unwrap();
        assert_eq!(decoded, ctx);
    }

    #[test]
    fn out_of_range_nsapi_is_rejected() {
        let mut ctx = sample();
        ctx.nsapi = 16; // 4-bit field, max 15
        assert!(ctx.encode().is_err());
    }
}
