use crate::err::{DecodeError, EncodeError};
use crate::ie::{decode_known, decode_trailing, encode_known, encode_trailing, peek_type, IeType, IeValue};
use crate::message::TemplateEntry;
use alloc::vec::Vec;

/// The decoded IE block of a message: one slot per [`TemplateEntry`] in the
/// message's template, plus any repeated Private Extension occurrences and
/// any anonymous trailing IEs found after the template was exhausted.
///
/// Decoding and encoding both implement the algorithm in this crate's IE
/// sequence design: absent optional IEs leave their slot `None`; the
/// Private Extension IE (type 255) may repeat and is collected separately
/// rather than overwriting a single slot.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IeSequence {
    template: &'static [TemplateEntry],
    values: Vec<Option<IeValue>>,
    private_extensions: Vec<IeValue>,
    trailing: Vec<(u16, IeValue)>,
}

impl IeSequence {
    /// An empty sequence following `template`, with every slot absent.
    pub fn empty(template: &'static [TemplateEntry]) -> IeSequence {
        IeSequence {
            template,
            values: alloc::vec![None; template.len()],
            private_extensions: Vec::new(),
            trailing: Vec::new(),
        }
    }

    /// Decode `buf` against `template`. `enforce_mandatory` corresponds to
    /// the permissive-mode switch: `true` raises
    /// [`DecodeError::MandatoryIeMissing`] on the first missing mandatory
    /// IE; `false` treats a missing mandatory IE like a missing optional one
    /// and continues.
    pub fn decode(
        message: &'static str,
        template: &'static [TemplateEntry],
        buf: &[u8],
        enforce_mandatory: bool,
    ) -> Result<IeSequence, DecodeError> {
        let mut values: Vec<Option<IeValue>> = alloc::vec![None; template.len()];
        let mut private_extensions = Vec::new();
        let mut i = 0;
        let mut pos = 0;
        while pos < buf.len() && i < template.len() {
            let Ok((type_code, _)) = peek_type(buf, pos) else {
                break;
            };
            let entry = &template[i];
            if type_code == entry.ie_type as u8 as u16 {
                let (value, consumed) = decode_known(buf, pos, entry.ie_type)?;
                pos += consumed;
                if entry.ie_type == IeType::PrivateExt {
                    private_extensions.push(value);
                } else {
                    values[i] = Some(value);
                    i += 1;
                }
            } else if entry.mandatory && enforce_mandatory {
                return Err(DecodeError::MandatoryIeMissing {
                    message,
                    field: entry.field,
                });
            } else {
                i += 1;
            }
        }

        let mut trailing = Vec::new();
        while pos < buf.len() {
            let (type_code, value, consumed) = decode_trailing(buf, pos)?;
            trailing.push((type_code, value));
            pos += consumed;
        }

        Ok(IeSequence {
            template,
            values,
            private_extensions,
            trailing,
        })
    }

    pub fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        let mut out = Vec::new();
        for (entry, value) in self.template.iter().zip(self.values.iter()) {
            if entry.ie_type == IeType::PrivateExt {
                for pe in &self.private_extensions {
                    out.extend(encode_known(entry.ie_type, pe)?);
                }
            } else if let Some(value) = value {
                out.extend(encode_known(entry.ie_type, value)?);
            }
        }
        for (type_code, value) in &self.trailing {
            out.extend(encode_trailing(*type_code, value)?);
        }
        Ok(out)
    }

    /// The value of the named template field, if present on the wire.
    pub fn get(&self, field: &str) -> Option<&IeValue> {
        let idx = self.template.iter().position(|e| e.field == field)?;
        self.values[idx].as_ref()
    }

    /// Set (or clear, with `None`) the named template field.
    pub fn set(&mut self, field: &str, value: Option<IeValue>) {
        if let Some(idx) = self.template.iter().position(|e| e.field == field) {
            self.values[idx] = value;
        }
    }

    /// Every Private Extension occurrence, in wire order.
    pub fn private_extensions(&self) -> &[IeValue] {
        &self.private_extensions
    }

    pub fn push_private_extension(&mut self, value: IeValue) {
        self.private_extensions.push(value);
    }

    /// Anonymous IEs found after the template was exhausted, in wire order.
    pub fn trailing(&self) -> &[(u16, IeValue)] {
        &self.trailing
    }

    /// Field names of mandatory template entries whose slot is absent.
    pub fn missing_mandatory(&self) -> Vec<&'static str> {
        self.template
            .iter()
            .zip(self.values.iter())
            .filter(|(e, v)| e.mandatory && v.is_none())
            .map(|(e, _)| e.field)
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ie::framing::encode_known;

    static TEMPLATE: [TemplateEntry; 2] = [
        TemplateEntry {
            field: "Recovery",
            ie_type: IeType::Recovery,
            mandatory: false,
        },
        TemplateEntry {
            field: "PrivateExt",
            ie_type: IeType::PrivateExt,
            mandatory: false,
        },
    ];

    #[test]
    fn decode_optional_absent() {
        let seq = IeSequence::decode("Test", &TEMPLATE, &[], true).unwrap();
        assert!(seq.get("Recovery").is_none());
        assert!(seq.encode().unwrap().is_empty());
    }

    #[test]
    fn decode_present_roundtrip() {
        let buf = encode_known(IeType::Recovery, &IeValue::Raw(alloc::vec![0x2a])).unwrap();
        let seq = IeSequence::decode("Test", &TEMPLATE, &buf, true).unwrap();
        assert_eq!(seq.get("Recovery"), Some(&IeValue::Raw(alloc::vec![0x2a])));
        assert_eq!(seq.encode().unwrap(), buf);
    }

    #[test]
    fn private_extension_repeats() {
        use crate::ie::PrivateExtension;
        let pe1 = IeValue::PrivateExtension(PrivateExtension {
            extension_id: 1,
            value: alloc::vec![1],
        });
        let pe2 = IeValue::PrivateExtension(PrivateExtension {
            extension_id: 2,
            value: alloc::vec![2],
        });
        let mut buf = encode_known(IeType::PrivateExt, &pe1).unwrap();
        buf.extend(encode_known(IeType::PrivateExt, &pe2).unwrap());
        let seq = IeSequence::decode("Test", &TEMPLATE, &buf, true).unwrap();
        assert_eq!(seq.private_extensions(), &[pe1, pe2]);
        assert_eq!(seq.encode().unwrap(), buf);
    }

    static MANDATORY_TEMPLATE: [TemplateEntry; 1] = [TemplateEntry {
        field: "Recovery",
        ie_type: IeType::Recovery,
        mandatory: true,
    }];

    #[test]
    fn mandatory_missing_strict_errors() {
        let err = IeSequence::decode("Test", &MANDATORY_TEMPLATE, &[], true).unwrap_err();
        assert_eq!(
            err,
            DecodeError::MandatoryIeMissing {
                message: "Test",
                field: "Recovery"
            }
        );
    }

    #[test]
    fn mandatory_missing_permissive_continues() {
        let seq = IeSequence::decode("Test", &MANDATORY_TEMPLATE, &[], false).unwrap();
        assert_eq!(seq.missing_mandatory(), alloc::vec!["Recovery"]);
    }
}
