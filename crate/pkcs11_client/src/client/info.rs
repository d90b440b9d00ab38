use serde::Serialize;
use tracing::debug;

use super::Pkcs11Client;
use crate::{
    ClientResult,
    consts::CKF_TOKEN_PRESENT,
    context::{MechanismType, SlotId, SlotInfo, TokenInfo},
    enums::MECHANISMS,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slot {
    pub slot_id: SlotId,
    pub description: String,
    pub manufacturer_id: String,
    pub hardware_version: String,
    pub firmware_version: String,
    pub flags: u64,
    pub token_present: bool,
}

impl Slot {
    fn from_info(slot_id: SlotId, info: SlotInfo) -> Self {
        Self {
            slot_id,
            description: info.slot_description,
            manufacturer_id: info.manufacturer_id,
            hardware_version: info.hardware_version.to_string(),
            firmware_version: info.firmware_version.to_string(),
            flags: info.flags,
            token_present: info.flags & CKF_TOKEN_PRESENT != 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub label: String,
    pub manufacturer_id: String,
    pub model: String,
    pub serial_number: String,
    pub flags: u64,
    pub max_session_count: u64,
    pub session_count: u64,
    pub max_rw_session_count: u64,
    pub rw_session_count: u64,
    pub max_pin_len: u64,
    pub min_pin_len: u64,
    pub total_public_memory: u64,
    pub free_public_memory: u64,
    pub total_private_memory: u64,
    pub free_private_memory: u64,
    pub hardware_version: String,
    pub firmware_version: String,
}

impl From<TokenInfo> for Token {
    fn from(info: TokenInfo) -> Self {
        Self {
            label: info.label,
            manufacturer_id: info.manufacturer_id,
            model: info.model,
            serial_number: info.serial_number,
            flags: info.flags,
            max_session_count: info.max_session_count,
            session_count: info.session_count,
            max_rw_session_count: info.max_rw_session_count,
            rw_session_count: info.rw_session_count,
            max_pin_len: info.max_pin_len,
            min_pin_len: info.min_pin_len,
            total_public_memory: info.total_public_memory,
            free_public_memory: info.free_public_memory,
            total_private_memory: info.total_private_memory,
            free_private_memory: info.free_private_memory,
            hardware_version: info.hardware_version.to_string(),
            firmware_version: info.firmware_version.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupportedMechanism {
    pub name: String,
    pub mechanism_type: MechanismType,
    pub min_key_size: u64,
    pub max_key_size: u64,
    pub flags: u64,
}

impl Pkcs11Client {
    pub fn get_slot_list(&self, token_present: bool) -> ClientResult<Vec<Slot>> {
        self.context()
            .get_slot_list(token_present)?
            .into_iter()
            .map(|slot_id| {
                let info = self.context().get_slot_info(slot_id)?;
                Ok(Slot::from_info(slot_id, info))
            })
            .collect()
    }

    pub fn get_token_info(&self) -> ClientResult<Token> {
        Ok(self.context().get_token_info(self.slot_id())?.into())
    }

    /// The mechanisms of the client's slot. Those whose info cannot be read are skipped.
    pub fn get_mechanism_list(&self) -> ClientResult<Vec<SupportedMechanism>> {
        let slot_id = self.slot_id();
        let mut mechanisms = Vec::new();
        for mechanism_type in self.context().get_mechanism_list(slot_id)? {
            let info = match self.context().get_mechanism_info(slot_id, mechanism_type) {
                Ok(info) => info,
                Err(e) => {
                    debug!("skipping mechanism 0x{mechanism_type:08X}: {e}");
                    continue;
                }
            };
            mechanisms.push(SupportedMechanism {
                name: MECHANISMS
                    .name(mechanism_type)
                    .unwrap_or("UNKNOWN")
                    .to_owned(),
                mechanism_type,
                min_key_size: info.min_key_size,
                max_key_size: info.max_key_size,
                flags: info.flags,
            });
        }
        Ok(mechanisms)
    }
}
