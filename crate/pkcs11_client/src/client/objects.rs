use std::collections::HashMap;

use tracing::trace;

use super::Pkcs11Client;
use crate::{
    ClientError, ClientResult,
    attributes::{OBJECT_ATTRIBUTES, ObjectId, UpdatePlan, bytes_to_ulong},
    consts::{CKA_CLASS, CKA_ID, CKA_LABEL},
    context::{Attribute, AttributeType, ObjectHandle},
};

impl Pkcs11Client {
    pub fn create_object(&self, template: &[Attribute]) -> ClientResult<ObjectHandle> {
        self.with_session(|ctx, session| ctx.create_object(session, template))
    }

    pub fn destroy_object(&self, object: ObjectHandle) -> ClientResult<()> {
        self.with_session(|ctx, session| ctx.destroy_object(session, object))
    }

    pub fn get_attribute_value(
        &self,
        object: ObjectHandle,
        attr_types: &[AttributeType],
    ) -> ClientResult<Vec<Attribute>> {
        self.with_session(|ctx, session| ctx.get_attribute_value(session, object, attr_types))
    }

    pub fn set_attribute_value(
        &self,
        object: ObjectHandle,
        template: &[Attribute],
    ) -> ClientResult<()> {
        self.with_session(|ctx, session| ctx.set_attribute_value(session, object, template))
    }

    /// The requested attributes of `object`, keyed by type.
    pub fn get_object_attributes(
        &self,
        object: ObjectHandle,
        attr_types: &[AttributeType],
    ) -> ClientResult<HashMap<AttributeType, Vec<u8>>> {
        Ok(self
            .get_attribute_value(object, attr_types)?
            .into_iter()
            .map(|a| (a.attr_type, a.value))
            .collect())
    }

    /// The `label/id/class` identity of `object`, when it has all three attributes.
    pub fn get_object_id(&self, object: ObjectHandle) -> ClientResult<Option<ObjectId>> {
        let attributes = self.get_object_attributes(object, &[CKA_LABEL, CKA_ID, CKA_CLASS])?;
        let (Some(label), Some(id), Some(class)) = (
            attributes.get(&CKA_LABEL),
            attributes.get(&CKA_ID),
            attributes.get(&CKA_CLASS),
        ) else {
            return Ok(None);
        };
        Ok(Some(ObjectId::new(
            String::from_utf8_lossy(label),
            id.clone(),
            bytes_to_ulong(class)?,
        )))
    }

    /// Every catalog attribute `object` exposes.
    ///
    /// Each attribute is queried on its own so one the token rejects does not hide the others.
    /// Rejected and absent attributes are left out. Session errors still propagate.
    pub fn get_all_object_attributes(
        &self,
        object: ObjectHandle,
    ) -> ClientResult<HashMap<AttributeType, Vec<u8>>> {
        self.with_session(|ctx, session| {
            let mut attributes = HashMap::new();
            for def in OBJECT_ATTRIBUTES {
                match ctx.get_attribute_value(session, object, &[def.attr_type]) {
                    Ok(values) => {
                        attributes.extend(values.into_iter().map(|a| (a.attr_type, a.value)));
                    }
                    Err(e) if e.is_session_error() => return Err(e),
                    Err(e) => trace!("skipping attribute {}: {e}", def.key),
                }
            }
            Ok(attributes)
        })
    }

    /// Apply a planned update in a single call. Plans requiring a new object are refused.
    pub fn update_object(&self, object: ObjectHandle, plan: &UpdatePlan) -> ClientResult<()> {
        if plan.requires_replacement() {
            return Err(ClientError::ReplacementRequired(
                plan.replacement_required
                    .iter()
                    .map(ToString::to_string)
                    .collect(),
            ));
        }
        if plan.changes.is_empty() {
            return Ok(());
        }
        self.set_attribute_value(object, &plan.changes)
    }
}
