use std::collections::HashMap;

use super::attr_def_by_type;
use crate::{
    ClientError, ClientResult,
    context::{Attribute, AttributeType},
};

/// The result of comparing an object's current attributes with the desired ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdatePlan {
    /// attributes to write in a single set-attributes call
    pub changes: Vec<Attribute>,
    /// keys of changed attributes that can only be applied by recreating the object
    pub replacement_required: Vec<&'static str>,
}

impl UpdatePlan {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty() && self.replacement_required.is_empty()
    }

    #[must_use]
    pub fn requires_replacement(&self) -> bool {
        !self.replacement_required.is_empty()
    }
}

/// Diff `desired` against the `current` attribute snapshot of an object.
///
/// Computed attributes are never planned. Sensitive attributes cannot be read back, so they
/// are only compared when the snapshot holds them. An attribute missing from the snapshot
/// counts as changed.
pub fn plan_update(
    current: &HashMap<AttributeType, Vec<u8>>,
    desired: &[Attribute],
) -> ClientResult<UpdatePlan> {
    let mut plan = UpdatePlan::default();
    for attribute in desired {
        let def = attr_def_by_type(attribute.attr_type).ok_or_else(|| {
            ClientError::UnknownAttribute(format!("0x{:08X}", attribute.attr_type))
        })?;
        if def.computed {
            continue;
        }
        match current.get(&attribute.attr_type) {
            Some(value) if *value == attribute.value => continue,
            None if def.sensitive => continue,
            _ => {}
        }
        if def.requires_replacement() {
            plan.replacement_required.push(def.key);
        } else {
            plan.changes.push(attribute.clone());
        }
    }
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::plan_update;
    use crate::{
        ClientError,
        attributes::{bool_to_bytes, ulong_to_bytes},
        consts::{
            CKA_CLASS, CKA_DECRYPT, CKA_ENCRYPT, CKA_LABEL, CKA_TOKEN, CKA_VALUE, CKO_DATA,
            CKO_SECRET_KEY,
        },
        context::Attribute,
    };

    fn snapshot() -> HashMap<u64, Vec<u8>> {
        HashMap::from([
            (CKA_CLASS, ulong_to_bytes(CKO_SECRET_KEY).unwrap()),
            (CKA_TOKEN, bool_to_bytes(true)),
            (CKA_LABEL, b"old".to_vec()),
            (CKA_ENCRYPT, bool_to_bytes(true)),
        ])
    }

    #[test]
    fn unchanged_attributes_produce_an_empty_plan() {
        let desired = vec![
            Attribute::new(CKA_LABEL, b"old".to_vec()),
            Attribute::from_bool(CKA_ENCRYPT, true),
        ];
        let plan = plan_update(&snapshot(), &desired).unwrap();
        assert!(plan.is_empty());
    }

    #[test]
    fn mutable_changes_are_batched() {
        let desired = vec![
            Attribute::new(CKA_LABEL, b"new".to_vec()),
            Attribute::from_bool(CKA_ENCRYPT, false),
            Attribute::from_bool(CKA_DECRYPT, true),
        ];
        let plan = plan_update(&snapshot(), &desired).unwrap();
        assert_eq!(plan.changes, desired);
        assert!(!plan.requires_replacement());
    }

    #[test]
    fn computed_and_sensitive_attributes_are_skipped() {
        let desired = vec![
            Attribute::from_ulong(CKA_CLASS, CKO_DATA).unwrap(),
            Attribute::new(CKA_VALUE, vec![1, 2, 3]),
        ];
        let plan = plan_update(&snapshot(), &desired).unwrap();
        assert!(plan.is_empty());
    }

    #[test]
    fn force_new_changes_require_replacement() {
        let desired = vec![
            Attribute::from_bool(CKA_TOKEN, false),
            Attribute::new(CKA_LABEL, b"new".to_vec()),
        ];
        let plan = plan_update(&snapshot(), &desired).unwrap();
        assert_eq!(plan.replacement_required, vec!["token"]);
        assert_eq!(plan.changes.len(), 1);
        assert!(plan.requires_replacement());
    }

    #[test]
    fn unknown_attribute_types_are_rejected() {
        let err = plan_update(&snapshot(), &[Attribute::new(0x8000_0000, vec![])]).unwrap_err();
        assert!(matches!(err, ClientError::UnknownAttribute(key) if key == "0x80000000"));
    }
}
