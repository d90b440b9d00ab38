use tracing::{trace, warn};

use super::Pkcs11Client;
use crate::{
    ClientError, ClientResult,
    attributes::{ObjectId, ulong_to_bytes},
    consts::{CKA_CLASS, CKA_ID, CKA_LABEL},
    context::{Attribute, ObjectHandle, Pkcs11Context, SessionHandle},
};

fn collect_objects(
    ctx: &dyn Pkcs11Context,
    session: SessionHandle,
    max_objects: usize,
) -> ClientResult<Vec<ObjectHandle>> {
    let mut objects = Vec::new();
    while objects.len() < max_objects {
        let batch = ctx.find_objects(session, max_objects - objects.len())?;
        trace!("found a batch of {} objects", batch.len());
        if batch.is_empty() {
            break;
        }
        objects.extend(batch);
    }
    objects.truncate(max_objects);
    Ok(objects)
}

fn search(
    ctx: &dyn Pkcs11Context,
    session: SessionHandle,
    template: &[Attribute],
    max_objects: usize,
) -> ClientResult<Vec<ObjectHandle>> {
    ctx.find_objects_init(session, template)?;
    let found = collect_objects(ctx, session, max_objects);
    let finalized = ctx.find_objects_final(session);
    match (found, finalized) {
        (Ok(objects), Ok(())) => Ok(objects),
        (Ok(_), Err(e)) => Err(e),
        (Err(e), finalized) => {
            if let Err(fe) = finalized {
                warn!("failed finalizing the object search: {fe}");
            }
            Err(e)
        }
    }
}

impl Pkcs11Client {
    /// Up to `max_objects` handles of the objects matching `template`.
    pub fn find_objects(
        &self,
        template: &[Attribute],
        max_objects: usize,
    ) -> ClientResult<Vec<ObjectHandle>> {
        self.with_session(|ctx, session| search(ctx, session, template, max_objects))
    }

    /// The single object matching `template`.
    pub fn find_one_object(&self, template: &[Attribute]) -> ClientResult<ObjectHandle> {
        match self.find_objects(template, 2)?.as_slice() {
            [] => Err(ClientError::ObjectNotFound),
            [object] => Ok(*object),
            objects => Err(ClientError::MultipleObjectsFound(objects.len())),
        }
    }

    pub fn find_object_by_label_and_class(
        &self,
        label: &str,
        class: u64,
    ) -> ClientResult<ObjectHandle> {
        self.find_one_object(&[
            Attribute::new(CKA_LABEL, label.as_bytes()),
            Attribute::new(CKA_CLASS, ulong_to_bytes(class)?),
        ])
    }

    pub fn find_object_by_label_id_class(
        &self,
        label: &str,
        id: &[u8],
        class: u64,
    ) -> ClientResult<ObjectHandle> {
        self.find_one_object(&[
            Attribute::new(CKA_LABEL, label.as_bytes()),
            Attribute::new(CKA_ID, id),
            Attribute::new(CKA_CLASS, ulong_to_bytes(class)?),
        ])
    }

    pub fn find_object(&self, object_id: &ObjectId) -> ClientResult<ObjectHandle> {
        self.find_one_object(&object_id.to_template()?)
    }
}
