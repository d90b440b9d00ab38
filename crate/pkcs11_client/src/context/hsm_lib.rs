use std::{
    ptr,
    sync::atomic::{AtomicBool, Ordering},
};

use libloading::Library;
use pkcs11_sys::{
    CK_ATTRIBUTE, CK_BBOOL, CK_BYTE_PTR, CK_C_CloseSession, CK_C_CreateObject, CK_C_Decrypt,
    CK_C_DecryptInit, CK_C_DeriveKey, CK_C_DestroyObject, CK_C_Encrypt, CK_C_EncryptInit,
    CK_C_Finalize, CK_C_FindObjects, CK_C_FindObjectsFinal, CK_C_FindObjectsInit,
    CK_C_GenerateKey, CK_C_GenerateKeyPair, CK_C_GetAttributeValue, CK_C_GetMechanismInfo,
    CK_C_GetMechanismList, CK_C_GetSlotInfo, CK_C_GetSlotList, CK_C_GetTokenInfo,
    CK_C_INITIALIZE_ARGS, CK_C_Initialize, CK_C_Login, CK_C_Logout, CK_C_OpenSession,
    CK_C_SetAttributeValue, CK_C_Sign, CK_C_SignInit, CK_C_UnwrapKey, CK_C_WrapKey,
    CK_MECHANISM, CK_MECHANISM_INFO, CK_MECHANISM_TYPE, CK_OBJECT_HANDLE, CK_RV,
    CK_SESSION_HANDLE, CK_SLOT_ID, CK_SLOT_INFO, CK_TOKEN_INFO, CK_ULONG, CK_ULONG_PTR,
    CK_VERSION, CKF_OS_LOCKING_OK, CKR_OK,
};
use tracing::{debug, trace, warn};

use super::{
    Attribute, AttributeType, Mechanism, MechanismInfo, MechanismType, ObjectHandle,
    Pkcs11Context, SessionHandle, SlotId, SlotInfo, TokenInfo, Version,
};
use crate::{ClientError, ClientResult, consts::CKR_CRYPTOKI_ALREADY_INITIALIZED};

const CK_UNAVAILABLE_INFORMATION: CK_ULONG = !0;

/// Call a function of the loaded module and map a non-`CKR_OK` return value to
/// [`ClientError::NativeOperationFailed`].
macro_rules! hsm_call {
    ($hsm:expr, $name:literal, $function:ident $(, $arg:expr)* $(,)?) => {{
        let function = $hsm.$function.ok_or_else(|| {
            ClientError::Default(format!("C_{} not available on library", $name))
        })?;
        let rv = unsafe { function($($arg),*) };
        check_rv($name, rv)
    }};
}

fn check_rv(operation: &'static str, rv: CK_RV) -> ClientResult<()> {
    if rv == CKR_OK {
        Ok(())
    } else {
        trace!("C_{operation} returned 0x{:08X}", u64::from(rv));
        Err(ClientError::native(operation, u64::from(rv)))
    }
}

fn ck_ulong(value: u64) -> ClientResult<CK_ULONG> {
    CK_ULONG::try_from(value)
        .map_err(|_| ClientError::Default(format!("{value} does not fit in a CK_ULONG")))
}

/// Native view of a template. The returned attributes borrow the values of `template`.
fn ck_template(template: &[Attribute]) -> ClientResult<Vec<CK_ATTRIBUTE>> {
    template
        .iter()
        .map(|a| {
            Ok(CK_ATTRIBUTE {
                type_: ck_ulong(a.attr_type)?,
                pValue: a.value.as_ptr().cast_mut().cast(),
                ulValueLen: CK_ULONG::try_from(a.value.len())?,
            })
        })
        .collect()
}

/// Native view of a mechanism. The returned mechanism borrows `parameter`.
fn ck_mechanism(mechanism_type: MechanismType, parameter: &mut [u8]) -> ClientResult<CK_MECHANISM> {
    Ok(CK_MECHANISM {
        mechanism: ck_ulong(mechanism_type)?,
        pParameter: if parameter.is_empty() {
            ptr::null_mut()
        } else {
            parameter.as_mut_ptr().cast()
        },
        ulParameterLen: CK_ULONG::try_from(parameter.len())?,
    })
}

/// Run a variable-length output call twice: once to learn the length, once to fill the buffer.
fn read_output(
    operation: &'static str,
    mut call: impl FnMut(CK_BYTE_PTR, CK_ULONG_PTR) -> CK_RV,
) -> ClientResult<Vec<u8>> {
    let mut len: CK_ULONG = 0;
    check_rv(operation, call(ptr::null_mut(), &raw mut len))?;
    let mut out = vec![0_u8; usize::try_from(len)?];
    check_rv(operation, call(out.as_mut_ptr(), &raw mut len))?;
    out.truncate(usize::try_from(len)?);
    Ok(out)
}

fn padded_string(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes)
        .trim_end_matches([' ', '\0'])
        .to_owned()
}

const fn version(v: CK_VERSION) -> Version {
    Version::new(v.major, v.minor)
}

/// A PKCS#11 module loaded from a shared library.
///
/// The module is initialized by [`Pkcs11Context::initialize`] with OS locking and finalized
/// at most once, either explicitly or when the library is dropped.
#[allow(non_snake_case)]
pub struct HsmLib {
    _library: Library,
    initialized: AtomicBool,

    C_Initialize: CK_C_Initialize,
    C_Finalize: CK_C_Finalize,

    C_GetSlotList: CK_C_GetSlotList,
    C_GetSlotInfo: CK_C_GetSlotInfo,
    C_GetTokenInfo: CK_C_GetTokenInfo,
    C_GetMechanismList: CK_C_GetMechanismList,
    C_GetMechanismInfo: CK_C_GetMechanismInfo,

    C_OpenSession: CK_C_OpenSession,
    C_CloseSession: CK_C_CloseSession,
    C_Login: CK_C_Login,
    C_Logout: CK_C_Logout,

    C_CreateObject: CK_C_CreateObject,
    C_DestroyObject: CK_C_DestroyObject,
    C_FindObjectsInit: CK_C_FindObjectsInit,
    C_FindObjects: CK_C_FindObjects,
    C_FindObjectsFinal: CK_C_FindObjectsFinal,
    C_GetAttributeValue: CK_C_GetAttributeValue,
    C_SetAttributeValue: CK_C_SetAttributeValue,

    C_GenerateKey: CK_C_GenerateKey,
    C_GenerateKeyPair: CK_C_GenerateKeyPair,
    C_WrapKey: CK_C_WrapKey,
    C_UnwrapKey: CK_C_UnwrapKey,
    C_DeriveKey: CK_C_DeriveKey,

    C_EncryptInit: CK_C_EncryptInit,
    C_Encrypt: CK_C_Encrypt,
    C_DecryptInit: CK_C_DecryptInit,
    C_Decrypt: CK_C_Decrypt,
    C_SignInit: CK_C_SignInit,
    C_Sign: CK_C_Sign,
}

impl HsmLib {
    /// Load the module at `path` and resolve the `C_*` entry points the client uses.
    pub fn instantiate<P>(path: P) -> ClientResult<Self>
    where
        P: AsRef<std::ffi::OsStr>,
    {
        debug!("loading PKCS#11 module {:?}", path.as_ref());
        unsafe {
            let library = Library::new(path)?;
            Ok(Self {
                initialized: AtomicBool::new(false),
                C_Initialize: Some(*library.get(b"C_Initialize")?),
                C_Finalize: Some(*library.get(b"C_Finalize")?),
                C_GetSlotList: Some(*library.get(b"C_GetSlotList")?),
                C_GetSlotInfo: Some(*library.get(b"C_GetSlotInfo")?),
                C_GetTokenInfo: Some(*library.get(b"C_GetTokenInfo")?),
                C_GetMechanismList: Some(*library.get(b"C_GetMechanismList")?),
                C_GetMechanismInfo: Some(*library.get(b"C_GetMechanismInfo")?),
                C_OpenSession: Some(*library.get(b"C_OpenSession")?),
                C_CloseSession: Some(*library.get(b"C_CloseSession")?),
                C_Login: Some(*library.get(b"C_Login")?),
                C_Logout: Some(*library.get(b"C_Logout")?),
                C_CreateObject: Some(*library.get(b"C_CreateObject")?),
                C_DestroyObject: Some(*library.get(b"C_DestroyObject")?),
                C_FindObjectsInit: Some(*library.get(b"C_FindObjectsInit")?),
                C_FindObjects: Some(*library.get(b"C_FindObjects")?),
                C_FindObjectsFinal: Some(*library.get(b"C_FindObjectsFinal")?),
                C_GetAttributeValue: Some(*library.get(b"C_GetAttributeValue")?),
                C_SetAttributeValue: Some(*library.get(b"C_SetAttributeValue")?),
                C_GenerateKey: Some(*library.get(b"C_GenerateKey")?),
                C_GenerateKeyPair: Some(*library.get(b"C_GenerateKeyPair")?),
                C_WrapKey: Some(*library.get(b"C_WrapKey")?),
                C_UnwrapKey: Some(*library.get(b"C_UnwrapKey")?),
                C_DeriveKey: Some(*library.get(b"C_DeriveKey")?),
                C_EncryptInit: Some(*library.get(b"C_EncryptInit")?),
                C_Encrypt: Some(*library.get(b"C_Encrypt")?),
                C_DecryptInit: Some(*library.get(b"C_DecryptInit")?),
                C_Decrypt: Some(*library.get(b"C_Decrypt")?),
                C_SignInit: Some(*library.get(b"C_SignInit")?),
                C_Sign: Some(*library.get(b"C_Sign")?),
                // we need to keep the library alive
                _library: library,
            })
        }
    }

    fn crypto_init(
        &self,
        operation: &'static str,
        init: CK_C_EncryptInit,
        session: SessionHandle,
        mechanism: &Mechanism,
        key: ObjectHandle,
    ) -> ClientResult<()> {
        let init = init
            .ok_or_else(|| ClientError::Default(format!("C_{operation} not available on library")))?;
        let mut parameter = mechanism.parameter.clone().unwrap_or_default();
        let mut ck_mechanism = ck_mechanism(mechanism.mechanism_type, &mut parameter)?;
        let rv = unsafe { init(ck_ulong(session)?, &raw mut ck_mechanism, ck_ulong(key)?) };
        check_rv(operation, rv)
    }

    fn crypto_run(
        operation: &'static str,
        run: CK_C_Encrypt,
        session: SessionHandle,
        data: &[u8],
    ) -> ClientResult<Vec<u8>> {
        let run =
            run.ok_or_else(|| ClientError::Default(format!("C_{operation} not available on library")))?;
        let session = ck_ulong(session)?;
        let mut input = data.to_vec();
        let input_len = CK_ULONG::try_from(input.len())?;
        read_output(operation, |out, out_len| unsafe {
            run(session, input.as_mut_ptr(), input_len, out, out_len)
        })
    }
}

impl Pkcs11Context for HsmLib {
    fn initialize(&self) -> ClientResult<()> {
        let mut args = CK_C_INITIALIZE_ARGS {
            CreateMutex: None,
            DestroyMutex: None,
            LockMutex: None,
            UnlockMutex: None,
            flags: CKF_OS_LOCKING_OK,
            pReserved: ptr::null_mut(),
        };
        match hsm_call!(
            self,
            "Initialize",
            C_Initialize,
            (&raw mut args).cast::<std::ffi::c_void>()
        ) {
            Ok(()) => {}
            Err(e) if e.native_code() == Some(CKR_CRYPTOKI_ALREADY_INITIALIZED) => {
                warn!("PKCS#11 module already initialized by this process");
            }
            Err(e) => return Err(e),
        }
        self.initialized.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn finalize(&self) -> ClientResult<()> {
        if !self.initialized.swap(false, Ordering::SeqCst) {
            return Ok(());
        }
        hsm_call!(self, "Finalize", C_Finalize, ptr::null_mut())
    }

    fn get_slot_list(&self, token_present: bool) -> ClientResult<Vec<SlotId>> {
        let present = CK_BBOOL::from(token_present);
        let mut count: CK_ULONG = 0;
        hsm_call!(self, "GetSlotList", C_GetSlotList, present, ptr::null_mut(), &raw mut count)?;
        let mut slots = vec![CK_SLOT_ID::default(); usize::try_from(count)?];
        hsm_call!(
            self,
            "GetSlotList",
            C_GetSlotList,
            present,
            slots.as_mut_ptr(),
            &raw mut count
        )?;
        slots.truncate(usize::try_from(count)?);
        Ok(slots.into_iter().map(u64::from).collect())
    }

    fn get_slot_info(&self, slot_id: SlotId) -> ClientResult<SlotInfo> {
        let mut info = CK_SLOT_INFO::default();
        hsm_call!(self, "GetSlotInfo", C_GetSlotInfo, ck_ulong(slot_id)?, &raw mut info)?;
        Ok(SlotInfo {
            slot_description: padded_string(&info.slotDescription),
            manufacturer_id: padded_string(&info.manufacturerID),
            flags: u64::from(info.flags),
            hardware_version: version(info.hardwareVersion),
            firmware_version: version(info.firmwareVersion),
        })
    }

    fn get_token_info(&self, slot_id: SlotId) -> ClientResult<TokenInfo> {
        let mut info = CK_TOKEN_INFO::default();
        hsm_call!(self, "GetTokenInfo", C_GetTokenInfo, ck_ulong(slot_id)?, &raw mut info)?;
        Ok(TokenInfo {
            label: padded_string(&info.label),
            manufacturer_id: padded_string(&info.manufacturerID),
            model: padded_string(&info.model),
            serial_number: padded_string(&info.serialNumber),
            flags: u64::from(info.flags),
            max_session_count: u64::from(info.ulMaxSessionCount),
            session_count: u64::from(info.ulSessionCount),
            max_rw_session_count: u64::from(info.ulMaxRwSessionCount),
            rw_session_count: u64::from(info.ulRwSessionCount),
            max_pin_len: u64::from(info.ulMaxPinLen),
            min_pin_len: u64::from(info.ulMinPinLen),
            total_public_memory: u64::from(info.ulTotalPublicMemory),
            free_public_memory: u64::from(info.ulFreePublicMemory),
            total_private_memory: u64::from(info.ulTotalPrivateMemory),
            free_private_memory: u64::from(info.ulFreePrivateMemory),
            hardware_version: version(info.hardwareVersion),
            firmware_version: version(info.firmwareVersion),
        })
    }

    fn get_mechanism_list(&self, slot_id: SlotId) -> ClientResult<Vec<MechanismType>> {
        let slot_id = ck_ulong(slot_id)?;
        let mut count: CK_ULONG = 0;
        hsm_call!(
            self,
            "GetMechanismList",
            C_GetMechanismList,
            slot_id,
            ptr::null_mut(),
            &raw mut count
        )?;
        let mut mechanisms = vec![CK_MECHANISM_TYPE::default(); usize::try_from(count)?];
        hsm_call!(
            self,
            "GetMechanismList",
            C_GetMechanismList,
            slot_id,
            mechanisms.as_mut_ptr(),
            &raw mut count
        )?;
        mechanisms.truncate(usize::try_from(count)?);
        Ok(mechanisms.into_iter().map(u64::from).collect())
    }

    fn get_mechanism_info(
        &self,
        slot_id: SlotId,
        mechanism_type: MechanismType,
    ) -> ClientResult<MechanismInfo> {
        let mut info = CK_MECHANISM_INFO::default();
        hsm_call!(
            self,
            "GetMechanismInfo",
            C_GetMechanismInfo,
            ck_ulong(slot_id)?,
            ck_ulong(mechanism_type)?,
            &raw mut info
        )?;
        Ok(MechanismInfo {
            min_key_size: u64::from(info.ulMinKeySize),
            max_key_size: u64::from(info.ulMaxKeySize),
            flags: u64::from(info.flags),
        })
    }

    fn open_session(&self, slot_id: SlotId, flags: u64) -> ClientResult<SessionHandle> {
        let mut session: CK_SESSION_HANDLE = 0;
        hsm_call!(
            self,
            "OpenSession",
            C_OpenSession,
            ck_ulong(slot_id)?,
            ck_ulong(flags)?,
            ptr::null_mut(),
            None,
            &raw mut session
        )?;
        trace!("C_OpenSession on slot {slot_id}: handle {session}");
        Ok(u64::from(session))
    }

    fn close_session(&self, session: SessionHandle) -> ClientResult<()> {
        hsm_call!(self, "CloseSession", C_CloseSession, ck_ulong(session)?)
    }

    fn login(&self, session: SessionHandle, user_type: u64, pin: &str) -> ClientResult<()> {
        hsm_call!(
            self,
            "Login",
            C_Login,
            ck_ulong(session)?,
            ck_ulong(user_type)?,
            pin.as_ptr().cast_mut(),
            CK_ULONG::try_from(pin.len())?
        )
    }

    fn logout(&self, session: SessionHandle) -> ClientResult<()> {
        hsm_call!(self, "Logout", C_Logout, ck_ulong(session)?)
    }

    fn create_object(
        &self,
        session: SessionHandle,
        template: &[Attribute],
    ) -> ClientResult<ObjectHandle> {
        let mut ck_template = ck_template(template)?;
        let mut handle: CK_OBJECT_HANDLE = 0;
        hsm_call!(
            self,
            "CreateObject",
            C_CreateObject,
            ck_ulong(session)?,
            ck_template.as_mut_ptr(),
            CK_ULONG::try_from(ck_template.len())?,
            &raw mut handle
        )?;
        Ok(u64::from(handle))
    }

    fn destroy_object(&self, session: SessionHandle, object: ObjectHandle) -> ClientResult<()> {
        hsm_call!(
            self,
            "DestroyObject",
            C_DestroyObject,
            ck_ulong(session)?,
            ck_ulong(object)?
        )
    }

    fn find_objects_init(
        &self,
        session: SessionHandle,
        template: &[Attribute],
    ) -> ClientResult<()> {
        let mut ck_template = ck_template(template)?;
        hsm_call!(
            self,
            "FindObjectsInit",
            C_FindObjectsInit,
            ck_ulong(session)?,
            ck_template.as_mut_ptr(),
            CK_ULONG::try_from(ck_template.len())?
        )
    }

    fn find_objects(
        &self,
        session: SessionHandle,
        max_count: usize,
    ) -> ClientResult<Vec<ObjectHandle>> {
        let mut handles = vec![CK_OBJECT_HANDLE::default(); max_count];
        let mut count: CK_ULONG = 0;
        hsm_call!(
            self,
            "FindObjects",
            C_FindObjects,
            ck_ulong(session)?,
            handles.as_mut_ptr(),
            CK_ULONG::try_from(max_count)?,
            &raw mut count
        )?;
        let count = usize::try_from(count)?;
        if count > max_count {
            return Err(ClientError::Default(
                "More objects returned than requested".to_owned(),
            ));
        }
        handles.truncate(count);
        Ok(handles.into_iter().map(u64::from).collect())
    }

    fn find_objects_final(&self, session: SessionHandle) -> ClientResult<()> {
        hsm_call!(self, "FindObjectsFinal", C_FindObjectsFinal, ck_ulong(session)?)
    }

    fn get_attribute_value(
        &self,
        session: SessionHandle,
        object: ObjectHandle,
        attr_types: &[AttributeType],
    ) -> ClientResult<Vec<Attribute>> {
        let session = ck_ulong(session)?;
        let object = ck_ulong(object)?;
        // first pass: lengths only
        let mut template = attr_types
            .iter()
            .map(|t| {
                Ok(CK_ATTRIBUTE {
                    type_: ck_ulong(*t)?,
                    pValue: ptr::null_mut(),
                    ulValueLen: 0,
                })
            })
            .collect::<ClientResult<Vec<_>>>()?;
        hsm_call!(
            self,
            "GetAttributeValue",
            C_GetAttributeValue,
            session,
            object,
            template.as_mut_ptr(),
            CK_ULONG::try_from(template.len())?
        )?;

        let mut available = Vec::with_capacity(template.len());
        for (attr_type, ck_attribute) in attr_types.iter().zip(&template) {
            if ck_attribute.ulValueLen == CK_UNAVAILABLE_INFORMATION {
                trace!("attribute 0x{attr_type:08X} unavailable on object {object}");
                continue;
            }
            available.push(Attribute::new(
                *attr_type,
                vec![0_u8; usize::try_from(ck_attribute.ulValueLen)?],
            ));
        }
        if available.is_empty() {
            return Ok(available);
        }

        // second pass: values
        let mut template = available
            .iter_mut()
            .map(|a| {
                Ok(CK_ATTRIBUTE {
                    type_: ck_ulong(a.attr_type)?,
                    pValue: a.value.as_mut_ptr().cast(),
                    ulValueLen: CK_ULONG::try_from(a.value.len())?,
                })
            })
            .collect::<ClientResult<Vec<_>>>()?;
        hsm_call!(
            self,
            "GetAttributeValue",
            C_GetAttributeValue,
            session,
            object,
            template.as_mut_ptr(),
            CK_ULONG::try_from(template.len())?
        )?;
        let lengths = template
            .iter()
            .map(|a| usize::try_from(a.ulValueLen))
            .collect::<Result<Vec<_>, _>>()?;
        for (attribute, len) in available.iter_mut().zip(lengths) {
            attribute.value.truncate(len);
        }
        Ok(available)
    }

    fn set_attribute_value(
        &self,
        session: SessionHandle,
        object: ObjectHandle,
        template: &[Attribute],
    ) -> ClientResult<()> {
        let mut ck_template = ck_template(template)?;
        hsm_call!(
            self,
            "SetAttributeValue",
            C_SetAttributeValue,
            ck_ulong(session)?,
            ck_ulong(object)?,
            ck_template.as_mut_ptr(),
            CK_ULONG::try_from(ck_template.len())?
        )
    }

    fn generate_key(
        &self,
        session: SessionHandle,
        mechanism: &Mechanism,
        template: &[Attribute],
    ) -> ClientResult<ObjectHandle> {
        let mut parameter = mechanism.parameter.clone().unwrap_or_default();
        let mut ck_mechanism = ck_mechanism(mechanism.mechanism_type, &mut parameter)?;
        let mut ck_template = ck_template(template)?;
        let mut handle: CK_OBJECT_HANDLE = 0;
        hsm_call!(
            self,
            "GenerateKey",
            C_GenerateKey,
            ck_ulong(session)?,
            &raw mut ck_mechanism,
            ck_template.as_mut_ptr(),
            CK_ULONG::try_from(ck_template.len())?,
            &raw mut handle
        )?;
        Ok(u64::from(handle))
    }

    fn generate_key_pair(
        &self,
        session: SessionHandle,
        mechanism: &Mechanism,
        public_template: &[Attribute],
        private_template: &[Attribute],
    ) -> ClientResult<(ObjectHandle, ObjectHandle)> {
        let mut parameter = mechanism.parameter.clone().unwrap_or_default();
        let mut ck_mechanism = ck_mechanism(mechanism.mechanism_type, &mut parameter)?;
        let mut public = ck_template(public_template)?;
        let mut private = ck_template(private_template)?;
        let mut public_handle: CK_OBJECT_HANDLE = 0;
        let mut private_handle: CK_OBJECT_HANDLE = 0;
        hsm_call!(
            self,
            "GenerateKeyPair",
            C_GenerateKeyPair,
            ck_ulong(session)?,
            &raw mut ck_mechanism,
            public.as_mut_ptr(),
            CK_ULONG::try_from(public.len())?,
            private.as_mut_ptr(),
            CK_ULONG::try_from(private.len())?,
            &raw mut public_handle,
            &raw mut private_handle
        )?;
        Ok((u64::from(public_handle), u64::from(private_handle)))
    }

    fn wrap_key(
        &self,
        session: SessionHandle,
        mechanism: &Mechanism,
        wrapping_key: ObjectHandle,
        key: ObjectHandle,
    ) -> ClientResult<Vec<u8>> {
        let wrap = self
            .C_WrapKey
            .ok_or_else(|| ClientError::Default("C_WrapKey not available on library".to_owned()))?;
        let mut parameter = mechanism.parameter.clone().unwrap_or_default();
        let mut ck_mechanism = ck_mechanism(mechanism.mechanism_type, &mut parameter)?;
        let session = ck_ulong(session)?;
        let wrapping_key = ck_ulong(wrapping_key)?;
        let key = ck_ulong(key)?;
        read_output("WrapKey", |out, out_len| unsafe {
            wrap(session, &raw mut ck_mechanism, wrapping_key, key, out, out_len)
        })
    }

    fn unwrap_key(
        &self,
        session: SessionHandle,
        mechanism: &Mechanism,
        unwrapping_key: ObjectHandle,
        wrapped_key: &[u8],
        template: &[Attribute],
    ) -> ClientResult<ObjectHandle> {
        let mut parameter = mechanism.parameter.clone().unwrap_or_default();
        let mut ck_mechanism = ck_mechanism(mechanism.mechanism_type, &mut parameter)?;
        let mut wrapped_key = wrapped_key.to_vec();
        let mut ck_template = ck_template(template)?;
        let mut handle: CK_OBJECT_HANDLE = 0;
        hsm_call!(
            self,
            "UnwrapKey",
            C_UnwrapKey,
            ck_ulong(session)?,
            &raw mut ck_mechanism,
            ck_ulong(unwrapping_key)?,
            wrapped_key.as_mut_ptr(),
            CK_ULONG::try_from(wrapped_key.len())?,
            ck_template.as_mut_ptr(),
            CK_ULONG::try_from(ck_template.len())?,
            &raw mut handle
        )?;
        Ok(u64::from(handle))
    }

    fn derive_key(
        &self,
        session: SessionHandle,
        mechanism: &Mechanism,
        base_key: ObjectHandle,
        template: &[Attribute],
    ) -> ClientResult<ObjectHandle> {
        let mut parameter = mechanism.parameter.clone().unwrap_or_default();
        let mut ck_mechanism = ck_mechanism(mechanism.mechanism_type, &mut parameter)?;
        let mut ck_template = ck_template(template)?;
        let mut handle: CK_OBJECT_HANDLE = 0;
        hsm_call!(
            self,
            "DeriveKey",
            C_DeriveKey,
            ck_ulong(session)?,
            &raw mut ck_mechanism,
            ck_ulong(base_key)?,
            ck_template.as_mut_ptr(),
            CK_ULONG::try_from(ck_template.len())?,
            &raw mut handle
        )?;
        Ok(u64::from(handle))
    }

    fn encrypt_init(
        &self,
        session: SessionHandle,
        mechanism: &Mechanism,
        key: ObjectHandle,
    ) -> ClientResult<()> {
        self.crypto_init("EncryptInit", self.C_EncryptInit, session, mechanism, key)
    }

    fn encrypt(&self, session: SessionHandle, data: &[u8]) -> ClientResult<Vec<u8>> {
        Self::crypto_run("Encrypt", self.C_Encrypt, session, data)
    }

    fn decrypt_init(
        &self,
        session: SessionHandle,
        mechanism: &Mechanism,
        key: ObjectHandle,
    ) -> ClientResult<()> {
        self.crypto_init("DecryptInit", self.C_DecryptInit, session, mechanism, key)
    }

    fn decrypt(&self, session: SessionHandle, data: &[u8]) -> ClientResult<Vec<u8>> {
        Self::crypto_run("Decrypt", self.C_Decrypt, session, data)
    }

    fn sign_init(
        &self,
        session: SessionHandle,
        mechanism: &Mechanism,
        key: ObjectHandle,
    ) -> ClientResult<()> {
        self.crypto_init("SignInit", self.C_SignInit, session, mechanism, key)
    }

    fn sign(&self, session: SessionHandle, data: &[u8]) -> ClientResult<Vec<u8>> {
        Self::crypto_run("Sign", self.C_Sign, session, data)
    }
}

impl Drop for HsmLib {
    fn drop(&mut self) {
        if let Err(e) = self.finalize() {
            warn!("failed to finalize the PKCS#11 module: {e}");
        }
    }
}
