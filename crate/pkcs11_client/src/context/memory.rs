use std::{
    collections::{BTreeMap, HashMap, VecDeque},
    sync::{
        Mutex, MutexGuard,
        atomic::{AtomicU64, Ordering},
    },
};

use tracing::trace;

use super::{
    Attribute, AttributeType, Mechanism, MechanismInfo, MechanismType, ObjectHandle,
    Pkcs11Context, SessionHandle, SlotId, SlotInfo, TokenInfo, Version,
};
use crate::{
    ClientError, ClientResult,
    attributes::{bool_to_bytes, bytes_to_bool, bytes_to_ulong, ulong_to_bytes},
    consts::{
        CKA_CLASS, CKA_KEY_GEN_MECHANISM, CKA_LOCAL, CKA_MODULUS, CKA_SENSITIVE, CKA_VALUE,
        CKA_VALUE_LEN, CKF_TOKEN_PRESENT, CKM_AES_CBC, CKM_AES_ECB, CKM_AES_KEY_GEN,
        CKM_RSA_PKCS, CKM_RSA_PKCS_KEY_PAIR_GEN, CKO_PRIVATE_KEY, CKO_PUBLIC_KEY, CKO_SECRET_KEY,
        CKR_ATTRIBUTE_SENSITIVE, CKR_CRYPTOKI_NOT_INITIALIZED, CKR_KEY_HANDLE_INVALID,
        CKR_MECHANISM_INVALID, CKR_OBJECT_HANDLE_INVALID, CKR_OPERATION_ACTIVE,
        CKR_OPERATION_NOT_INITIALIZED, CKR_PIN_INCORRECT, CKR_SESSION_HANDLE_INVALID,
        CKR_SLOT_ID_INVALID, CKR_TOKEN_NOT_PRESENT, CKR_USER_ALREADY_LOGGED_IN,
    },
};

const CKF_HW: u64 = 0x0000_0001;
const CKF_ENCRYPT: u64 = 0x0000_0100;
const CKF_DECRYPT: u64 = 0x0000_0200;
const CKF_SIGN: u64 = 0x0000_0800;
const CKF_GENERATE: u64 = 0x0000_8000;
const CKF_GENERATE_KEY_PAIR: u64 = 0x0001_0000;

const WRAPPED_KEY: &[u8] = b"mock-wrapped-key";
const SIGNATURE_LANES: u64 = 4;

/// A slot of the in-memory token, with or without a token inserted.
#[derive(Debug, Clone)]
pub struct MockToken {
    pub slot_info: SlotInfo,
    pub token_info: Option<TokenInfo>,
    pub mechanisms: Vec<(MechanismType, MechanismInfo)>,
}

impl MockToken {
    #[must_use]
    pub fn new(label: &str) -> Self {
        let symmetric = MechanismInfo {
            min_key_size: 16,
            max_key_size: 32,
            flags: CKF_HW | CKF_ENCRYPT | CKF_DECRYPT,
        };
        let rsa = MechanismInfo {
            min_key_size: 2048,
            max_key_size: 4096,
            flags: CKF_HW | CKF_ENCRYPT | CKF_DECRYPT | CKF_SIGN,
        };
        Self {
            slot_info: SlotInfo {
                slot_description: "Mock Slot".to_owned(),
                manufacturer_id: "Test".to_owned(),
                flags: CKF_TOKEN_PRESENT,
                hardware_version: Version::new(1, 0),
                firmware_version: Version::new(2, 10),
            },
            token_info: Some(TokenInfo {
                label: label.to_owned(),
                manufacturer_id: "Test Manufacturer".to_owned(),
                model: "Mock HSM".to_owned(),
                serial_number: "0001".to_owned(),
                max_session_count: 16,
                max_rw_session_count: 16,
                max_pin_len: 32,
                min_pin_len: 4,
                hardware_version: Version::new(1, 0),
                firmware_version: Version::new(2, 10),
                ..TokenInfo::default()
            }),
            mechanisms: vec![
                (
                    CKM_AES_KEY_GEN,
                    MechanismInfo {
                        flags: CKF_HW | CKF_GENERATE,
                        ..symmetric
                    },
                ),
                (CKM_AES_CBC, symmetric),
                (CKM_AES_ECB, symmetric),
                (
                    CKM_RSA_PKCS_KEY_PAIR_GEN,
                    MechanismInfo {
                        flags: CKF_HW | CKF_GENERATE_KEY_PAIR,
                        ..rsa
                    },
                ),
                (CKM_RSA_PKCS, rsa),
            ],
        }
    }

    /// A slot with no token inserted.
    #[must_use]
    pub fn empty_slot() -> Self {
        Self {
            slot_info: SlotInfo {
                slot_description: "Empty Mock Slot".to_owned(),
                manufacturer_id: "Test".to_owned(),
                ..SlotInfo::default()
            },
            token_info: None,
            mechanisms: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_serial_number(mut self, serial_number: &str) -> Self {
        if let Some(token) = self.token_info.as_mut() {
            serial_number.clone_into(&mut token.serial_number);
        }
        self
    }

    #[must_use]
    pub fn with_manufacturer(mut self, manufacturer: &str) -> Self {
        if let Some(token) = self.token_info.as_mut() {
            manufacturer.clone_into(&mut token.manufacturer_id);
        }
        self
    }

    #[must_use]
    pub fn with_model(mut self, model: &str) -> Self {
        if let Some(token) = self.token_info.as_mut() {
            model.clone_into(&mut token.model);
        }
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CryptoOperation {
    Encrypt,
    Decrypt,
    Sign,
}

#[derive(Debug)]
struct ActiveOperation {
    operation: CryptoOperation,
    mechanism_type: MechanismType,
    key: ObjectHandle,
}

#[derive(Debug)]
struct Search {
    results: Vec<ObjectHandle>,
    cursor: usize,
}

#[derive(Debug)]
struct MockSession {
    slot_id: SlotId,
    logged_in: bool,
    search: Option<Search>,
    active: Option<ActiveOperation>,
}

#[derive(Default)]
struct State {
    initialized: bool,
    initialize_count: usize,
    finalize_count: usize,
    slots: BTreeMap<SlotId, MockToken>,
    sessions: HashMap<SessionHandle, MockSession>,
    objects: BTreeMap<ObjectHandle, HashMap<AttributeType, Vec<u8>>>,
    failures: HashMap<String, VecDeque<u64>>,
    opened: Vec<SessionHandle>,
    closed: Vec<SessionHandle>,
    calls: Vec<(&'static str, SessionHandle)>,
}

impl State {
    fn check_initialized(&self, operation: &'static str) -> ClientResult<()> {
        if self.initialized {
            Ok(())
        } else {
            Err(ClientError::native(operation, CKR_CRYPTOKI_NOT_INITIALIZED))
        }
    }

    fn take_failure(&mut self, operation: &'static str) -> ClientResult<()> {
        match self.failures.get_mut(operation).and_then(VecDeque::pop_front) {
            Some(code) => {
                trace!("MemoryContext: injected failure 0x{code:08X} for {operation}");
                Err(ClientError::native(operation, code))
            }
            None => Ok(()),
        }
    }

    /// Common prologue of a session-scoped call.
    fn enter(
        &mut self,
        operation: &'static str,
        session: SessionHandle,
    ) -> ClientResult<&mut MockSession> {
        self.check_initialized(operation)?;
        self.calls.push((operation, session));
        self.take_failure(operation)?;
        self.session(operation, session)
    }

    fn session(
        &mut self,
        operation: &'static str,
        session: SessionHandle,
    ) -> ClientResult<&mut MockSession> {
        self.sessions
            .get_mut(&session)
            .ok_or_else(|| ClientError::native(operation, CKR_SESSION_HANDLE_INVALID))
    }

    fn slot(&self, operation: &'static str, slot_id: SlotId) -> ClientResult<&MockToken> {
        self.slots
            .get(&slot_id)
            .ok_or_else(|| ClientError::native(operation, CKR_SLOT_ID_INVALID))
    }

    fn object(
        &self,
        operation: &'static str,
        object: ObjectHandle,
        code: u64,
    ) -> ClientResult<&HashMap<AttributeType, Vec<u8>>> {
        self.objects
            .get(&object)
            .ok_or_else(|| ClientError::native(operation, code))
    }
}

/// An in-memory PKCS#11 token.
///
/// Slot 0 holds a token with the label given at construction. Objects are attribute maps
/// matched by exact bytes. Failures can be injected per operation with
/// [`MemoryContext::fail_next`], and every session-scoped call is recorded so callers can check
/// which session it ran on.
pub struct MemoryContext {
    state: Mutex<State>,
    next_session: AtomicU64,
    next_object: AtomicU64,
    pin: Option<String>,
}

impl MemoryContext {
    #[must_use]
    pub fn new(token_label: &str) -> Self {
        let mut slots = BTreeMap::new();
        slots.insert(0, MockToken::new(token_label));
        Self {
            state: Mutex::new(State {
                slots,
                ..State::default()
            }),
            next_session: AtomicU64::new(1),
            next_object: AtomicU64::new(1),
            pin: None,
        }
    }

    /// Only accept `pin` at login.
    #[must_use]
    pub fn with_pin(mut self, pin: &str) -> Self {
        self.pin = Some(pin.to_owned());
        self
    }

    fn state(&self) -> ClientResult<MutexGuard<'_, State>> {
        self.state.lock().map_err(|e| {
            ClientError::Default(format!("failed acquiring a lock on the token state: {e:?}"))
        })
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    pub fn add_slot(&self, slot_id: SlotId, token: MockToken) {
        self.lock().slots.insert(slot_id, token);
    }

    /// Make the next call to `operation` (for instance `"FindObjectsInit"`) fail with `code`.
    /// Repeated calls queue further failures.
    pub fn fail_next(&self, operation: &str, code: u64) {
        self.lock()
            .failures
            .entry(operation.to_owned())
            .or_default()
            .push_back(code);
    }

    /// Drop a session on the token side, as a device reset would.
    pub fn invalidate_session(&self, session: SessionHandle) {
        self.lock().sessions.remove(&session);
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.lock().initialized
    }

    #[must_use]
    pub fn initialize_count(&self) -> usize {
        self.lock().initialize_count
    }

    #[must_use]
    pub fn finalize_count(&self) -> usize {
        self.lock().finalize_count
    }

    /// Every session handle ever opened, in order.
    #[must_use]
    pub fn opened_sessions(&self) -> Vec<SessionHandle> {
        self.lock().opened.clone()
    }

    /// Every session handle closed through `CloseSession`, in order.
    #[must_use]
    pub fn closed_sessions(&self) -> Vec<SessionHandle> {
        self.lock().closed.clone()
    }

    /// Sessions currently open on the token.
    #[must_use]
    pub fn live_sessions(&self) -> usize {
        self.lock().sessions.len()
    }

    #[must_use]
    pub fn is_logged_in(&self, session: SessionHandle) -> bool {
        self.lock()
            .sessions
            .get(&session)
            .is_some_and(|s| s.logged_in)
    }

    /// The sessions `operation` was called on, in call order.
    #[must_use]
    pub fn sessions_used_by(&self, operation: &str) -> Vec<SessionHandle> {
        self.lock()
            .calls
            .iter()
            .filter(|(op, _)| *op == operation)
            .map(|(_, session)| *session)
            .collect()
    }

    #[must_use]
    pub fn object_count(&self) -> usize {
        self.lock().objects.len()
    }

    fn store(&self, state: &mut State, template: &[Attribute]) -> ObjectHandle {
        let handle = self.next_object.fetch_add(1, Ordering::SeqCst);
        let attributes = template
            .iter()
            .map(|a| (a.attr_type, a.value.clone()))
            .collect();
        state.objects.insert(handle, attributes);
        handle
    }

    fn store_key(
        &self,
        state: &mut State,
        template: &[Attribute],
        class: u64,
        mechanism_type: Option<MechanismType>,
    ) -> ClientResult<ObjectHandle> {
        let handle = self.store(state, template);
        let class_bytes = ulong_to_bytes(class)?;
        let object = state
            .objects
            .get_mut(&handle)
            .ok_or_else(|| ClientError::Default(format!("object {handle} vanished")))?;
        object
            .entry(CKA_CLASS)
            .or_insert(class_bytes);
        if let Some(mechanism_type) = mechanism_type {
            object.insert(CKA_LOCAL, bool_to_bytes(true));
            object.insert(CKA_KEY_GEN_MECHANISM, ulong_to_bytes(mechanism_type)?);
        }
        if class == CKO_SECRET_KEY && !object.contains_key(&CKA_VALUE) {
            let len = match object.get(&CKA_VALUE_LEN) {
                Some(bytes) => usize::try_from(bytes_to_ulong(bytes)?)?,
                None => 16,
            };
            let seed = handle.to_le_bytes();
            let value = (0..len)
                .map(|i| seed[i % seed.len()].wrapping_add(u8::try_from(i % 256).unwrap_or(0)))
                .collect();
            object.insert(CKA_VALUE, value);
        }
        if class == CKO_PUBLIC_KEY {
            object.entry(CKA_MODULUS).or_insert_with(|| vec![0x00, 0x01]);
        }
        Ok(handle)
    }

    fn crypto_init(
        &self,
        operation_name: &'static str,
        operation: CryptoOperation,
        session: SessionHandle,
        mechanism: &Mechanism,
        key: ObjectHandle,
    ) -> ClientResult<()> {
        let mut state = self.state()?;
        let slot_id = state.enter(operation_name, session)?.slot_id;
        state.object(operation_name, key, CKR_KEY_HANDLE_INVALID)?;
        let supported = state
            .slot(operation_name, slot_id)?
            .mechanisms
            .iter()
            .any(|(m, _)| *m == mechanism.mechanism_type);
        if !supported {
            return Err(ClientError::native(operation_name, CKR_MECHANISM_INVALID));
        }
        let session = state.session(operation_name, session)?;
        if session.active.is_some() {
            return Err(ClientError::native(operation_name, CKR_OPERATION_ACTIVE));
        }
        session.active = Some(ActiveOperation {
            operation,
            mechanism_type: mechanism.mechanism_type,
            key,
        });
        Ok(())
    }

    fn crypto_run(
        &self,
        operation_name: &'static str,
        operation: CryptoOperation,
        session: SessionHandle,
        data: &[u8],
    ) -> ClientResult<Vec<u8>> {
        let mut state = self.state()?;
        let taken = state.enter(operation_name, session)?.active.take();
        let active = match taken {
            Some(active) if active.operation == operation => active,
            other => {
                state.session(operation_name, session)?.active = other;
                return Err(ClientError::native(
                    operation_name,
                    CKR_OPERATION_NOT_INITIALIZED,
                ));
            }
        };
        let key = state.object(operation_name, active.key, CKR_KEY_HANDLE_INVALID)?;
        let secret = key.get(&CKA_VALUE).cloned().unwrap_or_default();
        Ok(match operation {
            CryptoOperation::Encrypt | CryptoOperation::Decrypt => xor(data, &secret),
            CryptoOperation::Sign => tag(active.mechanism_type, &secret, data),
        })
    }
}

fn xor(data: &[u8], key: &[u8]) -> Vec<u8> {
    if key.is_empty() {
        return data.to_vec();
    }
    data.iter()
        .zip(key.iter().cycle())
        .map(|(d, k)| d ^ k)
        .collect()
}

/// A deterministic 32-byte tag over the mechanism, the key bytes and the data (FNV-1a lanes).
fn tag(mechanism_type: MechanismType, key: &[u8], data: &[u8]) -> Vec<u8> {
    const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;
    let mut out = Vec::with_capacity(32);
    for lane in 0..SIGNATURE_LANES {
        let mut hash = FNV_OFFSET ^ lane;
        let input = mechanism_type
            .to_le_bytes()
            .into_iter()
            .chain(key.iter().copied())
            .chain(data.iter().copied());
        for byte in input {
            hash ^= u64::from(byte);
            hash = hash.wrapping_mul(FNV_PRIME);
        }
        out.extend_from_slice(&hash.to_be_bytes());
    }
    out
}

fn matches_template(object: &HashMap<AttributeType, Vec<u8>>, template: &[Attribute]) -> bool {
    template
        .iter()
        .all(|a| object.get(&a.attr_type).is_some_and(|v| *v == a.value))
}

impl Pkcs11Context for MemoryContext {
    fn initialize(&self) -> ClientResult<()> {
        let mut state = self.state()?;
        state.take_failure("Initialize")?;
        state.initialized = true;
        state.initialize_count += 1;
        Ok(())
    }

    fn finalize(&self) -> ClientResult<()> {
        let mut state = self.state()?;
        if !state.initialized {
            return Ok(());
        }
        state.initialized = false;
        state.finalize_count += 1;
        state.sessions.clear();
        Ok(())
    }

    fn get_slot_list(&self, token_present: bool) -> ClientResult<Vec<SlotId>> {
        let mut state = self.state()?;
        state.check_initialized("GetSlotList")?;
        state.take_failure("GetSlotList")?;
        Ok(state
            .slots
            .iter()
            .filter(|(_, slot)| !token_present || slot.token_info.is_some())
            .map(|(id, _)| *id)
            .collect())
    }

    fn get_slot_info(&self, slot_id: SlotId) -> ClientResult<SlotInfo> {
        let mut state = self.state()?;
        state.check_initialized("GetSlotInfo")?;
        state.take_failure("GetSlotInfo")?;
        let slot = state.slot("GetSlotInfo", slot_id)?;
        let mut info = slot.slot_info.clone();
        if slot.token_info.is_some() {
            info.flags |= CKF_TOKEN_PRESENT;
        }
        Ok(info)
    }

    fn get_token_info(&self, slot_id: SlotId) -> ClientResult<TokenInfo> {
        let mut state = self.state()?;
        state.check_initialized("GetTokenInfo")?;
        state.take_failure("GetTokenInfo")?;
        let slot = state.slot("GetTokenInfo", slot_id)?;
        let mut info = slot
            .token_info
            .clone()
            .ok_or_else(|| ClientError::native("GetTokenInfo", CKR_TOKEN_NOT_PRESENT))?;
        let on_slot = state
            .sessions
            .values()
            .filter(|s| s.slot_id == slot_id)
            .count();
        info.session_count = u64::try_from(on_slot)?;
        info.rw_session_count = info.session_count;
        Ok(info)
    }

    fn get_mechanism_list(&self, slot_id: SlotId) -> ClientResult<Vec<MechanismType>> {
        let mut state = self.state()?;
        state.check_initialized("GetMechanismList")?;
        state.take_failure("GetMechanismList")?;
        Ok(state
            .slot("GetMechanismList", slot_id)?
            .mechanisms
            .iter()
            .map(|(m, _)| *m)
            .collect())
    }

    fn get_mechanism_info(
        &self,
        slot_id: SlotId,
        mechanism_type: MechanismType,
    ) -> ClientResult<MechanismInfo> {
        let mut state = self.state()?;
        state.check_initialized("GetMechanismInfo")?;
        state.take_failure("GetMechanismInfo")?;
        state
            .slot("GetMechanismInfo", slot_id)?
            .mechanisms
            .iter()
            .find(|(m, _)| *m == mechanism_type)
            .map(|(_, info)| *info)
            .ok_or_else(|| ClientError::native("GetMechanismInfo", CKR_MECHANISM_INVALID))
    }

    fn open_session(&self, slot_id: SlotId, _flags: u64) -> ClientResult<SessionHandle> {
        let mut state = self.state()?;
        state.check_initialized("OpenSession")?;
        state.take_failure("OpenSession")?;
        if state.slot("OpenSession", slot_id)?.token_info.is_none() {
            return Err(ClientError::native("OpenSession", CKR_TOKEN_NOT_PRESENT));
        }
        let session = self.next_session.fetch_add(1, Ordering::SeqCst);
        state.sessions.insert(
            session,
            MockSession {
                slot_id,
                logged_in: false,
                search: None,
                active: None,
            },
        );
        state.opened.push(session);
        trace!("MemoryContext: opened session {session} on slot {slot_id}");
        Ok(session)
    }

    fn close_session(&self, session: SessionHandle) -> ClientResult<()> {
        let mut state = self.state()?;
        state.enter("CloseSession", session)?;
        state.sessions.remove(&session);
        state.closed.push(session);
        Ok(())
    }

    fn login(&self, session: SessionHandle, _user_type: u64, pin: &str) -> ClientResult<()> {
        let mut state = self.state()?;
        let s = state.enter("Login", session)?;
        if s.logged_in {
            return Err(ClientError::native("Login", CKR_USER_ALREADY_LOGGED_IN));
        }
        if self.pin.as_deref().is_some_and(|expected| expected != pin) {
            return Err(ClientError::native("Login", CKR_PIN_INCORRECT));
        }
        s.logged_in = true;
        Ok(())
    }

    fn logout(&self, session: SessionHandle) -> ClientResult<()> {
        let mut state = self.state()?;
        state.enter("Logout", session)?.logged_in = false;
        Ok(())
    }

    fn create_object(
        &self,
        session: SessionHandle,
        template: &[Attribute],
    ) -> ClientResult<ObjectHandle> {
        let mut state = self.state()?;
        state.enter("CreateObject", session)?;
        Ok(self.store(&mut state, template))
    }

    fn destroy_object(&self, session: SessionHandle, object: ObjectHandle) -> ClientResult<()> {
        let mut state = self.state()?;
        state.enter("DestroyObject", session)?;
        state
            .objects
            .remove(&object)
            .map(|_| ())
            .ok_or_else(|| ClientError::native("DestroyObject", CKR_OBJECT_HANDLE_INVALID))
    }

    fn find_objects_init(
        &self,
        session: SessionHandle,
        template: &[Attribute],
    ) -> ClientResult<()> {
        let mut state = self.state()?;
        state.enter("FindObjectsInit", session)?;
        let results = state
            .objects
            .iter()
            .filter(|(_, attributes)| matches_template(attributes, template))
            .map(|(handle, _)| *handle)
            .collect();
        let s = state.session("FindObjectsInit", session)?;
        if s.search.is_some() {
            return Err(ClientError::native("FindObjectsInit", CKR_OPERATION_ACTIVE));
        }
        s.search = Some(Search { results, cursor: 0 });
        Ok(())
    }

    fn find_objects(
        &self,
        session: SessionHandle,
        max_count: usize,
    ) -> ClientResult<Vec<ObjectHandle>> {
        let mut state = self.state()?;
        let search = state
            .enter("FindObjects", session)?
            .search
            .as_mut()
            .ok_or_else(|| ClientError::native("FindObjects", CKR_OPERATION_NOT_INITIALIZED))?;
        let end = search.results.len().min(search.cursor.saturating_add(max_count));
        let batch = search.results[search.cursor..end].to_vec();
        search.cursor = end;
        Ok(batch)
    }

    fn find_objects_final(&self, session: SessionHandle) -> ClientResult<()> {
        let mut state = self.state()?;
        state
            .enter("FindObjectsFinal", session)?
            .search
            .take()
            .map(|_| ())
            .ok_or_else(|| ClientError::native("FindObjectsFinal", CKR_OPERATION_NOT_INITIALIZED))
    }

    fn get_attribute_value(
        &self,
        session: SessionHandle,
        object: ObjectHandle,
        attr_types: &[AttributeType],
    ) -> ClientResult<Vec<Attribute>> {
        let mut state = self.state()?;
        state.enter("GetAttributeValue", session)?;
        let attributes = state.object("GetAttributeValue", object, CKR_OBJECT_HANDLE_INVALID)?;
        let sensitive = attributes
            .get(&CKA_SENSITIVE)
            .is_some_and(|v| bytes_to_bool(v).unwrap_or(false));
        if sensitive && attr_types.contains(&CKA_VALUE) {
            return Err(ClientError::native(
                "GetAttributeValue",
                CKR_ATTRIBUTE_SENSITIVE,
            ));
        }
        Ok(attr_types
            .iter()
            .filter_map(|t| attributes.get(t).map(|v| Attribute::new(*t, v.clone())))
            .collect())
    }

    fn set_attribute_value(
        &self,
        session: SessionHandle,
        object: ObjectHandle,
        template: &[Attribute],
    ) -> ClientResult<()> {
        let mut state = self.state()?;
        state.enter("SetAttributeValue", session)?;
        let attributes = state
            .objects
            .get_mut(&object)
            .ok_or_else(|| ClientError::native("SetAttributeValue", CKR_OBJECT_HANDLE_INVALID))?;
        for a in template {
            attributes.insert(a.attr_type, a.value.clone());
        }
        Ok(())
    }

    fn generate_key(
        &self,
        session: SessionHandle,
        mechanism: &Mechanism,
        template: &[Attribute],
    ) -> ClientResult<ObjectHandle> {
        let mut state = self.state()?;
        state.enter("GenerateKey", session)?;
        self.store_key(
            &mut state,
            template,
            CKO_SECRET_KEY,
            Some(mechanism.mechanism_type),
        )
    }

    fn generate_key_pair(
        &self,
        session: SessionHandle,
        mechanism: &Mechanism,
        public_template: &[Attribute],
        private_template: &[Attribute],
    ) -> ClientResult<(ObjectHandle, ObjectHandle)> {
        let mut state = self.state()?;
        state.enter("GenerateKeyPair", session)?;
        let public = self.store_key(
            &mut state,
            public_template,
            CKO_PUBLIC_KEY,
            Some(mechanism.mechanism_type),
        )?;
        let private = self.store_key(
            &mut state,
            private_template,
            CKO_PRIVATE_KEY,
            Some(mechanism.mechanism_type),
        )?;
        Ok((public, private))
    }

    fn wrap_key(
        &self,
        session: SessionHandle,
        _mechanism: &Mechanism,
        wrapping_key: ObjectHandle,
        key: ObjectHandle,
    ) -> ClientResult<Vec<u8>> {
        let mut state = self.state()?;
        state.enter("WrapKey", session)?;
        state.object("WrapKey", wrapping_key, CKR_KEY_HANDLE_INVALID)?;
        state.object("WrapKey", key, CKR_KEY_HANDLE_INVALID)?;
        Ok(WRAPPED_KEY.to_vec())
    }

    fn unwrap_key(
        &self,
        session: SessionHandle,
        _mechanism: &Mechanism,
        unwrapping_key: ObjectHandle,
        _wrapped_key: &[u8],
        template: &[Attribute],
    ) -> ClientResult<ObjectHandle> {
        let mut state = self.state()?;
        state.enter("UnwrapKey", session)?;
        state.object("UnwrapKey", unwrapping_key, CKR_KEY_HANDLE_INVALID)?;
        self.store_key(&mut state, template, CKO_SECRET_KEY, None)
    }

    fn derive_key(
        &self,
        session: SessionHandle,
        _mechanism: &Mechanism,
        base_key: ObjectHandle,
        template: &[Attribute],
    ) -> ClientResult<ObjectHandle> {
        let mut state = self.state()?;
        state.enter("DeriveKey", session)?;
        state.object("DeriveKey", base_key, CKR_KEY_HANDLE_INVALID)?;
        self.store_key(&mut state, template, CKO_SECRET_KEY, None)
    }

    fn encrypt_init(
        &self,
        session: SessionHandle,
        mechanism: &Mechanism,
        key: ObjectHandle,
    ) -> ClientResult<()> {
        self.crypto_init("EncryptInit", CryptoOperation::Encrypt, session, mechanism, key)
    }

    fn encrypt(&self, session: SessionHandle, data: &[u8]) -> ClientResult<Vec<u8>> {
        self.crypto_run("Encrypt", CryptoOperation::Encrypt, session, data)
    }

    fn decrypt_init(
        &self,
        session: SessionHandle,
        mechanism: &Mechanism,
        key: ObjectHandle,
    ) -> ClientResult<()> {
        self.crypto_init("DecryptInit", CryptoOperation::Decrypt, session, mechanism, key)
    }

    fn decrypt(&self, session: SessionHandle, data: &[u8]) -> ClientResult<Vec<u8>> {
        self.crypto_run("Decrypt", CryptoOperation::Decrypt, session, data)
    }

    fn sign_init(
        &self,
        session: SessionHandle,
        mechanism: &Mechanism,
        key: ObjectHandle,
    ) -> ClientResult<()> {
        self.crypto_init("SignInit", CryptoOperation::Sign, session, mechanism, key)
    }

    fn sign(&self, session: SessionHandle, data: &[u8]) -> ClientResult<Vec<u8>> {
        self.crypto_run("Sign", CryptoOperation::Sign, session, data)
    }
}
