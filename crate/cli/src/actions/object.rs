use std::collections::BTreeMap;

use clap::{Parser, Subcommand};
use cosmian_pkcs11_client::{
    Pkcs11Client,
    attributes::{AttributeValue, ObjectId, attr_def_by_type, build_template},
    context::{Attribute, ObjectHandle},
};
use serde::Serialize;
use tracing::debug;

use super::console;
use crate::error::result::{CliResult, CliResultHelper};

/// Parse a JSON object of catalog keys into a native template.
pub(crate) fn parse_template(json: &str) -> CliResult<Vec<Attribute>> {
    let values: BTreeMap<String, AttributeValue> =
        serde_json::from_str(json).context("the attributes must be a JSON object")?;
    Ok(build_template(
        values.iter().map(|(key, value)| (key.as_str(), value)),
    )?)
}

#[derive(Serialize, Debug)]
pub struct CreatedObject {
    pub handle: ObjectHandle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,
}

impl CreatedObject {
    pub(crate) fn new(client: &Pkcs11Client, handle: ObjectHandle) -> CliResult<Self> {
        Ok(Self {
            handle,
            object_id: client.get_object_id(handle)?.map(|id| id.to_string()),
        })
    }
}

#[derive(Serialize, Debug)]
pub struct ObjectAttributes {
    pub object_id: String,
    pub handle: ObjectHandle,
    pub attributes: BTreeMap<&'static str, AttributeValue>,
}

/// Show, create and destroy token objects
#[derive(Subcommand)]
pub enum ObjectCommands {
    Show(ShowObjectAction),
    Create(CreateObjectAction),
    Destroy(DestroyObjectAction),
}

impl ObjectCommands {
    pub fn process(&self, client: &Pkcs11Client) -> CliResult<()> {
        match self {
            Self::Show(action) => console::write_json(&action.run(client)?),
            Self::Create(action) => console::write_json(&action.run(client)?),
            Self::Destroy(action) => console::write_json(&action.run(client)?),
        }
    }
}

/// Print every readable attribute of an object
///
/// The object is identified by `label/hex_id/class`, for instance `my-key/0102/CKO_SECRET_KEY`.
#[derive(Parser, Debug)]
#[clap(verbatim_doc_comment)]
pub struct ShowObjectAction {
    /// The object identifier `label/hex_id/class`
    #[arg(required = true)]
    pub object_id: ObjectId,
}

impl ShowObjectAction {
    pub fn run(&self, client: &Pkcs11Client) -> CliResult<ObjectAttributes> {
        let handle = client
            .find_object(&self.object_id)
            .with_context(|| format!("Can't find the object {}", self.object_id))?;
        let mut attributes = BTreeMap::new();
        for (attr_type, value) in client.get_all_object_attributes(handle)? {
            let Some(def) = attr_def_by_type(attr_type) else {
                debug!("ignoring attribute 0x{attr_type:08X} missing from the catalog");
                continue;
            };
            attributes.insert(def.key, def.decode(&value)?);
        }
        Ok(ObjectAttributes {
            object_id: self.object_id.to_string(),
            handle,
            attributes,
        })
    }
}

/// Create an object from its attributes
///
/// The attributes are a JSON object keyed by attribute name, for instance
/// `{"class": "CKO_DATA", "label": "note", "value": "aGVsbG8=", "token": true}`.
#[derive(Parser, Debug)]
#[clap(verbatim_doc_comment)]
pub struct CreateObjectAction {
    /// The attributes as a JSON object
    #[arg(long, short = 'a', required = true)]
    pub attributes: String,
}

impl CreateObjectAction {
    pub fn run(&self, client: &Pkcs11Client) -> CliResult<CreatedObject> {
        let template = parse_template(&self.attributes)?;
        let handle = client.create_object(&template)?;
        CreatedObject::new(client, handle)
    }
}

#[derive(Serialize, Debug)]
pub struct DestroyedObject {
    pub destroyed: String,
}

/// Destroy an object
#[derive(Parser, Debug)]
pub struct DestroyObjectAction {
    /// The object identifier `label/hex_id/class`
    #[arg(required = true)]
    pub object_id: ObjectId,
}

impl DestroyObjectAction {
    pub fn run(&self, client: &Pkcs11Client) -> CliResult<DestroyedObject> {
        let handle = client.find_object(&self.object_id)?;
        client.destroy_object(handle)?;
        Ok(DestroyedObject {
            destroyed: self.object_id.to_string(),
        })
    }
}
