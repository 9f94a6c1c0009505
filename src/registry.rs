//! The seam between codecs and a serialization framework.
//!
//! A framework needs two things from this crate: a place to associate a codec
//! with a type identifier ([`CodecHost`]), and a primitive text node to read
//! from and write to. [`Registry`] is a host whose nodes are
//! [`serde_json::Value`]s: a string node holds canonical text, a null node is
//! the absent value.

use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::hash::BuildHasherDefault;

// used to find a registered type both by its name and by its type id
use bimap::BiMap;
use seahash::SeaHasher;
use serde_json::Value;
use tracing::{debug, trace};

use crate::codec::Codec;
use crate::datatype::TemporalKind;
use crate::error::{CodecError, Result};

pub type TypeHasher = BuildHasherDefault<SeaHasher>;

pub type ErasedValue = Box<dyn Any + Send>;

/// A codec with its value type erased, as stored by a host.
#[derive(Clone, Copy, Debug)]
pub struct Adapter {
    kind: TemporalKind,
    data_type: &'static str,
    encode: fn(&dyn Any) -> Option<String>,
    decode: fn(&str) -> Result<Option<ErasedValue>>,
}

impl Adapter {
    pub fn of<C: Codec>() -> Self {
        Self {
            kind: C::KIND,
            data_type: C::DATA_TYPE,
            encode: encode_erased::<C>,
            decode: decode_erased::<C>,
        }
    }
    pub fn kind(&self) -> TemporalKind {
        self.kind
    }
    pub fn data_type(&self) -> &'static str {
        self.data_type
    }
    /// `None` when `value` is not of the adapter's type.
    pub fn encode(&self, value: &dyn Any) -> Option<String> {
        (self.encode)(value)
    }
    pub fn decode(&self, text: &str) -> Result<Option<ErasedValue>> {
        (self.decode)(text)
    }
}

fn encode_erased<C: Codec>(value: &dyn Any) -> Option<String> {
    value.downcast_ref::<C>().map(C::encode)
}

fn decode_erased<C: Codec>(text: &str) -> Result<Option<ErasedValue>> {
    Ok(C::decode(text)?.map(|value| Box::new(value) as ErasedValue))
}

pub trait CodecHost {
    /// Associates `adapter` with `type_id`, replacing any earlier association.
    /// Returns whether an association was replaced.
    fn register_adapter(&mut self, type_id: TypeId, adapter: Adapter) -> bool;
}

#[derive(Debug)]
pub struct Registry {
    adapters: HashMap<TypeId, Adapter, TypeHasher>,
    names: BiMap<&'static str, TypeId>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl CodecHost for Registry {
    fn register_adapter(&mut self, type_id: TypeId, adapter: Adapter) -> bool {
        let replaced = self.adapters.insert(type_id, adapter).is_some();
        self.names.insert(adapter.data_type(), type_id);
        debug!(kind = %adapter.kind(), replaced, "registered temporal codec");
        replaced
    }
}

impl Registry {
    pub fn new() -> Self {
        Self {
            adapters: HashMap::default(),
            names: BiMap::new(),
        }
    }
    pub fn len(&self) -> usize {
        self.adapters.len()
    }
    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }
    pub fn contains<T: 'static>(&self) -> bool {
        self.adapters.contains_key(&TypeId::of::<T>())
    }
    /// Registered kinds, sorted in `TemporalKind::ALL` order.
    pub fn kinds(&self) -> Vec<TemporalKind> {
        let mut kinds: Vec<TemporalKind> = self.adapters.values().map(Adapter::kind).collect();
        kinds.sort();
        kinds
    }
    pub fn data_type_of<T: 'static>(&self) -> Option<&'static str> {
        self.names.get_by_right(&TypeId::of::<T>()).copied()
    }
    pub fn adapter<T: 'static>(&self) -> Result<&Adapter> {
        self.adapters
            .get(&TypeId::of::<T>())
            .ok_or_else(|| CodecError::Unregistered(type_name::<T>().to_owned()))
    }

    /// Writes `value` as a text node, or a null node when it is absent.
    pub fn to_node<T: 'static>(&self, value: Option<&T>) -> Result<Value> {
        let adapter = self.adapter::<T>()?;
        let node = match value {
            None => Value::Null,
            Some(value) => adapter
                .encode(value)
                .map(Value::String)
                .ok_or_else(|| CodecError::Unregistered(type_name::<T>().to_owned()))?,
        };
        trace!(kind = %adapter.kind(), %node, "encoded node");
        Ok(node)
    }

    /// Reads a node written by [`Registry::to_node`]. Null and empty text
    /// nodes are the absent value, any other non-text node is malformed.
    pub fn from_node<T: 'static>(&self, node: &Value) -> Result<Option<T>> {
        let adapter = self.adapter::<T>()?;
        trace!(kind = %adapter.kind(), %node, "decoding node");
        let text = match node {
            Value::Null => return Ok(None),
            Value::String(text) => text,
            other => return Err(CodecError::format(&other.to_string(), adapter.kind())),
        };
        match adapter.decode(text)? {
            None => Ok(None),
            Some(erased) => erased
                .downcast::<T>()
                .map(|value| Some(*value))
                .map_err(|_| CodecError::Unregistered(type_name::<T>().to_owned())),
        }
    }

    pub fn to_json<T: 'static>(&self, value: &T) -> Result<String> {
        Ok(serde_json::to_string(&self.to_node(Some(value))?)?)
    }

    pub fn from_json<T: 'static>(&self, json: &str) -> Result<Option<T>> {
        let node: Value = serde_json::from_str(json)?;
        self.from_node(&node)
    }

    /// Decodes `text` for a type known only by its registered name.
    pub fn decode_named(&self, data_type: &str, text: &str) -> Result<Option<ErasedValue>> {
        let adapter = self
            .names
            .get_by_left(data_type)
            .and_then(|type_id| self.adapters.get(type_id))
            .ok_or_else(|| CodecError::Unregistered(data_type.to_owned()))?;
        adapter.decode(text)
    }
}
