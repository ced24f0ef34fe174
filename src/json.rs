// Copyright (c) ck-template contributors.
// Licensed under the MIT License.

//! Canonical JSON projection of templates, and its inverse.
//!
//! A template projects to a JSON object keyed by attribute name
//! (`"CKA_CLASS"`). Raw-bytes attributes key by their decimal type code
//! instead, whether the code is unknown or its structured payload failed
//! to parse, and their value is the hex of the raw bytes. Other values
//! follow the attribute's kind:
//!
//! - boolean flags: JSON `true`/`false`
//! - byte strings: lowercase hex string (byte-exact)
//! - unsigned words: JSON number
//! - big integers: decimal string
//! - object class / key type / mechanism: their `CKO_*`/`CKK_*`/`CKM_*`
//!   name, a number for values outside the known set, and the literal
//!   `"CK_UNAVAILABLE_INFORMATION"` for the unavailable key-gen marker
//! - EC parameters: `{"namedCurve": "<dotted oid>"}`,
//!   `{"implicitCurve": null}`, or `{"specifiedCurve": "<hex DER>"}`
//! - EC point: `{"ecPoint": "<hex point octets>"}`
//!
//! `from_value` rebuilds typed attributes by encoding each JSON value to
//! its wire bytes and running them through the one attribute codec, so the
//! projection and the device path cannot drift apart.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{json, Map, Value};

use crate::attribute::{decode_attribute_with, Attribute, ValueRef};
use crate::attribute_type::{attribute_id, kind_of, ValueKind};
use crate::bigint::Bigint;
use crate::diag::NullDiagnostics;
use crate::ec::{EcParams, EcPoint, SpecifiedEcDomain};
use crate::error::{Error, Result};
use crate::key_type::KeyType;
use crate::mechanism::{KeyGenMechanism, MechanismType};
use crate::object_class::ObjectClass;
use crate::raw::{CkUlong, RawAttribute};
use crate::template::Template;

fn ec_params_to_json(params: &EcParams) -> Value {
    match params {
        EcParams::NamedCurve(oid) => json!({ "namedCurve": oid.to_string() }),
        EcParams::ImplicitCurve(_) => json!({ "implicitCurve": null }),
        EcParams::SpecifiedCurve(domain) => {
            // Re-encoding a successfully decoded domain does not fail.
            let der_hex = domain.to_der_bytes().map(hex::encode).unwrap_or_default();
            json!({ "specifiedCurve": der_hex })
        }
    }
}

fn attribute_value_to_json(attribute: &Attribute) -> Value {
    match attribute.value_ref() {
        ValueRef::Bool(v) => Value::Bool(v),
        ValueRef::Bytes(v) | ValueRef::Raw(v) => Value::String(hex::encode(v)),
        ValueRef::Ulong(v) => Value::from(v),
        ValueRef::Bigint(v) => Value::String(v.to_decimal()),
        ValueRef::Class(v) => match v.name() {
            Some(name) => Value::String(name.to_string()),
            None => Value::from(v.to_ulong()),
        },
        ValueRef::Key(v) => match v.name() {
            Some(name) => Value::String(name.to_string()),
            None => Value::from(v.to_ulong()),
        },
        ValueRef::Mechanism(KeyGenMechanism::Unavailable) => {
            Value::String("CK_UNAVAILABLE_INFORMATION".to_string())
        }
        ValueRef::Mechanism(KeyGenMechanism::Mechanism(m)) => match m.name() {
            Some(name) => Value::String(name.to_string()),
            None => Value::from(m.to_ulong()),
        },
        ValueRef::Params(v) => ec_params_to_json(v),
        ValueRef::Point(v) => json!({ "ecPoint": hex::encode(v.as_bytes()) }),
    }
}

/// The canonical object projection of a template.
///
/// With duplicate type codes the later entry wins in the object (JSON
/// objects cannot carry duplicate keys); template algebra and hashing are
/// unaffected.
pub fn to_value(template: &Template) -> Value {
    let mut map = Map::new();
    for attribute in template {
        map.insert(attribute.name(), attribute_value_to_json(attribute));
    }
    Value::Object(map)
}

/// Duplicate-preserving rendering used for the content digest: a JSON
/// array of `[name, value]` pairs in the template's order.
pub(crate) fn canonical_pairs(template: &Template) -> Value {
    Value::Array(
        template
            .iter()
            .map(|a| json!([a.name(), attribute_value_to_json(a)]))
            .collect(),
    )
}

fn bad(key: &str, detail: &str) -> Error {
    Error::Json(format!("attribute {key}: {detail}"))
}

fn hex_field(key: &str, value: &Value) -> Result<Vec<u8>> {
    let text = value
        .as_str()
        .ok_or_else(|| bad(key, "expected a hex string"))?;
    hex::decode(text).map_err(|e| bad(key, &format!("invalid hex: {e}")))
}

fn enum_field(
    key: &str,
    value: &Value,
    by_name: impl Fn(&str) -> Option<CkUlong>,
) -> Result<CkUlong> {
    match value {
        Value::String(name) => {
            by_name(name).ok_or_else(|| bad(key, &format!("unknown name {name:?}")))
        }
        Value::Number(_) => value
            .as_u64()
            .ok_or_else(|| bad(key, "expected an unsigned number")),
        _ => Err(bad(key, "expected a name string or a number")),
    }
}

fn ec_params_from_json(key: &str, value: &Value) -> Result<EcParams> {
    let object = value
        .as_object()
        .ok_or_else(|| bad(key, "expected an EC parameters object"))?;
    if let Some(oid) = object.get("namedCurve") {
        let oid = oid
            .as_str()
            .ok_or_else(|| bad(key, "namedCurve: expected a dotted OID string"))?;
        return EcParams::named_curve(oid).map_err(|e| bad(key, &format!("namedCurve: {e}")));
    }
    if object.contains_key("implicitCurve") {
        return Ok(EcParams::ImplicitCurve(der::asn1::Null));
    }
    if let Some(domain) = object.get("specifiedCurve") {
        let der_bytes = hex_field(key, domain)?;
        let domain = SpecifiedEcDomain::from_der_bytes(&der_bytes)
            .map_err(|e| bad(key, &format!("specifiedCurve: {e}")))?;
        return Ok(EcParams::SpecifiedCurve(domain));
    }
    Err(bad(
        key,
        "expected one of namedCurve, implicitCurve, specifiedCurve",
    ))
}

/// Wire bytes for one JSON value, per the kind its attribute prescribes.
fn value_to_wire_bytes(key: &str, code: CkUlong, value: &Value) -> Result<Vec<u8>> {
    let bytes = match kind_of(code) {
        ValueKind::Bool => {
            let v = value.as_bool().ok_or_else(|| bad(key, "expected a boolean"))?;
            vec![u8::from(v)]
        }
        ValueKind::Bytes | ValueKind::NotImplemented => hex_field(key, value)?,
        ValueKind::Ulong => {
            let v = value
                .as_u64()
                .ok_or_else(|| bad(key, "expected an unsigned number"))?;
            v.to_ne_bytes().to_vec()
        }
        ValueKind::Bigint => {
            let text = value
                .as_str()
                .ok_or_else(|| bad(key, "expected a decimal string"))?;
            let v = Bigint::from_decimal(text)
                .ok_or_else(|| bad(key, "expected a decimal string"))?;
            v.to_bytes_be().to_vec()
        }
        ValueKind::ObjectClass => {
            let v = enum_field(key, value, |n| ObjectClass::from_name(n).map(ObjectClass::to_ulong))?;
            v.to_ne_bytes().to_vec()
        }
        ValueKind::KeyType => {
            let v = enum_field(key, value, |n| KeyType::from_name(n).map(KeyType::to_ulong))?;
            v.to_ne_bytes().to_vec()
        }
        ValueKind::KeyGenMechanism => {
            let v = enum_field(key, value, |n| {
                if n == "CK_UNAVAILABLE_INFORMATION" {
                    Some(KeyGenMechanism::Unavailable.to_ulong())
                } else {
                    MechanismType::from_name(n).map(MechanismType::to_ulong)
                }
            })?;
            v.to_ne_bytes().to_vec()
        }
        ValueKind::EcParams => ec_params_from_json(key, value)?.to_der_bytes()?,
        ValueKind::EcPoint => {
            let object = value
                .as_object()
                .ok_or_else(|| bad(key, "expected an EC point object"))?;
            let octets = object
                .get("ecPoint")
                .ok_or_else(|| bad(key, "expected an ecPoint member"))?;
            EcPoint::new(hex_field(key, octets)?).to_der_bytes()?
        }
    };
    Ok(bytes)
}

/// Rebuilds a template from its canonical object projection.
///
/// Rejects a non-object top level and any malformed member with a
/// descriptive error; never panics.
pub fn from_value(value: &Value) -> Result<Template> {
    let object = value
        .as_object()
        .ok_or_else(|| Error::Json("top-level JSON value is not an object".to_string()))?;

    let mut attributes = Vec::with_capacity(object.len());
    for (key, member) in object {
        // A decimal key is the raw-bytes form (unknown code, or a
        // structured value that failed to parse when decoded): the value
        // is always hex bytes, fed back through the decode path. A named
        // key follows the name's value grammar.
        let (code, wire) = if key.bytes().all(|b| b.is_ascii_digit()) && !key.is_empty() {
            let code = key
                .parse::<CkUlong>()
                .map_err(|_| bad(key, "numeric attribute code out of range"))?;
            (code, hex_field(key, member)?)
        } else {
            let code = attribute_id(key).ok_or_else(|| bad(key, "unknown attribute name"))?;
            (code, value_to_wire_bytes(key, code, member)?)
        };
        let raw = RawAttribute::filled(code, wire);
        attributes.push(decode_attribute_with(&raw, &NullDiagnostics)?);
    }
    Ok(Template::from(attributes))
}

impl Template {
    /// See [`to_value`].
    pub fn to_value(&self) -> Value {
        to_value(self)
    }

    /// See [`from_value`].
    pub fn from_value(value: &Value) -> Result<Template> {
        from_value(value)
    }
}

impl Serialize for Template {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        to_value(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Template {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        from_value(&value).map_err(D::Error::custom)
    }
}
