// Copyright (c) ck-template contributors.
// Licensed under the MIT License.

//! Attribute type registry.
//!
//! Canonical identifiers for the known PKCS#11 attribute types, the value
//! kind each one prescribes, and printable names. The registry is a static
//! sorted table; the numeric `CK_ULONG` order is the total order used
//! everywhere templates are normalized or compared.

use crate::raw::CkUlong;

pub const CKA_CLASS: CkUlong = 0x0000_0000;
pub const CKA_TOKEN: CkUlong = 0x0000_0001;
pub const CKA_PRIVATE: CkUlong = 0x0000_0002;
pub const CKA_LABEL: CkUlong = 0x0000_0003;
pub const CKA_APPLICATION: CkUlong = 0x0000_0010;
pub const CKA_VALUE: CkUlong = 0x0000_0011;
pub const CKA_OBJECT_ID: CkUlong = 0x0000_0012;
pub const CKA_CERTIFICATE_TYPE: CkUlong = 0x0000_0080;
pub const CKA_ISSUER: CkUlong = 0x0000_0081;
pub const CKA_SERIAL_NUMBER: CkUlong = 0x0000_0082;
pub const CKA_TRUSTED: CkUlong = 0x0000_0086;
pub const CKA_CHECK_VALUE: CkUlong = 0x0000_0090;
pub const CKA_KEY_TYPE: CkUlong = 0x0000_0100;
pub const CKA_SUBJECT: CkUlong = 0x0000_0101;
pub const CKA_ID: CkUlong = 0x0000_0102;
pub const CKA_SENSITIVE: CkUlong = 0x0000_0103;
pub const CKA_ENCRYPT: CkUlong = 0x0000_0104;
pub const CKA_DECRYPT: CkUlong = 0x0000_0105;
pub const CKA_WRAP: CkUlong = 0x0000_0106;
pub const CKA_UNWRAP: CkUlong = 0x0000_0107;
pub const CKA_SIGN: CkUlong = 0x0000_0108;
pub const CKA_SIGN_RECOVER: CkUlong = 0x0000_0109;
pub const CKA_VERIFY: CkUlong = 0x0000_010A;
pub const CKA_VERIFY_RECOVER: CkUlong = 0x0000_010B;
pub const CKA_DERIVE: CkUlong = 0x0000_010C;
pub const CKA_MODULUS: CkUlong = 0x0000_0120;
pub const CKA_MODULUS_BITS: CkUlong = 0x0000_0121;
pub const CKA_PUBLIC_EXPONENT: CkUlong = 0x0000_0122;
pub const CKA_PRIVATE_EXPONENT: CkUlong = 0x0000_0123;
pub const CKA_PRIME_1: CkUlong = 0x0000_0124;
pub const CKA_PRIME_2: CkUlong = 0x0000_0125;
pub const CKA_EXPONENT_1: CkUlong = 0x0000_0126;
pub const CKA_EXPONENT_2: CkUlong = 0x0000_0127;
pub const CKA_COEFFICIENT: CkUlong = 0x0000_0128;
pub const CKA_PRIME: CkUlong = 0x0000_0130;
pub const CKA_SUBPRIME: CkUlong = 0x0000_0131;
pub const CKA_BASE: CkUlong = 0x0000_0132;
pub const CKA_PRIME_BITS: CkUlong = 0x0000_0133;
pub const CKA_SUBPRIME_BITS: CkUlong = 0x0000_0134;
pub const CKA_VALUE_BITS: CkUlong = 0x0000_0160;
pub const CKA_VALUE_LEN: CkUlong = 0x0000_0161;
pub const CKA_EXTRACTABLE: CkUlong = 0x0000_0162;
pub const CKA_LOCAL: CkUlong = 0x0000_0163;
pub const CKA_NEVER_EXTRACTABLE: CkUlong = 0x0000_0164;
pub const CKA_ALWAYS_SENSITIVE: CkUlong = 0x0000_0165;
pub const CKA_KEY_GEN_MECHANISM: CkUlong = 0x0000_0166;
pub const CKA_MODIFIABLE: CkUlong = 0x0000_0170;
pub const CKA_COPYABLE: CkUlong = 0x0000_0171;
pub const CKA_DESTROYABLE: CkUlong = 0x0000_0172;
pub const CKA_EC_PARAMS: CkUlong = 0x0000_0180;
pub const CKA_EC_POINT: CkUlong = 0x0000_0181;
pub const CKA_ALWAYS_AUTHENTICATE: CkUlong = 0x0000_0202;
pub const CKA_WRAP_WITH_TRUSTED: CkUlong = 0x0000_0210;

/// The kind of value an attribute type prescribes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Bool,
    Bytes,
    Ulong,
    Bigint,
    ObjectClass,
    KeyType,
    KeyGenMechanism,
    EcParams,
    EcPoint,
    /// Unknown attribute type; the raw bytes are carried through opaquely.
    NotImplemented,
}

/// One registry entry: attribute id, printable name, prescribed kind.
#[derive(Debug, Clone, Copy)]
struct TypeInfo {
    id: CkUlong,
    name: &'static str,
    kind: ValueKind,
}

macro_rules! type_info {
    ($id:ident; as $kind:ident) => {
        TypeInfo {
            id: $id,
            name: stringify!($id),
            kind: ValueKind::$kind,
        }
    };
}

/// All known attribute types, sorted by id (binary-searchable).
static TYPE_REGISTRY: [TypeInfo; 53] = [
    type_info!(CKA_CLASS; as ObjectClass),
    type_info!(CKA_TOKEN; as Bool),
    type_info!(CKA_PRIVATE; as Bool),
    type_info!(CKA_LABEL; as Bytes),
    type_info!(CKA_APPLICATION; as Bytes),
    type_info!(CKA_VALUE; as Bytes),
    type_info!(CKA_OBJECT_ID; as Bytes),
    type_info!(CKA_CERTIFICATE_TYPE; as Ulong),
    type_info!(CKA_ISSUER; as Bytes),
    type_info!(CKA_SERIAL_NUMBER; as Bytes),
    type_info!(CKA_TRUSTED; as Bool),
    type_info!(CKA_CHECK_VALUE; as Bytes),
    type_info!(CKA_KEY_TYPE; as KeyType),
    type_info!(CKA_SUBJECT; as Bytes),
    type_info!(CKA_ID; as Bytes),
    type_info!(CKA_SENSITIVE; as Bool),
    type_info!(CKA_ENCRYPT; as Bool),
    type_info!(CKA_DECRYPT; as Bool),
    type_info!(CKA_WRAP; as Bool),
    type_info!(CKA_UNWRAP; as Bool),
    type_info!(CKA_SIGN; as Bool),
    type_info!(CKA_SIGN_RECOVER; as Bool),
    type_info!(CKA_VERIFY; as Bool),
    type_info!(CKA_VERIFY_RECOVER; as Bool),
    type_info!(CKA_DERIVE; as Bool),
    type_info!(CKA_MODULUS; as Bigint),
    type_info!(CKA_MODULUS_BITS; as Ulong),
    type_info!(CKA_PUBLIC_EXPONENT; as Bigint),
    type_info!(CKA_PRIVATE_EXPONENT; as Bigint),
    type_info!(CKA_PRIME_1; as Bigint),
    type_info!(CKA_PRIME_2; as Bigint),
    type_info!(CKA_EXPONENT_1; as Bigint),
    type_info!(CKA_EXPONENT_2; as Bigint),
    type_info!(CKA_COEFFICIENT; as Bigint),
    type_info!(CKA_PRIME; as Bigint),
    type_info!(CKA_SUBPRIME; as Bigint),
    type_info!(CKA_BASE; as Bigint),
    type_info!(CKA_PRIME_BITS; as Ulong),
    type_info!(CKA_SUBPRIME_BITS; as Ulong),
    type_info!(CKA_VALUE_BITS; as Ulong),
    type_info!(CKA_VALUE_LEN; as Ulong),
    type_info!(CKA_EXTRACTABLE; as Bool),
    type_info!(CKA_LOCAL; as Bool),
    type_info!(CKA_NEVER_EXTRACTABLE; as Bool),
    type_info!(CKA_ALWAYS_SENSITIVE; as Bool),
    type_info!(CKA_KEY_GEN_MECHANISM; as KeyGenMechanism),
    type_info!(CKA_MODIFIABLE; as Bool),
    type_info!(CKA_COPYABLE; as Bool),
    type_info!(CKA_DESTROYABLE; as Bool),
    type_info!(CKA_EC_PARAMS; as EcParams),
    type_info!(CKA_EC_POINT; as EcPoint),
    type_info!(CKA_ALWAYS_AUTHENTICATE; as Bool),
    type_info!(CKA_WRAP_WITH_TRUSTED; as Bool),
];

fn lookup(id: CkUlong) -> Option<&'static TypeInfo> {
    match TYPE_REGISTRY.binary_search_by(|info| info.id.cmp(&id)) {
        Ok(i) => Some(&TYPE_REGISTRY[i]),
        Err(_) => None,
    }
}

/// The value kind prescribed for an attribute type.
///
/// Unknown types classify as [`ValueKind::NotImplemented`].
pub fn kind_of(id: CkUlong) -> ValueKind {
    match lookup(id) {
        Some(info) => info.kind,
        None => ValueKind::NotImplemented,
    }
}

/// The PKCS#11 name of a known attribute type (e.g. `"CKA_CLASS"`).
pub fn attribute_name(id: CkUlong) -> Option<&'static str> {
    lookup(id).map(|info| info.name)
}

/// Inverse of [`attribute_name`]: PKCS#11 name to attribute id.
pub fn attribute_id(name: &str) -> Option<CkUlong> {
    TYPE_REGISTRY
        .iter()
        .find(|info| info.name == name)
        .map(|info| info.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_is_sorted_by_id() {
        for pair in TYPE_REGISTRY.windows(2) {
            assert!(pair[0].id < pair[1].id, "{} out of order", pair[1].name);
        }
    }

    #[test]
    fn registry_spans_the_known_code_range() {
        assert_eq!(TYPE_REGISTRY[0].id, CKA_CLASS);
        assert_eq!(TYPE_REGISTRY[TYPE_REGISTRY.len() - 1].id, CKA_WRAP_WITH_TRUSTED);
        assert_eq!(kind_of(CKA_CLASS), ValueKind::ObjectClass);
        assert_eq!(kind_of(CKA_WRAP_WITH_TRUSTED), ValueKind::Bool);
    }

    #[test]
    fn name_lookups_are_inverse() {
        for info in &TYPE_REGISTRY {
            assert_eq!(attribute_id(info.name), Some(info.id));
            assert_eq!(attribute_name(info.id), Some(info.name));
        }
    }

    #[test]
    fn unknown_id_classifies_as_not_implemented() {
        assert_eq!(kind_of(0x8000_0123), ValueKind::NotImplemented);
        assert!(attribute_name(0x8000_0123).is_none());
    }
}
