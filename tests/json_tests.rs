// Copyright (c) ck-template contributors.
// Licensed under the MIT License.

//! Integration tests for the JSON projection and its inverse.
//!
//! `to_value` / `from_value` shapes, the exact rendering of each value
//! kind, round-trip fidelity, and rejection of malformed input.

mod common;

use common::*;

use std::cmp::Ordering;

use ck_template::{
    decode_attribute_with, from_value, to_value, Attribute, Bigint, KeyGenMechanism,
    KeyType, NullDiagnostics, ObjectClass, Template, CKA_EC_PARAMS, CKA_EC_POINT,
};
use serde_json::json;

/// The object projection renders every value kind in its documented shape.
#[test]
fn to_value_renders_documented_shapes() {
    let template = Template::from(vec![
        Attribute::Class(ObjectClass::PrivateKey),
        Attribute::KeyType(KeyType::Ec),
        Attribute::Token(true),
        Attribute::Label(vec![0x68, 0x69]),
        Attribute::ModulusBits(2048),
        Attribute::PublicExponent(Bigint::from(65537u64)),
        Attribute::KeyGenMechanism(KeyGenMechanism::Unavailable),
        Attribute::EcParams(p256_params()),
        Attribute::EcPoint(tiny_point()),
        Attribute::NotImplemented(0x80000001, vec![0xDE, 0xAD]),
    ]);

    assert_eq!(
        to_value(&template),
        json!({
            "CKA_CLASS": "CKO_PRIVATE_KEY",
            "CKA_KEY_TYPE": "CKK_EC",
            "CKA_TOKEN": true,
            "CKA_LABEL": "6869",
            "CKA_MODULUS_BITS": 2048,
            "CKA_PUBLIC_EXPONENT": "65537",
            "CKA_KEY_GEN_MECHANISM": "CK_UNAVAILABLE_INFORMATION",
            "CKA_EC_PARAMS": { "namedCurve": "1.2.840.10045.3.1.7" },
            "CKA_EC_POINT": { "ecPoint": "04aabb" },
            "2147483649": "dead",
        })
    );
}

/// Projection and rebuild are inverse up to normalization.
#[test]
fn round_trip_preserves_every_attribute() {
    let template = Template::from(vec![
        Attribute::Class(ObjectClass::SecretKey),
        Attribute::Class(ObjectClass::Unknown(0x4242)),
        Attribute::KeyType(KeyType::Aes),
        Attribute::Token(true),
        Attribute::Sensitive(false),
        Attribute::Id(vec![0x00, 0x01, 0xFF]),
        Attribute::ValueLen(32),
        Attribute::Modulus(Bigint::from_bytes_be(&[0x01, 0x00, 0x01])),
        Attribute::KeyGenMechanism(KeyGenMechanism::Unavailable),
        Attribute::EcParams(p256_params()),
        Attribute::EcPoint(tiny_point()),
        Attribute::NotImplemented(0x9000, vec![5, 6]),
    ]);
    // One class entry was replaced: an object can hold one value per key.
    let expected = template
        .remove_attribute(&Attribute::Class(ObjectClass::SecretKey))
        .normalize();

    let rebuilt = from_value(&to_value(&template)).unwrap();
    assert_eq!(rebuilt.normalize().compare(&expected), Ordering::Equal);
}

/// The implicit-curve EC parameters form survives a round trip.
#[test]
fn implicit_curve_round_trips() {
    let value = json!({ "CKA_EC_PARAMS": { "implicitCurve": null } });
    let rebuilt = from_value(&value).unwrap();
    assert_eq!(rebuilt.len(), 1);
    assert_eq!(to_value(&rebuilt), value);
}

/// A structured value that failed to parse projects under its decimal
/// type code as raw hex, and that form round-trips through the decode
/// path (re-downgrading on the way back in).
#[test]
fn downgraded_structured_attributes_round_trip() {
    // OCTET STRING header claims 3 content bytes but only 1 follows.
    let truncated = [0x04, 0x03, 0x04];
    let point =
        decode_attribute_with(&raw(CKA_EC_POINT, &truncated), &NullDiagnostics).unwrap();
    assert_eq!(
        point,
        Attribute::NotImplemented(CKA_EC_POINT, truncated.to_vec())
    );

    let template = Template::from(vec![point]);
    let value = to_value(&template);
    assert_eq!(value, json!({ "385": "040304" }));
    let rebuilt = from_value(&value).unwrap();
    assert_eq!(rebuilt.compare(&template), Ordering::Equal);

    // Same for EC parameters with trailing bytes.
    let mut bytes = p256_params_der();
    bytes.push(0x00);
    let params =
        decode_attribute_with(&raw(CKA_EC_PARAMS, &bytes), &NullDiagnostics).unwrap();
    let template = Template::from(vec![params]);
    let rebuilt = from_value(&to_value(&template)).unwrap();
    assert_eq!(rebuilt.compare(&template), Ordering::Equal);

    // A decimal key with a well-formed payload decodes to the typed form.
    let healed = from_value(&json!({ "385": "040304aabb" })).unwrap();
    assert!(healed.mem(&Attribute::EcPoint(tiny_point())));
}

/// Unknown type codes are keyed by their decimal code and round trip
/// losslessly as hex.
#[test]
fn unknown_codes_round_trip_by_decimal_key() {
    let rebuilt = from_value(&json!({ "36864": "0506" })).unwrap();
    assert_eq!(
        rebuilt.as_slice(),
        &[Attribute::NotImplemented(0x9000, vec![5, 6])]
    );
}

/// Enum-valued attributes also accept raw numbers.
#[test]
fn enum_attributes_accept_numbers() {
    let rebuilt = from_value(&json!({ "CKA_CLASS": 3, "CKA_KEY_TYPE": 153 })).unwrap();
    assert!(rebuilt.mem(&Attribute::Class(ObjectClass::PrivateKey)));
    assert!(rebuilt.mem(&Attribute::KeyType(KeyType::Unknown(153))));
}

/// A non-object top level is rejected.
#[test]
fn top_level_must_be_an_object() {
    let err = from_value(&json!(["CKA_TOKEN", true])).unwrap_err();
    assert!(err.to_string().contains("not an object"));
}

/// Malformed members are rejected with the offending key named.
#[test]
fn malformed_members_are_rejected() {
    let err = from_value(&json!({ "CKA_TOKEN": "yes" })).unwrap_err();
    assert!(err.to_string().contains("CKA_TOKEN"));
    assert!(err.to_string().contains("boolean"));

    let err = from_value(&json!({ "CKA_LABEL": "not hex!" })).unwrap_err();
    assert!(err.to_string().contains("hex"));

    let err = from_value(&json!({ "CKA_MODULUS": "12x" })).unwrap_err();
    assert!(err.to_string().contains("decimal"));

    let err = from_value(&json!({ "CKA_NO_SUCH_THING": true })).unwrap_err();
    assert!(err.to_string().contains("unknown attribute name"));

    let err = from_value(&json!({ "CKA_EC_PARAMS": { "weierstrass": 1 } })).unwrap_err();
    assert!(err.to_string().contains("namedCurve"));
}

/// `Template` serializes through serde as its object projection.
#[test]
fn serde_uses_the_object_projection() {
    let template = Template::from(vec![
        Attribute::Token(true),
        Attribute::ModulusBits(2048),
    ]);

    let text = serde_json::to_string(&template).unwrap();
    let parsed: Template = serde_json::from_str(&text).unwrap();
    assert_eq!(
        parsed.normalize().compare(&template.normalize()),
        Ordering::Equal
    );
}
