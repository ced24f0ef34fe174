// Copyright (c) ck-template contributors.
// Licensed under the MIT License.

//! Shared helpers for `ck_template` integration tests.
//!
//! The integration tests in `tests/*.rs` exercise the public codec and
//! template API. Raw-record builders, a recording diagnostic sink, and a
//! few canned attribute values live here.

#![allow(dead_code)]

use std::cell::RefCell;

use ck_template::{
    Attribute, Bigint, Diagnostics, EcParams, EcPoint, RawAttribute, Template,
};

/// A diagnostic sink that records every message it receives.
pub(crate) struct RecordingSink {
    pub(crate) messages: RefCell<Vec<String>>,
}

impl RecordingSink {
    pub(crate) fn new() -> RecordingSink {
        RecordingSink {
            messages: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn count(&self) -> usize {
        self.messages.borrow().len()
    }
}

impl Diagnostics for RecordingSink {
    fn log(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

/// A filled raw record with the given type code and value bytes.
pub(crate) fn raw(code: ck_template::CkUlong, bytes: &[u8]) -> RawAttribute {
    RawAttribute::filled(code, bytes.to_vec())
}

/// secp256r1 as a named-curve EC parameters value.
pub(crate) fn p256_params() -> EcParams {
    EcParams::named_curve("1.2.840.10045.3.1.7").unwrap()
}

/// DER encoding of the secp256r1 curve OID (what CKA_EC_PARAMS carries).
pub(crate) fn p256_params_der() -> Vec<u8> {
    vec![
        0x06, 0x08, 0x2A, 0x86, 0x48, 0xCE, 0x3D, 0x03, 0x01, 0x07,
    ]
}

/// A short uncompressed-point stand-in for CKA_EC_POINT tests.
pub(crate) fn tiny_point() -> EcPoint {
    EcPoint::new(vec![0x04, 0xAA, 0xBB])
}

/// A representative key template touching every value kind.
pub(crate) fn sample_template() -> Template {
    Template::from(vec![
        Attribute::Class(ck_template::ObjectClass::PrivateKey),
        Attribute::KeyType(ck_template::KeyType::Rsa),
        Attribute::Token(true),
        Attribute::Sensitive(true),
        Attribute::Label(b"test key".to_vec()),
        Attribute::ModulusBits(2048),
        Attribute::Modulus(Bigint::from_bytes_be(&[0xC1, 0x00, 0x23])),
        Attribute::PublicExponent(Bigint::from(65537u64)),
    ])
}
