// Copyright (c) ck-template contributors.
// Licensed under the MIT License.

//! Typed attributes and the raw-record codec.
//!
//! [`Attribute`] pairs an attribute type code with a value of exactly the
//! kind that code prescribes; the pairing is enforced by construction, one
//! enum variant per known code. Values whose type code is unknown, or whose
//! structured payload failed to parse, are carried as
//! [`Attribute::NotImplemented`] with the original code and raw bytes.
//!
//! [`decode_attribute`] and [`encode_attribute`] are the only functions
//! that touch the raw record layout. Decoding one malformed or
//! unrecognized record never fails: it downgrades to `NotImplemented` and
//! reports the anomaly through the diagnostic sink.

use std::cmp::Ordering;

use crate::attribute_type::*;
use crate::bigint::Bigint;
use crate::diag::{Diagnostics, TracingDiagnostics};
use crate::ec::{EcParams, EcPoint};
use crate::error::{Error, Result};
use crate::key_type::KeyType;
use crate::mechanism::KeyGenMechanism;
use crate::object_class::ObjectClass;
use crate::raw::{CkUlong, RawAttribute};

/// A typed attribute: (type code, value) with the value kind fixed per code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attribute {
    Class(ObjectClass),
    Token(bool),
    Private(bool),
    Label(Vec<u8>),
    Application(Vec<u8>),
    Value(Vec<u8>),
    ObjectId(Vec<u8>),
    CertificateType(CkUlong),
    Issuer(Vec<u8>),
    SerialNumber(Vec<u8>),
    Trusted(bool),
    CheckValue(Vec<u8>),
    KeyType(KeyType),
    Subject(Vec<u8>),
    Id(Vec<u8>),
    Sensitive(bool),
    Encrypt(bool),
    Decrypt(bool),
    Wrap(bool),
    Unwrap(bool),
    Sign(bool),
    SignRecover(bool),
    Verify(bool),
    VerifyRecover(bool),
    Derive(bool),
    Modulus(Bigint),
    ModulusBits(CkUlong),
    PublicExponent(Bigint),
    PrivateExponent(Bigint),
    Prime1(Bigint),
    Prime2(Bigint),
    Exponent1(Bigint),
    Exponent2(Bigint),
    Coefficient(Bigint),
    Prime(Bigint),
    Subprime(Bigint),
    Base(Bigint),
    PrimeBits(CkUlong),
    SubprimeBits(CkUlong),
    ValueBits(CkUlong),
    ValueLen(CkUlong),
    Extractable(bool),
    Local(bool),
    NeverExtractable(bool),
    AlwaysSensitive(bool),
    KeyGenMechanism(KeyGenMechanism),
    Modifiable(bool),
    Copyable(bool),
    Destroyable(bool),
    EcParams(EcParams),
    EcPoint(EcPoint),
    AlwaysAuthenticate(bool),
    WrapWithTrusted(bool),
    /// Unknown type code, or a structured payload that failed to parse;
    /// the original code and raw bytes are preserved.
    NotImplemented(CkUlong, Vec<u8>),
}

/// Borrowed, kind-level view of an attribute value.
///
/// Equal type codes guarantee equal kinds, so comparing two attributes with
/// the same code only ever pairs matching views.
#[derive(Debug)]
pub(crate) enum ValueRef<'a> {
    Bool(bool),
    Bytes(&'a [u8]),
    Ulong(CkUlong),
    Bigint(&'a Bigint),
    Class(ObjectClass),
    Key(KeyType),
    Mechanism(KeyGenMechanism),
    Params(&'a EcParams),
    Point(&'a EcPoint),
    Raw(&'a [u8]),
}

impl Attribute {
    /// The attribute type code.
    pub fn id(&self) -> CkUlong {
        match self {
            Self::Class(_) => CKA_CLASS,
            Self::Token(_) => CKA_TOKEN,
            Self::Private(_) => CKA_PRIVATE,
            Self::Label(_) => CKA_LABEL,
            Self::Application(_) => CKA_APPLICATION,
            Self::Value(_) => CKA_VALUE,
            Self::ObjectId(_) => CKA_OBJECT_ID,
            Self::CertificateType(_) => CKA_CERTIFICATE_TYPE,
            Self::Issuer(_) => CKA_ISSUER,
            Self::SerialNumber(_) => CKA_SERIAL_NUMBER,
            Self::Trusted(_) => CKA_TRUSTED,
            Self::CheckValue(_) => CKA_CHECK_VALUE,
            Self::KeyType(_) => CKA_KEY_TYPE,
            Self::Subject(_) => CKA_SUBJECT,
            Self::Id(_) => CKA_ID,
            Self::Sensitive(_) => CKA_SENSITIVE,
            Self::Encrypt(_) => CKA_ENCRYPT,
            Self::Decrypt(_) => CKA_DECRYPT,
            Self::Wrap(_) => CKA_WRAP,
            Self::Unwrap(_) => CKA_UNWRAP,
            Self::Sign(_) => CKA_SIGN,
            Self::SignRecover(_) => CKA_SIGN_RECOVER,
            Self::Verify(_) => CKA_VERIFY,
            Self::VerifyRecover(_) => CKA_VERIFY_RECOVER,
            Self::Derive(_) => CKA_DERIVE,
            Self::Modulus(_) => CKA_MODULUS,
            Self::ModulusBits(_) => CKA_MODULUS_BITS,
            Self::PublicExponent(_) => CKA_PUBLIC_EXPONENT,
            Self::PrivateExponent(_) => CKA_PRIVATE_EXPONENT,
            Self::Prime1(_) => CKA_PRIME_1,
            Self::Prime2(_) => CKA_PRIME_2,
            Self::Exponent1(_) => CKA_EXPONENT_1,
            Self::Exponent2(_) => CKA_EXPONENT_2,
            Self::Coefficient(_) => CKA_COEFFICIENT,
            Self::Prime(_) => CKA_PRIME,
            Self::Subprime(_) => CKA_SUBPRIME,
            Self::Base(_) => CKA_BASE,
            Self::PrimeBits(_) => CKA_PRIME_BITS,
            Self::SubprimeBits(_) => CKA_SUBPRIME_BITS,
            Self::ValueBits(_) => CKA_VALUE_BITS,
            Self::ValueLen(_) => CKA_VALUE_LEN,
            Self::Extractable(_) => CKA_EXTRACTABLE,
            Self::Local(_) => CKA_LOCAL,
            Self::NeverExtractable(_) => CKA_NEVER_EXTRACTABLE,
            Self::AlwaysSensitive(_) => CKA_ALWAYS_SENSITIVE,
            Self::KeyGenMechanism(_) => CKA_KEY_GEN_MECHANISM,
            Self::Modifiable(_) => CKA_MODIFIABLE,
            Self::Copyable(_) => CKA_COPYABLE,
            Self::Destroyable(_) => CKA_DESTROYABLE,
            Self::EcParams(_) => CKA_EC_PARAMS,
            Self::EcPoint(_) => CKA_EC_POINT,
            Self::AlwaysAuthenticate(_) => CKA_ALWAYS_AUTHENTICATE,
            Self::WrapWithTrusted(_) => CKA_WRAP_WITH_TRUSTED,
            Self::NotImplemented(code, _) => *code,
        }
    }

    /// The attribute's name: the `CKA_*` PKCS#11 name, or the decimal
    /// code for the raw-bytes form.
    ///
    /// Every `NotImplemented` value names itself by code, even when the
    /// code is known: a downgraded payload no longer follows the known
    /// name's value grammar, so it must not serialize under it.
    pub fn name(&self) -> String {
        match self {
            Self::NotImplemented(code, _) => code.to_string(),
            _ => match attribute_name(self.id()) {
                Some(name) => name.to_string(),
                None => self.id().to_string(),
            },
        }
    }

    pub(crate) fn value_ref(&self) -> ValueRef<'_> {
        match self {
            Self::Class(v) => ValueRef::Class(*v),
            Self::KeyType(v) => ValueRef::Key(*v),
            Self::KeyGenMechanism(v) => ValueRef::Mechanism(*v),
            Self::EcParams(v) => ValueRef::Params(v),
            Self::EcPoint(v) => ValueRef::Point(v),
            Self::Token(v)
            | Self::Private(v)
            | Self::Trusted(v)
            | Self::Sensitive(v)
            | Self::Encrypt(v)
            | Self::Decrypt(v)
            | Self::Wrap(v)
            | Self::Unwrap(v)
            | Self::Sign(v)
            | Self::SignRecover(v)
            | Self::Verify(v)
            | Self::VerifyRecover(v)
            | Self::Derive(v)
            | Self::Extractable(v)
            | Self::Local(v)
            | Self::NeverExtractable(v)
            | Self::AlwaysSensitive(v)
            | Self::Modifiable(v)
            | Self::Copyable(v)
            | Self::Destroyable(v)
            | Self::AlwaysAuthenticate(v)
            | Self::WrapWithTrusted(v) => ValueRef::Bool(*v),
            Self::Label(v)
            | Self::Application(v)
            | Self::Value(v)
            | Self::ObjectId(v)
            | Self::Issuer(v)
            | Self::SerialNumber(v)
            | Self::CheckValue(v)
            | Self::Subject(v)
            | Self::Id(v) => ValueRef::Bytes(v),
            Self::CertificateType(v)
            | Self::ModulusBits(v)
            | Self::PrimeBits(v)
            | Self::SubprimeBits(v)
            | Self::ValueBits(v)
            | Self::ValueLen(v) => ValueRef::Ulong(*v),
            Self::Modulus(v)
            | Self::PublicExponent(v)
            | Self::PrivateExponent(v)
            | Self::Prime1(v)
            | Self::Prime2(v)
            | Self::Exponent1(v)
            | Self::Exponent2(v)
            | Self::Coefficient(v)
            | Self::Prime(v)
            | Self::Subprime(v)
            | Self::Base(v) => ValueRef::Bigint(v),
            Self::NotImplemented(_, v) => ValueRef::Raw(v),
        }
    }

    fn value_cmp(&self, other: &Attribute) -> Ordering {
        match (self.value_ref(), other.value_ref()) {
            (ValueRef::Bool(a), ValueRef::Bool(b)) => a.cmp(&b),
            (ValueRef::Bytes(a), ValueRef::Bytes(b)) => a.cmp(b),
            (ValueRef::Ulong(a), ValueRef::Ulong(b)) => a.cmp(&b),
            (ValueRef::Bigint(a), ValueRef::Bigint(b)) => a.cmp(b),
            (ValueRef::Class(a), ValueRef::Class(b)) => a.cmp(&b),
            (ValueRef::Key(a), ValueRef::Key(b)) => a.cmp(&b),
            (ValueRef::Mechanism(a), ValueRef::Mechanism(b)) => a.cmp(&b),
            (ValueRef::Params(a), ValueRef::Params(b)) => a.cmp(b),
            (ValueRef::Point(a), ValueRef::Point(b)) => a.cmp(b),
            (ValueRef::Raw(a), ValueRef::Raw(b)) => a.cmp(b),
            // Equal codes always pair matching kinds; unequal codes are
            // already decided by the id comparison.
            _ => Ordering::Equal,
        }
    }
}

impl PartialOrd for Attribute {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Attribute {
    /// Type-code order first; equal codes fall back to the value's own
    /// semantic ordering (structured values compare by decoded content).
    fn cmp(&self, other: &Self) -> Ordering {
        self.id()
            .cmp(&other.id())
            .then_with(|| self.value_cmp(other))
    }
}

fn decode_bool(name: &'static str, bytes: &[u8]) -> Result<bool> {
    if bytes.len() != 1 {
        return Err(Error::InvalidLength {
            name,
            len: bytes.len(),
            expected: 1,
        });
    }
    Ok(bytes[0] != 0)
}

fn decode_ulong(name: &'static str, bytes: &[u8]) -> Result<CkUlong> {
    match <[u8; std::mem::size_of::<CkUlong>()]>::try_from(bytes) {
        Ok(array) => Ok(CkUlong::from_ne_bytes(array)),
        Err(_) => Err(Error::InvalidLength {
            name,
            len: bytes.len(),
            expected: std::mem::size_of::<CkUlong>(),
        }),
    }
}

fn ulong_bytes(value: CkUlong) -> Vec<u8> {
    value.to_ne_bytes().to_vec()
}

/// Decodes a raw record into a typed attribute, using the default
/// `tracing`-backed diagnostic sink.
pub fn decode_attribute(raw: &RawAttribute) -> Result<Attribute> {
    decode_attribute_with(raw, &TracingDiagnostics)
}

/// Decodes a raw record into a typed attribute.
///
/// Unknown type codes and structured payloads that fail to parse are
/// downgraded to [`Attribute::NotImplemented`] with one diagnostic each;
/// they never fail the call. Fixed-width values with the wrong length are
/// hard errors (the device contract requires exact widths), as is a record
/// whose value was never filled.
pub fn decode_attribute_with(raw: &RawAttribute, diag: &dyn Diagnostics) -> Result<Attribute> {
    let code = raw.attribute_type();
    let bytes = raw.value()?;
    let name = attribute_name(code).unwrap_or("CKA_?");

    let attribute = match code {
        CKA_CLASS => Attribute::Class(ObjectClass::from_ulong(decode_ulong(name, bytes)?)),
        CKA_TOKEN => Attribute::Token(decode_bool(name, bytes)?),
        CKA_PRIVATE => Attribute::Private(decode_bool(name, bytes)?),
        CKA_LABEL => Attribute::Label(bytes.to_vec()),
        CKA_APPLICATION => Attribute::Application(bytes.to_vec()),
        CKA_VALUE => Attribute::Value(bytes.to_vec()),
        CKA_OBJECT_ID => Attribute::ObjectId(bytes.to_vec()),
        CKA_CERTIFICATE_TYPE => Attribute::CertificateType(decode_ulong(name, bytes)?),
        CKA_ISSUER => Attribute::Issuer(bytes.to_vec()),
        CKA_SERIAL_NUMBER => Attribute::SerialNumber(bytes.to_vec()),
        CKA_TRUSTED => Attribute::Trusted(decode_bool(name, bytes)?),
        CKA_CHECK_VALUE => Attribute::CheckValue(bytes.to_vec()),
        CKA_KEY_TYPE => Attribute::KeyType(KeyType::from_ulong(decode_ulong(name, bytes)?)),
        CKA_SUBJECT => Attribute::Subject(bytes.to_vec()),
        CKA_ID => Attribute::Id(bytes.to_vec()),
        CKA_SENSITIVE => Attribute::Sensitive(decode_bool(name, bytes)?),
        CKA_ENCRYPT => Attribute::Encrypt(decode_bool(name, bytes)?),
        CKA_DECRYPT => Attribute::Decrypt(decode_bool(name, bytes)?),
        CKA_WRAP => Attribute::Wrap(decode_bool(name, bytes)?),
        CKA_UNWRAP => Attribute::Unwrap(decode_bool(name, bytes)?),
        CKA_SIGN => Attribute::Sign(decode_bool(name, bytes)?),
        CKA_SIGN_RECOVER => Attribute::SignRecover(decode_bool(name, bytes)?),
        CKA_VERIFY => Attribute::Verify(decode_bool(name, bytes)?),
        CKA_VERIFY_RECOVER => Attribute::VerifyRecover(decode_bool(name, bytes)?),
        CKA_DERIVE => Attribute::Derive(decode_bool(name, bytes)?),
        CKA_MODULUS => Attribute::Modulus(Bigint::from_bytes_be(bytes)),
        CKA_MODULUS_BITS => Attribute::ModulusBits(decode_ulong(name, bytes)?),
        CKA_PUBLIC_EXPONENT => Attribute::PublicExponent(Bigint::from_bytes_be(bytes)),
        CKA_PRIVATE_EXPONENT => Attribute::PrivateExponent(Bigint::from_bytes_be(bytes)),
        CKA_PRIME_1 => Attribute::Prime1(Bigint::from_bytes_be(bytes)),
        CKA_PRIME_2 => Attribute::Prime2(Bigint::from_bytes_be(bytes)),
        CKA_EXPONENT_1 => Attribute::Exponent1(Bigint::from_bytes_be(bytes)),
        CKA_EXPONENT_2 => Attribute::Exponent2(Bigint::from_bytes_be(bytes)),
        CKA_COEFFICIENT => Attribute::Coefficient(Bigint::from_bytes_be(bytes)),
        CKA_PRIME => Attribute::Prime(Bigint::from_bytes_be(bytes)),
        CKA_SUBPRIME => Attribute::Subprime(Bigint::from_bytes_be(bytes)),
        CKA_BASE => Attribute::Base(Bigint::from_bytes_be(bytes)),
        CKA_PRIME_BITS => Attribute::PrimeBits(decode_ulong(name, bytes)?),
        CKA_SUBPRIME_BITS => Attribute::SubprimeBits(decode_ulong(name, bytes)?),
        CKA_VALUE_BITS => Attribute::ValueBits(decode_ulong(name, bytes)?),
        CKA_VALUE_LEN => Attribute::ValueLen(decode_ulong(name, bytes)?),
        CKA_EXTRACTABLE => Attribute::Extractable(decode_bool(name, bytes)?),
        CKA_LOCAL => Attribute::Local(decode_bool(name, bytes)?),
        CKA_NEVER_EXTRACTABLE => Attribute::NeverExtractable(decode_bool(name, bytes)?),
        CKA_ALWAYS_SENSITIVE => Attribute::AlwaysSensitive(decode_bool(name, bytes)?),
        CKA_KEY_GEN_MECHANISM => {
            Attribute::KeyGenMechanism(KeyGenMechanism::from_ulong(decode_ulong(name, bytes)?))
        }
        CKA_MODIFIABLE => Attribute::Modifiable(decode_bool(name, bytes)?),
        CKA_COPYABLE => Attribute::Copyable(decode_bool(name, bytes)?),
        CKA_DESTROYABLE => Attribute::Destroyable(decode_bool(name, bytes)?),
        CKA_EC_PARAMS => match EcParams::from_der_bytes(bytes) {
            Ok(params) => Attribute::EcParams(params),
            Err(e) => {
                diag.log(&format!(
                    "{name}: undecodable value {} ({e})",
                    hex::encode(bytes)
                ));
                Attribute::NotImplemented(code, bytes.to_vec())
            }
        },
        CKA_EC_POINT => match EcPoint::from_der_bytes(bytes) {
            Ok(point) => Attribute::EcPoint(point),
            Err(e) => {
                diag.log(&format!(
                    "{name}: undecodable value {} ({e})",
                    hex::encode(bytes)
                ));
                Attribute::NotImplemented(code, bytes.to_vec())
            }
        },
        CKA_ALWAYS_AUTHENTICATE => Attribute::AlwaysAuthenticate(decode_bool(name, bytes)?),
        CKA_WRAP_WITH_TRUSTED => Attribute::WrapWithTrusted(decode_bool(name, bytes)?),
        _ => {
            diag.log(&format!(
                "unknown attribute type {code:#x} ({} value bytes)",
                bytes.len()
            ));
            Attribute::NotImplemented(code, bytes.to_vec())
        }
    };

    Ok(attribute)
}

/// Encodes a typed attribute into a filled raw record.
///
/// The sub-codec is selected by the value's kind, which the `Attribute`
/// invariant guarantees matches the type code. Only DER serialization of
/// the structured kinds can fail.
pub fn encode_attribute(attribute: &Attribute) -> Result<RawAttribute> {
    let bytes = match attribute.value_ref() {
        ValueRef::Bool(v) => vec![u8::from(v)],
        ValueRef::Bytes(v) | ValueRef::Raw(v) => v.to_vec(),
        ValueRef::Ulong(v) => ulong_bytes(v),
        ValueRef::Bigint(v) => v.to_bytes_be().to_vec(),
        ValueRef::Class(v) => ulong_bytes(v.to_ulong()),
        ValueRef::Key(v) => ulong_bytes(v.to_ulong()),
        ValueRef::Mechanism(v) => ulong_bytes(v.to_ulong()),
        ValueRef::Params(v) => v.to_der_bytes()?,
        ValueRef::Point(v) => v.to_der_bytes()?,
    };
    Ok(RawAttribute::filled(attribute.id(), bytes))
}
