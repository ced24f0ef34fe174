// Copyright (c) ck-template contributors.
// Licensed under the MIT License.

//! Typed codec for PKCS#11 attribute records and template set-algebra.
//!
//! Attributes cross the token interface as fixed-layout raw records (type
//! code, value pointer, length). This crate converts them losslessly to a
//! strongly typed, comparable representation and provides the template
//! operations built on top: normalization, comparison, set algebra,
//! diffing, content hashing, and a canonical JSON projection.
//!
//! Only [`decode_attribute`] / [`encode_attribute`] touch the raw layout;
//! everything template-level operates on typed values. A malformed or
//! unrecognized record never aborts decoding: it is carried through as
//! [`Attribute::NotImplemented`] with a diagnostic.
//!
//! Design note: to keep the public API simple, the codec and template
//! operations are exposed directly at the crate root (lib.rs is a
//! publisher).

mod attribute;
mod attribute_type;
mod bigint;
mod diag;
mod ec;
mod error;
mod json;
mod key_type;
mod mechanism;
mod object_class;
mod raw;
mod template;

pub use attribute::{decode_attribute, decode_attribute_with, encode_attribute, Attribute};
pub use attribute_type::{attribute_id, attribute_name, kind_of, ValueKind};
pub use bigint::Bigint;
pub use diag::{Diagnostics, NullDiagnostics, TracingDiagnostics};
pub use ec::{Curve, EcParams, EcPoint, FieldId, SpecifiedEcDomain};
pub use error::{Error, Result};
pub use json::{from_value, to_value};
pub use key_type::KeyType;
pub use mechanism::{KeyGenMechanism, MechanismType};
pub use object_class::ObjectClass;
pub use raw::{CkAttribute, CkUlong, RawAttribute, CK_UNAVAILABLE_INFORMATION};
pub use template::{Template, TemplateDiff};

pub use attribute_type::{
    CKA_ALWAYS_AUTHENTICATE, CKA_ALWAYS_SENSITIVE, CKA_APPLICATION, CKA_BASE, CKA_CERTIFICATE_TYPE,
    CKA_CHECK_VALUE, CKA_CLASS, CKA_COEFFICIENT, CKA_COPYABLE, CKA_DECRYPT, CKA_DERIVE,
    CKA_DESTROYABLE, CKA_EC_PARAMS, CKA_EC_POINT, CKA_ENCRYPT, CKA_EXPONENT_1, CKA_EXPONENT_2,
    CKA_EXTRACTABLE, CKA_ID, CKA_ISSUER, CKA_KEY_GEN_MECHANISM, CKA_KEY_TYPE, CKA_LABEL,
    CKA_LOCAL, CKA_MODIFIABLE, CKA_MODULUS, CKA_MODULUS_BITS, CKA_NEVER_EXTRACTABLE,
    CKA_OBJECT_ID, CKA_PRIME, CKA_PRIME_1, CKA_PRIME_2, CKA_PRIME_BITS, CKA_PRIVATE,
    CKA_PRIVATE_EXPONENT, CKA_PUBLIC_EXPONENT, CKA_SENSITIVE, CKA_SERIAL_NUMBER, CKA_SIGN,
    CKA_SIGN_RECOVER, CKA_SUBJECT, CKA_SUBPRIME, CKA_SUBPRIME_BITS, CKA_TOKEN, CKA_TRUSTED,
    CKA_UNWRAP, CKA_VALUE, CKA_VALUE_BITS, CKA_VALUE_LEN, CKA_VERIFY, CKA_VERIFY_RECOVER,
    CKA_WRAP, CKA_WRAP_WITH_TRUSTED,
};
