// Copyright (c) ck-template contributors.
// Licensed under the MIT License.

//! Structured elliptic-curve attribute values.
//!
//! `CKA_EC_PARAMS` carries a DER `ECParameters` choice (RFC 5480 / SEC1):
//! a named-curve OID, the implicit-curve NULL marker, or a full specified
//! domain. `CKA_EC_POINT` carries a DER OCTET STRING wrapping the point
//! octets. Decoding is strict: malformed encodings and trailing bytes are
//! errors here; the attribute codec decides how to recover.

use std::cmp::Ordering;

use der::asn1::{BitString, Null, ObjectIdentifier, OctetString, OctetStringRef};
use der::{Any, Choice, Decode, Encode, Sequence};

use crate::error::Result;

/// `FieldID ::= SEQUENCE { fieldType OID, parameters ANY }`
#[derive(Clone, Debug, Eq, PartialEq, Sequence)]
pub struct FieldId {
    pub field_type: ObjectIdentifier,
    pub parameters: Any,
}

/// `Curve ::= SEQUENCE { a OCTET STRING, b OCTET STRING, seed BIT STRING OPTIONAL }`
#[derive(Clone, Debug, Eq, PartialEq, Sequence)]
pub struct Curve {
    pub a: OctetString,
    pub b: OctetString,
    pub seed: Option<BitString>,
}

/// `SpecifiedECDomain` (SEC1): explicitly spelled-out domain parameters.
#[derive(Clone, Debug, Eq, PartialEq, Sequence)]
pub struct SpecifiedEcDomain {
    pub version: u8,
    pub field_id: FieldId,
    pub curve: Curve,
    pub base: OctetString,
    pub order: der::asn1::Uint,
    pub cofactor: Option<der::asn1::Uint>,
}

impl SpecifiedEcDomain {
    /// Strict DER decode; trailing bytes are an error.
    pub fn from_der_bytes(bytes: &[u8]) -> Result<SpecifiedEcDomain> {
        Ok(SpecifiedEcDomain::from_der(bytes)?)
    }

    /// Canonical DER encode.
    pub fn to_der_bytes(&self) -> Result<Vec<u8>> {
        Ok(self.to_der()?)
    }
}

/// `ECParameters ::= CHOICE { namedCurve OID, implicitCurve NULL, specifiedCurve SpecifiedECDomain }`
#[derive(Clone, Debug, Eq, PartialEq, Choice)]
pub enum EcParams {
    NamedCurve(ObjectIdentifier),
    ImplicitCurve(Null),
    SpecifiedCurve(SpecifiedEcDomain),
}

impl EcParams {
    /// A named-curve reference from a dotted OID string.
    pub fn named_curve(oid: &str) -> Result<EcParams> {
        let oid: ObjectIdentifier = oid.parse().map_err(der::Error::from)?;
        Ok(EcParams::NamedCurve(oid))
    }

    /// Strict DER decode; trailing bytes are an error.
    pub fn from_der_bytes(bytes: &[u8]) -> Result<EcParams> {
        Ok(EcParams::from_der(bytes)?)
    }

    /// Canonical DER encode.
    pub fn to_der_bytes(&self) -> Result<Vec<u8>> {
        Ok(self.to_der()?)
    }
}

impl PartialOrd for EcParams {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EcParams {
    /// Total order over decoded content: choice arm first, then the arm's
    /// fields. DER is canonical, so comparing the stored values compares
    /// the abstract parameters.
    fn cmp(&self, other: &Self) -> Ordering {
        use EcParams::*;
        match (self, other) {
            (NamedCurve(a), NamedCurve(b)) => a.as_bytes().cmp(b.as_bytes()),
            (ImplicitCurve(_), ImplicitCurve(_)) => Ordering::Equal,
            (SpecifiedCurve(a), SpecifiedCurve(b)) => a.content_cmp(b),
            (NamedCurve(_), _) => Ordering::Less,
            (_, NamedCurve(_)) => Ordering::Greater,
            (ImplicitCurve(_), _) => Ordering::Less,
            (_, ImplicitCurve(_)) => Ordering::Greater,
        }
    }
}

impl SpecifiedEcDomain {
    fn content_cmp(&self, other: &Self) -> Ordering {
        self.version
            .cmp(&other.version)
            .then_with(|| {
                self.field_id
                    .field_type
                    .as_bytes()
                    .cmp(other.field_id.field_type.as_bytes())
            })
            .then_with(|| {
                self.field_id
                    .parameters
                    .value()
                    .cmp(other.field_id.parameters.value())
            })
            .then_with(|| self.curve.a.as_bytes().cmp(other.curve.a.as_bytes()))
            .then_with(|| self.curve.b.as_bytes().cmp(other.curve.b.as_bytes()))
            .then_with(|| {
                let a = self.curve.seed.as_ref().map(|s| s.raw_bytes());
                let b = other.curve.seed.as_ref().map(|s| s.raw_bytes());
                a.cmp(&b)
            })
            .then_with(|| self.base.as_bytes().cmp(other.base.as_bytes()))
            .then_with(|| self.order.as_bytes().cmp(other.order.as_bytes()))
            .then_with(|| {
                let a = self.cofactor.as_ref().map(|c| c.as_bytes());
                let b = other.cofactor.as_ref().map(|c| c.as_bytes());
                a.cmp(&b)
            })
    }
}

/// An elliptic-curve point as exchanged in `CKA_EC_POINT`: the raw point
/// octets (typically an uncompressed SEC1 point), DER-framed as an
/// OCTET STRING on the wire.
#[derive(Clone, Debug, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct EcPoint(Vec<u8>);

impl EcPoint {
    pub fn new(point_octets: Vec<u8>) -> EcPoint {
        EcPoint(point_octets)
    }

    /// The point octets without the DER framing.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Strict DER decode; trailing bytes are an error.
    pub fn from_der_bytes(bytes: &[u8]) -> Result<EcPoint> {
        let inner = OctetStringRef::from_der(bytes)?;
        Ok(EcPoint(inner.as_bytes().to_vec()))
    }

    /// Canonical DER encode.
    pub fn to_der_bytes(&self) -> Result<Vec<u8>> {
        let framed = OctetStringRef::new(&self.0)?;
        Ok(framed.to_der()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // id-prime256v1
    const P256_OID: &str = "1.2.840.10045.3.1.7";

    #[test]
    fn named_curve_round_trip() {
        let params = EcParams::named_curve(P256_OID).unwrap();
        let der_bytes = params.to_der_bytes().unwrap();
        assert_eq!(EcParams::from_der_bytes(&der_bytes).unwrap(), params);
    }

    #[test]
    fn trailing_bytes_rejected() {
        let mut der_bytes = EcParams::named_curve(P256_OID).unwrap().to_der_bytes().unwrap();
        der_bytes.push(0x00);
        assert!(EcParams::from_der_bytes(&der_bytes).is_err());
    }

    #[test]
    fn point_round_trip_preserves_octets() {
        let point = EcPoint::new(vec![0x04, 0xAA, 0xBB]);
        let der_bytes = point.to_der_bytes().unwrap();
        assert_eq!(der_bytes, [0x04, 0x03, 0x04, 0xAA, 0xBB]);
        assert_eq!(EcPoint::from_der_bytes(&der_bytes).unwrap(), point);
    }

    #[test]
    fn truncated_point_rejected() {
        assert!(EcPoint::from_der_bytes(&[0x04, 0x10, 0x01]).is_err());
    }
}
