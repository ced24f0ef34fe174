// Copyright (c) ck-template contributors.
// Licensed under the MIT License.

//! Object class (`CKO_*`) enumeration sub-codec.

use crate::raw::CkUlong;

pub const CKO_DATA: CkUlong = 0x0000_0000;
pub const CKO_CERTIFICATE: CkUlong = 0x0000_0001;
pub const CKO_PUBLIC_KEY: CkUlong = 0x0000_0002;
pub const CKO_PRIVATE_KEY: CkUlong = 0x0000_0003;
pub const CKO_SECRET_KEY: CkUlong = 0x0000_0004;
pub const CKO_HW_FEATURE: CkUlong = 0x0000_0005;
pub const CKO_DOMAIN_PARAMETERS: CkUlong = 0x0000_0006;
pub const CKO_MECHANISM: CkUlong = 0x0000_0007;
pub const CKO_OTP_KEY: CkUlong = 0x0000_0008;

/// Class of a PKCS#11 object.
///
/// Unlisted values (vendor ranges included) survive round-trips through
/// the `Unknown` escape variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectClass {
    Data,
    Certificate,
    PublicKey,
    PrivateKey,
    SecretKey,
    HwFeature,
    DomainParameters,
    Mechanism,
    OtpKey,
    Unknown(CkUlong),
}

impl PartialOrd for ObjectClass {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ObjectClass {
    /// Numeric `CK_ULONG` order.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_ulong().cmp(&other.to_ulong())
    }
}

impl ObjectClass {
    pub fn from_ulong(value: CkUlong) -> ObjectClass {
        match value {
            CKO_DATA => ObjectClass::Data,
            CKO_CERTIFICATE => ObjectClass::Certificate,
            CKO_PUBLIC_KEY => ObjectClass::PublicKey,
            CKO_PRIVATE_KEY => ObjectClass::PrivateKey,
            CKO_SECRET_KEY => ObjectClass::SecretKey,
            CKO_HW_FEATURE => ObjectClass::HwFeature,
            CKO_DOMAIN_PARAMETERS => ObjectClass::DomainParameters,
            CKO_MECHANISM => ObjectClass::Mechanism,
            CKO_OTP_KEY => ObjectClass::OtpKey,
            other => ObjectClass::Unknown(other),
        }
    }

    pub fn to_ulong(self) -> CkUlong {
        match self {
            ObjectClass::Data => CKO_DATA,
            ObjectClass::Certificate => CKO_CERTIFICATE,
            ObjectClass::PublicKey => CKO_PUBLIC_KEY,
            ObjectClass::PrivateKey => CKO_PRIVATE_KEY,
            ObjectClass::SecretKey => CKO_SECRET_KEY,
            ObjectClass::HwFeature => CKO_HW_FEATURE,
            ObjectClass::DomainParameters => CKO_DOMAIN_PARAMETERS,
            ObjectClass::Mechanism => CKO_MECHANISM,
            ObjectClass::OtpKey => CKO_OTP_KEY,
            ObjectClass::Unknown(other) => other,
        }
    }

    /// PKCS#11 name for known classes, `None` for the unknown escape.
    pub fn name(self) -> Option<&'static str> {
        match self {
            ObjectClass::Data => Some("CKO_DATA"),
            ObjectClass::Certificate => Some("CKO_CERTIFICATE"),
            ObjectClass::PublicKey => Some("CKO_PUBLIC_KEY"),
            ObjectClass::PrivateKey => Some("CKO_PRIVATE_KEY"),
            ObjectClass::SecretKey => Some("CKO_SECRET_KEY"),
            ObjectClass::HwFeature => Some("CKO_HW_FEATURE"),
            ObjectClass::DomainParameters => Some("CKO_DOMAIN_PARAMETERS"),
            ObjectClass::Mechanism => Some("CKO_MECHANISM"),
            ObjectClass::OtpKey => Some("CKO_OTP_KEY"),
            ObjectClass::Unknown(_) => None,
        }
    }

    pub fn from_name(name: &str) -> Option<ObjectClass> {
        match name {
            "CKO_DATA" => Some(ObjectClass::Data),
            "CKO_CERTIFICATE" => Some(ObjectClass::Certificate),
            "CKO_PUBLIC_KEY" => Some(ObjectClass::PublicKey),
            "CKO_PRIVATE_KEY" => Some(ObjectClass::PrivateKey),
            "CKO_SECRET_KEY" => Some(ObjectClass::SecretKey),
            "CKO_HW_FEATURE" => Some(ObjectClass::HwFeature),
            "CKO_DOMAIN_PARAMETERS" => Some(ObjectClass::DomainParameters),
            "CKO_MECHANISM" => Some(ObjectClass::Mechanism),
            "CKO_OTP_KEY" => Some(ObjectClass::OtpKey),
            _ => None,
        }
    }
}
