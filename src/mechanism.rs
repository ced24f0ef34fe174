// Copyright (c) ck-template contributors.
// Licensed under the MIT License.

//! Key-generation mechanism reference sub-codec.
//!
//! `CKA_KEY_GEN_MECHANISM` stores either a `CKM_*` mechanism value or the
//! `CK_UNAVAILABLE_INFORMATION` marker (a locally generated or imported key
//! has no recorded generation mechanism).

use crate::raw::{CkUlong, CK_UNAVAILABLE_INFORMATION};

pub const CKM_RSA_PKCS_KEY_PAIR_GEN: CkUlong = 0x0000_0000;
pub const CKM_DSA_KEY_PAIR_GEN: CkUlong = 0x0000_0010;
pub const CKM_DH_PKCS_KEY_PAIR_GEN: CkUlong = 0x0000_0020;
pub const CKM_X9_42_DH_KEY_PAIR_GEN: CkUlong = 0x0000_0030;
pub const CKM_RC2_KEY_GEN: CkUlong = 0x0000_0100;
pub const CKM_RC4_KEY_GEN: CkUlong = 0x0000_0110;
pub const CKM_DES_KEY_GEN: CkUlong = 0x0000_0120;
pub const CKM_DES2_KEY_GEN: CkUlong = 0x0000_0130;
pub const CKM_DES3_KEY_GEN: CkUlong = 0x0000_0131;
pub const CKM_GENERIC_SECRET_KEY_GEN: CkUlong = 0x0000_0350;
pub const CKM_EC_KEY_PAIR_GEN: CkUlong = 0x0000_1040;
pub const CKM_AES_KEY_GEN: CkUlong = 0x0000_1080;
pub const CKM_BLOWFISH_KEY_GEN: CkUlong = 0x0000_1090;

/// A key-generation mechanism (`CKM_*`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MechanismType {
    RsaPkcsKeyPairGen,
    DsaKeyPairGen,
    DhPkcsKeyPairGen,
    X9_42DhKeyPairGen,
    Rc2KeyGen,
    Rc4KeyGen,
    DesKeyGen,
    Des2KeyGen,
    Des3KeyGen,
    GenericSecretKeyGen,
    EcKeyPairGen,
    AesKeyGen,
    BlowfishKeyGen,
    Unknown(CkUlong),
}

impl PartialOrd for MechanismType {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MechanismType {
    /// Numeric `CK_ULONG` order.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_ulong().cmp(&other.to_ulong())
    }
}

impl MechanismType {
    pub fn from_ulong(value: CkUlong) -> MechanismType {
        match value {
            CKM_RSA_PKCS_KEY_PAIR_GEN => MechanismType::RsaPkcsKeyPairGen,
            CKM_DSA_KEY_PAIR_GEN => MechanismType::DsaKeyPairGen,
            CKM_DH_PKCS_KEY_PAIR_GEN => MechanismType::DhPkcsKeyPairGen,
            CKM_X9_42_DH_KEY_PAIR_GEN => MechanismType::X9_42DhKeyPairGen,
            CKM_RC2_KEY_GEN => MechanismType::Rc2KeyGen,
            CKM_RC4_KEY_GEN => MechanismType::Rc4KeyGen,
            CKM_DES_KEY_GEN => MechanismType::DesKeyGen,
            CKM_DES2_KEY_GEN => MechanismType::Des2KeyGen,
            CKM_DES3_KEY_GEN => MechanismType::Des3KeyGen,
            CKM_GENERIC_SECRET_KEY_GEN => MechanismType::GenericSecretKeyGen,
            CKM_EC_KEY_PAIR_GEN => MechanismType::EcKeyPairGen,
            CKM_AES_KEY_GEN => MechanismType::AesKeyGen,
            CKM_BLOWFISH_KEY_GEN => MechanismType::BlowfishKeyGen,
            other => MechanismType::Unknown(other),
        }
    }

    pub fn to_ulong(self) -> CkUlong {
        match self {
            MechanismType::RsaPkcsKeyPairGen => CKM_RSA_PKCS_KEY_PAIR_GEN,
            MechanismType::DsaKeyPairGen => CKM_DSA_KEY_PAIR_GEN,
            MechanismType::DhPkcsKeyPairGen => CKM_DH_PKCS_KEY_PAIR_GEN,
            MechanismType::X9_42DhKeyPairGen => CKM_X9_42_DH_KEY_PAIR_GEN,
            MechanismType::Rc2KeyGen => CKM_RC2_KEY_GEN,
            MechanismType::Rc4KeyGen => CKM_RC4_KEY_GEN,
            MechanismType::DesKeyGen => CKM_DES_KEY_GEN,
            MechanismType::Des2KeyGen => CKM_DES2_KEY_GEN,
            MechanismType::Des3KeyGen => CKM_DES3_KEY_GEN,
            MechanismType::GenericSecretKeyGen => CKM_GENERIC_SECRET_KEY_GEN,
            MechanismType::EcKeyPairGen => CKM_EC_KEY_PAIR_GEN,
            MechanismType::AesKeyGen => CKM_AES_KEY_GEN,
            MechanismType::BlowfishKeyGen => CKM_BLOWFISH_KEY_GEN,
            MechanismType::Unknown(other) => other,
        }
    }

    pub fn name(self) -> Option<&'static str> {
        match self {
            MechanismType::RsaPkcsKeyPairGen => Some("CKM_RSA_PKCS_KEY_PAIR_GEN"),
            MechanismType::DsaKeyPairGen => Some("CKM_DSA_KEY_PAIR_GEN"),
            MechanismType::DhPkcsKeyPairGen => Some("CKM_DH_PKCS_KEY_PAIR_GEN"),
            MechanismType::X9_42DhKeyPairGen => Some("CKM_X9_42_DH_KEY_PAIR_GEN"),
            MechanismType::Rc2KeyGen => Some("CKM_RC2_KEY_GEN"),
            MechanismType::Rc4KeyGen => Some("CKM_RC4_KEY_GEN"),
            MechanismType::DesKeyGen => Some("CKM_DES_KEY_GEN"),
            MechanismType::Des2KeyGen => Some("CKM_DES2_KEY_GEN"),
            MechanismType::Des3KeyGen => Some("CKM_DES3_KEY_GEN"),
            MechanismType::GenericSecretKeyGen => Some("CKM_GENERIC_SECRET_KEY_GEN"),
            MechanismType::EcKeyPairGen => Some("CKM_EC_KEY_PAIR_GEN"),
            MechanismType::AesKeyGen => Some("CKM_AES_KEY_GEN"),
            MechanismType::BlowfishKeyGen => Some("CKM_BLOWFISH_KEY_GEN"),
            MechanismType::Unknown(_) => None,
        }
    }

    pub fn from_name(name: &str) -> Option<MechanismType> {
        match name {
            "CKM_RSA_PKCS_KEY_PAIR_GEN" => Some(MechanismType::RsaPkcsKeyPairGen),
            "CKM_DSA_KEY_PAIR_GEN" => Some(MechanismType::DsaKeyPairGen),
            "CKM_DH_PKCS_KEY_PAIR_GEN" => Some(MechanismType::DhPkcsKeyPairGen),
            "CKM_X9_42_DH_KEY_PAIR_GEN" => Some(MechanismType::X9_42DhKeyPairGen),
            "CKM_RC2_KEY_GEN" => Some(MechanismType::Rc2KeyGen),
            "CKM_RC4_KEY_GEN" => Some(MechanismType::Rc4KeyGen),
            "CKM_DES_KEY_GEN" => Some(MechanismType::DesKeyGen),
            "CKM_DES2_KEY_GEN" => Some(MechanismType::Des2KeyGen),
            "CKM_DES3_KEY_GEN" => Some(MechanismType::Des3KeyGen),
            "CKM_GENERIC_SECRET_KEY_GEN" => Some(MechanismType::GenericSecretKeyGen),
            "CKM_EC_KEY_PAIR_GEN" => Some(MechanismType::EcKeyPairGen),
            "CKM_AES_KEY_GEN" => Some(MechanismType::AesKeyGen),
            "CKM_BLOWFISH_KEY_GEN" => Some(MechanismType::BlowfishKeyGen),
            _ => None,
        }
    }
}

/// Value of `CKA_KEY_GEN_MECHANISM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyGenMechanism {
    Mechanism(MechanismType),
    /// `CK_UNAVAILABLE_INFORMATION`: the token has no record of how the
    /// key was generated.
    Unavailable,
}

impl PartialOrd for KeyGenMechanism {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for KeyGenMechanism {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_ulong().cmp(&other.to_ulong())
    }
}

impl KeyGenMechanism {
    pub fn from_ulong(value: CkUlong) -> KeyGenMechanism {
        if value == CK_UNAVAILABLE_INFORMATION {
            KeyGenMechanism::Unavailable
        } else {
            KeyGenMechanism::Mechanism(MechanismType::from_ulong(value))
        }
    }

    pub fn to_ulong(self) -> CkUlong {
        match self {
            KeyGenMechanism::Mechanism(m) => m.to_ulong(),
            KeyGenMechanism::Unavailable => CK_UNAVAILABLE_INFORMATION,
        }
    }
}
