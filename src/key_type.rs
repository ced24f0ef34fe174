// Copyright (c) ck-template contributors.
// Licensed under the MIT License.

//! Key type (`CKK_*`) enumeration sub-codec.

use crate::raw::CkUlong;

pub const CKK_RSA: CkUlong = 0x0000_0000;
pub const CKK_DSA: CkUlong = 0x0000_0001;
pub const CKK_DH: CkUlong = 0x0000_0002;
pub const CKK_EC: CkUlong = 0x0000_0003;
pub const CKK_X9_42_DH: CkUlong = 0x0000_0004;
pub const CKK_KEA: CkUlong = 0x0000_0005;
pub const CKK_GENERIC_SECRET: CkUlong = 0x0000_0010;
pub const CKK_RC2: CkUlong = 0x0000_0011;
pub const CKK_RC4: CkUlong = 0x0000_0012;
pub const CKK_DES: CkUlong = 0x0000_0013;
pub const CKK_DES2: CkUlong = 0x0000_0014;
pub const CKK_DES3: CkUlong = 0x0000_0015;
pub const CKK_CAST128: CkUlong = 0x0000_0018;
pub const CKK_AES: CkUlong = 0x0000_001F;
pub const CKK_BLOWFISH: CkUlong = 0x0000_0020;
pub const CKK_TWOFISH: CkUlong = 0x0000_0021;

/// Type of key material held by an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyType {
    Rsa,
    Dsa,
    Dh,
    Ec,
    X9_42Dh,
    Kea,
    GenericSecret,
    Rc2,
    Rc4,
    Des,
    Des2,
    Des3,
    Cast128,
    Aes,
    Blowfish,
    Twofish,
    Unknown(CkUlong),
}

impl PartialOrd for KeyType {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for KeyType {
    /// Numeric `CK_ULONG` order.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_ulong().cmp(&other.to_ulong())
    }
}

impl KeyType {
    pub fn from_ulong(value: CkUlong) -> KeyType {
        match value {
            CKK_RSA => KeyType::Rsa,
            CKK_DSA => KeyType::Dsa,
            CKK_DH => KeyType::Dh,
            CKK_EC => KeyType::Ec,
            CKK_X9_42_DH => KeyType::X9_42Dh,
            CKK_KEA => KeyType::Kea,
            CKK_GENERIC_SECRET => KeyType::GenericSecret,
            CKK_RC2 => KeyType::Rc2,
            CKK_RC4 => KeyType::Rc4,
            CKK_DES => KeyType::Des,
            CKK_DES2 => KeyType::Des2,
            CKK_DES3 => KeyType::Des3,
            CKK_CAST128 => KeyType::Cast128,
            CKK_AES => KeyType::Aes,
            CKK_BLOWFISH => KeyType::Blowfish,
            CKK_TWOFISH => KeyType::Twofish,
            other => KeyType::Unknown(other),
        }
    }

    pub fn to_ulong(self) -> CkUlong {
        match self {
            KeyType::Rsa => CKK_RSA,
            KeyType::Dsa => CKK_DSA,
            KeyType::Dh => CKK_DH,
            KeyType::Ec => CKK_EC,
            KeyType::X9_42Dh => CKK_X9_42_DH,
            KeyType::Kea => CKK_KEA,
            KeyType::GenericSecret => CKK_GENERIC_SECRET,
            KeyType::Rc2 => CKK_RC2,
            KeyType::Rc4 => CKK_RC4,
            KeyType::Des => CKK_DES,
            KeyType::Des2 => CKK_DES2,
            KeyType::Des3 => CKK_DES3,
            KeyType::Cast128 => CKK_CAST128,
            KeyType::Aes => CKK_AES,
            KeyType::Blowfish => CKK_BLOWFISH,
            KeyType::Twofish => CKK_TWOFISH,
            KeyType::Unknown(other) => other,
        }
    }

    pub fn name(self) -> Option<&'static str> {
        match self {
            KeyType::Rsa => Some("CKK_RSA"),
            KeyType::Dsa => Some("CKK_DSA"),
            KeyType::Dh => Some("CKK_DH"),
            KeyType::Ec => Some("CKK_EC"),
            KeyType::X9_42Dh => Some("CKK_X9_42_DH"),
            KeyType::Kea => Some("CKK_KEA"),
            KeyType::GenericSecret => Some("CKK_GENERIC_SECRET"),
            KeyType::Rc2 => Some("CKK_RC2"),
            KeyType::Rc4 => Some("CKK_RC4"),
            KeyType::Des => Some("CKK_DES"),
            KeyType::Des2 => Some("CKK_DES2"),
            KeyType::Des3 => Some("CKK_DES3"),
            KeyType::Cast128 => Some("CKK_CAST128"),
            KeyType::Aes => Some("CKK_AES"),
            KeyType::Blowfish => Some("CKK_BLOWFISH"),
            KeyType::Twofish => Some("CKK_TWOFISH"),
            KeyType::Unknown(_) => None,
        }
    }

    pub fn from_name(name: &str) -> Option<KeyType> {
        match name {
            "CKK_RSA" => Some(KeyType::Rsa),
            "CKK_DSA" => Some(KeyType::Dsa),
            "CKK_DH" => Some(KeyType::Dh),
            "CKK_EC" => Some(KeyType::Ec),
            "CKK_X9_42_DH" => Some(KeyType::X9_42Dh),
            "CKK_KEA" => Some(KeyType::Kea),
            "CKK_GENERIC_SECRET" => Some(KeyType::GenericSecret),
            "CKK_RC2" => Some(KeyType::Rc2),
            "CKK_RC4" => Some(KeyType::Rc4),
            "CKK_DES" => Some(KeyType::Des),
            "CKK_DES2" => Some(KeyType::Des2),
            "CKK_DES3" => Some(KeyType::Des3),
            "CKK_CAST128" => Some(KeyType::Cast128),
            "CKK_AES" => Some(KeyType::Aes),
            "CKK_BLOWFISH" => Some(KeyType::Blowfish),
            "CKK_TWOFISH" => Some(KeyType::Twofish),
            _ => None,
        }
    }
}
