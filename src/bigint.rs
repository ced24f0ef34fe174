// Copyright (c) ck-template contributors.
// Licensed under the MIT License.

//! Unsigned big integers in the token wire form.
//!
//! PKCS#11 big-integer attributes (RSA moduli, exponents, DSA parameters)
//! are unsigned big-endian byte strings. [`Bigint`] stores the canonical
//! minimal form: no leading zero bytes, except a single `0x00` byte for the
//! value zero. Negative values are unrepresentable.

use std::cmp::Ordering;

/// An unsigned big integer in canonical big-endian form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Bigint(Vec<u8>);

impl PartialOrd for Bigint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Bigint {
    /// Numeric order. Canonical form makes this (length, lexicographic).
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl From<u64> for Bigint {
    fn from(value: u64) -> Bigint {
        Bigint::from_bytes_be(&value.to_be_bytes())
    }
}

impl Bigint {
    /// Builds a value from big-endian bytes, normalizing to canonical form.
    ///
    /// Leading zero bytes are stripped; an empty or all-zero input is the
    /// value zero.
    pub fn from_bytes_be(bytes: &[u8]) -> Bigint {
        let first = bytes.iter().position(|&b| b != 0);
        match first {
            Some(i) => Bigint(bytes[i..].to_vec()),
            None => Bigint(vec![0]),
        }
    }

    /// The canonical big-endian encoding.
    pub fn to_bytes_be(&self) -> &[u8] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0]
    }

    /// Decimal rendering, for the textual projection.
    pub fn to_decimal(&self) -> String {
        // Repeated division by 10 over the big-endian limbs.
        let mut digits = Vec::new();
        let mut quotient = self.0.clone();
        loop {
            let mut remainder: u32 = 0;
            let mut all_zero = true;
            for byte in quotient.iter_mut() {
                let acc = remainder * 256 + u32::from(*byte);
                *byte = (acc / 10) as u8;
                remainder = acc % 10;
                if *byte != 0 {
                    all_zero = false;
                }
            }
            digits.push(b'0' + remainder as u8);
            if all_zero {
                break;
            }
        }
        digits.reverse();
        // Digits are ASCII by construction.
        String::from_utf8(digits).unwrap_or_default()
    }

    /// Parses a decimal string. Rejects empty input and non-digit bytes.
    pub fn from_decimal(text: &str) -> Option<Bigint> {
        if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let mut acc: Vec<u8> = vec![0];
        for digit in text.bytes() {
            // acc = acc * 10 + digit
            let mut carry = u32::from(digit - b'0');
            for byte in acc.iter_mut().rev() {
                let v = u32::from(*byte) * 10 + carry;
                *byte = (v & 0xFF) as u8;
                carry = v >> 8;
            }
            while carry > 0 {
                acc.insert(0, (carry & 0xFF) as u8);
                carry >>= 8;
            }
        }
        Some(Bigint::from_bytes_be(&acc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_form_strips_leading_zeros() {
        assert_eq!(Bigint::from_bytes_be(&[0, 0, 1, 2]).to_bytes_be(), &[1, 2]);
        assert_eq!(Bigint::from_bytes_be(&[]).to_bytes_be(), &[0]);
        assert_eq!(Bigint::from_bytes_be(&[0, 0]).to_bytes_be(), &[0]);
    }

    #[test]
    fn decimal_round_trip() {
        for value in [0u64, 1, 9, 10, 255, 256, 65_537, u64::MAX] {
            let big = Bigint::from(value);
            assert_eq!(big.to_decimal(), value.to_string());
            assert_eq!(Bigint::from_decimal(&value.to_string()), Some(big));
        }
    }

    #[test]
    fn decimal_rejects_garbage() {
        assert_eq!(Bigint::from_decimal(""), None);
        assert_eq!(Bigint::from_decimal("12a3"), None);
        assert_eq!(Bigint::from_decimal("-5"), None);
    }

    #[test]
    fn numeric_order() {
        let a = Bigint::from(255u64);
        let b = Bigint::from(256u64);
        assert!(a < b);
        assert!(Bigint::from(0u64) < a);
    }
}
