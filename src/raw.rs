// Copyright (c) ck-template contributors.
// Licensed under the MIT License.

//! Raw attribute records.
//!
//! The token interface exchanges attributes as fixed-layout
//! `CK_ATTRIBUTE` structs: a type code, a value pointer and a length, in
//! the interface's native word width. [`CkAttribute`] mirrors that layout
//! bit-exactly for interop; [`RawAttribute`] is the safe owned form the
//! codec works on, tracking the record's fill lifecycle:
//!
//! 1. created with a type code and no value;
//! 2. optionally allocated (storage reserved for a device fill step);
//! 3. filled, either by `encode` or by the device, after which the value
//!    may be decoded.
//!
//! A record has a single owner; it must not be decoded before it is filled.

use std::os::raw::c_void;

use crate::error::{Error, Result};

/// `CK_ULONG` on LP64 hosts. The interface word width in one place.
pub type CkUlong = u64;

/// Length/value marker for "information not available".
pub const CK_UNAVAILABLE_INFORMATION: CkUlong = !0;

/// Bit-exact mirror of the interface's `CK_ATTRIBUTE` struct.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
#[allow(non_snake_case)]
pub struct CkAttribute {
    pub type_: CkUlong,
    pub pValue: *mut c_void,
    pub ulValueLen: CkUlong,
}

/// Fill state of a raw record's value.
#[derive(Debug, Clone, PartialEq, Eq)]
enum RawValue {
    /// No storage; used to query an attribute's length.
    Empty,
    /// Storage reserved for a device fill step; content not yet meaningful.
    Reserved(Vec<u8>),
    /// Value bytes are present and readable.
    Filled(Vec<u8>),
}

/// A raw attribute record with owned storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAttribute {
    attribute_type: CkUlong,
    value: RawValue,
}

impl RawAttribute {
    /// A record with a type code and no value storage.
    pub fn new(attribute_type: CkUlong) -> RawAttribute {
        RawAttribute {
            attribute_type,
            value: RawValue::Empty,
        }
    }

    /// A record carrying value bytes (the encode direction).
    pub fn filled(attribute_type: CkUlong, bytes: Vec<u8>) -> RawAttribute {
        RawAttribute {
            attribute_type,
            value: RawValue::Filled(bytes),
        }
    }

    pub fn attribute_type(&self) -> CkUlong {
        self.attribute_type
    }

    /// Reserves `len` bytes of zeroed storage for a subsequent device fill.
    pub fn allocate(&mut self, len: usize) {
        self.value = RawValue::Reserved(vec![0; len]);
    }

    /// Stores value bytes directly.
    pub fn fill(&mut self, bytes: Vec<u8>) {
        self.value = RawValue::Filled(bytes);
    }

    /// Marks reserved storage as filled by the device, truncating to the
    /// length the device reported.
    pub fn commit(&mut self, reported_len: CkUlong) -> Result<()> {
        if reported_len == CK_UNAVAILABLE_INFORMATION {
            return Err(Error::ValueUnavailable(self.attribute_type));
        }
        match std::mem::replace(&mut self.value, RawValue::Empty) {
            RawValue::Reserved(mut buf) if (reported_len as usize) <= buf.len() => {
                buf.truncate(reported_len as usize);
                self.value = RawValue::Filled(buf);
                Ok(())
            }
            other => {
                self.value = other;
                Err(Error::ValueUnavailable(self.attribute_type))
            }
        }
    }

    /// The value bytes, if the record has been filled.
    pub fn value(&self) -> Result<&[u8]> {
        match &self.value {
            RawValue::Filled(bytes) => Ok(bytes),
            _ => Err(Error::ValueUnavailable(self.attribute_type)),
        }
    }

    /// Interface view of this record for an outbound call.
    ///
    /// The returned struct borrows this record's storage: it is valid only
    /// while `self` is neither moved nor mutated.
    pub fn as_ck_attribute(&mut self) -> CkAttribute {
        let (ptr, len) = match &mut self.value {
            RawValue::Empty => (std::ptr::null_mut(), 0),
            RawValue::Reserved(buf) | RawValue::Filled(buf) => {
                (buf.as_mut_ptr() as *mut c_void, buf.len() as CkUlong)
            }
        };
        CkAttribute {
            type_: self.attribute_type,
            pValue: ptr,
            ulValueLen: len,
        }
    }

    /// Copies an interface record (after the device has written it) into an
    /// owned, filled record.
    ///
    /// # Safety
    ///
    /// `attr.pValue` must either be null or point to `attr.ulValueLen`
    /// readable bytes.
    pub unsafe fn from_ck_attribute(attr: &CkAttribute) -> Result<RawAttribute> {
        if attr.ulValueLen == CK_UNAVAILABLE_INFORMATION {
            return Err(Error::ValueUnavailable(attr.type_));
        }
        if attr.pValue.is_null() {
            return Ok(RawAttribute::new(attr.type_));
        }
        let bytes =
            std::slice::from_raw_parts(attr.pValue as *const u8, attr.ulValueLen as usize);
        Ok(RawAttribute::filled(attr.type_, bytes.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unfilled_record_has_no_value() {
        let mut raw = RawAttribute::new(1);
        assert!(raw.value().is_err());
        raw.allocate(4);
        assert!(raw.value().is_err());
        raw.commit(3).unwrap();
        assert_eq!(raw.value().unwrap(), &[0, 0, 0]);
    }

    #[test]
    fn commit_rejects_unavailable_and_oversized_lengths() {
        let mut raw = RawAttribute::new(1);
        raw.allocate(2);
        assert!(raw.commit(CK_UNAVAILABLE_INFORMATION).is_err());
        assert!(raw.commit(5).is_err());
        assert!(raw.commit(2).is_ok());
    }

    #[test]
    fn ck_attribute_view_tracks_storage() {
        let mut raw = RawAttribute::filled(7, vec![1, 2, 3]);
        let view = raw.as_ck_attribute();
        assert_eq!(view.type_, 7);
        assert_eq!(view.ulValueLen, 3);
        let rebuilt = unsafe { RawAttribute::from_ck_attribute(&view).unwrap() };
        assert_eq!(rebuilt, raw);
    }
}
