// Copyright (c) ck-template contributors.
// Licensed under the MIT License.

//! Templates: ordered attribute collections and their set-algebra.
//!
//! A template is an ordered sequence of typed attributes. Operations are
//! pure: each returns a new template and leaves the input untouched, so
//! templates can be shared across threads freely. Duplicate type codes are
//! legal and are never removed implicitly; `normalize` sorts stably so
//! duplicates keep their relative order.

use std::cmp::Ordering;

use sha2::{Digest, Sha256};

use crate::attribute::Attribute;
use crate::raw::CkUlong;

/// An ordered collection of attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Template(Vec<Attribute>);

/// Result of [`Template::diff`]: the source attributes the tested template
/// is missing entirely, and those it holds with a different value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateDiff {
    pub missing: Vec<Attribute>,
    pub different: Vec<Attribute>,
}

impl From<Vec<Attribute>> for Template {
    fn from(attributes: Vec<Attribute>) -> Template {
        Template(attributes)
    }
}

impl FromIterator<Attribute> for Template {
    fn from_iter<I: IntoIterator<Item = Attribute>>(iter: I) -> Template {
        Template(iter.into_iter().collect())
    }
}

impl IntoIterator for Template {
    type Item = Attribute;
    type IntoIter = std::vec::IntoIter<Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Template {
    type Item = &'a Attribute;
    type IntoIter = std::slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Template {
    pub fn new() -> Template {
        Template(Vec::new())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Attribute> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Attribute] {
        &self.0
    }

    /// First attribute with the given type code, if any.
    pub fn get(&self, code: CkUlong) -> Option<&Attribute> {
        self.0.iter().find(|a| a.id() == code)
    }

    /// Canonical form: stable sort by type code. Duplicate codes keep
    /// their original relative order; nothing is deduplicated.
    pub fn normalize(&self) -> Template {
        let mut attributes = self.0.clone();
        attributes.sort_by(|a, b| a.id().cmp(&b.id()));
        Template(attributes)
    }

    /// Lexicographic comparison, meaningful on normalized inputs: element
    /// comparison is type-code order, then the value's semantic order.
    pub fn compare(&self, other: &Template) -> Ordering {
        self.0.iter().cmp(other.0.iter())
    }

    /// Exact membership: type code and value both equal.
    pub fn mem(&self, attribute: &Attribute) -> bool {
        self.0.contains(attribute)
    }

    /// Replaces the value of the first attribute with `attribute`'s type
    /// code in place (position preserved), or appends if the code is
    /// absent.
    pub fn set_attribute(&self, attribute: Attribute) -> Template {
        let mut attributes = self.0.clone();
        match attributes.iter().position(|a| a.id() == attribute.id()) {
            Some(i) => attributes[i] = attribute,
            None => attributes.push(attribute),
        }
        Template(attributes)
    }

    /// Removes every attribute exactly equal to `attribute`.
    pub fn remove_attribute(&self, attribute: &Attribute) -> Template {
        Template(self.0.iter().filter(|a| *a != attribute).cloned().collect())
    }

    /// Removes every attribute with the given type code.
    pub fn remove_attribute_type(&self, code: CkUlong) -> Template {
        Template(self.0.iter().filter(|a| a.id() != code).cloned().collect())
    }

    /// Union biased toward `self`: all of `self`'s attributes in their
    /// order, followed by the attributes of `other` whose type code
    /// `self` lacks, in `other`'s order. On shared codes `self`'s value
    /// wins.
    pub fn union(&self, other: &Template) -> Template {
        let mut attributes = self.0.clone();
        for attribute in &other.0 {
            if self.get(attribute.id()).is_none() {
                attributes.push(attribute.clone());
            }
        }
        Template(attributes)
    }

    /// Keeps only attributes whose type code is in `codes`, preserving
    /// this template's order.
    pub fn only_attribute_types(&self, codes: &[CkUlong]) -> Template {
        Template(
            self.0
                .iter()
                .filter(|a| codes.contains(&a.id()))
                .cloned()
                .collect(),
        )
    }

    /// Drops every attribute whose type code is in `codes`.
    pub fn except_attribute_types(&self, codes: &[CkUlong]) -> Template {
        Template(
            self.0
                .iter()
                .filter(|a| !codes.contains(&a.id()))
                .cloned()
                .collect(),
        )
    }

    /// Looks up each code in the requested order. `None` if any code is
    /// absent (no partial result); otherwise the found attributes in the
    /// requested order.
    pub fn find_attribute_types(&self, codes: &[CkUlong]) -> Option<Vec<Attribute>> {
        let mut found = Vec::with_capacity(codes.len());
        for &code in codes {
            found.push(self.get(code)?.clone());
        }
        Some(found)
    }

    /// True iff every attribute of `self` (full equality) appears
    /// somewhere in `tested`, regardless of order.
    pub fn correspond(&self, tested: &Template) -> bool {
        self.0.iter().all(|a| tested.mem(a))
    }

    /// Partitions `self` against `tested`: attributes whose type code is
    /// absent from `tested` are `missing`; those present with an unequal
    /// value are `different`; exact matches appear in neither.
    pub fn diff(&self, tested: &Template) -> TemplateDiff {
        let mut diff = TemplateDiff::default();
        for attribute in &self.0 {
            match tested.get(attribute.id()) {
                None => diff.missing.push(attribute.clone()),
                Some(found) if found != attribute => diff.different.push(attribute.clone()),
                Some(_) => {}
            }
        }
        diff
    }

    /// The sequence of type codes, preserving order.
    pub fn attribute_types(&self) -> Vec<CkUlong> {
        self.0.iter().map(Attribute::id).collect()
    }

    /// Stable content digest: SHA-256 over the canonical rendering of the
    /// normalized template, as lowercase hex.
    ///
    /// Templates whose normalized attribute sequences are element-wise
    /// equal (duplicate counts included) hash identically. The rendering
    /// is a JSON array of `[name, value]` pairs rather than the object
    /// projection, because an object cannot carry duplicate keys.
    pub fn hash(&self) -> String {
        let canonical = crate::json::canonical_pairs(&self.normalize());
        let digest = Sha256::digest(canonical.to_string().as_bytes());
        hex::encode(digest)
    }
}
