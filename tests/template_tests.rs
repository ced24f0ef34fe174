// Copyright (c) ck-template contributors.
// Licensed under the MIT License.

//! Integration tests for template set-algebra.
//!
//! Normalization, comparison, membership, set/remove, union, filtering,
//! lookup, correspondence, diffing and the content digest, all through the
//! public `Template` API.

mod common;

use common::*;

use std::cmp::Ordering;

use ck_template::{
    Attribute, Bigint, ObjectClass, Template, CKA_CLASS, CKA_LABEL, CKA_MODULUS,
    CKA_MODULUS_BITS, CKA_TOKEN, CKA_VALUE_LEN,
};

/// Normalization sorts by type code, is stable for duplicates, and is
/// idempotent. Nothing is deduplicated.
#[test]
fn normalize_sorts_stably_and_is_idempotent() {
    let template = Template::from(vec![
        Attribute::Label(b"b".to_vec()),
        Attribute::Token(true),
        Attribute::Label(b"a".to_vec()),
        Attribute::Class(ObjectClass::SecretKey),
    ]);

    let normalized = template.normalize();
    assert_eq!(
        normalized.attribute_types(),
        vec![CKA_CLASS, CKA_TOKEN, CKA_LABEL, CKA_LABEL]
    );
    // Stable: the two CKA_LABEL duplicates keep their original order.
    assert_eq!(normalized.as_slice()[2], Attribute::Label(b"b".to_vec()));
    assert_eq!(normalized.as_slice()[3], Attribute::Label(b"a".to_vec()));

    assert_eq!(normalized.normalize(), normalized);
    assert_eq!(normalized.len(), template.len());
}

/// `compare` is a total order on normalized templates: reflexive,
/// antisymmetric, and transitive over a small generated set.
#[test]
fn compare_is_a_total_order() {
    let templates: Vec<Template> = vec![
        Template::new(),
        Template::from(vec![Attribute::Token(false)]),
        Template::from(vec![Attribute::Token(true)]),
        Template::from(vec![Attribute::Token(true), Attribute::Sensitive(false)]),
        Template::from(vec![Attribute::Class(ObjectClass::Data)]),
        Template::from(vec![Attribute::Class(ObjectClass::PrivateKey)]),
        sample_template().normalize(),
    ];

    for a in &templates {
        assert_eq!(a.compare(a), Ordering::Equal);
        for b in &templates {
            assert_eq!(a.compare(b), b.compare(a).reverse());
            for c in &templates {
                if a.compare(b) != Ordering::Greater && b.compare(c) != Ordering::Greater {
                    assert_ne!(a.compare(c), Ordering::Greater);
                }
            }
        }
    }

    // The empty template sorts before everything else.
    let empty = Template::new();
    assert_eq!(empty.compare(&templates[1]), Ordering::Less);
}

/// A permutation compares equal after normalization and has the same hash.
#[test]
fn permutations_are_equal_after_normalization() {
    let template = sample_template();
    let mut shuffled: Vec<Attribute> = template.iter().cloned().collect();
    shuffled.reverse();
    let shuffled = Template::from(shuffled);

    assert_ne!(template.compare(&shuffled), Ordering::Equal);
    assert_eq!(
        template.normalize().compare(&shuffled.normalize()),
        Ordering::Equal
    );
    assert_eq!(template.hash(), shuffled.hash());
}

/// Membership requires both the type code and the value to match.
#[test]
fn mem_is_exact_membership() {
    let template = sample_template();
    assert!(template.mem(&Attribute::Token(true)));
    assert!(!template.mem(&Attribute::Token(false)));
    assert!(!template.mem(&Attribute::Id(Vec::new())));
}

/// `set_attribute` replaces in place, preserving both position and
/// length; an absent code is appended.
#[test]
fn set_attribute_replaces_in_place_or_appends() {
    let template = Template::from(vec![
        Attribute::Token(true),
        Attribute::Label(b"old".to_vec()),
        Attribute::Sensitive(false),
    ]);

    let replaced = template.set_attribute(Attribute::Label(b"new".to_vec()));
    assert_eq!(replaced.len(), template.len());
    assert_eq!(replaced.as_slice()[1], Attribute::Label(b"new".to_vec()));
    assert_eq!(
        replaced.attribute_types(),
        template.attribute_types(),
        "replacement moved an attribute"
    );

    let appended = template.set_attribute(Attribute::Id(vec![1]));
    assert_eq!(appended.len(), template.len() + 1);
    assert_eq!(appended.as_slice()[3], Attribute::Id(vec![1]));
}

/// Union keeps the left operand's attributes (and order) and appends the
/// right operand's leftovers: [A=1,B=2] ∪ [A=9,C=3] = [A=1,B=2,C=3].
#[test]
fn union_is_left_biased() {
    let left = Template::from(vec![
        Attribute::ModulusBits(1),
        Attribute::ValueLen(2),
    ]);
    let right = Template::from(vec![
        Attribute::ModulusBits(9),
        Attribute::Id(vec![3]),
    ]);

    let union = left.union(&right);
    assert_eq!(
        union.as_slice(),
        &[
            Attribute::ModulusBits(1),
            Attribute::ValueLen(2),
            Attribute::Id(vec![3]),
        ]
    );

    // Union with the empty template is the identity, from either side.
    assert_eq!(left.union(&Template::new()), left);
    assert_eq!(Template::new().union(&left), left);
}

/// Removal by value drops exact matches only; removal by type drops every
/// attribute with that code.
#[test]
fn remove_by_value_and_by_type() {
    let template = Template::from(vec![
        Attribute::Label(b"a".to_vec()),
        Attribute::Token(true),
        Attribute::Label(b"b".to_vec()),
    ]);

    let by_value = template.remove_attribute(&Attribute::Label(b"a".to_vec()));
    assert_eq!(
        by_value.as_slice(),
        &[Attribute::Token(true), Attribute::Label(b"b".to_vec())]
    );

    // A non-member value removes nothing.
    assert_eq!(template.remove_attribute(&Attribute::Token(false)), template);

    let by_type = template.remove_attribute_type(CKA_LABEL);
    assert_eq!(by_type.as_slice(), &[Attribute::Token(true)]);
}

/// `only` keeps the listed codes, `except` drops them, and the two
/// partition the template.
#[test]
fn only_and_except_partition_the_template() {
    let template = sample_template();
    let codes = [CKA_CLASS, CKA_MODULUS];

    let only = template.only_attribute_types(&codes);
    let except = template.except_attribute_types(&codes);

    assert_eq!(only.len() + except.len(), template.len());
    assert!(only.iter().all(|a| codes.contains(&a.id())));
    assert!(except.iter().all(|a| !codes.contains(&a.id())));
    // Both preserve the original relative order.
    assert_eq!(only.union(&except).normalize(), template.normalize());
}

/// Lookup returns values in the requested code order, and `None` as soon
/// as any requested code is absent.
#[test]
fn find_attribute_types_is_all_or_nothing() {
    let template = sample_template();

    let found = template
        .find_attribute_types(&[CKA_MODULUS_BITS, CKA_CLASS])
        .unwrap();
    assert_eq!(
        found,
        vec![
            Attribute::ModulusBits(2048),
            Attribute::Class(ObjectClass::PrivateKey),
        ]
    );

    assert!(template
        .find_attribute_types(&[CKA_CLASS, CKA_VALUE_LEN])
        .is_none());
    assert_eq!(template.find_attribute_types(&[]), Some(Vec::new()));
}

/// `correspond` is order-independent containment with exact values.
#[test]
fn correspond_checks_containment() {
    let query = Template::from(vec![
        Attribute::Token(true),
        Attribute::Class(ObjectClass::PrivateKey),
    ]);
    let object = sample_template();

    assert!(query.correspond(&object));
    assert!(Template::new().correspond(&object));
    assert!(!object.correspond(&query));

    let wrong_value = query.set_attribute(Attribute::Token(false));
    assert!(!wrong_value.correspond(&object));
}

/// `diff` partitions the query into missing codes and different values;
/// exact matches appear in neither bucket.
#[test]
fn diff_partitions_missing_and_different() {
    let object = sample_template();
    let query = Template::from(vec![
        Attribute::Token(true),
        Attribute::Sensitive(false),
        Attribute::Id(vec![7]),
    ]);

    let diff = query.diff(&object);
    assert_eq!(diff.missing, vec![Attribute::Id(vec![7])]);
    assert_eq!(diff.different, vec![Attribute::Sensitive(false)]);

    let clean = object.diff(&object);
    assert!(clean.missing.is_empty() && clean.different.is_empty());
}

/// The content digest is order-independent but counts duplicates: the
/// same attribute twice hashes differently from once.
#[test]
fn hash_counts_duplicates() {
    let once = Template::from(vec![Attribute::Token(true), Attribute::Sensitive(true)]);
    let twice = Template::from(vec![
        Attribute::Token(true),
        Attribute::Sensitive(true),
        Attribute::Token(true),
    ]);

    assert_ne!(once.hash(), twice.hash());

    // Different values with the same codes hash differently too.
    let other = once.set_attribute(Attribute::Sensitive(false));
    assert_ne!(once.hash(), other.hash());

    // Digest is hex-encoded SHA-256: 64 lowercase hex characters.
    let digest = once.hash();
    assert_eq!(digest.len(), 64);
    assert!(digest.bytes().all(|b| b.is_ascii_hexdigit() && !b.is_ascii_uppercase()));

    // A big-integer value participates through its canonical form.
    let a = Template::from(vec![Attribute::Modulus(Bigint::from_bytes_be(&[0x00, 0x05]))]);
    let b = Template::from(vec![Attribute::Modulus(Bigint::from(5u64))]);
    assert_eq!(a.hash(), b.hash());
}
