//! Contract: hashing is stable and consistent with equality.

use appdeploy::{
    ConfigurationOptionSetting, EnvironmentDescription, EnvironmentLink, EnvironmentStatus,
    OptionSpecification, StorageLocation, Tag, ValueHash,
};

/// CONTRACT: The hash of an object with no fields set is 31^n for n fields.
#[test]
fn contract_empty_object_hash() {
    assert_eq!(StorageLocation::new().value_hash(), 31 * 31);
    assert_eq!(OptionSpecification::new().value_hash(), 31 * 31 * 31);
    assert_eq!(ConfigurationOptionSetting::new().value_hash(), 31 * 31 * 31 * 31);
}

/// CONTRACT: Known values hash to fixed numbers across releases.
#[test]
fn contract_known_hashes() {
    // "a" = 97, "b" = 98
    assert_eq!(Tag::pair("a", "b").value_hash(), (31 + 97) * 31 + 98);
    assert_eq!(Tag::new().with_key("a").value_hash(), (31 + 97) * 31);
}

/// CONTRACT: Equal objects hash equally.
#[test]
fn contract_equal_objects_hash_equally() {
    let build = || {
        EnvironmentDescription::new()
            .with_environment_name("shop-prod")
            .with_status(EnvironmentStatus::Ready)
            .with_environment_link(EnvironmentLink::new().with_link_name("worker"))
    };
    assert_eq!(build(), build());
    assert_eq!(build().value_hash(), build().value_hash());
}

/// CONTRACT: List order participates in equality and hashing.
#[test]
fn contract_list_order_matters() {
    let a = Tag::pair("k", "1");
    let b = Tag::pair("k", "2");
    let ab = EnvironmentDescription::new()
        .with_environment_link(EnvironmentLink::new().with_link_name("a"))
        .with_environment_link(EnvironmentLink::new().with_link_name("b"));
    let ba = EnvironmentDescription::new()
        .with_environment_link(EnvironmentLink::new().with_link_name("b"))
        .with_environment_link(EnvironmentLink::new().with_link_name("a"));

    assert_ne!(a, b);
    assert_ne!(ab, ba);
    assert_ne!(ab.value_hash(), ba.value_hash());
}

/// CONTRACT: A status given as an enumeration equals the same status given as text.
#[test]
fn contract_enum_and_text_are_interchangeable() {
    let typed = EnvironmentDescription::new().with_status(EnvironmentStatus::Terminated);
    let text = EnvironmentDescription::new().with_status("Terminated");
    assert_eq!(typed, text);
    assert_eq!(typed.value_hash(), text.value_hash());
}
