//! Property tests for value equality and hashing.

use proptest::prelude::*;

use appdeploy::{
    BuildConfiguration, ComputeType, CreateApplicationVersionRequest, StorageLocation, Tag,
    ValueHash,
};

fn opt_text() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("[A-Za-z0-9_./:-]{0,24}")
}

fn tag() -> impl Strategy<Value = Tag> {
    (opt_text(), opt_text()).prop_map(|(key, value)| {
        let mut tag = Tag::new();
        tag.set_key(key);
        tag.set_value(value);
        tag
    })
}

fn build_request(
    application: &Option<String>,
    label: &Option<String>,
    timeout: Option<i32>,
    tags: &Option<Vec<Tag>>,
) -> CreateApplicationVersionRequest {
    let mut request = CreateApplicationVersionRequest::new();
    request.set_application_name(application.clone());
    request.set_version_label(label.clone());
    request.set_build_configuration(timeout.map(|minutes| {
        BuildConfiguration::new()
            .with_compute_type(ComputeType::BuildGeneral1Small)
            .with_timeout_in_minutes(minutes)
    }));
    request.set_tags(tags.as_deref());
    request
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Rebuilding a value object from the same fields gives an equal
    /// object with the same hash.
    #[test]
    fn property_rebuild_is_equal_and_hashes_equal(
        application in opt_text(),
        label in opt_text(),
        timeout in proptest::option::of(any::<i32>()),
        tags in proptest::option::of(proptest::collection::vec(tag(), 0..4)),
    ) {
        let a = build_request(&application, &label, timeout, &tags);
        let b = build_request(&application, &label, timeout, &tags);

        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.value_hash(), b.value_hash());
        prop_assert_eq!(a.to_string(), b.to_string());
    }

    /// PROPERTY: Changing one scalar breaks equality.
    #[test]
    fn property_changed_scalar_breaks_equality(
        bucket in "[a-z]{1,12}",
        key in "[a-z]{1,12}",
        other in "[a-z]{1,12}",
    ) {
        prop_assume!(key != other);
        let a = StorageLocation::new().with_bucket(bucket.clone()).with_key(key);
        let b = StorageLocation::new().with_bucket(bucket).with_key(other);
        prop_assert_ne!(a, b);
    }

    /// PROPERTY: Tag hashing follows the 31-multiplier field combination.
    #[test]
    fn property_tag_hash_combines_fields(key in opt_text(), value in opt_text()) {
        let mut tag = Tag::new();
        tag.set_key(key.clone());
        tag.set_value(value.clone());

        let expected = 31i32
            .wrapping_mul(31i32.wrapping_add(key.value_hash()))
            .wrapping_add(value.value_hash());
        prop_assert_eq!(tag.value_hash(), expected);
    }
}
