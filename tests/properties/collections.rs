//! Property tests for defensively copied collections.

use proptest::prelude::*;

use appdeploy::{ConfigurationOptionSetting, DescribeEnvironmentsRequest, UpdateEnvironmentRequest};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Mutating a list after handing it to a setter never changes
    /// what the getter returns.
    #[test]
    fn property_setter_copies_list(
        ids in proptest::collection::vec("e-[a-z0-9]{1,8}", 0..6),
        extra in "e-[a-z0-9]{1,8}",
    ) {
        let mut source = ids.clone();
        let mut request = DescribeEnvironmentsRequest::new();
        request.set_environment_ids(Some(source.as_slice()));

        source.push(extra);
        if let Some(first) = source.first_mut() {
            first.push('!');
        }

        prop_assert_eq!(request.environment_ids(), Some(ids.as_slice()));
    }

    /// PROPERTY: Appending one element at a time equals replacing the whole list.
    #[test]
    fn property_append_equals_replace(
        values in proptest::collection::vec("[a-z]{1,6}", 1..5),
    ) {
        let settings: Vec<_> = values
            .iter()
            .map(|v| ConfigurationOptionSetting::of("ns", "opt", v.as_str()))
            .collect();

        let replaced = UpdateEnvironmentRequest::new().with_option_settings(&settings);
        let appended = settings
            .iter()
            .cloned()
            .fold(UpdateEnvironmentRequest::new(), |r, s| r.with_option_setting(s));

        prop_assert_eq!(replaced, appended);
    }

    /// PROPERTY: Setting a list to absent makes the getter report absent.
    #[test]
    fn property_clear_reports_absent(names in proptest::collection::vec("[a-z]{1,6}", 0..4)) {
        let mut request = DescribeEnvironmentsRequest::new().with_environment_names(&names);
        request.set_environment_names(None);
        prop_assert!(request.environment_names().is_none());
    }

    /// PROPERTY: Appending batches accumulates every element in order.
    #[test]
    fn property_batches_accumulate(
        first in proptest::collection::vec("e-[a-z0-9]{1,8}", 0..4),
        second in proptest::collection::vec("e-[a-z0-9]{1,8}", 0..4),
    ) {
        let request = DescribeEnvironmentsRequest::new()
            .with_environment_ids_appended(&first)
            .with_environment_ids_appended(&second);

        let expected: Vec<String> = first.iter().chain(&second).cloned().collect();
        prop_assert_eq!(request.environment_ids(), Some(expected.as_slice()));
    }
}
