#![no_main]

use libfuzzer_sys::fuzz_target;

use appdeploy::{
    CheckDnsAvailabilityResult, CreateApplicationVersionResult, DescribeEnvironmentsResult,
    DescribeEventsResult, EnvironmentDescription, ValueHash,
};

fuzz_target!(|data: &[u8]| {
    if let Ok(env) = serde_json::from_slice::<EnvironmentDescription>(data) {
        // Anything that deserializes must render and hash without panicking
        let _ = env.to_string();
        let _ = env.value_hash();
        let _ = env.parsed_status();
    }
    let _ = serde_json::from_slice::<DescribeEnvironmentsResult>(data);
    let _ = serde_json::from_slice::<DescribeEventsResult>(data);
    let _ = serde_json::from_slice::<CreateApplicationVersionResult>(data);
    let _ = serde_json::from_slice::<CheckDnsAvailabilityResult>(data);
});
