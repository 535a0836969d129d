#![no_main]

use libfuzzer_sys::fuzz_target;

use appdeploy::{ComputeType, EnvironmentStatus, EventSeverity, ServiceErrorCode};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Parsing either round-trips exactly or reports an unknown value
        if let Ok(status) = content.parse::<EnvironmentStatus>() {
            assert_eq!(status.as_str(), content);
        }
        let _ = content.parse::<ComputeType>();
        let _ = content.parse::<EventSeverity>();
        let _ = content.parse::<ServiceErrorCode>();

        // Enumerations from JSON
        let _ = serde_json::from_str::<EnvironmentStatus>(content);
    }
});
