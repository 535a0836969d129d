//! Application version processing status

string_enum! {
    /// Processing state of an application version's source
    pub enum ApplicationVersionStatus {
        Processed => "Processed",
        Unprocessed => "Unprocessed",
        Failed => "Failed",
        Processing => "Processing",
        Building => "Building",
    }
}
