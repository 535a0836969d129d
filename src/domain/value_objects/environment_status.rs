//! Environment lifecycle and health vocabularies.
//!
//! These describe a state machine owned by the remote service. The client
//! only ever holds a snapshot of where an environment was when it was
//! described.

string_enum! {
    /// Operational status of an environment
    ///
    /// Transitions `Launching -> Updating -> Ready -> Terminating -> Terminated`
    /// are driven entirely by the service.
    pub enum EnvironmentStatus {
        /// Initial deployment in progress
        Launching => "Launching",
        /// Configuration or application version update in progress
        Updating => "Updating",
        /// Available for update or terminate
        Ready => "Ready",
        /// Shutting down
        Terminating => "Terminating",
        /// Not running
        Terminated => "Terminated",
    }
}

string_enum! {
    /// Health color of a running environment
    pub enum EnvironmentHealth {
        /// Healthy and fully functional
        Green => "Green",
        /// Two consecutive failures
        Yellow => "Yellow",
        /// Three or more consecutive failures; not responsive
        Red => "Red",
        /// Not fully launched or health checks suspended (the default)
        Grey => "Grey",
    }
}

string_enum! {
    /// Enhanced health status of the application running in an environment
    pub enum EnvironmentHealthStatus {
        NoData => "NoData",
        Unknown => "Unknown",
        Pending => "Pending",
        Ok => "Ok",
        Info => "Info",
        Warning => "Warning",
        Degraded => "Degraded",
        Severe => "Severe",
        Suspended => "Suspended",
    }
}
