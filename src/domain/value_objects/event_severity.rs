//! Event severity value object

string_enum! {
    /// Severity of an event reported by the service, least to most severe
    pub enum EventSeverity {
        Trace => "TRACE",
        Debug => "DEBUG",
        Info => "INFO",
        Warn => "WARN",
        Error => "ERROR",
        Fatal => "FATAL",
    }
}
