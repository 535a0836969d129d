//! Compute type value object - size of the build container used to turn
//! source code into an application version.

string_enum! {
    /// Build container size
    pub enum ComputeType {
        /// 3 GB memory, 2 vCPU
        BuildGeneral1Small => "BUILD_GENERAL1_SMALL",
        /// 7 GB memory, 4 vCPU
        BuildGeneral1Medium => "BUILD_GENERAL1_MEDIUM",
        /// 15 GB memory, 8 vCPU
        BuildGeneral1Large => "BUILD_GENERAL1_LARGE",
    }
}
