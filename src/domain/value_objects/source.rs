//! Source vocabularies - how application source is packaged and where it is
//! hosted.

string_enum! {
    /// Packaging of application source
    pub enum SourceType {
        /// A commit in a git repository
        Git => "Git",
        /// A zip archive
        Zip => "Zip",
    }
}

string_enum! {
    /// Hosting service for application source
    pub enum SourceRepository {
        /// Managed git repository
        CodeRepository => "CodeCommit",
        /// Object storage bucket
        ObjectStore => "S3",
    }
}
