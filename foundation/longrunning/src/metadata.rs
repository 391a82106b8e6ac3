use googleapis::spanner::admin::database::v1::{
    CopyBackupMetadata, CreateBackupMetadata, CreateDatabaseMetadata, OptimizeRestoredDatabaseMetadata,
    RestoreDatabaseMetadata, UpdateDatabaseDdlMetadata,
};

/// Metadata is a message reported by a running operation.
pub trait Metadata: prost::Message + Default {
    /// Fully qualified protobuf name the metadata is packed with.
    /// `None` means the metadata is ignored.
    fn type_name() -> Option<&'static str>;
}

impl Metadata for () {
    fn type_name() -> Option<&'static str> {
        None
    }
}

macro_rules! metadata {
    ($($message:ty => $name:literal),* $(,)?) => {
        $(
            impl Metadata for $message {
                fn type_name() -> Option<&'static str> {
                    Some($name)
                }
            }
        )*
    };
}

metadata!(
    CreateDatabaseMetadata => "google.spanner.admin.database.v1.CreateDatabaseMetadata",
    UpdateDatabaseDdlMetadata => "google.spanner.admin.database.v1.UpdateDatabaseDdlMetadata",
    CreateBackupMetadata => "google.spanner.admin.database.v1.CreateBackupMetadata",
    CopyBackupMetadata => "google.spanner.admin.database.v1.CopyBackupMetadata",
    RestoreDatabaseMetadata => "google.spanner.admin.database.v1.RestoreDatabaseMetadata",
    OptimizeRestoredDatabaseMetadata => "google.spanner.admin.database.v1.OptimizeRestoredDatabaseMetadata",
);
