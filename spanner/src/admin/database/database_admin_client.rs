use std::future::Future;
use std::sync::Arc;

use futures_util::FutureExt;

use gax::call_option::CallOptions;
use gax::conn::Channel;
use gax::create_request;
use gax::grpc::Status;
use gax::retry::invoke;
use googleapis::iam::v1::{
    GetIamPolicyRequest, Policy, SetIamPolicyRequest, TestIamPermissionsRequest, TestIamPermissionsResponse,
};
use googleapis::longrunning::{
    CancelOperationRequest, DeleteOperationRequest, GetOperationRequest, ListOperationsRequest,
    ListOperationsResponse, Operation as InternalOperation,
};
use googleapis::spanner::admin::database::v1::database_admin_client::DatabaseAdminClient as InternalDatabaseAdminClient;
use googleapis::spanner::admin::database::v1::restore_database_request::Source;
use googleapis::spanner::admin::database::v1::{
    Backup, CopyBackupMetadata, CopyBackupRequest, CreateBackupMetadata, CreateBackupRequest, CreateDatabaseMetadata,
    CreateDatabaseRequest, Database, DeleteBackupRequest, DropDatabaseRequest, GetBackupRequest,
    GetDatabaseDdlRequest, GetDatabaseDdlResponse, GetDatabaseRequest, ListBackupOperationsRequest,
    ListBackupOperationsResponse, ListBackupsRequest, ListBackupsResponse, ListDatabaseOperationsRequest,
    ListDatabaseOperationsResponse, ListDatabaseRolesRequest, ListDatabaseRolesResponse, ListDatabasesRequest,
    ListDatabasesResponse, RestoreDatabaseMetadata, RestoreDatabaseRequest, UpdateBackupRequest,
    UpdateDatabaseDdlMetadata, UpdateDatabaseDdlRequest,
};
use longrunning::autogen::operations_client::{Operations, OperationsClient};
use longrunning::longrunning::Operation;
use prost_types::{FieldMask, Timestamp};

use crate::admin::client::{Client, Error as ClientError};
use crate::admin::pager::{Fetch, PageRequest, PageResponse, Paginator};
use crate::admin::{default_retry_setting, AdminClientConfig, Error};

/// request returns the request to send: either the one given by the caller or a default one
/// to be filled with the individual field arguments. Giving both is a usage error.
fn request<R: Default>(req: Option<R>, has_fields: bool) -> Result<R, Error> {
    match req {
        Some(_) if has_fields => Err(Error::Usage(
            "if the request argument is set, then none of the individual field arguments should be set".to_string(),
        )),
        Some(req) => Ok(req),
        None => Ok(R::default()),
    }
}

#[derive(Clone, Debug)]
pub struct DatabaseAdminClient {
    inner: InternalDatabaseAdminClient<Channel>,
    lro_client: Arc<OperationsClient>,
}

impl DatabaseAdminClient {
    pub fn new(inner: InternalDatabaseAdminClient<Channel>, lro_client: OperationsClient) -> Self {
        Self {
            inner,
            lro_client: Arc::new(lro_client),
        }
    }

    pub async fn default() -> Result<Self, ClientError> {
        let client = Client::new(AdminClientConfig::default()).await?;
        Ok(client.database().clone())
    }

    /// The invoker used by the operations returned from this client.
    pub fn operations(&self) -> Arc<dyn Operations> {
        self.lro_client.clone()
    }

    fn fetcher<R, P, F, Fut>(&self, options: CallOptions, fetch: F) -> Fetch<R, P>
    where
        R: PageRequest,
        P: PageResponse,
        F: Fn(Self, R, CallOptions) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<P, Status>> + Send + 'static,
    {
        let client = self.clone();
        Arc::new(move |req| fetch(client.clone(), req, options.clone()).boxed())
    }

    /// list_databases lists Cloud Spanner databases.
    /// Pages after the first one are fetched while iterating over the returned paginator.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn list_databases(
        &self,
        req: Option<ListDatabasesRequest>,
        parent: Option<&str>,
        options: Option<CallOptions>,
    ) -> Result<Paginator<ListDatabasesRequest, ListDatabasesResponse>, Error> {
        let mut req = request(req, parent.is_some())?;
        if let Some(parent) = parent {
            req.parent = parent.to_string();
        }
        let options = options.unwrap_or_default();
        let first = self.list_databases_page(req.clone(), &options).await?;
        let fetch = self.fetcher(options, |client, req, options| async move {
            client.list_databases_page(req, &options).await
        });
        Ok(Paginator::new(req, first, fetch))
    }

    async fn list_databases_page(
        &self,
        req: ListDatabasesRequest,
        options: &CallOptions,
    ) -> Result<ListDatabasesResponse, Status> {
        let setting = options.retry_or(default_retry_setting);
        let action = || async {
            let request = create_request(&[("parent", req.parent.as_str())], req.clone(), options);
            self.inner.clone().list_databases(request).await
        };
        invoke(options.cancel.clone(), Some(setting), action)
            .await
            .map(|r| r.into_inner())
    }

    /// create_database creates a new Cloud Spanner database and starts to prepare it for serving.
    /// The returned long-running operation will
    /// have a name of the format <database_name>/operations/<operation_id> and
    /// can be used to track preparation of the database. The metadata field type is CreateDatabaseMetadata.
    /// The response field type is Database, if successful.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn create_database(
        &self,
        req: Option<CreateDatabaseRequest>,
        parent: Option<&str>,
        create_statement: Option<&str>,
        options: Option<CallOptions>,
    ) -> Result<Operation<Database, CreateDatabaseMetadata>, Error> {
        let mut req = request(req, parent.is_some() || create_statement.is_some())?;
        if let Some(parent) = parent {
            req.parent = parent.to_string();
        }
        if let Some(create_statement) = create_statement {
            req.create_statement = create_statement.to_string();
        }
        let options = options.unwrap_or_default();
        let setting = options.retry_or(default_retry_setting);
        let action = || async {
            let request = create_request(&[("parent", req.parent.as_str())], req.clone(), &options);
            self.inner.clone().create_database(request).await
        };
        let raw = invoke(options.cancel.clone(), Some(setting), action).await?.into_inner();
        Ok(Operation::new(raw, self.operations(), options)?)
    }

    /// get_database gets the state of a Cloud Spanner database.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn get_database(
        &self,
        req: Option<GetDatabaseRequest>,
        name: Option<&str>,
        options: Option<CallOptions>,
    ) -> Result<Database, Error> {
        let mut req = request(req, name.is_some())?;
        if let Some(name) = name {
            req.name = name.to_string();
        }
        let options = options.unwrap_or_default();
        let setting = options.retry_or(default_retry_setting);
        let action = || async {
            let request = create_request(&[("name", req.name.as_str())], req.clone(), &options);
            self.inner.clone().get_database(request).await
        };
        Ok(invoke(options.cancel.clone(), Some(setting), action).await?.into_inner())
    }

    /// update_database_ddl updates the schema of a Cloud Spanner database by
    /// creating/altering/dropping tables, columns, indexes, etc. The returned
    /// long-running operation will have a name of
    /// the format <database_name>/operations/<operation_id> and can be used to
    /// track execution of the schema change(s). The
    /// metadata field type is
    /// UpdateDatabaseDdlMetadata.
    /// The operation has no response.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn update_database_ddl(
        &self,
        req: Option<UpdateDatabaseDdlRequest>,
        database: Option<&str>,
        statements: Option<Vec<String>>,
        options: Option<CallOptions>,
    ) -> Result<Operation<(), UpdateDatabaseDdlMetadata>, Error> {
        let mut req = request(req, database.is_some() || statements.is_some())?;
        if let Some(database) = database {
            req.database = database.to_string();
        }
        if let Some(statements) = statements {
            req.statements = statements;
        }
        let options = options.unwrap_or_default();
        let setting = options.retry_or(default_retry_setting);
        let action = || async {
            let request = create_request(&[("database", req.database.as_str())], req.clone(), &options);
            self.inner.clone().update_database_ddl(request).await
        };
        let raw = invoke(options.cancel.clone(), Some(setting), action).await?.into_inner();
        Ok(Operation::new(raw, self.operations(), options)?)
    }

    /// drop_database drops (aka deletes) a Cloud Spanner database.
    /// Completed backups for the database will be retained according to their
    /// expire_time.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn drop_database(
        &self,
        req: Option<DropDatabaseRequest>,
        database: Option<&str>,
        options: Option<CallOptions>,
    ) -> Result<(), Error> {
        let mut req = request(req, database.is_some())?;
        if let Some(database) = database {
            req.database = database.to_string();
        }
        let options = options.unwrap_or_default();
        let setting = options.retry_or(default_retry_setting);
        let action = || async {
            let request = create_request(&[("database", req.database.as_str())], req.clone(), &options);
            self.inner.clone().drop_database(request).await
        };
        Ok(invoke(options.cancel.clone(), Some(setting), action).await?.into_inner())
    }

    /// get_database_ddl returns the schema of a Cloud Spanner database as a list of formatted
    /// DDL statements. This method does not show pending schema updates, those may
    /// be queried using the Operations API.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn get_database_ddl(
        &self,
        req: Option<GetDatabaseDdlRequest>,
        database: Option<&str>,
        options: Option<CallOptions>,
    ) -> Result<GetDatabaseDdlResponse, Error> {
        let mut req = request(req, database.is_some())?;
        if let Some(database) = database {
            req.database = database.to_string();
        }
        let options = options.unwrap_or_default();
        let setting = options.retry_or(default_retry_setting);
        let action = || async {
            let request = create_request(&[("database", req.database.as_str())], req.clone(), &options);
            self.inner.clone().get_database_ddl(request).await
        };
        Ok(invoke(options.cancel.clone(), Some(setting), action).await?.into_inner())
    }

    /// set_iam_policy sets the access control policy on a database or backup resource.
    /// Replaces any existing policy.
    ///
    /// Authorization requires spanner.databases.setIamPolicy
    /// permission on resource.
    /// For backups, authorization requires spanner.backups.setIamPolicy
    /// permission on resource.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn set_iam_policy(
        &self,
        req: Option<SetIamPolicyRequest>,
        resource: Option<&str>,
        options: Option<CallOptions>,
    ) -> Result<Policy, Error> {
        let mut req = request(req, resource.is_some())?;
        if let Some(resource) = resource {
            req.resource = resource.to_string();
        }
        let options = options.unwrap_or_default();
        let setting = options.retry_or(default_retry_setting);
        let action = || async {
            let request = create_request(&[("resource", req.resource.as_str())], req.clone(), &options);
            self.inner.clone().set_iam_policy(request).await
        };
        Ok(invoke(options.cancel.clone(), Some(setting), action).await?.into_inner())
    }

    /// get_iam_policy gets the access control policy for a database or backup resource.
    /// Returns an empty policy if a database or backup exists but does not have a
    /// policy set.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn get_iam_policy(
        &self,
        req: Option<GetIamPolicyRequest>,
        resource: Option<&str>,
        options: Option<CallOptions>,
    ) -> Result<Policy, Error> {
        let mut req = request(req, resource.is_some())?;
        if let Some(resource) = resource {
            req.resource = resource.to_string();
        }
        let options = options.unwrap_or_default();
        let setting = options.retry_or(default_retry_setting);
        let action = || async {
            let request = create_request(&[("resource", req.resource.as_str())], req.clone(), &options);
            self.inner.clone().get_iam_policy(request).await
        };
        Ok(invoke(options.cancel.clone(), Some(setting), action).await?.into_inner())
    }

    /// test_iam_permissions returns permissions that the caller has on the specified database or backup
    /// resource.
    ///
    /// Attempting this RPC on a non-existent Cloud Spanner database will
    /// result in a NOT_FOUND error if the user has
    /// spanner.databases.list permission on the containing Cloud
    /// Spanner instance. Otherwise returns an empty set of permissions.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn test_iam_permissions(
        &self,
        req: Option<TestIamPermissionsRequest>,
        resource: Option<&str>,
        permissions: Option<Vec<String>>,
        options: Option<CallOptions>,
    ) -> Result<TestIamPermissionsResponse, Error> {
        let mut req = request(req, resource.is_some() || permissions.is_some())?;
        if let Some(resource) = resource {
            req.resource = resource.to_string();
        }
        if let Some(permissions) = permissions {
            req.permissions = permissions;
        }
        let options = options.unwrap_or_default();
        let setting = options.retry_or(default_retry_setting);
        let action = || async {
            let request = create_request(&[("resource", req.resource.as_str())], req.clone(), &options);
            self.inner.clone().test_iam_permissions(request).await
        };
        Ok(invoke(options.cancel.clone(), Some(setting), action).await?.into_inner())
    }

    /// create_backup starts creating a new Cloud Spanner Backup.
    /// The returned backup long-running operation
    /// will have a name of the format
    /// projects/<project>/instances/<instance>/backups/<backup>/operations/<operation_id>
    /// and can be used to track creation of the backup. The
    /// metadata field type is
    /// CreateBackupMetadata. The
    /// response field type is
    /// Backup, if successful. Cancelling the returned operation will stop the
    /// creation and delete the backup.
    /// There can be only one pending backup creation per database. Backup creation
    /// of different databases can run concurrently.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn create_backup(
        &self,
        req: Option<CreateBackupRequest>,
        parent: Option<&str>,
        backup: Option<Backup>,
        backup_id: Option<&str>,
        options: Option<CallOptions>,
    ) -> Result<Operation<Backup, CreateBackupMetadata>, Error> {
        let mut req = request(req, parent.is_some() || backup.is_some() || backup_id.is_some())?;
        if let Some(parent) = parent {
            req.parent = parent.to_string();
        }
        if let Some(backup) = backup {
            req.backup = Some(backup);
        }
        if let Some(backup_id) = backup_id {
            req.backup_id = backup_id.to_string();
        }
        let options = options.unwrap_or_default();
        let setting = options.retry_or(default_retry_setting);
        let action = || async {
            let request = create_request(&[("parent", req.parent.as_str())], req.clone(), &options);
            self.inner.clone().create_backup(request).await
        };
        let raw = invoke(options.cancel.clone(), Some(setting), action).await?.into_inner();
        Ok(Operation::new(raw, self.operations(), options)?)
    }

    /// copy_backup starts copying a Cloud Spanner Backup.
    /// The returned backup long-running operation
    /// will have a name of the format
    /// projects/<project>/instances/<instance>/backups/<backup>/operations/<operation_id>
    /// and can be used to track copying of the backup. The operation is associated
    /// with the destination backup.
    /// The metadata field type is CopyBackupMetadata.
    /// The response field type is Backup, if successful. Cancelling the returned operation will stop the
    /// copying and delete the backup.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn copy_backup(
        &self,
        req: Option<CopyBackupRequest>,
        parent: Option<&str>,
        backup_id: Option<&str>,
        source_backup: Option<&str>,
        expire_time: Option<Timestamp>,
        options: Option<CallOptions>,
    ) -> Result<Operation<Backup, CopyBackupMetadata>, Error> {
        let has_fields = parent.is_some() || backup_id.is_some() || source_backup.is_some() || expire_time.is_some();
        let mut req = request(req, has_fields)?;
        if let Some(parent) = parent {
            req.parent = parent.to_string();
        }
        if let Some(backup_id) = backup_id {
            req.backup_id = backup_id.to_string();
        }
        if let Some(source_backup) = source_backup {
            req.source_backup = source_backup.to_string();
        }
        if let Some(expire_time) = expire_time {
            req.expire_time = Some(expire_time);
        }
        let options = options.unwrap_or_default();
        let setting = options.retry_or(default_retry_setting);
        let action = || async {
            let request = create_request(&[("parent", req.parent.as_str())], req.clone(), &options);
            self.inner.clone().copy_backup(request).await
        };
        let raw = invoke(options.cancel.clone(), Some(setting), action).await?.into_inner();
        Ok(Operation::new(raw, self.operations(), options)?)
    }

    /// get_backup gets metadata on a pending or completed Backup.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn get_backup(
        &self,
        req: Option<GetBackupRequest>,
        name: Option<&str>,
        options: Option<CallOptions>,
    ) -> Result<Backup, Error> {
        let mut req = request(req, name.is_some())?;
        if let Some(name) = name {
            req.name = name.to_string();
        }
        let options = options.unwrap_or_default();
        let setting = options.retry_or(default_retry_setting);
        let action = || async {
            let request = create_request(&[("name", req.name.as_str())], req.clone(), &options);
            self.inner.clone().get_backup(request).await
        };
        Ok(invoke(options.cancel.clone(), Some(setting), action).await?.into_inner())
    }

    /// update_backup updates a pending or completed Backup.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn update_backup(
        &self,
        req: Option<UpdateBackupRequest>,
        backup: Option<Backup>,
        update_mask: Option<FieldMask>,
        options: Option<CallOptions>,
    ) -> Result<Backup, Error> {
        let mut req = request(req, backup.is_some() || update_mask.is_some())?;
        if let Some(backup) = backup {
            req.backup = Some(backup);
        }
        if let Some(update_mask) = update_mask {
            req.update_mask = Some(update_mask);
        }
        let options = options.unwrap_or_default();
        let setting = options.retry_or(default_retry_setting);
        let backup_name = req.backup.as_ref().map(|b| b.name.as_str()).unwrap_or_default();
        let action = || async {
            let request = create_request(&[("backup.name", backup_name)], req.clone(), &options);
            self.inner.clone().update_backup(request).await
        };
        Ok(invoke(options.cancel.clone(), Some(setting), action).await?.into_inner())
    }

    /// delete_backup deletes a pending or completed Backup.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn delete_backup(
        &self,
        req: Option<DeleteBackupRequest>,
        name: Option<&str>,
        options: Option<CallOptions>,
    ) -> Result<(), Error> {
        let mut req = request(req, name.is_some())?;
        if let Some(name) = name {
            req.name = name.to_string();
        }
        let options = options.unwrap_or_default();
        let setting = options.retry_or(default_retry_setting);
        let action = || async {
            let request = create_request(&[("name", req.name.as_str())], req.clone(), &options);
            self.inner.clone().delete_backup(request).await
        };
        Ok(invoke(options.cancel.clone(), Some(setting), action).await?.into_inner())
    }

    /// list_backups lists completed and pending backups.
    /// Backups returned are ordered by create_time in descending order,
    /// starting from the most recent create_time.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn list_backups(
        &self,
        req: Option<ListBackupsRequest>,
        parent: Option<&str>,
        options: Option<CallOptions>,
    ) -> Result<Paginator<ListBackupsRequest, ListBackupsResponse>, Error> {
        let mut req = request(req, parent.is_some())?;
        if let Some(parent) = parent {
            req.parent = parent.to_string();
        }
        let options = options.unwrap_or_default();
        let first = self.list_backups_page(req.clone(), &options).await?;
        let fetch = self.fetcher(options, |client, req, options| async move {
            client.list_backups_page(req, &options).await
        });
        Ok(Paginator::new(req, first, fetch))
    }

    async fn list_backups_page(
        &self,
        req: ListBackupsRequest,
        options: &CallOptions,
    ) -> Result<ListBackupsResponse, Status> {
        let setting = options.retry_or(default_retry_setting);
        let action = || async {
            let request = create_request(&[("parent", req.parent.as_str())], req.clone(), options);
            self.inner.clone().list_backups(request).await
        };
        invoke(options.cancel.clone(), Some(setting), action)
            .await
            .map(|r| r.into_inner())
    }

    /// restore_database create a new database by restoring from a completed backup. The new
    /// database must be in the same project and in an instance with the same
    /// instance configuration as the instance containing
    /// the backup. The returned database long-running
    /// operation has a name of the format
    /// projects/<project>/instances/<instance>/databases/<database>/operations/<operation_id>,
    /// and can be used to track the progress of the operation, and to cancel it.
    /// The metadata field type is
    /// RestoreDatabaseMetadata.
    /// The response type
    /// is Database, if
    /// successful. Cancelling the returned operation will stop the restore and
    /// delete the database.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn restore_database(
        &self,
        req: Option<RestoreDatabaseRequest>,
        parent: Option<&str>,
        database_id: Option<&str>,
        backup: Option<&str>,
        options: Option<CallOptions>,
    ) -> Result<Operation<Database, RestoreDatabaseMetadata>, Error> {
        let mut req = request(req, parent.is_some() || database_id.is_some() || backup.is_some())?;
        if let Some(parent) = parent {
            req.parent = parent.to_string();
        }
        if let Some(database_id) = database_id {
            req.database_id = database_id.to_string();
        }
        if let Some(backup) = backup {
            req.source = Some(Source::Backup(backup.to_string()));
        }
        let options = options.unwrap_or_default();
        let setting = options.retry_or(default_retry_setting);
        let action = || async {
            let request = create_request(&[("parent", req.parent.as_str())], req.clone(), &options);
            self.inner.clone().restore_database(request).await
        };
        let raw = invoke(options.cancel.clone(), Some(setting), action).await?.into_inner();
        Ok(Operation::new(raw, self.operations(), options)?)
    }

    /// list_database_operations lists database longrunning-operations.
    /// A database operation has a name of the form
    /// projects/<project>/instances/<instance>/databases/<database>/operations/<operation>.
    /// The long-running operation
    /// metadata field type
    /// metadata.type_url describes the type of the metadata. Operations returned
    /// include those that have completed/failed/canceled within the last 7 days,
    /// and pending operations.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn list_database_operations(
        &self,
        req: Option<ListDatabaseOperationsRequest>,
        parent: Option<&str>,
        options: Option<CallOptions>,
    ) -> Result<Paginator<ListDatabaseOperationsRequest, ListDatabaseOperationsResponse>, Error> {
        let mut req = request(req, parent.is_some())?;
        if let Some(parent) = parent {
            req.parent = parent.to_string();
        }
        let options = options.unwrap_or_default();
        let first = self.list_database_operations_page(req.clone(), &options).await?;
        let fetch = self.fetcher(options, |client, req, options| async move {
            client.list_database_operations_page(req, &options).await
        });
        Ok(Paginator::new(req, first, fetch))
    }

    async fn list_database_operations_page(
        &self,
        req: ListDatabaseOperationsRequest,
        options: &CallOptions,
    ) -> Result<ListDatabaseOperationsResponse, Status> {
        let setting = options.retry_or(default_retry_setting);
        let action = || async {
            let request = create_request(&[("parent", req.parent.as_str())], req.clone(), options);
            self.inner.clone().list_database_operations(request).await
        };
        invoke(options.cancel.clone(), Some(setting), action)
            .await
            .map(|r| r.into_inner())
    }

    /// list_backup_operations lists the backup long-running operations in
    /// the given instance. A backup operation has a name of the form
    /// projects/<project>/instances/<instance>/backups/<backup>/operations/<operation>.
    /// Operations returned are ordered by
    /// operation.metadata.value.progress.start_time in descending order starting
    /// from the most recently started operation.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn list_backup_operations(
        &self,
        req: Option<ListBackupOperationsRequest>,
        parent: Option<&str>,
        options: Option<CallOptions>,
    ) -> Result<Paginator<ListBackupOperationsRequest, ListBackupOperationsResponse>, Error> {
        let mut req = request(req, parent.is_some())?;
        if let Some(parent) = parent {
            req.parent = parent.to_string();
        }
        let options = options.unwrap_or_default();
        let first = self.list_backup_operations_page(req.clone(), &options).await?;
        let fetch = self.fetcher(options, |client, req, options| async move {
            client.list_backup_operations_page(req, &options).await
        });
        Ok(Paginator::new(req, first, fetch))
    }

    async fn list_backup_operations_page(
        &self,
        req: ListBackupOperationsRequest,
        options: &CallOptions,
    ) -> Result<ListBackupOperationsResponse, Status> {
        let setting = options.retry_or(default_retry_setting);
        let action = || async {
            let request = create_request(&[("parent", req.parent.as_str())], req.clone(), options);
            self.inner.clone().list_backup_operations(request).await
        };
        invoke(options.cancel.clone(), Some(setting), action)
            .await
            .map(|r| r.into_inner())
    }

    /// list_database_roles lists Cloud Spanner database roles.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn list_database_roles(
        &self,
        req: Option<ListDatabaseRolesRequest>,
        parent: Option<&str>,
        options: Option<CallOptions>,
    ) -> Result<Paginator<ListDatabaseRolesRequest, ListDatabaseRolesResponse>, Error> {
        let mut req = request(req, parent.is_some())?;
        if let Some(parent) = parent {
            req.parent = parent.to_string();
        }
        let options = options.unwrap_or_default();
        let first = self.list_database_roles_page(req.clone(), &options).await?;
        let fetch = self.fetcher(options, |client, req, options| async move {
            client.list_database_roles_page(req, &options).await
        });
        Ok(Paginator::new(req, first, fetch))
    }

    async fn list_database_roles_page(
        &self,
        req: ListDatabaseRolesRequest,
        options: &CallOptions,
    ) -> Result<ListDatabaseRolesResponse, Status> {
        let setting = options.retry_or(default_retry_setting);
        let action = || async {
            let request = create_request(&[("parent", req.parent.as_str())], req.clone(), options);
            self.inner.clone().list_database_roles(request).await
        };
        invoke(options.cancel.clone(), Some(setting), action)
            .await
            .map(|r| r.into_inner())
    }

    /// list_operations lists operations that match the specified filter in the request.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn list_operations(
        &self,
        req: ListOperationsRequest,
        options: Option<CallOptions>,
    ) -> Result<Paginator<ListOperationsRequest, ListOperationsResponse>, Error> {
        let options = options.unwrap_or_default();
        let first = self.lro_client.list_operations(req.clone(), &options).await?;
        let fetch = self.fetcher(options, |client, req, options| async move {
            client.lro_client.list_operations(req, &options).await
        });
        Ok(Paginator::new(req, first, fetch))
    }

    /// get_operation gets the latest state of a long-running operation.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn get_operation(
        &self,
        req: GetOperationRequest,
        options: Option<CallOptions>,
    ) -> Result<InternalOperation, Error> {
        let options = options.unwrap_or_default();
        Ok(self.lro_client.get_operation(req, &options).await?)
    }

    /// delete_operation deletes a long-running operation. It indicates that the client is
    /// no longer interested in the operation result. It does not cancel the operation.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn delete_operation(&self, req: DeleteOperationRequest, options: Option<CallOptions>) -> Result<(), Error> {
        let options = options.unwrap_or_default();
        Ok(self.lro_client.delete_operation(req, &options).await?)
    }

    /// cancel_operation starts asynchronous cancellation on a long-running operation.
    /// The server makes a best effort to cancel the operation, but success is not guaranteed.
    #[cfg_attr(feature = "trace", tracing::instrument(skip_all))]
    pub async fn cancel_operation(&self, req: CancelOperationRequest, options: Option<CallOptions>) -> Result<(), Error> {
        let options = options.unwrap_or_default();
        Ok(self.lro_client.cancel_operation(req, &options).await?)
    }
}
