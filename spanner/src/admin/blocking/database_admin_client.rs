use std::sync::Arc;

use prost_types::{FieldMask, Timestamp};
use tokio::runtime::{Builder, Runtime};

use gax::call_option::CallOptions;
use googleapis::iam::v1::{
    GetIamPolicyRequest, Policy, SetIamPolicyRequest, TestIamPermissionsRequest, TestIamPermissionsResponse,
};
use googleapis::longrunning::{
    CancelOperationRequest, DeleteOperationRequest, GetOperationRequest, ListOperationsRequest,
    ListOperationsResponse, Operation as InternalOperation,
};
use googleapis::spanner::admin::database::v1::{
    Backup, CopyBackupMetadata, CopyBackupRequest, CreateBackupMetadata, CreateBackupRequest, CreateDatabaseMetadata,
    CreateDatabaseRequest, Database, DeleteBackupRequest, DropDatabaseRequest, GetBackupRequest,
    GetDatabaseDdlRequest, GetDatabaseDdlResponse, GetDatabaseRequest, ListBackupOperationsRequest,
    ListBackupOperationsResponse, ListBackupsRequest, ListBackupsResponse, ListDatabaseOperationsRequest,
    ListDatabaseOperationsResponse, ListDatabaseRolesRequest, ListDatabaseRolesResponse, ListDatabasesRequest,
    ListDatabasesResponse, RestoreDatabaseMetadata, RestoreDatabaseRequest, UpdateBackupRequest,
    UpdateDatabaseDdlMetadata, UpdateDatabaseDdlRequest,
};
use longrunning::blocking::{BlockOn, Operation, Operations};
use longrunning::longrunning::Operation as AsyncOperation;
use longrunning::Metadata;

use crate::admin::blocking::pager::Paginator;
use crate::admin::client::{Client, Error as ClientError};
use crate::admin::database::database_admin_client::DatabaseAdminClient as AsyncDatabaseAdminClient;
use crate::admin::pager::{PageRequest, PageResponse, Paginator as AsyncPaginator};
use crate::admin::{AdminClientConfig, Error};

/// DatabaseAdminClient is the blocking counterpart of
/// [`crate::admin::database::database_admin_client::DatabaseAdminClient`].
/// Every method has the same arguments and suspends the calling thread until the RPC completes.
#[derive(Clone)]
pub struct DatabaseAdminClient {
    inner: AsyncDatabaseAdminClient,
    operations: Arc<dyn Operations>,
    runtime: Arc<Runtime>,
}

impl DatabaseAdminClient {
    pub fn new(config: AdminClientConfig) -> Result<Self, ClientError> {
        let runtime = Arc::new(
            Builder::new_multi_thread()
                .thread_name("spanner-admin")
                .enable_all()
                .build()?,
        );
        let client = runtime.block_on(Client::new(config))?;
        Ok(Self::from_async(client.database().clone(), runtime))
    }

    /// Wraps an async client. Its channels must belong to the given runtime.
    pub fn from_async(inner: AsyncDatabaseAdminClient, runtime: Arc<Runtime>) -> Self {
        let operations = Arc::new(BlockOn::new(inner.operations(), runtime.clone()));
        Self {
            inner,
            operations,
            runtime,
        }
    }

    fn operation<T, M>(&self, op: AsyncOperation<T, M>, options: CallOptions) -> Result<Operation<T, M>, Error>
    where
        T: prost::Message + Default,
        M: Metadata,
    {
        Ok(Operation::new(op.raw().clone(), self.operations.clone(), options)?)
    }

    fn paginator<R, P>(&self, paginator: AsyncPaginator<R, P>) -> Paginator<R, P>
    where
        R: PageRequest,
        P: PageResponse,
    {
        Paginator::block_on(paginator, self.runtime.clone())
    }

    pub fn list_databases(
        &self,
        req: Option<ListDatabasesRequest>,
        parent: Option<&str>,
        options: Option<CallOptions>,
    ) -> Result<Paginator<ListDatabasesRequest, ListDatabasesResponse>, Error> {
        let paginator = self.runtime.block_on(self.inner.list_databases(req, parent, options))?;
        Ok(self.paginator(paginator))
    }

    pub fn create_database(
        &self,
        req: Option<CreateDatabaseRequest>,
        parent: Option<&str>,
        create_statement: Option<&str>,
        options: Option<CallOptions>,
    ) -> Result<Operation<Database, CreateDatabaseMetadata>, Error> {
        let options = options.unwrap_or_default();
        let op = self.runtime.block_on(
            self.inner
                .create_database(req, parent, create_statement, Some(options.clone())),
        )?;
        self.operation(op, options)
    }

    pub fn get_database(
        &self,
        req: Option<GetDatabaseRequest>,
        name: Option<&str>,
        options: Option<CallOptions>,
    ) -> Result<Database, Error> {
        self.runtime.block_on(self.inner.get_database(req, name, options))
    }

    pub fn update_database_ddl(
        &self,
        req: Option<UpdateDatabaseDdlRequest>,
        database: Option<&str>,
        statements: Option<Vec<String>>,
        options: Option<CallOptions>,
    ) -> Result<Operation<(), UpdateDatabaseDdlMetadata>, Error> {
        let options = options.unwrap_or_default();
        let op = self.runtime.block_on(
            self.inner
                .update_database_ddl(req, database, statements, Some(options.clone())),
        )?;
        self.operation(op, options)
    }

    pub fn drop_database(
        &self,
        req: Option<DropDatabaseRequest>,
        database: Option<&str>,
        options: Option<CallOptions>,
    ) -> Result<(), Error> {
        self.runtime.block_on(self.inner.drop_database(req, database, options))
    }

    pub fn get_database_ddl(
        &self,
        req: Option<GetDatabaseDdlRequest>,
        database: Option<&str>,
        options: Option<CallOptions>,
    ) -> Result<GetDatabaseDdlResponse, Error> {
        self.runtime.block_on(self.inner.get_database_ddl(req, database, options))
    }

    pub fn set_iam_policy(
        &self,
        req: Option<SetIamPolicyRequest>,
        resource: Option<&str>,
        options: Option<CallOptions>,
    ) -> Result<Policy, Error> {
        self.runtime.block_on(self.inner.set_iam_policy(req, resource, options))
    }

    pub fn get_iam_policy(
        &self,
        req: Option<GetIamPolicyRequest>,
        resource: Option<&str>,
        options: Option<CallOptions>,
    ) -> Result<Policy, Error> {
        self.runtime.block_on(self.inner.get_iam_policy(req, resource, options))
    }

    pub fn test_iam_permissions(
        &self,
        req: Option<TestIamPermissionsRequest>,
        resource: Option<&str>,
        permissions: Option<Vec<String>>,
        options: Option<CallOptions>,
    ) -> Result<TestIamPermissionsResponse, Error> {
        self.runtime
            .block_on(self.inner.test_iam_permissions(req, resource, permissions, options))
    }

    pub fn create_backup(
        &self,
        req: Option<CreateBackupRequest>,
        parent: Option<&str>,
        backup: Option<Backup>,
        backup_id: Option<&str>,
        options: Option<CallOptions>,
    ) -> Result<Operation<Backup, CreateBackupMetadata>, Error> {
        let options = options.unwrap_or_default();
        let op = self.runtime.block_on(
            self.inner
                .create_backup(req, parent, backup, backup_id, Some(options.clone())),
        )?;
        self.operation(op, options)
    }

    pub fn copy_backup(
        &self,
        req: Option<CopyBackupRequest>,
        parent: Option<&str>,
        backup_id: Option<&str>,
        source_backup: Option<&str>,
        expire_time: Option<Timestamp>,
        options: Option<CallOptions>,
    ) -> Result<Operation<Backup, CopyBackupMetadata>, Error> {
        let options = options.unwrap_or_default();
        let op = self.runtime.block_on(self.inner.copy_backup(
            req,
            parent,
            backup_id,
            source_backup,
            expire_time,
            Some(options.clone()),
        ))?;
        self.operation(op, options)
    }

    pub fn get_backup(
        &self,
        req: Option<GetBackupRequest>,
        name: Option<&str>,
        options: Option<CallOptions>,
    ) -> Result<Backup, Error> {
        self.runtime.block_on(self.inner.get_backup(req, name, options))
    }

    pub fn update_backup(
        &self,
        req: Option<UpdateBackupRequest>,
        backup: Option<Backup>,
        update_mask: Option<FieldMask>,
        options: Option<CallOptions>,
    ) -> Result<Backup, Error> {
        self.runtime
            .block_on(self.inner.update_backup(req, backup, update_mask, options))
    }

    pub fn delete_backup(
        &self,
        req: Option<DeleteBackupRequest>,
        name: Option<&str>,
        options: Option<CallOptions>,
    ) -> Result<(), Error> {
        self.runtime.block_on(self.inner.delete_backup(req, name, options))
    }

    pub fn list_backups(
        &self,
        req: Option<ListBackupsRequest>,
        parent: Option<&str>,
        options: Option<CallOptions>,
    ) -> Result<Paginator<ListBackupsRequest, ListBackupsResponse>, Error> {
        let paginator = self.runtime.block_on(self.inner.list_backups(req, parent, options))?;
        Ok(self.paginator(paginator))
    }

    pub fn restore_database(
        &self,
        req: Option<RestoreDatabaseRequest>,
        parent: Option<&str>,
        database_id: Option<&str>,
        backup: Option<&str>,
        options: Option<CallOptions>,
    ) -> Result<Operation<Database, RestoreDatabaseMetadata>, Error> {
        let options = options.unwrap_or_default();
        let op = self.runtime.block_on(
            self.inner
                .restore_database(req, parent, database_id, backup, Some(options.clone())),
        )?;
        self.operation(op, options)
    }

    pub fn list_database_operations(
        &self,
        req: Option<ListDatabaseOperationsRequest>,
        parent: Option<&str>,
        options: Option<CallOptions>,
    ) -> Result<Paginator<ListDatabaseOperationsRequest, ListDatabaseOperationsResponse>, Error> {
        let paginator = self
            .runtime
            .block_on(self.inner.list_database_operations(req, parent, options))?;
        Ok(self.paginator(paginator))
    }

    pub fn list_backup_operations(
        &self,
        req: Option<ListBackupOperationsRequest>,
        parent: Option<&str>,
        options: Option<CallOptions>,
    ) -> Result<Paginator<ListBackupOperationsRequest, ListBackupOperationsResponse>, Error> {
        let paginator = self
            .runtime
            .block_on(self.inner.list_backup_operations(req, parent, options))?;
        Ok(self.paginator(paginator))
    }

    pub fn list_database_roles(
        &self,
        req: Option<ListDatabaseRolesRequest>,
        parent: Option<&str>,
        options: Option<CallOptions>,
    ) -> Result<Paginator<ListDatabaseRolesRequest, ListDatabaseRolesResponse>, Error> {
        let paginator = self
            .runtime
            .block_on(self.inner.list_database_roles(req, parent, options))?;
        Ok(self.paginator(paginator))
    }

    pub fn list_operations(
        &self,
        req: ListOperationsRequest,
        options: Option<CallOptions>,
    ) -> Result<Paginator<ListOperationsRequest, ListOperationsResponse>, Error> {
        let paginator = self.runtime.block_on(self.inner.list_operations(req, options))?;
        Ok(self.paginator(paginator))
    }

    pub fn get_operation(
        &self,
        req: GetOperationRequest,
        options: Option<CallOptions>,
    ) -> Result<InternalOperation, Error> {
        self.runtime.block_on(self.inner.get_operation(req, options))
    }

    pub fn delete_operation(&self, req: DeleteOperationRequest, options: Option<CallOptions>) -> Result<(), Error> {
        self.runtime.block_on(self.inner.delete_operation(req, options))
    }

    pub fn cancel_operation(&self, req: CancelOperationRequest, options: Option<CallOptions>) -> Result<(), Error> {
        self.runtime.block_on(self.inner.cancel_operation(req, options))
    }
}
