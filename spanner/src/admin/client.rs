use googleapis::spanner::admin::database::v1::database_admin_client::DatabaseAdminClient as InternalDatabaseAdminClient;
use gax::conn::ConnectionManager;
use gax::endpoint;
use longrunning::autogen::operations_client::OperationsClient;

use crate::admin::database::database_admin_client::DatabaseAdminClient;
use crate::admin::{AdminClientConfig, SPANNER};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Connection(#[from] gax::conn::Error),

    #[error(transparent)]
    Endpoint(#[from] endpoint::Error),

    #[error("failed to build runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

#[derive(Clone, Debug)]
pub struct Client {
    database: DatabaseAdminClient,
}

impl Client {
    pub async fn new(config: AdminClientConfig) -> Result<Self, Error> {
        let resolved = endpoint::resolve(SPANNER, &config.endpoint)?;
        let pool = ConnectionManager::new(
            config.pool_size,
            &resolved,
            &config.environment,
            &config.connection_options,
        )
        .await?;
        tracing::debug!("admin client connected to {} with {} channels", resolved.host, pool.num());
        let lro_client = OperationsClient::new(pool.conn());
        let database = DatabaseAdminClient::new(InternalDatabaseAdminClient::new(pool.conn()), lro_client);
        Ok(Self { database })
    }

    pub fn database(&self) -> &DatabaseAdminClient {
        &self.database
    }
}
