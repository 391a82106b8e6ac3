pub mod database_admin_client;

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use gax::call_option::{CallOptions, CancellationToken};
    use gax::conn::{ConnectionOptions, Environment};
    use gax::grpc::Code;
    use gax::retry::RetrySetting;
    use googleapis::spanner::admin::database::v1::{
        Backup, CopyBackupRequest, CreateBackupRequest, CreateDatabaseRequest, GetDatabaseRequest,
        ListDatabasesRequest, RestoreDatabaseRequest, UpdateBackupRequest, UpdateDatabaseDdlRequest,
    };

    use crate::admin::client::Client;
    use crate::admin::database::database_admin_client::DatabaseAdminClient;
    use crate::admin::path::{database_path, instance_path};
    use crate::admin::{AdminClientConfig, Error};

    // nothing listens on this host, any RPC that is actually sent fails
    async fn client() -> DatabaseAdminClient {
        let config = AdminClientConfig {
            environment: Environment::Emulator("localhost:1".to_string()),
            connection_options: ConnectionOptions {
                lazy: true,
                ..Default::default()
            },
            ..Default::default()
        };
        Client::new(config).await.unwrap().database().clone()
    }

    fn no_retry() -> Option<CallOptions> {
        Some(CallOptions::default().with_retry(RetrySetting {
            take: 0,
            ..Default::default()
        }))
    }

    fn assert_usage<T>(result: Result<T, Error>) {
        match result {
            Err(Error::Usage(_)) => {}
            Err(e) => panic!("expected usage error but got {e:?}"),
            Ok(_) => panic!("expected usage error"),
        }
    }

    #[tokio::test]
    #[serial]
    async fn test_request_and_fields_are_exclusive() {
        let client = client().await;
        let parent = instance_path("p", "i");
        let database = database_path("p", "i", "d");

        assert_usage(
            client
                .list_databases(Some(ListDatabasesRequest::default()), Some(&parent), None)
                .await,
        );
        assert_usage(
            client
                .create_database(Some(CreateDatabaseRequest::default()), None, Some("CREATE DATABASE d"), None)
                .await,
        );
        assert_usage(
            client
                .get_database(Some(GetDatabaseRequest::default()), Some(&database), None)
                .await,
        );
        assert_usage(
            client
                .update_database_ddl(Some(UpdateDatabaseDdlRequest::default()), None, Some(vec![]), None)
                .await,
        );
        assert_usage(
            client
                .create_backup(Some(CreateBackupRequest::default()), None, Some(Backup::default()), None, None)
                .await,
        );
        assert_usage(
            client
                .copy_backup(Some(CopyBackupRequest::default()), None, None, None, Some(Default::default()), None)
                .await,
        );
        assert_usage(
            client
                .update_backup(Some(UpdateBackupRequest::default()), None, Some(Default::default()), None)
                .await,
        );
        assert_usage(
            client
                .restore_database(Some(RestoreDatabaseRequest::default()), None, None, Some("b"), None)
                .await,
        );
        assert_usage(client.drop_database(Some(Default::default()), Some(&database), None).await);
        assert_usage(client.get_database_ddl(Some(Default::default()), Some(&database), None).await);
        assert_usage(client.set_iam_policy(Some(Default::default()), Some(&database), None).await);
        assert_usage(client.get_iam_policy(Some(Default::default()), Some(&database), None).await);
        assert_usage(
            client
                .test_iam_permissions(Some(Default::default()), None, Some(vec![]), None)
                .await,
        );
        assert_usage(client.get_backup(Some(Default::default()), Some("b"), None).await);
        assert_usage(client.delete_backup(Some(Default::default()), Some("b"), None).await);
        assert_usage(client.list_backups(Some(Default::default()), Some(&parent), None).await);
        assert_usage(
            client
                .list_database_operations(Some(Default::default()), Some(&parent), None)
                .await,
        );
        assert_usage(
            client
                .list_backup_operations(Some(Default::default()), Some(&parent), None)
                .await,
        );
        assert_usage(
            client
                .list_database_roles(Some(Default::default()), Some(&database), None)
                .await,
        );
    }

    #[tokio::test]
    #[serial]
    async fn test_transport_error_is_returned() {
        let client = client().await;
        let err = client
            .get_database(None, Some(&database_path("p", "i", "d")), no_retry())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::GRPC(_)), "unexpected error {err:?}");
    }

    #[tokio::test]
    #[serial]
    async fn test_cancelled_call() {
        let client = client().await;
        let cancel = CancellationToken::new();
        cancel.cancel();
        let options = CallOptions::default().with_cancel(cancel);
        let err = client
            .list_databases(None, Some(&instance_path("p", "i")), Some(options))
            .await
            .err()
            .unwrap();
        match err {
            Error::GRPC(status) => assert_eq!(status.code(), Code::Cancelled),
            e => panic!("unexpected error {e:?}"),
        }
    }

    #[tokio::test]
    #[serial]
    #[ignore = "requires the spanner emulator"]
    async fn test_database_lifecycle() {
        std::env::set_var("SPANNER_EMULATOR_HOST", "localhost:9010");
        let client = DatabaseAdminClient::default().await.unwrap();
        let parent = instance_path("local-project", "test-instance");
        let database_id = format!(
            "test{}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_millis()
        );
        let mut op = client
            .create_database(
                None,
                Some(&parent),
                Some(&format!("CREATE DATABASE {database_id}")),
                None,
            )
            .await
            .unwrap();
        let database = op.wait(Some(std::time::Duration::from_secs(60))).await.unwrap();
        assert_eq!(database.name, format!("{parent}/databases/{database_id}"));

        let mut op = client
            .update_database_ddl(
                None,
                Some(&database.name),
                Some(vec!["CREATE TABLE Tbl (ID STRING(MAX)) PRIMARY KEY(ID)".to_string()]),
                None,
            )
            .await
            .unwrap();
        op.wait(None).await.unwrap();

        let ddl = client.get_database_ddl(None, Some(&database.name), None).await.unwrap();
        assert_eq!(ddl.statements.len(), 1);

        let mut databases = client.list_databases(None, Some(&parent), None).await.unwrap();
        let mut found = false;
        while let Some(db) = databases.next().await.unwrap() {
            found |= db.name == database.name;
        }
        assert!(found);

        client.drop_database(None, Some(&database.name), None).await.unwrap();
    }
}
