//! Client for the Cloud Spanner database administration API.
//!
//! [`admin::database::database_admin_client::DatabaseAdminClient`] exposes every RPC of the
//! `google.spanner.admin.database.v1.DatabaseAdmin` service. Long-running methods return a
//! [`longrunning::longrunning::Operation`] handle and list methods return an
//! [`admin::pager::Paginator`] that fetches the following pages on demand.
//! Blocking variants of all three live under [`admin::blocking`].
pub mod admin;
