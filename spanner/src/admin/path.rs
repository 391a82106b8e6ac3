//! Resource name templates of the database admin API.
//!
//! Every `*_path` function renders a resource name and the matching `parse_*_path`
//! function returns its named segments. A path that does not match the template
//! yields an empty map.

use std::collections::HashMap;

const BACKUP: &str = "projects/{project}/instances/{instance}/backups/{backup}";
const CRYPTO_KEY: &str = "projects/{project}/locations/{location}/keyRings/{key_ring}/cryptoKeys/{crypto_key}";
const CRYPTO_KEY_VERSION: &str =
    "projects/{project}/locations/{location}/keyRings/{key_ring}/cryptoKeys/{crypto_key}/cryptoKeyVersions/{crypto_key_version}";
const DATABASE: &str = "projects/{project}/instances/{instance}/databases/{database}";
const DATABASE_ROLE: &str = "projects/{project}/instances/{instance}/databases/{database}/databaseRoles/{role}";
const INSTANCE: &str = "projects/{project}/instances/{instance}";
const BILLING_ACCOUNT: &str = "billingAccounts/{billing_account}";
const FOLDER: &str = "folders/{folder}";
const ORGANIZATION: &str = "organizations/{organization}";
const PROJECT: &str = "projects/{project}";
const LOCATION: &str = "projects/{project}/locations/{location}";

fn parse(template: &str, path: &str) -> HashMap<String, String> {
    let expected: Vec<&str> = template.split('/').collect();
    let actual: Vec<&str> = path.split('/').collect();
    if expected.len() != actual.len() {
        return HashMap::new();
    }
    let mut segments = HashMap::with_capacity(expected.len() / 2);
    for (e, a) in expected.iter().zip(actual.iter()) {
        match e.strip_prefix('{').and_then(|e| e.strip_suffix('}')) {
            Some(_) if a.is_empty() => return HashMap::new(),
            Some(key) => {
                segments.insert(key.to_string(), a.to_string());
            }
            None if e != a => return HashMap::new(),
            None => {}
        }
    }
    segments
}

pub fn backup_path(project: &str, instance: &str, backup: &str) -> String {
    format!("projects/{project}/instances/{instance}/backups/{backup}")
}

pub fn parse_backup_path(path: &str) -> HashMap<String, String> {
    parse(BACKUP, path)
}

pub fn crypto_key_path(project: &str, location: &str, key_ring: &str, crypto_key: &str) -> String {
    format!("projects/{project}/locations/{location}/keyRings/{key_ring}/cryptoKeys/{crypto_key}")
}

pub fn parse_crypto_key_path(path: &str) -> HashMap<String, String> {
    parse(CRYPTO_KEY, path)
}

pub fn crypto_key_version_path(
    project: &str,
    location: &str,
    key_ring: &str,
    crypto_key: &str,
    crypto_key_version: &str,
) -> String {
    format!(
        "{}/cryptoKeyVersions/{crypto_key_version}",
        crypto_key_path(project, location, key_ring, crypto_key)
    )
}

pub fn parse_crypto_key_version_path(path: &str) -> HashMap<String, String> {
    parse(CRYPTO_KEY_VERSION, path)
}

pub fn database_path(project: &str, instance: &str, database: &str) -> String {
    format!("projects/{project}/instances/{instance}/databases/{database}")
}

pub fn parse_database_path(path: &str) -> HashMap<String, String> {
    parse(DATABASE, path)
}

pub fn database_role_path(project: &str, instance: &str, database: &str, role: &str) -> String {
    format!("{}/databaseRoles/{role}", database_path(project, instance, database))
}

pub fn parse_database_role_path(path: &str) -> HashMap<String, String> {
    parse(DATABASE_ROLE, path)
}

pub fn instance_path(project: &str, instance: &str) -> String {
    format!("projects/{project}/instances/{instance}")
}

pub fn parse_instance_path(path: &str) -> HashMap<String, String> {
    parse(INSTANCE, path)
}

pub fn common_billing_account_path(billing_account: &str) -> String {
    format!("billingAccounts/{billing_account}")
}

pub fn parse_common_billing_account_path(path: &str) -> HashMap<String, String> {
    parse(BILLING_ACCOUNT, path)
}

pub fn common_folder_path(folder: &str) -> String {
    format!("folders/{folder}")
}

pub fn parse_common_folder_path(path: &str) -> HashMap<String, String> {
    parse(FOLDER, path)
}

pub fn common_organization_path(organization: &str) -> String {
    format!("organizations/{organization}")
}

pub fn parse_common_organization_path(path: &str) -> HashMap<String, String> {
    parse(ORGANIZATION, path)
}

pub fn common_project_path(project: &str) -> String {
    format!("projects/{project}")
}

pub fn parse_common_project_path(path: &str) -> HashMap<String, String> {
    parse(PROJECT, path)
}

pub fn common_location_path(project: &str, location: &str) -> String {
    format!("projects/{project}/locations/{location}")
}

pub fn parse_common_location_path(path: &str) -> HashMap<String, String> {
    parse(LOCATION, path)
}
