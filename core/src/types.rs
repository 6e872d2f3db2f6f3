//! Wire DTOs for the resources this crate exposes.
//!
//! # Design
//! Field names follow the admin API's camelCase. Optionality is decided per
//! field: server-assigned or defaulted values are `Option` and omitted when
//! unset, while required fields are always sent. Plugin configuration is
//! plugin-defined, so it stays a `serde_json::Value`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// List envelope used by every collection endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemsView<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

pub type AgentsView = ItemsView<AgentView>;
pub type SitesView = ItemsView<SiteView>;
pub type CertificatesView = ItemsView<CertificateView>;
pub type RulesView = ItemsView<RuleView>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HashView {
    pub algorithm: String,
    pub hex_value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub hostname: String,
    pub port: i32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failover_hosts: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_retry_timeout: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_retries: Option<i32>,
    #[serde(default)]
    pub shared_secret_ids: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unknown_resource_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_hash: Option<HashView>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub targets: Vec<String>,
    #[serde(default)]
    pub secure: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trusted_certificate_group_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_connections: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_web_socket_connections: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_profile_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_balancing_strategy_id: Option<i64>,
    // Sent as an explicit `false` when unset so the server default is not
    // silently applied on update.
    #[serde(default)]
    pub skip_hostname_verification: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_hostname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_alive_timeout: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_target_host_header: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_pa_cookie: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateView {
    pub id: i64,
    pub alias: String,
    #[serde(default)]
    pub subject_dn: String,
    #[serde(default)]
    pub issuer_dn: String,
    #[serde(default)]
    pub subject_alternative_names: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_algorithm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature_algorithm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha1sum: Option<String>,
}

/// A policy rule. `configuration` is defined by the rule's plugin class.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub class_name: String,
    #[serde(default)]
    pub configuration: Value,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub supported_destinations: Vec<String>,
}

/// Body of a PKCS#12 export: the password protecting the archive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportParameters {
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionDocView {
    pub version: String,
}
