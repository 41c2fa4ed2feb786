use serde::Deserialize;

/// One rule as read from the input CSV.
///
/// Every column is optional: absent columns and empty cells both end up as
/// `None` or an empty string, and the translator treats the two alike.
/// Columns not listed here are ignored.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct FirewallRuleRecord {
    #[serde(rename = "PRIORITY")]
    pub priority: Option<String>,
    #[serde(rename = "ACTION")]
    pub action: Option<String>,
    #[serde(rename = "DESCRIPTION")]
    pub description: Option<String>,
    #[serde(rename = "TARGET_SECURE_TAGS")]
    pub target_secure_tags: Option<String>,
    #[serde(rename = "SRC_SECURE_TAGS")]
    pub src_secure_tags: Option<String>,
    #[serde(rename = "DIRECTION")]
    pub direction: Option<String>,
    #[serde(rename = "SRC_NETWORKS")]
    pub src_networks: Option<String>,
    #[serde(rename = "SRC_IP_RANGES")]
    pub src_ip_ranges: Option<String>,
    #[serde(rename = "DEST_IP_RANGES")]
    pub dest_ip_ranges: Option<String>,
    #[serde(rename = "LAYER4_CONFIGS")]
    pub layer4_configs: Option<String>,
    #[serde(rename = "ENABLE_LOGGING")]
    pub enable_logging: Option<String>,
    #[serde(rename = "DISABLED")]
    pub disabled: Option<String>,
    #[serde(rename = "SRC_ADDRESS_GROUPS")]
    pub src_address_groups: Option<String>,
    #[serde(rename = "DEST_ADDRESS_GROUPS")]
    pub dest_address_groups: Option<String>,
}

/// Returns the field value only when it holds something.
#[inline]
pub fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|v| !v.is_empty())
}
