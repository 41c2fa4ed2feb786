use crate::consts::{CREATE_RULE_HEAD, GLOBAL_POLICY_FLAG};
use crate::models::csv_models::firewall_rule::{FirewallRuleRecord, present};
use crate::models::invocation::CommandInvocation;
use crate::models::policy::PolicyContext;
use log::debug;

/// Result of turning one CSV row into a gcloud call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowTranslation {
    Invocation(CommandInvocation),
    /// A required column was empty; `missing` names the first one found.
    Skipped { missing: &'static str },
}

/// Builds the `rules create` call for one record.
///
/// PRIORITY, ACTION and DESCRIPTION are required; if any is empty the row is
/// skipped rather than rejected. `--global-firewall-policy` is always part of
/// the fixed header and is emitted a second time when the policy is global.
///
/// # Arguments
/// * `record` - The row as read from the CSV file.
/// * `policy` - The firewall policy the rule is created under.
///
/// # Returns
/// * `RowTranslation` - The ordered command tokens, or the skip reason.
pub fn translate(record: &FirewallRuleRecord, policy: &PolicyContext) -> RowTranslation {
    let Some(priority) = present(&record.priority) else {
        return RowTranslation::Skipped {
            missing: "PRIORITY",
        };
    };
    let Some(action) = present(&record.action) else {
        return RowTranslation::Skipped { missing: "ACTION" };
    };
    let Some(description) = present(&record.description) else {
        return RowTranslation::Skipped {
            missing: "DESCRIPTION",
        };
    };

    let mut cmd = CommandInvocation::new(CREATE_RULE_HEAD);
    cmd.push(priority);
    cmd.push_pair("--action", action);
    cmd.push_pair("--firewall-policy", &policy.policy_id);
    cmd.push_pair("--description", description);
    cmd.push(GLOBAL_POLICY_FLAG);
    debug!("Initial command: {cmd}");

    if policy.global_scope {
        cmd.push(GLOBAL_POLICY_FLAG);
    }

    // Tag and group lists go through untouched, brackets included.
    let valued = [
        ("--target-secure-tags", &record.target_secure_tags),
        ("--src-secure-tags", &record.src_secure_tags),
        ("--direction", &record.direction),
        ("--src-networks", &record.src_networks),
        ("--src-ip-ranges", &record.src_ip_ranges),
        ("--dest-ip-ranges", &record.dest_ip_ranges),
        ("--layer4-configs", &record.layer4_configs),
    ];
    for (option, field) in valued {
        if let Some(value) = present(field) {
            cmd.push_pair(option, value);
        }
    }

    if let Some(flag) = toggle(&record.enable_logging, "--enable-logging", "--no-enable-logging") {
        cmd.push(flag);
    }
    if let Some(flag) = toggle(&record.disabled, "--disabled", "--no-disabled") {
        cmd.push(flag);
    }

    for (option, field) in [
        ("--src-address-groups", &record.src_address_groups),
        ("--dest-address-groups", &record.dest_address_groups),
    ] {
        if let Some(value) = present(field) {
            cmd.push_pair(option, value);
        }
    }

    RowTranslation::Invocation(cmd)
}

/// Maps a "true"/"false" cell (any case) to the matching flag; anything else
/// emits nothing.
fn toggle(
    field: &Option<String>,
    on: &'static str,
    off: &'static str,
) -> Option<&'static str> {
    let value = present(field)?;
    if value.eq_ignore_ascii_case("true") {
        Some(on)
    } else if value.eq_ignore_ascii_case("false") {
        Some(off)
    } else {
        None
    }
}
