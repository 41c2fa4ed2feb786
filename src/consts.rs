/// Policy name used when none is given on the command line.
pub const DEFAULT_FIREWALL_POLICY: &str = "poc";

/// CSV path used when none is given on the command line.
pub const DEFAULT_CSV_FILE: &str = "a.csv";

/// Leading tokens of every rule creation call; the rule priority follows.
pub const CREATE_RULE_HEAD: [&str; 6] = [
    "gcloud",
    "beta",
    "compute",
    "network-firewall-policies",
    "rules",
    "create",
];

pub const GLOBAL_POLICY_FLAG: &str = "--global-firewall-policy";

/// Substring gcloud prints when a rule with the same priority already exists.
pub const DUPLICATE_PRIORITY_PHRASE: &str = "Cannot have rules with the same priorities";
