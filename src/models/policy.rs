/// The firewall policy every rule of a run is created under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyContext {
    pub policy_id: String,
    /// Whether the policy is a global rather than a regional resource.
    pub global_scope: bool,
}

impl PolicyContext {
    pub fn new(policy_id: impl Into<String>, global_scope: bool) -> Self {
        Self {
            policy_id: policy_id.into(),
            global_scope,
        }
    }
}
