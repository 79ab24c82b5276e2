use serde::{Deserialize, Serialize};

/// The hosting remote a pull request belongs to. Opaque to the models.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RemoteProviderReference {
    pub id: String,
    pub name: String,
    pub domain: String,
    #[serde(default)]
    pub icon: String,
}
