use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Deployment environment the process runs in. Selects the log format.
#[derive(Clone, Debug, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EnvType {
    Local,
    #[default]
    Dev,
    Staging,
    Prod,
}

impl EnvType {
    pub fn is_local(&self) -> bool {
        *self == EnvType::Local
    }
}

impl Display for EnvType {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let s = match self {
            EnvType::Local => "local",
            EnvType::Dev => "dev",
            EnvType::Staging => "staging",
            EnvType::Prod => "prod",
        };
        write!(f, "{}", s)
    }
}
