//! Build metadata embedded by `build.rs`.

use blscheck_api::{Error, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Package name of the curve library whose version the banner reports
pub const BLS_DEPENDENCY: &str = "blst";

const EMBEDDED: Option<&str> = option_env!("BLSCHECK_BUILD_INFO");

static BUILD_INFO: Lazy<Result<BuildInfo>> = Lazy::new(|| BuildInfo::from_embedded(EMBEDDED));

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Dependency {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct BuildInfo {
    #[serde(default)]
    pub deps: Vec<Dependency>,
}

impl BuildInfo {
    /// Metadata of the running binary, parsed once per process.
    pub fn read() -> Result<&'static BuildInfo> {
        match &*BUILD_INFO {
            Ok(info) => Ok(info),
            Err(e) => Err(e.clone()),
        }
    }

    pub fn from_embedded(raw: Option<&str>) -> Result<Self> {
        let raw = raw.ok_or(Error::BuildInfoUnavailable)?;
        Self::parse(raw)
    }

    pub fn parse(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| Error::MalformedBuildInfo(e.to_string()))
    }

    /// First locked version of `name`, if the dependency is present.
    pub fn dependency_version(&self, name: &str) -> Option<&str> {
        self.deps
            .iter()
            .find(|dep| dep.name == name)
            .map(|dep| dep.version.as_str())
    }

    /// Version of the curve library, or an empty string when it is not listed.
    pub fn bls_version(&self) -> &str {
        self.dependency_version(BLS_DEPENDENCY).unwrap_or_default()
    }
}
