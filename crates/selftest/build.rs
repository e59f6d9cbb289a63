//! Embeds the locked dependency set so the binary can report which `blst`
//! it was built against.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

const BUILD_INFO_ENV: &str = "BLSCHECK_BUILD_INFO";

#[derive(Deserialize)]
struct Lockfile {
    #[serde(default)]
    package: Vec<LockedPackage>,
}

#[derive(Deserialize, Serialize)]
struct LockedPackage {
    name: String,
    version: String,
}

#[derive(Serialize)]
struct BuildInfo<'a> {
    deps: &'a [LockedPackage],
}

fn find_lockfile(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join("Cargo.lock"))
        .find(|candidate| candidate.is_file())
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => return,
    };

    // Leaving the variable unset is how the binary learns metadata is missing.
    let Some(lockfile) = find_lockfile(&manifest_dir) else {
        println!("cargo:warning=Cargo.lock not found, build info will be unavailable");
        return;
    };
    println!("cargo:rerun-if-changed={}", lockfile.display());

    let contents = match fs::read_to_string(&lockfile) {
        Ok(contents) => contents,
        Err(e) => {
            println!("cargo:warning=failed to read {}: {}", lockfile.display(), e);
            return;
        }
    };
    let parsed: Lockfile = match toml::from_str(&contents) {
        Ok(parsed) => parsed,
        Err(e) => {
            println!("cargo:warning=failed to parse {}: {}", lockfile.display(), e);
            return;
        }
    };

    match serde_json::to_string(&BuildInfo {
        deps: &parsed.package,
    }) {
        Ok(json) => println!("cargo:rustc-env={}={}", BUILD_INFO_ENV, json),
        Err(e) => println!("cargo:warning=failed to encode build info: {}", e),
    }
}
