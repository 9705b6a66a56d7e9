use chrono::Utc;
use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::process::Command;

const DEFAULT_PRODUCT_NAME: &str = "RocksDB";

fn main() {
    let out_dir = env::var_os("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("version.rs");
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let cargo_toml_path = Path::new(&manifest_dir).join("Cargo.toml");

    // Read product name from Cargo.toml metadata
    let cargo_toml_content = std::fs::read_to_string(&cargo_toml_path).unwrap();

    let product_name = match cargo_toml_content.parse::<toml::Table>() {
        Ok(cargo_toml) => cargo_toml
            .get("package")
            .and_then(|p| p.as_table())
            .and_then(|p| p.get("metadata"))
            .and_then(|m| m.as_table())
            .and_then(|m| m.get("product_name"))
            .and_then(|v| v.as_str())
            .map(|v| v.to_string())
            .unwrap_or_else(|| DEFAULT_PRODUCT_NAME.to_string()),
        Err(_) => DEFAULT_PRODUCT_NAME.to_string(),
    };

    let git_sha = env_override("BUILDINFO_GIT_SHA").or_else(|| git(&["rev-parse", "HEAD"]));
    let git_tag = env_override("BUILDINFO_GIT_TAG")
        .or_else(|| git(&["describe", "--tags", "--exact-match"]))
        .or_else(|| git(&["symbolic-ref", "-q", "--short", "HEAD"]));
    let build_date = env_override("BUILDINFO_BUILD_DATE")
        .or_else(|| Some(Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()));

    // Anything we could not resolve keeps the "@VAR@" marker so it is
    // dropped at run time as a failed substitution.
    let placeholders = [
        placeholder("rocksdb_build_git_sha", git_sha, "GIT_SHA"),
        placeholder("rocksdb_build_git_tag", git_tag, "GIT_TAG"),
        placeholder("rocksdb_build_date", build_date, "BUILD_DATE"),
    ];

    let mut f = File::create(&dest_path).unwrap();

    #[allow(clippy::uninlined_format_args)]
    writeln!(
        &mut f,
        r###"pub const PRODUCT_NAME: &str = {:?};
pub const RAW_BUILD_PLACEHOLDERS: [&str; 3] = [{:?}, {:?}, {:?}];"###,
        product_name, placeholders[0], placeholders[1], placeholders[2]
    )
    .unwrap();

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=Cargo.toml");
    watch_git_refs();
    println!("cargo:rerun-if-env-changed=BUILDINFO_GIT_SHA");
    println!("cargo:rerun-if-env-changed=BUILDINFO_GIT_TAG");
    println!("cargo:rerun-if-env-changed=BUILDINFO_BUILD_DATE");
}

// HEAD only changes on checkout; new commits move the branch ref it points to.
// Outside a checkout nothing is watched, so the script does not rerun every build.
fn watch_git_refs() {
    let mut refs = vec!["HEAD".to_string(), "packed-refs".to_string()];
    if let Some(branch_ref) = git(&["symbolic-ref", "-q", "HEAD"]) {
        refs.push(branch_ref);
    }

    for git_ref in refs {
        if let Some(path) = git(&["rev-parse", "--git-path", &git_ref]) {
            if Path::new(&path).exists() {
                println!("cargo:rerun-if-changed={}", path);
            }
        }
    }
}

fn placeholder(name: &str, value: Option<String>, marker: &str) -> String {
    match value {
        Some(value) => format!("{}:{}", name, value),
        None => format!("{}:@{}@", name, marker),
    }
}

fn env_override(var: &str) -> Option<String> {
    env::var(var)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn git(args: &[&str]) -> Option<String> {
    Command::new("git")
        .args(args)
        .output()
        .ok()
        .and_then(|output| {
            if output.status.success() {
                String::from_utf8(output.stdout).ok()
            } else {
                None
            }
        })
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
