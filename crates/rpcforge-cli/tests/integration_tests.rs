//! Integration tests for the rpcforge binary.

use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const FACADE_DIR: &str = "app/facade/src/main/java/com/ly/flight/intl/treasurecore/facade";
const CONSTANTS_FILE: &str =
    "app/biz/src/main/java/com/ly/flight/intl/treasurecore/biz/constants/TreasureServiceConstants.java";
const BEANS_FILE: &str = "app/facade-impl/src/main/resources/META-INF/spring/facade-impl-beans.xml";

fn write(root: &Path, rel: &str, content: &str) {
    let full = root.join(rel);
    fs::create_dir_all(full.parent().unwrap()).unwrap();
    fs::write(full, content).unwrap();
}

/// A temp dir holding a minimal treasurecore tree and an empty config file.
fn workspace() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join(FACADE_DIR)).unwrap();
    write(
        temp.path(),
        CONSTANTS_FILE,
        "package com.ly.flight.intl.treasurecore.biz.constants;\n\npublic class TreasureServiceConstants {\n}\n",
    );
    write(
        temp.path(),
        BEANS_FILE,
        "<beans>\n    <set>\n    </set>\n</beans>\n",
    );
    write(temp.path(), "rpcforge.toml", "");
    temp
}

fn rpcforge(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("rpcforge").unwrap();
    cmd.current_dir(temp.path())
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(temp.path().join("rpcforge.toml"));
    cmd
}

fn generate(temp: &TempDir, method: &str) -> Command {
    let mut cmd = rpcforge(temp);
    cmd.args([
        "generate",
        "--project",
        "treasurecore",
        "--path",
        "order",
        "--method",
        method,
        "--author",
        "dev",
        "--date",
        "2026-03-04",
    ])
    .arg("--root")
    .arg(temp.path());
    cmd
}

#[test]
fn help_lists_subcommands() {
    Command::cargo_bin("rpcforge")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("projects"))
        .stdout(predicate::str::contains("templates"));
}

#[test]
fn version_flag() {
    Command::cargo_bin("rpcforge")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn generate_writes_tree() {
    let temp = workspace();

    generate(&temp, "query")
        .assert()
        .success()
        .stdout(predicate::str::contains("OrderFacade (new)"))
        .stdout(predicate::str::contains("10 created, 2 patched"));

    let facade = temp.path().join(FACADE_DIR).join("OrderFacade.java");
    assert!(fs::read_to_string(facade).unwrap().contains("QueryResponseDTO query("));

    let constants = fs::read_to_string(temp.path().join(CONSTANTS_FILE)).unwrap();
    assert!(constants.contains("ORDER_QUERY = \"ORDER_QUERY\";"));

    let beans = fs::read_to_string(temp.path().join(BEANS_FILE)).unwrap();
    assert!(beans.contains("dsfOrderFacade"));
}

#[test]
fn rerun_is_idempotent() {
    let temp = workspace();
    generate(&temp, "query").assert().success();
    let facade = temp.path().join(FACADE_DIR).join("OrderFacade.java");
    let before = fs::read_to_string(&facade).unwrap();

    generate(&temp, "query")
        .assert()
        .success()
        .stdout(predicate::str::contains("OrderFacade (existing)"))
        .stdout(predicate::str::contains("0 created, 0 patched"));

    assert_eq!(fs::read_to_string(&facade).unwrap(), before);
}

#[test]
fn reject_policy_fails_on_duplicate() {
    let temp = workspace();
    generate(&temp, "query").assert().success();

    generate(&temp, "query")
        .args(["--on-duplicate", "reject"])
        .assert()
        .failure()
        .code(5)
        .stderr(predicate::str::contains("already present"));
}

#[test]
fn unclosed_interface_stops_run_but_lists_written_files() {
    let temp = workspace();
    write(
        temp.path(),
        &format!("{FACADE_DIR}/OrderFacade.java"),
        "package com.ly.flight.intl.treasurecore.facade;\n\n@Path(\"order\")\npublic interface OrderFacade {\n",
    );

    generate(&temp, "query")
        .assert()
        .failure()
        .code(5)
        .stdout(predicate::str::contains("request-dto"))
        .stdout(predicate::str::contains("8 created, 0 patched"))
        .stderr(predicate::str::contains("Run stopped"));

    let constants = fs::read_to_string(temp.path().join(CONSTANTS_FILE)).unwrap();
    assert!(!constants.contains("ORDER_QUERY"));
}

#[test]
fn dry_run_leaves_disk_untouched() {
    let temp = workspace();

    generate(&temp, "query")
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("(dry run)"));

    assert!(!temp.path().join(FACADE_DIR).join("OrderFacade.java").exists());
    let constants = fs::read_to_string(temp.path().join(CONSTANTS_FILE)).unwrap();
    assert!(!constants.contains("ORDER_QUERY"));
}

#[test]
fn json_report_is_machine_readable() {
    let temp = workspace();

    let output = generate(&temp, "query")
        .args(["--output-format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["interface_name"], "OrderFacade");
    assert_eq!(report["dry_run"], false);
    assert_eq!(report["artifacts"].as_array().unwrap().len(), 12);
}

#[test]
fn config_file_supplies_author_and_projects() {
    let temp = workspace();
    write(
        temp.path(),
        "rpcforge.toml",
        "[defaults]\nauthor = \"from-config\"\n\n[projects.billing]\nconstants_type = \"x.billing.BillingConstants\"\n",
    );
    fs::create_dir_all(
        temp.path()
            .join("app/facade/src/main/java/com/ly/flight/intl/billing/facade"),
    )
    .unwrap();

    rpcforge(&temp)
        .args(["generate", "-p", "billing", "-r", "invoice", "-m", "issue", "--output-format", "plain"])
        .arg("--root")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("InvoiceFacade (new)"));

    let dto = temp.path().join(
        "app/facade/src/main/java/com/ly/flight/intl/billing/facade/request/invoice/IssueRequestDTO.java",
    );
    assert!(fs::read_to_string(dto).unwrap().contains("from-config"));
}

#[test]
fn projects_json_lists_catalogue() {
    let temp = workspace();

    let output = rpcforge(&temp)
        .args(["projects", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let ids: Vec<&str> = rows
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap())
        .collect();
    assert!(ids.contains(&"treasurecore"));
    assert!(ids.contains(&"refundcore"));
}

#[test]
fn templates_show_prints_body() {
    let temp = workspace();

    rpcforge(&temp)
        .args(["templates", "--show", "facade"])
        .assert()
        .success()
        .stdout(predicate::str::contains("public interface {{facadeInterfaceClassName}}"));
}

#[test]
fn templates_list_reports_overrides() {
    let temp = workspace();
    write(temp.path(), "tpl/manager.tpl", "package {{managerPackageName}};\n}\n");
    write(
        temp.path(),
        "rpcforge.toml",
        &format!(
            "[templates]\nlocal_path = {:?}\n",
            temp.path().join("tpl").display().to_string()
        ),
    );

    rpcforge(&temp)
        .args(["templates", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("facade,builtin"))
        .stdout(predicate::str::contains("manager,").and(predicate::str::contains("manager.tpl")));
}

#[test]
fn init_local_writes_config() {
    let temp = TempDir::new().unwrap();

    Command::cargo_bin("rpcforge")
        .unwrap()
        .current_dir(temp.path())
        .args(["init", "--local"])
        .assert()
        .success();

    let written = fs::read_to_string(temp.path().join(".rpcforge.toml")).unwrap();
    assert!(written.contains("[layout]"));
    assert!(written.contains("on_duplicate = \"skip\""));
}

#[test]
fn config_get_reads_layered_value() {
    let temp = workspace();
    write(temp.path(), "rpcforge.toml", "[output]\nformat = \"plain\"\n");

    rpcforge(&temp)
        .args(["config", "get", "output.format"])
        .assert()
        .success()
        .stdout("plain\n");

    rpcforge(&temp)
        .env("RPCFORGE__DEFAULTS__AUTHOR", "env-author")
        .args(["config", "get", "defaults.author"])
        .assert()
        .success()
        .stdout("env-author\n");
}

#[test]
fn completions_for_bash() {
    Command::cargo_bin("rpcforge")
        .unwrap()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rpcforge"));
}
