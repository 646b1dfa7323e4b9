use std::fs;

use assert_fs::prelude::*;
use jira_config::adapters::MemoryArtifactWriter;
use jira_config::{
    AppError, ArtifactKind, RawParams, WriteOutcome, apply, apply_with, load_params, render,
    resolve,
};
use predicates::prelude::*;
use tempfile::TempDir;

const CLUSTER_PARAMS: &str =
    "version: '7.0.4'\njavahome: /opt/java\ndatacenter: true\nshared_homedir: /mnt/shared\n";

#[test]
fn test_library_lifecycle_coverage() {
    let temp = assert_fs::TempDir::new().unwrap();
    let params = temp.child("params.yml");
    params.write_str("version: '7.0.4'\njavahome: /opt/java\ndb: mysql\n").unwrap();
    let stage = temp.child("stage");

    // 1. Load with an override
    let raw =
        load_params(params.path(), &["dbserver=db.internal".to_string()]).expect("load failed");

    // 2. Resolve
    let cfg = resolve(raw).expect("resolve failed");
    assert_eq!(cfg.database.host, "db.internal");
    assert_eq!(cfg.database.port, Some(3306));

    // 3. Apply
    let report = apply(&cfg, stage.path()).expect("apply failed");
    assert_eq!(report.count(WriteOutcome::Created), 5);
    stage
        .child("home/jira/dbconfig.xml")
        .assert(predicate::str::contains("jdbc:mysql://db.internal:3306/jira"));
    stage
        .child("opt/jira/atlassian-jira-software-7.0.4-standalone/conf/server.xml")
        .assert(predicate::path::exists());

    // 4. Re-apply is a no-op
    let again = apply(&cfg, stage.path()).expect("second apply failed");
    assert!(!again.changed());
}

#[test]
fn apply_with_memory_writer_records_artifacts() {
    let cfg = resolve(RawParams::from_yaml_str(CLUSTER_PARAMS).unwrap()).unwrap();
    let writer = MemoryArtifactWriter::new();

    let report = apply_with(&cfg, writer.clone()).unwrap();

    assert_eq!(report.artifacts.len(), 6);
    assert_eq!(writer.len(), 6);
    let kinds: Vec<ArtifactKind> = report.artifacts.iter().map(|a| a.kind).collect();
    assert_eq!(kinds.last(), Some(&ArtifactKind::ClusterProperties));
}

#[test]
fn node_id_differs_between_renders_and_nothing_else_does() {
    let cfg = resolve(RawParams::from_yaml_str(CLUSTER_PARAMS).unwrap()).unwrap();

    let first = render(&cfg).unwrap();
    let second = render(&cfg).unwrap();

    for (a, b) in first.iter().zip(second.iter()) {
        if a.kind == ArtifactKind::ClusterProperties {
            assert_ne!(a.content, b.content);
            let strip = |s: &str| {
                s.lines().filter(|l| !l.starts_with("jira.node.id")).collect::<Vec<_>>().join("\n")
            };
            assert_eq!(strip(&a.content), strip(&b.content));
        } else {
            assert_eq!(a, b);
        }
    }
}

#[test]
fn resolution_errors_surface_before_any_write() {
    let temp = TempDir::new().unwrap();
    let params = temp.path().join("params.json");
    fs::write(&params, r#"{"version": "7.0.4", "javahome": "/opt/java", "db": "db2"}"#).unwrap();

    let err = load_params(&params, &[]).and_then(resolve).unwrap_err();

    assert!(matches!(err, AppError::UnsupportedDatabase(ref kind) if kind == "db2"));
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
}
