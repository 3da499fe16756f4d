//! `--all`: mount every table entry in order, stop at the first failure.

use mountyard::api::errors::{ApiError, ErrorId};
use mountyard::types::{Directive, MountError, Resolution};
use mountyard::Mountyard;

use crate::helpers::facts::{TestAudit, TestEmitter};
use crate::helpers::mounter::RecordingMounter;
use crate::helpers::testroot::TestRoot;

const TABLE: &str = "\
# static file system information
/dev/sda1  /boot     ext4   defaults  0 2
/dev/sdb1  /data     xfs    noatime   0 2
tmpfs      /tmp      tmpfs  size=1G   0 0
";

fn all() -> Directive {
    Directive {
        all: true,
        ..Directive::default()
    }
}

#[test]
fn mounts_every_entry_in_table_order() {
    let root = TestRoot::new();
    root.write_fstab(TABLE);
    let m = RecordingMounter::new();
    let api = Mountyard::new(TestEmitter::default(), TestAudit::default(), root.policy())
        .with_mounter(m.boxed());

    let res = api.resolve(&all()).unwrap();
    assert_eq!(res.outcomes().len(), 3);
    let seen: Vec<(String, String, String)> = m
        .calls()
        .into_iter()
        .map(|c| (c.source, c.target, c.fstype))
        .collect();
    let want: Vec<(String, String, String)> = [
        ("/dev/sda1", "/boot", "ext4"),
        ("/dev/sdb1", "/data", "xfs"),
        ("tmpfs", "/tmp", "tmpfs"),
    ]
    .into_iter()
    .map(|(s, t, f)| (s.to_string(), t.to_string(), f.to_string()))
    .collect();
    assert_eq!(seen, want);
}

#[test]
fn stops_at_first_failing_entry() {
    let root = TestRoot::new();
    root.write_fstab(TABLE);
    let m = RecordingMounter::new().reject_type("xfs");
    let api = Mountyard::new(TestEmitter::default(), TestAudit::default(), root.policy())
        .with_mounter(m.boxed());

    let err = api.resolve(&all()).unwrap_err();
    match &err {
        ApiError::Mount(MountError::Syscall { device, .. }) => assert_eq!(device, "/dev/sdb1"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(m.calls().len(), 2);
}

#[test]
fn match_filter_restricts_entries() {
    let root = TestRoot::new();
    root.write_fstab(TABLE);
    let m = RecordingMounter::new();
    let api = Mountyard::new(TestEmitter::default(), TestAudit::default(), root.policy())
        .with_mounter(m.boxed());

    let d = Directive {
        match_types: vec!["tmpfs".into(), "ext4".into()],
        ..all()
    };
    api.resolve(&d).unwrap();
    let targets: Vec<_> = m.calls().into_iter().map(|c| c.target).collect();
    assert_eq!(targets, vec!["/boot", "/tmp"]);
}

#[test]
fn all_with_auto_entry_uses_catalog() {
    let root = TestRoot::new();
    root.write_fstab("/dev/sdc1 /media auto noauto 0 0\n");
    root.write_filesystems("\text4\n\tvfat\n");
    let m = RecordingMounter::new().reject_type("ext4");
    let api = Mountyard::new(TestEmitter::default(), TestAudit::default(), root.policy())
        .with_mounter(m.boxed());

    api.resolve(&all()).unwrap();
    let tried: Vec<_> = m.calls().into_iter().map(|c| c.fstype).collect();
    assert_eq!(tried, vec!["ext4", "vfat"]);
}

#[test]
fn mid_line_hash_comments_out_the_entry() {
    let root = TestRoot::new();
    root.write_fstab("/dev/sda1 /boot ext4 defaults # keep\n\n/dev/sdb1 /data xfs defaults\n");
    let m = RecordingMounter::new();
    let api = Mountyard::new(TestEmitter::default(), TestAudit::default(), root.policy())
        .with_mounter(m.boxed());

    api.resolve(&all()).unwrap();
    let targets: Vec<_> = m.calls().into_iter().map(|c| c.target).collect();
    assert_eq!(targets, vec!["/data"]);
}

#[test]
fn leading_comment_rule_keeps_annotated_entries() {
    let root = TestRoot::new();
    root.write_fstab("/dev/sda1 /boot ext4 defaults # keep\n");
    let mut policy = root.policy();
    policy.comments = mountyard::policy::CommentRule::Leading;
    let m = RecordingMounter::new();
    let api = Mountyard::new(TestEmitter::default(), TestAudit::default(), policy)
        .with_mounter(m.boxed());

    api.resolve(&all()).unwrap();
    assert_eq!(m.calls().len(), 1);
}

#[test]
fn malformed_table_fails_before_any_mount() {
    let root = TestRoot::new();
    root.write_fstab("/dev/sda1 /boot ext4 defaults\n/dev/sdb1 /data\n");
    let m = RecordingMounter::new();
    let facts = TestEmitter::default();
    let api = Mountyard::new(facts.clone(), TestAudit::default(), root.policy())
        .with_mounter(m.boxed());

    let err = api.resolve(&all()).unwrap_err();
    assert!(matches!(err, ApiError::MalformedEntry(_)));
    assert_eq!(err.id(), ErrorId::E_MALFORMED);
    assert!(err.to_string().contains("line 2"), "{err}");
    assert!(m.calls().is_empty());

    let load = facts.named("fstab.load");
    assert_eq!(load.len(), 1);
    assert_eq!(load[0].decision, "failure");
    assert_eq!(load[0].fields["error_id"], "E_MALFORMED");
}

#[test]
fn missing_table_is_a_table_error() {
    let root = TestRoot::new();
    let api = Mountyard::new(TestEmitter::default(), TestAudit::default(), root.policy())
        .with_mounter(RecordingMounter::new().boxed());
    let err = api.resolve(&all()).unwrap_err();
    assert_eq!(err.id(), ErrorId::E_TABLE);
}

#[test]
fn fake_all_describes_every_entry() {
    let root = TestRoot::new();
    root.write_fstab(TABLE);
    let m = RecordingMounter::new();
    let audit = TestAudit::default();
    let api = Mountyard::new(TestEmitter::default(), audit.clone(), root.policy())
        .with_mounter(m.boxed());

    let d = Directive {
        fake: true,
        ..all()
    };
    let res = api.resolve(&d).unwrap();
    assert!(matches!(res, Resolution::Mounted(ref v) if v.len() == 3));
    assert!(m.calls().is_empty());
    assert_eq!(
        audit.lines(),
        vec![
            "Would mount /dev/sda1 type ext4 at /boot",
            "Would mount /dev/sdb1 type xfs at /data",
            "Would mount tmpfs type tmpfs at /tmp",
        ]
    );
}

#[test]
fn summary_fact_records_mode_and_count() {
    let root = TestRoot::new();
    root.write_fstab(TABLE);
    let facts = TestEmitter::default();
    let api = Mountyard::new(facts.clone(), TestAudit::default(), root.policy())
        .with_mounter(RecordingMounter::new().boxed());

    api.resolve(&all()).unwrap();
    let summary = facts.named("resolve.summary");
    assert_eq!(summary.len(), 1);
    assert_eq!(summary[0].decision, "success");
    assert_eq!(summary[0].fields["mode"], "all");
    assert_eq!(summary[0].fields["mounted"], 3);
}
