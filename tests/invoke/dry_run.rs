//! `--fake` never reaches the kernel.

use mountyard::types::{Directive, MountOutcome};
use mountyard::Mountyard;

use crate::helpers::facts::{TestAudit, TestEmitter};
use crate::helpers::mounter::RecordingMounter;
use crate::helpers::testroot::TestRoot;

fn fake() -> Directive {
    Directive {
        fake: true,
        verbose: true,
        ..Directive::default()
    }
}

#[test]
fn dry_run_describes_and_succeeds_without_mounting() {
    let root = TestRoot::new();
    let m = RecordingMounter::new().reject_device("/dev/sda1");
    let audit = TestAudit::default();
    let api = Mountyard::new(TestEmitter::default(), audit.clone(), root.policy())
        .with_mounter(m.boxed());

    let out = api.mount_one("ext4", "/dev/sda1", "/mnt", &fake()).unwrap();
    assert_eq!(
        out,
        MountOutcome::WouldMount {
            device: "/dev/sda1".into(),
            target: "/mnt".into(),
            fstype: "ext4".into(),
        }
    );
    assert!(m.calls().is_empty());
    assert_eq!(audit.lines(), vec!["Would mount /dev/sda1 type ext4 at /mnt"]);
}

#[test]
fn dry_run_with_auto_and_no_catalog_still_succeeds() {
    let root = TestRoot::new();
    let m = RecordingMounter::new();
    let api = Mountyard::new(TestEmitter::default(), TestAudit::default(), root.policy())
        .with_mounter(m.boxed());

    let out = api.mount_one("auto", "/dev/sda1", "/mnt", &fake()).unwrap();
    assert!(matches!(out, MountOutcome::WouldMount { .. }));
    assert!(m.calls().is_empty());
}

#[test]
fn dry_run_facts_are_redacted() {
    let root = TestRoot::new();
    let facts = TestEmitter::default();
    let api = Mountyard::new(facts.clone(), TestAudit::default(), root.policy())
        .with_mounter(RecordingMounter::new().boxed());

    api.mount_one("ext4", "/dev/sda1", "/mnt", &fake()).unwrap();
    let results = facts.named("mount.result");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].fields["ts"], mountyard::logging::TS_ZERO);
    assert_eq!(results[0].fields["dry_run"], true);
    assert!(facts.named("mount.attempt").is_empty());
}
