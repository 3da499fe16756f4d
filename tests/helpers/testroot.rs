// tests/helpers/testroot.rs
// A per-test unique root holding etc/fstab, proc/filesystems and proc/mounts.

use std::path::{Path, PathBuf};

use mountyard::policy::Policy;

#[derive(Debug)]
pub struct TestRoot {
    td: tempfile::TempDir,
}

impl TestRoot {
    pub fn new() -> Self {
        let td = tempfile::TempDir::new().expect("tempdir");
        std::fs::create_dir_all(td.path().join("etc")).expect("etc");
        std::fs::create_dir_all(td.path().join("proc")).expect("proc");
        Self { td }
    }
    pub fn path(&self) -> &Path { self.td.path() }
    pub fn join<P: AsRef<Path>>(&self, p: P) -> PathBuf { self.path().join(p) }
    pub fn fstab(&self) -> PathBuf { self.join("etc/fstab") }
    pub fn filesystems(&self) -> PathBuf { self.join("proc/filesystems") }
    pub fn mounts(&self) -> PathBuf { self.join("proc/mounts") }

    pub fn write_fstab(&self, body: &str) -> &Self {
        std::fs::write(self.fstab(), body).expect("write fstab");
        self
    }
    pub fn write_filesystems(&self, body: &str) -> &Self {
        std::fs::write(self.filesystems(), body).expect("write filesystems");
        self
    }
    pub fn write_mounts(&self, body: &str) -> &Self {
        std::fs::write(self.mounts(), body).expect("write mounts");
        self
    }

    pub fn policy(&self) -> Policy { Policy::rooted_at(self.path()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn testroot_unique_and_policy_points_inside() {
        let a = TestRoot::new();
        let b = TestRoot::new();
        assert_ne!(a.path(), b.path());
        a.write_fstab("/dev/sda1 /boot ext4 defaults\n");
        assert!(a.fstab().exists());
        assert!(!b.fstab().exists());
        let p = a.policy();
        assert_eq!(p.paths.fstab, a.fstab());
        assert_eq!(p.paths.filesystems, a.filesystems());
        assert_eq!(p.paths.mounts, a.mounts());
    }
}
