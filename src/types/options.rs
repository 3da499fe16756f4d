//! Named filesystem-independent mount options.

use std::collections::BTreeSet;
use std::str::FromStr;

use serde::Serialize;

/// Closed set of boolean mount options understood by the flag translation table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "&'static str")]
pub enum MountOption {
    ReadOnly,
    ReadWrite,
    Suid,
    NoSuid,
    Dev,
    NoDev,
    Exec,
    NoExec,
    Synchronous,
    NoSynchronous,
    Remount,
    Mand,
    NoMand,
    Dirsync,
    NoDirsync,
    Atime,
    NoAtime,
    Diratime,
    NoDiratime,
    Bind,
    Move,
    Silent,
    Loud,
    Posixacl,
    NoPosixacl,
    Bindable,
    Unbindable,
    Private,
    Slave,
    Shared,
    Relatime,
    NoRelatime,
    Iversion,
    NoIversion,
    Strictatime,
    NoStrictatime,
}

impl MountOption {
    pub const ALL: [MountOption; 36] = [
        Self::ReadOnly,
        Self::ReadWrite,
        Self::Suid,
        Self::NoSuid,
        Self::Dev,
        Self::NoDev,
        Self::Exec,
        Self::NoExec,
        Self::Synchronous,
        Self::NoSynchronous,
        Self::Remount,
        Self::Mand,
        Self::NoMand,
        Self::Dirsync,
        Self::NoDirsync,
        Self::Atime,
        Self::NoAtime,
        Self::Diratime,
        Self::NoDiratime,
        Self::Bind,
        Self::Move,
        Self::Silent,
        Self::Loud,
        Self::Posixacl,
        Self::NoPosixacl,
        Self::Bindable,
        Self::Unbindable,
        Self::Private,
        Self::Slave,
        Self::Shared,
        Self::Relatime,
        Self::NoRelatime,
        Self::Iversion,
        Self::NoIversion,
        Self::Strictatime,
        Self::NoStrictatime,
    ];

    /// Command-line spelling of the option.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ReadOnly => "read-only",
            Self::ReadWrite => "read-write",
            Self::Suid => "suid",
            Self::NoSuid => "no-suid",
            Self::Dev => "dev",
            Self::NoDev => "no-dev",
            Self::Exec => "exec",
            Self::NoExec => "no-exec",
            Self::Synchronous => "synchronous",
            Self::NoSynchronous => "no-synchronous",
            Self::Remount => "remount",
            Self::Mand => "mand",
            Self::NoMand => "no-mand",
            Self::Dirsync => "dirsync",
            Self::NoDirsync => "no-dirsync",
            Self::Atime => "atime",
            Self::NoAtime => "no-atime",
            Self::Diratime => "diratime",
            Self::NoDiratime => "no-diratime",
            Self::Bind => "bind",
            Self::Move => "move",
            Self::Silent => "silent",
            Self::Loud => "loud",
            Self::Posixacl => "posixacl",
            Self::NoPosixacl => "no-posixacl",
            Self::Bindable => "bindable",
            Self::Unbindable => "unbindable",
            Self::Private => "private",
            Self::Slave => "slave",
            Self::Shared => "shared",
            Self::Relatime => "relatime",
            Self::NoRelatime => "no-relatime",
            Self::Iversion => "iversion",
            Self::NoIversion => "no-iversion",
            Self::Strictatime => "strictatime",
            Self::NoStrictatime => "no-strictatime",
        }
    }

    /// One-line help text shown by the command surface.
    #[must_use]
    pub const fn help(self) -> &'static str {
        match self {
            Self::ReadOnly => "Mount read-only",
            Self::ReadWrite => "Mount read-write",
            Self::Suid => "Obey suid and sgid bits",
            Self::NoSuid => "Ignore suid and sgid bits",
            Self::Dev => "Allow use of special device files",
            Self::NoDev => "Disallow use of special device files",
            Self::Exec => "Allow program execution",
            Self::NoExec => "Disallow program execution",
            Self::Synchronous => "Writes are synced at once",
            Self::NoSynchronous => "Writes aren't synced at once",
            Self::Remount => "Alter flags of mounted filesystem",
            Self::Mand => "Allow mandatory locks",
            Self::NoMand => "Disallow mandatory locks",
            Self::Dirsync => "Directory modifications are synchronous",
            Self::NoDirsync => "Directory modifications are asynchronous",
            Self::Atime => "Update inode access times",
            Self::NoAtime => "Don't update inode access times",
            Self::Diratime => "Update directory access times",
            Self::NoDiratime => "Don't update directory access times",
            Self::Bind => "Bind a file or directory",
            Self::Move => "Relocate an existing mount point",
            Self::Silent => "Suppress some kernel warnings",
            Self::Loud => "Don't suppress kernel warnings",
            Self::Posixacl => "Filesystem doesn't apply umask",
            Self::NoPosixacl => "Filesystem applies umask",
            Self::Bindable => "Make mount point able to be bind mounted",
            Self::Unbindable => "Make mount point unable to be bind mounted",
            Self::Private => "Change to private subtree",
            Self::Slave => "Change to slave subtree",
            Self::Shared => "Change to shared subtree",
            Self::Relatime => "Update atime relative to mtime/ctime",
            Self::NoRelatime => "Disable relatime",
            Self::Iversion => "Update inode I-Version field",
            Self::NoIversion => "Don't update inode I-Version field",
            Self::Strictatime => "Always perform atime updates",
            Self::NoStrictatime => "May skip atime updates",
        }
    }
}

impl From<MountOption> for &'static str {
    fn from(o: MountOption) -> Self {
        o.name()
    }
}

impl FromStr for MountOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|o| o.name() == s)
            .ok_or_else(|| format!("unknown mount option: {s}"))
    }
}

/// Set of options present on a request. Presence only; application order is
/// always the translation table's order, never insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct OptionSet(BTreeSet<MountOption>);

impl OptionSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, opt: MountOption) -> &mut Self {
        self.0.insert(opt);
        self
    }

    #[must_use]
    pub fn with(mut self, opt: MountOption) -> Self {
        self.0.insert(opt);
        self
    }

    #[must_use]
    pub fn contains(&self, opt: MountOption) -> bool {
        self.0.contains(&opt)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = MountOption> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<MountOption> for OptionSet {
    fn from_iter<I: IntoIterator<Item = MountOption>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
