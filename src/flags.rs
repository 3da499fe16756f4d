//! Flag translation table: named options to kernel `MS_*` bits.
//!
//! Rules are applied in declared order and later rules win, so contradictory
//! options (`read-only` with `read-write`) resolve by table position.

use crate::types::{MountFlags, MountOption, OptionSet};

/// One translation rule: when `option` is present, set (`set == true`) or clear `bits`.
#[derive(Clone, Copy, Debug)]
pub struct Translation {
    pub option: MountOption,
    pub bits: u64,
    pub set: bool,
}

/// `mount(2)` only honours the low 32 bits; libc sign-extends `MS_NOUSER` on 64-bit targets.
const fn ms(bits: libc::c_ulong) -> u64 {
    bits as u32 as u64
}

const fn rule(option: MountOption, bits: libc::c_ulong, set: bool) -> Translation {
    Translation {
        option,
        bits: ms(bits),
        set,
    }
}

pub const TRANSLATIONS: &[Translation] = &[
    rule(MountOption::ReadOnly, libc::MS_RDONLY, true),
    rule(MountOption::ReadWrite, libc::MS_RDONLY, false),
    rule(MountOption::Suid, libc::MS_NOSUID, false),
    rule(MountOption::NoSuid, libc::MS_NOSUID, true),
    rule(MountOption::Dev, libc::MS_NODEV, false),
    rule(MountOption::NoDev, libc::MS_NODEV, true),
    rule(MountOption::Exec, libc::MS_NOEXEC, false),
    rule(MountOption::NoExec, libc::MS_NOEXEC, true),
    rule(MountOption::Synchronous, libc::MS_SYNCHRONOUS, true),
    rule(MountOption::NoSynchronous, libc::MS_SYNCHRONOUS, false),
    rule(MountOption::Remount, libc::MS_REMOUNT, true),
    rule(MountOption::Mand, libc::MS_MANDLOCK, true),
    rule(MountOption::NoMand, libc::MS_MANDLOCK, false),
    rule(MountOption::Dirsync, libc::MS_DIRSYNC, true),
    rule(MountOption::NoDirsync, libc::MS_DIRSYNC, false),
    rule(MountOption::Atime, libc::MS_NOATIME, false),
    rule(MountOption::NoAtime, libc::MS_NOATIME, true),
    rule(MountOption::Diratime, libc::MS_NODIRATIME, false),
    rule(MountOption::NoDiratime, libc::MS_NODIRATIME, true),
    rule(MountOption::Bind, libc::MS_BIND, true),
    rule(MountOption::Move, libc::MS_MOVE, true),
    rule(MountOption::Silent, libc::MS_SILENT, true),
    rule(MountOption::Loud, libc::MS_SILENT, false),
    rule(MountOption::Posixacl, libc::MS_POSIXACL, true),
    rule(MountOption::NoPosixacl, libc::MS_POSIXACL, false),
    rule(MountOption::Bindable, libc::MS_UNBINDABLE, false),
    rule(MountOption::Unbindable, libc::MS_UNBINDABLE, true),
    rule(MountOption::Private, libc::MS_PRIVATE, true),
    rule(MountOption::Slave, libc::MS_SLAVE, true),
    rule(MountOption::Shared, libc::MS_SHARED, true),
    rule(MountOption::Relatime, libc::MS_RELATIME, true),
    rule(MountOption::NoRelatime, libc::MS_RELATIME, false),
    rule(MountOption::Iversion, libc::MS_I_VERSION, true),
    rule(MountOption::NoIversion, libc::MS_I_VERSION, false),
    rule(MountOption::Strictatime, libc::MS_STRICTATIME, true),
    rule(MountOption::NoStrictatime, libc::MS_STRICTATIME, false),
];

/// Bits cleared by the `defaults` baseline: rw, suid, dev, exec, async.
pub const DEFAULTS_CLEAR: u64 = ms(libc::MS_RDONLY
    | libc::MS_NOSUID
    | libc::MS_NODEV
    | libc::MS_NOEXEC
    | libc::MS_SYNCHRONOUS);

/// Bits set by the `defaults` baseline: nouser.
pub const DEFAULTS_SET: u64 = ms(libc::MS_NOUSER);

/// Fold the translation table over `options` into a kernel bitmask.
///
/// With `defaults`, the baseline is read-write, suid, dev, exec, nouser, async
/// (async is the absence of `MS_SYNCHRONOUS`); otherwise the baseline is zero.
#[must_use]
pub fn translate(options: &OptionSet, defaults: bool) -> MountFlags {
    let mut flags = MountFlags::empty();
    if defaults {
        flags.clear(DEFAULTS_CLEAR);
        flags.set(DEFAULTS_SET);
    }
    for t in TRANSLATIONS {
        if options.contains(t.option) {
            if t.set {
                flags.set(t.bits);
            } else {
                flags.clear(t.bits);
            }
        }
    }
    flags
}
