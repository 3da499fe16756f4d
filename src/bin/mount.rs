//! `mount [OPTION]... [DEVICE [DIR]]`

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use log::Level;

use mountyard::api::errors::{exit_code_for, ApiError};
use mountyard::constants::AUTO_FSTYPE;
use mountyard::fs::CatalogKind;
use mountyard::logging::{AuditSink, LogFacts};
use mountyard::policy::Policy;
use mountyard::types::{Directive, MountOption, OptionSet, Resolution};
use mountyard::Mountyard;

/// Prints progress lines on stdout; anything above info goes to the logger.
struct Console;

impl AuditSink for Console {
    fn log(&self, level: Level, msg: &str) {
        if level == Level::Info {
            println!("{msg}");
        } else {
            log::log!(level, "{msg}");
        }
    }
}

fn cli() -> Command {
    let mut cmd = Command::new("mount")
        .about("activate a filesystem")
        .override_usage("mount [OPTION]... [DEVICE [DIR]]")
        .arg(
            Arg::new("fake")
                .long("fake")
                .action(ArgAction::SetTrue)
                .help("Describe the mount without performing it"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Report each successful mount"),
        )
        .arg(
            Arg::new("all")
                .short('a')
                .long("all")
                .action(ArgAction::SetTrue)
                .help("Mount every entry of the mount table"),
        )
        .arg(
            Arg::new("types")
                .short('t')
                .long("types")
                .value_name("FSTYPE[,...]")
                .default_value(AUTO_FSTYPE)
                .help("Filesystem type(s) to try, or auto"),
        )
        .arg(
            Arg::new("options")
                .short('o')
                .long("options")
                .value_name("FSOPT[,...]")
                .help("Filesystem specific options passed to the kernel"),
        )
        .arg(
            Arg::new("match")
                .long("match")
                .value_name("FSTYPE[,...]")
                .help("With --all, only mount entries of these types"),
        )
        .arg(
            Arg::new("defaults")
                .long("defaults")
                .action(ArgAction::SetTrue)
                .help("read-write, suid, dev, exec, auto, nouser, async"),
        )
        .arg(
            Arg::new("list-types")
                .long("list-types")
                .action(ArgAction::SetTrue)
                .help("List filesystem types known to the kernel"),
        )
        .arg(
            Arg::new("fstab")
                .long("fstab")
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .help("Alternative mount table"),
        )
        .arg(
            Arg::new("args")
                .value_name("DEVICE DIR")
                .num_args(0..)
                .action(ArgAction::Append),
        );
    for o in MountOption::ALL {
        let mut arg = Arg::new(o.name())
            .long(o.name())
            .action(ArgAction::SetTrue)
            .help(o.help());
        match o {
            MountOption::ReadOnly => arg = arg.short('r'),
            MountOption::ReadWrite => arg = arg.short('w'),
            _ => {}
        }
        cmd = cmd.arg(arg);
    }
    cmd
}

fn comma_list(s: &str) -> Vec<String> {
    s.split(',')
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

fn directive_from(m: &ArgMatches) -> Directive {
    let options: OptionSet = MountOption::ALL
        .into_iter()
        .filter(|o| m.get_flag(o.name()))
        .collect();
    Directive {
        args: m
            .get_many::<String>("args")
            .map(|v| v.cloned().collect())
            .unwrap_or_default(),
        all: m.get_flag("all"),
        fake: m.get_flag("fake"),
        verbose: m.get_flag("verbose"),
        defaults: m.get_flag("defaults"),
        fstype: m
            .get_one::<String>("types")
            .cloned()
            .unwrap_or_else(|| AUTO_FSTYPE.to_string()),
        data: m.get_one::<String>("options").cloned().unwrap_or_default(),
        match_types: m
            .get_one::<String>("match")
            .map(|s| comma_list(s))
            .unwrap_or_default(),
        options,
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let matches = cli().get_matches();

    let mut policy = Policy::from_env();
    if let Some(p) = matches.get_one::<PathBuf>("fstab") {
        policy.paths.fstab = p.clone();
    }
    let api = Mountyard::new(LogFacts, Console, policy);

    let mut out = std::io::stdout().lock();
    if matches.get_flag("list-types") {
        for t in api.filesystems(CatalogKind::All) {
            if writeln!(out, "{t}").is_err() {
                break;
            }
        }
        return ExitCode::SUCCESS;
    }

    match api.resolve(&directive_from(&matches)) {
        Ok(Resolution::Shown(mounts)) => {
            for m in mounts {
                if writeln!(out, "{m}").is_err() {
                    break;
                }
            }
            ExitCode::SUCCESS
        }
        Ok(Resolution::NotInTable(name)) => {
            eprintln!(
                "mount: {name}: not found in {}",
                api.policy().paths.fstab.display()
            );
            ExitCode::SUCCESS
        }
        Ok(Resolution::Mounted(_)) => ExitCode::SUCCESS,
        Err(e) => {
            if let ApiError::PartialListing { mounts, .. } = &e {
                for m in mounts {
                    if writeln!(out, "{m}").is_err() {
                        break;
                    }
                }
            }
            eprintln!("mount: {e}");
            ExitCode::from(u8::try_from(exit_code_for(e.id())).unwrap_or(1))
        }
    }
}
