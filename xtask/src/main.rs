use std::{
    fs,
    path::{Path, PathBuf},
    str,
    sync::Mutex,
};

use anyhow::{anyhow, Context};
use colored::Colorize;
use object::Object;
use once_cell::sync::Lazy;
use structopt::StructOpt;

mod targets;
mod utils;

use crate::utils::{run_capturing_stdout, run_command};

static ALL_ERRORS: Lazy<Mutex<Vec<String>>> = Lazy::new(|| Mutex::new(vec![]));

/// The entry point raw binders resolve instead of the variadic export.
const FORWARDER_EXPORT: &str = "opus_encoder_ctl_int";
/// The variadic entry point raw binders cannot call.
const VARIADIC_EXPORT: &str = "opus_encoder_ctl";

#[derive(Debug, StructOpt)]
struct Options {
    #[structopt(subcommand)]
    cmd: XtaskCommand,
    /// Treat compiler warnings as errors (`RUSTFLAGS="--deny warnings"`)
    #[structopt(long, short)]
    deny_warnings: bool,
    /// Keep target toolchains that were installed as dependency
    #[structopt(long, short)]
    keep_targets: bool,
}

#[derive(Debug, StructOpt)]
enum XtaskCommand {
    /// Build the staticlib for the browser-facing wasm target
    BuildWeb {
        /// Build with optimizations
        #[structopt(long)]
        release: bool,
    },
    /// Verify that a linked wasm module still exports the forwarder
    CheckExports {
        /// Path to the emcc-linked module
        module: PathBuf,
    },
    /// Run every check and test
    TestAll,
    /// Check and test the workspace on the host
    TestHost,
    /// Check the library on the wasm targets
    TestCross,
}

fn main() -> anyhow::Result<()> {
    let opt: Options = Options::from_args();
    let mut added_targets = None;

    match opt.cmd {
        XtaskCommand::CheckExports { module } => {
            do_test(|| check_exports(&module), "check-exports")
        }
        XtaskCommand::TestHost => test_host(opt.deny_warnings),

        // following commands build for the wasm targets
        cmd => {
            added_targets = Some(targets::install().expect("Error while installing required targets"));
            match cmd {
                XtaskCommand::BuildWeb { release } => do_test(|| build_web(release), "build-web"),
                XtaskCommand::TestCross => test_cross(),
                XtaskCommand::TestAll => {
                    test_host(opt.deny_warnings);
                    test_cross();
                }
                _ => unreachable!("get handled in outer `match`"),
            }
        }
    }

    if let Some(added_targets) = added_targets {
        if !opt.keep_targets && !added_targets.is_empty() {
            targets::uninstall(added_targets)
        }
    }

    let all_errors = ALL_ERRORS.lock().unwrap();
    if !all_errors.is_empty() {
        eprintln!();
        Err(anyhow!("😔 some steps failed: {:#?}", all_errors))
    } else {
        Ok(())
    }
}

fn do_test(test: impl FnOnce() -> anyhow::Result<()>, context: &str) {
    test().unwrap_or_else(|e| ALL_ERRORS.lock().unwrap().push(format!("{}: {}", context, e)));
}

fn build_web(release: bool) -> anyhow::Result<()> {
    println!("🔨 {}", targets::WEB_TARGET);

    let mut args = vec!["build", "-p", "opus-ctl", "--target", targets::WEB_TARGET];
    if release {
        args.push("--release");
    }
    run_command("cargo", &args, None, &[])?;

    // The archive the emcc link step consumes, next to libopus.a.
    let profile = if release { "release" } else { "debug" };
    println!("📦 target/{}/{}/libopus_ctl.a", targets::WEB_TARGET, profile);
    Ok(())
}

fn check_exports(module: &Path) -> anyhow::Result<()> {
    println!("🔎 {}", module.display());

    let bytes = fs::read(module).with_context(|| format!("Failed to read {}", module.display()))?;
    let file = object::File::parse(&*bytes)
        .with_context(|| format!("Failed to parse {} as a wasm module", module.display()))?;

    let mut names = vec![];
    for export in file.exports()? {
        names.push(str::from_utf8(export.name())?.to_string());
    }

    if !names.iter().any(|name| name == FORWARDER_EXPORT) {
        return Err(anyhow!(
            "'{}' is missing from the export section; keep '_{}' in EXPORTED_FUNCTIONS when linking",
            FORWARDER_EXPORT,
            FORWARDER_EXPORT
        ));
    }
    println!("✅ {} is exported", FORWARDER_EXPORT.bold());

    if names.iter().any(|name| name == VARIADIC_EXPORT) {
        println!(
            "⚠️  {} is exported as well; raw binders cannot call it and must keep resolving {}",
            VARIADIC_EXPORT, FORWARDER_EXPORT
        );
    }

    Ok(())
}

fn test_host(deny_warnings: bool) {
    println!("🧪 host");

    let env = if deny_warnings {
        vec![("RUSTFLAGS", "--deny warnings")]
    } else {
        vec![]
    };

    do_test(
        || run_command("cargo", &["check", "--workspace"], None, &env),
        "host",
    );

    do_test(
        || run_command("cargo", &["test", "--workspace"], None, &[]),
        "host",
    );
}

fn test_cross() {
    println!("🧪 cross");

    for target in targets::REQUIRED {
        do_test(
            || run_command("cargo", &["check", "--target", target, "-p", "opus-ctl"], None, &[]),
            "cross",
        );
    }
}
