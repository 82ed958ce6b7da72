#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` is the thin command-line front-end for the srckit workspace. It
//! recognises three subcommands, `tree`, `migrate`, and `export`, plus the
//! global `--help`/`-h`, `--version`/`-V`, and `--verbose`/`-v` switches, and
//! delegates the actual work to the [`tree`], [`migrate`], and [`export`]
//! crates.
//!
//! # Design
//!
//! The crate exposes [`run`] as the primary entry point. The function accepts
//! an iterator of arguments together with handles for standard output and
//! error, so tests can drive the full surface with in-memory buffers. Help
//! and version banners are the only payloads written to standard output;
//! everything else is rendered as [`core::Message`] diagnostics through a
//! [`logging::MessageSink`] on standard error.
//!
//! # Invariants
//!
//! - [`run`] never panics; failures surface as non-zero exit codes.
//! - Exit codes follow [`core::ExitCode`]: `0` for completed runs, including
//!   runs that skipped individual files, `1` for argument problems, `2` for
//!   configuration problems such as a missing root.
//! - Version output is delegated to [`core::version`] so every entry point
//!   reports the same banner.
//!
//! # Errors
//!
//! Argument parsing failures are reported with exit code `1`. Tool failures
//! carry exit code `2` together with the tool error rendered into the
//! diagnostic.
//!
//! # Examples
//!
//! ```
//! use cli::run;
//!
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let exit_code = run(["srckit", "--version"], &mut stdout, &mut stderr);
//!
//! assert_eq!(exit_code, 0);
//! assert!(!stdout.is_empty());
//! assert!(stderr.is_empty());
//! ```

use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use core::version::{PROGRAM_NAME, version_banner};
use core::{ExitCode, Message, srckit_error, srckit_info, srckit_warning};
use export::{ExportConfig, Exporter};
use filters::{SkipSubstrings, SuffixSet};
use logging::{MessageSink, init_tracing};
use migrate::{Mapping, MigrationConfig, MigrationReport, Migrator};
use tree::{TreeConfig, TreeRenderer};

/// Maximum exit code representable by a Unix process.
const MAX_EXIT_CODE: i32 = u8::MAX as i32;

/// Deterministic help text describing the full CLI surface.
const HELP_TEXT: &str = concat!(
    "srckit ",
    env!("CARGO_PKG_VERSION"),
    "\n",
    "https://github.com/ellan-top/srckit\n",
    "\n",
    "Usage: srckit [-v]... <COMMAND> [ARGS]\n",
    "\n",
    "Standalone housekeeping tools for source trees:\n",
    "\n",
    "  tree [ROOT]            Write an annotated directory snapshot into ROOT.\n",
    "      --output FILE      Snapshot file name (default: project_tree.txt).\n",
    "      --max-depth N      Deepest listed level (default: 15).\n",
    "\n",
    "  migrate ROOT --map OLD=NEW [--map OLD=NEW]...\n",
    "                         Relocate package directories under ROOT and\n",
    "                         rewrite package references near it.\n",
    "      --base-package PKG Package prefix for derived names\n",
    "                         (default: top.ellan.ecobridge).\n",
    "      --ext SUFFIX       Rewrite files with SUFFIX, repeatable\n",
    "                         (default: .java).\n",
    "      --descriptor FILE  Descriptor to flag for a manual check.\n",
    "  -n, --dry-run          Report planned changes without applying them.\n",
    "\n",
    "  export [ROOT]          Concatenate comment-stripped sources into one\n",
    "                         dump file.\n",
    "      --output FILE      Dump file name (default: exported_code.txt).\n",
    "      --ext SUFFIX       Collect files with SUFFIX, repeatable.\n",
    "      --skip SUBSTRING   Skip directories whose relative path contains\n",
    "                         SUBSTRING, repeatable.\n",
    "\n",
    "Global options:\n",
    "  -v, --verbose          Increase trace detail on stderr (repeatable).\n",
    "  -h, --help             Show this help message and exit.\n",
    "  -V, --version          Output version information and exit.\n",
    "\n",
    "Snapshots and dumps are written inside ROOT. Progress and warnings go\n",
    "to standard error; standard output stays clean.\n",
);

/// Parsed invocation produced by [`parse_args`].
#[derive(Debug)]
struct ParsedArgs {
    show_help: bool,
    show_version: bool,
    verbose: u8,
    command: Option<ToolCommand>,
}

#[derive(Debug)]
enum ToolCommand {
    Tree(TreeArgs),
    Migrate(MigrateArgs),
    Export(ExportArgs),
}

#[derive(Debug)]
struct TreeArgs {
    root: PathBuf,
    output: Option<String>,
    max_depth: Option<usize>,
}

#[derive(Debug)]
struct MigrateArgs {
    root: PathBuf,
    maps: Vec<String>,
    base_package: Option<String>,
    suffixes: Vec<String>,
    descriptor: Option<PathBuf>,
    dry_run: bool,
}

#[derive(Debug)]
struct ExportArgs {
    root: PathBuf,
    output: Option<String>,
    suffixes: Vec<String>,
    skips: Vec<String>,
}

/// Builds the `clap` command used for parsing.
fn clap_command() -> Command {
    Command::new(PROGRAM_NAME)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg_required_else_help(false)
        .arg(
            Arg::new("help")
                .long("help")
                .short('h')
                .help("Show this help message and exit.")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("version")
                .long("version")
                .short('V')
                .help("Output version information and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase trace detail on stderr.")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("tree")
                .about("Write an annotated directory snapshot into the root")
                .disable_help_flag(true)
                .arg(
                    Arg::new("root")
                        .value_name("ROOT")
                        .value_parser(value_parser!(PathBuf)),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .value_name("FILE")
                        .help("Snapshot file name inside the root.")
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("max-depth")
                        .long("max-depth")
                        .value_name("N")
                        .help("Deepest listed level below the root.")
                        .value_parser(value_parser!(usize))
                        .action(ArgAction::Set),
                ),
        )
        .subcommand(
            Command::new("migrate")
                .about("Relocate package directories and rewrite references")
                .disable_help_flag(true)
                .arg(
                    Arg::new("root")
                        .value_name("ROOT")
                        .value_parser(value_parser!(PathBuf))
                        .required(true),
                )
                .arg(
                    Arg::new("map")
                        .long("map")
                        .value_name("OLD=NEW")
                        .help("Relocation mapping relative to the root.")
                        .action(ArgAction::Append)
                        .required(true),
                )
                .arg(
                    Arg::new("base-package")
                        .long("base-package")
                        .value_name("PKG")
                        .help("Package prefix for derived replacement strings.")
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("ext")
                        .long("ext")
                        .value_name("SUFFIX")
                        .help("File suffix whose references get rewritten.")
                        .action(ArgAction::Append),
                )
                .arg(
                    Arg::new("descriptor")
                        .long("descriptor")
                        .value_name("FILE")
                        .help("Plugin descriptor to flag for a manual check.")
                        .value_parser(value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("dry-run")
                        .long("dry-run")
                        .short('n')
                        .help("Report planned changes without applying them.")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Concatenate comment-stripped sources into one dump")
                .disable_help_flag(true)
                .arg(
                    Arg::new("root")
                        .value_name("ROOT")
                        .value_parser(value_parser!(PathBuf)),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .value_name("FILE")
                        .help("Dump file name inside the root.")
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("ext")
                        .long("ext")
                        .value_name("SUFFIX")
                        .help("File suffix to collect.")
                        .action(ArgAction::Append),
                )
                .arg(
                    Arg::new("skip")
                        .long("skip")
                        .value_name("SUBSTRING")
                        .help("Skip directories whose relative path contains this.")
                        .action(ArgAction::Append),
                ),
        )
}

fn parse_args<I, S>(arguments: I) -> Result<ParsedArgs, clap::Error>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut args: Vec<OsString> = arguments.into_iter().map(Into::into).collect();

    if args.is_empty() {
        args.push(OsString::from(PROGRAM_NAME));
    }

    let mut matches = clap_command().try_get_matches_from(args)?;

    let mut show_help = matches.get_flag("help");
    let show_version = matches.get_flag("version");
    let mut verbose = matches.get_count("verbose");

    let command = match matches.remove_subcommand() {
        Some((name, mut sub)) => {
            show_help = show_help || sub.get_flag("help");
            verbose = verbose.max(sub.get_count("verbose"));
            tool_command(&name, &mut sub)
        }
        None => None,
    };

    Ok(ParsedArgs {
        show_help,
        show_version,
        verbose,
        command,
    })
}

fn tool_command(name: &str, sub: &mut ArgMatches) -> Option<ToolCommand> {
    match name {
        "tree" => Some(ToolCommand::Tree(TreeArgs {
            root: sub
                .remove_one::<PathBuf>("root")
                .unwrap_or_else(|| PathBuf::from(".")),
            output: sub.remove_one::<String>("output"),
            max_depth: sub.remove_one::<usize>("max-depth"),
        })),
        "migrate" => Some(ToolCommand::Migrate(MigrateArgs {
            root: sub
                .remove_one::<PathBuf>("root")
                .unwrap_or_else(|| PathBuf::from(".")),
            maps: sub
                .remove_many::<String>("map")
                .map(|values| values.collect())
                .unwrap_or_default(),
            base_package: sub.remove_one::<String>("base-package"),
            suffixes: sub
                .remove_many::<String>("ext")
                .map(|values| values.collect())
                .unwrap_or_default(),
            descriptor: sub.remove_one::<PathBuf>("descriptor"),
            dry_run: sub.get_flag("dry-run"),
        })),
        "export" => Some(ToolCommand::Export(ExportArgs {
            root: sub
                .remove_one::<PathBuf>("root")
                .unwrap_or_else(|| PathBuf::from(".")),
            output: sub.remove_one::<String>("output"),
            suffixes: sub
                .remove_many::<String>("ext")
                .map(|values| values.collect())
                .unwrap_or_default(),
            skips: sub
                .remove_many::<String>("skip")
                .map(|values| values.collect())
                .unwrap_or_default(),
        })),
        _ => None,
    }
}

/// Writes a [`Message`] to the sink, falling back to plain output when the
/// formatted write fails.
fn emit<W: Write>(sink: &mut MessageSink<W>, message: &Message) {
    if sink.write(message).is_err() {
        let _ = writeln!(sink.get_mut(), "{message}");
    }
}

/// Runs the CLI using the provided argument iterator and output handles.
///
/// The function returns the process exit code that should be used by the
/// caller. Help and version banners are written to `stdout`; diagnostics are
/// rendered to `stderr` through a [`MessageSink`].
pub fn run<I, S, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    Out: Write,
    Err: Write,
{
    let mut sink = MessageSink::new(stderr);

    match parse_args(arguments) {
        Ok(parsed) => execute(parsed, stdout, &mut sink),
        Err(error) => {
            let message = srckit_error!(ExitCode::Usage.as_i32(), "{error}");
            emit(&mut sink, &message);
            ExitCode::Usage.as_i32()
        }
    }
}

fn execute<Out, Err>(parsed: ParsedArgs, stdout: &mut Out, sink: &mut MessageSink<Err>) -> i32
where
    Out: Write,
    Err: Write,
{
    if parsed.show_help {
        if stdout.write_all(HELP_TEXT.as_bytes()).is_err() {
            return ExitCode::Usage.as_i32();
        }
        return ExitCode::Ok.as_i32();
    }

    if parsed.show_version {
        if stdout.write_all(version_banner().as_bytes()).is_err() {
            return ExitCode::Usage.as_i32();
        }
        return ExitCode::Ok.as_i32();
    }

    init_tracing(parsed.verbose);

    let Some(command) = parsed.command else {
        let message = srckit_error!(
            ExitCode::Usage.as_i32(),
            "missing command: expected tree, migrate, or export"
        );
        emit(sink, &message);
        return ExitCode::Usage.as_i32();
    };

    match command {
        ToolCommand::Tree(args) => run_tree(args, sink),
        ToolCommand::Migrate(args) => run_migrate(args, sink),
        ToolCommand::Export(args) => run_export(args, sink),
    }
}

fn run_tree<W: Write>(args: TreeArgs, sink: &mut MessageSink<W>) -> i32 {
    let mut config = TreeConfig::new(args.root);
    if let Some(output) = args.output {
        config = config.with_output_file(output);
    }
    if let Some(max_depth) = args.max_depth {
        config = config.with_max_depth(max_depth);
    }

    match TreeRenderer::new(config).write() {
        Ok(report) => {
            emit(
                sink,
                &srckit_info!(
                    "wrote {} entries to {}",
                    report.entries(),
                    report.output_path().display()
                ),
            );
            ExitCode::Ok.as_i32()
        }
        Err(error) => {
            emit(sink, &srckit_error!(ExitCode::Config.as_i32(), "{error}"));
            ExitCode::Config.as_i32()
        }
    }
}

fn run_migrate<W: Write>(args: MigrateArgs, sink: &mut MessageSink<W>) -> i32 {
    let mut config = MigrationConfig::new(args.root).with_dry_run(args.dry_run);
    if let Some(base_package) = args.base_package {
        config = config.with_base_package(base_package);
    }
    if !args.suffixes.is_empty() {
        config = config.with_suffixes(SuffixSet::new(args.suffixes));
    }
    if let Some(descriptor) = args.descriptor {
        config = config.with_descriptor(descriptor);
    }

    for spec in &args.maps {
        match Mapping::parse(spec) {
            Ok(mapping) => config = config.with_mapping(mapping),
            Err(error) => {
                emit(sink, &srckit_error!(ExitCode::Config.as_i32(), "{error}"));
                return ExitCode::Config.as_i32();
            }
        }
    }

    match Migrator::new(config).run() {
        Ok(report) => {
            render_migration(&report, sink);
            ExitCode::Ok.as_i32()
        }
        Err(error) => {
            emit(sink, &srckit_error!(ExitCode::Config.as_i32(), "{error}"));
            ExitCode::Config.as_i32()
        }
    }
}

fn render_migration<W: Write>(report: &MigrationReport, sink: &mut MessageSink<W>) {
    for module in report.migrated() {
        emit(
            sink,
            &srckit_info!(
                "migrated module {} -> {} ({} files)",
                module.from(),
                module.to(),
                module.moved_files()
            ),
        );
    }
    for skipped in report.skipped_sources() {
        emit(
            sink,
            &srckit_warning!("mapping source {skipped} does not exist, skipped"),
        );
    }
    for leftover in report.leftovers() {
        emit(
            sink,
            &srckit_warning!("left behind {}", leftover.display()),
        );
    }
    for failure in report.failures() {
        emit(sink, &srckit_warning!("{failure}"));
    }

    emit(
        sink,
        &srckit_info!(
            "corrected references in {} files",
            report.rewritten().len()
        ),
    );

    if let Some(descriptor) = report.descriptor_reminder() {
        emit(
            sink,
            &srckit_info!(
                "check the main class path in {} by hand",
                descriptor.display()
            ),
        );
    }
    if report.dry_run() {
        emit(sink, &srckit_info!("dry run: no changes were applied"));
    }
}

fn run_export<W: Write>(args: ExportArgs, sink: &mut MessageSink<W>) -> i32 {
    let mut config = ExportConfig::new(args.root);
    if let Some(output) = args.output {
        config = config.with_output_file(output);
    }
    if !args.suffixes.is_empty() {
        config = config.with_suffixes(SuffixSet::new(args.suffixes).fold_case());
    }
    if !args.skips.is_empty() {
        config = config.with_skip(SkipSubstrings::new(args.skips));
    }

    match Exporter::new(config).run() {
        Ok(report) => {
            for failure in report.failures() {
                emit(sink, &srckit_warning!("{failure}"));
            }
            emit(
                sink,
                &srckit_info!(
                    "exported {} files to {}",
                    report.exported().len(),
                    report.output_path().display()
                ),
            );
            ExitCode::Ok.as_i32()
        }
        Err(error) => {
            emit(sink, &srckit_error!(ExitCode::Config.as_i32(), "{error}"));
            ExitCode::Config.as_i32()
        }
    }
}

/// Converts a numeric exit code into an [`std::process::ExitCode`].
#[must_use]
pub fn exit_code_from(status: i32) -> std::process::ExitCode {
    let clamped = status.clamp(0, MAX_EXIT_CODE);
    std::process::ExitCode::from(clamped as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn os_args(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    #[test]
    fn version_flag_prints_the_banner_to_stdout() {
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();

        let code = run(os_args(&["srckit", "--version"]), &mut stdout, &mut stderr);

        assert_eq!(code, 0);
        let text = String::from_utf8(stdout).expect("stdout is UTF-8");
        assert!(text.starts_with("srckit "));
        assert!(text.contains("https://github.com/ellan-top/srckit"));
        assert!(stderr.is_empty());
    }

    #[test]
    fn help_flag_prints_the_static_text() {
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();

        let code = run(os_args(&["srckit", "-h"]), &mut stdout, &mut stderr);

        assert_eq!(code, 0);
        assert_eq!(stdout, HELP_TEXT.as_bytes());
        assert!(stderr.is_empty());
    }

    #[test]
    fn help_flag_works_after_a_subcommand() {
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();

        let code = run(os_args(&["srckit", "tree", "-h"]), &mut stdout, &mut stderr);

        assert_eq!(code, 0);
        assert_eq!(stdout, HELP_TEXT.as_bytes());
    }

    #[test]
    fn missing_command_is_a_usage_error() {
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();

        let code = run(os_args(&["srckit"]), &mut stdout, &mut stderr);

        assert_eq!(code, 1);
        assert!(stdout.is_empty());
        let text = String::from_utf8(stderr).expect("stderr is UTF-8");
        assert!(text.contains("srckit error:"));
        assert!(text.contains("missing command"));
    }

    #[test]
    fn unknown_flags_are_usage_errors() {
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();

        let code = run(
            os_args(&["srckit", "--definitely-bogus"]),
            &mut stdout,
            &mut stderr,
        );

        assert_eq!(code, 1);
        assert!(stdout.is_empty());
        assert!(!stderr.is_empty());
    }

    #[test]
    fn parse_args_reads_tree_defaults() {
        let parsed = parse_args(os_args(&["srckit", "tree"])).expect("parse");

        match parsed.command {
            Some(ToolCommand::Tree(args)) => {
                assert_eq!(args.root, PathBuf::from("."));
                assert!(args.output.is_none());
                assert!(args.max_depth.is_none());
            }
            other => panic!("expected tree command, got {other:?}"),
        }
    }

    #[test]
    fn parse_args_collects_migrate_mappings() {
        let parsed = parse_args(os_args(&[
            "srckit",
            "migrate",
            "java/root",
            "--map",
            "a=b",
            "--map",
            "c=d",
            "-n",
        ]))
        .expect("parse");

        match parsed.command {
            Some(ToolCommand::Migrate(args)) => {
                assert_eq!(args.root, PathBuf::from("java/root"));
                assert_eq!(args.maps, ["a=b".to_owned(), "c=d".to_owned()]);
                assert!(args.dry_run);
            }
            other => panic!("expected migrate command, got {other:?}"),
        }
    }

    #[test]
    fn verbose_occurrences_accumulate() {
        let parsed = parse_args(os_args(&["srckit", "tree", "-v", "-v"])).expect("parse");

        assert_eq!(parsed.verbose, 2);
    }

    #[test]
    fn tree_run_writes_a_snapshot() {
        let temp = tempfile::tempdir().expect("tempdir");
        let root = temp.path().join("demo");
        fs::create_dir(&root).expect("mkdir");
        fs::write(root.join("keep.txt"), b"x").expect("write");

        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let mut args = os_args(&["srckit", "tree"]);
        args.push(root.clone().into_os_string());

        let code = run(args, &mut stdout, &mut stderr);

        assert_eq!(code, 0);
        assert!(stdout.is_empty());
        assert!(root.join("project_tree.txt").is_file());
        let text = String::from_utf8(stderr).expect("stderr is UTF-8");
        assert!(text.contains("srckit info: wrote"));
    }

    #[test]
    fn tree_run_with_missing_root_is_a_config_error() {
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();

        let code = run(
            os_args(&["srckit", "tree", "/definitely/not/here"]),
            &mut stdout,
            &mut stderr,
        );

        assert_eq!(code, 2);
        let text = String::from_utf8(stderr).expect("stderr is UTF-8");
        assert!(text.contains("srckit error:"));
        assert!(text.contains("(code 2)"));
    }

    #[test]
    fn migrate_run_moves_and_reports() {
        let temp = tempfile::tempdir().expect("tempdir");
        let root = temp.path().join("java/top/ellan/ecobridge");
        fs::create_dir_all(root.join("model")).expect("mkdir");
        fs::write(
            root.join("model/Item.java"),
            "package top.ellan.ecobridge.model;\n",
        )
        .expect("write");

        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let mut args = os_args(&["srckit", "migrate"]);
        args.push(root.clone().into_os_string());
        args.extend(os_args(&["--map", "model=domain/model"]));

        let code = run(args, &mut stdout, &mut stderr);

        assert_eq!(code, 0);
        assert!(root.join("domain/model/Item.java").is_file());
        let text = String::from_utf8(stderr).expect("stderr is UTF-8");
        assert!(text.contains("migrated module model -> domain/model (1 files)"));
        assert!(text.contains("corrected references in 1 files"));
    }

    #[test]
    fn migrate_with_a_bad_mapping_is_a_config_error() {
        let temp = tempfile::tempdir().expect("tempdir");

        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let mut args = os_args(&["srckit", "migrate"]);
        args.push(temp.path().to_path_buf().into_os_string());
        args.extend(os_args(&["--map", "broken"]));

        let code = run(args, &mut stdout, &mut stderr);

        assert_eq!(code, 2);
        let text = String::from_utf8(stderr).expect("stderr is UTF-8");
        assert!(text.contains("not of the form OLD=NEW"));
    }

    #[test]
    fn export_run_writes_the_dump() {
        let temp = tempfile::tempdir().expect("tempdir");
        let root = temp.path().join("demo");
        fs::create_dir(&root).expect("mkdir");
        fs::write(root.join("lib.rs"), "fn lib() {} // note\n").expect("write");

        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let mut args = os_args(&["srckit", "export"]);
        args.push(root.clone().into_os_string());

        let code = run(args, &mut stdout, &mut stderr);

        assert_eq!(code, 0);
        let dump = fs::read_to_string(root.join("exported_code.txt")).expect("read dump");
        assert!(dump.contains("FILE: lib.rs"));
        assert!(dump.contains("fn lib() {}"));
        let text = String::from_utf8(stderr).expect("stderr is UTF-8");
        assert!(text.contains("exported 1 files"));
    }

    #[test]
    fn exit_codes_clamp_into_the_unix_range() {
        assert_eq!(exit_code_from(0), std::process::ExitCode::from(0));
        assert_eq!(exit_code_from(-4), std::process::ExitCode::from(0));
        assert_eq!(exit_code_from(300), std::process::ExitCode::from(255));
    }
}
