//! Build script for posixpath-cli.
//!
//! Generates the `posixpath.1` man page into OUT_DIR with clap_mangen.
//! The command structure is declared here because a build script cannot
//! depend on the crate it builds.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Keep in sync with src/cli.rs.
fn build_cli() -> Command {
    let path_arg = || Arg::new("path").value_name("PATH").required(true);

    Command::new("posixpath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Manipulate POSIX path strings")
        .long_about(
            "Split, join, parse and format POSIX path strings without touching the filesystem",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format: text, json or yaml")
                .value_name("FORMAT")
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Read configuration from this file instead of discovering posixpath.yaml")
                .value_name("FILE")
                .global(true),
        )
        .subcommands(vec![
            Command::new("basename")
                .about("Print the last component of a path")
                .arg(path_arg())
                .arg(Arg::new("suffix").long("suffix").short('s').value_name("SUFFIX")),
            Command::new("dirname")
                .about("Print the directory portion of a path")
                .arg(path_arg()),
            Command::new("extname")
                .about("Print the extension of a path")
                .arg(path_arg()),
            Command::new("join")
                .about("Join path segments")
                .arg(Arg::new("segment").value_name("SEGMENT").num_args(0..)),
            Command::new("parse")
                .about("Decompose a path into root, dir, base, name and ext")
                .arg(path_arg()),
            Command::new("format")
                .about("Build a path from its parts")
                .args(
                    [
                        ("root", "ROOT"),
                        ("dir", "DIR"),
                        ("base", "BASE"),
                        ("name", "NAME"),
                        ("ext", "EXT"),
                        ("json", "JSON"),
                    ]
                    .map(|(field, value)| Arg::new(field).long(field).value_name(value)),
                ),
            Command::new("constants").about("Print the separator and delimiter"),
            Command::new("modules")
                .about("List registered module names")
                .arg(Arg::new("check").long("check").value_name("NAME")),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(Arg::new("shell").value_name("SHELL").required(true)),
        ])
}

fn main() -> io::Result<()> {
    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "OUT_DIR is not set")
    })?);
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let mut buffer = Vec::new();
    Man::new(build_cli()).render(&mut buffer)?;
    fs::write(man_dir.join("posixpath.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
