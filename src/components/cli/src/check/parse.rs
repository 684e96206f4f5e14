use super::{CheckCommand, CheckOptions};
use data_units::ByteUnits;
use std::path::PathBuf;
use target::TargetArch;

pub const DEFAULT_MANIFEST: &str = "layout.json";

impl CheckCommand {
    pub fn parse(mut args: impl Iterator<Item = String>) -> Result<Self, ()> {
        let mut manifests = vec![];
        let mut options = CheckOptions::default();

        while let Some(option) = args.next() {
            match option.as_str() {
                "-v" | "--verbose" => options.verbose = true,
                "--x86_64" => options.target = options.target.with_arch(TargetArch::X86_64),
                "--aarch64" => options.target = options.target.with_arch(TargetArch::Aarch64),
                "--x86" => options.target = options.target.with_arch(TargetArch::X86),
                "--arm" => options.target = options.target.with_arch(TargetArch::Arm),
                "--max-align" => {
                    let Some(value) = args.next() else {
                        eprintln!("error: Expected alignment after '--max-align'");
                        return Err(());
                    };

                    let Some(max_alignment) = value
                        .parse::<u64>()
                        .ok()
                        .map(ByteUnits::of)
                        .filter(ByteUnits::is_power_of_2)
                    else {
                        eprintln!(
                            "error: Maximum alignment must be a power of two, got '{}'",
                            value
                        );
                        return Err(());
                    };

                    options.max_alignment = Some(max_alignment);
                }
                "--" => {
                    manifests.extend(args.by_ref().map(PathBuf::from));
                }
                _ if option.starts_with('-') && option.len() > 1 => {
                    eprintln!("error: Unknown option '{}'", option);
                    return Err(());
                }
                _ => manifests.push(PathBuf::from(option)),
            }
        }

        if manifests.is_empty() {
            manifests.push(DEFAULT_MANIFEST.into());
        }

        Ok(Self { manifests, options })
    }
}
