use diagnostics::{Diagnostics, WarningDiagnostic};
use target::Target;
use target_layout::{StdSizes, TargetLayout};

pub fn warn_if_unsupported_target(target: &Target, sizes: &StdSizes, diagnostics: &Diagnostics) {
    if target.arch().is_none() {
        diagnostics.push(WarningDiagnostic::plain(format!(
            "Target architecture is not supported, assuming {}-byte words",
            sizes.word_size(),
        )));
    }

    if sizes.max_alignment() > sizes.word_size() {
        diagnostics.push(WarningDiagnostic::plain(format!(
            "Maximum alignment of {} bytes exceeds the {}-byte words of {}",
            sizes.max_alignment(),
            sizes.word_size(),
            target,
        )));
    }
}
