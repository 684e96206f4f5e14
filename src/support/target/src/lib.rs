mod arch;
mod display;

pub use arch::TargetArch;
pub use display::IntoDisplay;
use std::fmt::Display;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Target {
    arch: Option<TargetArch>,
}

impl Target {
    pub const HOST: Self = Self::new(TargetArch::HOST);

    pub const fn new(arch: Option<TargetArch>) -> Self {
        Self { arch }
    }

    pub fn arch(&self) -> Option<TargetArch> {
        self.arch
    }

    pub fn with_arch(self, arch: TargetArch) -> Self {
        Self { arch: Some(arch) }
    }

    /// Width of a pointer in bytes, guessing 64-bit for unknown architectures.
    pub fn pointer_width(&self) -> u64 {
        match self.arch {
            Some(TargetArch::X86 | TargetArch::Arm) => 4,
            Some(TargetArch::X86_64 | TargetArch::Aarch64) | None => 8,
        }
    }
}

impl Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.arch.display().fmt(f)
    }
}

#[test]
fn test_pointer_width() {
    let x86_64 = Target::new(Some(TargetArch::X86_64));
    assert_eq!(x86_64.pointer_width(), 8);
    assert_eq!(x86_64.with_arch(TargetArch::Arm).pointer_width(), 4);
    assert_eq!(Target::new(None).pointer_width(), 8);
}

#[test]
fn test_display() {
    assert_eq!(Target::new(Some(TargetArch::Aarch64)).to_string(), "aarch64");
    assert_eq!(Target::new(None).to_string(), "unknown");
}
