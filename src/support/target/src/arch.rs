use std::fmt::Display;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TargetArch {
    X86_64,
    Aarch64,
    X86,
    Arm,
}

impl TargetArch {
    pub const HOST: Option<Self> = if cfg!(target_arch = "x86_64") {
        Some(TargetArch::X86_64)
    } else if cfg!(target_arch = "aarch64") {
        Some(TargetArch::Aarch64)
    } else if cfg!(target_arch = "x86") {
        Some(TargetArch::X86)
    } else if cfg!(target_arch = "arm") {
        Some(TargetArch::Arm)
    } else {
        None
    };
}

impl Display for TargetArch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TargetArch::X86_64 => write!(f, "x86_64"),
            TargetArch::Aarch64 => write!(f, "aarch64"),
            TargetArch::X86 => write!(f, "x86"),
            TargetArch::Arm => write!(f, "arm"),
        }
    }
}
