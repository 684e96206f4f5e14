use data_units::ByteUnits;
use target::Target;
use target_layout::StdSizes;

#[derive(Clone, Debug)]
pub struct CheckOptions {
    pub verbose: bool,
    pub target: Target,
    pub max_alignment: Option<ByteUnits>,
}

impl CheckOptions {
    pub fn sizes(&self) -> StdSizes {
        let sizes = StdSizes::for_target(&self.target);

        match self.max_alignment {
            Some(max_alignment) => sizes.with_max_alignment(max_alignment),
            None => sizes,
        }
    }
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            verbose: false,
            target: Target::HOST,
            max_alignment: None,
        }
    }
}
