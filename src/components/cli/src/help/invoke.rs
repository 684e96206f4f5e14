use super::HelpCommand;
use crate::{Invoke, Outcome};
use indoc::indoc;

pub(crate) const USAGE: &str = indoc! {"
    usage: aligncheck [OPTIONS] [MANIFEST...]

    Reports records whose fields could be reordered to take up less memory.
    Each MANIFEST is a JSON layout manifest (default: layout.json).

    options:
      -v, --verbose        show the recommended field order for each record
      --x86_64, --aarch64  check for a 64-bit architecture
      --x86, --arm         check for a 32-bit architecture
      --max-align N        cap alignment at N bytes (a power of two)
      -h, --help           show this message

    exit status: 0 if every record is optimally ordered, 1 if any record
    could be smaller, 2 if the manifests could not be checked
"};

impl Invoke for HelpCommand {
    fn invoke(self) -> Result<Outcome, ()> {
        print!("{}", USAGE);
        Ok(Outcome::Clean)
    }
}
