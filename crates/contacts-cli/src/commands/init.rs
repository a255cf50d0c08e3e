// crates/contacts-cli/src/commands/init.rs - Contact File Initialization
//
// `add` creates the file on demand, so `init` is optional. It exists for
// setting up a file up front, e.g. in a new directory or under a custom path.

use anyhow::Result;
use std::io::{BufRead, Write};

use contacts_core::StoreError;

use crate::context::Context;
use crate::prompt::Prompter;

/// Create an empty contact file containing only the header row
///
/// Never overwrites: an existing file is reported and left alone.
pub fn handle<R: BufRead, W: Write>(ctx: &Context, prompter: &mut Prompter<R, W>) -> Result<()> {
    match ctx.store.create() {
        Ok(()) => {
            prompter.say(format!(
                "✅ Created contact file: {}",
                ctx.store.path().display()
            ))?;
            prompter.say("")?;
            prompter.say("💡 Next steps:")?;
            prompter.say("   contacts add")?;
            prompter.say("   contacts read")?;
        }
        Err(StoreError::AlreadyExists(path)) => {
            prompter.say(format!("Contact file already exists: {}", path.display()))?;
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{doe_and_roe, file_content, seed, temp_context};
    use crate::prompt::testing::{scripted, transcript};

    #[test]
    fn test_creates_header_only_file() {
        let (_temp, ctx) = temp_context();
        let mut prompter = scripted("", 0);

        handle(&ctx, &mut prompter).unwrap();

        assert_eq!(
            file_content(&ctx),
            "number,last_name,first_name,middle_name,organization,work_phone,personal_phone\n"
        );
        assert!(transcript(prompter).contains("Created contact file"));
    }

    #[test]
    fn test_existing_file_is_left_alone() {
        let (_temp, ctx) = temp_context();
        seed(&ctx, &doe_and_roe());
        let before = file_content(&ctx);
        let mut prompter = scripted("", 0);

        handle(&ctx, &mut prompter).unwrap();

        assert_eq!(file_content(&ctx), before);
        assert!(transcript(prompter).contains("already exists"));
    }
}
