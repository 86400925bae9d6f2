//! Breed Prompt Module
//! Interactive breed selection against the loaded table.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};

use crate::data::RegistrationTable;

const PROMPT: &str = "Please enter a dog breed: ";
const NOT_FOUND: &str = "Dog breed not found in the data. Please try again.";

/// Prompt on stdin/stdout until the user names a breed present in `table`.
pub fn prompt_for_breed(table: &RegistrationTable) -> Result<String> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    read_breed_from(table, &mut stdin.lock(), &mut stdout.lock())
}

/// Core prompt loop, generic over the terminal handles so tests can drive
/// it with in-memory buffers.
///
/// Input is trimmed and upper-cased before the lookup; a mismatch (including
/// an empty line) re-prompts with no attempt limit. A closed input stream is
/// an error, since nobody is left to re-prompt.
fn read_breed_from(
    table: &RegistrationTable,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<String> {
    loop {
        write!(output, "{PROMPT}").context("failed to write breed prompt")?;
        output.flush().context("failed to flush breed prompt")?;

        let mut line = String::new();
        let bytes_read = input
            .read_line(&mut line)
            .context("failed to read breed input")?;
        if bytes_read == 0 {
            bail!("input closed before a known breed was entered");
        }

        let breed = line.trim().to_uppercase();
        if table.contains_breed(&breed) {
            return Ok(breed);
        }
        writeln!(output, "{NOT_FOUND}").context("failed to write retry message")?;
    }
}
