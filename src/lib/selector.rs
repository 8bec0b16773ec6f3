//! Numbered terminal prompt for choosing one resource.

use std::io::{self, BufRead, Write};

use crate::dashboard::Resource;
use crate::lib::errors::OpenError;

const PROMPT_LABEL: &str = "Select a resource to open";
const MAX_ATTEMPTS: usize = 3;

/// Prompt on stderr and read the answer from stdin.
pub fn select_resource(resources: &[Resource]) -> Result<&Resource, OpenError> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stderr();
    select_resource_with(resources, &mut input, &mut output)
}

/// Run the prompt against explicit reader/writer handles.
///
/// A single resource is returned without prompting. Blank input or EOF
/// cancels; anything that is not a listed number re-prompts a few times.
pub fn select_resource_with<'r, R, W>(
    resources: &'r [Resource],
    input: &mut R,
    output: &mut W,
) -> Result<&'r Resource, OpenError>
where
    R: BufRead,
    W: Write,
{
    match resources {
        [] => return Err(OpenError::NoResources),
        [only] => return Ok(only),
        _ => {}
    }

    for (index, resource) in resources.iter().enumerate() {
        writeln!(output, "  {}) {}", index + 1, resource.display())?;
    }

    let max = resources.len();
    let mut last_input = String::new();
    for _ in 0..MAX_ATTEMPTS {
        write!(output, "{PROMPT_LABEL} [1-{max}]: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(OpenError::SelectionCancelled);
        }
        let answer = line.trim();
        if answer.is_empty() {
            return Err(OpenError::SelectionCancelled);
        }

        match answer.parse::<usize>() {
            Ok(choice) if (1..=max).contains(&choice) => return Ok(&resources[choice - 1]),
            _ => {
                writeln!(output, "Please enter a number between 1 and {max}.")?;
                last_input = answer.to_string();
            }
        }
    }

    Err(OpenError::InvalidSelection {
        input: last_input,
        max,
    })
}
