use std::{
    io::{self, BufRead, Stdin, Stdout, Write},
    path::PathBuf,
};

use anyhow::{bail, Context, Result};

/// Line-oriented question/answer over any input and output stream.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<io::StdinLock<'static>, Stdout> {
    /// Prompt on the process's stdin/stdout.
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a line of output.
    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{line}").context("Failed to write to output")
    }

    /// Print `prompt` without a newline and read one answer line (without the line ending).
    /// End of input is an error.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}").context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush prompt")?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).context("Failed to read input")?;
        if read == 0 {
            bail!("Input closed while waiting for an answer to {:?}", prompt.trim());
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Ask for a path until the (trimmed) answer names something that exists.
    pub fn ask_existing_path(&mut self, prompt: &str) -> Result<PathBuf> {
        loop {
            let path = PathBuf::from(self.ask(prompt)?.trim());
            if path.exists() {
                return Ok(path);
            }
            self.say("File not found. Please check the path and try again.")?;
        }
    }

    /// Ask a yes/no question; "yes" and "y" (any case) confirm.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool> {
        let answer = self.ask(prompt)?.trim().to_lowercase();
        Ok(matches!(answer.as_str(), "yes" | "y"))
    }

    /// Give back the underlying output stream.
    pub fn into_output(self) -> W {
        self.output
    }
}
