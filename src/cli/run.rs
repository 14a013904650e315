//! `compile` and `render` commands.

use std::collections::HashMap;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use mdx_map::{Config, compile_report, debug, log, markdown::render_html};
use rayon::prelude::*;

use super::IoArgs;
use super::common::{Input, plural_count, write_output};

/// What to produce from each input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Markdown with map blocks replaced
    Compile,
    /// Compiled Markdown rendered to HTML
    Render,
}

impl Mode {
    fn extension(self) -> &'static str {
        match self {
            Self::Compile => "md",
            Self::Render => "html",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Compile => "compile",
            Self::Render => "render",
        }
    }
}

/// Run `compile` or `render` over the given inputs.
pub fn run(args: &IoArgs, config: &Config, mode: Mode) -> Result<()> {
    let inputs = Input::collect(&args.paths);

    match (&args.output, inputs.as_slice()) {
        (None, [input]) => {
            let output = process(input, config, mode)?;
            let mut stdout = io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
        (Some(target), [input]) if !target.is_dir() => {
            let output = process(input, config, mode)?;
            write_output(input, target, &output)
        }
        (None, _) => bail!(
            "{} given, use --output <DIR> to write them",
            plural_count(inputs.len(), "input")
        ),
        (Some(dir), _) => run_into_dir(&inputs, dir, config, mode),
    }
}

/// Compile every input in parallel into `dir`, reporting all failures.
fn run_into_dir(inputs: &[Input], dir: &Path, config: &Config, mode: Mode) -> Result<()> {
    let names = output_names(inputs, mode.extension())?;
    std::fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;

    let failures: Vec<_> = inputs
        .par_iter()
        .zip(names.par_iter())
        .filter_map(|(input, name)| {
            let target = dir.join(name);
            process(input, config, mode)
                .and_then(|output| write_output(input, &target, &output))
                .err()
                .map(|err| (input, err))
        })
        .collect();

    for (input, err) in &failures {
        log!("error"; "{}: {:#}", input, err);
    }

    let done = inputs.len() - failures.len();
    log!(mode.label(); "wrote {} to {}", plural_count(done, "file"), dir.display());

    if !failures.is_empty() {
        bail!("{} failed", plural_count(failures.len(), "file"));
    }
    Ok(())
}

/// Output file name of every input, refusing two inputs that share one.
fn output_names(inputs: &[Input], extension: &str) -> Result<Vec<PathBuf>> {
    let mut seen: HashMap<PathBuf, &Input> = HashMap::with_capacity(inputs.len());
    let mut names = Vec::with_capacity(inputs.len());

    for input in inputs {
        let name = input.output_name(extension);
        if let Some(first) = seen.insert(name.clone(), input) {
            bail!(
                "{} and {} would both be written to {}",
                first,
                input,
                name.display()
            );
        }
        names.push(name);
    }
    Ok(names)
}

/// Read, compile, and (for `render`) convert one input.
fn process(input: &Input, config: &Config, mode: Mode) -> Result<String> {
    let text = input.read()?;
    let compiled =
        compile_report(&text, config).with_context(|| format!("failed to compile {input}"))?;
    debug!(mode.label(); "{}: {}", input, plural_count(compiled.blocks, "map block"));

    Ok(match mode {
        Mode::Compile => compiled.text,
        Mode::Render => render_html(&compiled.text, &config.markdown),
    })
}
