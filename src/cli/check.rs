//! `check` command: compile without writing.

use anyhow::{Result, bail};
use mdx_map::{Config, compile_report, log};
use rayon::prelude::*;
use std::path::PathBuf;

use super::common::{Input, plural_count};

/// Per-input outcome.
#[derive(Debug)]
pub struct CheckResult {
    pub input: Input,
    /// Map blocks compiled, or the error message.
    pub outcome: Result<usize, String>,
}

/// Compile every input and log a line per file.
pub fn check_files(paths: &[PathBuf], config: &Config) -> Result<()> {
    let results = check_inputs(&Input::collect(paths), config);

    let mut failed = 0;
    let mut blocks = 0;
    for result in &results {
        match &result.outcome {
            Ok(count) => {
                blocks += count;
                log!("check"; "{}: {}", result.input, plural_count(*count, "map block"));
            }
            Err(message) => {
                failed += 1;
                log!("error"; "{}: {}", result.input, message);
            }
        }
    }

    if failed > 0 {
        bail!(
            "{} of {} invalid",
            failed,
            plural_count(results.len(), "file")
        );
    }
    log!("check"; "{} ok, {} total", plural_count(results.len(), "file"), plural_count(blocks, "map block"));
    Ok(())
}

/// Compile inputs in parallel, keeping input order.
pub fn check_inputs(inputs: &[Input], config: &Config) -> Vec<CheckResult> {
    inputs
        .par_iter()
        .map(|input| {
            let outcome = input
                .read()
                .map_err(|err| format!("{err:#}"))
                .and_then(|text| {
                    compile_report(&text, config)
                        .map(|compiled| compiled.blocks)
                        .map_err(|err| err.to_string())
                });
            CheckResult {
                input: input.clone(),
                outcome,
            }
        })
        .collect()
}
