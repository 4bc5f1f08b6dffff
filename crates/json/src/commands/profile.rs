use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libjson_parser::JsonParser;
use std::path::PathBuf;
use std::time::Duration;
use std::time::Instant;

#[derive(Debug, clap::Args)]
pub(crate) struct ProfileCmd {
    #[arg(
        default_value_t = 20_000,
        help="Number of times to re-parse the file.",
        long,
    )]
    iterations: u64,

    #[arg(
        help="Path to a JSON file to parse repeatedly.",
        name="FILE_PATH",
    )]
    file_path: PathBuf,
}

#[inherent::inherent]
impl RunnableCommand for ProfileCmd {
    pub fn run(self, _cli: Cli) -> CommandResult {
        let contents = match std::fs::read(&self.file_path) {
            Ok(contents) => contents,
            Err(e) => {
                return CommandResult::stderr(format_args!(
                    "{} {}: {e}",
                    output_utils::RED_X,
                    self.file_path.display(),
                ));
            }
        };

        log::debug!(
            "Parsing {} ({} bytes) {} times...",
            self.file_path.display(),
            contents.len(),
            self.iterations,
        );

        let start = Instant::now();
        for _ in 0..self.iterations {
            if let Err(e) = JsonParser::new(&contents).parse() {
                return CommandResult::stderr(format_args!(
                    "{} {}:\n{}",
                    output_utils::RED_X,
                    self.file_path.display(),
                    e.format_detailed(Some(&contents)),
                ));
            }
        }
        let elapsed = start.elapsed();

        let per_iteration = per_iteration(elapsed, self.iterations);
        let mb_per_s = (contents.len() as f64 * self.iterations as f64)
            / elapsed.as_secs_f64()
            / (1024.0 * 1024.0);
        CommandResult::stdout(format_args!(
            concat!(
                "{} Parsed {} bytes x {} iterations:\n",
                "  * Total: {:?}\n",
                "  * Per iteration: {:?}\n",
                "  * Throughput: {:.1} MiB/s",
            ),
            output_utils::GREEN_CHECK,
            contents.len(),
            self.iterations,
            elapsed,
            per_iteration,
            mb_per_s,
        ))
    }
}

/// Average duration per iteration. Divides in f64 space; `Duration / u32`
/// would truncate iteration counts above `u32::MAX`.
fn per_iteration(elapsed: Duration, iterations: u64) -> Duration {
    elapsed.div_f64(iterations.max(1) as f64)
}
