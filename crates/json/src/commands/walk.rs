use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libjson_parser::JsonParser;
use libjson_parser::JsonValue;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct WalkCmd {
    #[arg(
        help="Path to a JSON file whose structure should be printed as \
             colon-separated paths.",
        name="FILE_PATH",
    )]
    file_path: PathBuf,
}

#[inherent::inherent]
impl RunnableCommand for WalkCmd {
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

        let element = match JsonParser::new(&contents).parse() {
            Ok(element) => element,
            Err(e) => {
                return CommandResult::stderr(format_args!(
                    "{} {}:\n{}",
                    output_utils::RED_X,
                    self.file_path.display(),
                    e.format_detailed(Some(&contents)),
                ));
            }
        };

        let mut output = String::new();
        walk("", element.value(), &mut output);
        CommandResult::stdout(format_args!("{}", output.trim_end()))
    }
}

/// Prints one line per container entry as a colon-separated path: member
/// keys for objects, item bytes for arrays. Scalars contribute no lines of
/// their own beyond the path that reached them.
fn walk(prefix: &str, value: &JsonValue<'_>, output: &mut String) {
    if let Some(members) = value.members() {
        for member in members {
            let key = String::from_utf8_lossy(
                member.key.string_bytes().unwrap_or_default(),
            )
            .into_owned();
            let path = format!("{prefix}:{key}");
            output.push_str(&path);
            output.push('\n');
            walk(&path, &member.value, output);
        }
    } else if let Some(elements) = value.elements() {
        for element in elements {
            let item = element.value();
            let path = format!(
                "{prefix}:{}",
                String::from_utf8_lossy(item.as_bytes()),
            );
            output.push_str(&path);
            output.push('\n');
            walk(&path, item, output);
        }
    }
}
