use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libjson_parser::JsonParser;
use std::collections::HashSet;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct ValidateCmd {
    #[arg(
        default_values_t=["json".to_string()],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    json_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more JSON files or directories containing \
             JSON files which need to be validated.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

#[inherent::inherent]
impl RunnableCommand for ValidateCmd {
    pub fn run(self, _cli: Cli) -> CommandResult {
        let mut errors: Vec<String> = vec![];

        // Normalize the set of file extensions to filter with
        let json_file_exts: HashSet<String> =
            self.json_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_owned())
                .collect();

        // Find all JSON files recursively located at or under each path
        // passed as an arg.
        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut num_non_json_files = 0;
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true) {
                match entry {
                    Ok(entry) => {
                        let path = entry.path();
                        if entry.file_type().is_file() {
                            log::trace!("Found file at {path:#?}.");
                            if let Some(ext) = path.extension().map(|s| s.to_string_lossy())
                                && json_file_exts.contains(ext.as_ref()) {
                                file_paths.push(path.to_owned());
                            } else {
                                num_non_json_files += 1;
                            }
                        } else {
                            log::trace!("Skipping non-file: {path:#?}.");
                        }
                    },

                    Err(e) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        errors.push(e.to_string());
                        continue
                    },
                }
            }
        }

        // If the user specifies a single file path as an argument, presume
        // the user explicitly wants that file validated as JSON even if its
        // extension doesn't match one of the --json-file-exts.
        if file_paths.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file() {
            log::warn!(
                "Proceeding to validate {first_arg_path:#?} even though it \
                doesn't match any of the --json-file-exts ({}).",
                json_file_exts.iter()
                    .map(|ext| format!("`.{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            file_paths.push(first_arg_path.to_owned());
        }

        log::debug!("Found {} JSON files to be validated.", file_paths.len());

        // A whole-file validation: the document must consume every byte,
        // not just a prefix.
        for path in &file_paths {
            let contents = match std::fs::read(path) {
                Ok(contents) => contents,
                Err(e) => {
                    errors.push(format!("{}: {e}", path.display()));
                    continue;
                }
            };
            let parse_result = JsonParser::new(&contents)
                .reject_trailing_bytes()
                .parse();
            if let Err(e) = parse_result {
                errors.push(format!(
                    "{}:\n{}",
                    path.display(),
                    e.format_detailed(Some(&contents)),
                ));
            }
        }

        if !errors.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} JSON validation errors:\n\n{}",
                output_utils::RED_X,
                errors.join("\n"),
            ));
        }

        CommandResult::stdout(format_args!(
            concat!(
                "{} All JSON validated successfully:\n",
                "  * Analyzed {} files.\n",
                "  * Skipped {} non-json files.",
            ),
            output_utils::GREEN_CHECK,
            file_paths.len(),
            num_non_json_files,
        ))
    }
}
