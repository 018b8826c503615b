use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::graphql_files;
use crate::output_utils;
use gqlengine::SchemaBuilder;
use gqlengine::parser::ParseOptions;
use gqlengine::parser::Source;
use std::fmt::Write;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct ValidateCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more SDL files or directories containing SDL \
             files which together make up the schema.",
        long,
        num_args = 1..,
        required=true,
    )]
    schema: Vec<PathBuf>,

    #[arg(
        help="Query documents to validate against the schema.",
        name="QUERY_FILES",
    )]
    query_files: Vec<PathBuf>,
}

#[inherent::inherent]
impl RunnableCommand for ValidateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let exts = graphql_files::normalize_exts(&self.graphql_file_exts);
        let found = graphql_files::find(&self.schema, &exts);
        if !found.errors.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} Errors locating schema files: {:#?}",
                output_utils::RED_X,
                found.errors,
            ));
        }

        let schema = match SchemaBuilder::new()
            .load_files(&found.file_paths)
            .and_then(SchemaBuilder::build) {
            Ok(schema) => schema,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} Errors validating schema: {e}",
                output_utils::RED_X,
            )),
        };

        let mut report = String::new();
        let mut num_operations = 0;
        let mut num_invalid_files = 0;
        for query_file in &self.query_files {
            log::debug!("Validating {query_file:#?}...");
            let content = match std::fs::read_to_string(query_file) {
                Ok(content) => content,
                Err(e) => {
                    num_invalid_files += 1;
                    let _ = writeln!(report, "  * {}: {e}", query_file.display());
                    continue;
                },
            };
            let source = Source::with_name(content, query_file.display().to_string());
            let document = match gqlengine::parser::parse(source, ParseOptions::default()) {
                Ok(document) => document,
                Err(e) => {
                    num_invalid_files += 1;
                    let _ = writeln!(report, "{}", e.format_detailed());
                    continue;
                },
            };

            num_operations += document.operations().count();
            let errors = gqlengine::validate(&schema, &document);
            if errors.is_empty() {
                continue;
            }
            num_invalid_files += 1;
            for error in errors {
                let location = error.locations.first()
                    .map(|loc| format!(" ({}:{})", loc.line, loc.column))
                    .unwrap_or_default();
                let _ = writeln!(report, "  * {}{location}: {}", query_file.display(), error.message);
            }
        }

        if num_invalid_files > 0 {
            return CommandResult::stderr(format_args!(
                "{} {num_invalid_files} of {} query files failed validation:\n{}",
                output_utils::RED_X,
                self.query_files.len(),
                report.trim_end(),
            ));
        }

        CommandResult::stdout(format_args!(
            concat!(
                "{} All GraphQL validated successfully:\n",
                "  * Analyzed {} schema files.\n",
                "  * Skipped {} non-graphql files.\n",
                "  * Validated {} type definitions.\n",
                "  * Validated {} directive definitions.\n",
                "  * Validated {} operations.",
            ),
            output_utils::GREEN_CHECK,
            found.file_paths.len(),
            found.num_skipped,
            schema.type_map().len(),
            schema.directives().len(),
            num_operations,
        ))
    }
}
