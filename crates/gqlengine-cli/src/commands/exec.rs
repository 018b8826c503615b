use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::output_utils;
use anyhow::Context;
use gqlengine::ExecutionStrategy;
use gqlengine::Params;
use gqlengine::Schema;
use gqlengine::SchemaBuilder;
use gqlengine::Value;
use gqlengine::parser::ParseOptions;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, clap::Args)]
pub(crate) struct ExecCmd {
    #[arg(help="SDL file describing the schema.", long)]
    schema: PathBuf,

    #[arg(help="File holding the query document to execute.", long)]
    query: PathBuf,

    #[arg(help="JSON file holding an object of variable values.", long)]
    variables: Option<PathBuf>,

    #[arg(
        help="JSON file holding the root value. Fields are read from it by \
             name, since no custom resolvers are attached.",
        long,
    )]
    root_value: Option<PathBuf>,

    #[arg(help="Name of the operation to run.", long)]
    operation_name: Option<String>,

    #[arg(help="Resolve sibling query fields in parallel.", long)]
    parallel: bool,
}

impl ExecCmd {
    fn load_schema(&self) -> anyhow::Result<Schema> {
        let schema = SchemaBuilder::new()
            .load_file(&self.schema)
            .and_then(SchemaBuilder::build)
            .with_context(|| format!("failed to build the schema from {}", self.schema.display()))?;
        Ok(schema)
    }

    fn params(&self, schema: Arc<Schema>) -> anyhow::Result<Params> {
        let query = std::fs::read_to_string(&self.query)
            .with_context(|| format!("failed to read {}", self.query.display()))?;
        let mut params = Params::new(schema, query);

        if let Some(path) = &self.variables {
            let variables = match read_json(path)? {
                serde_json::Value::Object(variables) => variables,
                other => anyhow::bail!(
                    "expected {} to hold a JSON object of variables, found {other}",
                    path.display(),
                ),
            };
            params = params.with_variables(variables);
        }
        if let Some(path) = &self.root_value {
            params = params.with_root_value(Value::from(read_json(path)?));
        }
        if let Some(operation_name) = &self.operation_name {
            params = params.with_operation_name(operation_name);
        }
        if self.parallel {
            params = params.with_strategy(ExecutionStrategy::Parallel);
        }
        Ok(params)
    }

    fn log_complexity(&self, schema: &Schema, query: &str) {
        let Ok(document) = gqlengine::parser::parse(query, ParseOptions::default()) else {
            return;
        };
        match gqlengine::cost::query_complexity(schema, &document, self.operation_name.as_deref()) {
            Some(complexity) => log::debug!("query complexity: {complexity}"),
            None => log::debug!("query complexity: no operation selected"),
        }
    }
}

fn read_json(path: &Path) -> anyhow::Result<serde_json::Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("{} is not valid JSON", path.display()))
}

#[inherent::inherent]
impl RunnableCommand for ExecCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let loaded = self.load_schema()
            .map(Arc::new)
            .and_then(|schema| self.params(schema));
        let params = match loaded {
            Ok(params) => params,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} {e:#}",
                output_utils::RED_X,
            )),
        };
        self.log_complexity(&params.schema, &params.request_string);

        let result = gqlengine::graphql(params);
        let rendered = match serde_json::to_string_pretty(&result) {
            Ok(rendered) => rendered,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} failed to render the result: {e}",
                output_utils::RED_X,
            )),
        };
        if result.errors.is_empty() {
            CommandResult::stdout(format_args!("{rendered}"))
        } else {
            log::debug!("request finished with {} error(s)", result.errors.len());
            CommandResult::failed_stdout(format_args!("{rendered}"))
        }
    }
}
