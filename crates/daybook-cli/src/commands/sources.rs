use serde::Serialize;

use daybook_core::{SourceDescriptor, SourceId};

use crate::cli::SourcesArgs;
use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct SourceStatus {
    id: SourceId,
    remote: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'static str>,
}

#[derive(Debug, Serialize)]
struct SourcesResponseData {
    sources: Vec<SourceStatus>,
}

pub fn run(args: &SourcesArgs) -> Result<CommandResult, CliError> {
    let sources = SourceDescriptor::all()
        .into_iter()
        .map(|descriptor| SourceStatus {
            id: descriptor.id,
            remote: descriptor.remote,
            description: args.verbose.then_some(descriptor.description),
        })
        .collect::<Vec<_>>();

    let data = serde_json::to_value(SourcesResponseData { sources })?;

    Ok(CommandResult::ok(data))
}
