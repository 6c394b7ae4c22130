//! Admin resources: program allocations and access modules.

use anyhow::Result;
use clap::Args;
use portal_lib::validation::parse_payload;
use portal_lib::{AccessModuleQuery, PortalClient};

use crate::output::{print_envelope, OutputFormat};

#[derive(Args)]
pub struct AllocationsArgs {
    /// Create an allocation from a JSON object instead of listing
    #[arg(long, value_name = "JSON")]
    pub create: Option<String>,
}

#[derive(Args)]
pub struct AccessModulesArgs {
    /// Leave submodules out of the tree
    #[arg(long)]
    pub no_submodules: bool,

    /// Leave module entries out of the tree
    #[arg(long)]
    pub no_entries: bool,
}

pub async fn run_allocations(
    args: &AllocationsArgs,
    client: &PortalClient,
    format: &OutputFormat,
) -> Result<()> {
    let resp = match &args.create {
        Some(json) => {
            let payload = parse_payload(json)?;
            client.create_program_allocation(&payload).await?
        }
        None => client.program_allocations().await?,
    };
    print_envelope(&resp, format);
    Ok(())
}

pub async fn run_access_modules(
    args: &AccessModulesArgs,
    client: &PortalClient,
    format: &OutputFormat,
) -> Result<()> {
    let query = AccessModuleQuery::default()
        .with_submodules(!args.no_submodules)
        .with_entries(!args.no_entries);
    let resp = client.access_modules(&query).await?;
    print_envelope(&resp, format);
    Ok(())
}
