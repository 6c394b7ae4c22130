use anyhow::Result;
use clap::Args;
use portal_lib::PortalClient;

use crate::output::{print_envelope, OutputFormat};

#[derive(Args)]
pub struct CalendarArgs {
    /// Academic year, e.g. 2026
    pub year: u16,
}

pub async fn run(args: &CalendarArgs, client: &PortalClient, format: &OutputFormat) -> Result<()> {
    let resp = client.academic_calendar(args.year).await?;
    print_envelope(&resp, format);
    Ok(())
}
