//! Student portal resources: feedback forms and placements.

use anyhow::Result;
use clap::Args;
use portal_lib::validation::parse_payload;
use portal_lib::PortalClient;

use crate::output::{print_envelope, OutputFormat};

#[derive(Args)]
pub struct FeedbackArgs {
    /// Student ID whose open forms to list
    #[arg(required_unless_present = "submit")]
    pub student_id: Option<String>,

    /// Form ID to submit a response to
    #[arg(long, value_name = "FORM_ID", requires = "payload")]
    pub submit: Option<String>,

    /// Response body as a JSON object
    #[arg(long, value_name = "JSON")]
    pub payload: Option<String>,
}

#[derive(Args)]
pub struct PlacementsArgs {
    /// Student ID
    pub student_id: String,
}

pub async fn run_feedback(
    args: &FeedbackArgs,
    client: &PortalClient,
    format: &OutputFormat,
) -> Result<()> {
    let resp = match (&args.submit, &args.payload, &args.student_id) {
        (Some(form_id), Some(json), _) => {
            let payload = parse_payload(json)?;
            client.submit_feedback(form_id, &payload).await?
        }
        (None, _, Some(student_id)) => client.feedback_forms(student_id).await?,
        _ => anyhow::bail!("pass a student ID, or --submit with --payload"),
    };
    print_envelope(&resp, format);
    Ok(())
}

pub async fn run_placements(
    args: &PlacementsArgs,
    client: &PortalClient,
    format: &OutputFormat,
) -> Result<()> {
    let resp = client.placements(&args.student_id).await?;
    print_envelope(&resp, format);
    Ok(())
}
