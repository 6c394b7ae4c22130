//! Teacher portal resources: profile, exams and HR tasks.

use anyhow::Result;
use clap::Args;
use portal_lib::validation::parse_payload;
use portal_lib::PortalClient;

use crate::output::{print_envelope, OutputFormat};

#[derive(Args)]
pub struct TeacherArgs {
    /// Teacher ID
    pub teacher_id: String,
}

#[derive(Args)]
pub struct TasksArgs {
    /// Teacher ID whose tasks to list
    #[arg(required_unless_present = "create")]
    pub teacher_id: Option<String>,

    /// Create a task from a JSON object instead of listing
    #[arg(long, value_name = "JSON")]
    pub create: Option<String>,
}

pub async fn run(args: &TeacherArgs, client: &PortalClient, format: &OutputFormat) -> Result<()> {
    let resp = client.teacher(&args.teacher_id).await?;
    print_envelope(&resp, format);
    Ok(())
}

pub async fn run_exams(
    args: &TeacherArgs,
    client: &PortalClient,
    format: &OutputFormat,
) -> Result<()> {
    let resp = client.exam_schedule(&args.teacher_id).await?;
    print_envelope(&resp, format);
    Ok(())
}

pub async fn run_tasks(args: &TasksArgs, client: &PortalClient, format: &OutputFormat) -> Result<()> {
    let resp = match (&args.create, &args.teacher_id) {
        (Some(json), _) => {
            let payload = parse_payload(json)?;
            client.create_task(&payload).await?
        }
        (None, Some(teacher_id)) => client.tasks(teacher_id).await?,
        (None, None) => anyhow::bail!("a teacher ID is required to list tasks"),
    };
    print_envelope(&resp, format);
    Ok(())
}
