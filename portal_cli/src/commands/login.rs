//! The `login` and `logout` subcommands.

use anyhow::Result;
use clap::Args;
use portal_lib::PortalClient;

#[derive(Args)]
pub struct LoginArgs {
    /// Portal username
    #[arg(long)]
    pub username: String,

    /// Portal password (or set PORTAL_PASSWORD)
    #[arg(long, env = "PORTAL_PASSWORD", hide_env_values = true)]
    pub password: String,
}

pub async fn run(args: &LoginArgs, client: &mut PortalClient) -> Result<()> {
    let session = client.login(&args.username, &args.password).await?;
    match (&session.role, &session.user_id) {
        (Some(role), Some(id)) => println!("Logged in as {} ({})", id, role),
        (None, Some(id)) => println!("Logged in as {}", id),
        _ => println!("Logged in"),
    }
    if let Some(expires_at) = session.expires_at {
        println!("Session expires at {}", expires_at.to_rfc3339());
    }
    Ok(())
}

pub fn run_logout(client: &mut PortalClient) -> Result<()> {
    if client.logout()? {
        println!("Logged out");
    } else {
        println!("No stored session");
    }
    Ok(())
}
