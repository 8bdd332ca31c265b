/*
[INPUT]:  TWILIO_ACCOUNT_SID / TWILIO_AUTH_TOKEN environment variables
[OUTPUT]: Console walkthrough of the Accounts resource
[POS]:    Examples - account management demonstration
[UPDATE]: When account endpoints change
*/

use tracing_subscriber::EnvFilter;
use twilio_adapter::*;

/// Example: subaccount lifecycle
///
/// 1. Fetch the authenticated account
/// 2. Create a subaccount
/// 3. List subaccounts matching its name
/// 4. Suspend and reactivate it
/// 5. Rename the master account back to its original name
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("twilio_adapter=debug")),
        )
        .init();

    if let Err(e) = run().await {
        eprintln!("Accounts example failed: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    println!("=== Twilio Accounts Example ===\n");

    let client = TwilioClient::from_env()?;
    let master = client.get_account().await?;
    println!("✓ Authenticated as {} ({})", master.friendly_name, master.sid);

    let sub = client.create_sub_account("adapter-example").await?;
    println!("✓ Created subaccount {} [{}]", sub.sid, sub.status);

    let page = client
        .list_sub_accounts(ListSubAccountsRequest::new().friendly_name("adapter-example"))
        .await?;
    println!("✓ {} subaccount(s) named adapter-example", page.accounts.len());

    let suspended = client.suspend_sub_account(&sub.sid).await?;
    println!("✓ Subaccount is now {}", suspended.status);
    let active = client.activate_sub_account(&sub.sid).await?;
    println!("✓ Subaccount is now {}", active.status);

    match client.change_sub_account_status(client.account_sid(), AccountStatus::Suspended).await {
        Err(TwilioError::InvalidOperation(reason)) => println!("✓ Self suspension refused: {}", reason),
        other => println!("! Unexpected result for self suspension: {:?}", other),
    }

    let renamed = client.update_account_name(&master.friendly_name).await?;
    println!("✓ Master account name: {}", renamed.friendly_name);

    println!("\nNote: closing a subaccount is permanent; call close_sub_account only on throwaway accounts.");
    Ok(())
}
