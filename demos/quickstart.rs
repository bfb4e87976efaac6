/// Quickstart example: read-only tour of an Adesk account.
///
/// Demonstrates: building a client from a token, listing projects and
/// bank accounts, filtering operations, handling typed errors.
///
/// Run with `ADESK_API_TOKEN=... cargo run --example quickstart`.
use adesk_sdk::resources::{OperationFilter, ProjectFilter};
use adesk_sdk::{AdeskClient, AdeskError};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let token = std::env::var("ADESK_API_TOKEN")?;
    let client = AdeskClient::new(token);

    // 1. Projects
    let projects = client.projects().list(&ProjectFilter::default())?;
    println!("Projects:");
    for p in &projects {
        println!(
            "  #{} {} (income {:.2})",
            p.id.unwrap_or_default(),
            p.name.as_deref().unwrap_or("-"),
            p.income.unwrap_or_default()
        );
    }

    // 2. Bank accounts
    let accounts = client.bank_accounts().list(&Default::default())?;
    println!("\nBank accounts:");
    for a in &accounts {
        println!(
            "  {} {:.2} {}",
            a.name.as_deref().unwrap_or("-"),
            a.amount.unwrap_or_default(),
            a.currency.as_deref().unwrap_or("")
        );
    }

    // 3. Operations for the current month
    let filter = OperationFilter {
        range_str: Some("current_month".into()),
        ..Default::default()
    };
    match client.operations().list(&filter) {
        Ok(operations) => println!("\n{} operations this month", operations.len()),
        Err(AdeskError::PaymentRequired(failure)) => {
            println!("\nSubscription inactive: {}", failure.message)
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
