//! worklog2jira main entrypoint.

use worklog2jira::run;
use worklog2jira::ui::messages::error;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
