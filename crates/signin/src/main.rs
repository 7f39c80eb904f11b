//! Kiosk sign-in - exchange catalog credentials for a token.
//!
//! Independent of the storefront: it shares the catalog client but nothing
//! else, and the token is printed rather than stored - no session
//! persistence, no redirect.
//!
//! # Usage
//!
//! ```bash
//! kiosk-signin --username johnd
//! # prompts for the password, then prints the token
//!
//! kiosk-signin -u johnd -p m38rmF$ --api-base http://localhost:8080
//! ```
//!
//! Exactly one attempt per run; rerun to retry.

#![cfg_attr(not(test), forbid(unsafe_code))]
// The token and the prompts are this tool's output, not diagnostics.
#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::io::{BufRead, Write};

use clap::Parser;
use secrecy::{ExposeSecret, SecretString};

use kiosk_catalog::{CatalogClient, CatalogError, DEFAULT_API_BASE};

#[derive(Parser)]
#[command(name = "kiosk-signin")]
#[command(author, version, about = "Sign in to the Kiosk catalog service")]
struct Cli {
    /// Account username; prompted for when omitted
    #[arg(short, long)]
    username: Option<String>,

    /// Account password; prompted for when omitted
    #[arg(short, long)]
    password: Option<String>,

    /// Base URL of the catalog service
    #[arg(long, default_value = DEFAULT_API_BASE)]
    api_base: String,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), String> {
    let username = match cli.username {
        Some(username) => username,
        None => prompt("Username: ").map_err(|e| e.to_string())?,
    };
    let password: SecretString = match cli.password {
        Some(password) => password.into(),
        None => prompt("Password: ").map_err(|e| e.to_string())?.into(),
    };

    let client = CatalogClient::new(&cli.api_base);

    match client.login(&username, password.expose_secret()).await {
        Ok(auth) => {
            println!("Login successful! Token: {}", auth.token);
            Ok(())
        }
        Err(e) => {
            tracing::warn!(error = %e, "login rejected");
            Err(failure_message(&e))
        }
    }
}

/// The message shown on a failed attempt: the server's own wording when it
/// sent one, a generic line otherwise.
fn failure_message(error: &CatalogError) -> String {
    error
        .server_message()
        .map_or_else(|| "Login failed.".to_owned(), ToOwned::to_owned)
}

/// Read one trimmed line from the terminal.
fn prompt(label: &str) -> std::io::Result<String> {
    print!("{label}");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_message_prefers_server_wording() {
        let err = CatalogError::Status {
            status: 401,
            message: Some("username or password is incorrect".to_owned()),
        };
        assert_eq!(failure_message(&err), "username or password is incorrect");
    }

    #[test]
    fn test_failure_message_generic_without_server_text() {
        let err = CatalogError::Status {
            status: 500,
            message: None,
        };
        assert_eq!(failure_message(&err), "Login failed.");
    }

    #[tokio::test]
    async fn test_unreachable_service_fails_generically() {
        // Closed port: the request never produces a response.
        let cli = Cli {
            username: Some("johnd".to_owned()),
            password: Some("m38rmF$".to_owned()),
            api_base: "http://127.0.0.1:9".to_owned(),
        };
        assert_eq!(run(cli).await, Err("Login failed.".to_owned()));
    }
}
