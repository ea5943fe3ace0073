//! Sign in and out

use anyhow::{Context, Result};

use checkmate::api::ApiClient;
use checkmate::session::Session;

/// Exchange credentials for a token and remember it
pub async fn run_login(client: &ApiClient, email: &str, password: &str) -> Result<()> {
    let token = client
        .sign_in(email.trim(), password)
        .await
        .context("Sign in failed")?;

    Session::new(email.trim(), token)
        .save()
        .context("Failed to save session")?;

    tracing::info!("Signed in as {}", email.trim());
    println!("Signed in as {}", email.trim());
    Ok(())
}

pub fn run_logout() -> Result<()> {
    if Session::clear()? {
        println!("Signed out");
    } else {
        println!("Not signed in");
    }
    Ok(())
}

/// Hint printed after the wizard's "go to login"
pub fn login_hint(email: &str) -> String {
    if email.is_empty() {
        "Sign in with: checkmate login --email <EMAIL>".to_string()
    } else {
        format!("Sign in with: checkmate login --email {}", email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_hint() {
        assert_eq!(
            login_hint("a@b.com"),
            "Sign in with: checkmate login --email a@b.com"
        );
        assert!(login_hint("").contains("<EMAIL>"));
    }
}
