//! Account management commands.

#![allow(clippy::print_stdout)]

use clap::Subcommand;

use stylestore_storefront::validation::{LoginForm, RegistrationForm};
use stylestore_storefront::{AppError, Storefront};

/// Account subcommands.
#[derive(Subcommand)]
pub enum AccountAction {
    /// Create the local account (overwrites any existing one)
    Register {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        /// Repeat of the password; defaults to the password itself
        #[arg(long)]
        confirm_password: Option<String>,

        #[arg(long)]
        first_name: String,

        #[arg(long)]
        last_name: String,

        #[arg(long)]
        phone: String,

        #[arg(long)]
        address: String,

        #[arg(long)]
        city: String,

        #[arg(long)]
        zip: String,
    },
    /// Check credentials against the stored account
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },
    /// End the session (the stored account survives)
    Logout,
    /// Show the stored account
    Whoami,
}

/// Run an account subcommand.
pub fn run(storefront: &mut Storefront, action: AccountAction) -> Result<(), AppError> {
    match action {
        AccountAction::Register {
            email,
            password,
            confirm_password,
            first_name,
            last_name,
            phone,
            address,
            city,
            zip,
        } => {
            let confirm = confirm_password.unwrap_or_else(|| password.clone());
            let form = RegistrationForm {
                first_name,
                last_name,
                email,
                password,
                confirm_password: confirm,
                phone,
                address,
                city,
                zip,
            };
            let profile = storefront.register(form).map_err(report_field_errors)?;
            tracing::info!("Account created for {}", profile.email);
            Ok(())
        }
        AccountAction::Login { email, password } => {
            let form = LoginForm { email, password };
            let profile = storefront.login(&form).map_err(report_field_errors)?;
            tracing::info!("Logged in as {}", profile.email);
            Ok(())
        }
        AccountAction::Logout => {
            storefront.logout();
            tracing::info!("Logged out");
            Ok(())
        }
        AccountAction::Whoami => {
            if storefront.session().has_account() {
                println!("An account is registered. Use `account login` to authenticate.");
            } else {
                println!("No account registered yet.");
            }
            Ok(())
        }
    }
}

/// Print per-field validation messages next to the failure, the way the
/// pages render them under each input.
pub fn report_field_errors(err: AppError) -> AppError {
    if let Some(errors) = err.field_errors() {
        for (field, message) in errors.iter() {
            tracing::warn!("{field}: {message}");
        }
    }
    err
}
