//! Command-line interface for the admin client.

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Deserialize;
use serde_json::Value;

use crate::checker::{HydraResponseChecker, ResponseChecker, HYDRA_MEMBER};
use crate::client::{ApiClient, HttpApiClient};
use crate::config::{
    validate_code, validate_locale_code, AdminApiConfig, PRODUCT_ASSOCIATION_TYPES_RESOURCE,
};
use crate::context::translation_payload;
use crate::error::{AdminClientError, Result};
use crate::response::ApiResponse;

/// Catalog admin - manage product association types through the admin API.
#[derive(Parser)]
#[command(name = "catalog-admin")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all product association types.
    List,

    /// Show a single product association type.
    Show {
        /// Product association type code (e.g., accessories)
        code: String,
    },

    /// Create a product association type.
    Create {
        /// Product association type code (e.g., accessories)
        #[arg(short, long)]
        code: String,

        /// Translated name as LOCALE=NAME, may be repeated
        #[arg(short, long = "name", value_name = "LOCALE=NAME")]
        names: Vec<String>,
    },

    /// Delete a product association type.
    Delete {
        /// Product association type code (e.g., accessories)
        code: String,
    },
}

/// Parse a `LOCALE=NAME` argument.
///
/// # Examples
/// ```
/// use catalog_admin_client::cli::parse_translation;
///
/// let (locale, name) = parse_translation("en_US=Similar products").unwrap();
/// assert_eq!(locale, "en_US");
/// assert_eq!(name, "Similar products");
/// assert!(parse_translation("Similar products").is_err());
/// ```
pub fn parse_translation(arg: &str) -> Result<(String, String)> {
    let (locale, name) = arg
        .split_once('=')
        .ok_or_else(|| AdminClientError::InvalidTranslation(arg.to_string()))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(AdminClientError::InvalidTranslation(arg.to_string()));
    }
    validate_locale_code(locale)?;
    Ok((locale.to_string(), name.to_string()))
}

/// Run the CLI.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List => list_command().await,
        Commands::Show { code } => show_command(&code).await,
        Commands::Create { code, names } => create_command(&code, &names).await,
        Commands::Delete { code } => delete_command(&code).await,
    }
}

fn client() -> Result<HttpApiClient> {
    let config = AdminApiConfig::from_env()?;
    tracing::debug!(?config, "using admin API configuration");
    HttpApiClient::new(&config, PRODUCT_ASSOCIATION_TYPES_RESOURCE)
}

fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message(message);
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

/// Turn an unsuccessful response into an error carrying the API's message.
fn require_success(response: ApiResponse) -> Result<ApiResponse> {
    if response.is_success() {
        return Ok(response);
    }
    let message = HydraResponseChecker::new()
        .error_message(&response)
        .unwrap_or_else(|| response.body.to_string());
    Err(AdminClientError::Api {
        status: response.status,
        message,
    })
}

/// A product association type as listed by the admin API.
#[derive(Debug, Deserialize)]
struct ListedAssociationType {
    code: String,
    #[serde(default)]
    name: Option<String>,
}

fn field<'a>(item: &'a Value, name: &str) -> &'a str {
    item.get(name).and_then(Value::as_str).unwrap_or("-")
}

async fn list_command() -> Result<()> {
    let mut client = client()?;

    let pb = spinner("Fetching product association types...");
    let response = client.index().await;
    pb.finish_and_clear();
    let response = require_success(response?)?;

    let checker = HydraResponseChecker::new();
    let total = checker.count_collection_items(&response)?;
    let members: Vec<ListedAssociationType> = response
        .get(HYDRA_MEMBER)
        .cloned()
        .map(serde_json::from_value)
        .transpose()
        .map_err(|e| AdminClientError::UnexpectedResponse(e.to_string()))?
        .unwrap_or_default();

    for item in &members {
        println!(
            "  {:<24} {}",
            style(&item.code).cyan(),
            item.name.as_deref().unwrap_or("-")
        );
    }
    println!();
    println!("{} {}", style("Total:").bold(), total);

    Ok(())
}

async fn show_command(code: &str) -> Result<()> {
    validate_code(code)?;
    let mut client = client()?;

    let pb = spinner("Fetching product association type...");
    let response = client.show(code).await;
    pb.finish_and_clear();
    let response = require_success(response?)?;

    println!("  Code: {}", style(field(&response.body, "code")).cyan());
    println!("  Name: {}", style(field(&response.body, "name")).green());
    if let Some(translations) = response.get("translations").and_then(Value::as_object) {
        for (locale, translation) in translations {
            println!("    {locale}: {}", field(translation, "name"));
        }
    }

    Ok(())
}

async fn create_command(code: &str, names: &[String]) -> Result<()> {
    // Validate inputs before making HTTP requests
    validate_code(code)?;
    let translations = names
        .iter()
        .map(String::as_str)
        .map(parse_translation)
        .collect::<Result<Vec<_>>>()?;

    let mut client = client()?;
    client.build_create_request();
    client.add_request_data("code", Value::String(code.to_string()))?;
    for (locale, name) in &translations {
        client.update_request_data(translation_payload(name, locale))?;
    }

    let pb = spinner("Creating product association type...");
    let response = client.create().await;
    pb.finish_and_clear();
    require_success(response?)?;

    println!("{} {}", style("Created:").green().bold(), style(code).cyan());
    Ok(())
}

async fn delete_command(code: &str) -> Result<()> {
    validate_code(code)?;
    let mut client = client()?;

    let pb = spinner("Deleting product association type...");
    let response = client.delete(code).await;
    pb.finish_and_clear();
    require_success(response?)?;

    println!("{} {}", style("Deleted:").green().bold(), style(code).cyan());
    Ok(())
}
