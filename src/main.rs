use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use comfy_table::{modifiers, presets, ContentArrangement, Table};
use terminal_size::{terminal_size, Width};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use permctl::api::{set_silent, ApiError, HttpTransport, PermissionsClient};
use permctl::config;
use permctl::models::User;
use permctl::utils::{parse_role_entries, value_to_cell};

#[derive(Parser)]
#[command(
    name = "permctl",
    author,
    version,
    about = "Manage user role assignments through the permissions API",
    long_about = r#"permctl — inspect and edit role assignments from the terminal.

This tool surfaces the permissions endpoints of the backend API: list the
known roles, list all users with their assigned roles, and post a new set of
role assignments. Provide the API location through the API_BASE_URL
environment variable or an env file.

Examples:
  1) List the role catalog:
      permctl roles
  2) List users and their roles:
      permctl users
  3) Save role assignments (ID:NAME pairs):
      permctl save 1:ROLE_admin 2:ROLE_accountholder
"#,
    after_help = "Use `permctl <subcommand> --help` to get subcommand specific options and usage examples."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
    /// Disable request/response logging
    #[arg(long, global = true)]
    silent: bool,
    /// Path to .env file
    #[arg(long, global = true)]
    env_file: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the roles known to the permissions API
    #[command(about = "List roles", long_about = "Fetch the role catalog (id, name) from the remote API.")]
    Roles,
    /// List all users together with their role assignments
    #[command(about = "List users", long_about = "Fetch every user with contact details and assigned roles. Payloads that are not a user list are shown as a raw dump.")]
    Users,
    /// Save a set of role assignments
    #[command(about = "Save role assignments", long_about = "Post role assignment entries given as ID:NAME pairs, e.g. `permctl save 1:ROLE_admin 1:ROLE_accountholder`. Entries are sent exactly as given; the server decides what to do with duplicates.")]
    Save {
        /// Role entries as ID:NAME pairs
        entries: Vec<String>,
    },
    /// Validate configuration (env vars / API connectivity)
    #[command(about = "Validate configuration and ensure API connectivity.", long_about = "Check that API_BASE_URL is configured, then probe the roles endpoint to confirm the API answers.")]
    CheckConfig,
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w - 4);
    }
    table
}

/// Render an arbitrary JSON payload as a table. Used for response bodies
/// that do not match a typed shape.
fn print_raw(value: &serde_json::Value) {
    match value {
        serde_json::Value::Array(arr) => {
            if arr.is_empty() {
                println!("(empty list)");
                return;
            }
            let mut table = new_table();
            // Use the first object's keys as headers when available
            if let Some(first) = arr.iter().find_map(|v| v.as_object()) {
                let headers: Vec<&String> = first.keys().collect();
                table.set_header(&headers);
                for item in arr {
                    if let Some(obj) = item.as_object() {
                        let row: Vec<String> = headers
                            .iter()
                            .map(|k| obj.get(*k).map(value_to_cell).unwrap_or_default())
                            .collect();
                        table.add_row(row);
                    }
                }
            } else {
                table.set_header(vec!["Value"]);
                for item in arr {
                    table.add_row(vec![value_to_cell(item)]);
                }
            }
            println!("\n{table}\n");
        }
        serde_json::Value::Object(obj) => {
            if obj.is_empty() {
                println!("(empty response)");
                return;
            }
            let mut table = new_table();
            table.set_header(vec!["Field", "Value"]);
            for (k, v) in obj {
                table.add_row(vec![k.clone(), value_to_cell(v)]);
            }
            println!("\n{table}\n");
        }
        _ => println!("{}", value_to_cell(value)),
    }
}

fn print_error(context: &str, err: &ApiError) {
    tracing::error!(%err, "{}", context);
    eprintln!("{}: {}", yansi::Paint::new(context).red(), err);
}

fn build_client(env_file: Option<&str>) -> PermissionsClient {
    config::load_env_file(env_file);
    let base_url = config::get_api_base_url();
    PermissionsClient::new(Arc::new(HttpTransport::new(base_url)))
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    if cli.silent {
        set_silent(true);
    }

    let client = build_client(cli.env_file.as_deref());

    match cli.command {
        Commands::Roles => {
            match client.get_list_of_roles().await {
                Ok(roles) => {
                    if roles.is_empty() {
                        println!("(no roles defined)");
                        return;
                    }
                    let mut table = new_table();
                    table.set_header(vec!["ID", "Name"]);
                    for role in &roles {
                        table.add_row(vec![role.id.to_string(), role.name.clone()]);
                    }
                    println!("\n{table}\n");
                }
                Err(e) => {
                    print_error("Failed to fetch roles", &e);
                    process::exit(1);
                }
            }
        }
        Commands::Users => {
            match client.get_list_of_all_users().await {
                Ok(payload) => match serde_json::from_value::<Vec<User>>(payload.clone()) {
                    Ok(users) => {
                        let mut table = new_table();
                        table.set_header(vec![
                            "ID", "Name", "Email", "Phone", "Enabled", "Created", "Roles",
                        ]);
                        for u in &users {
                            table.add_row(vec![
                                u.id.to_string(),
                                u.name.clone(),
                                u.email.clone(),
                                u.phone.clone(),
                                if u.enabled == 1 { "yes".into() } else { "no".into() },
                                User::display_timestamp(&u.created),
                                u.role_names(),
                            ]);
                        }
                        println!("\n{table}\n");
                    }
                    // Not a user list; show whatever the server sent
                    Err(_) => print_raw(&payload),
                },
                Err(e) => {
                    print_error("Failed to fetch users", &e);
                    process::exit(1);
                }
            }
        }
        Commands::Save { entries } => {
            let roles = parse_role_entries(&entries);
            if roles.is_empty() {
                eprintln!(
                    "{}",
                    yansi::Paint::new("No valid ID:NAME entries given").red()
                );
                process::exit(1);
            }
            match client.save(&roles).await {
                Ok(result) => {
                    if let Some(message) =
                        result.successful.get("message").and_then(|m| m.as_str())
                    {
                        println!("{}", yansi::Paint::new(message).green());
                    } else {
                        print_raw(&result.successful);
                    }
                }
                Err(e) => {
                    print_error("Failed to save role assignments", &e);
                    process::exit(1);
                }
            }
        }
        Commands::CheckConfig => {
            if !config::has_api_base_url() {
                eprintln!(
                    "{}",
                    yansi::Paint::new("API_BASE_URL is not configured").red()
                );
                process::exit(1);
            }
            match client.get_list_of_roles().await {
                Ok(roles) => {
                    println!(
                        "{}",
                        yansi::Paint::new(format!(
                            "Configuration looks valid ({} roles returned)",
                            roles.len()
                        ))
                        .green()
                    );
                }
                Err(e) => {
                    eprintln!(
                        "{}: {}",
                        yansi::Paint::new("Configuration appears invalid").red(),
                        e
                    );
                    process::exit(1);
                }
            }
        }
    }
}
