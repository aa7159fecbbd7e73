//! `services` subcommand: inspect the catalog without launching the TUI.

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;

use crate::content;
use crate::models::{Service, ServiceStrip};

/// Arguments for the `services` subcommand.
#[derive(Debug, Args)]
pub struct ServicesArgs {
    /// What to do with the catalog
    #[command(subcommand)]
    pub command: ServicesCommand,
}

/// Catalog inspection commands.
#[derive(Debug, Subcommand)]
pub enum ServicesCommand {
    /// List every service with its route slug
    List {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Resolve a slug exactly as the deep-link router would
    Resolve {
        /// The slug to resolve (e.g. "wedding-engagement")
        slug: String,
        /// Emit JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
}

/// One row of the catalog listing.
#[derive(Debug, Serialize)]
struct CatalogEntry<'a> {
    slug: String,
    title: &'a str,
    short_label: &'a str,
    description: &'a str,
}

impl<'a> CatalogEntry<'a> {
    fn from_service(service: &'a Service) -> Self {
        Self {
            slug: service.slug(),
            title: &service.title,
            short_label: &service.short_label,
            description: &service.description,
        }
    }
}

/// Runs the subcommand against the static catalog.
///
/// # Errors
///
/// Returns an error when a slug does not resolve, so scripts get a
/// nonzero exit status.
pub fn run(args: &ServicesArgs) -> Result<()> {
    let strip = content::studio_services()?;

    match &args.command {
        ServicesCommand::List { json } => {
            println!("{}", render_list(&strip, *json)?);
            Ok(())
        }
        ServicesCommand::Resolve { slug, json } => match render_resolve(&strip, slug, *json)? {
            Some(output) => {
                println!("{output}");
                Ok(())
            }
            None => anyhow::bail!("no service matches slug '{slug}'"),
        },
    }
}

/// Renders the catalog listing as a table or JSON.
pub fn render_list(strip: &ServiceStrip, json: bool) -> Result<String> {
    let entries: Vec<CatalogEntry> = strip.iter().map(CatalogEntry::from_service).collect();

    if json {
        return Ok(serde_json::to_string_pretty(&entries)?);
    }

    let width = entries
        .iter()
        .map(|e| e.slug.len())
        .max()
        .unwrap_or(0);

    let mut lines = Vec::with_capacity(entries.len());
    for entry in &entries {
        lines.push(format!(
            "{slug:<width$}  {title} — {description}",
            slug = entry.slug,
            title = entry.title,
            description = entry.description,
        ));
    }
    Ok(lines.join("\n"))
}

/// Renders a resolved service, or `None` when the slug is unknown.
pub fn render_resolve(strip: &ServiceStrip, query: &str, json: bool) -> Result<Option<String>> {
    let Some(service) = strip.find_by_slug(query) else {
        return Ok(None);
    };

    if json {
        return Ok(Some(serde_json::to_string_pretty(service)?));
    }

    let mut output = format!("{}\n  {}", service.title, service.description);
    if !service.long_detail.is_empty() {
        output.push_str(&format!("\n  {}", service.long_detail));
    }
    output.push_str(&format!("\n  route: /services/{}", service.slug()));
    Ok(Some(output))
}
