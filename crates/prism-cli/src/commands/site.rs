//! `prism sidebar` and `prism sitemap`

use chrono::{SecondsFormat, Utc};
use tracing::instrument;

use prism_core::application::{Sidebar, SitemapEntry};

use crate::{
    cli::{SitemapArgs, global::GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn sidebar(global: GlobalArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let docs = super::open_docs(&global, &config)?;
    let sidebar = docs.sidebar()?;

    if output.is_json() {
        output.json(&sidebar)?;
    } else {
        for line in outline(&sidebar) {
            output.data(&line)?;
        }
    }
    Ok(())
}

#[instrument(skip_all)]
pub fn sitemap(
    args: SitemapArgs,
    global: GlobalArgs,
    mut config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    if let Some(url) = args.base_url {
        config.site = config.site.with_url(url);
    }
    let docs = super::open_docs(&global, &config)?;
    let entries = docs.sitemap(Utc::now())?;

    if args.xml {
        output.data(&sitemap_xml(&entries))?;
    } else if output.is_json() {
        output.json(&entries)?;
    } else {
        for entry in &entries {
            output.data(&format!(
                "{}\t{}",
                entry.url,
                entry.last_modified.to_rfc3339_opts(SecondsFormat::Secs, true)
            ))?;
        }
    }
    Ok(())
}

/// Indented text rendering: sections flush left, group labels by two
/// spaces, items by four (two when the group has no label).
fn outline(sidebar: &Sidebar) -> Vec<String> {
    let mut lines = Vec::new();
    for section in &sidebar.sections {
        lines.push(section.title.clone());
        for group in &section.groups {
            let indent = match &group.label {
                Some(label) => {
                    lines.push(format!("  {label}"));
                    "    "
                }
                None => "  ",
            };
            for item in &group.items {
                let badge = if item.is_new { " [new]" } else { "" };
                lines.push(format!("{indent}{}  {}{badge}", item.title, item.href));
            }
        }
    }
    lines
}

fn sitemap_xml(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for entry in entries {
        xml.push_str(&format!(
            "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n  </url>\n",
            escape_xml(&entry.url),
            entry.last_modified.to_rfc3339_opts(SecondsFormat::Secs, true)
        ));
    }
    xml.push_str("</urlset>");
    xml
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
