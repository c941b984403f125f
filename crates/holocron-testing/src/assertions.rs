//! Custom assertions over the CLI's JSON output.
//!
//! Provides high-level assertions that make tests more readable:
//! - Row count and name order on the rendered page
//! - Page number and filtered total checks

use anyhow::{Context, Result};
use serde_json::Value;

fn people(json: &Value) -> Result<&Vec<Value>> {
    json["content"]["people"]
        .as_array()
        .context("Expected 'content.people' array in JSON")
}

/// Assert that the rendered page holds exactly `expected` rows.
pub fn assert_person_count(json: &Value, expected: usize) -> Result<()> {
    let people = people(json)?;

    if people.len() != expected {
        anyhow::bail!("Expected {} people on page, got {}", expected, people.len());
    }

    Ok(())
}

/// Assert the names on the rendered page, in order.
pub fn assert_person_names(json: &Value, expected: &[&str]) -> Result<()> {
    let names: Vec<&str> = people(json)?
        .iter()
        .filter_map(|p| p["name"].as_str())
        .collect();

    if names != expected {
        anyhow::bail!("Expected names {:?}, got {:?}", expected, names);
    }

    Ok(())
}

/// Assert the current page number and the filtered total.
pub fn assert_page(json: &Value, page: u64, count: u64) -> Result<()> {
    let content = &json["content"];
    let actual_page = content["page"]
        .as_u64()
        .context("Expected 'content.page' number in JSON")?;
    let actual_count = content["count"]
        .as_u64()
        .context("Expected 'content.count' number in JSON")?;

    if actual_page != page || actual_count != count {
        anyhow::bail!(
            "Expected page {} of {} results, got page {} of {}",
            page,
            count,
            actual_page,
            actual_count
        );
    }

    Ok(())
}
