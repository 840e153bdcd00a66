//! Chat command handler: the interactive catalog assistant.
//!
//! A blocking line-oriented loop. Mode select leads into either fuzzy smart
//! search or manual category browsing, both ending in a job posting appended
//! to the postings file. Malformed input abandons the current round, it
//! never ends the session; the only fatal condition is a missing or
//! unreadable catalog at startup.

use anyhow::{Context, Result};
use colored::*;
use dialoguer::Input;

use crate::catalog::{Category, Customer, FlatServiceEntry, JobPosting, Rate, flatten, store};
use crate::config::Config;
use crate::services::matching;

/// What a finished round means for the outer loop.
#[derive(Debug, PartialEq)]
enum RoundOutcome {
    /// Fall through to the "do another action?" prompt.
    Completed,
    /// Go straight back to mode selection.
    ToModeSelect,
    /// End the session immediately.
    Quit,
}

/// One line of user input per call. The console implementation sits on
/// dialoguer; tests drive the loop with scripted replies instead.
trait PromptSource {
    fn line(&mut self, message: &str) -> Result<String>;
}

struct ConsolePrompt;

impl PromptSource for ConsolePrompt {
    fn line(&mut self, message: &str) -> Result<String> {
        let value: String = Input::new()
            .with_prompt(message)
            .allow_empty(true)
            .interact_text()?;
        Ok(value.trim().to_string())
    }
}

pub fn handle_chat_command(config: &Config) -> Result<()> {
    run_chat(config, &mut ConsolePrompt)
}

fn run_chat(config: &Config, input: &mut impl PromptSource) -> Result<()> {
    let catalog_path = config.catalog_path();
    let categories = store::load_catalog(&catalog_path).with_context(|| {
        format!(
            "no usable catalog at {}; run 'jobber-cli scrape' first",
            catalog_path.display()
        )
    })?;
    let index = flatten(&categories);

    println!("{}", "Welcome to the AceJobber Smart Assistant!".bold().cyan());
    println!("You can either:");
    println!("  1. Type what you need (e.g. 'clean my sofa', 'fix AC') - Smart Mode");
    println!("  2. Or browse manually - Menu Mode");

    loop {
        let mode = input
            .line("Choose mode ('smart', 'manual', or 'exit')")?
            .to_lowercase();
        let outcome = match mode.as_str() {
            "exit" => RoundOutcome::Quit,
            "smart" => run_smart(config, &index, input)?,
            "manual" => run_manual(config, &categories, input)?,
            _ => {
                println!(
                    "{}",
                    "Invalid option. Please type 'smart' or 'manual'.".red()
                );
                RoundOutcome::ToModeSelect
            }
        };

        match outcome {
            RoundOutcome::Quit => break,
            RoundOutcome::ToModeSelect => continue,
            RoundOutcome::Completed => {
                let again = input
                    .line("Do you want to do another action? (yes/no)")?
                    .to_lowercase();
                if again != "yes" {
                    break;
                }
            }
        }
    }

    println!("{}", "Goodbye!".cyan());
    Ok(())
}

/// Free-text fuzzy search over all service names. No matches and a `none`
/// cancel both go straight back to mode select; an invalid index errors
/// once and ends the round at the continue prompt.
fn run_smart(
    config: &Config,
    index: &[FlatServiceEntry],
    input: &mut impl PromptSource,
) -> Result<RoundOutcome> {
    let query = input.line("What service do you need?")?.to_lowercase();
    let matches = matching::find_matches(
        &query,
        index,
        matching::MAX_MATCHES,
        matching::SCORE_CUTOFF,
    );
    if matches.is_empty() {
        println!(
            "{}",
            "Sorry, no matching service found. Try rephrasing (e.g. 'AC repair', 'bike wash')."
                .red()
        );
        return Ok(RoundOutcome::ToModeSelect);
    }

    println!("\n{}", "I found the following matches:".bold());
    for (i, m) in matches.iter().enumerate() {
        println!(
            "{}. {} - ₹{} ({})",
            i + 1,
            m.entry.service_name,
            m.entry.rate,
            m.entry.category.dimmed()
        );
    }

    let choice = input
        .line("Select a service number (or 'none' to cancel)")?
        .to_lowercase();
    if choice == "none" {
        return Ok(RoundOutcome::ToModeSelect);
    }
    let Some(selected) = parse_selection(&choice, matches.len()) else {
        println!("{}", "Invalid choice.".red());
        return Ok(RoundOutcome::Completed);
    };
    let entry = matches[selected].entry;

    let confirm = input
        .line(&format!(
            "Do you want to book '{}' under {}? (yes/no)",
            entry.service_name, entry.category
        ))?
        .to_lowercase();
    if confirm == "yes" {
        post_job(
            config,
            entry.category.clone(),
            entry.service_name.clone(),
            entry.rate.clone(),
            input,
        )?;
    } else {
        println!("Okay, not booking this one.");
    }
    Ok(RoundOutcome::Completed)
}

/// Menu-driven browsing: category list, then service list, then post.
/// There is no confirmation step in manual mode; picking a service posts.
/// Any invalid choice (and a category with no services) ends the attempt
/// and returns to mode select; only a completed posting reaches the
/// continue prompt.
fn run_manual(
    config: &Config,
    categories: &[Category],
    input: &mut impl PromptSource,
) -> Result<RoundOutcome> {
    println!("\n{}", "Available categories:".bold());
    for (i, category) in categories.iter().enumerate() {
        println!("{}. {}", i + 1, category.name);
    }

    let choice = input
        .line("Select a category number (or 'back' or 'exit')")?
        .to_lowercase();
    if choice == "exit" {
        return Ok(RoundOutcome::Quit);
    }
    if choice == "back" {
        return Ok(RoundOutcome::ToModeSelect);
    }
    let Some(category_index) = parse_selection(&choice, categories.len()) else {
        println!("{}", "Invalid category. Try again.".red());
        return Ok(RoundOutcome::ToModeSelect);
    };

    let category = &categories[category_index];
    if category.services.is_empty() {
        println!("No services found under '{}'", category.name);
        return Ok(RoundOutcome::ToModeSelect);
    }

    println!("\nServices under '{}':", category.name.bold());
    for (i, service) in category.services.iter().enumerate() {
        println!("{}. {} - ₹{}", i + 1, service.service_name, service.rate);
    }

    let svc_choice = input
        .line("Select a service number (or 'back' to go back)")?
        .to_lowercase();
    if svc_choice == "back" {
        return Ok(RoundOutcome::ToModeSelect);
    }
    let Some(service_index) = parse_selection(&svc_choice, category.services.len()) else {
        println!("{}", "Invalid service. Try again.".red());
        return Ok(RoundOutcome::ToModeSelect);
    };

    let service = &category.services[service_index];
    post_job(
        config,
        category.name.clone(),
        service.service_name.clone(),
        service.rate.clone(),
        input,
    )?;
    Ok(RoundOutcome::Completed)
}

/// Collect the five booking fields and append the record to the postings
/// file. The fields are free text, empty allowed, no validation.
fn post_job(
    config: &Config,
    category: String,
    service: String,
    rate: Rate,
    input: &mut impl PromptSource,
) -> Result<()> {
    println!("\n{}", "Let's gather some job details:".bold());
    let name = input.line("Your name")?;
    let phone = input.line("Phone number")?;
    let address = input.line("Address")?;
    let preferred_date = input.line("Preferred date (YYYY-MM-DD)")?;
    let preferred_time = input.line("Preferred time (e.g. 10:00 AM)")?;

    let posting = JobPosting {
        category,
        service,
        rate,
        customer: Customer {
            name,
            phone,
            address,
        },
        preferred_date,
        preferred_time,
    };
    store::append_posting(&config.postings_path(), posting)?;

    println!("\n{}", "Job posted successfully!".green());
    Ok(())
}

/// Parse a 1-based menu selection; returns the 0-based index.
/// 0, out-of-range and non-numeric input are all rejected.
fn parse_selection(input: &str, len: usize) -> Option<usize> {
    let n: usize = input.trim().parse().ok()?;
    if (1..=len).contains(&n) { Some(n - 1) } else { None }
}
