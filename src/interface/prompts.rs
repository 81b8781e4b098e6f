use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::Result;
use crate::models::Dish;

const SUGGESTION_THRESHOLD: f64 = 0.7;
const MAX_SUGGESTIONS: usize = 5;

/// Dishes whose names resemble `query`, best match first.
pub fn suggest_dishes<'a>(dishes: &'a [Dish], query: &str) -> Vec<(&'a Dish, f64)> {
    let query = query.trim().to_lowercase();
    let mut candidates: Vec<(&Dish, f64)> = dishes
        .iter()
        .map(|d| (d, jaro_winkler(&d.name.to_lowercase(), &query)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    candidates.truncate(MAX_SUGGESTIONS);
    candidates
}

/// Ask for a dish from the library, offering close matches for typos.
///
/// Returns `None` when the user enters nothing.
pub fn prompt_dish_name(dishes: &[Dish]) -> Result<Option<String>> {
    loop {
        let input: String = Input::new()
            .with_prompt("Which dish did you cook? (Enter to cancel)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            return Ok(None);
        }

        if let Some(dish) = dishes
            .iter()
            .find(|d| d.name.to_lowercase() == input.to_lowercase())
        {
            return Ok(Some(dish.name.clone()));
        }

        let candidates = suggest_dishes(dishes, input);

        if candidates.is_empty() {
            let keep = Confirm::new()
                .with_prompt(format!("'{}' is not in the dish library. Record it anyway?", input))
                .default(false)
                .interact()?;
            if keep {
                return Ok(Some(input.to_string()));
            }
            continue;
        }

        if candidates.len() == 1 {
            let dish = candidates[0].0;
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", dish.name))
                .default(true)
                .interact()?;

            if confirm {
                return Ok(Some(dish.name.clone()));
            }
            continue;
        }

        let mut options: Vec<String> = candidates.iter().map(|(d, _)| d.name.clone()).collect();
        options.push("None of these".to_string());

        let selection = Select::new()
            .with_prompt("Which did you mean?")
            .items(&options)
            .default(0)
            .interact()?;

        if selection < candidates.len() {
            return Ok(Some(options[selection].clone()));
        }
    }
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
