//! Field lookups for pages built with the WordPress Recipe Maker (WPRM) plugin.
//!
//! Only WPRM markup is understood; other recipe plugins are not supported.

use super::selector::SelectorChain;
use crate::error::{RecipeError, Result};
use crate::model::{Ingredient, Recipe};
use log::debug;
use scraper::{ElementRef, Html, Selector};

// The second entry is subsumed by the first (class selectors match tokens) and
// never fires; it keeps the plugin's bold-block variant listed in lookup order.
const NAME_SELECTORS: &[&str] = &[
    "h2.wprm-recipe-name",
    "h2.wprm-recipe-name.wprm-block-text-bold",
];

const INGREDIENTS_SELECTORS: &[&str] = &["ul.wprm-recipe-ingredients"];

const INSTRUCTIONS_SELECTORS: &[&str] = &["div.wprm-recipe-instruction-group"];

// Token match: a container carrying extra classes still counts as "circle".
const PHOTO_SELECTORS: &[&str] = &[
    "div.wprm-recipe-image.wprm-block-image-circle",
    "div.wprm-recipe-image.wprm-block-image-normal",
];

const PHOTO_ATTRIBUTE: &str = "data-lazy-src";

fn text_of(element: ElementRef) -> String {
    element.text().collect()
}

pub fn extract_name(document: &Html) -> Result<String> {
    let element = SelectorChain::new("name", NAME_SELECTORS).require(document)?;
    Ok(text_of(element))
}

/// Each element child of the ingredient list, in page order, with its text untouched.
pub fn extract_ingredients(document: &Html) -> Result<Vec<Ingredient>> {
    let list = SelectorChain::new("ingredients", INGREDIENTS_SELECTORS).require(document)?;

    Ok(list
        .children()
        .filter_map(ElementRef::wrap)
        .map(|item| Ingredient {
            text: text_of(item),
        })
        .collect())
}

/// The instruction group's text split on every `.` character.
///
/// This is a naive sentence split: decimals ("1.5 cups") and abbreviations
/// are cut apart, and a trailing `.` yields an empty last segment.
pub fn extract_instructions(document: &Html) -> Result<Vec<String>> {
    let group = SelectorChain::new("instructions", INSTRUCTIONS_SELECTORS).require(document)?;

    Ok(text_of(group).split('.').map(str::to_string).collect())
}

/// The `data-lazy-src` of the first `img` inside the recipe image container.
pub fn extract_photo_url(document: &Html) -> Result<String> {
    let container = SelectorChain::new("photo", PHOTO_SELECTORS).require(document)?;

    let img_selector = Selector::parse("img").map_err(|_| RecipeError::MissingField {
        field: "photo",
        selectors: vec!["img".to_string()],
    })?;
    let img = container
        .select(&img_selector)
        .next()
        .ok_or_else(|| RecipeError::MissingField {
            field: "photo",
            selectors: vec!["img".to_string()],
        })?;

    img.value()
        .attr(PHOTO_ATTRIBUTE)
        .map(str::to_string)
        .ok_or(RecipeError::MissingAttribute {
            field: "photo",
            attribute: PHOTO_ATTRIBUTE,
        })
}

/// Run all four lookups. Any missing field aborts the extraction.
pub fn parse(document: &Html) -> Result<Recipe> {
    debug!("Attempting to extract recipe using WPRM class lookups");

    let recipe = Recipe {
        name: extract_name(document)?,
        ingredients: extract_ingredients(document)?,
        instructions: extract_instructions(document)?,
        photo_url: extract_photo_url(document)?,
    };

    debug!("Recipe name: {}", recipe.name);
    debug!("Ingredients count: {}", recipe.ingredients.len());
    debug!("Instruction segments: {}", recipe.instructions.len());

    Ok(recipe)
}
