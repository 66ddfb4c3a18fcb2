mod selector;
pub mod wprm;

pub use selector::SelectorChain;
pub use wprm::{
    extract_ingredients, extract_instructions, extract_name, extract_photo_url, parse,
};
