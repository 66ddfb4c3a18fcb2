/// A single line from the ingredient list, as displayed on the source page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub text: String,
}

/// The recipe photo, held in memory between download and rendering.
#[derive(Debug, Clone, Default)]
pub struct PhotoAsset {
    pub url: String,
    pub bytes: Vec<u8>,
}

/// Fields extracted from a recipe page.
#[derive(Debug, Clone, Default)]
pub struct Recipe {
    pub name: String,
    pub ingredients: Vec<Ingredient>,
    /// Instruction text split on every `.`; segments may be empty or cut mid-sentence.
    pub instructions: Vec<String>,
    pub photo_url: String,
}
