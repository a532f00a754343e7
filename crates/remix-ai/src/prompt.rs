//! Prompt engineering for recipe generation.
//!
//! Builders are pure: the same request always produces the same prompt.
//! Ingredients appear in input order; filters appear in the canonical
//! [`DietaryFilter`](remix_core::DietaryFilter) order regardless of how the
//! caller collected them.

use std::collections::BTreeSet;

use remix_core::{DietaryFilter, GenerationRequest, SubstitutionRequest};

/// System prompt for ingredient-driven recipe generation.
pub const RECIPE_SYSTEM_PROMPT: &str = r#"You are an experienced home chef and nutritionist who creates practical, delicious recipes.
When given ingredients, you create a complete recipe with:

1. **Recipe Title** - A descriptive name for the dish
2. **Servings** - Number of portions this recipe makes
3. **Nutrition per Serving** - Estimated calories, protein (g), carbs (g), fat (g)
4. **Ingredients** - Full list with quantities (use the provided ingredients plus common pantry staples)
5. **Instructions** - Clear, numbered steps
6. **Tips** - 1-2 helpful cooking tips

Keep recipes accessible for home cooks. Be specific about cooking times and temperatures.
Always include nutritional estimates per serving."#;

/// System prompt for macro-targeted recipe generation.
pub const MACRO_SYSTEM_PROMPT: &str = r#"You are an experienced chef and nutritionist who creates meals to meet specific nutritional targets.
When given macro targets, you create a complete recipe that hits those targets as closely as possible.

Your response must include:

1. **Recipe Title** - A descriptive name for the dish
2. **Servings** - Number of portions (usually 1 for macro-targeted meals)
3. **Nutrition per Serving** - Show calories, protein (g), carbs (g), fat (g) and how close they are to the targets
4. **Ingredients** - Full list with precise quantities to hit the macros
5. **Instructions** - Clear, numbered steps
6. **Tips** - 1-2 helpful tips

Focus on whole, nutritious ingredients. Be precise with quantities to match the macro targets."#;

/// System prompt for ingredient substitution.
pub const SUBSTITUTION_SYSTEM_PROMPT: &str = r#"You are a knowledgeable chef who helps with ingredient substitutions.
Provide practical alternatives that maintain the dish's flavor and texture.
Include quantities and ratios when they matter.
Be concise - give 2-3 substitution options with brief explanations of how they'll affect the dish."#;

/// A fully built chat prompt, ready for the gateway.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatPrompt {
    pub system: &'static str,
    pub user: String,
    pub temperature: f32,
    pub max_tokens: i32,
}

/// Build the prompt for ingredient-driven generation.
pub fn recipe_prompt(request: &GenerationRequest) -> ChatPrompt {
    let ingredients = request.ingredients.join(", ");
    let mut user = format!("Create a recipe using these ingredients: {ingredients}");
    push_filters(&mut user, &request.filters);

    ChatPrompt {
        system: RECIPE_SYSTEM_PROMPT,
        user,
        temperature: 0.7,
        max_tokens: 1000,
    }
}

/// Build the prompt for macro-targeted generation.
///
/// Targets are enumerated in a fixed order. Without ingredients the model
/// is told to pick its own; with ingredients it builds around them.
pub fn macro_prompt(request: &GenerationRequest) -> ChatPrompt {
    let targets = &request.targets;
    let mut parts = Vec::new();
    if let Some(calories) = targets.calories {
        parts.push(format!("{calories} calories"));
    }
    if let Some(protein) = targets.protein_g {
        parts.push(format!("{protein}g protein"));
    }
    if let Some(carbs) = targets.carbs_g {
        parts.push(format!("{carbs}g carbs"));
    }
    if let Some(fat) = targets.fat_g {
        parts.push(format!("{fat}g fat"));
    }

    let mut user = format!(
        "Create a meal that meets these nutritional targets: {}",
        parts.join(", ")
    );

    if request.ingredients.is_empty() {
        user.push_str("\n\nChoose appropriate ingredients to match the targets.");
    } else {
        user.push_str(&format!(
            "\n\nBuild the meal around these ingredients: {}",
            request.ingredients.join(", ")
        ));
    }
    push_filters(&mut user, &request.filters);

    ChatPrompt {
        system: MACRO_SYSTEM_PROMPT,
        user,
        temperature: 0.7,
        max_tokens: 1000,
    }
}

/// Build the prompt for an ingredient substitution.
pub fn substitution_prompt(request: &SubstitutionRequest) -> ChatPrompt {
    let mut user = format!("What can I substitute for {}?", request.ingredient.trim());

    if let Some(context) = request
        .context
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
    {
        user.push_str(&format!("\n\nContext: {context}"));
    }

    ChatPrompt {
        system: SUBSTITUTION_SYSTEM_PROMPT,
        user,
        temperature: 0.5,
        max_tokens: 300,
    }
}

fn push_filters(user: &mut String, filters: &BTreeSet<DietaryFilter>) {
    if filters.is_empty() {
        return;
    }
    let names: Vec<&str> = filters.iter().map(|f| f.as_str()).collect();
    user.push_str(&format!("\n\nDietary requirements: {}", names.join(", ")));
}
