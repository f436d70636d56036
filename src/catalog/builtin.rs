use crate::catalog::{MealCatalog, SnackCatalog};
use crate::models::{Diet, MealOption, SnackOption};

fn meal(
    name: &str,
    protein: f64,
    calories: f64,
    diet: Diet,
    recipe: &[&str],
    video: &str,
) -> MealOption {
    MealOption {
        name: name.to_string(),
        protein_grams: protein,
        calories,
        diet_tag: diet,
        recipe_steps: recipe.iter().map(|s| s.to_string()).collect(),
        video_ref: Some(video.to_string()),
    }
}

fn snack(name: &str, protein: f64, url: &str) -> SnackOption {
    SnackOption {
        name: name.to_string(),
        protein_per_pack: Some(protein),
        purchase_ref: url.to_string(),
    }
}

/// Default meal bank: one veg and one non-veg option per slot.
pub fn builtin_meals() -> MealCatalog {
    MealCatalog {
        breakfast: vec![
            meal(
                "Greek Yogurt Protein Bowl",
                30.0,
                360.0,
                Diet::Veg,
                &[
                    "200 g Greek yogurt (or hung curd)",
                    "30 g whey protein (unflavoured or vanilla)",
                    "50 g fruit (berries/banana)",
                    "10 g chia seeds",
                    "Mix yogurt + whey; top with fruit and chia.",
                ],
                "https://www.youtube.com/embed/G6kT2vC5mXk",
            ),
            meal(
                "Masala Omelette",
                19.0,
                280.0,
                Diet::NonVeg,
                &[
                    "3 eggs (~150 g)",
                    "30 g onion, 1 green chilli, 10 g coriander",
                    "5 ml oil/ghee; salt & pepper",
                    "Beat, cook 2-3 min each side on medium.",
                ],
                "https://www.youtube.com/embed/4m8oY9Z9iNU",
            ),
        ],
        lunch: vec![
            meal(
                "Grilled Chicken + Rice",
                35.0,
                560.0,
                Diet::NonVeg,
                &[
                    "120 g chicken breast (raw)",
                    "Marinade: 5 ml oil, lemon, salt, pepper, paprika",
                    "Grill/pan 4-5 min per side to 75°C",
                    "150 g cooked rice + salad",
                ],
                "https://www.youtube.com/embed/u2ZVt8V4g2M",
            ),
            meal(
                "Rajma Protein Bowl",
                22.0,
                520.0,
                Diet::Veg,
                &[
                    "50 g dry rajma (soaked; ~150 g cooked)",
                    "Gravy: 10 g oil, onion, tomato, ginger-garlic, spices",
                    "Pressure cook till soft; simmer 10 min",
                    "Serve with 150 g cooked rice",
                ],
                "https://www.youtube.com/embed/2pY1Hq0h4jA",
            ),
        ],
        dinner: vec![
            meal(
                "Chicken & Veg Stir-fry",
                35.0,
                480.0,
                Diet::NonVeg,
                &[
                    "150 g chicken thigh/breast, sliced",
                    "200 g mixed vegetables",
                    "Sauce: 10 ml soy, 5 ml vinegar, garlic, chilli",
                    "Stir-fry veg 2 min; add chicken 5-6 min; toss with sauce",
                ],
                "https://www.youtube.com/embed/7kYz2EwN8uM",
            ),
            meal(
                "Chole + Quinoa",
                24.0,
                520.0,
                Diet::Veg,
                &[
                    "60 g dry chole (kabuli chana)",
                    "120 g cooked quinoa (from ~40 g raw)",
                    "Onion-tomato masala with spices",
                    "Combine; simmer 5 min",
                ],
                "https://www.youtube.com/embed/j0g8j5l9C7g",
            ),
        ],
    }
}

/// Default snack bank: packaged high-protein snacks sold in India.
pub fn builtin_snacks() -> SnackCatalog {
    SnackCatalog {
        non_veg: vec![
            snack(
                "DOKi Buffalo Jerky (30 g)",
                15.28,
                "https://www.amazon.in/Essentials-Variety-Flavours-Protein-All-Natural/dp/B0DQTRJ1S3",
            ),
            snack(
                "DOKi Pork Puffs (25 g)",
                15.06,
                "https://www.amazon.in/Flavours-Protein-Calorie-All-Natural-Friendly/dp/B0D3TW6BY8",
            ),
            snack(
                "DOKi Chicken Chips (30 g)",
                10.83,
                "https://www.amazon.in/Chicken-Protein-Calorie-All-natural-protein/dp/B0BN1BP63S",
            ),
        ],
        veg: vec![
            snack(
                "Epigamia Turbo Protein Yogurt (140 g cup)",
                17.0,
                "https://www.amazon.in/Epigamia-Protein-Turbo-Yogurt-Natural/dp/B0DQYFYFFR",
            ),
            snack(
                "Conscious Food Crunchy Chickpeas (50 g)",
                11.0,
                "https://www.amazon.in/Conscious-Food-High-Protein-Cholesterol-Free-Preservatives/dp/B0DJ2YZVBB",
            ),
            snack(
                "The Whole Truth 20 g Protein Bar (67 g)",
                20.0,
                "https://www.amazon.in/Whole-Truth-Preservatives-Artificial-Flavours/dp/B0BVLXKKVZ",
            ),
        ],
    }
}
