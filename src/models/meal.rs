use std::fmt;

use serde::{Deserialize, Serialize};

/// Diet tag on a catalog entry, also used as the user's diet preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Diet {
    #[serde(rename = "veg")]
    Veg,

    #[default]
    #[serde(rename = "non-veg")]
    NonVeg,
}

impl Diet {
    /// Whether an entry tagged `tag` is allowed under this preference.
    ///
    /// Vegetarians only see veg entries; non-vegetarians see everything.
    #[inline]
    pub fn admits(self, tag: Diet) -> bool {
        match self {
            Diet::Veg => tag == Diet::Veg,
            Diet::NonVeg => true,
        }
    }

    /// Parse a diet tag, accepting a few common spellings.
    pub fn from_tag(tag: &str) -> Option<Diet> {
        match tag.trim().to_lowercase().as_str() {
            "veg" | "vegetarian" => Some(Diet::Veg),
            "non-veg" | "nonveg" | "non_veg" | "non-vegetarian" => Some(Diet::NonVeg),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Diet::Veg => "Vegetarian",
            Diet::NonVeg => "Non-Vegetarian",
        }
    }
}

impl fmt::Display for Diet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diet::Veg => write!(f, "veg"),
            Diet::NonVeg => write!(f, "non-veg"),
        }
    }
}

/// One of the three meals of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealSlot {
    /// All slots in the order they are planned and displayed.
    pub const ALL: [MealSlot; 3] = [MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner];

    pub fn title(self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::Dinner => "Dinner",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// A suggested meal with its protein content and recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealOption {
    pub name: String,

    /// Grams of protein per serving.
    #[serde(rename = "protein")]
    pub protein_grams: f64,

    /// Approximate kcal per serving.
    pub calories: f64,

    #[serde(rename = "diet")]
    pub diet_tag: Diet,

    #[serde(rename = "recipe", default)]
    pub recipe_steps: Vec<String>,

    #[serde(rename = "video", default, skip_serializing_if = "Option::is_none")]
    pub video_ref: Option<String>,
}

impl MealOption {
    /// Distance between this meal's protein and a sub-goal.
    #[inline]
    pub fn protein_gap(&self, target_grams: f64) -> f64 {
        (self.protein_grams - target_grams).abs()
    }

    /// Non-empty name and finite, non-negative nutrition values.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && self.protein_grams.is_finite()
            && self.protein_grams >= 0.0
            && self.calories.is_finite()
            && self.calories >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_meal() -> MealOption {
        MealOption {
            name: "Masala Omelette".to_string(),
            protein_grams: 19.0,
            calories: 280.0,
            diet_tag: Diet::NonVeg,
            recipe_steps: vec!["Beat eggs".to_string()],
            video_ref: None,
        }
    }

    #[test]
    fn test_veg_preference_only_admits_veg() {
        assert!(Diet::Veg.admits(Diet::Veg));
        assert!(!Diet::Veg.admits(Diet::NonVeg));
        assert!(Diet::NonVeg.admits(Diet::Veg));
        assert!(Diet::NonVeg.admits(Diet::NonVeg));
    }

    #[test]
    fn test_diet_from_tag() {
        assert_eq!(Diet::from_tag("veg"), Some(Diet::Veg));
        assert_eq!(Diet::from_tag(" Non-Veg "), Some(Diet::NonVeg));
        assert_eq!(Diet::from_tag("vegan"), None);
    }

    #[test]
    fn test_protein_gap() {
        let meal = sample_meal();
        assert!((meal.protein_gap(25.0) - 6.0).abs() < 1e-9);
        assert!((meal.protein_gap(10.0) - 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_is_valid() {
        assert!(sample_meal().is_valid());

        let mut invalid = sample_meal();
        invalid.protein_grams = -1.0;
        assert!(!invalid.is_valid());

        let mut unnamed = sample_meal();
        unnamed.name = "  ".to_string();
        assert!(!unnamed.is_valid());
    }

    #[test]
    fn test_json_field_names() {
        let json = r#"{"name": "Rajma Bowl", "protein": 22, "calories": 520, "diet": "veg", "recipe": ["Soak rajma"]}"#;
        let meal: MealOption = serde_json::from_str(json).unwrap();
        assert_eq!(meal.diet_tag, Diet::Veg);
        assert_eq!(meal.protein_grams, 22.0);
        assert_eq!(meal.recipe_steps.len(), 1);
        assert!(meal.video_ref.is_none());
    }
}
