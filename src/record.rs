use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The canonical record every recovered payload normalizes into. Built once
/// per request and wholly replaced on regeneration; `imageUrl` slots are
/// back-filled later by the image-generation side, outside this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRecord {
    pub title_zh: String,
    pub summary: Summary,
    pub ingredients: Vec<IngredientSection>,
    pub steps: Vec<Step>,
    pub image_shots: Vec<ImageShot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_guide: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub story: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faq: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tips: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub troubleshooting: Option<Vec<TroubleshootingEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_recipes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aliases: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub one_line: String,
    pub healing_tone: String,
    pub difficulty: Difficulty,
    pub time_total_min: f64,
    pub time_active_min: f64,
    pub servings: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Map bilingual free text onto the canonical vocabulary.
    pub fn canonical(raw: &str) -> Option<&'static str> {
        let t = raw.trim().to_ascii_lowercase();
        match t.as_str() {
            "easy" | "simple" | "beginner" | "简单" | "容易" | "轻松" | "入门" => Some("easy"),
            "medium" | "normal" | "moderate" | "intermediate" | "中等" | "适中" | "一般" => {
                Some("medium")
            }
            "hard" | "difficult" | "advanced" | "expert" | "困难" | "难" | "复杂" | "进阶" => {
                Some("hard")
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientSection {
    pub section: String,
    pub items: Vec<IngredientItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientItem {
    pub name: String,
    pub amount: f64,
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_key: Option<IconKey>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconKey {
    Meat,
    Veg,
    Fruit,
    Seafood,
    Grain,
    Bean,
    Dairy,
    Egg,
    Spice,
    Sauce,
    Oil,
    Tool,
    Other,
}

pub(crate) const ICON_KEYS: [&str; 13] = [
    "meat", "veg", "fruit", "seafood", "grain", "bean", "dairy", "egg", "spice", "sauce", "oil",
    "tool", "other",
];

impl IconKey {
    /// Map free text onto the fixed icon set with light fuzzy correction.
    /// Unrecognized input maps to `None`; the caller falls back to `other`.
    pub fn canonical(raw: &str) -> Option<&'static str> {
        let t = raw.trim().to_ascii_lowercase();
        if let Some(k) = ICON_KEYS.iter().find(|k| **k == t) {
            return Some(*k);
        }
        match t.as_str() {
            "meats" | "肉" | "肉类" => Some("meat"),
            "vegetable" | "vegetables" | "veggie" | "veggies" | "蔬菜" | "青菜" => Some("veg"),
            "fruits" | "水果" => Some("fruit"),
            "fish" | "shellfish" | "海鲜" | "水产" => Some("seafood"),
            "grains" | "staple" | "主食" | "谷物" | "米面" => Some("grain"),
            "beans" | "豆类" | "豆制品" => Some("bean"),
            "milk" | "乳制品" | "奶制品" => Some("dairy"),
            "eggs" | "蛋" | "蛋类" => Some("egg"),
            "spices" | "seasoning" | "香料" | "调味" => Some("spice"),
            "sauces" | "调料" | "酱料" | "酱" => Some("sauce"),
            "oils" | "fat" | "油" | "油脂" => Some("oil"),
            "tools" | "utensil" | "工具" | "器具" => Some("tool"),
            _ => ICON_KEYS.iter().find(|k| t.starts_with(**k)).copied(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub id: String,
    pub title: String,
    pub action: String,
    pub heat: Heat,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timer_sec: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual_cue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_points: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Heat {
    Low,
    MediumLow,
    Medium,
    MediumHigh,
    High,
}

impl Heat {
    /// Map bilingual heat descriptors onto the canonical vocabulary.
    pub fn canonical(raw: &str) -> Option<&'static str> {
        let t = raw.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        match t.as_str() {
            "low" | "gentle" | "simmer" | "小火" | "微火" | "文火" | "慢火" => Some("low"),
            "medium-low" | "mediumlow" | "med-low" | "中小火" | "小中火" => Some("medium-low"),
            "medium" | "moderate" | "mid" | "中火" => Some("medium"),
            "medium-high" | "mediumhigh" | "med-high" | "中大火" | "大中火" => {
                Some("medium-high")
            }
            "high" | "strong" | "max" | "大火" | "旺火" | "猛火" => Some("high"),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageShot {
    pub key: String,
    pub image_prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub negative_prompt: Option<String>,
    pub ratio: Ratio,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ratio {
    #[serde(rename = "16:9")]
    Wide,
    #[serde(rename = "4:3")]
    Standard,
    #[serde(rename = "3:2")]
    Classic,
}

/// Bucket a decimal aspect ratio to the nearest canonical label within ±0.15.
pub(crate) fn bucket_ratio(r: f64) -> Option<&'static str> {
    const BUCKETS: [(f64, &str); 3] = [(16.0 / 9.0, "16:9"), (4.0 / 3.0, "4:3"), (1.5, "3:2")];
    let mut best: Option<(f64, &'static str)> = None;
    for (target, label) in BUCKETS {
        let d = (r - target).abs();
        if d <= 0.15 && best.is_none_or(|(bd, _)| d < bd) {
            best = Some((d, label));
        }
    }
    best.map(|(_, label)| label)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TroubleshootingEntry {
    pub problem: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fix: Option<String>,
}
