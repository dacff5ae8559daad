use crate::models::{SkillLevel, SportSkill};
use serde::{Deserialize, Deserializer};
use std::collections::HashSet;

/// Every shape the "sports" field has been seen in
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawSports {
    /// `"fútbol,tenis"`
    Csv(String),
    /// `["Tenis", {"sport": "Pádel", "level": "Intermedio"}]`
    List(Vec<RawSport>),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawSport {
    Name(String),
    Skill {
        sport: String,
        #[serde(default)]
        level: Option<SkillLevel>,
    },
}

/// Normalize any accepted sports shape into tagged records
///
/// Names are trimmed, empty entries dropped and duplicates (compared
/// case-insensitively) collapsed onto their first occurrence.
pub fn normalize_sports(raw: RawSports) -> Vec<SportSkill> {
    let entries: Vec<(String, Option<SkillLevel>)> = match raw {
        RawSports::Csv(csv) => csv
            .split(',')
            .map(|name| (name.to_string(), None))
            .collect(),
        RawSports::List(list) => list
            .into_iter()
            .map(|entry| match entry {
                RawSport::Name(name) => (name, None),
                RawSport::Skill { sport, level } => (sport, level),
            })
            .collect(),
    };

    let mut seen = HashSet::new();
    entries
        .into_iter()
        .filter_map(|(name, level)| {
            let name = name.trim();
            if name.is_empty() || !seen.insert(name.to_lowercase()) {
                return None;
            }
            Some(SportSkill::new(name, level))
        })
        .collect()
}

/// Serde adapter so every deserialized record passes through `normalize_sports`
pub fn deserialize_sports<'de, D>(deserializer: D) -> Result<Vec<SportSkill>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawSports>::deserialize(deserializer)?;
    Ok(raw.map(normalize_sports).unwrap_or_default())
}

/// Like `deserialize_sports`, for partial updates where the field may be absent
pub fn deserialize_optional_sports<'de, D>(deserializer: D) -> Result<Option<Vec<SportSkill>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawSports>::deserialize(deserializer)?;
    Ok(raw.map(normalize_sports))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> Vec<SportSkill> {
        normalize_sports(serde_json::from_value(value).unwrap())
    }

    #[test]
    fn test_plain_string_list() {
        let sports = parse(json!(["Tenis", "Gimnasio"]));
        assert_eq!(
            sports,
            vec![SportSkill::new("Tenis", None), SportSkill::new("Gimnasio", None)]
        );
    }

    #[test]
    fn test_object_list_with_spanish_levels() {
        let sports = parse(json!([
            { "sport": "Fútbol", "level": "Avanzado" },
            { "sport": "Running", "level": "Intermedio" },
            { "sport": "Tenis", "level": "Principiante" }
        ]));

        assert_eq!(sports[0], SportSkill::new("Fútbol", Some(SkillLevel::Advanced)));
        assert_eq!(sports[1].level, Some(SkillLevel::Intermediate));
        assert_eq!(sports[2].level, Some(SkillLevel::Beginner));
    }

    #[test]
    fn test_comma_separated_string() {
        let sports = parse(json!("fútbol, tenis,,  "));
        assert_eq!(
            sports,
            vec![SportSkill::new("fútbol", None), SportSkill::new("tenis", None)]
        );
    }

    #[test]
    fn test_mixed_list_deduplicates_case_insensitively() {
        let sports = parse(json!([
            { "sport": "Pádel", "level": "advanced" },
            "pádel",
            "Natación"
        ]));

        assert_eq!(sports.len(), 2);
        assert_eq!(sports[0].level, Some(SkillLevel::Advanced));
        assert_eq!(sports[1].sport, "Natación");
    }

    #[test]
    fn test_unknown_level_is_rejected() {
        let result: Result<RawSports, _> =
            serde_json::from_value(json!([{ "sport": "Golf", "level": "pro" }]));
        assert!(result.is_err());
    }
}
