use crate::models::Profile;

/// Optional narrowing of the swipe queue
///
/// The default value lets every candidate through.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SwipeFilters {
    /// Sport names, compared case-insensitively; empty means any sport
    pub sports: Vec<String>,
    /// Upper bound on `Profile::distance`, in km
    pub max_distance: Option<f64>,
    /// Inclusive age bounds
    pub age_range: Option<(u8, u8)>,
}

impl SwipeFilters {
    pub fn is_empty(&self) -> bool {
        self.sports.is_empty() && self.max_distance.is_none() && self.age_range.is_none()
    }

    /// Check if a profile passes every configured filter
    #[inline]
    pub fn matches(&self, profile: &Profile) -> bool {
        // Sports overlap
        if !self.sports.is_empty() && !plays_any(profile, &self.sports) {
            return false;
        }

        if let Some(max) = self.max_distance {
            if profile.distance > max {
                return false;
            }
        }

        if let Some((min_age, max_age)) = self.age_range {
            if profile.age < min_age || profile.age > max_age {
                return false;
            }
        }

        true
    }

    /// Keep the candidates that pass, preserving their order
    pub fn apply(&self, candidates: Vec<Profile>) -> Vec<Profile> {
        if self.is_empty() {
            return candidates;
        }
        candidates.into_iter().filter(|p| self.matches(p)).collect()
    }
}

/// Whether `profile` lists at least one of `sports`
#[inline]
pub fn plays_any(profile: &Profile, sports: &[String]) -> bool {
    let names: Vec<String> = profile.sport_names().iter().map(|n| n.to_lowercase()).collect();
    sports.iter().any(|wanted| names.contains(&wanted.trim().to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SportSkill;

    fn create_test_profile(id: &str, age: u8, distance: f64, sports: &[&str]) -> Profile {
        Profile {
            id: id.to_string(),
            name: format!("Test {}", id),
            age,
            location: "Palermo".to_string(),
            bio: String::new(),
            sports: sports.iter().map(|s| SportSkill::new(*s, None)).collect(),
            distance,
            profile_picture: String::new(),
        }
    }

    #[test]
    fn test_empty_filters_keep_everything() {
        let candidates = vec![
            create_test_profile("1", 20, 1.0, &["Tenis"]),
            create_test_profile("2", 40, 30.0, &[]),
        ];

        let filters = SwipeFilters::default();
        assert!(filters.is_empty());
        assert_eq!(filters.apply(candidates.clone()), candidates);
    }

    #[test]
    fn test_sport_match_ignores_case() {
        let profile = create_test_profile("1", 25, 2.0, &["Fútbol", "Running"]);

        assert!(plays_any(&profile, &["running".to_string()]));
        assert!(plays_any(&profile, &["FÚTBOL".to_string()]));
        assert!(!plays_any(&profile, &["Tenis".to_string()]));
    }

    #[test]
    fn test_age_range_is_inclusive() {
        let filters = SwipeFilters {
            age_range: Some((25, 30)),
            ..Default::default()
        };

        assert!(filters.matches(&create_test_profile("1", 25, 0.0, &[])));
        assert!(filters.matches(&create_test_profile("2", 30, 0.0, &[])));
        assert!(!filters.matches(&create_test_profile("3", 24, 0.0, &[])));
        assert!(!filters.matches(&create_test_profile("4", 31, 0.0, &[])));
    }

    #[test]
    fn test_combined_filters_keep_order() {
        let candidates = vec![
            create_test_profile("1", 28, 3.0, &["Tenis"]),
            create_test_profile("2", 28, 12.0, &["Tenis"]),
            create_test_profile("3", 45, 1.0, &["Tenis"]),
            create_test_profile("4", 27, 0.5, &["Pádel"]),
            create_test_profile("5", 26, 5.0, &["Natación", "tenis"]),
        ];
        let filters = SwipeFilters {
            sports: vec!["Tenis".to_string()],
            max_distance: Some(10.0),
            age_range: Some((18, 35)),
        };

        let ids: Vec<String> = filters.apply(candidates).into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["1", "5"]);
    }
}
