use lifepath_domain::{DomainError, DreamCard, PersonalityTrait, Profile};

/// The six dream cards a player can pick from, in display order.
pub fn dream_cards() -> Vec<DreamCard> {
    use PersonalityTrait::*;

    vec![
        DreamCard::new("surgeon", "Top Surgeon", Investigative).with_secondary(Social),
        DreamCard::new("artist", "Independent Artist", Artistic).with_secondary(Social),
        DreamCard::new("founder", "Startup Founder", Enterprising).with_secondary(Investigative),
        DreamCard::new("designer", "Product Designer", Artistic).with_secondary(Investigative),
        DreamCard::new("planner", "Urban Planner", Investigative).with_secondary(Conventional),
        DreamCard::new("mentor", "Community Mentor", Social).with_secondary(Enterprising),
    ]
}

pub fn dream_card_by_id(id: &str) -> Option<DreamCard> {
    dream_cards().into_iter().find(|card| card.id == id)
}

/// Card recommended by the profile's dominant trait, if it has one.
pub fn recommended_dream_card(profile: &Profile) -> Option<DreamCard> {
    let dominant = profile.dominant_trait()?;
    dream_card_by_id(DreamCard::recommended_id_for(dominant))
}

/// Card a run starts with: the requested id, else the profile's
/// recommendation, else the first card.
pub fn select_dream_card(
    requested: Option<&str>,
    profile: Option<&Profile>,
) -> Result<DreamCard, DomainError> {
    if let Some(id) = requested {
        return dream_card_by_id(id).ok_or_else(|| DomainError::not_found("DreamCard", id));
    }
    if let Some(card) = profile.and_then(recommended_dream_card) {
        return Ok(card);
    }
    dream_cards()
        .into_iter()
        .next()
        .ok_or_else(|| DomainError::not_found("DreamCard", "default"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifepath_domain::ProfileTrait;

    #[test]
    fn every_recommendation_exists_in_catalog() {
        for trait_key in ProfileTrait::all() {
            let id = DreamCard::recommended_id_for(trait_key);
            assert!(dream_card_by_id(id).is_some(), "missing card {id}");
        }
    }

    #[test]
    fn card_ids_are_unique() {
        let cards = dream_cards();
        let mut ids: Vec<_> = cards.iter().map(|c| c.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), cards.len());
    }

    #[test]
    fn recommends_founder_for_ambitious_profile() {
        let profile = Profile::new("Ada")
            .with_score(ProfileTrait::Ambition, 8)
            .with_score(ProfileTrait::Creativity, 3);
        assert_eq!(recommended_dream_card(&profile).unwrap().id, "founder");
        assert!(recommended_dream_card(&Profile::new("Empty")).is_none());
    }

    #[test]
    fn selection_prefers_request_then_recommendation_then_first_card() {
        let creative = Profile::new("Mo").with_score(ProfileTrait::Creativity, 9);

        let requested = select_dream_card(Some("mentor"), Some(&creative)).unwrap();
        assert_eq!(requested.id, "mentor");
        assert_eq!(select_dream_card(None, Some(&creative)).unwrap().id, "artist");
        assert_eq!(
            select_dream_card(None, Some(&Profile::new("Blank"))).unwrap().id,
            "surgeon"
        );
        assert_eq!(select_dream_card(None, None).unwrap().id, "surgeon");
        assert!(matches!(
            select_dream_card(Some("astronaut"), None),
            Err(DomainError::NotFound { .. })
        ));
    }
}
