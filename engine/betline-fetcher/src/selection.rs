use crate::models::{SelectedLeague, Sport};

/// Pick the top leagues of allowed sport families, in catalog order
pub fn select_leagues(sports: &[Sport], allowed_families: &[String]) -> Vec<SelectedLeague> {
    sports
        .iter()
        .filter(|sport| allowed_families.iter().any(|family| *family == sport.family))
        .flat_map(|sport| {
            sport.regions.iter().flat_map(move |region| {
                region
                    .leagues
                    .iter()
                    .filter(|league| league.top)
                    .map(move |league| SelectedLeague::from_catalog(sport, region, league))
            })
        })
        .collect()
}

/// First `limit` items in decoded order
pub fn cap_events<T>(mut events: Vec<T>, limit: usize) -> Vec<T> {
    events.truncate(limit);
    events
}
