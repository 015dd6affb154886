use crate::domain::{Activity, ActivityStatus, StatusFilter};

pub struct ActivityService;

impl ActivityService {
    /// Activities whose action, description, IP address or location contain `search`.
    pub fn filter<'a>(
        activities: &'a [Activity],
        search: &str,
        status: StatusFilter<ActivityStatus>,
    ) -> Vec<&'a Activity> {
        activities
            .iter()
            .filter(|activity| activity.matches_search(search) && status.matches(&activity.status))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn filter_by_location_and_status() {
        let activities = seed::activities();
        let matches = ActivityService::filter(
            &activities,
            "london",
            StatusFilter::Only(ActivityStatus::Failed),
        );
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].action, "Login Attempt");
    }

    #[test]
    fn empty_search_returns_everything() {
        let activities = seed::activities();
        assert_eq!(
            ActivityService::filter(&activities, "", StatusFilter::All).len(),
            activities.len()
        );
    }
}
