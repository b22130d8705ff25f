//! Which fixtures the homepage shows, and in what order.

use std::cmp::Ordering;

use chrono::NaiveDateTime;

use crate::models::fixture::{Match, MatchStatus};

/// Most cards the default view fills up to.
pub const DEFAULT_VIEW_CAP: usize = 4;

/// Upcoming fixtures taken before any completed ones in the default view.
pub const UPCOMING_QUOTA: usize = 2;

/// The fixture list's search box and status select.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchQuery {
    pub search: String,
    /// `None` means "All Statuses".
    pub status: Option<MatchStatus>,
}

impl MatchQuery {
    pub fn is_default(&self) -> bool {
        self.search.is_empty() && self.status.is_none()
    }

    fn matches(&self, m: &Match) -> bool {
        if let Some(status) = self.status {
            if m.status != status {
                return false;
            }
        }
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        m.opponent.to_lowercase().contains(&needle) || m.venue.to_lowercase().contains(&needle)
    }
}

/// Fixtures split by status and sorted for display.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partitioned {
    /// Source order.
    pub live: Vec<Match>,
    /// Soonest first.
    pub upcoming: Vec<Match>,
    /// Most recent first.
    pub completed: Vec<Match>,
}

impl Partitioned {
    pub fn from_matches(matches: &[Match]) -> Self {
        let mut parts = Partitioned::default();
        for m in matches {
            match m.status {
                MatchStatus::Live => parts.live.push(m.clone()),
                MatchStatus::Upcoming => parts.upcoming.push(m.clone()),
                MatchStatus::Completed => parts.completed.push(m.clone()),
                MatchStatus::Unknown => {}
            }
        }
        parts
            .upcoming
            .sort_by(|a, b| by_date(a.match_date, b.match_date, false));
        parts
            .completed
            .sort_by(|a, b| by_date(a.match_date, b.match_date, true));
        parts
    }

    /// Live, then upcoming, then completed.
    pub fn into_ordered(self) -> Vec<Match> {
        let mut ordered = self.live;
        ordered.extend(self.upcoming);
        ordered.extend(self.completed);
        ordered
    }
}

/// Undated fixtures go last in either direction.
fn by_date(a: Option<NaiveDateTime>, b: Option<NaiveDateTime>, newest_first: bool) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) if newest_first => b.cmp(&a),
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Every displayable fixture in base order: live, upcoming, completed.
pub fn prioritized(matches: &[Match]) -> Vec<Match> {
    Partitioned::from_matches(matches).into_ordered()
}

/// The landing list shown before any search or filter.
///
/// Live fixtures first, then up to [`UPCOMING_QUOTA`] upcoming, then completed
/// ones, then the remaining upcoming fixtures, never exceeding
/// [`DEFAULT_VIEW_CAP`] cards in total.
pub fn default_view(matches: &[Match]) -> Vec<Match> {
    let Partitioned {
        live,
        upcoming,
        completed,
    } = Partitioned::from_matches(matches);

    let mut view: Vec<Match> = live.into_iter().take(DEFAULT_VIEW_CAP).collect();

    let quota = UPCOMING_QUOTA.min(upcoming.len()).min(room_left(&view));
    view.extend(upcoming.iter().take(quota).cloned());

    let room = room_left(&view);
    view.extend(completed.into_iter().take(room));

    let room = room_left(&view);
    view.extend(upcoming.into_iter().skip(quota).take(room));

    view
}

fn room_left(view: &[Match]) -> usize {
    DEFAULT_VIEW_CAP.saturating_sub(view.len())
}

/// What the fixture list renders for the current query.
pub fn visible_matches(matches: &[Match], query: &MatchQuery) -> Vec<Match> {
    if query.is_default() {
        return default_view(matches);
    }
    prioritized(matches)
        .into_iter()
        .filter(|m| query.matches(m))
        .collect()
}

/// Whether to show the "default view" hint under the list.
pub fn shows_default_hint(total: usize, query: &MatchQuery) -> bool {
    query.is_default() && total > 5
}

/// Admin table order: newest fixture first, undated last.
pub fn admin_order(matches: &[Match]) -> Vec<Match> {
    let mut ordered = matches.to_vec();
    ordered.sort_by(|a, b| by_date(a.match_date, b.match_date, true));
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn base() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    fn fixture(id: i64, opponent: &str, status: MatchStatus, day_offset: i64) -> Match {
        Match {
            id,
            opponent: opponent.to_string(),
            match_date: Some(base() + Duration::days(day_offset)),
            venue: format!("Ground {}", id),
            status,
            result: None,
        }
    }

    fn opponents(matches: &[Match]) -> Vec<&str> {
        matches.iter().map(|m| m.opponent.as_str()).collect()
    }

    fn sample() -> Vec<Match> {
        vec![
            fixture(4, "D", MatchStatus::Completed, -1),
            fixture(3, "C", MatchStatus::Upcoming, 2),
            fixture(1, "A", MatchStatus::Live, 0),
            fixture(5, "E", MatchStatus::Completed, -2),
            fixture(2, "B", MatchStatus::Upcoming, 1),
        ]
    }

    #[test]
    fn test_default_view_example() {
        assert_eq!(opponents(&default_view(&sample())), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_two_upcoming_two_completed_without_live() {
        let matches = vec![
            fixture(1, "U3", MatchStatus::Upcoming, 3),
            fixture(2, "U1", MatchStatus::Upcoming, 1),
            fixture(3, "U2", MatchStatus::Upcoming, 2),
            fixture(4, "C3", MatchStatus::Completed, -3),
            fixture(5, "C1", MatchStatus::Completed, -1),
            fixture(6, "C2", MatchStatus::Completed, -2),
        ];
        assert_eq!(opponents(&default_view(&matches)), vec!["U1", "U2", "C1", "C2"]);
    }

    #[test]
    fn test_extra_upcoming_fill_when_completed_short() {
        let matches = vec![
            fixture(1, "U1", MatchStatus::Upcoming, 1),
            fixture(2, "U2", MatchStatus::Upcoming, 2),
            fixture(3, "U3", MatchStatus::Upcoming, 3),
            fixture(4, "U4", MatchStatus::Upcoming, 4),
            fixture(5, "C1", MatchStatus::Completed, -1),
        ];
        assert_eq!(opponents(&default_view(&matches)), vec!["U1", "U2", "C1", "U3"]);
    }

    #[test]
    fn test_completed_fill_when_upcoming_short() {
        let matches = vec![
            fixture(1, "U1", MatchStatus::Upcoming, 1),
            fixture(2, "C1", MatchStatus::Completed, -1),
            fixture(3, "C2", MatchStatus::Completed, -2),
            fixture(4, "C3", MatchStatus::Completed, -3),
            fixture(5, "C4", MatchStatus::Completed, -4),
        ];
        assert_eq!(opponents(&default_view(&matches)), vec!["U1", "C1", "C2", "C3"]);
    }

    #[test]
    fn test_live_overflow_is_capped_in_source_order() {
        let matches: Vec<Match> = (0..5)
            .map(|i| fixture(i, &format!("L{}", i), MatchStatus::Live, 0))
            .chain(std::iter::once(fixture(9, "U", MatchStatus::Upcoming, 1)))
            .collect();
        let view = default_view(&matches);
        assert_eq!(opponents(&view), vec!["L0", "L1", "L2", "L3"]);
    }

    #[test]
    fn test_three_live_leave_one_upcoming_slot() {
        let matches = vec![
            fixture(1, "L1", MatchStatus::Live, 0),
            fixture(2, "L2", MatchStatus::Live, 0),
            fixture(3, "L3", MatchStatus::Live, 0),
            fixture(4, "U1", MatchStatus::Upcoming, 1),
            fixture(5, "U2", MatchStatus::Upcoming, 2),
            fixture(6, "C1", MatchStatus::Completed, -1),
        ];
        assert_eq!(opponents(&default_view(&matches)), vec!["L1", "L2", "L3", "U1"]);
    }

    #[test]
    fn test_empty_and_unknown() {
        assert!(default_view(&[]).is_empty());
        let unknown = fixture(1, "X", MatchStatus::Unknown, 0);
        assert!(default_view(&[unknown.clone()]).is_empty());
        assert!(prioritized(&[unknown]).is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_and_uncapped() {
        let mut matches = sample();
        matches.push(fixture(6, "Bad Homburg", MatchStatus::Completed, -5));
        matches.push(fixture(7, "Zeta", MatchStatus::Upcoming, 9));
        matches[6].venue = "Bockenheim".to_string();
        let query = MatchQuery {
            search: "B".to_string(),
            status: None,
        };
        let found = visible_matches(&matches, &query);
        assert_eq!(opponents(&found), vec!["B", "Zeta", "Bad Homburg"]);
    }

    #[test]
    fn test_status_filter_keeps_base_order() {
        let query = MatchQuery {
            search: String::new(),
            status: Some(MatchStatus::Completed),
        };
        assert_eq!(opponents(&visible_matches(&sample(), &query)), vec!["D", "E"]);
    }

    #[test]
    fn test_status_and_search_combined() {
        let query = MatchQuery {
            search: "ground 3".to_string(),
            status: Some(MatchStatus::Upcoming),
        };
        assert_eq!(opponents(&visible_matches(&sample(), &query)), vec!["C"]);
    }

    #[test]
    fn test_undated_sort_last() {
        let mut undated = fixture(8, "TBA", MatchStatus::Upcoming, 0);
        undated.match_date = None;
        let matches = vec![undated, fixture(2, "Soon", MatchStatus::Upcoming, 1)];
        assert_eq!(opponents(&prioritized(&matches)), vec!["Soon", "TBA"]);
        assert_eq!(opponents(&admin_order(&matches)), vec!["Soon", "TBA"]);
    }

    #[test]
    fn test_admin_order_newest_first() {
        assert_eq!(opponents(&admin_order(&sample())), vec!["C", "B", "A", "D", "E"]);
    }

    #[test]
    fn test_default_hint() {
        assert!(shows_default_hint(6, &MatchQuery::default()));
        assert!(!shows_default_hint(5, &MatchQuery::default()));
        let query = MatchQuery {
            search: "x".to_string(),
            status: None,
        };
        assert!(!shows_default_hint(10, &query));
    }

    fn arb_status() -> impl Strategy<Value = MatchStatus> {
        prop_oneof![
            Just(MatchStatus::Live),
            Just(MatchStatus::Upcoming),
            Just(MatchStatus::Completed),
        ]
    }

    fn arb_matches() -> impl Strategy<Value = Vec<Match>> {
        prop::collection::vec((arb_status(), -30i64..30), 0..12).prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (status, offset))| fixture(i as i64, &format!("M{}", i), status, offset))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_default_view_is_bounded(matches in arb_matches()) {
            prop_assert!(default_view(&matches).len() <= DEFAULT_VIEW_CAP);
        }

        #[test]
        fn prop_default_view_leads_with_live(matches in arb_matches()) {
            let live: Vec<i64> = matches.iter().filter(|m| m.is_live()).map(|m| m.id).collect();
            let view = default_view(&matches);
            let shown = live.len().min(DEFAULT_VIEW_CAP);
            let leading: Vec<i64> = view.iter().take(shown).map(|m| m.id).collect();
            prop_assert_eq!(leading, live[..shown].to_vec());
        }

        #[test]
        fn prop_default_view_has_no_duplicates(matches in arb_matches()) {
            let view = default_view(&matches);
            let mut ids: Vec<i64> = view.iter().map(|m| m.id).collect();
            ids.sort_unstable();
            ids.dedup();
            prop_assert_eq!(ids.len(), view.len());
        }

        #[test]
        fn prop_default_view_fills_when_possible(matches in arb_matches()) {
            let view = default_view(&matches);
            prop_assert_eq!(view.len(), matches.len().min(DEFAULT_VIEW_CAP));
        }

        #[test]
        fn prop_search_matches_predicate(matches in arb_matches(), needle in "[a-zA-Z0-9 ]{1,3}") {
            let query = MatchQuery { search: needle.clone(), status: None };
            let found = visible_matches(&matches, &query);
            let lower = needle.to_lowercase();
            let expected = matches.iter().filter(|m| {
                m.opponent.to_lowercase().contains(&lower) || m.venue.to_lowercase().contains(&lower)
            }).count();
            prop_assert_eq!(found.len(), expected);
        }
    }
}
