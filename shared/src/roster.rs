//! Player list views for the homepage squad and the admin tabs.

use crate::models::player::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerTab {
    #[default]
    Active,
    Pending,
}

impl PlayerTab {
    pub fn label(&self) -> &'static str {
        match self {
            PlayerTab::Active => "Active Squad",
            PlayerTab::Pending => "Pending Approval",
        }
    }

    pub fn includes(&self, player: &Player) -> bool {
        match self {
            PlayerTab::Active => player.approved,
            PlayerTab::Pending => player.is_pending(),
        }
    }
}

/// Players on `tab` whose name contains `search`, ignoring case.
pub fn filter_players<'a>(players: &'a [Player], tab: PlayerTab, search: &str) -> Vec<&'a Player> {
    let needle = search.trim().to_lowercase();
    players
        .iter()
        .filter(|p| tab.includes(p))
        .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
        .collect()
}

pub fn pending_count(players: &[Player]) -> usize {
    players.iter().filter(|p| p.is_pending()).count()
}

/// The public squad: approved players only.
pub fn squad(players: &[Player]) -> Vec<Player> {
    players.iter().filter(|p| p.approved).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn player(id: i64, name: &str, approved: bool) -> Player {
        Player {
            id,
            name: name.to_string(),
            role: "Batsman".to_string(),
            batting_style: String::new(),
            bowling_style: String::new(),
            matches: 0,
            runs: 0,
            wickets: 0,
            image_url: None,
            approved,
        }
    }

    fn roster() -> Vec<Player> {
        vec![
            player(1, "Babar Azam", true),
            player(2, "Shadab Khan", false),
            player(3, "Fakhar Zaman", true),
            player(4, "Naseem Shah", false),
        ]
    }

    #[rstest]
    #[case(PlayerTab::Active, "", vec![1, 3])]
    #[case(PlayerTab::Pending, "", vec![2, 4])]
    #[case(PlayerTab::Active, "ZAM", vec![1, 3])]
    #[case(PlayerTab::Pending, "shah", vec![4])]
    #[case(PlayerTab::Pending, "babar", vec![])]
    fn test_filter_players(#[case] tab: PlayerTab, #[case] search: &str, #[case] expected: Vec<i64>) {
        let players = roster();
        let ids: Vec<i64> = filter_players(&players, tab, search).iter().map(|p| p.id).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_pending_count_and_squad() {
        let players = roster();
        assert_eq!(pending_count(&players), 2);
        let names: Vec<String> = squad(&players).into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Babar Azam", "Fakhar Zaman"]);
    }
}
