//! `simon scores`: print the ranked leaderboard.

use simon_session::{LeaderboardApi, LeaderboardView, EMPTY_LEADERBOARD_MESSAGE};

use crate::container::GameContainer;

pub async fn run(container: &GameContainer) -> String {
    render(&container.score_keeper().load_leaderboard().await)
}

pub fn render(view: &LeaderboardView) -> String {
    match view {
        LeaderboardView::Empty => EMPTY_LEADERBOARD_MESSAGE.to_string(),
        LeaderboardView::Ranked(rows) => {
            let name_width = rows
                .iter()
                .map(|r| r.name.chars().count())
                .max()
                .unwrap_or(0)
                .max(4);
            let mut out = format!(
                "{:>3}  {:<width$}  {:>5}  {}\n",
                "#",
                "Name",
                "Score",
                "Date",
                width = name_width
            );
            for row in rows {
                out.push_str(&format!(
                    "{:>3}  {:<width$}  {:>5}  {}\n",
                    row.position,
                    row.name,
                    row.score,
                    row.date,
                    width = name_width
                ));
            }
            out
        }
    }
}
