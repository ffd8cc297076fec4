//! Overlay text

use arcade_core::game::HudState;

/// Message shown once every pickup has been collected
pub const VICTORY_MESSAGE: &str =
    "Congratulations!\nYou have collected all the diamonds and won the game!\nPress R to restart the game.";

/// Lines the overlay should display for this frame
pub fn overlay_lines(hud: &HudState) -> Vec<String> {
    let mut lines = vec![format!("Score: {}", hud.score)];
    if hud.is_game_over {
        lines.extend(VICTORY_MESSAGE.lines().map(str::to_string));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_only_while_playing() {
        let lines = overlay_lines(&HudState { score: 2, is_game_over: false });
        assert_eq!(lines, vec!["Score: 2".to_string()]);
    }

    #[test]
    fn test_victory_message_after_win() {
        let lines = overlay_lines(&HudState { score: 3, is_game_over: true });
        assert_eq!(lines[0], "Score: 3");
        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("Congratulations"));
    }
}
