//! Adversarial coverage for the strongest bot tier: the cheat bot must never
//! lose, whatever legal sequence the human tries.

use oxo::{PlayerType, Room};

/// Walks every legal human continuation from `room`, letting the cheat bot
/// answer inside `play`, and asserts the human never ends up winning.
fn assert_human_cannot_win(room: &Room) {
    for pos in room.board().free_positions() {
        let mut next = room.clone();
        next.play(pos).unwrap();
        if next.is_over() {
            let human_won = next
                .winner()
                .unwrap()
                .is_some_and(|player| !player.is_bot());
            assert!(
                !human_won,
                "human forced a win against the cheat bot via position {pos}"
            );
        } else {
            assert_human_cannot_win(&next);
        }
    }
}

#[test]
fn cheat_bot_never_loses_from_the_empty_board() {
    let room = Room::new("alice".to_string(), None, PlayerType::CheatBot);
    assert_human_cannot_win(&room);
}

#[test]
fn cheat_bot_never_loses_after_a_center_opening() {
    let mut room = Room::new("alice".to_string(), None, PlayerType::CheatBot);
    room.play(4).unwrap();
    assert!(!room.is_over());
    assert_human_cannot_win(&room);
}

#[test]
fn cheat_bot_wins_when_handed_the_chance() {
    // Human plays two corners and ignores the bot's building line; the bot
    // must convert rather than drift into a draw.
    let mut room = Room::new("alice".to_string(), None, PlayerType::CheatBot);
    room.play(0).unwrap();
    room.play(2).unwrap();
    room.play(6).unwrap();

    // The bot took the center, blocked the top row, and now completes the
    // middle column it was forced into building.
    assert!(room.is_over());
    let winner = room.winner().unwrap().expect("a full line exists");
    assert!(winner.is_bot());
}
