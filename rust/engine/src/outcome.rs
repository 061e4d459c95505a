use crate::door::Door;

/// Whether the player ends up behind the prize.
///
/// With three doors and one already opened, switching always lands on the
/// single other closed door, so a switching player wins exactly when their
/// original pick was wrong.
///
/// ```
/// use montyhall_engine::{does_player_win, Door};
///
/// assert!(does_player_win(Door::One, Door::Two, true));
/// assert!(!does_player_win(Door::One, Door::One, true));
/// assert!(does_player_win(Door::Three, Door::Three, false));
/// ```
pub fn does_player_win(winning: Door, player: Door, switches: bool) -> bool {
    if switches {
        player != winning
    } else {
        player == winning
    }
}
