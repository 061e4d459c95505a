use rand::rngs::OsRng;

use crate::door::Door;
use crate::errors::DoorError;
use crate::rng::DoorRng;

/// The door that is neither `a` nor `b`.
///
/// Door numbers sum to 6, so the third one is `6 - a - b`. `a` and `b` must
/// differ; equal doors leave two candidates and this returns neither.
pub fn remaining_door(a: Door, b: Door) -> Door {
    debug_assert_ne!(a, b, "remaining_door needs two distinct doors");
    match 6 - a.number() - b.number() {
        1 => Door::One,
        2 => Door::Two,
        _ => Door::Three,
    }
}

/// Chooses the door the host reveals.
///
/// The opened door is never the player's door and never the prize. When the
/// player already holds the prize the host picks one of the other two doors
/// with equal probability; otherwise the choice is forced and `rng` is not
/// consulted.
///
/// # Errors
///
/// Returns [`DoorError::Entropy`] if the host has a free choice and `rng`
/// fails.
///
/// # Examples
///
/// ```
/// use montyhall_engine::{open_door, Door, DoorSource};
///
/// let mut src = DoorSource::seeded(1);
/// assert_eq!(open_door(Door::One, Door::Two, &mut src), Ok(Door::Three));
///
/// let opened = open_door(Door::Two, Door::Two, &mut src).unwrap();
/// assert_ne!(opened, Door::Two);
/// ```
pub fn open_door<R: DoorRng + ?Sized>(
    chosen: Door,
    winning: Door,
    rng: &mut R,
) -> Result<Door, DoorError> {
    let forced = chosen != winning;
    let opened = if forced {
        remaining_door(chosen, winning)
    } else {
        let candidates = chosen.others();
        candidates[rng.try_index(2)? as usize]
    };
    tracing::debug!(
        chosen = chosen.number(),
        winning = winning.number(),
        opened = opened.number(),
        forced,
        "host opened door"
    );
    Ok(opened)
}

/// [`open_door`] backed by the operating-system CSPRNG.
pub fn open_door_os(chosen: Door, winning: Door) -> Result<Door, DoorError> {
    open_door(chosen, winning, &mut OsRng)
}
