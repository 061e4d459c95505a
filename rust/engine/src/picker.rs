use rand::rngs::OsRng;

use crate::door::Door;
use crate::errors::DoorError;
use crate::rng::DoorRng;

/// Hides the prize behind a uniformly random door.
///
/// # Errors
///
/// Returns [`DoorError::Entropy`] if `rng` cannot produce a value.
///
/// # Examples
///
/// ```
/// use montyhall_engine::{winning_door, Door, DoorSource};
///
/// let mut src = DoorSource::seeded(42);
/// let door = winning_door(&mut src).expect("seeded source never fails");
/// assert!(Door::ALL.contains(&door));
/// ```
pub fn winning_door<R: DoorRng + ?Sized>(rng: &mut R) -> Result<Door, DoorError> {
    let idx = rng.try_index(3)?;
    let door = Door::ALL[idx as usize];
    tracing::trace!(door = door.number(), "winning door drawn");
    Ok(door)
}

/// [`winning_door`] backed by the operating-system CSPRNG.
pub fn get_winning_door() -> Result<Door, DoorError> {
    winning_door(&mut OsRng)
}
