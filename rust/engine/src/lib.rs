//! # montyhall-engine: Monty Hall Puzzle Core
//!
//! Three doors, one prize. The player picks a door, the host opens a
//! different door that hides nothing, and the player either stays or
//! switches. This crate provides the three building blocks of a round and
//! nothing else: there is no game loop and no statistics layer.
//!
//! ## Core Modules
//!
//! - [`door`] - The [`Door`] value type (doors 1, 2 and 3)
//! - [`picker`] - Uniformly random choice of the winning door
//! - [`host`] - Which door the host reveals
//! - [`outcome`] - Whether the player wins after staying or switching
//! - [`rng`] - The injected randomness capability and built-in sources
//! - [`config`] - Environment and TOML selection of the randomness source
//! - [`errors`] - Error types
//!
//! ## Quick Start
//!
//! ```rust
//! use montyhall_engine::{does_player_win, open_door, winning_door, Door, DoorSource};
//!
//! let mut src = DoorSource::seeded(2024);
//! let prize = winning_door(&mut src).unwrap();
//! let pick = Door::One;
//! let opened = open_door(pick, prize, &mut src).unwrap();
//! assert_ne!(opened, pick);
//! assert_ne!(opened, prize);
//!
//! // Switching wins exactly when the first pick was wrong
//! assert_eq!(does_player_win(prize, pick, true), pick != prize);
//! ```
//!
//! ## Randomness
//!
//! By default draws come from the operating-system CSPRNG. Any `rand`
//! generator can be injected instead, and a seeded ChaCha20 stream makes
//! runs reproducible:
//!
//! ```rust
//! use montyhall_engine::{winning_door, DoorSource};
//!
//! let mut a = DoorSource::seeded(42);
//! let mut b = DoorSource::seeded(42);
//! for _ in 0..10 {
//!     assert_eq!(winning_door(&mut a), winning_door(&mut b));
//! }
//! ```

pub mod config;
pub mod door;
pub mod errors;
pub mod host;
pub mod outcome;
pub mod picker;
pub mod rng;

pub use door::Door;
pub use errors::DoorError;
pub use host::{open_door, open_door_os};
pub use outcome::does_player_win;
pub use picker::{get_winning_door, winning_door};
pub use rng::{DoorRng, DoorSource};
