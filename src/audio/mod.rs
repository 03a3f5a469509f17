pub mod error;
pub mod playback;
pub mod player;
pub mod silent;
pub mod state;
pub mod traits;
pub mod util;

pub use self::player::AudioPlayer;
pub use self::traits::{Transport, TransportEvent};
