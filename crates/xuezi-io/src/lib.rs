pub mod audio;

pub use audio::{Clip, HttpAudioPlayer};
