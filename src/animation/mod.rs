//! Animation sink: the eye renderer the personality drives.

pub mod eyes;

pub use eyes::LoggedEyes;

use crate::personality::Mood;

/// What the personality controller and scheduler may ask of the renderer.
/// Rendering state behind it is opaque to the caller.
pub trait AnimationSink {
    fn set_mood(&mut self, mood: Mood);
    fn set_curiosity(&mut self, on: bool);
    /// Advance one rendering frame. Called every loop iteration.
    fn update_frame(&mut self);
}

impl<S: AnimationSink + ?Sized> AnimationSink for &mut S {
    fn set_mood(&mut self, mood: Mood) {
        (**self).set_mood(mood)
    }

    fn set_curiosity(&mut self, on: bool) {
        (**self).set_curiosity(on)
    }

    fn update_frame(&mut self) {
        (**self).update_frame()
    }
}
