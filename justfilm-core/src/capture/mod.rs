pub(crate) mod sequencer;
pub(crate) mod shutter;
pub(crate) mod snapshot;
pub(crate) mod source;
