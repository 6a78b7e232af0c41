pub(crate) mod strip;
pub(crate) mod surface;
