pub(crate) mod anim;
pub(crate) mod ease;
pub(crate) mod interp;
pub mod presets;
pub mod text;
pub(crate) mod timing;
