pub(crate) mod action;
pub(crate) mod model;
pub(crate) mod modes;
pub(crate) mod params;
