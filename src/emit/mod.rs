pub(crate) mod line;
pub(crate) mod params;
pub(crate) mod script;
