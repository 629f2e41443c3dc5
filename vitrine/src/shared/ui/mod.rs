pub(crate) mod fonts;
pub(crate) mod icons;
pub(crate) mod style;
pub(crate) mod theme;
pub(crate) mod tokens;
