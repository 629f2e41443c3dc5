pub(crate) mod gallery;
pub(crate) mod overview;
pub(crate) mod shell;
pub(crate) mod sidebar;
pub(crate) mod top_nav;
pub(crate) mod viewport;
pub(crate) mod window;
