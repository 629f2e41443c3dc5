pub(crate) mod gallery;
pub(crate) mod shell;
pub(crate) mod sidebar;
pub(crate) mod top_nav;
pub(crate) mod viewport;
