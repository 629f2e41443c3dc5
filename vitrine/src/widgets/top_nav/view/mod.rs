pub(crate) mod floating_nav;
