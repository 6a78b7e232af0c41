pub(crate) mod booth;
