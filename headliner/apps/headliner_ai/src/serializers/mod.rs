pub mod headline_rewrite;
