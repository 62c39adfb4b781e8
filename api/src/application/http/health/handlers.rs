pub mod get_readiness;
