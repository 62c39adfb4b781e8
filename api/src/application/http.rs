pub mod health;
pub mod server;
pub mod suitability;

#[cfg(test)]
pub mod test;
