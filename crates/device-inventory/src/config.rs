mod constants;
mod defaults;
mod env;
mod file;
mod load;
mod paths;
mod types;
mod util;

pub use types::InventoryConfig;

#[cfg(test)]
mod tests;
