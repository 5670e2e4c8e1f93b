/*-------------------------------------------------------------------------------------------------
  Core Modules
-------------------------------------------------------------------------------------------------*/

pub mod candidate;
pub mod checker;
pub mod client;
pub mod config;
pub mod errors;
pub mod inventory;
pub mod json;
pub mod scanner;
