pub mod cms;
pub mod health;
pub mod site;
