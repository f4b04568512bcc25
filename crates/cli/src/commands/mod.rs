//! CLI command implementations.

pub mod admin;
pub mod seed;

use boles_storefront::config::StorefrontConfig;
use boles_storefront::db::Db;

/// Build a data-access facade from the environment, refusing mock mode.
pub fn configured_db() -> Result<Db, Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    let db = Db::new(config.supabase.as_ref());
    if !db.is_configured() {
        return Err("SUPABASE_URL and SUPABASE_SERVICE_ROLE_KEY must be set".into());
    }
    Ok(db)
}
