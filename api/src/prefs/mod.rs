pub mod column;
pub mod table_prefs;
