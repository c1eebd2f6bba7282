use crate::libs::data_storage::DataStorage;
use crate::libs::source::SourceError;
use rusqlite::Connection;

pub const DB_FILE_NAME: &str = "todostat.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    pub fn new() -> Result<Db, SourceError> {
        Self::open(DB_FILE_NAME)
    }

    /// Opens `file_name` inside the data directory.
    pub fn open(file_name: &str) -> Result<Db, SourceError> {
        let db_file_path = DataStorage::new().get_path(file_name)?;
        let conn = Connection::open(db_file_path)?;

        Ok(Db { conn })
    }
}
