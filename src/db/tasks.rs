use super::db::Db;
use crate::libs::source::SourceError;
use crate::libs::task::{Task, TaskFilter};
use rusqlite::{params, Connection, OptionalExtension, Row};

const SCHEMA_TASKS: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER NOT NULL PRIMARY KEY,
    timestamp TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    title TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    completed INTEGER NOT NULL DEFAULT 0
);";
const INSERT_TASK: &str = "INSERT INTO tasks (timestamp, title, description, completed) VALUES (datetime(CURRENT_TIMESTAMP, 'localtime'), ?1, ?2, ?3)";
const SELECT_TASKS: &str = "SELECT id, timestamp, title, description, completed FROM tasks";
const WHERE_ACTIVE: &str = "WHERE completed = 0";
const WHERE_COMPLETED: &str = "WHERE completed = 1";
const WHERE_ID: &str = "WHERE id = ?1";
const ORDER_BY_ID: &str = "ORDER BY id";
const UPDATE_COMPLETED: &str = "UPDATE tasks SET completed = ?1 WHERE id = ?2";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";
const DELETE_COMPLETED: &str = "DELETE FROM tasks WHERE completed = 1";
const DELETE_ALL: &str = "DELETE FROM tasks";

pub struct Tasks {
    pub conn: Connection,
}

impl Tasks {
    pub fn new() -> Result<Tasks, SourceError> {
        Self::with_db(Db::new()?)
    }

    /// Opens the tasks table in a database file other than the default one.
    pub fn open(file_name: &str) -> Result<Tasks, SourceError> {
        Self::with_db(Db::open(file_name)?)
    }

    fn with_db(db: Db) -> Result<Tasks, SourceError> {
        db.conn.execute(SCHEMA_TASKS, [])?;

        Ok(Tasks { conn: db.conn })
    }

    /// Inserts `task` and returns its new id.
    pub fn insert(&mut self, task: &Task) -> Result<i32, SourceError> {
        self.conn.execute(INSERT_TASK, params![task.title, task.description, task.completed])?;

        Ok(self.conn.last_insert_rowid() as i32)
    }

    pub fn fetch(&mut self, filter: TaskFilter) -> Result<Vec<Task>, SourceError> {
        let query = match filter {
            TaskFilter::All => format!("{} {}", SELECT_TASKS, ORDER_BY_ID),
            TaskFilter::Active => format!("{} {} {}", SELECT_TASKS, WHERE_ACTIVE, ORDER_BY_ID),
            TaskFilter::Completed => format!("{} {} {}", SELECT_TASKS, WHERE_COMPLETED, ORDER_BY_ID),
        };

        let mut stmt = self.conn.prepare(&query)?;
        let task_iter = stmt.query_map([], Self::map_row)?;
        let mut tasks = Vec::new();
        for task_result in task_iter {
            tasks.push(task_result?);
        }

        Ok(tasks)
    }

    pub fn get_by_id(&mut self, id: i32) -> Result<Option<Task>, SourceError> {
        let task = self
            .conn
            .query_row(&format!("{} {}", SELECT_TASKS, WHERE_ID), [id], Self::map_row)
            .optional()?;

        Ok(task)
    }

    /// Marks a task completed. Returns the number of rows touched.
    pub fn complete(&mut self, id: i32) -> Result<usize, SourceError> {
        Ok(self.conn.execute(UPDATE_COMPLETED, params![true, id])?)
    }

    /// Marks a task active again. Returns the number of rows touched.
    pub fn activate(&mut self, id: i32) -> Result<usize, SourceError> {
        Ok(self.conn.execute(UPDATE_COMPLETED, params![false, id])?)
    }

    pub fn delete(&mut self, id: i32) -> Result<usize, SourceError> {
        Ok(self.conn.execute(DELETE_TASK, [id])?)
    }

    pub fn clear_completed(&mut self) -> Result<usize, SourceError> {
        Ok(self.conn.execute(DELETE_COMPLETED, [])?)
    }

    pub fn delete_all(&mut self) -> Result<usize, SourceError> {
        Ok(self.conn.execute(DELETE_ALL, [])?)
    }

    fn map_row(row: &Row) -> rusqlite::Result<Task> {
        Ok(Task {
            id: row.get(0)?,
            timestamp: row.get(1)?,
            title: row.get(2)?,
            description: row.get(3)?,
            completed: row.get(4)?,
        })
    }
}
